//! The remote authentication boundary
//!
//! Everything the session store needs from the backend, behind one trait so
//! the UI runs against the simulated client today and a real one later
//! without touching the store. Futures are `?Send`: this trait is consumed
//! on the browser main thread or a current-thread test runtime.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AuthResult;
use crate::identity::{Identity, IdentityPatch, Role};

/// Credentials for [`AuthApi::login`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// New-account details for [`AuthApi::signup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Token and identity minted by a successful login or signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub token: String,
    pub identity: Identity,
    /// Set on signup when the account still needs email verification.
    #[serde(default)]
    pub verification_required: bool,
}

/// Session-facing slice of the remote API.
///
/// Calls suspend and may fail; nothing here retries. Password-reset and
/// verification endpoints do not touch the session, so they return no
/// payload.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: LoginRequest) -> AuthResult<AuthPayload>;
    async fn signup(&self, request: SignupRequest) -> AuthResult<AuthPayload>;
    async fn forgot_password(&self, email: &str) -> AuthResult<()>;
    async fn reset_password(&self, token: &str, new_password: &str) -> AuthResult<()>;
    async fn verify_email(&self, token: &str) -> AuthResult<()>;
    async fn resend_verification(&self, email: &str) -> AuthResult<()>;
    /// Authenticated profile round trip; returns the refreshed identity.
    async fn update_profile(&self, token: &str, patch: IdentityPatch) -> AuthResult<Identity>;
}
