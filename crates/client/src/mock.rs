//! Simulated auth backend
//!
//! Stands in for the real TechPoa API while it is under construction. Every
//! call waits out a configurable latency so loading states stay visible
//! during development, reserved addresses trigger the documented failures,
//! and minted sessions live in an in-memory token map so profile updates can
//! validate their token. Sessions restored from an earlier page load are
//! unknown to a fresh mock; a profile update then reports
//! `NotAuthenticated` and the store falls back to signed-out.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use techpoa_core::auth::{AuthApi, AuthPayload, LoginRequest, SignupRequest};
use techpoa_core::error::{AuthError, AuthResult};
use techpoa_core::identity::{Identity, IdentityPatch, Role};

/// Login with this address always fails with `InvalidCredentials`.
pub const LOGIN_REJECT_EMAIL: &str = "error@example.com";
/// Signup with this address always fails with `EmailAlreadyRegistered`.
pub const SIGNUP_CONFLICT_EMAIL: &str = "exists@example.com";
/// Reset/verify with this token always fails with `InvalidOrExpiredToken`.
pub const EXPIRED_TOKEN: &str = "expired";

/// In-memory stand-in for the auth backend.
pub struct MockAuthClient {
    latency: Duration,
    offline: Cell<bool>,
    sessions: RefCell<HashMap<String, Identity>>,
}

impl MockAuthClient {
    /// A mock that answers after `latency` on every call.
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            offline: Cell::new(false),
            sessions: RefCell::new(HashMap::new()),
        }
    }

    /// Zero-latency mock; skips the timer entirely, so tests never sleep.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Toggle simulated connectivity. While offline every call fails with
    /// `AuthError::Transport`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    async fn simulate_latency(&self) {
        if self.latency.is_zero() {
            return;
        }
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(self.latency).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(self.latency).await;
    }

    fn check_online(&self) -> AuthResult<()> {
        if self.offline.get() {
            return Err(AuthError::transport("simulated network failure"));
        }
        Ok(())
    }

    fn mint_token() -> String {
        format!("tp-{}", Uuid::new_v4())
    }

    fn open_session(&self, identity: Identity) -> (String, Identity) {
        let token = Self::mint_token();
        self.sessions
            .borrow_mut()
            .insert(token.clone(), identity.clone());
        (token, identity)
    }

    /// Capitalized local part of the address, for a plausible display name.
    fn name_from_email(email: &str) -> String {
        let local = email.split('@').next().unwrap_or_default();
        let mut chars = local.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => "Member".to_string(),
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for MockAuthClient {
    async fn login(&self, request: LoginRequest) -> AuthResult<AuthPayload> {
        self.simulate_latency().await;
        self.check_online()?;
        if request.email.eq_ignore_ascii_case(LOGIN_REJECT_EMAIL) {
            tracing::debug!("rejecting sentinel login address");
            return Err(AuthError::InvalidCredentials);
        }
        let (token, identity) = self.open_session(Identity {
            id: format!("user-{}", Uuid::new_v4()),
            first_name: Self::name_from_email(&request.email),
            last_name: "User".to_string(),
            email: request.email,
            role: Role::Student,
            avatar_url: None,
        });
        Ok(AuthPayload {
            token,
            identity,
            verification_required: false,
        })
    }

    async fn signup(&self, request: SignupRequest) -> AuthResult<AuthPayload> {
        self.simulate_latency().await;
        self.check_online()?;
        if request.email.eq_ignore_ascii_case(SIGNUP_CONFLICT_EMAIL) {
            tracing::debug!("rejecting sentinel signup address");
            return Err(AuthError::EmailAlreadyRegistered);
        }
        let (token, identity) = self.open_session(Identity {
            id: format!("user-{}", Uuid::new_v4()),
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            role: request.role,
            avatar_url: None,
        });
        Ok(AuthPayload {
            token,
            identity,
            verification_required: true,
        })
    }

    async fn forgot_password(&self, _email: &str) -> AuthResult<()> {
        self.simulate_latency().await;
        // Always acknowledged; the real backend does not reveal whether the
        // address exists.
        self.check_online()
    }

    async fn reset_password(&self, token: &str, _new_password: &str) -> AuthResult<()> {
        self.simulate_latency().await;
        self.check_online()?;
        if token == EXPIRED_TOKEN {
            return Err(AuthError::InvalidOrExpiredToken);
        }
        Ok(())
    }

    async fn verify_email(&self, token: &str) -> AuthResult<()> {
        self.simulate_latency().await;
        self.check_online()?;
        if token == EXPIRED_TOKEN {
            return Err(AuthError::InvalidOrExpiredToken);
        }
        Ok(())
    }

    async fn resend_verification(&self, _email: &str) -> AuthResult<()> {
        self.simulate_latency().await;
        self.check_online()
    }

    async fn update_profile(&self, token: &str, patch: IdentityPatch) -> AuthResult<Identity> {
        self.simulate_latency().await;
        self.check_online()?;
        let mut sessions = self.sessions.borrow_mut();
        let identity = sessions.get_mut(token).ok_or(AuthError::NotAuthenticated)?;
        identity.merge(&patch);
        Ok(identity.clone())
    }
}
