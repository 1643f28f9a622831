//! Reusable fakes for session tests
//!
//! `MemoryVault` behaves like the browser storage pair without a browser;
//! `StubAuthApi` resolves instantly from a script, with an optional gate so
//! a test can hold a login open and race it against other operations.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::auth::{AuthApi, AuthPayload, LoginRequest, SignupRequest};
use crate::error::{AuthError, AuthResult};
use crate::identity::{Identity, IdentityPatch, Role};
use crate::vault::{SessionVault, Tier};

/// Canned test data
pub mod fixtures {
    use super::*;

    pub fn create_test_identity() -> Identity {
        Identity {
            id: "user-1".to_string(),
            first_name: "Amina".to_string(),
            last_name: "Odhiambo".to_string(),
            email: "amina@techpoa.com".to_string(),
            role: Role::Student,
            avatar_url: None,
        }
    }

    pub fn create_test_payload() -> AuthPayload {
        AuthPayload {
            token: "token-1".to_string(),
            identity: create_test_identity(),
            verification_required: false,
        }
    }

    pub fn create_test_signup() -> SignupRequest {
        SignupRequest {
            first_name: "Brian".to_string(),
            last_name: "Mwangi".to_string(),
            email: "brian@techpoa.com".to_string(),
            password: "hunter2!".to_string(),
            role: Role::Developer,
        }
    }
}

/// In-memory `SessionVault` with the same two-tier shape as browser storage.
///
/// Share one instance between two stores to simulate a page reload: the
/// second store restores whatever the first persisted.
#[derive(Default)]
pub struct MemoryVault {
    remembered: RefCell<HashMap<String, String>>,
    ephemeral: RefCell<HashMap<String, String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when neither tier holds any keys.
    pub fn is_empty(&self) -> bool {
        self.remembered.borrow().is_empty() && self.ephemeral.borrow().is_empty()
    }

    fn map(&self, tier: Tier) -> &RefCell<HashMap<String, String>> {
        match tier {
            Tier::Remembered => &self.remembered,
            Tier::Ephemeral => &self.ephemeral,
        }
    }
}

impl SessionVault for MemoryVault {
    fn get(&self, tier: Tier, key: &str) -> Option<String> {
        self.map(tier).borrow().get(key).cloned()
    }

    fn set(&self, tier: Tier, key: &str, value: &str) {
        self.map(tier)
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, tier: Tier, key: &str) {
        self.map(tier).borrow_mut().remove(key);
    }
}

/// Scripted `AuthApi` that never sleeps.
///
/// Login, signup and profile updates answer from a canned payload; each can
/// be primed to fail exactly once. `gate_next_login` parks the next login
/// until the returned sender fires (or drops), which is how the
/// login-versus-logout race is tested deterministically.
pub struct StubAuthApi {
    payload: RefCell<AuthPayload>,
    login_error: RefCell<Option<AuthError>>,
    signup_error: RefCell<Option<AuthError>>,
    update_error: RefCell<Option<AuthError>>,
    login_gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl StubAuthApi {
    pub fn new() -> Self {
        Self::with_payload(fixtures::create_test_payload())
    }

    pub fn with_payload(payload: AuthPayload) -> Self {
        Self {
            payload: RefCell::new(payload),
            login_error: RefCell::new(None),
            signup_error: RefCell::new(None),
            update_error: RefCell::new(None),
            login_gate: RefCell::new(None),
        }
    }

    /// The identity successful calls currently hand out.
    pub fn identity(&self) -> Identity {
        self.payload.borrow().identity.clone()
    }

    pub fn fail_next_login(&self, error: AuthError) {
        *self.login_error.borrow_mut() = Some(error);
    }

    pub fn fail_next_signup(&self, error: AuthError) {
        *self.signup_error.borrow_mut() = Some(error);
    }

    pub fn fail_next_update(&self, error: AuthError) {
        *self.update_error.borrow_mut() = Some(error);
    }

    /// Park the next login until the returned sender fires or drops.
    pub fn gate_next_login(&self) -> oneshot::Sender<()> {
        let (sender, receiver) = oneshot::channel();
        *self.login_gate.borrow_mut() = Some(receiver);
        sender
    }
}

impl Default for StubAuthApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl AuthApi for StubAuthApi {
    async fn login(&self, _request: LoginRequest) -> AuthResult<AuthPayload> {
        let gate = self.login_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if let Some(error) = self.login_error.borrow_mut().take() {
            return Err(error);
        }
        Ok(self.payload.borrow().clone())
    }

    async fn signup(&self, request: SignupRequest) -> AuthResult<AuthPayload> {
        if let Some(error) = self.signup_error.borrow_mut().take() {
            return Err(error);
        }
        let token = self.payload.borrow().token.clone();
        Ok(AuthPayload {
            token,
            identity: Identity {
                id: "user-new".to_string(),
                first_name: request.first_name,
                last_name: request.last_name,
                email: request.email,
                role: request.role,
                avatar_url: None,
            },
            verification_required: true,
        })
    }

    async fn forgot_password(&self, _email: &str) -> AuthResult<()> {
        Ok(())
    }

    async fn reset_password(&self, _token: &str, _new_password: &str) -> AuthResult<()> {
        Ok(())
    }

    async fn verify_email(&self, _token: &str) -> AuthResult<()> {
        Ok(())
    }

    async fn resend_verification(&self, _email: &str) -> AuthResult<()> {
        Ok(())
    }

    async fn update_profile(&self, _token: &str, patch: IdentityPatch) -> AuthResult<Identity> {
        if let Some(error) = self.update_error.borrow_mut().take() {
            return Err(error);
        }
        let mut payload = self.payload.borrow_mut();
        payload.identity.merge(&patch);
        Ok(payload.identity.clone())
    }
}

/// Compliance suite for `SessionVault` implementations
///
/// `MemoryVault` runs it natively below; the browser vault runs the same
/// suite under wasm-bindgen-test.
pub struct SessionVaultTestSuite<V: SessionVault> {
    vault: V,
}

impl<V: SessionVault> SessionVaultTestSuite<V> {
    pub fn new(vault: V) -> Self {
        Self { vault }
    }

    /// Run all tests
    pub fn run_all(&self) {
        self.test_round_trip();
        self.test_tier_isolation();
        self.test_overwrite();
        self.test_remove();
    }

    pub fn test_round_trip(&self) {
        for tier in Tier::BOTH {
            self.vault.set(tier, "suite-key", "value-1");
            assert_eq!(
                self.vault.get(tier, "suite-key"),
                Some("value-1".to_string()),
                "value should survive a round trip"
            );
            self.vault.remove(tier, "suite-key");
        }
    }

    pub fn test_tier_isolation(&self) {
        self.vault.set(Tier::Remembered, "suite-iso", "remembered");
        assert_eq!(self.vault.get(Tier::Ephemeral, "suite-iso"), None);
        self.vault.set(Tier::Ephemeral, "suite-iso", "ephemeral");
        assert_eq!(
            self.vault.get(Tier::Remembered, "suite-iso"),
            Some("remembered".to_string())
        );
        self.vault.remove(Tier::Remembered, "suite-iso");
        self.vault.remove(Tier::Ephemeral, "suite-iso");
    }

    pub fn test_overwrite(&self) {
        self.vault.set(Tier::Remembered, "suite-ow", "first");
        self.vault.set(Tier::Remembered, "suite-ow", "second");
        assert_eq!(
            self.vault.get(Tier::Remembered, "suite-ow"),
            Some("second".to_string())
        );
        self.vault.remove(Tier::Remembered, "suite-ow");
    }

    pub fn test_remove(&self) {
        self.vault.set(Tier::Remembered, "suite-rm", "x");
        self.vault.remove(Tier::Remembered, "suite-rm");
        assert_eq!(self.vault.get(Tier::Remembered, "suite-rm"), None);
        // Removing a missing key is a no-op
        self.vault.remove(Tier::Remembered, "suite-rm");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_vault_compliance() {
        let suite = SessionVaultTestSuite::new(MemoryVault::new());
        suite.run_all();
    }
}
