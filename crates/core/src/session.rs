//! The client-held session state machine
//!
//! One `SessionStore` is created at app startup and handed to the provider
//! layer and the route guard; there is no ambient global. The store owns the
//! identity/token pair and the persistence slot, brackets every suspending
//! operation with the loading signal, and fences async completions with a
//! generation counter so a result that lost a race with `logout` is
//! discarded instead of resurrecting the session.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::auth::{AuthApi, AuthPayload, LoginRequest, SignupRequest};
use crate::error::{AuthError, AuthResult};
use crate::identity::{ActiveSession, Identity, IdentityPatch};
use crate::loading::{LoadingSignal, messages};
use crate::vault::{SessionVault, Tier, keys};

/// Point-in-time view for UI consumption.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub identity: Option<Identity>,
    /// True until [`SessionStore::initialize`] has settled. Guards defer
    /// their decision while this is set.
    pub loading: bool,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

struct SessionInner {
    api: Rc<dyn AuthApi>,
    vault: Rc<dyn SessionVault>,
    loading: LoadingSignal,
    session: RefCell<Option<ActiveSession>>,
    /// Tier currently holding the persisted session.
    tier: Cell<Option<Tier>>,
    /// The store's own loading flag; true until the initial restore settles.
    restoring: Cell<bool>,
    /// Bumped by logout and by every applied install. An async completion
    /// whose captured generation no longer matches is stale.
    generation: Cell<u64>,
    on_change: RefCell<Option<Rc<dyn Fn()>>>,
}

/// Cheap-to-clone handle to the session state machine.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<SessionInner>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionStore {
    pub fn new(
        api: Rc<dyn AuthApi>,
        vault: Rc<dyn SessionVault>,
        loading: LoadingSignal,
    ) -> Self {
        Self {
            inner: Rc::new(SessionInner {
                api,
                vault,
                loading,
                session: RefCell::new(None),
                tier: Cell::new(None),
                restoring: Cell::new(true),
                generation: Cell::new(0),
                on_change: RefCell::new(None),
            }),
        }
    }

    /// Restore a persisted session, if any. Runs once at startup; the
    /// snapshot's `loading` flag stays true until this settles, whatever the
    /// outcome.
    pub fn initialize(&self) {
        let _busy = self.inner.loading.begin(messages::VERIFYING_AUTH);
        match self.restore() {
            Some((session, tier)) => {
                tracing::debug!(?tier, user = %session.identity.email, "restored session");
                *self.inner.session.borrow_mut() = Some(session);
                self.inner.tier.set(Some(tier));
            }
            None => {
                *self.inner.session.borrow_mut() = None;
                self.inner.tier.set(None);
            }
        }
        self.inner.restoring.set(false);
        self.notify();
    }

    /// Sign in. The session is persisted to the remembered tier when
    /// `remember_me` is set, otherwise to the ephemeral tier; the other tier
    /// is cleared so exactly one holds a session.
    pub async fn login(
        &self,
        email: String,
        password: String,
        remember_me: bool,
    ) -> AuthResult<Identity> {
        let generation = self.inner.generation.get();
        let _busy = self.inner.loading.begin(messages::SIGNING_IN);
        let payload = self.inner.api.login(LoginRequest { email, password }).await?;
        let tier = if remember_me {
            Tier::Remembered
        } else {
            Tier::Ephemeral
        };
        self.install(&payload, tier, generation);
        Ok(payload.identity)
    }

    /// Create an account and sign in. New accounts always persist to the
    /// remembered tier. The returned payload carries the
    /// email-verification flag for the signup page.
    pub async fn signup(&self, request: SignupRequest) -> AuthResult<AuthPayload> {
        let generation = self.inner.generation.get();
        let _busy = self.inner.loading.begin(messages::CREATING_ACCOUNT);
        let payload = self.inner.api.signup(request).await?;
        self.install(&payload, Tier::Remembered, generation);
        Ok(payload)
    }

    /// Sign out. Synchronous, idempotent, and a fence: both tiers are purged
    /// and any in-flight operation's result is discarded when it lands.
    pub fn logout(&self) {
        self.inner.generation.set(self.inner.generation.get() + 1);
        self.purge_all();
        self.inner.tier.set(None);
        if self.inner.session.borrow_mut().take().is_some() {
            tracing::debug!("session cleared");
        }
        self.notify();
    }

    /// Push profile changes through the backend and refresh the stored
    /// identity, re-persisting to the tier the session came from.
    pub async fn update_user(&self, patch: IdentityPatch) -> AuthResult<Identity> {
        let token = self
            .inner
            .session
            .borrow()
            .as_ref()
            .map(|session| session.token.clone())
            .ok_or(AuthError::NotAuthenticated)?;
        let generation = self.inner.generation.get();
        let _busy = self.inner.loading.begin(messages::UPDATING_PROFILE);
        let identity = self.inner.api.update_profile(&token, patch).await?;
        if self.inner.generation.get() != generation {
            tracing::debug!("discarding stale profile update");
            return Ok(identity);
        }
        let Some(tier) = self.inner.tier.get() else {
            return Err(AuthError::NotAuthenticated);
        };
        // The persisted token is the proof the session is still live. If it
        // vanished (storage cleared from outside), sign out rather than
        // resurrect it from memory.
        if self.inner.vault.get(tier, keys::AUTH_TOKEN).is_none() {
            tracing::warn!("persisted token gone during profile update, signing out");
            self.logout();
            return Err(AuthError::NotAuthenticated);
        }
        let Some(mut session) = self.inner.session.borrow().clone() else {
            return Err(AuthError::NotAuthenticated);
        };
        session.identity = identity.clone();
        self.persist(&session, tier);
        *self.inner.session.borrow_mut() = Some(session);
        self.notify();
        Ok(identity)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            identity: self.identity(),
            loading: self.inner.restoring.get(),
        }
    }

    pub fn identity(&self) -> Option<Identity> {
        self.inner
            .session
            .borrow()
            .as_ref()
            .map(|session| session.identity.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.session.borrow().is_some()
    }

    /// The store's own loading flag: true until `initialize` has settled.
    pub fn is_loading(&self) -> bool {
        self.inner.restoring.get()
    }

    /// Install the single observer. The UI provider owns this slot; a second
    /// call replaces the first.
    pub fn set_on_change(&self, callback: impl Fn() + 'static) {
        *self.inner.on_change.borrow_mut() = Some(Rc::new(callback));
    }

    pub fn clear_on_change(&self) {
        self.inner.on_change.borrow_mut().take();
    }

    /// Apply a completed login/signup unless a logout or newer install won
    /// the race. Storage is written before the in-memory state so an
    /// observer never sees a session that is not yet persisted.
    fn install(&self, payload: &AuthPayload, tier: Tier, generation: u64) {
        if self.inner.generation.get() != generation {
            tracing::debug!("discarding stale auth result");
            return;
        }
        self.inner.generation.set(generation + 1);
        let session = ActiveSession {
            token: payload.token.clone(),
            identity: payload.identity.clone(),
        };
        self.persist(&session, tier);
        *self.inner.session.borrow_mut() = Some(session);
        self.notify();
    }

    /// Remembered tier first, then ephemeral. A token without a decodable
    /// identity (or one with an empty id) means storage is corrupt: purge
    /// both tiers and report nothing to restore.
    fn restore(&self) -> Option<(ActiveSession, Tier)> {
        for tier in Tier::BOTH {
            let Some(token) = self.inner.vault.get(tier, keys::AUTH_TOKEN) else {
                continue;
            };
            let identity = self
                .inner
                .vault
                .get(tier, keys::USER_DATA)
                .and_then(|raw| serde_json::from_str::<Identity>(&raw).ok())
                .filter(|identity| !identity.id.is_empty());
            match identity {
                Some(identity) => return Some((ActiveSession { token, identity }, tier)),
                None => {
                    tracing::warn!(?tier, "clearing corrupt persisted session");
                    self.purge_all();
                    return None;
                }
            }
        }
        None
    }

    fn persist(&self, session: &ActiveSession, tier: Tier) {
        self.purge_all();
        self.inner.vault.set(tier, keys::AUTH_TOKEN, &session.token);
        if let Ok(encoded) = serde_json::to_string(&session.identity) {
            self.inner.vault.set(tier, keys::USER_DATA, &encoded);
        }
        self.inner.tier.set(Some(tier));
    }

    fn purge_all(&self) {
        for tier in Tier::BOTH {
            self.inner.vault.remove(tier, keys::AUTH_TOKEN);
            self.inner.vault.remove(tier, keys::USER_DATA);
        }
    }

    fn notify(&self) {
        // Clone out of the borrow first: the callback reads the store.
        let callback = self.inner.on_change.borrow().clone();
        if let Some(callback) = callback {
            callback();
        }
    }
}
