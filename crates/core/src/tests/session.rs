//! Session store behavior tests
//!
//! Everything runs on a current-thread runtime with the instant stub API,
//! so there are no timers anywhere and the race tests are deterministic.

use std::cell::Cell;
use std::rc::Rc;

use super::support::{MemoryVault, StubAuthApi, fixtures};
use crate::error::AuthError;
use crate::identity::{Identity, IdentityPatch};
use crate::loading::{LoadingSignal, messages};
use crate::session::SessionStore;
use crate::vault::{SessionVault, Tier, keys};

fn new_store(api: &Rc<StubAuthApi>, vault: &Rc<MemoryVault>) -> SessionStore {
    SessionStore::new(api.clone(), vault.clone(), LoadingSignal::new())
}

#[test]
fn test_initialize_with_empty_storage() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let store = new_store(&api, &vault);

    assert!(store.is_loading(), "store starts in its loading state");
    store.initialize();
    assert!(!store.is_loading());
    assert!(!store.is_authenticated());
    assert_eq!(store.identity(), None);
}

#[tokio::test]
async fn test_remembered_login_survives_reload() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let store = new_store(&api, &vault);
    store.initialize();

    let identity = store
        .login("amina@techpoa.com".to_string(), "pw".to_string(), true)
        .await
        .unwrap();
    assert_eq!(identity, api.identity());
    assert!(store.is_authenticated());

    // Remembered tier holds the session, ephemeral stays empty
    assert!(vault.get(Tier::Remembered, keys::AUTH_TOKEN).is_some());
    assert!(vault.get(Tier::Ephemeral, keys::AUTH_TOKEN).is_none());

    // A fresh store over the same storage restores the same identity
    let reloaded = new_store(&api, &vault);
    reloaded.initialize();
    assert_eq!(reloaded.identity(), Some(api.identity()));
}

#[tokio::test]
async fn test_ephemeral_login_stays_out_of_remembered_tier() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let store = new_store(&api, &vault);
    store.initialize();

    store
        .login("amina@techpoa.com".to_string(), "pw".to_string(), false)
        .await
        .unwrap();

    assert!(vault.get(Tier::Ephemeral, keys::AUTH_TOKEN).is_some());
    assert!(vault.get(Tier::Remembered, keys::AUTH_TOKEN).is_none());
    assert!(vault.get(Tier::Remembered, keys::USER_DATA).is_none());
}

#[tokio::test]
async fn test_failed_login_writes_nothing() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let store = new_store(&api, &vault);
    store.initialize();
    api.fail_next_login(AuthError::InvalidCredentials);

    let result = store
        .login("amina@techpoa.com".to_string(), "wrong".to_string(), true)
        .await;

    assert_eq!(result, Err(AuthError::InvalidCredentials));
    assert!(!store.is_authenticated());
    assert!(vault.is_empty());
}

#[test]
fn test_corrupt_user_data_clears_both_tiers() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    vault.set(Tier::Remembered, keys::AUTH_TOKEN, "tok-1");
    vault.set(Tier::Remembered, keys::USER_DATA, "{not json");
    vault.set(Tier::Ephemeral, keys::AUTH_TOKEN, "tok-2");

    let store = new_store(&api, &vault);
    store.initialize();

    assert!(!store.is_authenticated());
    assert!(vault.is_empty(), "recovery purges every session key");
}

#[test]
fn test_identity_with_empty_id_is_corrupt() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let mut identity = fixtures::create_test_identity();
    identity.id = String::new();
    vault.set(Tier::Remembered, keys::AUTH_TOKEN, "tok-1");
    vault.set(
        Tier::Remembered,
        keys::USER_DATA,
        &serde_json::to_string(&identity).unwrap(),
    );

    let store = new_store(&api, &vault);
    store.initialize();

    assert!(!store.is_authenticated());
    assert!(vault.is_empty());
}

#[test]
fn test_token_without_identity_is_corrupt() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    vault.set(Tier::Ephemeral, keys::AUTH_TOKEN, "tok-1");

    let store = new_store(&api, &vault);
    store.initialize();

    assert!(!store.is_authenticated());
    assert!(vault.is_empty());
}

#[test]
fn test_restore_prefers_remembered_tier() {
    // Both tiers populated, e.g. stale data left by an older build. The
    // remembered session wins.
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let remembered = fixtures::create_test_identity();
    let mut ephemeral = fixtures::create_test_identity();
    ephemeral.id = "user-2".to_string();
    vault.set(Tier::Remembered, keys::AUTH_TOKEN, "tok-r");
    vault.set(
        Tier::Remembered,
        keys::USER_DATA,
        &serde_json::to_string(&remembered).unwrap(),
    );
    vault.set(Tier::Ephemeral, keys::AUTH_TOKEN, "tok-e");
    vault.set(
        Tier::Ephemeral,
        keys::USER_DATA,
        &serde_json::to_string(&ephemeral).unwrap(),
    );

    let store = new_store(&api, &vault);
    store.initialize();

    assert_eq!(store.identity().map(|identity| identity.id), Some("user-1".to_string()));
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let store = new_store(&api, &vault);
    store.initialize();
    store
        .login("amina@techpoa.com".to_string(), "pw".to_string(), true)
        .await
        .unwrap();

    store.logout();
    assert!(!store.is_authenticated());
    assert!(vault.is_empty());

    // Second call must be a harmless no-op
    store.logout();
    assert!(!store.is_authenticated());
    assert!(vault.is_empty());
}

#[tokio::test]
async fn test_new_login_replaces_previous_tier() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let store = new_store(&api, &vault);
    store.initialize();

    store
        .login("amina@techpoa.com".to_string(), "pw".to_string(), true)
        .await
        .unwrap();
    store
        .login("amina@techpoa.com".to_string(), "pw".to_string(), false)
        .await
        .unwrap();

    // Exactly one tier holds the session after the second login
    assert!(vault.get(Tier::Remembered, keys::AUTH_TOKEN).is_none());
    assert!(vault.get(Tier::Ephemeral, keys::AUTH_TOKEN).is_some());
    assert!(store.is_authenticated());
}

#[tokio::test]
async fn test_signup_persists_remembered_and_flags_verification() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let store = new_store(&api, &vault);
    store.initialize();

    let payload = store.signup(fixtures::create_test_signup()).await.unwrap();

    assert!(payload.verification_required);
    assert!(store.is_authenticated());
    assert!(vault.get(Tier::Remembered, keys::AUTH_TOKEN).is_some());
    assert_eq!(store.identity().unwrap().email, "brian@techpoa.com");
}

#[tokio::test]
async fn test_signup_conflict_leaves_unauthenticated() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let store = new_store(&api, &vault);
    store.initialize();
    api.fail_next_signup(AuthError::EmailAlreadyRegistered);

    let result = store.signup(fixtures::create_test_signup()).await;

    assert_eq!(result, Err(AuthError::EmailAlreadyRegistered));
    assert!(!store.is_authenticated());
    assert!(vault.is_empty());
}

#[tokio::test]
async fn test_update_user_merges_and_repersists() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let store = new_store(&api, &vault);
    store.initialize();
    store
        .login("amina@techpoa.com".to_string(), "pw".to_string(), true)
        .await
        .unwrap();

    let patch = IdentityPatch {
        first_name: Some("Wanjiru".to_string()),
        ..Default::default()
    };
    let updated = store.update_user(patch).await.unwrap();

    // Patched field changed, everything else retained
    assert_eq!(updated.first_name, "Wanjiru");
    assert_eq!(updated.last_name, "Odhiambo");
    assert_eq!(store.identity(), Some(updated.clone()));

    // And the remembered tier was rewritten in place
    let raw = vault.get(Tier::Remembered, keys::USER_DATA).unwrap();
    let persisted: Identity = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, updated);
}

#[tokio::test]
async fn test_update_user_requires_session() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let store = new_store(&api, &vault);
    store.initialize();

    let result = store.update_user(IdentityPatch::default()).await;

    assert_eq!(result, Err(AuthError::NotAuthenticated));
}

#[tokio::test]
async fn test_update_user_with_cleared_storage_signs_out() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let store = new_store(&api, &vault);
    store.initialize();
    store
        .login("amina@techpoa.com".to_string(), "pw".to_string(), true)
        .await
        .unwrap();

    // Another tab cleared storage out from under us
    vault.remove(Tier::Remembered, keys::AUTH_TOKEN);
    vault.remove(Tier::Remembered, keys::USER_DATA);

    let patch = IdentityPatch {
        first_name: Some("Wanjiru".to_string()),
        ..Default::default()
    };
    let result = store.update_user(patch).await;

    assert_eq!(result, Err(AuthError::NotAuthenticated));
    assert!(!store.is_authenticated(), "store signed itself out");
    assert!(vault.is_empty());
}

#[tokio::test]
async fn test_login_resolving_after_logout_is_discarded() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let store = new_store(&api, &vault);
    store.initialize();

    let release = api.gate_next_login();
    let login = store.login("amina@techpoa.com".to_string(), "pw".to_string(), true);
    let (result, ()) = futures::join!(login, async {
        // Runs once the login is parked on the gate: the user logs out,
        // then the network answer arrives.
        store.logout();
        let _ = release.send(());
    });

    assert!(result.is_ok(), "the network call itself succeeded");
    assert!(
        !store.is_authenticated(),
        "stale result must not re-authenticate"
    );
    assert!(vault.is_empty());
}

#[tokio::test]
async fn test_racing_logins_apply_only_one_result() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let store = new_store(&api, &vault);
    store.initialize();

    let release = api.gate_next_login();
    let slow = store.login("amina@techpoa.com".to_string(), "pw".to_string(), true);
    let (slow_result, fast_result) = futures::join!(slow, async {
        // A second login completes while the first is parked
        let result = store
            .login("amina@techpoa.com".to_string(), "pw".to_string(), false)
            .await;
        let _ = release.send(());
        result
    });

    slow_result.unwrap();
    fast_result.unwrap();
    // The applied session is the fast (ephemeral) one; the parked login's
    // completion was stale and discarded.
    assert!(vault.get(Tier::Ephemeral, keys::AUTH_TOKEN).is_some());
    assert!(vault.get(Tier::Remembered, keys::AUTH_TOKEN).is_none());
}

#[tokio::test]
async fn test_observer_fires_on_state_changes() {
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let store = new_store(&api, &vault);
    let changes = Rc::new(Cell::new(0u32));
    let counter = changes.clone();
    store.set_on_change(move || counter.set(counter.get() + 1));

    store.initialize();
    let after_init = changes.get();
    assert!(after_init >= 1, "initialize notifies even with no session");

    store
        .login("amina@techpoa.com".to_string(), "pw".to_string(), true)
        .await
        .unwrap();
    let after_login = changes.get();
    assert!(after_login > after_init);

    store.logout();
    assert!(changes.get() > after_login);
}

#[tokio::test]
async fn test_login_brackets_the_loading_signal() {
    let loading = LoadingSignal::new();
    let api = Rc::new(StubAuthApi::new());
    let vault = Rc::new(MemoryVault::new());
    let store = SessionStore::new(api.clone(), vault.clone(), loading.clone());
    store.initialize();
    assert!(!loading.is_active(), "initialize released its guard");

    let release = api.gate_next_login();
    let login = store.login("amina@techpoa.com".to_string(), "pw".to_string(), false);
    let (result, (mid_active, mid_message)) = futures::join!(login, async {
        let observed = (loading.is_active(), loading.message());
        let _ = release.send(());
        observed
    });

    result.unwrap();
    assert!(mid_active, "signal is up while login is in flight");
    assert_eq!(mid_message.as_deref(), Some(messages::SIGNING_IN));
    assert!(!loading.is_active(), "signal released after completion");
}
