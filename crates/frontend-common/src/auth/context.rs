//! Session context provider
//!
//! Creates the one `SessionStore` and auth client for the app, keeps a
//! snapshot in sync through the store's observer slot, and exposes them
//! through Yew context.

use std::rc::Rc;
use std::time::Duration;

use techpoa_client::MockAuthClient;
use techpoa_core::{AuthApi, Identity, SessionSnapshot, SessionStore};
use yew::prelude::*;

use crate::config::AppConfig;
use crate::loading::context::use_loading;
use crate::vault::WebVault;

/// Store and auth client handles plus the snapshot current at the last
/// change. The client is exposed for flows that go to the backend without
/// touching the session, password resets and email verification.
#[derive(Clone)]
pub struct SessionContext {
    pub store: SessionStore,
    pub api: Rc<dyn AuthApi>,
    pub snapshot: SessionSnapshot,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
            && Rc::ptr_eq(&self.api, &other.api)
            && self.snapshot == other.snapshot
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Owns the session store and republishes its snapshot on every change.
///
/// Must be nested inside the loading provider so the store and the
/// loading overlay share one signal. The persisted session is restored in
/// an effect after the first render; until then the snapshot reports
/// loading and the route guard holds its decision.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let loading = use_loading();
    let state = use_state(|| {
        let api: Rc<dyn AuthApi> = Rc::new(MockAuthClient::new(Duration::from_millis(
            AppConfig::MOCK_LATENCY_MS,
        )));
        let vault = Rc::new(WebVault::new());
        let store = SessionStore::new(api.clone(), vault, loading.signal.clone());
        (store, api)
    });
    let (store, api) = (*state).clone();
    let snapshot = use_state_eq(|| store.snapshot());

    {
        let store = store.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let observed = store.clone();
            store.set_on_change(move || snapshot.set(observed.snapshot()));
            store.initialize();
            move || store.clear_on_change()
        });
    }

    let context = SessionContext {
        store,
        api,
        snapshot: (*snapshot).clone(),
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Session context. Panics if used outside the provider.
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Identity of the signed-in user, if any.
#[hook]
pub fn use_identity() -> Option<Identity> {
    use_session().snapshot.identity
}

/// Whether a user is currently signed in.
#[hook]
pub fn use_is_authenticated() -> bool {
    use_session().snapshot.is_authenticated()
}
