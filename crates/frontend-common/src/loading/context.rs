//! Loading signal provider
//!
//! Owns the app's `LoadingSignal` and republishes its snapshot so the
//! overlay re-renders as operations begin and end.

use techpoa_core::{LoadingSignal, LoadingSnapshot};
use yew::prelude::*;

/// Signal handle plus the snapshot current at the last change.
#[derive(Clone, PartialEq)]
pub struct LoadingContext {
    pub signal: LoadingSignal,
    pub snapshot: LoadingSnapshot,
}

#[derive(Properties, Clone, PartialEq)]
pub struct LoadingProviderProps {
    pub children: Children,
}

#[function_component(LoadingProvider)]
pub fn loading_provider(props: &LoadingProviderProps) -> Html {
    let signal = use_state(LoadingSignal::new);
    let snapshot = use_state_eq(|| signal.snapshot());

    {
        let signal = (*signal).clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let observed = signal.clone();
            signal.set_on_change(move || snapshot.set(observed.snapshot()));
            move || signal.clear_on_change()
        });
    }

    let context = LoadingContext {
        signal: (*signal).clone(),
        snapshot: (*snapshot).clone(),
    };

    html! {
        <ContextProvider<LoadingContext> context={context}>
            {props.children.clone()}
        </ContextProvider<LoadingContext>>
    }
}

/// Loading context. Panics if used outside the provider.
#[hook]
pub fn use_loading() -> LoadingContext {
    use_context::<LoadingContext>()
        .expect("LoadingContext not found. Make sure to wrap your component with LoadingProvider")
}
