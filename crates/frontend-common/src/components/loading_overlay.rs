//! Full-screen overlay bound to the loading signal

use yew::prelude::*;

use crate::components::LoadingSpinner;
use crate::loading::context::use_loading;

/// Dimmed overlay shown whenever the loading signal is active.
///
/// Mount once near the app root, inside the loading provider.
#[function_component(LoadingOverlay)]
pub fn loading_overlay() -> Html {
    let loading = use_loading();
    if !loading.snapshot.active {
        return Html::default();
    }
    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-slate-900/40">
            <div class="bg-white rounded-lg shadow-lg px-8 py-4">
                <LoadingSpinner text={loading.snapshot.message.clone()} />
            </div>
        </div>
    }
}
