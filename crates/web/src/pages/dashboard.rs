//! Member dashboard with the profile card and editor

use techpoa_core::IdentityPatch;
use techpoa_frontend_common::{use_identity, use_session};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_session();
    let identity = use_identity();
    let navigator = use_navigator()
        .expect("Navigator not found. Make sure to wrap DashboardPage with BrowserRouter");

    let editing = use_state(|| false);
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let busy = use_state(|| false);
    let message = use_state(|| Option::<String>::None);
    let error = use_state(|| Option::<String>::None);

    // The route guard bounces signed-out visitors; render nothing while
    // that navigation is in flight.
    let Some(identity) = identity else {
        return Html::default();
    };

    let on_edit = {
        let identity = identity.clone();
        let editing = editing.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let message = message.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            first_name.set(identity.first_name.clone());
            last_name.set(identity.last_name.clone());
            email.set(identity.email.clone());
            message.set(None);
            error.set(None);
            editing.set(true);
        })
    };

    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(false))
    };

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_first_name = text_input(&first_name);
    let on_last_name = text_input(&last_name);
    let on_email = text_input(&email);

    let on_save = {
        let session = session.clone();
        let identity = identity.clone();
        let editing = editing.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let busy = busy.clone();
        let message = message.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let changed = |draft: &str, current: &str| {
                (draft != current).then(|| draft.to_string())
            };
            let patch = IdentityPatch {
                first_name: changed(&first_name, &identity.first_name),
                last_name: changed(&last_name, &identity.last_name),
                email: changed(&email, &identity.email),
                avatar_url: None,
            };
            if patch.is_empty() {
                message.set(Some("Nothing to update.".to_string()));
                editing.set(false);
                return;
            }
            let store = session.store.clone();
            let editing = editing.clone();
            let busy = busy.clone();
            let message = message.clone();
            let error = error.clone();
            busy.set(true);
            message.set(None);
            error.set(None);
            spawn_local(async move {
                match store.update_user(patch).await {
                    Ok(_) => {
                        message.set(Some("Profile updated.".to_string()));
                        editing.set(false);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.store.logout();
            navigator.push(&Route::Home);
        })
    };

    html! {
        <div class="max-w-3xl mx-auto px-4 py-12">
            <h1 class="text-2xl font-bold text-slate-900 mb-8">
                {format!("Welcome back, {}", identity.first_name)}
            </h1>

            if let Some(message) = (*message).clone() {
                <div class="bg-green-50 border border-green-200 rounded-lg p-3 mb-6">
                    <p class="text-sm text-green-700 m-0">{message}</p>
                </div>
            }
            if let Some(error) = (*error).clone() {
                <div class="bg-red-50 border border-red-200 rounded-lg p-3 mb-6">
                    <p class="text-sm text-red-700 m-0">{error}</p>
                </div>
            }

            <div class="bg-white border border-slate-200 rounded-xl shadow-sm p-6 mb-8">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-lg font-semibold text-slate-900 m-0">{"Your profile"}</h2>
                    if !*editing {
                        <button
                            onclick={on_edit}
                            class="px-4 py-2 text-sm border border-slate-300 hover:bg-slate-50 text-slate-700 rounded-lg"
                        >
                            {"Edit"}
                        </button>
                    }
                </div>

                {if *editing {
                    html! {
                        <form class="space-y-4" onsubmit={on_save}>
                            <div class="grid grid-cols-2 gap-4">
                                <div>
                                    <label class="block text-sm font-medium text-slate-700 mb-1">{"First name"}</label>
                                    <input
                                        type="text"
                                        class="w-full px-4 py-2 border border-slate-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-sky-500 focus:border-sky-500"
                                        value={(*first_name).clone()}
                                        oninput={on_first_name}
                                    />
                                </div>
                                <div>
                                    <label class="block text-sm font-medium text-slate-700 mb-1">{"Last name"}</label>
                                    <input
                                        type="text"
                                        class="w-full px-4 py-2 border border-slate-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-sky-500 focus:border-sky-500"
                                        value={(*last_name).clone()}
                                        oninput={on_last_name}
                                    />
                                </div>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-1">{"Email"}</label>
                                <input
                                    type="email"
                                    class="w-full px-4 py-2 border border-slate-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-sky-500 focus:border-sky-500"
                                    value={(*email).clone()}
                                    oninput={on_email}
                                />
                            </div>
                            <div class="flex gap-3">
                                <button
                                    type="submit"
                                    disabled={*busy}
                                    class="px-4 py-2 bg-sky-600 hover:bg-sky-700 disabled:bg-slate-400 text-white text-sm font-medium rounded-lg"
                                >
                                    {if *busy { "Saving..." } else { "Save changes" }}
                                </button>
                                <button
                                    type="button"
                                    onclick={on_cancel}
                                    class="px-4 py-2 text-sm border border-slate-300 hover:bg-slate-50 text-slate-700 rounded-lg"
                                >
                                    {"Cancel"}
                                </button>
                            </div>
                        </form>
                    }
                } else {
                    html! {
                        <div class="flex items-center gap-4">
                            {if let Some(avatar_url) = identity.avatar_url.clone() {
                                html! {
                                    <img
                                        src={avatar_url}
                                        alt="Avatar"
                                        class="w-16 h-16 rounded-full object-cover"
                                    />
                                }
                            } else {
                                html! {
                                    <div class="w-16 h-16 rounded-full bg-sky-600 text-white flex items-center justify-center text-xl font-semibold">
                                        {identity.initials()}
                                    </div>
                                }
                            }}
                            <div>
                                <p class="text-lg font-medium text-slate-900 m-0">{identity.full_name()}</p>
                                <p class="text-sm text-slate-600 m-0">{identity.email.clone()}</p>
                                <span class="inline-block mt-1 px-2 py-0.5 text-xs font-medium bg-sky-100 text-sky-700 rounded-full capitalize">
                                    {identity.role.as_str()}
                                </span>
                            </div>
                        </div>
                    }
                }}
            </div>

            <div class="bg-white border border-slate-200 rounded-xl shadow-sm p-6">
                <h2 class="text-lg font-semibold text-slate-900 mb-2">{"Account"}</h2>
                <p class="text-sm text-slate-600 mb-4">
                    {"Signing out clears this session from the browser."}
                </p>
                <button
                    onclick={on_logout}
                    class="px-4 py-2 text-sm border border-red-300 hover:bg-red-50 text-red-600 rounded-lg"
                >
                    {"Sign out"}
                </button>
            </div>
        </div>
    }
}
