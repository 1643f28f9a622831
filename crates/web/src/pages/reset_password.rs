//! Password reset completion page
//!
//! Reached from the link in the reset email, which carries the one-time
//! token as a `?token=` query parameter.

use techpoa_frontend_common::use_session;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{Route, TokenQuery};

#[function_component(ResetPasswordPage)]
pub fn reset_password_page() -> Html {
    let session = use_session();
    let location = use_location()
        .expect("Location not found. Make sure to wrap ResetPasswordPage with BrowserRouter");

    let token = location
        .query::<TokenQuery>()
        .ok()
        .and_then(|query| query.token);

    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let busy = use_state(|| false);
    let done = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_confirm = {
        let confirm = confirm.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            confirm.set(input.value());
        })
    };

    let on_submit = {
        let session = session.clone();
        let token = token.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let busy = busy.clone();
        let done = done.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let Some(token) = token.clone() else {
                return;
            };
            if *password != *confirm {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }
            let api = session.api.clone();
            let new_password = (*password).clone();
            let busy = busy.clone();
            let done = done.clone();
            let error = error.clone();
            busy.set(true);
            error.set(None);
            spawn_local(async move {
                match api.reset_password(&token, &new_password).await {
                    Ok(()) => done.set(true),
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="max-w-md mx-auto px-4 py-16">
            <h1 class="text-2xl font-bold text-slate-900 mb-1">{"Choose a new password"}</h1>
            <p class="text-slate-600 mb-8">{"Pick something you have not used here before."}</p>

            {match (token.is_some(), *done) {
                (false, _) => html! {
                    <div class="bg-amber-50 border border-amber-200 rounded-lg p-4">
                        <p class="text-sm text-amber-700 m-0">
                            {"This page only works from the link in your reset email. If yours has \
                              expired, request a new one below."}
                        </p>
                        <p class="text-sm mt-3 m-0">
                            <Link<Route> to={Route::ForgotPassword} classes="text-sky-600 hover:text-sky-700">
                                {"Request a new link"}
                            </Link<Route>>
                        </p>
                    </div>
                },
                (true, true) => html! {
                    <>
                        <div class="bg-green-50 border border-green-200 rounded-lg p-4 mb-6">
                            <p class="text-sm text-green-700 m-0">
                                {"Your password has been updated. You can sign in with it now."}
                            </p>
                        </div>
                        <p class="text-sm text-slate-600 text-center">
                            <Link<Route> to={Route::Login} classes="text-sky-600 hover:text-sky-700">
                                {"Go to sign in"}
                            </Link<Route>>
                        </p>
                    </>
                },
                (true, false) => html! {
                    <>
                        if let Some(error) = (*error).clone() {
                            <div class="bg-red-50 border border-red-200 rounded-lg p-3 mb-6">
                                <p class="text-sm text-red-700 m-0">{error}</p>
                            </div>
                        }

                        <form class="space-y-4" onsubmit={on_submit}>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-1">{"New password"}</label>
                                <input
                                    type="password"
                                    class="w-full px-4 py-3 border border-slate-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-sky-500 focus:border-sky-500"
                                    value={(*password).clone()}
                                    oninput={on_password}
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-1">{"Confirm password"}</label>
                                <input
                                    type="password"
                                    class="w-full px-4 py-3 border border-slate-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-sky-500 focus:border-sky-500"
                                    value={(*confirm).clone()}
                                    oninput={on_confirm}
                                />
                            </div>
                            <button
                                type="submit"
                                disabled={*busy}
                                class="w-full px-4 py-3 bg-sky-600 hover:bg-sky-700 disabled:bg-slate-400 text-white font-medium rounded-lg"
                            >
                                {if *busy { "Updating..." } else { "Update password" }}
                            </button>
                        </form>
                    </>
                },
            }}
        </div>
    }
}
