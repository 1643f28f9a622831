//! Password reset request page

use techpoa_frontend_common::use_session;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let session = use_session();

    let email = use_state(String::new);
    let busy = use_state(|| false);
    let sent = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_submit = {
        let session = session.clone();
        let email = email.clone();
        let busy = busy.clone();
        let sent = sent.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let api = session.api.clone();
            let address = (*email).clone();
            let busy = busy.clone();
            let sent = sent.clone();
            let error = error.clone();
            busy.set(true);
            error.set(None);
            spawn_local(async move {
                match api.forgot_password(&address).await {
                    Ok(()) => sent.set(true),
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="max-w-md mx-auto px-4 py-16">
            <h1 class="text-2xl font-bold text-slate-900 mb-1">{"Reset your password"}</h1>
            <p class="text-slate-600 mb-8">
                {"Tell us the email you signed up with and we will send a reset link."}
            </p>

            if *sent {
                <div class="bg-green-50 border border-green-200 rounded-lg p-4 mb-6">
                    <p class="text-sm text-green-700 m-0">
                        {"If an account exists for that address, a reset link is on its way. Check your inbox."}
                    </p>
                </div>
                <p class="text-sm text-slate-600 text-center">
                    <Link<Route> to={Route::Login} classes="text-sky-600 hover:text-sky-700">
                        {"Back to sign in"}
                    </Link<Route>>
                </p>
            } else {
                if let Some(error) = (*error).clone() {
                    <div class="bg-red-50 border border-red-200 rounded-lg p-3 mb-6">
                        <p class="text-sm text-red-700 m-0">{error}</p>
                    </div>
                }

                <form class="space-y-4" onsubmit={on_submit}>
                    <div>
                        <label class="block text-sm font-medium text-slate-700 mb-1">{"Email"}</label>
                        <input
                            type="email"
                            class="w-full px-4 py-3 border border-slate-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-sky-500 focus:border-sky-500"
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={*busy}
                        class="w-full px-4 py-3 bg-sky-600 hover:bg-sky-700 disabled:bg-slate-400 text-white font-medium rounded-lg"
                    >
                        {if *busy { "Sending..." } else { "Send reset link" }}
                    </button>
                </form>

                <p class="text-sm text-slate-600 text-center mt-6">
                    {"Remembered it after all? "}
                    <Link<Route> to={Route::Login} classes="text-sky-600 hover:text-sky-700">
                        {"Sign in"}
                    </Link<Route>>
                </p>
            }
        </div>
    }
}
