//! Email verification page
//!
//! Serves two cases: landing from the verification link (token in the
//! query string, verified on mount) and landing straight after signup
//! (no token, offer to resend the email).

use techpoa_frontend_common::{use_identity, use_session};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{Route, TokenQuery};

#[derive(Clone, PartialEq)]
enum VerifyStatus {
    Checking,
    Confirmed,
    Rejected(String),
}

#[function_component(VerifyEmailPage)]
pub fn verify_email_page() -> Html {
    let session = use_session();
    let identity = use_identity();
    let location = use_location()
        .expect("Location not found. Make sure to wrap VerifyEmailPage with BrowserRouter");

    let token = location
        .query::<TokenQuery>()
        .ok()
        .and_then(|query| query.token);

    let status = use_state(|| VerifyStatus::Checking);
    let email = use_state(String::new);
    let busy = use_state(|| false);
    let resent = use_state(|| false);
    let resend_error = use_state(|| Option::<String>::None);

    {
        let api = session.api.clone();
        let status = status.clone();
        use_effect_with(token.clone(), move |token| {
            if let Some(token) = token.clone() {
                status.set(VerifyStatus::Checking);
                spawn_local(async move {
                    match api.verify_email(&token).await {
                        Ok(()) => status.set(VerifyStatus::Confirmed),
                        Err(err) => status.set(VerifyStatus::Rejected(err.to_string())),
                    }
                });
            }
        });
    }

    // Prefill the resend field once the restored session is known.
    {
        let email = email.clone();
        use_effect_with(identity.clone(), move |identity| {
            if let Some(identity) = identity {
                if email.is_empty() {
                    email.set(identity.email.clone());
                }
            }
        });
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_resend = {
        let session = session.clone();
        let email = email.clone();
        let busy = busy.clone();
        let resent = resent.clone();
        let resend_error = resend_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let api = session.api.clone();
            let address = (*email).clone();
            let busy = busy.clone();
            let resent = resent.clone();
            let resend_error = resend_error.clone();
            busy.set(true);
            resent.set(false);
            resend_error.set(None);
            spawn_local(async move {
                match api.resend_verification(&address).await {
                    Ok(()) => resent.set(true),
                    Err(err) => resend_error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    let resend_form = html! {
        <>
            if *resent {
                <div class="bg-green-50 border border-green-200 rounded-lg p-3 mb-6">
                    <p class="text-sm text-green-700 m-0">{"Verification email sent. Check your inbox."}</p>
                </div>
            }
            if let Some(error) = (*resend_error).clone() {
                <div class="bg-red-50 border border-red-200 rounded-lg p-3 mb-6">
                    <p class="text-sm text-red-700 m-0">{error}</p>
                </div>
            }

            <form class="space-y-4" onsubmit={on_resend}>
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
                    {if *busy { "Sending..." } else { "Resend verification email" }}
                </button>
            </form>
        </>
    };

    html! {
        <div class="max-w-md mx-auto px-4 py-16">
            <h1 class="text-2xl font-bold text-slate-900 mb-1">{"Verify your email"}</h1>
            <p class="text-slate-600 mb-8">
                {"We need to confirm your address before you get full access."}
            </p>

            {if token.is_some() {
                match (*status).clone() {
                    VerifyStatus::Checking => html! {
                        <p class="text-slate-600">{"Verifying your email..."}</p>
                    },
                    VerifyStatus::Confirmed => html! {
                        <>
                            <div class="bg-green-50 border border-green-200 rounded-lg p-4 mb-6">
                                <p class="text-sm text-green-700 m-0">
                                    {"Your email is verified. Welcome aboard."}
                                </p>
                            </div>
                            <p class="text-sm text-slate-600 text-center">
                                <Link<Route> to={Route::Dashboard} classes="text-sky-600 hover:text-sky-700">
                                    {"Go to your dashboard"}
                                </Link<Route>>
                            </p>
                        </>
                    },
                    VerifyStatus::Rejected(message) => html! {
                        <>
                            <div class="bg-red-50 border border-red-200 rounded-lg p-3 mb-6">
                                <p class="text-sm text-red-700 m-0">{message}</p>
                            </div>
                            {resend_form.clone()}
                        </>
                    },
                }
            } else {
                html! {
                    <>
                        <div class="bg-sky-50 border border-sky-200 rounded-lg p-4 mb-6">
                            <p class="text-sm text-sky-700 m-0">
                                {"We sent a verification link to your email. Did it not arrive? \
                                  You can request another one."}
                            </p>
                        </div>
                        {resend_form}
                    </>
                }
            }}
        </div>
    }
}
