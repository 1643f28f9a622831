//! Sign-in page

use techpoa_frontend_common::use_session;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{RedirectQuery, Route};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let navigator = use_navigator()
        .expect("Navigator not found. Make sure to wrap LoginPage with BrowserRouter");
    let location = use_location()
        .expect("Location not found. Make sure to wrap LoginPage with BrowserRouter");

    let email = use_state(String::new);
    let password = use_state(String::new);
    let remember_me = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_remember_change = {
        let remember_me = remember_me.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            remember_me.set(input.checked());
        })
    };

    let on_submit = {
        let session = session.clone();
        let email = email.clone();
        let password = password.clone();
        let remember_me = remember_me.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let store = session.store.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let remember = *remember_me;
            // Where to go after sign-in: the guard's redirect parameter if
            // it names a known route, the dashboard otherwise.
            let destination = location
                .query::<RedirectQuery>()
                .ok()
                .and_then(|query| query.redirect)
                .as_deref()
                .and_then(Route::recognize)
                .filter(|route| *route != Route::NotFound)
                .unwrap_or(Route::Dashboard);
            error.set(None);
            spawn_local(async move {
                match store.login(email_value, password_value, remember).await {
                    Ok(_) => navigator.push(&destination),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <div class="max-w-md mx-auto px-4 py-16">
            <h1 class="text-2xl font-bold text-slate-900 mb-1">{"Welcome back"}</h1>
            <p class="text-slate-600 mb-8">{"Sign in to your TechPoa account."}</p>

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
                        oninput={on_email_input}
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">{"Password"}</label>
                    <input
                        type="password"
                        class="w-full px-4 py-3 border border-slate-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-sky-500 focus:border-sky-500"
                        value={(*password).clone()}
                        oninput={on_password_input}
                    />
                </div>
                <div class="flex items-center justify-between">
                    <label class="flex items-center gap-2 text-sm text-slate-600">
                        <input
                            type="checkbox"
                            checked={*remember_me}
                            onchange={on_remember_change}
                        />
                        {"Remember me"}
                    </label>
                    <Link<Route>
                        to={Route::ForgotPassword}
                        classes="text-sm text-sky-600 hover:text-sky-700"
                    >
                        {"Forgot password?"}
                    </Link<Route>>
                </div>
                <button
                    type="submit"
                    class="w-full px-4 py-3 bg-sky-600 hover:bg-sky-700 text-white font-medium rounded-lg"
                >
                    {"Sign in"}
                </button>
            </form>

            <p class="text-sm text-slate-600 text-center mt-6">
                {"New to TechPoa? "}
                <Link<Route> to={Route::Signup} classes="text-sky-600 hover:text-sky-700">
                    {"Create an account"}
                </Link<Route>>
            </p>
        </div>
    }
}
