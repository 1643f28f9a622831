//! Account creation page

use techpoa_core::{Role, SignupRequest};
use techpoa_frontend_common::use_session;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Student => "Student",
        Role::Instructor => "Instructor",
        Role::Developer => "Developer",
        Role::Client => "Client",
    }
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let session = use_session();
    let navigator = use_navigator()
        .expect("Navigator not found. Make sure to wrap SignupPage with BrowserRouter");

    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let role = use_state(Role::default);
    let error = use_state(|| Option::<String>::None);

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
    let on_password = text_input(&password);

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            role.set(select.value().parse().unwrap_or_default());
        })
    };

    let on_submit = {
        let session = session.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let role = role.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let store = session.store.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let request = SignupRequest {
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                role: *role,
            };
            error.set(None);
            spawn_local(async move {
                match store.signup(request).await {
                    // Signed in either way; verification continues on its
                    // own page.
                    Ok(payload) if payload.verification_required => {
                        navigator.push(&Route::VerifyEmail);
                    }
                    Ok(_) => navigator.push(&Route::Dashboard),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <div class="max-w-md mx-auto px-4 py-16">
            <h1 class="text-2xl font-bold text-slate-900 mb-1">{"Join TechPoa"}</h1>
            <p class="text-slate-600 mb-8">{"Create an account to learn, teach or build with us."}</p>

            if let Some(error) = (*error).clone() {
                <div class="bg-red-50 border border-red-200 rounded-lg p-3 mb-6">
                    <p class="text-sm text-red-700 m-0">{error}</p>
                </div>
            }

            <form class="space-y-4" onsubmit={on_submit}>
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm font-medium text-slate-700 mb-1">{"First name"}</label>
                        <input
                            type="text"
                            class="w-full px-4 py-3 border border-slate-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-sky-500 focus:border-sky-500"
                            value={(*first_name).clone()}
                            oninput={on_first_name}
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-slate-700 mb-1">{"Last name"}</label>
                        <input
                            type="text"
                            class="w-full px-4 py-3 border border-slate-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-sky-500 focus:border-sky-500"
                            value={(*last_name).clone()}
                            oninput={on_last_name}
                        />
                    </div>
                </div>
                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">{"Email"}</label>
                    <input
                        type="email"
                        class="w-full px-4 py-3 border border-slate-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-sky-500 focus:border-sky-500"
                        value={(*email).clone()}
                        oninput={on_email}
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">{"Password"}</label>
                    <input
                        type="password"
                        class="w-full px-4 py-3 border border-slate-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-sky-500 focus:border-sky-500"
                        value={(*password).clone()}
                        oninput={on_password}
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">{"I am joining as"}</label>
                    <select
                        class="w-full px-4 py-3 border border-slate-300 rounded-lg bg-white focus:outline-none focus:ring-1 focus:ring-sky-500 focus:border-sky-500"
                        onchange={on_role_change}
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|option| html! {
                                <option value={option.as_str()} selected={option == *role}>
                                    {role_label(option)}
                                </option>
                            })
                            .collect::<Html>()}
                    </select>
                </div>
                <button
                    type="submit"
                    class="w-full px-4 py-3 bg-sky-600 hover:bg-sky-700 text-white font-medium rounded-lg"
                >
                    {"Create account"}
                </button>
            </form>

            <p class="text-sm text-slate-600 text-center mt-6">
                {"Already have an account? "}
                <Link<Route> to={Route::Login} classes="text-sky-600 hover:text-sky-700">
                    {"Sign in"}
                </Link<Route>>
            </p>
        </div>
    }
}
