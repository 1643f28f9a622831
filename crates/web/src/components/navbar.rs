//! Top navigation bar

use techpoa_frontend_common::{use_identity, use_session};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session();
    let identity = use_identity();
    let navigator = use_navigator()
        .expect("Navigator not found. Make sure to wrap Navbar with BrowserRouter");

    let on_logout = {
        let store = session.store.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            store.logout();
            navigator.push(&Route::Home);
        })
    };

    html! {
        <nav class="bg-white border-b border-slate-200">
            <div class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                <Link<Route> to={Route::Home} classes="text-xl font-bold text-sky-700">
                    {"TechPoa"}
                </Link<Route>>
                <div class="flex items-center gap-4">
                    {match identity {
                        Some(identity) => html! {
                            <>
                                <Link<Route>
                                    to={Route::Dashboard}
                                    classes="text-sm font-medium text-slate-600 hover:text-slate-900"
                                >
                                    {"Dashboard"}
                                </Link<Route>>
                                <span class="w-8 h-8 bg-sky-600 rounded-full flex items-center justify-center text-white text-sm font-semibold">
                                    {identity.initials()}
                                </span>
                                <button
                                    onclick={on_logout}
                                    class="px-3 py-2 text-sm font-medium text-slate-600 hover:text-slate-900"
                                >
                                    {"Sign out"}
                                </button>
                            </>
                        },
                        None => html! {
                            <>
                                <Link<Route>
                                    to={Route::Login}
                                    classes="text-sm font-medium text-slate-600 hover:text-slate-900"
                                >
                                    {"Sign in"}
                                </Link<Route>>
                                <Link<Route>
                                    to={Route::Signup}
                                    classes="px-4 py-2 text-sm font-medium text-white bg-sky-600 hover:bg-sky-700 rounded-lg"
                                >
                                    {"Join us"}
                                </Link<Route>>
                            </>
                        },
                    }}
                </div>
            </div>
        </nav>
    }
}
