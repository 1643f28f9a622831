//! Route guard
//!
//! Evaluates the route tables against the current location and session on
//! every navigation and auth change. Children always render; the guard only
//! ever issues a replace-style navigation and raises the loading signal
//! while a decision is pending or a redirect is in flight. Each evaluation
//! (and unmount) releases the previous hold.

use techpoa_core::loading::messages;
use techpoa_core::{LoadingGuard, Redirect, RouteTables};
use techpoa_frontend_common::{use_loading, use_session};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{RedirectQuery, Route};

#[derive(Properties, Clone, PartialEq)]
pub struct RouteGuardProps {
    pub children: Children,
}

#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let session = use_session();
    let loading = use_loading();
    let navigator = use_navigator()
        .expect("Navigator not found. Make sure to wrap RouteGuard with BrowserRouter");
    let location = use_location()
        .expect("Location not found. Make sure to wrap RouteGuard with BrowserRouter");
    let hold = use_mut_ref(|| Option::<LoadingGuard>::None);

    let path = location.path().to_string();
    let authenticated = session.snapshot.is_authenticated();
    let resolving = session.snapshot.loading;

    {
        let hold = hold.clone();
        let signal = loading.signal.clone();
        use_effect_with(
            (path, authenticated, resolving),
            move |(path, authenticated, resolving)| {
                if *resolving {
                    // Session restore has not settled; hold the decision.
                    *hold.borrow_mut() = Some(signal.begin(messages::VERIFYING_AUTH));
                } else {
                    match RouteTables::DEFAULT.decide(path, *authenticated) {
                        Some(Redirect::ToLogin { redirect }) => {
                            tracing::debug!(%path, "redirecting to login");
                            *hold.borrow_mut() = Some(signal.begin(messages::REDIRECT_LOGIN));
                            let query = RedirectQuery {
                                redirect: Some(redirect),
                            };
                            if navigator
                                .replace_with_query(&Route::Login, &query)
                                .is_err()
                            {
                                navigator.replace(&Route::Login);
                            }
                        }
                        Some(Redirect::ToDashboard) => {
                            tracing::debug!(%path, "redirecting signed-in user to dashboard");
                            *hold.borrow_mut() = Some(signal.begin(messages::REDIRECT_DASHBOARD));
                            navigator.replace(&Route::Dashboard);
                        }
                        None => {}
                    }
                }
                move || {
                    hold.borrow_mut().take();
                }
            },
        );
    }

    html! { <>{props.children.clone()}</> }
}
