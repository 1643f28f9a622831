//! Route table for the site

use serde::{Deserialize, Serialize};
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/verify-email")]
    VerifyEmail,
    #[at("/dashboard")]
    Dashboard,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// `?redirect=` parameter the guard appends when bouncing to login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectQuery {
    #[serde(default)]
    pub redirect: Option<String>,
}

/// `?token=` parameter carried by password-reset and verification links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenQuery {
    #[serde(default)]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use techpoa_core::RouteTables;

    use super::*;

    #[test]
    fn test_guarded_paths_all_resolve_to_routes() {
        let tables = RouteTables::DEFAULT;
        for path in tables.protected.iter().chain(tables.auth_only) {
            let route = Route::recognize(path);
            assert!(
                matches!(route, Some(ref r) if *r != Route::NotFound),
                "{path} should map to a route"
            );
        }
    }

    #[test]
    fn test_login_path_matches_the_redirect_target() {
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");
    }

    #[test]
    fn test_unknown_path_falls_through_to_not_found() {
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }
}
