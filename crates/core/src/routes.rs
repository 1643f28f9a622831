//! Route classification and redirect decisions
//!
//! Pure data and functions. The Yew guard component turns a [`Redirect`]
//! into an actual navigation; everything here is testable without a browser.

use url::form_urlencoded;

/// Query parameter carrying the original destination through a login redirect.
pub const REDIRECT_PARAM: &str = "redirect";

/// How a path relates to authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Needs a session; signed-out visitors are sent to login.
    Protected,
    /// Only makes sense without a session; signed-in users are sent to the
    /// dashboard.
    AuthOnly,
    /// Reachable either way.
    Public,
}

/// The at-most-one replace-style navigation a guard evaluation produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    /// Send the visitor to login, remembering where they were headed.
    ToLogin { redirect: String },
    /// Send the signed-in user to their dashboard.
    ToDashboard,
}

impl Redirect {
    /// Path-and-query form, e.g. `/login?redirect=%2Fdashboard`.
    pub fn target_path(&self) -> String {
        match self {
            Redirect::ToLogin { redirect } => {
                let query: String = form_urlencoded::Serializer::new(String::new())
                    .append_pair(REDIRECT_PARAM, redirect)
                    .finish();
                format!("/login?{query}")
            }
            Redirect::ToDashboard => "/dashboard".to_string(),
        }
    }
}

/// The path lists driving classification, held as data so adding a page is a
/// table edit rather than new branching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTables {
    pub protected: &'static [&'static str],
    pub auth_only: &'static [&'static str],
}

impl RouteTables {
    /// Route lists for the TechPoa site.
    pub const DEFAULT: RouteTables = RouteTables {
        protected: &["/dashboard"],
        auth_only: &["/login", "/signup", "/forgot-password", "/reset-password"],
    };

    /// Classify `path`. Protected is checked first, so a path accidentally
    /// listed in both tables stays protected.
    pub fn classify(&self, path: &str) -> RouteClass {
        if Self::listed(self.protected, path) {
            RouteClass::Protected
        } else if Self::listed(self.auth_only, path) {
            RouteClass::AuthOnly
        } else {
            RouteClass::Public
        }
    }

    /// Decide the redirect for a navigation, if any.
    pub fn decide(&self, path: &str, authenticated: bool) -> Option<Redirect> {
        match (self.classify(path), authenticated) {
            (RouteClass::Protected, false) => Some(Redirect::ToLogin {
                redirect: path.to_string(),
            }),
            (RouteClass::AuthOnly, true) => Some(Redirect::ToDashboard),
            _ => None,
        }
    }

    /// Exact match, or `base` followed by a `/` segment boundary. `/dashboards`
    /// must not match `/dashboard`.
    fn listed(list: &[&str], path: &str) -> bool {
        list.iter().any(|base| {
            path == *base
                || path
                    .strip_prefix(base)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

impl Default for RouteTables {
    fn default() -> Self {
        Self::DEFAULT
    }
}
