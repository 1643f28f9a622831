//! TechPoa session core
//!
//! The client-held session state machine and everything it needs to run
//! natively: the identity model, the storage and remote-auth seams, the
//! loading signal, and the route guard decision logic. Browser bindings and
//! Yew components live in `techpoa-frontend-common` and `techpoa-web`.

pub mod auth;
pub mod error;
pub mod identity;
pub mod loading;
pub mod routes;
pub mod session;
pub mod vault;

#[cfg(any(test, feature = "tests"))]
pub mod tests;

pub use auth::{AuthApi, AuthPayload, LoginRequest, SignupRequest};
pub use error::{AuthError, AuthResult};
pub use identity::{ActiveSession, Identity, IdentityPatch, Role};
pub use loading::{LoadingGuard, LoadingSignal, LoadingSnapshot};
pub use routes::{Redirect, RouteClass, RouteTables};
pub use session::{SessionSnapshot, SessionStore};
pub use vault::{SessionVault, Tier};
