//! TechPoa remote API clients
//!
//! [`MockAuthClient`] simulates the auth backend the session core talks to,
//! with realistic latency and the documented failure sentinels.
//! [`SiteClient`] is the typed HTTP client for the public site endpoints
//! (newsletter, quotes, contact, launch info, admin console).

pub mod error;
pub mod mock;
pub mod site;
pub mod types;

pub use error::{ClientError, ClientResult};
pub use mock::MockAuthClient;
pub use site::SiteClient;
pub use types::{
    Ack, ContactMessage, ContactRecord, LaunchInfo, QuoteRecord, QuoteRequest, SiteStats,
    Subscriber,
};
