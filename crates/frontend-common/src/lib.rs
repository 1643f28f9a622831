//! Shared frontend layer for the TechPoa web app
//!
//! Wires the session state machine and the loading signal into Yew context
//! providers, adapts browser storage to the `SessionVault` trait, and wraps
//! the site API client in degrade-to-default services.

pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod loading;
pub mod services;
pub mod vault;

pub use auth::context::{
    use_identity, use_is_authenticated, use_session, SessionContext, SessionProvider,
};
pub use client::site_client;
pub use components::{LoadingOverlay, LoadingSpinner};
pub use config::AppConfig;
pub use loading::context::{use_loading, LoadingContext, LoadingProvider};
pub use services::{AdminGate, FormsService};
pub use vault::WebVault;
