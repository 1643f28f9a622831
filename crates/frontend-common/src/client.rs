//! Shared site API client

use once_cell::sync::Lazy;
use std::sync::Mutex;
use techpoa_client::error::ClientError;
use techpoa_client::SiteClient;
use web_sys::window;

use crate::config::AppConfig;

/// Global client instance
static SITE_CLIENT: Lazy<Mutex<Option<SiteClient>>> = Lazy::new(|| Mutex::new(None));

/// Base URL for API calls: the window origin plus the API path.
fn get_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            return format!("{}{}", origin, AppConfig::API_BASE);
        }
    }

    // Fall back to a relative URL
    AppConfig::API_BASE.to_string()
}

/// Get the shared site client, building it on first use.
pub fn site_client() -> Result<SiteClient, ClientError> {
    let mut client_lock = SITE_CLIENT
        .lock()
        .expect("Failed to acquire site client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = SiteClient::new(get_base_url())?;
    *client_lock = Some(client.clone());
    Ok(client)
}
