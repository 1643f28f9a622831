//! Public site services: newsletter, quotes, contact, launch info
//!
//! Network or server failure never reaches the pages as an error. Every
//! call logs a warning and degrades to a default value.

use chrono::{DateTime, Utc};
use techpoa_client::{Ack, ContactMessage, LaunchInfo, QuoteRequest, SiteClient};

use crate::client::site_client;
use crate::config::AppConfig;

/// Forms and content service over a [`SiteClient`].
#[derive(Clone, Default)]
pub struct FormsService {
    client: Option<SiteClient>,
}

impl FormsService {
    /// Service over the shared process-wide client. If the client cannot
    /// be built, every call degrades immediately.
    pub fn shared() -> Self {
        match site_client() {
            Ok(client) => Self::new(client),
            Err(error) => {
                tracing::warn!(%error, "site client unavailable");
                Self { client: None }
            }
        }
    }

    /// Service over an explicit client.
    pub fn new(client: SiteClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Subscribe an address to the newsletter.
    pub async fn subscribe_newsletter(&self, email: &str) -> Ack {
        let Some(client) = &self.client else {
            return Ack::default();
        };
        match client.subscribe_newsletter(email).await {
            Ok(ack) => ack,
            Err(error) => {
                tracing::warn!(%error, "newsletter subscription failed");
                Ack::default()
            }
        }
    }

    /// Submit a service quote request.
    pub async fn submit_quote(&self, request: &QuoteRequest) -> Ack {
        let Some(client) = &self.client else {
            return Ack::default();
        };
        match client.submit_quote(request).await {
            Ok(ack) => ack,
            Err(error) => {
                tracing::warn!(%error, "quote submission failed");
                Ack::default()
            }
        }
    }

    /// Submit a contact form message.
    pub async fn submit_contact(&self, message: &ContactMessage) -> Ack {
        let Some(client) = &self.client else {
            return Ack::default();
        };
        match client.submit_contact(message).await {
            Ok(ack) => ack,
            Err(error) => {
                tracing::warn!(%error, "contact submission failed");
                Ack::default()
            }
        }
    }

    /// Launch timing for the home page countdown. Falls back to the
    /// configured launch date when the endpoint is unreachable.
    pub async fn launch_info(&self) -> LaunchInfo {
        let Some(client) = &self.client else {
            return fallback_launch();
        };
        match client.launch_info().await {
            Ok(info) => info,
            Err(error) => {
                tracing::warn!(%error, "launch info fetch failed");
                fallback_launch()
            }
        }
    }
}

fn fallback_launch() -> LaunchInfo {
    LaunchInfo {
        launch_at: fallback_launch_at(),
        message: None,
    }
}

/// The configured fallback launch date, or the epoch if it does not parse.
pub fn fallback_launch_at() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(AppConfig::FALLBACK_LAUNCH_AT)
        .map(|at| at.with_timezone(&Utc))
        .unwrap_or_default()
}
