//! Admin console gate and data access
//!
//! Access is granted by a server-checked code. The verified flag and the
//! raw code persist in the remembered tier so the console survives a
//! reload; each data fetch replays the code as a query parameter. Data
//! calls degrade to empty defaults on any failure.

use std::rc::Rc;

use techpoa_client::{Ack, ContactRecord, QuoteRecord, SiteClient, SiteStats, Subscriber};
use techpoa_core::{SessionVault, Tier};

use crate::client::site_client;
use crate::config::AppConfig;

const AUTHORIZED: &str = "true";

/// Gate in front of the admin data console.
#[derive(Clone)]
pub struct AdminGate {
    client: Option<SiteClient>,
    vault: Rc<dyn SessionVault>,
}

impl AdminGate {
    /// Gate over the shared client and the given vault.
    pub fn shared(vault: Rc<dyn SessionVault>) -> Self {
        match site_client() {
            Ok(client) => Self::new(client, vault),
            Err(error) => {
                tracing::warn!(%error, "site client unavailable");
                Self { client: None, vault }
            }
        }
    }

    /// Gate over an explicit client.
    pub fn new(client: SiteClient, vault: Rc<dyn SessionVault>) -> Self {
        Self {
            client: Some(client),
            vault,
        }
    }

    /// True when a previously verified code is on record.
    pub fn is_authorized(&self) -> bool {
        let flagged = self
            .vault
            .get(Tier::Remembered, AppConfig::ADMIN_AUTH_KEY)
            .as_deref()
            == Some(AUTHORIZED);
        flagged && self.stored_code().is_some()
    }

    /// Check a code with the backend. On success the authorization flag
    /// and the code itself persist in the remembered tier.
    pub async fn verify(&self, code: &str) -> Ack {
        let Some(client) = &self.client else {
            return Ack::default();
        };
        match client.verify_admin_code(code).await {
            Ok(ack) => {
                if ack.success {
                    self.vault
                        .set(Tier::Remembered, AppConfig::ADMIN_AUTH_KEY, AUTHORIZED);
                    self.vault
                        .set(Tier::Remembered, AppConfig::ADMIN_CODE_KEY, code);
                }
                ack
            }
            Err(error) => {
                tracing::warn!(%error, "admin code verification failed");
                Ack::default()
            }
        }
    }

    /// Drop the persisted authorization.
    pub fn sign_out(&self) {
        self.vault.remove(Tier::Remembered, AppConfig::ADMIN_AUTH_KEY);
        self.vault.remove(Tier::Remembered, AppConfig::ADMIN_CODE_KEY);
    }

    /// Aggregate counters for the console header.
    pub async fn stats(&self) -> SiteStats {
        let Some((client, code)) = self.credentials() else {
            return SiteStats::default();
        };
        match client.admin_stats(&code).await {
            Ok(stats) => stats,
            Err(error) => {
                tracing::warn!(%error, "admin stats fetch failed");
                SiteStats::default()
            }
        }
    }

    /// Newsletter subscribers, newest first as the backend returns them.
    pub async fn subscribers(&self) -> Vec<Subscriber> {
        let Some((client, code)) = self.credentials() else {
            return Vec::new();
        };
        match client.admin_subscribers(&code).await {
            Ok(subscribers) => subscribers,
            Err(error) => {
                tracing::warn!(%error, "admin subscribers fetch failed");
                Vec::new()
            }
        }
    }

    /// Submitted quote requests.
    pub async fn quotes(&self) -> Vec<QuoteRecord> {
        let Some((client, code)) = self.credentials() else {
            return Vec::new();
        };
        match client.admin_quotes(&code).await {
            Ok(quotes) => quotes,
            Err(error) => {
                tracing::warn!(%error, "admin quotes fetch failed");
                Vec::new()
            }
        }
    }

    /// Contact form messages.
    pub async fn messages(&self) -> Vec<ContactRecord> {
        let Some((client, code)) = self.credentials() else {
            return Vec::new();
        };
        match client.admin_messages(&code).await {
            Ok(messages) => messages,
            Err(error) => {
                tracing::warn!(%error, "admin messages fetch failed");
                Vec::new()
            }
        }
    }

    fn stored_code(&self) -> Option<String> {
        self.vault.get(Tier::Remembered, AppConfig::ADMIN_CODE_KEY)
    }

    fn credentials(&self) -> Option<(&SiteClient, String)> {
        let client = self.client.as_ref()?;
        let code = self.stored_code()?;
        Some((client, code))
    }
}
