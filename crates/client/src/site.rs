//! Typed HTTP client for the public site endpoints
//!
//! Error handling stops at this boundary: callers in the frontend wrap each
//! method and degrade failures to defaults, so nothing here retries or
//! papers over a bad status.

use reqwest::{Client, ClientBuilder, Method};

use crate::error::{ClientError, ClientResult};
use crate::types::{
    Ack, AdminVerifyRequest, ContactMessage, ContactRecord, LaunchInfo, QuoteRecord, QuoteRequest,
    SiteStats, SubscribeRequest, Subscriber,
};

const USER_AGENT: &str = "techpoa-web/0.1.0";

/// Client for the TechPoa site API.
#[derive(Clone)]
pub struct SiteClient {
    client: Client,
    base_url: String,
}

impl SiteClient {
    /// Create a client rooted at `base_url` (trailing slash tolerated).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        #[cfg(not(target_arch = "wasm32"))]
        let client = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        // Timeouts are not supported on WASM; the browser owns them.
        #[cfg(target_arch = "wasm32")]
        let client = ClientBuilder::new().user_agent(USER_AGENT).build()?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `/newsletter/subscribe`
    pub async fn subscribe_newsletter(&self, email: &str) -> ClientResult<Ack> {
        let body = SubscribeRequest {
            email: email.to_string(),
        };
        self.execute(
            self.request(Method::POST, "/newsletter/subscribe")
                .json(&body),
        )
        .await
    }

    /// POST `/quotes`
    pub async fn submit_quote(&self, request: &QuoteRequest) -> ClientResult<Ack> {
        self.execute(self.request(Method::POST, "/quotes").json(request))
            .await
    }

    /// POST `/contact`
    pub async fn submit_contact(&self, message: &ContactMessage) -> ClientResult<Ack> {
        self.execute(self.request(Method::POST, "/contact").json(message))
            .await
    }

    /// GET `/launch`
    pub async fn launch_info(&self) -> ClientResult<LaunchInfo> {
        self.execute(self.request(Method::GET, "/launch")).await
    }

    /// POST `/admin/verify`
    pub async fn verify_admin_code(&self, code: &str) -> ClientResult<Ack> {
        let body = AdminVerifyRequest {
            code: code.to_string(),
        };
        self.execute(self.request(Method::POST, "/admin/verify").json(&body))
            .await
    }

    /// GET `/admin/stats`
    pub async fn admin_stats(&self, code: &str) -> ClientResult<SiteStats> {
        self.execute(
            self.request(Method::GET, "/admin/stats")
                .query(&[("code", code)]),
        )
        .await
    }

    /// GET `/admin/subscribers`
    pub async fn admin_subscribers(&self, code: &str) -> ClientResult<Vec<Subscriber>> {
        self.execute(
            self.request(Method::GET, "/admin/subscribers")
                .query(&[("code", code)]),
        )
        .await
    }

    /// GET `/admin/quotes`
    pub async fn admin_quotes(&self, code: &str) -> ClientResult<Vec<QuoteRecord>> {
        self.execute(
            self.request(Method::GET, "/admin/quotes")
                .query(&[("code", code)]),
        )
        .await
    }

    /// GET `/admin/contact-messages`
    pub async fn admin_messages(&self, code: &str) -> ClientResult<Vec<ContactRecord>> {
        self.execute(
            self.request(Method::GET, "/admin/contact-messages")
                .query(&[("code", code)]),
        )
        .await
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}
