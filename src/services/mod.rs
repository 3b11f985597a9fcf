//! HTTP plumbing shared by the Catalog and Sales services.

pub mod catalog;
pub mod sales;

pub use catalog::{CatalogService, HttpCatalogService};
pub use sales::{HttpSalesService, SalesService};

use reqwest::{Client, RequestBuilder};
use std::time::Duration;

use crate::config::ApiConfig;
use crate::errors::PosError;

/// Shared HTTP client with timeouts, built once and reused across requests.
/// Every request carries `Authorization: Token <value>` when a token is
/// configured; token lifecycle is external to this core.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, PosError> {
        Self::from_parts(
            &config.base_url,
            config.token.clone(),
            Duration::from_secs(config.request_timeout_secs),
            Duration::from_secs(config.connect_timeout_secs),
        )
    }

    pub fn from_parts(
        base_url: &str,
        token: Option<String>,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, PosError> {
        let http = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| PosError::InvalidInput(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Token {}", token)),
            None => builder,
        }
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.get(self.url(path)))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.post(self.url(path)))
    }

    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.patch(self.url(path)))
    }
}

/// Human-readable transport failure, with timeouts called out explicitly.
pub(crate) fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "Request timed out. Check the network connection.".to_string()
    } else if err.is_connect() {
        format!("Could not reach the server: {}", err)
    } else {
        err.to_string()
    }
}

/// Pull the server's error detail out of a JSON body, falling back to the
/// raw text. DRF uses {"detail": ...}; custom views use {"error": ...}.
pub(crate) fn extract_error_detail(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "error", "message"] {
            if let Some(detail) = value.get(key).and_then(|v| v.as_str()) {
                return detail.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no further detail".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}
