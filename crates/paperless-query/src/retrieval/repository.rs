//! Document repository access

use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client};

use crate::config::RepositoryConfig;
use crate::error::{Error, Result};
use crate::types::DocumentPage;

use super::filter::RepositoryFilter;

/// Trait for paged document listing
///
/// Implementations:
/// - `PaperlessClient`: Paperless-ngx REST API over HTTP
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Fetch one page of documents matching the filter (pages start at 1)
    async fn fetch_page(&self, filter: &RepositoryFilter, page: u32) -> Result<DocumentPage>;

    /// Check if the repository is reachable
    async fn health_check(&self) -> Result<bool>;

    /// Get repository name for logging
    fn name(&self) -> &str;
}

/// Paperless-ngx API client
pub struct PaperlessClient {
    /// HTTP client
    client: Client,
    /// API base URL without trailing slash
    base_url: String,
    /// Value of the Authorization header, if a token is configured
    authorization: Option<String>,
}

impl PaperlessClient {
    /// Create a new client with the configured timeout
    pub fn new(config: &RepositoryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(5)
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        let authorization = if config.api_token.is_empty() {
            None
        } else {
            Some(format!("{} {}", config.auth_scheme, config.api_token))
        };

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authorization,
        })
    }

    /// Listing endpoint URL
    pub fn documents_url(&self) -> String {
        format!("{}/documents/", self.base_url)
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        match &self.authorization {
            Some(value) => request.header(AUTHORIZATION, value),
            None => request,
        }
    }
}

fn describe_send_error(url: &str, err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("Request to {} timed out", url)
    } else if err.is_connect() {
        format!("Could not connect to {}: {}", url, err)
    } else {
        format!("Request to {} failed: {}", url, err)
    }
}

#[async_trait]
impl DocumentRepository for PaperlessClient {
    async fn fetch_page(&self, filter: &RepositoryFilter, page: u32) -> Result<DocumentPage> {
        let url = self.documents_url();
        let params = filter.to_query_pairs(page);

        tracing::info!("API request: URL={} PARAMS={:?}", url, params);

        let response = self.get(&url).query(&params).send().await.map_err(|e| {
            let message = describe_send_error(&url, &e);
            tracing::error!("Error during API request: {}", message);
            Error::transport(message)
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = format!("HTTP {} for url: {}", status, url);
            tracing::error!("Error during API request: {}", message);
            return Err(Error::transport(message));
        }

        let body = response.text().await.map_err(|e| {
            let message = describe_send_error(&url, &e);
            tracing::error!("Error reading API response: {}", message);
            Error::transport(message)
        })?;

        serde_json::from_str::<DocumentPage>(&body).map_err(|e| {
            tracing::error!("Invalid JSON response: {}", body);
            Error::malformed(e.to_string())
        })
    }

    async fn health_check(&self) -> Result<bool> {
        match self.get(&format!("{}/", self.base_url)).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "paperless"
    }
}
