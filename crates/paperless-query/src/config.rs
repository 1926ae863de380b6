//! Configuration for the query service

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::types::DocumentType;

/// Environment variable naming a TOML config file
pub const CONFIG_PATH_ENV: &str = "PAPERLESS_QUERY_CONFIG";

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Document repository configuration
    #[serde(default)]
    pub repository: RepositoryConfig,
    /// Annotator configuration
    #[serde(default)]
    pub annotator: AnnotatorConfig,
}

impl QueryServiceConfig {
    /// Load configuration from an optional TOML file, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&raw)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Override repository settings from `BASE_URL`, `UI_BASE_URL` and `API_KEY`
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("BASE_URL") {
            self.repository.base_url = url;
        }
        if let Some(url) = lookup("UI_BASE_URL") {
            self.repository.ui_base_url = url;
        }
        if let Some(token) = lookup("API_KEY") {
            self.repository.api_token = token;
        }
    }

    /// Reject configurations the service cannot run with
    pub fn validate(&self) -> Result<()> {
        check_http_url("repository.base_url", &self.repository.base_url)?;
        check_http_url("repository.ui_base_url", &self.repository.ui_base_url)?;
        if self.repository.timeout_secs == 0 {
            return Err(Error::config("repository.timeout_secs must be greater than zero"));
        }
        if self.repository.max_pages == 0 {
            return Err(Error::config("repository.max_pages must be greater than zero"));
        }
        if self.repository.api_token.is_empty() {
            tracing::warn!("repository.api_token is empty, requests will be unauthenticated");
        }
        Ok(())
    }
}

fn check_http_url(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::config(format!("{} is not set", field)));
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(Error::config(format!(
            "{} must be an http(s) URL, got '{}'",
            field, value
        )));
    }
    Ok(())
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number
    #[serde(default = "default_port")]
    pub port: u16,
    /// Enable CORS
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    7000
}

fn default_enable_cors() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_enable_cors(),
        }
    }
}

/// Document repository (Paperless API) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// API base URL, e.g. `http://paperless.local/api`
    #[serde(default)]
    pub base_url: String,
    /// Web UI base URL used to build document links
    #[serde(default)]
    pub ui_base_url: String,
    /// Access token sent with every request
    #[serde(default)]
    pub api_token: String,
    /// Authorization scheme placed before the token
    #[serde(default = "default_auth_scheme")]
    pub auth_scheme: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Upper bound on pages fetched for one query
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
    /// Names the repository uses for each document type
    #[serde(default)]
    pub document_type_names: DocumentTypeNames,
}

fn default_auth_scheme() -> String {
    "Token".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_pages() -> u32 {
    1000
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            ui_base_url: String::new(),
            api_token: String::new(),
            auth_scheme: default_auth_scheme(),
            timeout_secs: default_timeout_secs(),
            max_pages: default_max_pages(),
            document_type_names: DocumentTypeNames::default(),
        }
    }
}

impl RepositoryConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Repository-side names of the recognised document types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeNames {
    #[serde(default = "default_invoice_name")]
    pub invoice: String,
    #[serde(default = "default_contract_name")]
    pub contract: String,
    #[serde(default = "default_report_name")]
    pub report: String,
}

fn default_invoice_name() -> String {
    "rechnung".to_string()
}

fn default_contract_name() -> String {
    "vertrag".to_string()
}

fn default_report_name() -> String {
    "bericht".to_string()
}

impl Default for DocumentTypeNames {
    fn default() -> Self {
        Self {
            invoice: default_invoice_name(),
            contract: default_contract_name(),
            report: default_report_name(),
        }
    }
}

impl DocumentTypeNames {
    /// Repository name for a document type
    pub fn name_for(&self, document_type: DocumentType) -> &str {
        match document_type {
            DocumentType::Invoice => &self.invoice,
            DocumentType::Contract => &self.contract,
            DocumentType::Report => &self.report,
        }
    }
}

/// Rule-based annotator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotatorConfig {
    /// Organisation names recognised verbatim (gazetteer)
    #[serde(default)]
    pub organizations: Vec<String>,
}
