//! Application state for the query server

use std::sync::Arc;

use crate::config::QueryServiceConfig;
use crate::error::Result;
use crate::nlp::{Annotator, RuleBasedAnnotator};
use crate::pipeline::QueryPipeline;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: QueryServiceConfig,
    /// Query pipeline (holds the shared annotator and HTTP client)
    pipeline: QueryPipeline,
}

impl AppState {
    /// Create new application state. The annotator is built here, once.
    pub fn new(config: QueryServiceConfig) -> Result<Self> {
        tracing::info!("Initializing query service state...");

        let annotator: Arc<dyn Annotator> =
            Arc::new(RuleBasedAnnotator::from_config(&config.annotator));
        tracing::info!(
            "Annotator initialized ({}, {} known organizations)",
            annotator.name(),
            config.annotator.organizations.len()
        );

        let pipeline = QueryPipeline::from_config(&config, annotator)?;
        tracing::info!("Repository client initialized for {}", config.repository.base_url);

        Ok(Self::from_parts(config, pipeline))
    }

    /// Create state around an already assembled pipeline
    pub fn from_parts(config: QueryServiceConfig, pipeline: QueryPipeline) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, pipeline }),
        }
    }

    pub fn config(&self) -> &QueryServiceConfig {
        &self.inner.config
    }

    pub fn pipeline(&self) -> &QueryPipeline {
        &self.inner.pipeline
    }

    /// Whether the document repository answers
    pub async fn is_ready(&self) -> bool {
        self.inner
            .pipeline
            .fetcher()
            .repository()
            .health_check()
            .await
            .unwrap_or(false)
    }
}
