//! End-to-end query handling: text in, message out

use std::sync::Arc;

use crate::config::QueryServiceConfig;
use crate::error::Result;
use crate::generation::MessageFormatter;
use crate::nlp::Annotator;
use crate::parsing::QueryParser;
use crate::retrieval::{DocumentRepository, FilterTranslator, PaginationFetcher, PaperlessClient, RepositoryFilter};
use crate::types::{Document, ParsedQuery};

/// Parser, translator, fetcher and formatter wired together
#[derive(Clone)]
pub struct QueryPipeline {
    parser: QueryParser,
    translator: FilterTranslator,
    fetcher: PaginationFetcher,
    formatter: MessageFormatter,
}

impl QueryPipeline {
    /// Assemble a pipeline from its parts
    pub fn new(
        parser: QueryParser,
        translator: FilterTranslator,
        fetcher: PaginationFetcher,
        formatter: MessageFormatter,
    ) -> Self {
        Self {
            parser,
            translator,
            fetcher,
            formatter,
        }
    }

    /// Build from configuration with an injected annotator and repository
    pub fn with_repository(
        config: &QueryServiceConfig,
        annotator: Arc<dyn Annotator>,
        repository: Arc<dyn DocumentRepository>,
    ) -> Self {
        Self::new(
            QueryParser::new(annotator),
            FilterTranslator::new(config.repository.document_type_names.clone()),
            PaginationFetcher::new(repository, config.repository.max_pages),
            MessageFormatter::new(config.repository.ui_base_url.clone()),
        )
    }

    /// Build from configuration, talking to Paperless over HTTP
    pub fn from_config(config: &QueryServiceConfig, annotator: Arc<dyn Annotator>) -> Result<Self> {
        let repository = Arc::new(PaperlessClient::new(&config.repository)?);
        Ok(Self::with_repository(config, annotator, repository))
    }

    /// Extract slots and the filter they translate to
    pub fn parse(&self, text: &str) -> (ParsedQuery, RepositoryFilter) {
        let query = self.parser.parse(text);
        let filter = self.translator.translate(&query);
        (query, filter)
    }

    /// Fetch every document matching the text
    pub async fn retrieve(&self, text: &str) -> Result<Vec<Document>> {
        let (_, filter) = self.parse(text);
        self.fetcher.fetch(&filter).await
    }

    /// Answer a query. Retrieval failures are reported in the message itself.
    pub async fn answer(&self, text: &str) -> String {
        match self.retrieve(text).await {
            Ok(documents) => self.formatter.format(&documents),
            Err(e) => {
                tracing::error!("Query failed: {}", e);
                self.formatter.format_error(&e)
            }
        }
    }

    pub fn fetcher(&self) -> &PaginationFetcher {
        &self.fetcher
    }
}
