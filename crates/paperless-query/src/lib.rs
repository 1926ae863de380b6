//! paperless-query: natural-language document lookup for Paperless
//!
//! Turns a free-text question ("Rechnungen von Acme GmbH aus März 2023") into
//! structured search slots, translates them into repository filters, pages
//! through the matching documents and renders a message with links.

pub mod config;
pub mod error;
pub mod generation;
pub mod nlp;
pub mod parsing;
pub mod pipeline;
pub mod retrieval;
pub mod server;
pub mod types;

pub use config::QueryServiceConfig;
pub use error::{Error, Result};
pub use pipeline::QueryPipeline;
pub use types::{
    document::{Document, DocumentId, DocumentPage},
    query::{DocumentType, ParsedQuery, QueryRequest},
    response::QueryResponse,
};
