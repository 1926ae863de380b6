//! Core types for the query service

pub mod document;
pub mod query;
pub mod response;

pub use document::{Document, DocumentId, DocumentPage};
pub use query::{DocumentType, ParsedQuery, QueryRequest};
pub use response::{ParseResponse, QueryResponse};
