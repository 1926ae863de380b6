//! Response types for the HTTP surface

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::query::ParsedQuery;

/// Reply to a query: always a single display message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub message: String,
}

impl QueryResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Reply to a parse request: the extracted slots and the wire filter they produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    pub query: ParsedQuery,
    pub filter: BTreeMap<String, String>,
}
