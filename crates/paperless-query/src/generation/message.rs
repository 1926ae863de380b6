//! Renders retrieval results as a single display message

use crate::error::Error;
use crate::types::Document;

/// Message when nothing matched
pub const NO_DOCUMENTS: &str = "No documents found.";

/// Label for documents without a title
pub const UNTITLED: &str = "Untitled document";

/// Builds markdown-style result messages with links into the repository UI
#[derive(Debug, Clone)]
pub struct MessageFormatter {
    /// UI base URL without trailing slash
    ui_base_url: String,
}

impl MessageFormatter {
    pub fn new(ui_base_url: impl Into<String>) -> Self {
        let ui_base_url = ui_base_url.into();
        Self {
            ui_base_url: ui_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Link to a document in the UI
    pub fn document_link(&self, document: &Document) -> String {
        format!("{}/{}/", self.ui_base_url, document.id)
    }

    /// Header line followed by one link per document, in input order
    pub fn format(&self, documents: &[Document]) -> String {
        if documents.is_empty() {
            return NO_DOCUMENTS.to_string();
        }

        let lines: Vec<String> = documents
            .iter()
            .map(|doc| {
                let title = doc.display_title().unwrap_or(UNTITLED);
                format!("[{}]({})", title, self.document_link(doc))
            })
            .collect();

        format!("{} document(s) found:\n{}", lines.len(), lines.join("\n"))
    }

    /// Message for a failed retrieval
    pub fn format_error(&self, error: &Error) -> String {
        format!("Error fetching documents: {}", error)
    }
}
