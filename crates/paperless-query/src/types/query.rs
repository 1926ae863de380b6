//! Query request and parsed-query types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Document type recognised from the query text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Invoice,
    Contract,
    Report,
}

impl DocumentType {
    /// Lemmas (lowercase) that signal each document type
    pub const VOCABULARY: &'static [(&'static str, DocumentType)] = &[
        ("rechnung", DocumentType::Invoice),
        ("invoice", DocumentType::Invoice),
        ("vertrag", DocumentType::Contract),
        ("contract", DocumentType::Contract),
        ("bericht", DocumentType::Report),
        ("report", DocumentType::Report),
    ];

    /// Match a lemma against the vocabulary, ignoring case
    pub fn from_lemma(lemma: &str) -> Option<Self> {
        let lower = lemma.to_lowercase();
        Self::VOCABULARY
            .iter()
            .find(|(word, _)| *word == lower)
            .map(|(_, kind)| *kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Invoice => "invoice",
            DocumentType::Contract => "contract",
            DocumentType::Report => "report",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured search intent extracted from free text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// Last document-type lemma seen in the text
    pub document_type: Option<DocumentType>,
    /// Noun lemmas not claimed by another slot, in token order
    pub tags: Vec<String>,
    /// Literal organisation entity texts, in entity order
    pub contributors: Vec<String>,
    /// Lower bound of the creation date window
    pub start_date: Option<NaiveDate>,
    /// Upper bound of the creation date window
    pub end_date: Option<NaiveDate>,
}

impl ParsedQuery {
    /// Set both ends of the date window to one day
    pub fn set_single_day(&mut self, date: NaiveDate) {
        self.start_date = Some(date);
        self.end_date = Some(date);
    }
}

/// Inbound query request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Free-text question about documents
    pub text: String,
}

impl QueryRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
