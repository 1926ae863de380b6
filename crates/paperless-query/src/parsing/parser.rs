//! Slot extraction from free-text queries

use std::sync::Arc;

use crate::nlp::{Annotator, EntityLabel};
use crate::types::{DocumentType, ParsedQuery};

/// Extracts document type, contributors, date and tags from a query.
///
/// Parsing never fails: a slot with no signal in the text stays empty.
#[derive(Clone)]
pub struct QueryParser {
    annotator: Arc<dyn Annotator>,
}

impl QueryParser {
    /// Create a parser over a shared annotator
    pub fn new(annotator: Arc<dyn Annotator>) -> Self {
        Self { annotator }
    }

    /// Parse a query string
    pub fn parse(&self, text: &str) -> ParsedQuery {
        let annotation = self.annotator.annotate(text);
        let mut query = ParsedQuery::default();

        // Every match overwrites the previous one, so the last type named wins.
        for token in &annotation.tokens {
            if let Some(kind) = DocumentType::from_lemma(&token.lemma) {
                query.document_type = Some(kind);
            }
        }

        query.contributors = annotation
            .entities_labeled(EntityLabel::Organization)
            .map(|entity| entity.text.clone())
            .collect();

        // One window only: the whole text yields at most one date.
        if let Some(date) = self.annotator.parse_date(text) {
            query.set_single_day(date);
        }

        for token in &annotation.tokens {
            if !token.pos.is_nominal() {
                continue;
            }
            if DocumentType::from_lemma(&token.lemma).is_some() {
                continue;
            }
            // Full-text comparison: words inside a multi-word organisation stay tags.
            if query.contributors.iter().any(|c| *c == token.text) {
                continue;
            }
            if self.annotator.parse_date(&token.text).is_some() {
                continue;
            }
            query.tags.push(token.lemma.clone());
        }

        tracing::debug!(
            "Parsed \"{}\" via {}: type={:?} tags={:?} contributors={:?} date={:?}",
            text,
            self.annotator.name(),
            query.document_type,
            query.tags,
            query.contributors,
            query.start_date
        );

        query
    }
}
