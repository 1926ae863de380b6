//! Repository document and page types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Repository identifier of a document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Number(i64),
    Text(String),
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::Number(n) => write!(f, "{}", n),
            DocumentId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for DocumentId {
    fn from(id: i64) -> Self {
        DocumentId::Number(id)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        DocumentId::Text(id.to_string())
    }
}

/// Document record as returned by the repository.
///
/// Only `id` and `title` are interpreted; all other fields are carried along
/// unchanged in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<DocumentId>, title: Option<&str>) -> Self {
        Self {
            id: id.into(),
            title: title.map(str::to_string),
            extra: Map::new(),
        }
    }

    /// Title, if present and not blank
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// One page of a paginated listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentPage {
    /// Documents on this page (absent or null means empty)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<Document>,
    /// Link to the following page; anything but a string means there is none
    #[serde(default, deserialize_with = "string_or_none")]
    pub next: Option<String>,
    /// Total number of matches reported by the repository
    #[serde(default, deserialize_with = "count_or_none", skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Document>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Document>>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(next) => Some(next),
        _ => None,
    })
}

fn count_or_none<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_u64())
}

impl DocumentPage {
    /// Whether the repository advertises a further page
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|next| !next.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_passthrough_fields() {
        let doc: Document = serde_json::from_value(serde_json::json!({
            "id": 42,
            "title": "Stromrechnung März",
            "correspondent": 3,
            "tags": [1, 7]
        }))
        .unwrap();

        assert_eq!(doc.id, DocumentId::Number(42));
        assert_eq!(doc.display_title(), Some("Stromrechnung März"));
        assert_eq!(doc.extra.get("correspondent"), Some(&Value::from(3)));
        assert_eq!(doc.extra.len(), 2);
    }

    #[test]
    fn test_document_null_and_missing_title() {
        let missing: Document = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        let null: Document = serde_json::from_str(r#"{"id": "a1", "title": null}"#).unwrap();
        let blank: Document = serde_json::from_str(r#"{"id": 2, "title": "  "}"#).unwrap();

        assert_eq!(missing.display_title(), None);
        assert_eq!(null.display_title(), None);
        assert_eq!(blank.display_title(), None);
        assert_eq!(null.id.to_string(), "a1");
    }

    #[test]
    fn test_page_next_marker() {
        let page: DocumentPage =
            serde_json::from_str(r#"{"count": 1, "next": null, "results": [{"id": 1}]}"#).unwrap();
        assert!(!page.has_next());

        let page: DocumentPage = serde_json::from_str(
            r#"{"next": "http://paperless/api/documents/?page=2", "results": []}"#,
        )
        .unwrap();
        assert!(page.has_next());

        let page: DocumentPage = serde_json::from_str(r#"{"next": ""}"#).unwrap();
        assert!(!page.has_next());
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_page_null_results_is_empty_page() {
        let page: DocumentPage =
            serde_json::from_str(r#"{"count": 0, "next": null, "results": null}"#).unwrap();
        assert!(page.results.is_empty());
        assert!(!page.has_next());
        assert_eq!(page.count, Some(0));
    }

    #[test]
    fn test_page_non_string_next_means_last_page() {
        let page: DocumentPage =
            serde_json::from_str(r#"{"count": "many", "next": 2, "results": [{"id": 5}]}"#)
                .unwrap();
        assert!(!page.has_next());
        assert_eq!(page.count, None);
        assert_eq!(page.results.len(), 1);

        let page: DocumentPage =
            serde_json::from_str(r#"{"next": false, "results": [{"id": 5}]}"#).unwrap();
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_with_non_list_results_is_rejected() {
        assert!(serde_json::from_str::<DocumentPage>(r#"{"results": {"id": 1}}"#).is_err());
        assert!(serde_json::from_str::<DocumentPage>(r#"{"results": [{"title": "no id"}]}"#).is_err());
    }
}
