//! Translation of parsed queries into repository filter parameters

use std::collections::BTreeMap;

use crate::config::DocumentTypeNames;
use crate::types::ParsedQuery;

/// Query parameter carrying the page number
pub const PAGE_PARAM: &str = "page";

/// Filters understood by the repository listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    DocumentTypeContains,
    TagsContains,
    ContributorContains,
    CreatedGte,
    CreatedLte,
}

impl FilterKey {
    /// Logical filter name
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::DocumentTypeContains => "document_type_contains",
            FilterKey::TagsContains => "tags_contains",
            FilterKey::ContributorContains => "contributor_contains",
            FilterKey::CreatedGte => "created_gte",
            FilterKey::CreatedLte => "created_lte",
        }
    }

    /// Query parameter name on the Paperless REST API
    pub fn param_name(&self) -> &'static str {
        match self {
            FilterKey::DocumentTypeContains => "document_type__name__icontains",
            FilterKey::TagsContains => "tags__name__icontains",
            FilterKey::ContributorContains => "correspondent__name__icontains",
            FilterKey::CreatedGte => "created__date__gte",
            FilterKey::CreatedLte => "created__date__lte",
        }
    }
}

/// Filter values for one query; all entries are ANDed by the repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryFilter {
    entries: BTreeMap<FilterKey, String>,
}

impl RepositoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: FilterKey, value: impl Into<String>) {
        self.entries.insert(key, value.into());
    }

    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Wire parameters for one page request
    pub fn to_query_pairs(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = self
            .entries
            .iter()
            .map(|(key, value)| (key.param_name(), value.clone()))
            .collect();
        pairs.push((PAGE_PARAM, page.to_string()));
        pairs
    }

    /// Wire parameter map without the page number
    pub fn to_wire_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(key, value)| (key.param_name().to_string(), value.clone()))
            .collect()
    }
}

/// Maps a [`ParsedQuery`] onto repository filters
#[derive(Debug, Clone, Default)]
pub struct FilterTranslator {
    type_names: DocumentTypeNames,
}

impl FilterTranslator {
    pub fn new(type_names: DocumentTypeNames) -> Self {
        Self { type_names }
    }

    /// Build the filter for a query. Empty slots add no entry.
    pub fn translate(&self, query: &ParsedQuery) -> RepositoryFilter {
        let mut filter = RepositoryFilter::new();

        if let Some(kind) = query.document_type {
            filter.insert(FilterKey::DocumentTypeContains, self.type_names.name_for(kind));
        }
        if !query.tags.is_empty() {
            filter.insert(FilterKey::TagsContains, query.tags.join(","));
        }
        if !query.contributors.is_empty() {
            filter.insert(FilterKey::ContributorContains, query.contributors.join(","));
        }
        if let Some(start) = query.start_date {
            filter.insert(FilterKey::CreatedGte, start.format("%Y-%m-%d").to_string());
        }
        if let Some(end) = query.end_date {
            filter.insert(FilterKey::CreatedLte, end.format("%Y-%m-%d").to_string());
        }

        filter
    }
}
