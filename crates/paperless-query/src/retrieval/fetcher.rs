//! Paginated aggregation over a document repository

use std::sync::Arc;

use crate::error::Result;
use crate::types::Document;

use super::filter::RepositoryFilter;
use super::repository::DocumentRepository;

/// Walks repository pages from 1 upward and collects every document.
///
/// One request is in flight at a time. Any failing page aborts the whole
/// fetch: documents gathered from earlier pages are dropped and only the
/// error is returned.
#[derive(Clone)]
pub struct PaginationFetcher {
    repository: Arc<dyn DocumentRepository>,
    /// Hard stop on the number of pages requested
    max_pages: u32,
}

impl PaginationFetcher {
    pub fn new(repository: Arc<dyn DocumentRepository>, max_pages: u32) -> Self {
        Self {
            repository,
            max_pages: max_pages.max(1),
        }
    }

    pub fn repository(&self) -> &Arc<dyn DocumentRepository> {
        &self.repository
    }

    /// Fetch all documents matching the filter
    pub async fn fetch(&self, filter: &RepositoryFilter) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        let mut page = 1u32;

        loop {
            let batch = self.repository.fetch_page(filter, page).await?;

            if batch.results.is_empty() {
                break;
            }

            let has_next = batch.has_next();
            documents.extend(batch.results);

            if !has_next {
                break;
            }
            if page >= self.max_pages {
                tracing::warn!(
                    "Stopping after {} pages from {}, more results are available",
                    page,
                    self.repository.name()
                );
                break;
            }
            page += 1;
        }

        tracing::info!(
            "Fetched {} documents in {} page(s) from {}",
            documents.len(),
            page,
            self.repository.name()
        );

        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::retrieval::FilterKey;
    use crate::types::DocumentPage;
    use async_trait::async_trait;
    use std::sync::Mutex;

    enum Reply {
        Page { ids: Vec<i64>, next: bool },
        TransportError,
        Malformed,
    }

    /// Repository replaying a fixed sequence of pages and recording requests
    struct ScriptedRepository {
        replies: Vec<Reply>,
        requested: Mutex<Vec<(u32, RepositoryFilter)>>,
    }

    impl ScriptedRepository {
        fn new(replies: Vec<Reply>) -> Arc<Self> {
            Arc::new(Self {
                replies,
                requested: Mutex::new(Vec::new()),
            })
        }

        fn pages_requested(&self) -> Vec<u32> {
            self.requested.lock().unwrap().iter().map(|(page, _)| *page).collect()
        }
    }

    #[async_trait]
    impl DocumentRepository for ScriptedRepository {
        async fn fetch_page(&self, filter: &RepositoryFilter, page: u32) -> Result<DocumentPage> {
            self.requested.lock().unwrap().push((page, filter.clone()));

            match self.replies.get(page as usize - 1) {
                Some(Reply::Page { ids, next }) => Ok(DocumentPage {
                    results: ids
                        .iter()
                        .map(|id| Document::new(*id, Some(format!("Doc {id}").as_str())))
                        .collect(),
                    next: next.then(|| format!("http://repo/documents/?page={}", page + 1)),
                    count: None,
                }),
                Some(Reply::TransportError) => Err(Error::transport("HTTP 502 Bad Gateway")),
                Some(Reply::Malformed) => Err(Error::malformed("expected value")),
                None => panic!("page {page} was not expected to be requested"),
            }
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    fn ids(documents: &[Document]) -> Vec<String> {
        documents.iter().map(|d| d.id.to_string()).collect()
    }

    #[tokio::test]
    async fn test_stops_on_empty_page() {
        let repo = ScriptedRepository::new(vec![
            Reply::Page { ids: vec![1, 2], next: true },
            Reply::Page { ids: vec![3], next: true },
            Reply::Page { ids: vec![], next: true },
        ]);
        let fetcher = PaginationFetcher::new(repo.clone(), 100);

        let documents = fetcher.fetch(&RepositoryFilter::new()).await.unwrap();

        assert_eq!(ids(&documents), vec!["1", "2", "3"]);
        assert_eq!(repo.pages_requested(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_stops_when_next_is_missing() {
        let repo = ScriptedRepository::new(vec![
            Reply::Page { ids: vec![1], next: true },
            Reply::Page { ids: vec![2], next: false },
        ]);
        let fetcher = PaginationFetcher::new(repo.clone(), 100);

        let documents = fetcher.fetch(&RepositoryFilter::new()).await.unwrap();

        assert_eq!(ids(&documents), vec!["1", "2"]);
        assert_eq!(repo.pages_requested(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_first_page_empty() {
        let repo = ScriptedRepository::new(vec![Reply::Page { ids: vec![], next: false }]);
        let fetcher = PaginationFetcher::new(repo.clone(), 100);

        assert!(fetcher.fetch(&RepositoryFilter::new()).await.unwrap().is_empty());
        assert_eq!(repo.pages_requested(), vec![1]);
    }

    #[tokio::test]
    async fn test_transport_error_discards_earlier_pages() {
        let repo = ScriptedRepository::new(vec![
            Reply::Page { ids: vec![1, 2], next: true },
            Reply::TransportError,
        ]);
        let fetcher = PaginationFetcher::new(repo.clone(), 100);

        let err = fetcher.fetch(&RepositoryFilter::new()).await.unwrap_err();

        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(repo.pages_requested(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_malformed_page_aborts() {
        let repo = ScriptedRepository::new(vec![Reply::Malformed]);
        let fetcher = PaginationFetcher::new(repo, 100);

        let err = fetcher.fetch(&RepositoryFilter::new()).await.unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_page_bound() {
        let repo = ScriptedRepository::new(vec![
            Reply::Page { ids: vec![1], next: true },
            Reply::Page { ids: vec![2], next: true },
            Reply::Page { ids: vec![3], next: true },
        ]);
        let fetcher = PaginationFetcher::new(repo.clone(), 2);

        let documents = fetcher.fetch(&RepositoryFilter::new()).await.unwrap();

        assert_eq!(ids(&documents), vec!["1", "2"]);
        assert_eq!(repo.pages_requested(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_same_filter_on_every_page() {
        let repo = ScriptedRepository::new(vec![
            Reply::Page { ids: vec![1], next: true },
            Reply::Page { ids: vec![2], next: false },
        ]);
        let fetcher = PaginationFetcher::new(repo.clone(), 100);

        let mut filter = RepositoryFilter::new();
        filter.insert(FilterKey::ContributorContains, "Acme GmbH");
        fetcher.fetch(&filter).await.unwrap();

        let requested = repo.requested.lock().unwrap();
        assert!(requested.iter().all(|(_, f)| *f == filter));
    }
}
