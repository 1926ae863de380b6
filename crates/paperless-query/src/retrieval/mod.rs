//! Retrieval: filter translation, repository access and paginated fetching

pub mod fetcher;
pub mod filter;
pub mod repository;

pub use fetcher::PaginationFetcher;
pub use filter::{FilterKey, FilterTranslator, RepositoryFilter};
pub use repository::{DocumentRepository, PaperlessClient};
