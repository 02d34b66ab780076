use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::SearchResult;

#[async_trait]
pub trait RepositorySearchProvider: Send + Sync {
    async fn search_repositories(&self, keyword: &str) -> Result<Vec<SearchResult>>;
}
