use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::RepositorySearchProvider;
use crate::core::models::{parse_search_response, SearchResult, UserSettings};
use crate::global_constants;

pub struct GithubRepositorySearchProvider {
    client: reqwest::Client,
    search_url_template: String,
}

impl GithubRepositorySearchProvider {
    pub fn new(settings: &UserSettings) -> Self {
        let mut builder = reqwest::Client::builder().user_agent(global_constants::HTTP_USER_AGENT);

        if let Some(timeout) = settings.request_timeout() {
            log::debug!("[GITHUB_SEARCH] Using request timeout of {:?}", timeout);
            builder = builder.timeout(timeout);
        }

        let client = builder.build().unwrap_or_else(|e| {
            log::warn!(
                "[GITHUB_SEARCH] Failed to build configured HTTP client: {}, using defaults",
                e
            );
            reqwest::Client::new()
        });

        Self {
            client,
            search_url_template: settings.search_url_template.clone(),
        }
    }

    fn construct_search_url(&self, keyword: &str) -> String {
        let encoded_keyword = urlencoding::encode(keyword);
        self.search_url_template
            .replace(global_constants::SEARCH_URL_PLACEHOLDER, &encoded_keyword)
    }
}

#[async_trait]
impl RepositorySearchProvider for GithubRepositorySearchProvider {
    async fn search_repositories(&self, keyword: &str) -> Result<Vec<SearchResult>> {
        let search_url = self.construct_search_url(keyword);
        log::info!("[GITHUB_SEARCH] Searching repositories for {:?}", keyword);
        log::debug!("[GITHUB_SEARCH] Search URL: {}", search_url);

        let response = self
            .client
            .get(&search_url)
            .header(reqwest::header::ACCEPT, global_constants::GITHUB_ACCEPT_HEADER)
            .send()
            .await
            .context("Search request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::debug!("[GITHUB_SEARCH] Error response body: {}", body);
            anyhow::bail!("Search API returned status {}", status);
        }

        let body = response
            .text()
            .await
            .context("Failed to read search response body")?;
        let items = parse_search_response(&body)?;

        log::info!("[GITHUB_SEARCH] Received {} repositories", items.len());
        Ok(items)
    }
}
