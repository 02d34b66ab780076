mod github_repository_search_provider;
mod system_link_opener;

pub use github_repository_search_provider::GithubRepositorySearchProvider;
pub use system_link_opener::SystemLinkOpener;
