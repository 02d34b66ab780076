mod link_opener;
mod repository_search_provider;

pub use link_opener::LinkOpener;
pub use repository_search_provider::RepositorySearchProvider;
