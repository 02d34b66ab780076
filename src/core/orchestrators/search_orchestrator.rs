use std::sync::Arc;

use iced::widget::column;
use iced::{Element, Size, Task};

use crate::core::interfaces::adapters::{LinkOpener, RepositorySearchProvider};
use crate::core::models::{
    GridHandle, ResultGrid, SearchResult, ThemeMode, UserSettings, ViewportLayout,
};
use crate::presentation::{result_grid_view, GridMessage, SearchBar, SearchBarMessage};

pub struct SearchOrchestrator {
    search_provider: Arc<dyn RepositorySearchProvider>,
    link_opener: Arc<dyn LinkOpener>,
    settings: UserSettings,
    search_bar: SearchBar,
    grid: ResultGrid,
    grid_handle: Option<GridHandle>,
    layout: ViewportLayout,
    latest_request_id: u64,
}

#[derive(Clone)]
pub enum OrchestratorMessage {
    SearchBar(SearchBarMessage),
    FetchCompleted(u64, Result<Vec<SearchResult>, String>),
    Grid(GridMessage),
    GridReady,
    WindowOpened(Size),
    WindowResized(Size),
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::SearchBar(msg) => write!(f, "SearchBar({:?})", msg),
            OrchestratorMessage::FetchCompleted(request_id, Ok(items)) => {
                write!(f, "FetchCompleted({}, Ok({} items))", request_id, items.len())
            }
            OrchestratorMessage::FetchCompleted(request_id, Err(e)) => {
                write!(f, "FetchCompleted({}, Err({}))", request_id, e)
            }
            OrchestratorMessage::Grid(msg) => write!(f, "Grid({:?})", msg),
            OrchestratorMessage::GridReady => write!(f, "GridReady"),
            OrchestratorMessage::WindowOpened(size) => {
                write!(f, "WindowOpened({}x{})", size.width, size.height)
            }
            OrchestratorMessage::WindowResized(size) => {
                write!(f, "WindowResized({}x{})", size.width, size.height)
            }
        }
    }
}

/// Runs one search and tags the outcome with the request it belongs to.
pub async fn fetch_repositories(
    search_provider: Arc<dyn RepositorySearchProvider>,
    keyword: String,
    request_id: u64,
) -> OrchestratorMessage {
    let outcome = search_provider
        .search_repositories(&keyword)
        .await
        .map_err(|e| format!("{:#}", e));
    OrchestratorMessage::FetchCompleted(request_id, outcome)
}

impl SearchOrchestrator {
    pub fn build(
        search_provider: Arc<dyn RepositorySearchProvider>,
        link_opener: Arc<dyn LinkOpener>,
        settings: UserSettings,
        initial_viewport: Size,
    ) -> Self {
        let grid = ResultGrid::build_with_page_size(settings.page_size);
        Self {
            search_provider,
            link_opener,
            settings,
            search_bar: SearchBar::build(),
            grid,
            grid_handle: None,
            layout: ViewportLayout::build(initial_viewport, SearchBar::region_height()),
            latest_request_id: 0,
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.settings.theme_mode
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::debug!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            OrchestratorMessage::SearchBar(SearchBarMessage::FetchRequested) => {
                return self.handle_fetch_requested();
            }
            OrchestratorMessage::SearchBar(search_bar_msg) => {
                self.search_bar.update(search_bar_msg);
            }
            OrchestratorMessage::FetchCompleted(request_id, outcome) => {
                return self.handle_fetch_completed(request_id, outcome);
            }
            OrchestratorMessage::Grid(grid_msg) => {
                self.handle_grid_message(grid_msg);
            }
            OrchestratorMessage::GridReady => {
                self.handle_grid_ready();
            }
            OrchestratorMessage::WindowOpened(size) => {
                log::info!(
                    "[ORCHESTRATOR] Window opened at {}x{}",
                    size.width,
                    size.height
                );
                self.handle_window_resized(size);
            }
            OrchestratorMessage::WindowResized(size) => {
                self.handle_window_resized(size);
            }
        }

        Task::none()
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        let header = self
            .search_bar
            .render_ui()
            .map(OrchestratorMessage::SearchBar);

        let results = if self.grid.is_empty() {
            result_grid_view::render_placeholder()
        } else {
            result_grid_view::render_grid(
                &self.grid,
                self.grid_handle.as_ref(),
                self.layout.grid_height(),
            )
            .map(OrchestratorMessage::Grid)
        };

        column![header, results].into()
    }

    fn handle_fetch_requested(&mut self) -> Task<OrchestratorMessage> {
        self.latest_request_id += 1;
        let request_id = self.latest_request_id;
        let keyword = self.search_bar.keyword().to_string();

        log::info!(
            "[ORCHESTRATOR] Fetching repositories for {:?} (request {})",
            keyword,
            request_id
        );

        let search_provider = Arc::clone(&self.search_provider);
        Task::future(fetch_repositories(search_provider, keyword, request_id))
    }

    fn handle_fetch_completed(
        &mut self,
        request_id: u64,
        outcome: Result<Vec<SearchResult>, String>,
    ) -> Task<OrchestratorMessage> {
        if request_id != self.latest_request_id {
            log::info!(
                "[ORCHESTRATOR] Discarding response for request {}, request {} is newer",
                request_id,
                self.latest_request_id
            );
            return Task::none();
        }

        match outcome {
            Ok(items) => {
                log::info!(
                    "[ORCHESTRATOR] Request {} returned {} repositories",
                    request_id,
                    items.len()
                );
                self.grid.replace_rows(items);

                if !self.grid.is_empty() && self.grid_handle.is_none() {
                    return Task::done(OrchestratorMessage::GridReady);
                }
            }
            Err(e) => {
                log::error!("[ORCHESTRATOR] Search request {} failed: {}", request_id, e);
            }
        }

        Task::none()
    }

    fn handle_grid_message(&mut self, message: GridMessage) {
        match message {
            GridMessage::SortBy(column) => self.grid.toggle_sort(column),
            GridMessage::FilterChanged(column, filter_text) => {
                self.grid.set_filter(column, filter_text)
            }
            GridMessage::FirstPage => self.grid.go_to_first_page(),
            GridMessage::PreviousPage => self.grid.go_to_previous_page(),
            GridMessage::NextPage => self.grid.go_to_next_page(),
            GridMessage::LastPage => self.grid.go_to_last_page(),
            GridMessage::OpenLink(url) => {
                if let Err(e) = self.link_opener.open_link(&url) {
                    log::error!("[ORCHESTRATOR] Failed to open link: {:#}", e);
                }
            }
        }
    }

    fn handle_grid_ready(&mut self) {
        if self.grid_handle.is_some() {
            log::debug!("[ORCHESTRATOR] Grid already ready, ignoring notification");
            return;
        }

        self.grid_handle = Some(GridHandle::on_grid_ready(self.layout.grid_width()));
    }

    fn handle_window_resized(&mut self, size: Size) {
        self.layout.resize(size, SearchBar::region_height());

        if let Some(handle) = self.grid_handle.as_mut() {
            handle.size_columns_to_fit(self.layout.grid_width());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::GridColumn;
    use std::sync::Mutex;

    struct MockSearchProvider {
        requested_keywords: Mutex<Vec<String>>,
        response: Result<Vec<SearchResult>, String>,
    }

    impl MockSearchProvider {
        fn returning(response: Result<Vec<SearchResult>, String>) -> Self {
            Self {
                requested_keywords: Mutex::new(Vec::new()),
                response,
            }
        }

        fn get_requested_keywords(&self) -> Vec<String> {
            self.requested_keywords.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl RepositorySearchProvider for MockSearchProvider {
        async fn search_repositories(&self, keyword: &str) -> anyhow::Result<Vec<SearchResult>> {
            self.requested_keywords
                .lock()
                .unwrap()
                .push(keyword.to_string());
            self.response.clone().map_err(|e| anyhow::anyhow!(e))
        }
    }

    #[derive(Default)]
    struct MockLinkOpener {
        opened_links: Mutex<Vec<String>>,
    }

    impl LinkOpener for MockLinkOpener {
        fn open_link(&self, url: &str) -> anyhow::Result<()> {
            self.opened_links.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn create_test_orchestrator() -> SearchOrchestrator {
        SearchOrchestrator::build(
            Arc::new(MockSearchProvider::returning(Ok(Vec::new()))),
            Arc::new(MockLinkOpener::default()),
            UserSettings::default(),
            Size::new(900.0, 700.0),
        )
    }

    fn single_result() -> Vec<SearchResult> {
        vec![SearchResult::new(1, "a", "http://x")]
    }

    #[test]
    fn test_build_creates_orchestrator_with_correct_initial_state() {
        let orchestrator = create_test_orchestrator();

        assert!(orchestrator.grid.is_empty());
        assert!(orchestrator.grid_handle.is_none());
        assert_eq!(orchestrator.latest_request_id, 0);
        assert_eq!(orchestrator.grid.page_size(), 10);
        assert_eq!(orchestrator.layout.grid_height(), 700.0 - 128.0);
    }

    #[test]
    fn test_keyword_changes_are_visible_synchronously() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::SearchBar(
            SearchBarMessage::KeywordChanged("iced".to_string()),
        ));

        assert_eq!(orchestrator.search_bar.keyword(), "iced");
    }

    #[test]
    fn test_fetch_requested_issues_new_request_id() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::SearchBar(
            SearchBarMessage::FetchRequested,
        ));
        let _ = orchestrator.update(OrchestratorMessage::SearchBar(
            SearchBarMessage::FetchRequested,
        ));

        assert_eq!(orchestrator.latest_request_id, 2);
    }

    #[tokio::test]
    async fn test_fetch_repositories_sends_keyword_exactly_once() {
        let provider = Arc::new(MockSearchProvider::returning(Ok(single_result())));
        let provider_clone = Arc::clone(&provider);

        let message = fetch_repositories(provider, "tokio".to_string(), 7).await;

        assert_eq!(provider_clone.get_requested_keywords(), vec!["tokio"]);
        match message {
            OrchestratorMessage::FetchCompleted(request_id, Ok(items)) => {
                assert_eq!(request_id, 7);
                assert_eq!(items, single_result());
            }
            other => panic!("Unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_repositories_reports_failure_as_text() {
        let provider = Arc::new(MockSearchProvider::returning(Err(
            "Search API returned status 503".to_string(),
        )));

        let message = fetch_repositories(provider, "serde".to_string(), 1).await;

        match message {
            OrchestratorMessage::FetchCompleted(1, Err(e)) => {
                assert!(e.contains("503"));
            }
            other => panic!("Unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_successful_fetch_replaces_rows() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.latest_request_id = 1;

        let _ = orchestrator.update(OrchestratorMessage::FetchCompleted(1, Ok(single_result())));

        let rows = orchestrator.grid.page_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].name, "a");
        assert_eq!(rows[0].html_url, "http://x");
    }

    #[test]
    fn test_empty_fetch_leaves_grid_empty_for_placeholder() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.latest_request_id = 1;
        let _ = orchestrator.update(OrchestratorMessage::FetchCompleted(1, Ok(single_result())));

        orchestrator.latest_request_id = 2;
        let _ = orchestrator.update(OrchestratorMessage::FetchCompleted(2, Ok(Vec::new())));

        assert!(orchestrator.grid.is_empty());
    }

    #[test]
    fn test_failed_fetch_keeps_previous_rows() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.latest_request_id = 1;
        let _ = orchestrator.update(OrchestratorMessage::FetchCompleted(1, Ok(single_result())));

        orchestrator.latest_request_id = 2;
        let _ = orchestrator.update(OrchestratorMessage::FetchCompleted(
            2,
            Err("Search request failed".to_string()),
        ));

        assert_eq!(orchestrator.grid.rows(), single_result().as_slice());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.latest_request_id = 2;

        let _ = orchestrator.update(OrchestratorMessage::FetchCompleted(1, Ok(single_result())));

        assert!(orchestrator.grid.is_empty());
    }

    #[test]
    fn test_grid_ready_creates_handle_once() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::GridReady);
        let first_widths = orchestrator.grid_handle.as_ref().unwrap().column_widths();

        let _ = orchestrator.update(OrchestratorMessage::WindowResized(Size::new(
            1200.0, 700.0,
        )));
        let _ = orchestrator.update(OrchestratorMessage::GridReady);

        let handle = orchestrator.grid_handle.as_ref().unwrap();
        assert_eq!(first_widths, [150.0, 300.0, 450.0]);
        assert_eq!(handle.column_widths(), [200.0, 400.0, 600.0]);
        assert_eq!(handle.fit_count(), 2);
    }

    #[test]
    fn test_resize_before_grid_ready_only_updates_height() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::WindowResized(Size::new(
            800.0, 500.0,
        )));

        assert!(orchestrator.grid_handle.is_none());
        assert_eq!(orchestrator.layout.grid_height(), 500.0 - 128.0);
    }

    #[test]
    fn test_window_opened_replaces_requested_size_with_actual_size() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::WindowOpened(Size::new(
            1280.0, 800.0,
        )));
        let _ = orchestrator.update(OrchestratorMessage::GridReady);

        assert_eq!(orchestrator.layout.grid_height(), 800.0 - 128.0);
        let handle = orchestrator.grid_handle.as_ref().unwrap();
        assert_eq!(handle.column_width(GridColumn::Id), 1280.0 / 6.0);
    }

    #[test]
    fn test_resize_after_mount_refits_columns_and_height() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator.update(OrchestratorMessage::GridReady);

        let _ = orchestrator.update(OrchestratorMessage::WindowResized(Size::new(
            600.0, 1000.0,
        )));

        assert_eq!(orchestrator.layout.grid_height(), 1000.0 - 128.0);
        let handle = orchestrator.grid_handle.as_ref().unwrap();
        assert_eq!(handle.column_widths(), [100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_grid_messages_drive_grid_state() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.latest_request_id = 1;
        let _ = orchestrator.update(OrchestratorMessage::FetchCompleted(
            1,
            Ok(vec![
                SearchResult::new(2, "b", "http://b"),
                SearchResult::new(1, "a", "http://a"),
            ]),
        ));

        let _ = orchestrator.update(OrchestratorMessage::Grid(GridMessage::SortBy(
            GridColumn::Name,
        )));
        assert_eq!(orchestrator.grid.page_rows()[0].name, "a");

        let _ = orchestrator.update(OrchestratorMessage::Grid(GridMessage::FilterChanged(
            GridColumn::HtmlUrl,
            "http://b".to_string(),
        )));
        assert_eq!(orchestrator.grid.page_rows().len(), 1);
    }

    #[test]
    fn test_open_link_uses_link_opener() {
        let link_opener = Arc::new(MockLinkOpener::default());
        let mut orchestrator = SearchOrchestrator::build(
            Arc::new(MockSearchProvider::returning(Ok(Vec::new()))),
            link_opener.clone(),
            UserSettings::default(),
            Size::new(900.0, 700.0),
        );

        let _ = orchestrator.update(OrchestratorMessage::Grid(GridMessage::OpenLink(
            "http://x".to_string(),
        )));

        assert_eq!(
            *link_opener.opened_links.lock().unwrap(),
            vec!["http://x".to_string()]
        );
    }
}
