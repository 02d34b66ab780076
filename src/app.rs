use std::sync::Arc;

use iced::{Element, Size, Task, Theme};

use crate::adapters::{GithubRepositorySearchProvider, SystemLinkOpener};
use crate::core::models::UserSettings;
use crate::core::orchestrators::search_orchestrator::{OrchestratorMessage, SearchOrchestrator};
use crate::global_constants;
use crate::presentation::app_theme;

pub struct GitItApp {
    orchestrator: SearchOrchestrator,
}

impl GitItApp {
    pub fn initial_window_size() -> Size {
        Size::new(
            global_constants::DEFAULT_WINDOW_WIDTH,
            global_constants::DEFAULT_WINDOW_HEIGHT,
        )
    }

    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        let search_provider = Arc::new(GithubRepositorySearchProvider::new(&settings));
        let link_opener = Arc::new(SystemLinkOpener::new());

        let orchestrator = SearchOrchestrator::build(
            search_provider,
            link_opener,
            settings,
            Self::initial_window_size(),
        );

        (Self { orchestrator }, Task::none())
    }

    pub fn title(&self) -> String {
        global_constants::APPLICATION_TITLE.to_string()
    }

    pub fn theme(&self) -> Theme {
        app_theme::get_theme(&self.orchestrator.theme_mode())
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }

    /// Resize listening lasts exactly as long as the application keeps
    /// returning this subscription.
    pub fn handle_subscription(&self) -> iced::Subscription<OrchestratorMessage> {
        use iced::window;

        iced::Subscription::batch([
            iced::event::listen_with(|event, _status, _id| {
                if let iced::Event::Window(window::Event::Opened { size, .. }) = event {
                    return Some(OrchestratorMessage::WindowOpened(size));
                }
                None
            }),
            window::resize_events().map(|(_id, size)| OrchestratorMessage::WindowResized(size)),
        ])
    }
}
