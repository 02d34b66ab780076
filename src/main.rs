#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;


fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    iced::application(
        app::GitItApp::build,
        app::GitItApp::handle_update,
        app::GitItApp::render_view,
    )
    .title(app::GitItApp::title)
    .theme(app::GitItApp::theme)
    .subscription(app::GitItApp::handle_subscription)
    .window_size(app::GitItApp::initial_window_size())
    .run()
}
