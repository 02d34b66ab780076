pub mod app_theme;
pub mod result_grid_view;
mod search_bar;

pub use result_grid_view::GridMessage;
pub use search_bar::{SearchBar, SearchBarMessage};
