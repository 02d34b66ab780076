mod grid_handle;
mod result_grid;
mod search_result;
mod user_settings;
mod viewport_layout;

pub use grid_handle::GridHandle;
pub use result_grid::{GridColumn, PageSummary, ResultGrid, SortDirection, SortState};
pub use search_result::{parse_search_response, SearchResult};
pub use user_settings::{ThemeMode, UserSettings};
pub use viewport_layout::ViewportLayout;
