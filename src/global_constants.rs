pub const APPLICATION_NAME: &str = "Git It - Repository Search";
pub const APPLICATION_TITLE: &str = "Git It";

pub const DEFAULT_SEARCH_URL_TEMPLATE: &str = "https://api.github.com/search/repositories?q={}";
pub const SEARCH_URL_PLACEHOLDER: &str = "{}";
pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";
pub const HTTP_USER_AGENT: &str = concat!("git-it/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MIN_COLUMN_WIDTH: f32 = 80.0;

pub const KEYWORD_INPUT_NAME: &str = "keyword";
pub const KEYWORD_INPUT_PLACEHOLDER: &str = "Search repositories...";
pub const KEYWORD_INPUT_MAX_WIDTH: f32 = 448.0;
pub const FETCH_BUTTON_LABEL: &str = "Git it!";
pub const EMPTY_RESULTS_PLACEHOLDER: &str = "No data";

pub const DEFAULT_WINDOW_WIDTH: f32 = 1024.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

pub const HEADER_PADDING: f32 = 16.0;
pub const HEADER_SPACING: f32 = 16.0;
pub const SEARCH_INPUT_HEIGHT: f32 = 40.0;
pub const FETCH_BUTTON_HEIGHT: f32 = 40.0;

pub const GRID_HEADER_ROW_HEIGHT: f32 = 36.0;
pub const GRID_FILTER_ROW_HEIGHT: f32 = 40.0;
pub const GRID_ROW_HEIGHT: f32 = 32.0;
pub const GRID_PAGING_PANEL_HEIGHT: f32 = 44.0;

pub const SETTINGS_DIRECTORY_NAME: &str = "git-it";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
