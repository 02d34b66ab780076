use std::cmp::Ordering;

use crate::core::models::SearchResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridColumn {
    Id,
    Name,
    HtmlUrl,
}

impl GridColumn {
    pub const ALL: [GridColumn; 3] = [GridColumn::Id, GridColumn::Name, GridColumn::HtmlUrl];

    pub fn index(&self) -> usize {
        match self {
            GridColumn::Id => 0,
            GridColumn::Name => 1,
            GridColumn::HtmlUrl => 2,
        }
    }

    pub fn header_label(&self) -> &'static str {
        match self {
            GridColumn::Id => "Id",
            GridColumn::Name => "Name",
            GridColumn::HtmlUrl => "Html Url",
        }
    }

    /// Relative share of the available width this column takes when fitted.
    pub fn width_weight(&self) -> f32 {
        match self {
            GridColumn::Id => 1.0,
            GridColumn::Name => 2.0,
            GridColumn::HtmlUrl => 3.0,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, GridColumn::HtmlUrl)
    }

    pub fn cell_text(&self, result: &SearchResult) -> String {
        match self {
            GridColumn::Id => result.id.to_string(),
            GridColumn::Name => result.name.clone(),
            GridColumn::HtmlUrl => result.html_url.clone(),
        }
    }

    fn compare(&self, left: &SearchResult, right: &SearchResult) -> Ordering {
        match self {
            GridColumn::Id => left.id.cmp(&right.id),
            GridColumn::Name => left.name.cmp(&right.name),
            GridColumn::HtmlUrl => left.html_url.cmp(&right.html_url),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: GridColumn,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub first_row: usize,
    pub last_row: usize,
    pub total_rows: usize,
}

/// Display model behind the results grid: the fetched rows plus the
/// sort, filter and paging state the user has applied to them.
#[derive(Debug, Clone)]
pub struct ResultGrid {
    rows: Vec<SearchResult>,
    sort: Option<SortState>,
    filters: [String; 3],
    page_size: usize,
    current_page: usize,
}

impl ResultGrid {
    pub fn build_with_page_size(page_size: usize) -> Self {
        Self {
            rows: Vec::new(),
            sort: None,
            filters: Default::default(),
            page_size: page_size.max(1),
            current_page: 0,
        }
    }

    pub fn replace_rows(&mut self, rows: Vec<SearchResult>) {
        log::info!("[GRID] Replacing result collection with {} rows", rows.len());
        self.rows = rows;
        self.current_page = 0;
    }

    #[allow(dead_code)]
    pub fn rows(&self) -> &[SearchResult] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[allow(dead_code)]
    pub fn sort_state(&self) -> Option<SortState> {
        self.sort
    }

    pub fn sort_direction_for(&self, column: GridColumn) -> Option<SortDirection> {
        self.sort
            .filter(|state| state.column == column)
            .map(|state| state.direction)
    }

    /// Cycles the column through ascending, descending and unsorted.
    /// Sorting a different column starts it at ascending.
    pub fn toggle_sort(&mut self, column: GridColumn) {
        self.sort = match self.sort {
            Some(SortState {
                column: current,
                direction: SortDirection::Ascending,
            }) if current == column => Some(SortState {
                column,
                direction: SortDirection::Descending,
            }),
            Some(SortState {
                column: current,
                direction: SortDirection::Descending,
            }) if current == column => None,
            _ => Some(SortState {
                column,
                direction: SortDirection::Ascending,
            }),
        };
        log::debug!("[GRID] Sort state is now {:?}", self.sort);
    }

    pub fn filter_text(&self, column: GridColumn) -> &str {
        &self.filters[column.index()]
    }

    pub fn set_filter(&mut self, column: GridColumn, filter_text: String) {
        log::debug!("[GRID] Filter on {:?} set to {:?}", column, filter_text);
        self.filters[column.index()] = filter_text;
        self.current_page = 0;
    }

    fn matches_filters(&self, result: &SearchResult) -> bool {
        GridColumn::ALL.iter().all(|column| {
            let filter_text = self.filter_text(*column);
            if filter_text.is_empty() {
                return true;
            }
            column
                .cell_text(result)
                .to_lowercase()
                .contains(&filter_text.to_lowercase())
        })
    }

    /// Rows that pass every filter, in display order.
    pub fn visible_rows(&self) -> Vec<&SearchResult> {
        let mut visible: Vec<&SearchResult> = self
            .rows
            .iter()
            .filter(|result| self.matches_filters(result))
            .collect();

        if let Some(SortState { column, direction }) = self.sort {
            visible.sort_by(|left, right| {
                let ordering = column.compare(left, right);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        visible
    }

    pub fn page_count(&self) -> usize {
        let visible_count = self.visible_rows().len();
        visible_count.div_ceil(self.page_size).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.current_page.min(self.page_count() - 1)
    }

    pub fn page_rows(&self) -> Vec<&SearchResult> {
        let start = self.current_page() * self.page_size;
        self.visible_rows()
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    pub fn page_summary(&self) -> PageSummary {
        let total_rows = self.visible_rows().len();
        if total_rows == 0 {
            return PageSummary {
                first_row: 0,
                last_row: 0,
                total_rows,
            };
        }

        let first_row = self.current_page() * self.page_size + 1;
        let last_row = (first_row + self.page_size - 1).min(total_rows);

        PageSummary {
            first_row,
            last_row,
            total_rows,
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page() == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page() + 1 >= self.page_count()
    }

    pub fn go_to_first_page(&mut self) {
        self.current_page = 0;
    }

    pub fn go_to_previous_page(&mut self) {
        self.current_page = self.current_page().saturating_sub(1);
    }

    pub fn go_to_next_page(&mut self) {
        if !self.is_last_page() {
            self.current_page = self.current_page() + 1;
        }
    }

    pub fn go_to_last_page(&mut self) {
        self.current_page = self.page_count() - 1;
    }
}
