use crate::core::models::GridColumn;
use crate::global_constants;

/// Control handle for a mounted results grid. Only exists once the grid has
/// reported ready; the orchestrator keeps it as an `Option` until then.
#[derive(Debug, Clone, PartialEq)]
pub struct GridHandle {
    column_widths: [f32; 3],
    fit_count: usize,
}

impl GridHandle {
    pub fn on_grid_ready(available_width: f32) -> Self {
        log::info!("[GRID] Grid ready, fitting columns to {}px", available_width);
        let mut handle = Self {
            column_widths: [global_constants::MIN_COLUMN_WIDTH; 3],
            fit_count: 0,
        };
        handle.size_columns_to_fit(available_width);
        handle
    }

    pub fn column_width(&self, column: GridColumn) -> f32 {
        self.column_widths[column.index()]
    }

    #[allow(dead_code)]
    pub fn column_widths(&self) -> [f32; 3] {
        self.column_widths
    }

    #[allow(dead_code)]
    pub fn fit_count(&self) -> usize {
        self.fit_count
    }

    /// Spreads `available_width` across the columns by weight. Columns whose
    /// share would fall under the minimum are pinned at the minimum and the
    /// rest of the width is shared among the others.
    pub fn size_columns_to_fit(&mut self, available_width: f32) {
        let minimum = global_constants::MIN_COLUMN_WIDTH;
        let mut pinned = [false; 3];

        loop {
            let pinned_width: f32 = pinned.iter().filter(|is_pinned| **is_pinned).count() as f32
                * minimum;
            let free_weight: f32 = GridColumn::ALL
                .iter()
                .filter(|column| !pinned[column.index()])
                .map(|column| column.width_weight())
                .sum();

            if free_weight <= 0.0 {
                break;
            }

            let free_width = (available_width - pinned_width).max(0.0);
            let mut newly_pinned = false;

            for column in GridColumn::ALL {
                if pinned[column.index()] {
                    self.column_widths[column.index()] = minimum;
                    continue;
                }
                let share = free_width * column.width_weight() / free_weight;
                if share < minimum {
                    pinned[column.index()] = true;
                    newly_pinned = true;
                }
                self.column_widths[column.index()] = share.max(minimum);
            }

            if !newly_pinned {
                break;
            }
        }

        self.fit_count += 1;
        log::debug!(
            "[GRID] Columns fitted to {}px: {:?}",
            available_width,
            self.column_widths
        );
    }
}
