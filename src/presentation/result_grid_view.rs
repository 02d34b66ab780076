use iced::widget::{button, container, row, scrollable, text, text_input, Column, Row};
use iced::{Alignment, Element, Length};

use crate::core::models::{GridColumn, GridHandle, ResultGrid, SearchResult, SortDirection};
use crate::global_constants;
use crate::presentation::app_theme;

#[derive(Debug, Clone)]
pub enum GridMessage {
    SortBy(GridColumn),
    FilterChanged(GridColumn, String),
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
    OpenLink(String),
}

fn column_length(column: GridColumn, handle: Option<&GridHandle>) -> Length {
    match handle {
        Some(handle) => Length::Fixed(handle.column_width(column)),
        None => Length::FillPortion(column.width_weight() as u16),
    }
}

fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " ↑",
        Some(SortDirection::Descending) => " ↓",
        None => "",
    }
}

pub fn render_placeholder<'a, Message: 'a>() -> Element<'a, Message> {
    container(text(global_constants::EMPTY_RESULTS_PLACEHOLDER).size(16))
        .padding(16)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .into()
}

pub fn render_grid<'a>(
    grid: &'a ResultGrid,
    handle: Option<&GridHandle>,
    height: f32,
) -> Element<'a, GridMessage> {
    let header_row = Row::with_children(GridColumn::ALL.iter().map(|column| {
        let label = format!(
            "{}{}",
            column.header_label(),
            sort_indicator(grid.sort_direction_for(*column))
        );
        button(text(label).size(14))
            .padding([8, 12])
            .width(column_length(*column, handle))
            .height(Length::Fixed(global_constants::GRID_HEADER_ROW_HEIGHT))
            .style(app_theme::column_header_button_style)
            .on_press(GridMessage::SortBy(*column))
            .into()
    }));

    let filter_row = Row::with_children(GridColumn::ALL.iter().map(|column| {
        let column = *column;
        container(
            text_input("Filter...", grid.filter_text(column))
                .on_input(move |value| GridMessage::FilterChanged(column, value))
                .padding(6)
                .size(13),
        )
        .padding([2, 4])
        .width(column_length(column, handle))
        .height(Length::Fixed(global_constants::GRID_FILTER_ROW_HEIGHT))
        .into()
    }));

    let body_rows = Column::with_children(
        grid.page_rows()
            .into_iter()
            .enumerate()
            .map(|(row_index, result)| render_row(row_index, result, handle)),
    );

    let body = scrollable(body_rows).height(Length::Fill);

    let content = Column::new()
        .push(header_row)
        .push(filter_row)
        .push(body)
        .push(render_paging_panel(grid));

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(app_theme::grid_frame_style)
        .into()
}

fn render_row<'a>(
    row_index: usize,
    result: &SearchResult,
    handle: Option<&GridHandle>,
) -> Element<'a, GridMessage> {
    let cells = Row::with_children(GridColumn::ALL.iter().map(|column| {
        let value = column.cell_text(result);
        let cell: Element<'a, GridMessage> = if column.is_link() {
            button(text(value.clone()).size(14))
                .padding(0)
                .style(app_theme::link_button_style)
                .on_press(GridMessage::OpenLink(value))
                .into()
        } else {
            text(value).size(14).into()
        };

        container(cell)
            .padding([0, 12])
            .width(column_length(*column, handle))
            .height(Length::Fill)
            .align_y(Alignment::Center)
            .clip(true)
            .into()
    }));

    container(cells)
        .width(Length::Fill)
        .height(Length::Fixed(global_constants::GRID_ROW_HEIGHT))
        .style(move |theme| app_theme::grid_row_style(theme, row_index))
        .into()
}

fn paging_button<'a>(
    label: &'static str,
    message: GridMessage,
    enabled: bool,
) -> Element<'a, GridMessage> {
    button(text(label).size(13))
        .padding([4, 10])
        .style(app_theme::paging_button_style)
        .on_press_maybe(enabled.then_some(message))
        .into()
}

fn render_paging_panel<'a>(grid: &ResultGrid) -> Element<'a, GridMessage> {
    let summary = grid.page_summary();
    let summary_text = format!(
        "{} to {} of {}",
        summary.first_row, summary.last_row, summary.total_rows
    );
    let page_text = format!("Page {} of {}", grid.current_page() + 1, grid.page_count());

    let controls = row![
        paging_button("|<", GridMessage::FirstPage, !grid.is_first_page()),
        paging_button("<", GridMessage::PreviousPage, !grid.is_first_page()),
        text(page_text).size(13),
        paging_button(">", GridMessage::NextPage, !grid.is_last_page()),
        paging_button(">|", GridMessage::LastPage, !grid.is_last_page()),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    row![
        container(text(summary_text).size(13)).width(Length::Fill),
        controls
    ]
    .padding([0, 12])
    .height(Length::Fixed(global_constants::GRID_PAGING_PANEL_HEIGHT))
    .align_y(Alignment::Center)
    .into()
}
