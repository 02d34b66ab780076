use iced::widget::{button, column, container, text, text_input};
use iced::{Alignment, Element, Length};

use crate::global_constants;
use crate::presentation::app_theme;

pub struct SearchBar {
    keyword: String,
}

#[derive(Debug, Clone)]
pub enum SearchBarMessage {
    KeywordChanged(String),
    FetchRequested,
}

impl SearchBar {
    pub fn build() -> Self {
        Self {
            keyword: String::new(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn update(&mut self, message: SearchBarMessage) {
        match message {
            SearchBarMessage::KeywordChanged(keyword) => {
                log::debug!("[SEARCH_BAR] Keyword changed: {}", keyword);
                self.keyword = keyword;
            }
            SearchBarMessage::FetchRequested => {
                log::debug!("[SEARCH_BAR] Fetch requested for {:?}", self.keyword);
            }
        }
    }

    /// Height of the header region holding the input and the fetch button.
    /// The region is laid out at exactly this height.
    pub fn region_height() -> f32 {
        global_constants::HEADER_PADDING * 2.0
            + global_constants::SEARCH_INPUT_HEIGHT
            + global_constants::HEADER_SPACING
            + global_constants::FETCH_BUTTON_HEIGHT
    }

    pub fn render_ui(&self) -> Element<'_, SearchBarMessage> {
        let keyword_input = text_input(global_constants::KEYWORD_INPUT_PLACEHOLDER, &self.keyword)
            .id(global_constants::KEYWORD_INPUT_NAME)
            .on_input(SearchBarMessage::KeywordChanged)
            .on_submit(SearchBarMessage::FetchRequested)
            .padding(8)
            .size(16)
            .width(Length::Fixed(global_constants::KEYWORD_INPUT_MAX_WIDTH));

        let fetch_button = button(
            text(global_constants::FETCH_BUTTON_LABEL)
                .size(16)
                .align_y(Alignment::Center),
        )
        .padding([8, 16])
        .height(Length::Fixed(global_constants::FETCH_BUTTON_HEIGHT))
        .style(app_theme::primary_button_style)
        .on_press(SearchBarMessage::FetchRequested);

        let content = column![
            container(keyword_input).height(Length::Fixed(global_constants::SEARCH_INPUT_HEIGHT)),
            fetch_button
        ]
        .spacing(global_constants::HEADER_SPACING)
        .align_x(Alignment::Center);

        container(content)
            .padding(global_constants::HEADER_PADDING)
            .width(Length::Fill)
            .height(Length::Fixed(Self::region_height()))
            .align_x(Alignment::Center)
            .into()
    }
}
