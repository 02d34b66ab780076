use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

const BLUE_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
const BLUE_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
const BLUE_700: Color = Color::from_rgb(0.114, 0.306, 0.847);
const BLUE_800: Color = Color::from_rgb(0.118, 0.251, 0.686);

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.129, 0.129, 0.129),
                text: Color::from_rgb(1.0, 1.0, 1.0),
                primary: BLUE_500,
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.95, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: BLUE_600,
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(BLUE_500)),
            text_color: Color::WHITE,
            border: Border {
                color: BLUE_500,
                width: 1.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(BLUE_700)),
            text_color: Color::WHITE,
            border: Border {
                color: BLUE_700,
                width: 1.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(BLUE_800)),
            text_color: Color::WHITE,
            border: Border {
                color: BLUE_800,
                width: 1.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.3, 0.3, 0.3))),
            text_color: Color::from_rgb(0.5, 0.5, 0.5),
            border: Border {
                color: Color::from_rgb(0.4, 0.4, 0.4),
                width: 1.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
    }
}

/// Borderless button that reads as a hyperlink.
pub fn link_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => BLUE_500,
        button::Status::Active => BLUE_600,
        button::Status::Disabled => Color::from_rgb(0.5, 0.5, 0.5),
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn column_header_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
        _ => palette.background.weak.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.background.base.text,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn paging_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.strong.color,
            border: Border::default(),
            shadow: Shadow::default(),
            snap: false,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            text_color: palette.background.base.text,
            border: Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
    }
}

pub fn grid_row_style(theme: &Theme, row_index: usize) -> container::Style {
    let palette = theme.extended_palette();
    let background = if row_index % 2 == 0 {
        palette.background.base.color
    } else {
        palette.background.weak.color
    };

    container::Style {
        background: Some(Background::Color(background)),
        ..container::Style::default()
    }
}

pub fn grid_frame_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}
