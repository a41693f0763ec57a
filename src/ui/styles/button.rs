// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style pour les flèches de navigation (Prev/Next).
///
/// The disabled state mirrors the controller's affordance flags at the
/// boundaries of the track.
pub fn arrow(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..BLACK
            })),
            text_color: palette::GRAY_400,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..button::Style::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..button::Style::default()
        },
        button::Status::Active => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..button::Style::default()
        },
    }
}

/// Style pour un indicateur (dot). The active dot carries the brand color.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette_ext = theme.extended_palette();
        let base = if active {
            palette::PRIMARY_500
        } else {
            palette_ext.background.strong.color
        };
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
            _ => base,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: Color::TRANSPARENT,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Style pour une vignette. The active thumb gets a brand border.
pub fn thumb(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let border_color = if active {
            palette::PRIMARY_500
        } else if matches!(status, button::Status::Hovered) {
            palette::PRIMARY_400
        } else {
            Color::TRANSPARENT
        };

        button::Style {
            background: None,
            text_color: WHITE,
            border: Border {
                color: border_color,
                width: 2.0,
                radius: radius::SM.into(),
            },
            ..button::Style::default()
        }
    }
}

/// Style pour le bouton de fermeture du zoom.
pub fn close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::OVERLAY_SUBTLE,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
