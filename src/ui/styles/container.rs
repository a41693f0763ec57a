// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface behind the slide track and the thumbnail strip.
///
/// The color is derived from the active Iced `Theme` background, with a
/// slight opacity, so the track stays readable in both light and dark modes
/// without hard-coding colors.
pub fn track(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    let base = palette_ext.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Fullscreen backdrop behind the zoomed image, faded by the choreography.
pub fn zoom_backdrop(progress: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG * progress.clamp(0.0, 1.0),
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}
