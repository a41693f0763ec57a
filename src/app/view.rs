// SPDX-License-Identifier: MPL-2.0
//! Root view for the demo gallery.

use super::{App, Message};
use crate::carousel::CarouselEvent;
use crate::ui::carousel as carousel_ui;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{container, Column, Text};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let ctx = carousel_ui::ViewContext { i18n: &app.i18n };

    let mut column = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(Text::new(app.i18n.tr("window-title")).size(typography::TITLE_MD))
        .push(carousel_ui::view(&ctx, app.carousel()).map(Message::Carousel));

    if let Some(status) = status_line(app) {
        column = column.push(status);
    }

    container(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Status line: slide counter, pause marker, notifications, faults.
///
/// The line fades with the zoom choreography when the host lists it in
/// `hide_elements_on_zoom` under the id `status`.
fn status_line(app: &App) -> Option<Element<'_, Message>> {
    let controller = app.carousel().controller();
    if controller.deck().is_empty() {
        return None;
    }

    let hidden = controller
        .config()
        .hide_elements_on_zoom
        .iter()
        .any(|id| id == "status");
    if hidden && controller.extra_elements_opacity() < f32::EPSILON {
        return None;
    }

    let mut column = Column::new().spacing(spacing::XXS);

    let counter = app.i18n.tr_args(
        "carousel-status",
        &[
            ("current", (controller.current_slide() + 1).to_string()),
            ("total", controller.slide_count().to_string()),
        ],
    );
    column = column.push(Text::new(counter).size(typography::BODY));

    if controller.autoplay().is_paused() {
        column = column.push(Text::new(app.i18n.tr("carousel-paused")).size(typography::CAPTION));
    }

    if let Some(event) = app.last_event() {
        let notification = match event {
            CarouselEvent::BeforeZoom { slide } => app.i18n.tr_args(
                "notify-zoom",
                &[("slide", (slide + 1).to_string())],
            ),
            CarouselEvent::AfterUnzoom => app.i18n.tr("notify-unzoom"),
        };
        column = column.push(Text::new(notification).size(typography::CAPTION));
    }

    if let Some(fault) = app.fault() {
        column = column.push(
            Text::new(app.i18n.tr(fault.i18n_key()))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    Some(column.into())
}
