// SPDX-License-Identifier: MPL-2.0
//! Zoom overlay view: a fullscreen backdrop with the resolved full-size
//! image and a close affordance, faded by the zoom choreography.

use crate::carousel::SlideController;
use crate::ui::carousel::{component::Message, ViewContext};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, image, Column, Text};
use iced::{ContentFit, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>, controller: &'a SlideController) -> Element<'a, Message> {
    let zoom = controller.zoom_overlay();
    let opacity = zoom.overlay_opacity();

    let close_button = button(Text::new(ctx.i18n.tr("carousel-close-zoom")))
        .on_press(Message::CloseZoomPressed)
        .style(styles::button::close)
        .padding([spacing::XXS, spacing::SM]);

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(close_button);

    if let Some(source) = zoom.source() {
        column = column.push(
            image(image::Handle::from_path(source))
                .height(Length::Fixed(sizing::ZOOM_HEIGHT))
                .content_fit(ContentFit::Contain)
                .opacity(opacity),
        );
    }

    container(column)
        .style(styles::container::zoom_backdrop(opacity))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
