// SPDX-License-Identifier: MPL-2.0
//! Thumbnail strip view.
//!
//! The strip is itself a carousel: the parent controller owns a child
//! `SlideController` whose fractional page size leaves a partial thumb
//! visible at the edge. Pressing a thumb navigates the parent; the strip's
//! own arrows page the child.

use crate::ui::carousel::{component::Message, ViewContext};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, image, scrollable, Row, Space, Text};
use iced::{ContentFit, Element, Length};

use super::component::State;

pub fn view<'a>(ctx: &ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let parent = state.controller();
    let Some(thumbs) = parent.thumbs() else {
        return Space::new(Length::Shrink, Length::Shrink).into();
    };

    let geometry = thumbs.geometry();
    let element_width = geometry.element_width();
    let opacity = parent.thumbs_opacity();
    let active = parent.controls().active;

    let mut row = Row::new().spacing(spacing::XXS);
    for (index, slide) in thumbs.deck().iter().enumerate() {
        let content: Element<'a, Message> = match &slide.image {
            Some(source) => image(image::Handle::from_path(source))
                .width(Length::Fixed(element_width - spacing::XXS))
                .height(Length::Fixed(sizing::THUMB_HEIGHT))
                .content_fit(ContentFit::Cover)
                .opacity(opacity)
                .into(),
            None => Space::new(
                Length::Fixed(element_width - spacing::XXS),
                Length::Fixed(sizing::THUMB_HEIGHT),
            )
            .into(),
        };

        row = row.push(
            button(content)
                .on_press(Message::ThumbPressed(index))
                .style(styles::button::thumb(index == active))
                .padding(spacing::XXS / 2.0),
        );
    }

    let strip = scrollable(row)
        .id(state.thumb_track_id())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0.0).scroller_width(0.0),
        ))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMB_HEIGHT + spacing::XS));

    let mut outer = Row::new().spacing(spacing::SM).align_y(Vertical::Center);

    if thumbs.config().use_arrows {
        outer = outer.push(strip_arrow(
            ctx.i18n.tr("carousel-prev"),
            thumbs.controls().arrow_left_enabled,
            Message::ThumbStripPrev,
        ));
    }

    outer = outer.push(strip);

    if thumbs.config().use_arrows {
        outer = outer.push(strip_arrow(
            ctx.i18n.tr("carousel-next"),
            thumbs.controls().arrow_right_enabled,
            Message::ThumbStripNext,
        ));
    }

    outer.into()
}

fn strip_arrow<'a>(label: String, enabled: bool, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(crate::ui::design_tokens::typography::CAPTION))
        .on_press_maybe(enabled.then_some(message))
        .style(styles::button::arrow)
        .padding([spacing::XXS / 2.0, spacing::XS])
        .into()
}
