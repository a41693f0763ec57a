// SPDX-License-Identifier: MPL-2.0
//! Carousel views: slide track, arrows, dot indicators, and composition
//! with the thumbnail strip and zoom overlay.

pub mod component;
pub mod thumbs;
pub mod zoom_overlay;

pub use component::{Effect, Message, State};

use crate::carousel::SlideController;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, image, mouse_area, scrollable, stack, Column, Row, Space, Text};
use iced::{ContentFit, Element, Length};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the full carousel: track with arrows, dots, thumbnail strip, and
/// the zoom overlay stacked on top while visible.
pub fn view<'a>(ctx: &ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let controller = state.controller();

    if controller.deck().is_empty() {
        return empty_state(ctx);
    }

    let mut content = Column::new().spacing(spacing::MD);

    // A settled zoom hide collapses the track (and its affordances)
    // entirely; during the choreography the images fade out in place.
    if controller.carousel_opacity() > f32::EPSILON {
        content = content.push(track_with_arrows(ctx, state));

        if controller.config().use_dots {
            content = content.push(dots(controller));
        }
    }

    if controller.thumbs().is_some() && controller.thumbs_opacity() > f32::EPSILON {
        content = content.push(thumbs::view(ctx, state));
    }

    let base: Element<'a, Message> = content.into();

    let zoom = controller.zoom_overlay();
    if zoom.overlay_visible() {
        stack([base, zoom_overlay::view(ctx, controller)]).into()
    } else {
        base
    }
}

fn empty_state<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("carousel-empty-title")).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr("carousel-empty-hint")).size(typography::BODY));

    container(column)
        .center_x(Length::Fill)
        .padding(spacing::LG)
        .into()
}

fn track_with_arrows<'a>(ctx: &ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let controller = state.controller();
    let controls = controller.controls();

    let mut row = Row::new().spacing(spacing::SM).align_y(Vertical::Center);

    if controller.config().use_arrows {
        row = row.push(arrow_button(
            ctx.i18n.tr("carousel-prev"),
            controls.arrow_left_enabled,
            Message::PrevPressed,
        ));
    }

    row = row.push(
        container(track(state))
            .style(styles::container::track)
            .padding(spacing::XXS)
            .width(Length::Fill),
    );

    if controller.config().use_arrows {
        row = row.push(arrow_button(
            ctx.i18n.tr("carousel-next"),
            controls.arrow_right_enabled,
            Message::NextPressed,
        ));
    }

    row.into()
}

/// The slide track: one image per slide element, sized from the measured
/// geometry, inside a horizontal scrollable whose offset the component
/// drives programmatically.
fn track<'a>(state: &'a State) -> Element<'a, Message> {
    let controller = state.controller();
    let geometry = controller.geometry();
    let element_width = geometry.element_width();
    let carousel_opacity = controller.carousel_opacity();

    let mut row = Row::new();
    for (index, slide) in controller.deck().iter().enumerate() {
        let group = geometry.group_of(index);
        let fade = if group == controller.current_slide() {
            controller.track().fade()
        } else {
            1.0
        };

        let content: Element<'a, Message> = match &slide.image {
            Some(source) => image(image::Handle::from_path(source))
                .width(Length::Fixed(element_width))
                .height(Length::Fixed(sizing::TRACK_HEIGHT))
                .content_fit(ContentFit::Cover)
                .opacity(carousel_opacity * fade)
                .into(),
            None => Space::new(
                Length::Fixed(element_width),
                Length::Fixed(sizing::TRACK_HEIGHT),
            )
            .into(),
        };

        row = row.push(mouse_area(content).on_press(Message::SlidePressed(index)));
    }

    scrollable(row)
        .id(state.track_id())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0.0).scroller_width(0.0),
        ))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TRACK_HEIGHT))
        .into()
}

fn arrow_button<'a>(label: String, enabled: bool, message: Message) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press_maybe(enabled.then_some(message))
        .style(styles::button::arrow)
        .padding([spacing::XXS, spacing::SM])
        .into()
}

/// One dot per slide group, the active one highlighted.
fn dots<'a>(controller: &SlideController) -> Element<'a, Message> {
    let active = controller.controls().active;

    let mut row = Row::new().spacing(spacing::XS);
    for index in 0..controller.slide_count() {
        row = row.push(
            button(Space::new(
                Length::Fixed(sizing::DOT_SIZE),
                Length::Fixed(sizing::DOT_SIZE),
            ))
            .on_press(Message::DotPressed(index))
            .style(styles::button::dot(index == active))
            .padding(0.0),
        );
    }

    container(row).center_x(Length::Fill).into()
}
