// SPDX-License-Identifier: MPL-2.0
//! Carousel component encapsulating state and update logic.
//!
//! The component owns a [`SlideController`] and translates Iced messages
//! into controller operations. Visual offsets are mirrored to the track
//! scrollables through `scrollable::scroll_to` tasks, and the animation and
//! autoplay timers are declarative subscriptions derived from state: they
//! stop existing the moment nothing needs them.

use crate::carousel::{Animations, CarouselConfig, CarouselEvent, SlideController, SlideDeck};
use crate::config::ANIMATION_TICK_MS;
use crate::error::Error;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::{time, Subscription, Task};
use std::time::{Duration, Instant};

/// Messages emitted by the carousel's widgets and timers.
#[derive(Debug, Clone)]
pub enum Message {
    PrevPressed,
    NextPressed,
    DotPressed(usize),
    /// A thumbnail was pressed; the payload is the slide element index.
    ThumbPressed(usize),
    /// The thumbnail strip's own prev arrow was pressed.
    ThumbStripPrev,
    /// The thumbnail strip's own next arrow was pressed.
    ThumbStripNext,
    /// A slide element was pressed (click-to-zoom).
    SlidePressed(usize),
    CloseZoomPressed,
    /// Automatic rotation timer fired.
    AutoAdvance,
    /// Animation progress timer fired.
    AnimationTick(Instant),
    /// The host container was measured or resized to the given width.
    HostResized(f32),
}

/// Side effects the host should handle after a carousel message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// An observer notification (zoom-in about to happen, unzoom done).
    Notify(CarouselEvent),
    /// A controller operation failed; surface it to the user.
    Fault(Error),
}

/// Iced-facing state of one carousel instance.
pub struct State {
    controller: SlideController,
    track_id: scrollable::Id,
    thumb_track_id: scrollable::Id,
    last_tick: Option<Instant>,
}

impl State {
    /// Builds the component over a slide deck with the built-in animations.
    #[must_use]
    pub fn new(deck: SlideDeck, config: CarouselConfig) -> Self {
        Self::from_controller(SlideController::new(deck, config))
    }

    /// Builds the component over a slide deck with a caller-extended
    /// animation registry.
    #[must_use]
    pub fn with_animations(deck: SlideDeck, config: CarouselConfig, animations: Animations) -> Self {
        Self::from_controller(SlideController::with_animations(deck, config, animations))
    }

    #[must_use]
    pub fn from_controller(controller: SlideController) -> Self {
        Self {
            controller,
            track_id: scrollable::Id::unique(),
            thumb_track_id: scrollable::Id::unique(),
            last_tick: None,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &SlideController {
        &self.controller
    }

    #[must_use]
    pub fn track_id(&self) -> scrollable::Id {
        self.track_id.clone()
    }

    #[must_use]
    pub fn thumb_track_id(&self) -> scrollable::Id {
        self.thumb_track_id.clone()
    }

    /// Handles a carousel message, returning the host-facing effect and the
    /// scroll tasks that mirror the new track offsets.
    pub fn update(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::PrevPressed => {
                self.controller.interact();
                match self.controller.prev() {
                    Ok(_) => (Effect::None, self.sync_tracks()),
                    Err(error) => (Effect::Fault(error), Task::none()),
                }
            }
            Message::NextPressed => {
                self.controller.interact();
                match self.controller.next() {
                    Ok(_) => (Effect::None, self.sync_tracks()),
                    Err(error) => (Effect::Fault(error), Task::none()),
                }
            }
            Message::DotPressed(slide) => {
                self.controller.interact();
                match self.controller.go_to(slide, None) {
                    Ok(_) => (Effect::None, self.sync_tracks()),
                    Err(error) => (Effect::Fault(error), Task::none()),
                }
            }
            Message::ThumbPressed(element) => {
                self.controller.interact();
                let group = self.controller.geometry().group_of(element);
                match self.controller.go_to(group, None) {
                    Ok(_) => (Effect::None, self.sync_tracks()),
                    Err(error) => (Effect::Fault(error), Task::none()),
                }
            }
            Message::ThumbStripPrev => {
                self.controller.interact();
                let result = match self.controller.thumbs_mut() {
                    Some(thumbs) => thumbs.prev().map(|_| ()),
                    None => Ok(()),
                };
                match result {
                    Ok(()) => (Effect::None, self.sync_tracks()),
                    Err(error) => (Effect::Fault(error), Task::none()),
                }
            }
            Message::ThumbStripNext => {
                self.controller.interact();
                let result = match self.controller.thumbs_mut() {
                    Some(thumbs) => thumbs.next().map(|_| ()),
                    None => Ok(()),
                };
                match result {
                    Ok(()) => (Effect::None, self.sync_tracks()),
                    Err(error) => (Effect::Fault(error), Task::none()),
                }
            }
            Message::SlidePressed(element) => {
                if !self.controller.config().allow_zoom {
                    return (Effect::None, Task::none());
                }
                self.controller.interact();
                match self.controller.zoom(element) {
                    Ok(event) => (Effect::Notify(event), Task::none()),
                    Err(error) => (Effect::Fault(error), Task::none()),
                }
            }
            Message::CloseZoomPressed => {
                self.controller.interact();
                match self.controller.un_zoom() {
                    Ok(Some(event)) => (Effect::Notify(event), self.sync_tracks()),
                    Ok(None) => (Effect::None, Task::none()),
                    Err(error) => (Effect::Fault(error), Task::none()),
                }
            }
            Message::AutoAdvance => match self.controller.auto_tick() {
                Ok(_) => (Effect::None, self.sync_tracks()),
                Err(error) => (Effect::Fault(error), Task::none()),
            },
            Message::AnimationTick(now) => {
                let delta = self
                    .last_tick
                    .map_or(Duration::from_millis(ANIMATION_TICK_MS), |last| {
                        now.saturating_duration_since(last)
                    });
                let still_animating = self.controller.tick(delta);
                self.last_tick = still_animating.then_some(now);
                (Effect::None, self.sync_tracks())
            }
            Message::HostResized(width) => match self.controller.update(width) {
                Ok(()) => (Effect::None, self.sync_tracks()),
                Err(error) => (Effect::Fault(error), Task::none()),
            },
        }
    }

    /// Subscriptions derived from the current state: an animation tick while
    /// any transition runs, and the rotation timer while autoplay is active.
    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        if self.controller.is_animating() {
            subscriptions.push(
                time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::AnimationTick),
            );
        }

        if self.controller.autoplay_active() {
            subscriptions.push(
                time::every(self.controller.autoplay().delay().as_duration())
                    .map(|_| Message::AutoAdvance),
            );
        }

        Subscription::batch(subscriptions)
    }

    /// Mirrors controller offsets to the track scrollables.
    fn sync_tracks(&self) -> Task<Message> {
        let mut tasks = vec![scrollable::scroll_to(
            self.track_id.clone(),
            AbsoluteOffset {
                x: self.controller.track().offset(),
                y: 0.0,
            },
        )];

        if let Some(thumbs) = self.controller.thumbs() {
            tasks.push(scrollable::scroll_to(
                self.thumb_track_id.clone(),
                AbsoluteOffset {
                    x: thumbs.track().offset(),
                    y: 0.0,
                },
            ));
        }

        Task::batch(tasks)
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("current_slide", &self.controller.current_slide())
            .field("slide_count", &self.controller.slide_count())
            .field("zoomed", &self.controller.is_zoomed())
            .finish()
    }
}
