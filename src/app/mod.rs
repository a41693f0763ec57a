// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the demo gallery.
//!
//! The `App` struct wires together the carousel component, localization,
//! and persisted preferences, and translates component effects (observer
//! notifications, faults) into user-facing status text. Policy decisions
//! (window sizing, gallery directory resolution) stay close to the update
//! loop so user-facing behavior is easy to audit.

mod subscription;
mod view;

use crate::carousel::CarouselEvent;
use crate::config;
use crate::error::Error;
use crate::i18n::I18n;
use crate::slide_scanner;
use crate::ui::carousel as carousel_ui;
use crate::ui::design_tokens::spacing;
use crate::ui::theming::ThemeMode;
use iced::{Element, Subscription, Task, Theme};
use std::path::PathBuf;

const INITIAL_WINDOW_WIDTH: f32 = 900.0;
const INITIAL_WINDOW_HEIGHT: f32 = 700.0;

/// Width flanking the track taken by the arrows and their spacing; the
/// measured track width excludes it so page offsets match element sizes.
const ARROW_ALLOWANCE: f32 = 160.0;

/// Launch parameters parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub lang: Option<String>,
    pub gallery_dir: Option<String>,
}

/// Messages handled by the application root.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(carousel_ui::Message),
    WindowResized(f32),
}

/// Root Iced application state bridging the carousel component,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    carousel: carousel_ui::State,
    theme_mode: ThemeMode,
    /// Last observer notification, shown in the status line.
    last_event: Option<CarouselEvent>,
    /// Last component fault, shown in the status line.
    fault: Option<Error>,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size((INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT))
        .run_with(move || App::new(flags))
}

impl App {
    /// Initializes application state: loads preferences, resolves the
    /// gallery directory, scans it into a slide deck, and performs the
    /// first geometry pass.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let gallery_dir = flags
            .gallery_dir
            .map(PathBuf::from)
            .or(config.gallery_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        let (deck, fault) = match slide_scanner::scan_gallery(&gallery_dir) {
            Ok(deck) => (deck, None),
            Err(error) => (Default::default(), Some(error)),
        };

        let mut carousel = carousel_ui::State::new(deck, config.carousel.clone());
        let (_, boot_task) = carousel.update(carousel_ui::Message::HostResized(
            Self::track_width_for(INITIAL_WINDOW_WIDTH),
        ));

        let app = App {
            i18n,
            carousel,
            theme_mode: config.theme_mode,
            last_event: None,
            fault,
        };

        (app, boot_task.map(Message::Carousel))
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Carousel(message) => {
                let (effect, task) = self.carousel.update(message);
                match effect {
                    carousel_ui::Effect::None => {}
                    carousel_ui::Effect::Notify(event) => {
                        self.last_event = Some(event);
                        self.fault = None;
                    }
                    carousel_ui::Effect::Fault(error) => {
                        self.fault = Some(error);
                    }
                }
                task.map(Message::Carousel)
            }
            Message::WindowResized(width) => {
                let (_, task) = self
                    .carousel
                    .update(carousel_ui::Message::HostResized(Self::track_width_for(width)));
                task.map(Message::Carousel)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::window_resize(),
            self.carousel.subscription().map(Message::Carousel),
        ])
    }

    fn track_width_for(window_width: f32) -> f32 {
        (window_width - 2.0 * spacing::MD - ARROW_ALLOWANCE).max(100.0)
    }

    pub(crate) fn carousel(&self) -> &carousel_ui::State {
        &self.carousel
    }

    pub(crate) fn last_event(&self) -> Option<CarouselEvent> {
        self.last_event
    }

    pub(crate) fn fault(&self) -> Option<&Error> {
        self.fault.as_ref()
    }
}
