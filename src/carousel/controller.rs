// SPDX-License-Identifier: MPL-2.0
//! The slide navigation engine.
//!
//! `SlideController` owns the slide-index state of one carousel and performs
//! transitions through the animation registry. A controller optionally owns
//! a second controller of the same type driving its thumbnail strip; every
//! geometry pass and zoom coordination runs on the parent first, then on the
//! child.

use crate::carousel::animation::{Animations, Track};
use crate::carousel::autoplay::{AutomaticDelay, Autoplay};
use crate::carousel::config::CarouselConfig;
use crate::carousel::event::CarouselEvent;
use crate::carousel::geometry::{Geometry, ImagesPerSlide};
use crate::carousel::slide::SlideDeck;
use crate::carousel::zoom::ZoomOverlay;
use crate::config::{DEFAULT_TRACK_WIDTH, DEFAULT_ZOOM_PHASE_MS};
use crate::error::{Error, Result};
use std::time::Duration;

/// Derived enabled/active flags for the navigation affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    pub arrow_left_enabled: bool,
    pub arrow_right_enabled: bool,
    /// Index of the dot/thumb currently marked active.
    pub active: usize,
}

/// Navigation engine for one carousel.
#[derive(Debug)]
pub struct SlideController {
    config: CarouselConfig,
    deck: SlideDeck,
    geometry: Geometry,
    current_slide: usize,
    track: Track,
    animations: Animations,
    autoplay: Autoplay,
    zoom: ZoomOverlay,
    controls: ControlState,
    thumbs: Option<Box<SlideController>>,
    interacted: bool,
}

impl SlideController {
    /// Constructs a controller with the built-in animation strategies.
    #[must_use]
    pub fn new(deck: SlideDeck, config: CarouselConfig) -> Self {
        Self::with_animations(deck, config, Animations::builtin())
    }

    /// Constructs a controller with a caller-extended animation registry.
    ///
    /// Wiring happens here: the thumbnail child is recursively constructed
    /// when enabled and more than one slide element exists, and the first
    /// geometry pass runs against the default track width.
    #[must_use]
    pub fn with_animations(deck: SlideDeck, config: CarouselConfig, animations: Animations) -> Self {
        let geometry = Geometry::new(
            DEFAULT_TRACK_WIDTH,
            ImagesPerSlide::new(config.images_per_slide),
            deck.len(),
        );

        // No strip for a single slide group: there is nothing to page to.
        let thumbs = (config.use_thumbs && geometry.slide_count() > 1).then(|| {
            let thumb_deck = deck.thumb_deck();
            Box::new(SlideController::new(thumb_deck, config.for_thumbs()))
        });

        let autoplay = Autoplay::new(
            config.automatic,
            AutomaticDelay::new(config.automatic_delay_ms),
        );

        let mut controller = Self {
            zoom: ZoomOverlay::new(Duration::from_millis(DEFAULT_ZOOM_PHASE_MS)),
            config,
            deck,
            geometry,
            current_slide: 0,
            track: Track::new(),
            animations,
            autoplay,
            controls: ControlState::default(),
            thumbs,
            interacted: false,
        };
        controller.update_controls();
        controller
    }

    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.geometry.slide_count()
    }

    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    #[must_use]
    pub fn controls(&self) -> ControlState {
        self.controls
    }

    #[must_use]
    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    #[must_use]
    pub fn zoom_overlay(&self) -> &ZoomOverlay {
        &self.zoom
    }

    #[must_use]
    pub fn thumbs(&self) -> Option<&SlideController> {
        self.thumbs.as_deref()
    }

    pub fn thumbs_mut(&mut self) -> Option<&mut SlideController> {
        self.thumbs.as_deref_mut()
    }

    /// Registers an additional animation strategy on this controller.
    pub fn register_animation(
        &mut self,
        name: impl Into<String>,
        strategy: impl Fn(&mut Track, &Geometry, usize, Duration) + Send + 'static,
    ) {
        self.animations.register(name, strategy);
    }

    /// Navigates to `slide`, animating with the configured strategy.
    ///
    /// Validation happens before any state mutation: an out-of-range target
    /// or an unregistered animation kind fails and leaves the controller
    /// untouched. Returns the now-current slide index.
    pub fn go_to(&mut self, slide: usize, speed: Option<Duration>) -> Result<usize> {
        let slide_count = self.slide_count();
        if slide >= slide_count {
            return Err(Error::SlideOutOfRange { slide, slide_count });
        }

        let kind = &self.config.animation.kind;
        if !self.animations.contains(kind) {
            return Err(Error::UnsupportedAnimation(kind.clone()));
        }

        let speed = speed.unwrap_or_else(|| self.config.animation.speed());
        self.current_slide = slide;
        self.animations
            .run(kind, &mut self.track, &self.geometry, slide, speed)?;
        self.update_controls();
        Ok(slide)
    }

    /// Advances one slide group. No-op at the last group.
    pub fn next(&mut self) -> Result<Option<usize>> {
        if self.current_slide + 1 >= self.slide_count() {
            return Ok(None);
        }
        self.go_to(self.current_slide + 1, None).map(Some)
    }

    /// Goes back one slide group. No-op at the first group.
    pub fn prev(&mut self) -> Result<Option<usize>> {
        let Some(target) = self.current_slide.checked_sub(1) else {
            return Ok(None);
        };
        self.go_to(target, None).map(Some)
    }

    /// Recomputes geometry against a newly measured host width and
    /// re-applies the current position without animation.
    ///
    /// Skipped entirely while the carousel is hidden by the zoom overlay:
    /// geometry measured on a hidden host is unreliable and must not
    /// corrupt the width or slide count. Drives the thumbnail child
    /// afterwards (parent first, then child).
    pub fn update(&mut self, width: f32) -> Result<()> {
        if self.is_hidden_by_zoom() {
            return Ok(());
        }

        self.geometry.set_width(width);
        self.geometry.set_elements(self.deck.len());

        match self.geometry.last_slide() {
            Some(last) => {
                if self.current_slide > last {
                    self.current_slide = last;
                }
                self.go_to(self.current_slide, Some(Duration::ZERO))?;
            }
            None => {
                self.track.jump(0.0);
                self.current_slide = 0;
            }
        }

        self.update_controls();

        if let Some(thumbs) = &mut self.thumbs {
            thumbs.update(width)?;
        }
        Ok(())
    }

    /// Refreshes the affordance flags from the current index.
    pub fn update_controls(&mut self) {
        let slide_count = self.slide_count();
        self.controls = ControlState {
            arrow_left_enabled: self.current_slide > 0,
            arrow_right_enabled: self.current_slide + 1 < slide_count,
            active: self.current_slide,
        };
    }

    /// Marks a manual control interaction, permanently pausing automatic
    /// rotation when `pause_on_interaction` is configured.
    pub fn interact(&mut self) {
        self.interacted = true;
        if self.config.pause_on_interaction {
            self.autoplay.pause();
        }
    }

    #[must_use]
    pub fn has_interacted(&self) -> bool {
        self.interacted
    }

    /// One automatic-rotation tick: advances to the next slide, wrapping to
    /// the first group at the end. No-op while paused, zoomed, or with
    /// fewer than two groups.
    pub fn auto_tick(&mut self) -> Result<Option<usize>> {
        if !self.autoplay.is_active() || self.zoom.is_zoomed() || self.slide_count() < 2 {
            return Ok(None);
        }
        if self.current_slide + 1 >= self.slide_count() {
            self.go_to(0, None).map(Some)
        } else {
            self.next()
        }
    }

    /// Whether the rotation timer should currently run.
    #[must_use]
    pub fn autoplay_active(&self) -> bool {
        self.autoplay.is_active() && !self.zoom.is_zoomed() && self.slide_count() > 1
    }

    /// Advances in-flight track and zoom transitions across the controller
    /// tree. Returns true while anything is still animating.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let mut animating = self.track.advance(delta);
        animating |= self.zoom.advance(delta);
        if let Some(thumbs) = &mut self.thumbs {
            animating |= thumbs.tick(delta);
        }
        animating
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        if self.track.is_animating() || self.zoom.in_transition() {
            return true;
        }
        self.thumbs.as_deref().is_some_and(SlideController::is_animating)
    }

    /// Shows the zoom overlay for `slide`.
    ///
    /// Emits [`CarouselEvent::BeforeZoom`] to observers; the event is
    /// produced before any visibility mutation takes place.
    pub fn zoom(&mut self, slide: usize) -> Result<CarouselEvent> {
        let slide_count = self.slide_count();
        if slide >= slide_count {
            return Err(Error::SlideOutOfRange { slide, slide_count });
        }

        let source = self
            .deck
            .get(slide)
            .and_then(|s| s.zoom_source())
            .map(str::to_string);

        let event = CarouselEvent::BeforeZoom { slide };
        let hide_targets = self.has_zoom_hide_targets();
        self.zoom.zoom(slide, source, hide_targets);
        Ok(event)
    }

    /// Hides the zoom overlay and restores configured visibility.
    ///
    /// Returns `None` without effect when not zoomed. Triggers a geometry
    /// pass on the controller and its thumbnail child afterwards, since the
    /// revealed container's width may have changed while hidden.
    pub fn un_zoom(&mut self) -> Result<Option<CarouselEvent>> {
        if !self.zoom.un_zoom() {
            return Ok(None);
        }
        self.update(self.geometry.width())?;
        Ok(Some(CarouselEvent::AfterUnzoom))
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_zoomed()
    }

    /// Whether geometry passes are currently suppressed by the overlay.
    #[must_use]
    pub fn is_hidden_by_zoom(&self) -> bool {
        self.zoom.is_zoomed() && self.config.hide_carousel_on_zoom
    }

    /// Opacity of the carousel track under the zoom choreography.
    #[must_use]
    pub fn carousel_opacity(&self) -> f32 {
        if self.config.hide_carousel_on_zoom {
            1.0 - self.zoom.hide_progress()
        } else {
            1.0
        }
    }

    /// Opacity of the thumbnail strip under the zoom choreography.
    #[must_use]
    pub fn thumbs_opacity(&self) -> f32 {
        if self.config.hide_thumbs_on_zoom && self.thumbs.is_some() {
            1.0 - self.zoom.hide_progress()
        } else {
            1.0
        }
    }

    /// Opacity of the host panels listed in `hide_elements_on_zoom`.
    #[must_use]
    pub fn extra_elements_opacity(&self) -> f32 {
        if self.config.hide_elements_on_zoom.is_empty() {
            1.0
        } else {
            1.0 - self.zoom.hide_progress()
        }
    }

    fn has_zoom_hide_targets(&self) -> bool {
        self.config.hide_carousel_on_zoom
            || (self.config.hide_thumbs_on_zoom && self.thumbs.is_some())
            || !self.config.hide_elements_on_zoom.is_empty()
    }
}
