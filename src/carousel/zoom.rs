// SPDX-License-Identifier: MPL-2.0
//! Zoom overlay state machine.
//!
//! The overlay is constructed lazily on first use and reused afterwards.
//! Choreography is sequential in both directions: zooming first conceals the
//! carousel, its thumbnail strip, and any configured extra elements, and the
//! overlay's reveal begins only once the hide settles; unzooming conceals
//! the overlay first and restores the hidden elements afterwards. Only one
//! zoom state exists at a time: zooming while already zoomed replaces the
//! shown slide instead of stacking overlays.

use std::time::Duration;

/// Phase of the zoom choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomPhase {
    /// No overlay shown, nothing hidden.
    #[default]
    Idle,
    /// Carousel/thumbs/extra elements are fading out.
    Hiding,
    /// Hide settled; the overlay is fading in.
    Revealing,
    /// Overlay fully shown.
    Shown,
    /// Overlay is fading out.
    Concealing,
    /// Overlay gone; hidden elements are fading back in.
    Restoring,
}

/// State of the zoom overlay for one controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomOverlay {
    /// Whether the overlay has ever been constructed. Construction happens
    /// on first zoom; subsequent zooms reuse it.
    built: bool,
    zoomed: bool,
    slide: Option<usize>,
    source: Option<String>,
    /// Whether the active choreography has anything to hide/restore.
    hide_targets: bool,
    phase: ZoomPhase,
    elapsed: Duration,
    phase_duration: Duration,
}

impl ZoomOverlay {
    #[must_use]
    pub fn new(phase_duration: Duration) -> Self {
        Self {
            built: false,
            zoomed: false,
            slide: None,
            source: None,
            hide_targets: false,
            phase: ZoomPhase::Idle,
            elapsed: Duration::ZERO,
            phase_duration,
        }
    }

    #[must_use]
    pub fn is_built(&self) -> bool {
        self.built
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    /// Slide index the overlay currently shows, while zoomed.
    #[must_use]
    pub fn zoomed_slide(&self) -> Option<usize> {
        self.zoomed.then_some(self.slide).flatten()
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> ZoomPhase {
        self.phase
    }

    /// Shows the overlay for `slide`. If already zoomed on another slide,
    /// the previous zoom state is dropped first so exactly one exists.
    pub fn zoom(&mut self, slide: usize, source: Option<String>, hide_targets: bool) {
        self.built = true;

        if self.zoomed {
            // Single-zoom invariant: replace in place. The hide already
            // settled, so go straight to revealing the new source.
            self.zoomed = false;
        }

        self.slide = Some(slide);
        self.source = source;
        self.hide_targets = hide_targets;
        self.zoomed = true;

        if hide_targets && self.hide_progress() < 1.0 {
            self.enter(ZoomPhase::Hiding);
        } else {
            self.enter(ZoomPhase::Revealing);
        }
    }

    /// Hides the overlay and restores whatever the zoom concealed.
    ///
    /// Returns false without effect when not currently zoomed.
    pub fn un_zoom(&mut self) -> bool {
        if !self.zoomed {
            return false;
        }
        self.zoomed = false;
        self.enter(ZoomPhase::Concealing);
        true
    }

    /// Advances the choreography. Returns true while a phase is running.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if !self.in_transition() {
            return false;
        }

        self.elapsed += delta;
        if self.progress() < 1.0 {
            return true;
        }

        match self.phase {
            ZoomPhase::Hiding => self.enter(ZoomPhase::Revealing),
            ZoomPhase::Revealing => self.enter(ZoomPhase::Shown),
            ZoomPhase::Concealing => {
                if self.hide_targets {
                    self.enter(ZoomPhase::Restoring);
                } else {
                    self.enter(ZoomPhase::Idle);
                }
            }
            ZoomPhase::Restoring => self.enter(ZoomPhase::Idle),
            ZoomPhase::Idle | ZoomPhase::Shown => {}
        }

        self.in_transition()
    }

    #[must_use]
    pub fn in_transition(&self) -> bool {
        matches!(
            self.phase,
            ZoomPhase::Hiding | ZoomPhase::Revealing | ZoomPhase::Concealing | ZoomPhase::Restoring
        )
    }

    /// How far the hide of carousel/thumbs/extra elements has progressed:
    /// 0.0 fully visible, 1.0 fully hidden.
    #[must_use]
    pub fn hide_progress(&self) -> f32 {
        match self.phase {
            ZoomPhase::Idle => 0.0,
            ZoomPhase::Hiding => self.progress(),
            ZoomPhase::Revealing | ZoomPhase::Shown | ZoomPhase::Concealing => 1.0,
            ZoomPhase::Restoring => 1.0 - self.progress(),
        }
    }

    /// Opacity of the overlay itself.
    #[must_use]
    pub fn overlay_opacity(&self) -> f32 {
        match self.phase {
            ZoomPhase::Idle | ZoomPhase::Hiding | ZoomPhase::Restoring => 0.0,
            ZoomPhase::Revealing => self.progress(),
            ZoomPhase::Shown => 1.0,
            ZoomPhase::Concealing => 1.0 - self.progress(),
        }
    }

    /// Whether the overlay should be rendered at all.
    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        matches!(
            self.phase,
            ZoomPhase::Revealing | ZoomPhase::Shown | ZoomPhase::Concealing
        )
    }

    fn enter(&mut self, phase: ZoomPhase) {
        self.phase = phase;
        self.elapsed = Duration::ZERO;
        if self.phase_duration.is_zero() && self.in_transition() {
            // Degenerate configuration: settle each phase immediately.
            self.advance(Duration::ZERO);
        }
    }

    fn progress(&self) -> f32 {
        if self.phase_duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.phase_duration.as_secs_f32()).min(1.0)
    }
}
