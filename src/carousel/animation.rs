// SPDX-License-Identifier: MPL-2.0
//! Animation strategies and the track state they mutate.
//!
//! A strategy is a function keyed by name in an open registry. Invoking one
//! never blocks: it installs (or immediately applies) a transition on the
//! [`Track`], and the component's tick subscription advances the transition
//! over time with linear easing. Starting a new transition replaces any
//! in-flight one, so rapid navigation cannot queue animations.

use crate::carousel::geometry::Geometry;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Visual style of an in-flight transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransitionStyle {
    /// Horizontal motion of the track offset.
    Offset,
    /// Crossfade of the active slide group, no motion.
    Fade,
}

#[derive(Debug, Clone, PartialEq)]
struct Transition {
    style: TransitionStyle,
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
}

impl Transition {
    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Current visual state of one carousel track.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    offset: f32,
    /// Opacity of the active slide group; 1.0 outside fade transitions.
    fade: f32,
    transition: Option<Transition>,
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}

impl Track {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            fade: 1.0,
            transition: None,
        }
    }

    /// Current pixel offset of the track.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Current opacity of the active slide group.
    #[must_use]
    pub fn fade(&self) -> f32 {
        self.fade
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Applies an offset immediately, dropping any in-flight transition.
    pub fn jump(&mut self, offset: f32) {
        self.offset = offset;
        self.fade = 1.0;
        self.transition = None;
    }

    /// Starts an animated offset transition from the current position.
    pub fn begin_offset(&mut self, to: f32, duration: Duration) {
        if duration.is_zero() {
            self.jump(to);
            return;
        }
        self.transition = Some(Transition {
            style: TransitionStyle::Offset,
            from: self.offset,
            to,
            elapsed: Duration::ZERO,
            duration,
        });
    }

    /// Jumps the offset to the target group and crossfades it in.
    pub fn begin_fade(&mut self, to: f32, duration: Duration) {
        self.offset = to;
        if duration.is_zero() {
            self.fade = 1.0;
            self.transition = None;
            return;
        }
        self.fade = 0.0;
        self.transition = Some(Transition {
            style: TransitionStyle::Fade,
            from: 0.0,
            to: 1.0,
            elapsed: Duration::ZERO,
            duration,
        });
    }

    /// Advances the in-flight transition with linear easing.
    ///
    /// Returns true while a transition is still running.
    pub fn advance(&mut self, delta: Duration) -> bool {
        let Some(transition) = &mut self.transition else {
            return false;
        };

        transition.elapsed += delta;
        let progress = transition.progress();
        let value = transition.from + (transition.to - transition.from) * progress;

        match transition.style {
            TransitionStyle::Offset => self.offset = value,
            TransitionStyle::Fade => self.fade = value,
        }

        if progress >= 1.0 {
            self.transition = None;
            self.fade = 1.0;
            false
        } else {
            true
        }
    }
}

/// An animation strategy: applies a visual transition towards the target
/// slide group on the given track.
pub type AnimationFn = Box<dyn Fn(&mut Track, &Geometry, usize, Duration) + Send>;

/// Open registry of animation strategies, keyed by name.
///
/// Ships with `slide`, `fade`, and `none`; callers may register additional
/// strategies under arbitrary names and select them through
/// `CarouselConfig::animation.kind`.
pub struct Animations {
    strategies: HashMap<String, AnimationFn>,
}

impl Animations {
    /// Registry containing only the built-in strategies.
    #[must_use]
    pub fn builtin() -> Self {
        let mut animations = Self {
            strategies: HashMap::new(),
        };

        animations.register("slide", |track, geometry, slide, speed| {
            track.begin_offset(geometry.offset_for(slide), speed);
        });
        animations.register("fade", |track, geometry, slide, speed| {
            track.begin_fade(geometry.offset_for(slide), speed);
        });
        animations.register("none", |track, geometry, slide, _speed| {
            track.jump(geometry.offset_for(slide));
        });

        animations
    }

    /// Registers a strategy, replacing any previous entry under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        strategy: impl Fn(&mut Track, &Geometry, usize, Duration) + Send + 'static,
    ) {
        self.strategies.insert(name.into(), Box::new(strategy));
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }

    /// Runs the named strategy against the track.
    ///
    /// Fails without touching the track when no strategy is registered
    /// under `name`.
    pub fn run(
        &self,
        name: &str,
        track: &mut Track,
        geometry: &Geometry,
        slide: usize,
        speed: Duration,
    ) -> Result<()> {
        let strategy = self
            .strategies
            .get(name)
            .ok_or_else(|| Error::UnsupportedAnimation(name.to_string()))?;
        strategy(track, geometry, slide, speed);
        Ok(())
    }
}

impl Default for Animations {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for Animations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Animations").field("strategies", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::geometry::ImagesPerSlide;

    fn geometry() -> Geometry {
        Geometry::new(800.0, ImagesPerSlide::default(), 5)
    }

    #[test]
    fn slide_strategy_animates_towards_target_offset() {
        let animations = Animations::builtin();
        let mut track = Track::new();

        animations
            .run("slide", &mut track, &geometry(), 2, Duration::from_millis(500))
            .expect("slide is built in");

        assert!(track.is_animating());
        assert_eq!(track.offset(), 0.0);

        track.advance(Duration::from_millis(250));
        assert_eq!(track.offset(), 800.0); // halfway to 1600, linear

        let still_running = track.advance(Duration::from_millis(250));
        assert!(!still_running);
        assert_eq!(track.offset(), 1600.0);
    }

    #[test]
    fn none_strategy_applies_offset_immediately() {
        let animations = Animations::builtin();
        let mut track = Track::new();

        animations
            .run("none", &mut track, &geometry(), 3, Duration::from_millis(500))
            .expect("none is built in");

        assert!(!track.is_animating());
        assert_eq!(track.offset(), 2400.0);
    }

    #[test]
    fn fade_strategy_jumps_offset_and_fades_in() {
        let animations = Animations::builtin();
        let mut track = Track::new();

        animations
            .run("fade", &mut track, &geometry(), 1, Duration::from_millis(400))
            .expect("fade is built in");

        assert_eq!(track.offset(), 800.0);
        assert_eq!(track.fade(), 0.0);

        track.advance(Duration::from_millis(200));
        assert!((track.fade() - 0.5).abs() < 1e-4);

        track.advance(Duration::from_millis(200));
        assert_eq!(track.fade(), 1.0);
        assert!(!track.is_animating());
    }

    #[test]
    fn unknown_strategy_fails_without_touching_track() {
        let animations = Animations::builtin();
        let mut track = Track::new();
        track.jump(160.0);

        let result = animations.run(
            "wobble",
            &mut track,
            &geometry(),
            2,
            Duration::from_millis(500),
        );

        assert_eq!(
            result,
            Err(Error::UnsupportedAnimation("wobble".to_string()))
        );
        assert_eq!(track.offset(), 160.0);
        assert!(!track.is_animating());
    }

    #[test]
    fn custom_strategies_can_be_registered_and_selected() {
        let mut animations = Animations::builtin();
        animations.register("snap-back", |track, _geometry, _slide, _speed| {
            track.jump(0.0);
        });

        let mut track = Track::new();
        track.jump(500.0);
        animations
            .run("snap-back", &mut track, &geometry(), 4, Duration::ZERO)
            .expect("registered strategy");
        assert_eq!(track.offset(), 0.0);
    }

    #[test]
    fn new_transition_replaces_in_flight_one() {
        let mut track = Track::new();
        track.begin_offset(1600.0, Duration::from_millis(500));
        track.advance(Duration::from_millis(250));
        assert_eq!(track.offset(), 800.0);

        // Stop-before-restart: retarget from the current position.
        track.begin_offset(0.0, Duration::from_millis(100));
        track.advance(Duration::from_millis(50));
        assert_eq!(track.offset(), 400.0);
    }

    #[test]
    fn zero_duration_offset_jumps() {
        let mut track = Track::new();
        track.begin_offset(640.0, Duration::ZERO);
        assert!(!track.is_animating());
        assert_eq!(track.offset(), 640.0);
    }
}
