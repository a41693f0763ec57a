// SPDX-License-Identifier: MPL-2.0
//! Carousel option set.
//!
//! All options are optional in serialized form; missing keys fall back to
//! the defaults in [`crate::config::defaults`]. The animation *registry* is
//! runtime state on the controller and is deliberately not part of this
//! serializable model — only the selected strategy name and speed are.

use crate::config::{
    DEFAULT_ANIMATION_KIND, DEFAULT_ANIMATION_SPEED_MS, DEFAULT_AUTOMATIC_DELAY_MS,
    DEFAULT_IMAGES_PER_SLIDE, DEFAULT_THUMB_IMAGES_PER_SLIDE,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Selected animation strategy and transition duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationChoice {
    /// Strategy name looked up in the controller's animation registry.
    pub kind: String,
    /// Transition duration in milliseconds.
    pub speed_ms: u64,
}

impl AnimationChoice {
    /// Returns the transition duration.
    #[must_use]
    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }
}

impl Default for AnimationChoice {
    fn default() -> Self {
        Self {
            kind: DEFAULT_ANIMATION_KIND.to_string(),
            speed_ms: DEFAULT_ANIMATION_SPEED_MS,
        }
    }
}

/// Full option set for one carousel instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Show prev/next affordances.
    pub use_arrows: bool,
    /// Show one dot indicator per slide group.
    pub use_dots: bool,
    /// Build a thumbnail strip driven by a child controller.
    pub use_thumbs: bool,
    /// Options for the recursively constructed thumbnail controller.
    /// `None` selects the thumbnail defaults (fractional visible count).
    pub thumb_config: Option<Box<CarouselConfig>>,
    pub animation: AnimationChoice,
    /// Slide elements grouped per logical page. Fractional values leave a
    /// partial element visible at the edge.
    pub images_per_slide: f32,
    /// Zoom the indicated slide on click.
    pub allow_zoom: bool,
    pub hide_carousel_on_zoom: bool,
    pub hide_thumbs_on_zoom: bool,
    /// Identifiers of host-page panels hidden while zoomed.
    pub hide_elements_on_zoom: Vec<String>,
    /// Advance automatically on a timer.
    pub automatic: bool,
    pub automatic_delay_ms: u64,
    /// Permanently stop automatic rotation once any control is used.
    pub pause_on_interaction: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            use_arrows: true,
            use_dots: false,
            use_thumbs: false,
            thumb_config: None,
            animation: AnimationChoice::default(),
            images_per_slide: DEFAULT_IMAGES_PER_SLIDE,
            allow_zoom: false,
            hide_carousel_on_zoom: true,
            hide_thumbs_on_zoom: true,
            hide_elements_on_zoom: Vec::new(),
            automatic: false,
            automatic_delay_ms: DEFAULT_AUTOMATIC_DELAY_MS,
            pause_on_interaction: true,
        }
    }
}

impl CarouselConfig {
    /// Default option set for a thumbnail strip: a fractional visible count
    /// so a partially visible thumb hints that more items exist.
    #[must_use]
    pub fn thumb_defaults() -> Self {
        Self {
            images_per_slide: DEFAULT_THUMB_IMAGES_PER_SLIDE,
            ..Self::default()
        }
    }

    /// Resolves the configuration for the thumbnail child controller:
    /// the caller-supplied `thumb_config` when present, the thumbnail
    /// defaults otherwise.
    #[must_use]
    pub fn for_thumbs(&self) -> Self {
        self.thumb_config
            .as_deref()
            .cloned()
            .unwrap_or_else(Self::thumb_defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_option_table() {
        let config = CarouselConfig::default();
        assert!(config.use_arrows);
        assert!(!config.use_dots);
        assert!(!config.use_thumbs);
        assert!(!config.allow_zoom);
        assert!(config.hide_carousel_on_zoom);
        assert!(config.hide_thumbs_on_zoom);
        assert!(config.hide_elements_on_zoom.is_empty());
        assert!(!config.automatic);
        assert_eq!(config.automatic_delay_ms, 2000);
        assert!(config.pause_on_interaction);
        assert_eq!(config.images_per_slide, 1.0);
        assert_eq!(config.animation.kind, "slide");
        assert_eq!(config.animation.speed_ms, 500);
    }

    #[test]
    fn thumb_defaults_use_fractional_visible_count() {
        let thumbs = CarouselConfig::thumb_defaults();
        assert_eq!(thumbs.images_per_slide, 2.6);
        assert!(!thumbs.use_thumbs);
    }

    #[test]
    fn for_thumbs_prefers_caller_supplied_config() {
        let mut config = CarouselConfig::default();
        let mut custom = CarouselConfig::default();
        custom.images_per_slide = 4.0;
        custom.use_arrows = false;
        config.thumb_config = Some(Box::new(custom));

        let resolved = config.for_thumbs();
        assert_eq!(resolved.images_per_slide, 4.0);
        assert!(!resolved.use_arrows);
    }

    #[test]
    fn missing_keys_deserialize_to_defaults() {
        let config: CarouselConfig = toml::from_str("use_dots = true\n").expect("valid toml");
        assert!(config.use_dots);
        assert!(config.use_arrows);
        assert_eq!(config.animation.speed_ms, 500);
    }
}
