// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Animation**: transition duration bounds
//! - **Autoplay**: automatic rotation timer bounds
//! - **Geometry**: images-per-slide bounds
//! - **Zoom**: overlay choreography duration

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default duration of an animated slide transition, in milliseconds.
pub const DEFAULT_ANIMATION_SPEED_MS: u64 = 500;

/// Minimum allowed transition duration.
pub const MIN_ANIMATION_SPEED_MS: u64 = 0;

/// Maximum allowed transition duration.
pub const MAX_ANIMATION_SPEED_MS: u64 = 10_000;

/// Name of the default animation strategy.
pub const DEFAULT_ANIMATION_KIND: &str = "slide";

/// Interval between animation progress ticks, in milliseconds (~60 fps).
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Default delay between automatic slide changes, in milliseconds.
pub const DEFAULT_AUTOMATIC_DELAY_MS: u64 = 2000;

/// Minimum automatic delay.
pub const MIN_AUTOMATIC_DELAY_MS: u64 = 100;

/// Maximum automatic delay.
pub const MAX_AUTOMATIC_DELAY_MS: u64 = 60_000;

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Default number of slide elements shown per logical page.
pub const DEFAULT_IMAGES_PER_SLIDE: f32 = 1.0;

/// Minimum images per slide. Fractional values below this would make the
/// per-element width exceed any sane track width.
pub const MIN_IMAGES_PER_SLIDE: f32 = 0.1;

/// Maximum images per slide.
pub const MAX_IMAGES_PER_SLIDE: f32 = 24.0;

/// Images-per-slide default for the thumbnail strip. Fractional so a
/// partially visible thumb hints that more items exist.
pub const DEFAULT_THUMB_IMAGES_PER_SLIDE: f32 = 2.6;

/// Fallback host width before the first window resize event arrives.
pub const DEFAULT_TRACK_WIDTH: f32 = 800.0;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Duration of each phase of the zoom choreography (hide, then reveal),
/// in milliseconds.
pub const DEFAULT_ZOOM_PHASE_MS: u64 = 400;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Animation validation
    assert!(MAX_ANIMATION_SPEED_MS > MIN_ANIMATION_SPEED_MS);
    assert!(DEFAULT_ANIMATION_SPEED_MS >= MIN_ANIMATION_SPEED_MS);
    assert!(DEFAULT_ANIMATION_SPEED_MS <= MAX_ANIMATION_SPEED_MS);
    assert!(ANIMATION_TICK_MS > 0);

    // Autoplay validation
    assert!(MIN_AUTOMATIC_DELAY_MS > 0);
    assert!(MAX_AUTOMATIC_DELAY_MS > MIN_AUTOMATIC_DELAY_MS);
    assert!(DEFAULT_AUTOMATIC_DELAY_MS >= MIN_AUTOMATIC_DELAY_MS);
    assert!(DEFAULT_AUTOMATIC_DELAY_MS <= MAX_AUTOMATIC_DELAY_MS);

    // Geometry validation
    assert!(MIN_IMAGES_PER_SLIDE > 0.0);
    assert!(MAX_IMAGES_PER_SLIDE > MIN_IMAGES_PER_SLIDE);
    assert!(DEFAULT_IMAGES_PER_SLIDE >= MIN_IMAGES_PER_SLIDE);
    assert!(DEFAULT_THUMB_IMAGES_PER_SLIDE > DEFAULT_IMAGES_PER_SLIDE);
    assert!(DEFAULT_THUMB_IMAGES_PER_SLIDE <= MAX_IMAGES_PER_SLIDE);
    assert!(DEFAULT_TRACK_WIDTH > 0.0);

    // Zoom validation
    assert!(DEFAULT_ZOOM_PHASE_MS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_defaults_are_valid() {
        assert_eq!(DEFAULT_ANIMATION_SPEED_MS, 500);
        assert_eq!(DEFAULT_ANIMATION_KIND, "slide");
    }

    #[test]
    fn autoplay_defaults_are_valid() {
        assert_eq!(DEFAULT_AUTOMATIC_DELAY_MS, 2000);
        assert!(DEFAULT_AUTOMATIC_DELAY_MS >= MIN_AUTOMATIC_DELAY_MS);
        assert!(DEFAULT_AUTOMATIC_DELAY_MS <= MAX_AUTOMATIC_DELAY_MS);
    }

    #[test]
    fn geometry_defaults_are_valid() {
        assert_eq!(DEFAULT_IMAGES_PER_SLIDE, 1.0);
        assert_eq!(DEFAULT_THUMB_IMAGES_PER_SLIDE, 2.6);
        assert!(DEFAULT_IMAGES_PER_SLIDE >= MIN_IMAGES_PER_SLIDE);
        assert!(DEFAULT_IMAGES_PER_SLIDE <= MAX_IMAGES_PER_SLIDE);
    }
}
