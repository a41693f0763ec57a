// SPDX-License-Identifier: MPL-2.0
//! Carousel navigation engine.
//!
//! This module is UI-toolkit-agnostic: it owns indices, geometry, animation
//! progress, autoplay, and zoom choreography as plain state, and the Iced
//! layer in [`crate::ui::carousel`] renders from it. The split keeps every
//! navigation rule unit-testable without a renderer.

pub mod animation;
pub mod autoplay;
pub mod config;
pub mod controller;
pub mod event;
pub mod geometry;
pub mod slide;
pub mod zoom;

pub use animation::{AnimationFn, Animations, Track};
pub use autoplay::{Autoplay, AutomaticDelay};
pub use config::{AnimationChoice, CarouselConfig};
pub use controller::{ControlState, SlideController};
pub use event::CarouselEvent;
pub use geometry::{Geometry, ImagesPerSlide};
pub use slide::{Slide, SlideDeck};
pub use zoom::{ZoomOverlay, ZoomPhase};
