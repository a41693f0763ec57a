// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is a configurable image carousel widget built with the
//! Iced GUI framework.
//!
//! The [`carousel`] module holds the toolkit-agnostic navigation engine
//! (slide indices, geometry, animation strategies, autoplay, zoom
//! choreography); [`ui::carousel`] wraps it as an Iced component; [`app`]
//! is a demo gallery hosting one carousel over a directory of images.

#![doc(html_root_url = "https://docs.rs/iced_carousel/0.2.0")]

pub mod app;
pub mod carousel;
pub mod config;
pub mod error;
pub mod i18n;
pub mod slide_scanner;
pub mod ui;
