// SPDX-License-Identifier: MPL-2.0
//! Localization support backed by Fluent.
//!
//! Translations live in `assets/i18n/*.ftl`, one file per locale, embedded
//! into the binary. Locale resolution order: CLI flag, then the persisted
//! configuration, then the OS locale, then `en-US`.

pub mod fluent;

pub use fluent::I18n;
