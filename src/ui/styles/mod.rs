// SPDX-License-Identifier: MPL-2.0
//! Centralized styling helpers for the carousel views.

pub mod button;
pub mod container;
