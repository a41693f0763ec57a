// SPDX-License-Identifier: MPL-2.0
//! Notifications emitted towards host-page observers.

/// Observer notification emitted by a controller.
///
/// `BeforeZoom` is emitted before the zoom mutates any visibility;
/// `AfterUnzoom` after the zoom state has been cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    BeforeZoom { slide: usize },
    AfterUnzoom,
}
