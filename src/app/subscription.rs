// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resize events drive geometry updates on the full controller
//! tree; everything else (animation ticks, the rotation timer) is derived
//! from carousel state by the component itself.

use super::Message;
use iced::{event, window, Subscription};

/// Listens for window resize events and reports the new width.
pub fn window_resize() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size.width))
        }
        _ => None,
    })
}
