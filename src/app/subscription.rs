// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard input is only routed while the lightbox is open; the page
//! scrollable handles its own keys otherwise.

use super::Message;
use crate::ui::lightbox;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Frame interval while something is animating.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Interval for plain timers such as the delayed chat prompt.
const TIMER_INTERVAL: Duration = Duration::from_millis(250);

/// Routes lightbox keys (Escape, arrows) while the lightbox is open.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        event::listen_with(|event, status, window_id| {
            lightbox::key_from_event(event, status, window_id)
                .map(|key| Message::Lightbox(lightbox::Message::Key(key)))
        })
    } else {
        Subscription::none()
    }
}

/// Window size drives the page viewport and gallery geometry.
pub fn create_resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::WindowResized(size))
}

/// Ticks at frame rate while animating, slower for pending timers, and not
/// at all when idle.
pub fn create_tick_subscription(animating: bool, idle_timers: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else if idle_timers {
        time::every(TIMER_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
