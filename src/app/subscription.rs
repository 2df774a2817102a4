// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are only routed when no widget captured the event, so
//! typing in the search fields never pans the map.

use super::message::Shortcut;
use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Frame interval while the camera is flying.
const ANIMATION_INTERVAL: Duration = Duration::from_millis(16);

/// Tick interval for notification auto-dismiss.
const NOTIFICATION_INTERVAL: Duration = Duration::from_millis(100);

/// Routes keyboard shortcuts and window close requests.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        if status == event::Status::Captured {
            return None;
        }

        match &event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                shortcut_for(key, *modifiers).map(Message::Shortcut)
            }
            _ => None,
        }
    })
}

/// Maps a key press to a map shortcut.
pub fn shortcut_for(key: &Key, modifiers: keyboard::Modifiers) -> Option<Shortcut> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }
    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => Some(Shortcut::Pan { x: -1.0, y: 0.0 }),
        Key::Named(Named::ArrowRight) => Some(Shortcut::Pan { x: 1.0, y: 0.0 }),
        Key::Named(Named::ArrowUp) => Some(Shortcut::Pan { x: 0.0, y: -1.0 }),
        Key::Named(Named::ArrowDown) => Some(Shortcut::Pan { x: 0.0, y: 1.0 }),
        Key::Named(Named::Escape) => Some(Shortcut::Escape),
        Key::Character("+" | "=") => Some(Shortcut::ZoomIn),
        Key::Character("-" | "_") => Some(Shortcut::ZoomOut),
        _ => None,
    }
}

/// Creates a periodic tick subscription for fly-to animation and
/// notification auto-dismiss.
pub fn create_tick_subscription(is_flying: bool, has_notifications: bool) -> Subscription<Message> {
    if is_flying {
        time::every(ANIMATION_INTERVAL).map(Message::Tick)
    } else if has_notifications {
        time::every(NOTIFICATION_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
