// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::keyboard;
use iced::Subscription;
use std::time::Duration;

/// Periodic tick driving toast auto-dismiss. Only active while there is
/// something to dismiss, so an idle app schedules nothing.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        iced::time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Escape dismisses the modal overlay, mirroring browser-back.
pub fn create_key_subscription(overlay_active: bool) -> Subscription<Message> {
    if overlay_active {
        keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, .. } => match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::NavigateBack),
                _ => None,
            },
            _ => None,
        })
    } else {
        Subscription::none()
    }
}
