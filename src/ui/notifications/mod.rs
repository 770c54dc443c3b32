// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Non-intrusive toasts inform the user about navigation issues, API
//! failures, and completed actions without blocking interaction.
//!
//! - Toast duration: ~3s for success/info, ~5s for warnings, manual
//!   dismiss for errors
//! - Max visible toasts: 3 (others are queued)
//! - Warnings and errors are mirrored into the diagnostics log

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
