// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: the tab bar, page views, theming, and the toast
//! notification system.

pub mod navbar;
pub mod notifications;
pub mod pages;
pub mod theming;

use iced::widget::container;
use iced::{Border, Theme};

/// Shared card chrome used by list entries and modal surfaces.
pub(crate) fn card_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: 1.0,
            radius: 10.0.into(),
        },
        ..container::Style::default()
    }
}
