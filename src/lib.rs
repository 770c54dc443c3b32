// SPDX-License-Identifier: MPL-2.0
//! `wayfare` is a mobile-oriented client for a location-discovery and
//! social platform, built with the Iced GUI framework.
//!
//! The interesting part is the dual-route navigation model in
//! [`navigation`]: a navigation entry can carry a background location, in
//! which case the base page tree keeps rendering underneath while the
//! entry's own location mounts as a modal overlay (the auth sequence).
//! Everything else is app shell: pages, an explicit store, Fluent
//! internationalization, and a thin API client with bundled mock data.

#![doc(html_root_url = "https://docs.rs/wayfare/0.2.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod navigation;
pub mod store;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;
