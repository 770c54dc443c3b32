// SPDX-License-Identifier: MPL-2.0
//! Remote API layer: wire-shape DTOs, a thin HTTP client, and the bundled
//! mock data set served when no API base URL is configured.
//!
//! Every operation is a single request; retry and caching policy belong to
//! the platform, not this client.

pub mod client;
pub mod dto;
pub mod mock;

pub use client::ApiClient;
