// SPDX-License-Identifier: MPL-2.0
//! Navigation domain: locations, the route table, the background/overlay
//! resolver, and the in-process history stack.
//!
//! The dual-route model works like this: a navigation entry may carry a
//! `background` location in its state payload. When it does, the base page
//! tree renders against the background location and the entry's own location
//! renders as a modal overlay on top. Dismissing the modal is ordinary back
//! navigation; the restored entry carries no background payload, so the
//! resolver lands back in the base-only state without special cases.

pub mod history;
pub mod location;
pub mod overlay;
pub mod resolver;
pub mod route_table;

pub use history::History;
pub use location::{Location, NavigationState};
pub use overlay::{ensure_overlay_allowed, is_overlay_path, OVERLAY_ALLOW_LIST};
pub use resolver::{resolve, ResolveIssue, ResolvedNavigation};
pub use route_table::{match_path, Page, RouteMatch, RouteParams, ROUTES};
