// SPDX-License-Identifier: MPL-2.0
//! Splits the current navigation entry into a base location and an
//! optional overlay location.

use super::location::{Location, NavigationState};

/// The two route trees to render for a navigation entry.
///
/// Invariant: when `overlay` is present, `base` is the background location
/// from the entry's payload, never the entry's own location. The base page
/// must stay rendered underneath the modal or the modal would appear to
/// replace it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNavigation {
    pub base: Location,
    pub overlay: Option<Location>,
}

impl ResolvedNavigation {
    /// True when only the base tree is mounted.
    pub fn is_base_only(&self) -> bool {
        self.overlay.is_none()
    }
}

/// Non-fatal problems encountered while resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveIssue {
    /// The background payload was present but malformed; the entry was
    /// treated as a plain navigation.
    MalformedBackground,
}

/// Resolves `current` into the pair of locations to render.
///
/// A valid background payload puts the system in the base+overlay state;
/// anything else (no payload, or a payload that fails validation) is
/// base-only. Resolution is pure: the same location always resolves to the
/// same pair.
pub fn resolve(current: &Location) -> (ResolvedNavigation, Option<ResolveIssue>) {
    match NavigationState::parse(current) {
        Ok(NavigationState::WithBackground(background)) => (
            ResolvedNavigation {
                base: background,
                overlay: Some(current.clone()),
            },
            None,
        ),
        Ok(NavigationState::NoBackground) => (
            ResolvedNavigation {
                base: current.clone(),
                overlay: None,
            },
            None,
        ),
        Err(_) => (
            ResolvedNavigation {
                base: current.clone(),
                overlay: None,
            },
            Some(ResolveIssue::MalformedBackground),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_navigation_resolves_base_only() {
        let home = Location::new("/home");
        let (resolved, issue) = resolve(&home);

        assert!(resolved.is_base_only());
        assert_eq!(resolved.base, home);
        assert!(issue.is_none());
    }

    #[test]
    fn modal_navigation_resolves_base_plus_overlay() {
        let home = Location::new("/home");
        let modal = Location::modal("/login", &home);
        let (resolved, issue) = resolve(&modal);

        assert_eq!(resolved.base.path, "/home");
        assert_eq!(resolved.overlay.as_ref().map(|l| l.path.as_str()), Some("/login"));
        assert!(issue.is_none());
    }

    #[test]
    fn malformed_background_falls_back_to_base_only() {
        let loc = Location::new("/login").with_state(json!({ "background": "not a location" }));
        let (resolved, issue) = resolve(&loc);

        assert!(resolved.is_base_only());
        assert_eq!(resolved.base.path, "/login");
        assert_eq!(issue, Some(ResolveIssue::MalformedBackground));
    }

    #[test]
    fn resolution_is_idempotent() {
        let home = Location::new("/home");
        let modal = Location::modal("/login", &home);

        let first = resolve(&modal);
        let second = resolve(&modal);
        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
    }

    #[test]
    fn base_never_equals_overlay_location() {
        let explore = Location::new("/explore").with_query("near=harbor");
        let modal = Location::modal("/otp-verify", &explore);
        let (resolved, _) = resolve(&modal);

        let overlay = resolved.overlay.expect("overlay expected");
        assert_ne!(resolved.base.path, overlay.path);
        assert_eq!(resolved.base.query.as_deref(), Some("near=harbor"));
    }
}
