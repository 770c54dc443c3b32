// SPDX-License-Identifier: MPL-2.0
//! Overlay eligibility guard.
//!
//! Only the auth sequence may render as a modal overlay. The allow-list is
//! an explicit check here, not an accident of which routes happen to be
//! registered in the overlay tree, so reaching it with anything else is a
//! loud error instead of a blank layer.

use super::location::Location;
use crate::error::NavigationError;

/// Exact set of overlay-eligible paths. Entries are never added or dropped
/// silently; this set is part of the external contract.
pub const OVERLAY_ALLOW_LIST: [&str; 4] =
    ["/login", "/register", "/forgot-password", "/otp-verify"];

/// True if `path` may render as a modal overlay.
pub fn is_overlay_path(path: &str) -> bool {
    let normalized = normalize(path);
    OVERLAY_ALLOW_LIST.contains(&normalized)
}

/// Checks that `location` is overlay-eligible.
pub fn ensure_overlay_allowed(location: &Location) -> Result<(), NavigationError> {
    if is_overlay_path(&location.path) {
        Ok(())
    } else {
        Err(NavigationError::OverlayNotAllowed(location.path.clone()))
    }
}

/// Tolerate a trailing slash, same as route matching does.
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_is_the_exact_contract_set() {
        assert_eq!(
            OVERLAY_ALLOW_LIST,
            ["/login", "/register", "/forgot-password", "/otp-verify"]
        );
    }

    #[test]
    fn auth_paths_are_overlay_eligible() {
        for path in OVERLAY_ALLOW_LIST {
            assert!(is_overlay_path(path), "{} should be eligible", path);
        }
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert!(is_overlay_path("/login/"));
    }

    #[test]
    fn tab_roots_are_not_overlay_eligible() {
        for path in ["/home", "/explore", "/social", "/wallet", "/profile"] {
            assert!(!is_overlay_path(path), "{} must not be eligible", path);
        }
    }

    #[test]
    fn ensure_overlay_allowed_reports_the_path() {
        let err = ensure_overlay_allowed(&Location::new("/wallet")).unwrap_err();
        assert_eq!(err, NavigationError::OverlayNotAllowed("/wallet".into()));
    }

    #[test]
    fn ensure_overlay_allowed_accepts_login() {
        assert!(ensure_overlay_allowed(&Location::new("/login")).is_ok());
    }
}
