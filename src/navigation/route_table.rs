// SPDX-License-Identifier: MPL-2.0
//! Static route table mapping path patterns to pages.
//!
//! Patterns are exact paths or parametrized segments (`/location/:id`).
//! Authors keep patterns disjoint, so first match wins. An unmatched path
//! is an explicit [`RouteMatch::NotFound`], never a silently empty tree.

/// Pages the route table can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Explore,
    Social,
    SocialUpload,
    Wallet,
    Profile,
    Favourites,
    Map,
    LocationDetail,
    Video,
    Login,
    Register,
    ForgotPassword,
    OtpVerify,
}

/// One route table entry: path pattern and the page it addresses.
#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub page: Page,
}

/// The route table. This path vocabulary is the deep-link contract surface;
/// collaborators construct these paths, so entries are never renamed
/// silently.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { pattern: "/home", page: Page::Home },
    RouteEntry { pattern: "/explore", page: Page::Explore },
    RouteEntry { pattern: "/social", page: Page::Social },
    RouteEntry { pattern: "/social/upload", page: Page::SocialUpload },
    RouteEntry { pattern: "/wallet", page: Page::Wallet },
    RouteEntry { pattern: "/profile", page: Page::Profile },
    RouteEntry { pattern: "/favourites", page: Page::Favourites },
    RouteEntry { pattern: "/map", page: Page::Map },
    RouteEntry { pattern: "/location/:id", page: Page::LocationDetail },
    RouteEntry { pattern: "/video/:id", page: Page::Video },
    RouteEntry { pattern: "/login", page: Page::Login },
    RouteEntry { pattern: "/register", page: Page::Register },
    RouteEntry { pattern: "/forgot-password", page: Page::ForgotPassword },
    RouteEntry { pattern: "/otp-verify", page: Page::OtpVerify },
];

/// Parameters bound by `:name` segments during matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(String, String)>);

impl RouteParams {
    /// Returns the value bound to `name`, if the matched pattern had such a
    /// segment.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of matching a path against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    Matched { page: Page, params: RouteParams },
    NotFound,
}

impl RouteMatch {
    /// The matched page, if any.
    pub fn page(&self) -> Option<Page> {
        match self {
            RouteMatch::Matched { page, .. } => Some(*page),
            RouteMatch::NotFound => None,
        }
    }
}

/// Matches `path` against the route table.
pub fn match_path(path: &str) -> RouteMatch {
    let segments = split_segments(path);

    for entry in ROUTES {
        if let Some(params) = match_pattern(entry.pattern, &segments) {
            return RouteMatch::Matched {
                page: entry.page,
                params,
            };
        }
    }

    RouteMatch::NotFound
}

/// Splits a path into segments, tolerating a trailing slash.
fn split_segments(path: &str) -> Vec<&str> {
    path.trim_start_matches('/')
        .trim_end_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn match_pattern(pattern: &str, segments: &[&str]) -> Option<RouteParams> {
    let pattern_segments = split_segments(pattern);
    if pattern_segments.len() != segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in pattern_segments.iter().zip(segments) {
        if let Some(name) = expected.strip_prefix(':') {
            params.push((name.to_string(), (*actual).to_string()));
        } else if expected != actual {
            return None;
        }
    }

    Some(RouteParams(params))
}
