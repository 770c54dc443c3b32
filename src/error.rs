// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(String),
    Navigation(NavigationError),
}

/// Navigation failures that the routing layer surfaces explicitly instead
/// of rendering nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Path matches no route table entry.
    UnmatchedRoute(String),

    /// A `background` payload was attached to the navigation entry but did
    /// not deserialize into a Location.
    MalformedBackgroundPayload,

    /// An overlay location outside the overlay allow-list was requested.
    OverlayNotAllowed(String),
}

impl NavigationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            NavigationError::UnmatchedRoute(_) => "error-nav-unmatched-route",
            NavigationError::MalformedBackgroundPayload => "error-nav-malformed-background",
            NavigationError::OverlayNotAllowed(_) => "error-nav-overlay-not-allowed",
        }
    }
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::UnmatchedRoute(path) => write!(f, "No route matches {}", path),
            NavigationError::MalformedBackgroundPayload => {
                write!(f, "Navigation state carries a malformed background location")
            }
            NavigationError::OverlayNotAllowed(path) => {
                write!(f, "Path {} is not overlay-eligible", path)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
            Error::Navigation(e) => write!(f, "Navigation Error: {}", e),
        }
    }
}

impl From<NavigationError> for Error {
    fn from(err: NavigationError) -> Self {
        Error::Navigation(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Api(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn navigation_error_converts_to_error() {
        let err: Error = NavigationError::UnmatchedRoute("/nope".into()).into();
        match err {
            Error::Navigation(NavigationError::UnmatchedRoute(path)) => {
                assert_eq!(path, "/nope");
            }
            _ => panic!("expected Navigation variant"),
        }
    }

    #[test]
    fn navigation_error_i18n_keys() {
        assert_eq!(
            NavigationError::UnmatchedRoute("/x".into()).i18n_key(),
            "error-nav-unmatched-route"
        );
        assert_eq!(
            NavigationError::MalformedBackgroundPayload.i18n_key(),
            "error-nav-malformed-background"
        );
        assert_eq!(
            NavigationError::OverlayNotAllowed("/home".into()).i18n_key(),
            "error-nav-overlay-not-allowed"
        );
    }

    #[test]
    fn navigation_error_display_names_path() {
        let err = NavigationError::OverlayNotAllowed("/wallet".into());
        assert!(format!("{}", err).contains("/wallet"));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }
}
