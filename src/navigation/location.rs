// SPDX-License-Identifier: MPL-2.0
//! Locations and the validated navigation-state payload.

use crate::error::NavigationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key under which a modal navigation stores the page that was visible
/// before the modal opened.
pub const BACKGROUND_KEY: &str = "background";

/// A navigation address: path, optional query, optional attached payload.
///
/// The payload is arbitrary JSON supplied by whoever initiated the
/// navigation. The only field this crate interprets is [`BACKGROUND_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
}

impl Location {
    /// Creates a location for a plain navigation with no payload.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
            state: None,
        }
    }

    /// Attaches a query string (without the leading `?`).
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Attaches an arbitrary state payload.
    #[must_use]
    pub fn with_state(mut self, state: Value) -> Self {
        self.state = Some(state);
        self
    }

    /// Creates a modal navigation to `path`, remembering `background` as
    /// the page that stays visible underneath.
    ///
    /// The background location is stored stripped of its own payload so a
    /// modal opened on top of a modal cannot chain backgrounds.
    pub fn modal(path: impl Into<String>, background: &Location) -> Self {
        let flat = Location {
            path: background.path.clone(),
            query: background.query.clone(),
            state: None,
        };
        let payload = serde_json::json!({ BACKGROUND_KEY: flat });
        Self::new(path).with_state(payload)
    }

    /// Returns the raw background value from the payload, if any.
    fn background_value(&self) -> Option<&Value> {
        self.state.as_ref()?.get(BACKGROUND_KEY)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.query {
            Some(query) => write!(f, "{}?{}", self.path, query),
            None => write!(f, "{}", self.path),
        }
    }
}

/// The validated navigation state of an entry, produced only by
/// [`NavigationState::parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationState {
    /// Plain navigation; the entry's own location is the whole picture.
    NoBackground,
    /// Modal navigation; the contained location stays rendered underneath.
    WithBackground(Location),
}

impl NavigationState {
    /// Parses the state payload of `location`.
    ///
    /// A missing payload or a payload without a background field is
    /// `NoBackground`. A background field that does not deserialize into a
    /// [`Location`] is rejected rather than passed through.
    pub fn parse(location: &Location) -> Result<Self, NavigationError> {
        let Some(raw) = location.background_value() else {
            return Ok(NavigationState::NoBackground);
        };

        match serde_json::from_value::<Location>(raw.clone()) {
            Ok(background) => Ok(NavigationState::WithBackground(background)),
            Err(_) => Err(NavigationError::MalformedBackgroundPayload),
        }
    }
}
