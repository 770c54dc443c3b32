// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::dto::{
    AuthSession, FeedPost, LocationDetail, LocationSummary, OtpChallenge, UserProfile, VideoItem,
    WalletSnapshot,
};
use crate::error::Error;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::pages::auth::{forgot_password, login, otp_verify, register};
use crate::ui::pages::social_upload;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Push a navigation onto the history.
    Navigate(NavigationRequest),
    /// Pop the history by one entry (browser-back, modal dismiss, Escape).
    NavigateBack,
    Navbar(navbar::Message),
    Login(login::Message),
    Register(register::Message),
    ForgotPassword(forgot_password::Message),
    OtpVerify(otp_verify::Message),
    Upload(social_upload::Message),
    /// Toggle a location in the favourites set.
    ToggleFavourite(String),
    SignOut,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for toast auto-dismiss
    // Page data arrivals.
    NearbyLoaded(Result<Vec<LocationSummary>, Error>),
    FeedLoaded(Result<Vec<FeedPost>, Error>),
    LocationLoaded(Result<LocationDetail, Error>),
    VideoLoaded(Result<VideoItem, Error>),
    WalletLoaded(Result<WalletSnapshot, Error>),
    ProfileLoaded(Result<UserProfile, Error>),
    // Auth sequence results.
    LoginSubmitted(Result<OtpChallenge, Error>),
    OtpSubmitted(Result<AuthSession, Error>),
    RegisterSubmitted(Result<AuthSession, Error>),
    ForgotSubmitted(Result<(), Error>),
    // Upload composer.
    /// Result of the attachment file dialog.
    UploadFileSelected(Option<PathBuf>),
    PostPublished(Result<FeedPost, Error>),
}

/// A navigation the UI asks for. `modal` attaches the currently rendered
/// base location as the background payload, putting the target on the
/// overlay layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: String,
    pub query: Option<String>,
    pub modal: bool,
}

impl NavigationRequest {
    /// Plain navigation that replaces the visible page.
    pub fn page(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
            modal: false,
        }
    }

    /// Modal navigation that keeps the current page rendered underneath.
    pub fn modal(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
            modal: true,
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional deep-link path to open on startup (e.g. `/location/pier-39`).
    pub start_path: Option<String>,
}
