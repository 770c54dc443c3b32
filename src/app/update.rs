// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Navigation flows through [`apply_navigation`]: the current history
//! entry is resolved into base + overlay locations, the overlay guard
//! runs, both trees are matched against the route table, and the data the
//! base page needs is fetched.

use super::{App, Message, NavigationRequest};
use crate::api::dto::NewPostRequest;
use crate::config;
use crate::diagnostics::{ErrorType, WarningEvent, WarningType};
use crate::error::NavigationError;
use crate::navigation::{ensure_overlay_allowed, match_path, resolve, Location, Page, RouteMatch};
use crate::store::Action;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::pages::auth::{forgot_password, login, otp_verify, register};
use crate::ui::pages::social_upload;
use iced::Task;

/// Top-level message dispatch.
pub(super) fn handle_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navigate(request) => handle_navigate(app, request),
        Message::NavigateBack => handle_navigate_back(app),
        Message::Navbar(message) => match navbar::update(message) {
            navbar::Event::Navigate(path) => handle_navigate(app, NavigationRequest::page(path)),
        },
        Message::Login(message) => handle_login_message(app, message),
        Message::Register(message) => handle_register_message(app, message),
        Message::ForgotPassword(message) => handle_forgot_message(app, message),
        Message::OtpVerify(message) => handle_otp_message(app, message),
        Message::Upload(message) => handle_upload_message(app, message),
        Message::ToggleFavourite(id) => handle_toggle_favourite(app, id),
        Message::SignOut => {
            app.store.dispatch(Action::SessionCleared);
            app.notifications
                .push(Notification::info("notification-signed-out"));
            Task::none()
        }
        Message::LanguageSelected(locale) => {
            app.i18n.set_locale(locale.clone());
            app.config.general.language = Some(locale.to_string());
            persist_config(app);
            Task::none()
        }
        Message::ThemeModeSelected(mode) => {
            app.theme_mode = mode;
            app.config.general.theme_mode = mode;
            persist_config(app);
            Task::none()
        }
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(_instant) => {
            app.notifications.tick();
            Task::none()
        }
        Message::NearbyLoaded(result) => match result {
            Ok(locations) => {
                app.nearby = Some(locations);
                Task::none()
            }
            Err(_) => api_error(app, "notification-load-nearby-error"),
        },
        Message::FeedLoaded(result) => match result {
            Ok(feed) => {
                app.feed = Some(feed);
                Task::none()
            }
            Err(_) => api_error(app, "notification-load-feed-error"),
        },
        Message::LocationLoaded(result) => match result {
            Ok(detail) => {
                app.current_location = Some(detail);
                Task::none()
            }
            Err(_) => api_error(app, "notification-load-location-error"),
        },
        Message::VideoLoaded(result) => match result {
            Ok(video) => {
                app.current_video = Some(video);
                Task::none()
            }
            Err(_) => api_error(app, "notification-load-video-error"),
        },
        Message::WalletLoaded(result) => match result {
            Ok(snapshot) => {
                app.store.dispatch(Action::WalletUpdated(snapshot));
                Task::none()
            }
            Err(_) => api_error(app, "notification-load-wallet-error"),
        },
        Message::ProfileLoaded(result) => match result {
            Ok(profile) => {
                app.store.dispatch(Action::ProfileUpdated(profile));
                Task::none()
            }
            Err(_) => api_error(app, "notification-load-profile-error"),
        },
        Message::LoginSubmitted(result) => {
            app.login.finish_submit();
            match result {
                Ok(challenge) => {
                    app.otp_verify.set_challenge(challenge);
                    navigate_within_auth(app, "/otp-verify")
                }
                Err(_) => {
                    app.login.set_error("auth-login-failed");
                    api_error(app, "auth-login-failed")
                }
            }
        }
        Message::OtpSubmitted(result) => {
            app.otp_verify.finish_submit();
            match result {
                Ok(session) => {
                    app.otp_verify.reset();
                    app.store.dispatch(Action::SessionEstablished(session));
                    app.notifications
                        .push(Notification::success("notification-signed-in"));
                    leave_auth(app)
                }
                Err(_) => {
                    app.otp_verify.set_error("otp-verify-failed");
                    api_error(app, "otp-verify-failed")
                }
            }
        }
        Message::RegisterSubmitted(result) => {
            app.register.finish_submit();
            match result {
                Ok(session) => {
                    app.store.dispatch(Action::SessionEstablished(session));
                    app.notifications
                        .push(Notification::success("notification-signed-in"));
                    leave_auth(app)
                }
                Err(_) => {
                    app.register.set_error("auth-register-failed");
                    api_error(app, "auth-register-failed")
                }
            }
        }
        Message::ForgotSubmitted(result) => {
            app.forgot_password.finish_submit();
            match result {
                Ok(()) => {
                    app.notifications
                        .push(Notification::success("notification-reset-sent"));
                    navigate_within_auth(app, "/login")
                }
                Err(_) => api_error(app, "notification-reset-error"),
            }
        }
        Message::UploadFileSelected(path) => {
            app.upload.set_selected_file(path);
            Task::none()
        }
        Message::PostPublished(result) => {
            app.upload.finish_submit();
            match result {
                Ok(post) => {
                    app.upload.reset();
                    if let Some(feed) = &mut app.feed {
                        feed.insert(0, post);
                    }
                    app.notifications
                        .push(Notification::success("notification-post-published"));
                    handle_navigate(app, NavigationRequest::page("/social"))
                }
                Err(_) => api_error(app, "notification-post-error"),
            }
        }
    }
}

/// Pushes a navigation onto the history and re-renders.
fn handle_navigate(app: &mut App, request: NavigationRequest) -> Task<Message> {
    let from = app.history.current().path.clone();

    let mut location = if request.modal {
        // The page that stays visible underneath is whatever the base
        // tree currently renders, never the overlay.
        Location::modal(request.path, &app.resolved.base)
    } else {
        Location::new(request.path)
    };
    if let Some(query) = request.query {
        location.query = Some(query);
    }

    // Re-selecting the current entry (e.g. tapping the active tab) is a
    // no-op rather than a history push.
    if app.history.current() == &location {
        return Task::none();
    }

    app.history.push(location);
    apply_navigation(app, Some(from))
}

/// Pops the history by one entry; a no-op at the oldest entry.
fn handle_navigate_back(app: &mut App) -> Task<Message> {
    let from = app.history.current().path.clone();
    if app.history.back().is_none() {
        return Task::none();
    }
    apply_navigation(app, Some(from))
}

/// Resolves the current history entry and rebuilds both route trees.
///
/// This is the single place the dual-route invariant is enforced: when an
/// overlay is mounted, the base tree was rendered from the background
/// location carried by the entry's payload.
pub(super) fn apply_navigation(app: &mut App, from: Option<String>) -> Task<Message> {
    let current = app.history.current().clone();
    if let Some(from) = from {
        app.diagnostics.log_navigation(from, current.path.clone());
    }

    let (mut resolved, issue) = resolve(&current);
    if issue.is_some() {
        app.notifications.push(
            Notification::warning(NavigationError::MalformedBackgroundPayload.i18n_key())
                .with_warning_type(WarningType::Navigation),
        );
    }

    // Explicit allow-list guard: a non-eligible overlay path fails loudly
    // instead of rendering an empty layer.
    if let Some(overlay) = resolved.overlay.clone() {
        if let Err(err) = ensure_overlay_allowed(&overlay) {
            app.notifications.push(
                Notification::error(err.i18n_key())
                    .with_arg("path", overlay.path.clone())
                    .with_error_type(ErrorType::Navigation),
            );
            resolved.overlay = None;
        }
    }

    let base_route = match_path(&resolved.base.path);
    if base_route == RouteMatch::NotFound {
        let err = NavigationError::UnmatchedRoute(resolved.base.path.clone());
        app.diagnostics
            .log_warning(WarningEvent::new(WarningType::Navigation, err.to_string()));
    }
    let overlay_route = resolved.overlay.as_ref().map(|loc| match_path(&loc.path));

    app.base_route = base_route;
    app.overlay_route = overlay_route;
    app.resolved = resolved;

    load_page_data(app)
}

/// Kicks off the API requests the base page needs, skipping data that is
/// already present.
fn load_page_data(app: &mut App) -> Task<Message> {
    let Some(page) = app.base_route.page() else {
        return Task::none();
    };

    let mut tasks: Vec<Task<Message>> = Vec::new();

    match page {
        Page::Home => {
            if app.nearby.is_none() {
                tasks.push(fetch_nearby(app));
            }
            if app.feed.is_none() {
                tasks.push(fetch_feed(app));
            }
        }
        Page::Explore | Page::Map | Page::Favourites => {
            if app.nearby.is_none() {
                tasks.push(fetch_nearby(app));
            }
        }
        Page::Social => {
            if app.feed.is_none() {
                tasks.push(fetch_feed(app));
            }
        }
        Page::SocialUpload => {}
        Page::Wallet => {
            if app.store.is_signed_in() {
                let api = app.api.clone();
                tasks.push(Task::perform(
                    async move { api.wallet().await },
                    Message::WalletLoaded,
                ));
            }
        }
        Page::Profile => {
            if app.store.is_signed_in() {
                let api = app.api.clone();
                tasks.push(Task::perform(
                    async move { api.profile().await },
                    Message::ProfileLoaded,
                ));
            }
        }
        Page::LocationDetail => {
            if let Some(id) = route_param(app, "id") {
                let stale = app
                    .current_location
                    .as_ref()
                    .is_none_or(|detail| detail.summary.id != id);
                if stale {
                    app.current_location = None;
                    let api = app.api.clone();
                    tasks.push(Task::perform(
                        async move { api.location(&id).await },
                        Message::LocationLoaded,
                    ));
                }
            }
        }
        Page::Video => {
            if let Some(id) = route_param(app, "id") {
                let stale = app
                    .current_video
                    .as_ref()
                    .is_none_or(|video| video.id != id);
                if stale {
                    app.current_video = None;
                    let api = app.api.clone();
                    tasks.push(Task::perform(
                        async move { api.video(&id).await },
                        Message::VideoLoaded,
                    ));
                }
            }
        }
        Page::Login | Page::Register | Page::ForgotPassword | Page::OtpVerify => {}
    }

    Task::batch(tasks)
}

fn route_param(app: &App, name: &str) -> Option<String> {
    match &app.base_route {
        RouteMatch::Matched { params, .. } => params.get(name).map(str::to_string),
        RouteMatch::NotFound => None,
    }
}

fn fetch_nearby(app: &App) -> Task<Message> {
    let api = app.api.clone();
    Task::perform(async move { api.nearby_locations().await }, Message::NearbyLoaded)
}

fn fetch_feed(app: &App) -> Task<Message> {
    let api = app.api.clone();
    Task::perform(async move { api.feed().await }, Message::FeedLoaded)
}

// Auth flow plumbing.

fn handle_login_message(app: &mut App, message: login::Message) -> Task<Message> {
    match app.login.update(message) {
        login::Event::None => Task::none(),
        login::Event::Submit(request) => {
            let api = app.api.clone();
            Task::perform(async move { api.login(request).await }, Message::LoginSubmitted)
        }
        login::Event::OpenRegister => navigate_within_auth(app, "/register"),
        login::Event::OpenForgotPassword => navigate_within_auth(app, "/forgot-password"),
    }
}

fn handle_register_message(app: &mut App, message: register::Message) -> Task<Message> {
    match app.register.update(message) {
        register::Event::None => Task::none(),
        register::Event::Submit(request) => {
            let api = app.api.clone();
            Task::perform(
                async move { api.register(request).await },
                Message::RegisterSubmitted,
            )
        }
        register::Event::OpenLogin => navigate_within_auth(app, "/login"),
    }
}

fn handle_forgot_message(app: &mut App, message: forgot_password::Message) -> Task<Message> {
    match app.forgot_password.update(message) {
        forgot_password::Event::None => Task::none(),
        forgot_password::Event::Submit(request) => {
            let api = app.api.clone();
            Task::perform(
                async move { api.forgot_password(request).await },
                Message::ForgotSubmitted,
            )
        }
        forgot_password::Event::OpenLogin => navigate_within_auth(app, "/login"),
    }
}

fn handle_otp_message(app: &mut App, message: otp_verify::Message) -> Task<Message> {
    match app.otp_verify.update(message) {
        otp_verify::Event::None => Task::none(),
        otp_verify::Event::Submit(request) => {
            let api = app.api.clone();
            Task::perform(async move { api.verify_otp(request).await }, Message::OtpSubmitted)
        }
    }
}

/// Moves between auth pages, preserving the current presentation: modal
/// stays modal (same background), full page stays full page.
fn navigate_within_auth(app: &mut App, path: &str) -> Task<Message> {
    let request = if app.resolved.overlay.is_some() {
        NavigationRequest::modal(path)
    } else {
        NavigationRequest::page(path)
    };
    handle_navigate(app, request)
}

/// Leaves the auth sequence after a session is established: pop back to
/// the first entry without a background payload (the page the modal was
/// opened over), or go home from a full-page auth view.
fn leave_auth(app: &mut App) -> Task<Message> {
    if app.resolved.overlay.is_none() {
        return handle_navigate(app, NavigationRequest::page(super::START_PATH));
    }

    let from = app.history.current().path.clone();
    while app.history.can_go_back() {
        app.history.back();
        let (resolved, _) = resolve(app.history.current());
        if resolved.overlay.is_none() {
            break;
        }
    }
    apply_navigation(app, Some(from))
}

// Composer plumbing.

fn handle_upload_message(app: &mut App, message: social_upload::Message) -> Task<Message> {
    match app.upload.update(message) {
        social_upload::Event::None => Task::none(),
        social_upload::Event::PickFile => Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .add_filter("media", &["png", "jpg", "jpeg", "webp", "mp4"])
                    .pick_file()
                    .await
                    .map(|file| file.path().to_path_buf())
            },
            Message::UploadFileSelected,
        ),
        social_upload::Event::Publish(request) => publish_post(app, request),
    }
}

fn publish_post(app: &App, request: NewPostRequest) -> Task<Message> {
    let api = app.api.clone();
    Task::perform(
        async move { api.publish_post(request).await },
        Message::PostPublished,
    )
}

fn handle_toggle_favourite(app: &mut App, id: String) -> Task<Message> {
    if app.store.is_favourite(&id) {
        app.store.dispatch(Action::FavouriteRemoved(id));
    } else {
        app.store.dispatch(Action::FavouriteAdded(id));
    }

    if let Some(key) = app.store.persistable().save() {
        app.notifications
            .push(Notification::warning(key).with_warning_type(WarningType::Config));
    }
    Task::none()
}

fn persist_config(app: &mut App) {
    if config::save(&app.config).is_err() {
        app.notifications.push(
            Notification::warning("notification-config-save-error")
                .with_warning_type(WarningType::Config),
        );
    }
}

fn api_error(app: &mut App, key: &'static str) -> Task<Message> {
    app.notifications
        .push(Notification::error(key).with_error_type(ErrorType::Api));
    Task::none()
}
