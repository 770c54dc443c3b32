// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between navigation, the store,
//! and the page surfaces.
//!
//! The `App` struct is the explicitly constructed application context:
//! history, resolved routes, store, i18n, theming, and notifications all
//! live here, created once at startup and passed by reference through the
//! update/view loop. There are no process-wide singletons.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, NavigationRequest};

use crate::api::dto::{FeedPost, LocationDetail, LocationSummary, VideoItem};
use crate::api::ApiClient;
use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsHandle;
use crate::i18n::fluent::I18n;
use crate::navigation::{resolve, History, Location, ResolvedNavigation, RouteMatch};
use crate::store::{persistence::StoreState, Store};
use crate::ui::notifications;
use crate::ui::pages::auth::{forgot_password, login, otp_verify, register};
use crate::ui::pages::social_upload;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Default entry point when no deep link is given.
pub const START_PATH: &str = "/home";

/// Root application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    history: History,
    /// Base + overlay locations for the current history entry.
    resolved: ResolvedNavigation,
    base_route: RouteMatch,
    overlay_route: Option<RouteMatch>,
    store: Store,
    api: ApiClient,
    theme_mode: ThemeMode,
    diagnostics: DiagnosticsHandle,
    notifications: notifications::Manager,
    // Page data, loaded lazily per navigation.
    nearby: Option<Vec<LocationSummary>>,
    feed: Option<Vec<FeedPost>>,
    current_location: Option<LocationDetail>,
    current_video: Option<VideoItem>,
    // Form state for the auth sequence and the composer.
    login: login::State,
    register: register::State,
    forgot_password: forgot_password::State,
    otp_verify: otp_verify::State,
    upload: social_upload::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current", &self.history.current().path)
            .field("base", &self.resolved.base.path)
            .field("overlay_active", &self.resolved.overlay.is_some())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        let initial = Location::new(START_PATH);
        let (resolved, _) = resolve(&initial);
        let base_route = crate::navigation::match_path(&resolved.base.path);

        let diagnostics = DiagnosticsHandle::default();
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.clone());

        Self {
            i18n: I18n::default(),
            config: Config::default(),
            history: History::new(initial),
            resolved,
            base_route,
            overlay_route: None,
            store: Store::default(),
            api: ApiClient::new(None),
            theme_mode: ThemeMode::System,
            diagnostics,
            notifications,
            nearby: None,
            feed: None,
            current_location: None,
            current_video: None,
            login: login::State::default(),
            register: register::State::default(),
            forgot_password: forgot_password::State::default(),
            otp_verify: otp_verify::State::default(),
            upload: social_upload::State::default(),
        }
    }
}

/// Builds the window settings for a phone-shaped viewport.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and performs the initial navigation,
    /// honoring a deep-link path from `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let (store_state, state_warning) = StoreState::load();

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            api: ApiClient::new(config.api.base_url.clone()),
            store: Store::from_persisted(store_state),
            config,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(
                notifications::Notification::warning(key)
                    .with_warning_type(crate::diagnostics::WarningType::Config),
            );
        }
        if let Some(key) = state_warning {
            app.notifications.push(
                notifications::Notification::warning(key)
                    .with_warning_type(crate::diagnostics::WarningType::Config),
            );
        }

        let start = flags
            .start_path
            .filter(|path| path.starts_with('/'))
            .unwrap_or_else(|| START_PATH.to_string());
        app.history = History::new(Location::new(start));
        let task = update::apply_navigation(&mut app, None);

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        let key_sub = subscription::create_key_subscription(self.resolved.overlay.is_some());

        Subscription::batch([tick_sub, key_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle_message(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            resolved: &self.resolved,
            base_route: &self.base_route,
            overlay_route: self.overlay_route.as_ref(),
            store: &self.store,
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
            nearby: self.nearby.as_deref(),
            feed: self.feed.as_deref(),
            current_location: self.current_location.as_ref(),
            current_video: self.current_video.as_ref(),
            login: &self.login,
            register: &self.register,
            forgot_password: &self.forgot_password,
            otp_verify: &self.otp_verify,
            upload: &self.upload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Page;
    use crate::test_support::with_temp_dirs;
    use std::fs;

    fn base_page(app: &App) -> Option<Page> {
        app.base_route.page()
    }

    fn overlay_page(app: &App) -> Option<Page> {
        app.overlay_route.as_ref().and_then(RouteMatch::page)
    }

    #[test]
    fn new_starts_on_home_in_base_only_state() {
        with_temp_dirs(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.resolved.base.path, "/home");
            assert_eq!(base_page(&app), Some(Page::Home));
            assert!(app.resolved.overlay.is_none());
        });
    }

    #[test]
    fn deep_link_to_login_renders_base_only_login() {
        with_temp_dirs(|_| {
            let (app, _task) = App::new(Flags {
                start_path: Some("/login".into()),
                ..Flags::default()
            });

            assert_eq!(base_page(&app), Some(Page::Login));
            assert!(app.resolved.overlay.is_none(), "deep link must not overlay");
        });
    }

    #[test]
    fn modal_login_keeps_home_rendered_underneath() {
        with_temp_dirs(|_| {
            let (mut app, _task) = App::new(Flags::default());

            let _ = app.update(Message::Navigate(NavigationRequest::modal("/login")));

            assert_eq!(base_page(&app), Some(Page::Home));
            assert_eq!(overlay_page(&app), Some(Page::Login));
            assert_eq!(app.resolved.base.path, "/home");
            assert_eq!(
                app.resolved.overlay.as_ref().map(|l| l.path.as_str()),
                Some("/login")
            );
        });
    }

    #[test]
    fn back_from_modal_restores_base_only_home() {
        with_temp_dirs(|_| {
            let (mut app, _task) = App::new(Flags::default());
            let _ = app.update(Message::Navigate(NavigationRequest::modal("/login")));

            let _ = app.update(Message::NavigateBack);

            assert_eq!(base_page(&app), Some(Page::Home));
            assert!(app.resolved.overlay.is_none());
            assert_eq!(app.resolved.base.path, "/home");
        });
    }

    #[test]
    fn unregistered_path_renders_explicit_not_found() {
        with_temp_dirs(|_| {
            let (mut app, _task) = App::new(Flags::default());

            let _ = app.update(Message::Navigate(NavigationRequest::page("/does-not-exist")));

            assert_eq!(app.base_route, RouteMatch::NotFound);
            assert!(app.resolved.overlay.is_none());
        });
    }

    #[test]
    fn modal_to_non_allow_listed_path_fails_loudly() {
        with_temp_dirs(|_| {
            let (mut app, _task) = App::new(Flags::default());

            let _ = app.update(Message::Navigate(NavigationRequest::modal("/wallet")));

            // The overlay layer is refused; the base keeps rendering.
            assert!(app.resolved.overlay.is_none());
            assert!(app.overlay_route.is_none());
            assert!(
                app.notifications.has_notifications(),
                "an error toast should be shown"
            );
        });
    }

    #[test]
    fn tab_navigation_switches_base_page() {
        with_temp_dirs(|_| {
            let (mut app, _task) = App::new(Flags::default());

            let _ = app.update(Message::Navbar(crate::ui::navbar::Message::TabSelected(
                crate::ui::navbar::Tab::Explore,
            )));

            assert_eq!(base_page(&app), Some(Page::Explore));
        });
    }

    #[test]
    fn parametrized_navigation_reaches_detail_page() {
        with_temp_dirs(|_| {
            let (mut app, _task) = App::new(Flags::default());

            let _ = app.update(Message::Navigate(NavigationRequest::page(
                "/location/harbor-market",
            )));

            assert_eq!(base_page(&app), Some(Page::LocationDetail));
            match &app.base_route {
                RouteMatch::Matched { params, .. } => {
                    assert_eq!(params.get("id"), Some("harbor-market"));
                }
                RouteMatch::NotFound => panic!("expected match"),
            }
        });
    }

    #[test]
    fn query_travels_with_the_navigation() {
        with_temp_dirs(|_| {
            let (mut app, _task) = App::new(Flags::default());

            let _ = app.update(Message::Navigate(
                NavigationRequest::page("/explore").with_query("near=harbor"),
            ));

            assert_eq!(base_page(&app), Some(Page::Explore));
            assert_eq!(app.resolved.base.query.as_deref(), Some("near=harbor"));
        });
    }

    #[test]
    fn reselecting_the_current_entry_does_not_grow_history() {
        with_temp_dirs(|_| {
            let (mut app, _task) = App::new(Flags::default());
            let initial_len = app.history.len();

            let _ = app.update(Message::Navigate(NavigationRequest::page("/home")));

            assert_eq!(app.history.len(), initial_len);
        });
    }

    #[test]
    fn login_sequence_hands_off_to_otp_and_establishes_session() {
        with_temp_dirs(|_| {
            let (mut app, _task) = App::new(Flags::default());
            let _ = app.update(Message::Navigate(NavigationRequest::modal("/login")));

            // Simulate the API responses instead of running the futures.
            let _ = app.update(Message::LoginSubmitted(Ok(crate::api::mock::otp_challenge())));
            assert_eq!(overlay_page(&app), Some(Page::OtpVerify));
            assert_eq!(
                base_page(&app),
                Some(Page::Home),
                "OTP step stays a modal over home"
            );

            let _ = app.update(Message::OtpSubmitted(Ok(crate::api::mock::session())));
            assert!(app.store.is_signed_in());
            assert!(app.resolved.overlay.is_none(), "overlay dismissed");
        });
    }

    #[test]
    fn toggle_favourite_round_trips_through_store() {
        with_temp_dirs(|_| {
            let (mut app, _task) = App::new(Flags::default());

            let _ = app.update(Message::ToggleFavourite("cedar-park".into()));
            assert!(app.store.is_favourite("cedar-park"));

            let _ = app.update(Message::ToggleFavourite("cedar-park".into()));
            assert!(!app.store.is_favourite("cedar-park"));
        });
    }

    #[test]
    fn language_selected_updates_config_file() {
        with_temp_dirs(|config_root| {
            let (mut app, _task) = App::new(Flags::default());
            let target_locale: unic_langid::LanguageIdentifier = app
                .i18n
                .available_locales
                .iter()
                .find(|locale| locale.to_string() == "fr")
                .cloned()
                .unwrap_or_else(|| app.i18n.current_locale().clone());

            let _ = app.update(Message::LanguageSelected(target_locale.clone()));

            let config_path = config_root.join("settings.toml");
            assert!(config_path.exists());
            let contents = fs::read_to_string(config_path).expect("config should be readable");
            assert!(contents.contains(&target_locale.to_string()));
        });
    }

    #[test]
    fn navigation_leaves_a_diagnostics_trail() {
        with_temp_dirs(|_| {
            let (mut app, _task) = App::new(Flags::default());
            let _ = app.update(Message::Navigate(NavigationRequest::page("/explore")));

            let events = app.diagnostics.snapshot();
            assert!(events.iter().any(|event| matches!(
                event,
                crate::diagnostics::DiagnosticEvent::Navigation { to, .. } if to == "/explore"
            )));
        });
    }
}
