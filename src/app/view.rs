// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The base route tree always renders, with the tab bar underneath. When
//! an overlay location is present, a second route tree renders as a modal
//! card above a scrim; pressing the scrim dismisses the modal through
//! ordinary back navigation.

use super::Message;
use crate::api::dto::{FeedPost, LocationDetail, LocationSummary, VideoItem};
use crate::i18n::fluent::I18n;
use crate::navigation::{Location, Page, ResolvedNavigation, RouteMatch};
use crate::store::Store;
use crate::ui::navbar::{self, Tab, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::pages::auth::{forgot_password, login, otp_verify, register};
use crate::ui::pages::{
    explore, favourites, home, location_detail, map_view, not_found, profile, social,
    social_upload, video, wallet,
};
use crate::ui::theming::ThemeMode;
use crate::ui::card_style;
use iced::widget::{center, container, mouse_area, opaque, stack, Column, Container};
use iced::{Color, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub resolved: &'a ResolvedNavigation,
    pub base_route: &'a RouteMatch,
    pub overlay_route: Option<&'a RouteMatch>,
    pub store: &'a Store,
    pub theme_mode: ThemeMode,
    pub notifications: &'a Manager,
    pub nearby: Option<&'a [LocationSummary]>,
    pub feed: Option<&'a [FeedPost]>,
    pub current_location: Option<&'a LocationDetail>,
    pub current_video: Option<&'a VideoItem>,
    pub login: &'a login::State,
    pub register: &'a register::State,
    pub forgot_password: &'a forgot_password::State,
    pub otp_verify: &'a otp_verify::State,
    pub upload: &'a social_upload::State,
}

/// Renders the full layer stack: base tree, optional modal overlay, toasts.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let base_page = page_view(&ctx, ctx.base_route, &ctx.resolved.base);

    let active_tab = ctx.base_route.page().and_then(Tab::for_page);
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: active_tab,
    })
    .map(Message::Navbar);

    let base_tree: Element<'a, Message> = Column::new()
        .push(
            Container::new(base_page)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(navbar_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let mut layers = stack([base_tree]);

    if let (Some(overlay_route), Some(overlay_location)) =
        (ctx.overlay_route, ctx.resolved.overlay.as_ref())
    {
        let overlay_page = page_view(&ctx, overlay_route, overlay_location);
        layers = layers.push(modal_layer(overlay_page));
    }

    if ctx.notifications.has_notifications() {
        layers = layers.push(Toast::overlay(ctx.notifications, ctx.i18n).map(Message::Notification));
    }

    layers.into()
}

/// Renders one route tree entry. Both the base and the overlay tree go
/// through here, so `NotFound` always has an explicit rendering.
fn page_view<'a>(
    ctx: &ViewContext<'a>,
    route: &'a RouteMatch,
    location: &'a Location,
) -> Element<'a, Message> {
    let RouteMatch::Matched { page, .. } = route else {
        return not_found::view(not_found::ViewContext {
            i18n: ctx.i18n,
            path: &location.path,
        });
    };

    match page {
        Page::Home => home::view(home::ViewContext {
            i18n: ctx.i18n,
            nearby: ctx.nearby,
            feed: ctx.feed,
        }),
        Page::Explore => explore::view(explore::ViewContext {
            i18n: ctx.i18n,
            store: ctx.store,
            nearby: ctx.nearby,
        }),
        Page::Social => social::view(social::ViewContext {
            i18n: ctx.i18n,
            feed: ctx.feed,
        }),
        Page::SocialUpload => ctx.upload.view(ctx.i18n).map(Message::Upload),
        Page::Wallet => wallet::view(wallet::ViewContext {
            i18n: ctx.i18n,
            store: ctx.store,
        }),
        Page::Profile => profile::view(profile::ViewContext {
            i18n: ctx.i18n,
            store: ctx.store,
            theme_mode: ctx.theme_mode,
        }),
        Page::Favourites => favourites::view(favourites::ViewContext {
            i18n: ctx.i18n,
            store: ctx.store,
            nearby: ctx.nearby,
        }),
        Page::Map => map_view::view(map_view::ViewContext {
            i18n: ctx.i18n,
            nearby: ctx.nearby,
        }),
        Page::LocationDetail => location_detail::view(location_detail::ViewContext {
            i18n: ctx.i18n,
            store: ctx.store,
            detail: ctx.current_location,
        }),
        Page::Video => video::view(video::ViewContext {
            i18n: ctx.i18n,
            video: ctx.current_video,
        }),
        Page::Login => ctx.login.view(ctx.i18n).map(Message::Login),
        Page::Register => ctx.register.view(ctx.i18n).map(Message::Register),
        Page::ForgotPassword => ctx
            .forgot_password
            .view(ctx.i18n)
            .map(Message::ForgotPassword),
        Page::OtpVerify => ctx.otp_verify.view(ctx.i18n).map(Message::OtpVerify),
    }
}

/// Wraps overlay content in a centered card above a dimmed, clickable
/// scrim. Clicking the scrim (not the card) dismisses the modal.
fn modal_layer(content: Element<'_, Message>) -> Element<'_, Message> {
    let card = container(content)
        .width(Length::Fixed(340.0))
        .padding(24)
        .style(card_style);

    opaque(
        mouse_area(center(opaque(card)).style(|_theme: &Theme| container::Style {
            background: Some(
                Color {
                    a: 0.6,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        }))
        .on_press(Message::NavigateBack),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::ThemeMode;

    fn base_ctx<'a>(
        i18n: &'a I18n,
        store: &'a Store,
        resolved: &'a ResolvedNavigation,
        base_route: &'a RouteMatch,
        login: &'a login::State,
        register: &'a register::State,
        forgot: &'a forgot_password::State,
        otp: &'a otp_verify::State,
        upload: &'a social_upload::State,
        notifications: &'a Manager,
    ) -> ViewContext<'a> {
        ViewContext {
            i18n,
            resolved,
            base_route,
            overlay_route: None,
            store,
            theme_mode: ThemeMode::System,
            notifications,
            nearby: None,
            feed: None,
            current_location: None,
            current_video: None,
            login,
            register,
            forgot_password: forgot,
            otp_verify: otp,
            upload,
        }
    }

    #[test]
    fn not_found_route_renders_explicit_page() {
        let i18n = I18n::default();
        let store = Store::default();
        let location = Location::new("/does-not-exist");
        let resolved = ResolvedNavigation {
            base: location,
            overlay: None,
        };
        let base_route = RouteMatch::NotFound;
        let login = login::State::default();
        let register = register::State::default();
        let forgot = forgot_password::State::default();
        let otp = otp_verify::State::default();
        let upload = social_upload::State::default();
        let notifications = Manager::new();

        let _ = view(base_ctx(
            &i18n, &store, &resolved, &base_route, &login, &register, &forgot, &otp, &upload,
            &notifications,
        ));
    }
}
