// SPDX-License-Identifier: MPL-2.0
//! Bottom tab bar for app-level navigation.
//!
//! Five tab roots mirror the platform's main surfaces. Tabs always issue a
//! plain (non-modal) navigation to their root path.

use crate::i18n::fluent::I18n;
use crate::navigation::Page;
use iced::widget::{button, container, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};

/// The five tab roots, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Explore,
    Social,
    Wallet,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Explore, Tab::Social, Tab::Wallet, Tab::Profile];

    /// The route path this tab navigates to.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Tab::Home => "/home",
            Tab::Explore => "/explore",
            Tab::Social => "/social",
            Tab::Wallet => "/wallet",
            Tab::Profile => "/profile",
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Tab::Home => "tab-home",
            Tab::Explore => "tab-explore",
            Tab::Social => "tab-social",
            Tab::Wallet => "tab-wallet",
            Tab::Profile => "tab-profile",
        }
    }

    /// The tab a base page belongs to, used for highlighting. Detail pages
    /// highlight the tab they are reached from.
    #[must_use]
    pub fn for_page(page: Page) -> Option<Tab> {
        match page {
            Page::Home => Some(Tab::Home),
            Page::Explore | Page::Map | Page::LocationDetail => Some(Tab::Explore),
            Page::Social | Page::SocialUpload | Page::Video => Some(Tab::Social),
            Page::Wallet => Some(Tab::Wallet),
            Page::Profile | Page::Favourites => Some(Tab::Profile),
            Page::Login | Page::Register | Page::ForgotPassword | Page::OtpVerify => None,
        }
    }
}

/// Contextual data needed to render the tab bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Option<Tab>,
}

/// Messages emitted by the tab bar.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Navigate to the given root path.
    Navigate(&'static str),
}

/// Process a tab bar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::TabSelected(tab) => Event::Navigate(tab.path()),
    }
}

/// Render the tab bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(4).width(Length::Fill);

    for tab in Tab::ALL {
        let label = Text::new(ctx.i18n.tr(tab.i18n_key()))
            .size(13)
            .align_x(alignment::Horizontal::Center);

        let mut tab_button = button(label)
            .width(Length::Fill)
            .padding(10)
            .on_press(Message::TabSelected(tab));

        if ctx.active == Some(tab) {
            tab_button = tab_button.style(button::primary);
        } else {
            tab_button = tab_button.style(button::text);
        }

        row = row.push(tab_button);
    }

    container(row)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border::default(),
            ..container::Style::default()
        })
        .into()
}
