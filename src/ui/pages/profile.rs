// SPDX-License-Identifier: MPL-2.0
//! Profile page: account info plus language and theme preferences.

use crate::app::{Message, NavigationRequest};
use crate::i18n::fluent::I18n;
use crate::store::Store;
use crate::ui::card_style;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, scrollable, Button, Column, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a Store,
    pub theme_mode: ThemeMode,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .push(Text::new(ctx.i18n.tr("page-profile-title")).size(26))
        .spacing(14)
        .padding(16);

    content = match ctx.store.profile() {
        Some(profile) => {
            let followers = profile.followers.to_string();
            let following = profile.following.to_string();
            let follow_counts = ctx.i18n.tr_with_args(
                "profile-follow-counts",
                &[
                    ("followers", followers.as_str()),
                    ("following", following.as_str()),
                ],
            );
            content.push(
                container(
                    Column::new()
                        .push(Text::new(&profile.display_name).size(18))
                        .push(Text::new(&profile.handle).size(13))
                        .push(Text::new(&profile.bio).size(14))
                        .push(Text::new(follow_counts).size(13))
                        .spacing(4),
                )
                .padding(16)
                .width(Length::Fill)
                .style(card_style),
            )
        }
        None => content
            .push(Text::new(ctx.i18n.tr("profile-signed-out-label")))
            .push(
                button(Text::new(ctx.i18n.tr("sign-in-button")))
                    .on_press(Message::Navigate(NavigationRequest::modal("/login"))),
            ),
    };

    content = content.push(
        button(Text::new(ctx.i18n.tr("profile-favourites-button")))
            .style(button::secondary)
            .on_press(Message::Navigate(NavigationRequest::page("/favourites"))),
    );

    // Language selection, one button per bundled locale.
    content = content.push(Text::new(ctx.i18n.tr("select-language-label")).size(16));
    let mut language_row = Row::new().spacing(8);
    for locale in &ctx.i18n.available_locales {
        let translated_name = ctx.i18n.tr(&format!("language-name-{}", locale));
        let label = if translated_name.starts_with("MISSING:") {
            locale.to_string()
        } else {
            translated_name
        };

        let mut language_button: Button<'a, Message> =
            button(Text::new(label).size(13)).on_press(Message::LanguageSelected(locale.clone()));
        if ctx.i18n.current_locale() == locale {
            language_button = language_button.style(button::primary);
        } else {
            language_button = language_button.style(button::secondary);
        }
        language_row = language_row.push(language_button);
    }
    content = content.push(language_row);

    // Theme mode selection.
    content = content.push(Text::new(ctx.i18n.tr("select-theme-label")).size(16));
    let mut theme_row = Row::new().spacing(8);
    for mode in ThemeMode::ALL {
        let mut theme_button: Button<'a, Message> =
            button(Text::new(ctx.i18n.tr(mode.i18n_key())).size(13))
                .on_press(Message::ThemeModeSelected(mode));
        if ctx.theme_mode == mode {
            theme_button = theme_button.style(button::primary);
        } else {
            theme_button = theme_button.style(button::secondary);
        }
        theme_row = theme_row.push(theme_button);
    }
    content = content.push(theme_row);

    if ctx.store.is_signed_in() {
        content = content.push(
            button(Text::new(ctx.i18n.tr("sign-out-button")))
                .style(button::danger)
                .on_press(Message::SignOut),
        );
    }

    scrollable(content.width(Length::Fill)).into()
}
