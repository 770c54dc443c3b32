// SPDX-License-Identifier: MPL-2.0
//! Explicit not-found page for unmatched paths.

use crate::app::{Message, NavigationRequest};
use crate::i18n::fluent::I18n;
use iced::widget::{button, Column, Text};
use iced::{alignment::Horizontal, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The path that failed to match.
    pub path: &'a str,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .push(Text::new(ctx.i18n.tr("page-not-found-title")).size(26))
        .push(Text::new(
            ctx.i18n
                .tr_with_args("page-not-found-body", &[("path", ctx.path)]),
        ))
        .push(
            button(Text::new(ctx.i18n.tr("go-home-button")))
                .on_press(Message::Navigate(NavigationRequest::page("/home"))),
        )
        .spacing(16)
        .padding(32)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_names_the_missing_path() {
        let i18n = I18n::default();
        let _ = view(ViewContext {
            i18n: &i18n,
            path: "/does-not-exist",
        });
    }
}
