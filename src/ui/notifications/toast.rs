// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use iced::widget::{button, container, text, Column, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};

const TOAST_WIDTH: f32 = 320.0;
const TOAST_SPACING: f32 = 8.0;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = notification.severity().color();

        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let marker = Text::new("\u{25CF}").style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

        let message_widget = Text::new(message_text)
            .size(14)
            .width(Length::Fill)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = button(Text::new("\u{2715}").size(12))
            .on_press(Message::Dismiss(notification.id()))
            .padding(4)
            .style(button::text);

        let content = Row::new()
            .push(marker)
            .push(message_widget)
            .push(dismiss_button)
            .spacing(8)
            .align_y(alignment::Vertical::Center);

        container(content)
            .width(Length::Fixed(TOAST_WIDTH))
            .padding(12)
            .style(move |theme: &Theme| container::Style {
                background: Some(theme.palette().background.into()),
                border: Border {
                    color: accent,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..container::Style::default()
            })
            .into()
    }

    /// Renders the visible toasts as a bottom-right aligned stack.
    pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new().spacing(TOAST_SPACING);
        for notification in manager.visible() {
            column = column.push(Self::view(notification, i18n));
        }

        container(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(16)
            .into()
    }
}
