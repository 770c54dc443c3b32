// SPDX-License-Identifier: MPL-2.0
//! Forgot-password form.

use crate::api::dto::ForgotPasswordRequest;
use crate::i18n::fluent::I18n;
use iced::widget::{button, text_input, Column, Text};
use iced::{Element, Length};

pub const EMAIL_REQUIRED_KEY: &str = "auth-email-required";

#[derive(Debug, Default)]
pub struct State {
    email: String,
    error_key: Option<&'static str>,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    Submit,
    OpenLogin,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit(ForgotPasswordRequest),
    OpenLogin,
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EmailChanged(value) => {
                self.email = value;
                self.error_key = None;
                Event::None
            }
            Message::Submit => {
                if self.email.trim().is_empty() || !self.email.contains('@') {
                    self.error_key = Some(EMAIL_REQUIRED_KEY);
                    return Event::None;
                }
                self.submitting = true;
                Event::Submit(ForgotPasswordRequest {
                    email: self.email.trim().to_string(),
                })
            }
            Message::OpenLogin => Event::OpenLogin,
        }
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    #[must_use]
    pub fn error_key(&self) -> Option<&'static str> {
        self.error_key
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let email_input = text_input(&i18n.tr("auth-email-placeholder"), &self.email)
            .on_input(Message::EmailChanged)
            .padding(10);

        let mut submit = button(Text::new(i18n.tr("forgot-submit-button"))).width(Length::Fill);
        if !self.submitting {
            submit = submit.on_press(Message::Submit);
        }

        let mut form = Column::new()
            .push(Text::new(i18n.tr("page-forgot-title")).size(22))
            .push(Text::new(i18n.tr("forgot-explainer")).size(13))
            .push(email_input)
            .push(submit)
            .push(
                button(Text::new(i18n.tr("auth-open-login-link")).size(13))
                    .style(button::text)
                    .on_press(Message::OpenLogin),
            )
            .spacing(12);

        if let Some(key) = self.error_key {
            form = form.push(Text::new(i18n.tr(key)).size(13));
        }

        form.into()
    }
}
