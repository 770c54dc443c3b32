// SPDX-License-Identifier: MPL-2.0
//! Registration form.

use crate::api::dto::RegisterRequest;
use crate::i18n::fluent::I18n;
use iced::widget::{button, text_input, Column, Text};
use iced::{Element, Length};

pub const FIELDS_REQUIRED_KEY: &str = "auth-fields-required";
pub const EMAIL_INVALID_KEY: &str = "auth-email-invalid";

#[derive(Debug, Default)]
pub struct State {
    display_name: String,
    email: String,
    password: String,
    error_key: Option<&'static str>,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    DisplayNameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    OpenLogin,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit(RegisterRequest),
    OpenLogin,
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::DisplayNameChanged(value) => {
                self.display_name = value;
                self.error_key = None;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                self.error_key = None;
                Event::None
            }
            Message::PasswordChanged(value) => {
                self.password = value;
                self.error_key = None;
                Event::None
            }
            Message::Submit => {
                if self.display_name.trim().is_empty()
                    || self.email.trim().is_empty()
                    || self.password.is_empty()
                {
                    self.error_key = Some(FIELDS_REQUIRED_KEY);
                    return Event::None;
                }
                if !self.email.contains('@') {
                    self.error_key = Some(EMAIL_INVALID_KEY);
                    return Event::None;
                }
                self.submitting = true;
                Event::Submit(RegisterRequest {
                    display_name: self.display_name.trim().to_string(),
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                })
            }
            Message::OpenLogin => Event::OpenLogin,
        }
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
        self.password.clear();
    }

    pub fn set_error(&mut self, key: &'static str) {
        self.error_key = Some(key);
    }

    #[must_use]
    pub fn error_key(&self) -> Option<&'static str> {
        self.error_key
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let name_input = text_input(&i18n.tr("auth-display-name-placeholder"), &self.display_name)
            .on_input(Message::DisplayNameChanged)
            .padding(10);

        let email_input = text_input(&i18n.tr("auth-email-placeholder"), &self.email)
            .on_input(Message::EmailChanged)
            .padding(10);

        let password_input = text_input(&i18n.tr("auth-password-placeholder"), &self.password)
            .on_input(Message::PasswordChanged)
            .secure(true)
            .padding(10);

        let mut submit = button(Text::new(i18n.tr("register-button"))).width(Length::Fill);
        if !self.submitting {
            submit = submit.on_press(Message::Submit);
        }

        let mut form = Column::new()
            .push(Text::new(i18n.tr("page-register-title")).size(22))
            .push(name_input)
            .push(email_input)
            .push(password_input)
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
