// SPDX-License-Identifier: MPL-2.0
//! Login form.

use crate::api::dto::LoginRequest;
use crate::i18n::fluent::I18n;
use iced::widget::{button, text_input, Column, Row, Text};
use iced::{Element, Length};

pub const FIELDS_REQUIRED_KEY: &str = "auth-fields-required";

#[derive(Debug, Default)]
pub struct State {
    identifier: String,
    password: String,
    error_key: Option<&'static str>,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    IdentifierChanged(String),
    PasswordChanged(String),
    Submit,
    OpenRegister,
    OpenForgotPassword,
}

/// Events propagated to the application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit(LoginRequest),
    OpenRegister,
    OpenForgotPassword,
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::IdentifierChanged(value) => {
                self.identifier = value;
                self.error_key = None;
                Event::None
            }
            Message::PasswordChanged(value) => {
                self.password = value;
                self.error_key = None;
                Event::None
            }
            Message::Submit => {
                if self.identifier.trim().is_empty() || self.password.is_empty() {
                    self.error_key = Some(FIELDS_REQUIRED_KEY);
                    return Event::None;
                }
                self.submitting = true;
                Event::Submit(LoginRequest {
                    identifier: self.identifier.trim().to_string(),
                    password: self.password.clone(),
                })
            }
            Message::OpenRegister => Event::OpenRegister,
            Message::OpenForgotPassword => Event::OpenForgotPassword,
        }
    }

    /// Called when the login request finished, successfully or not.
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

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let identifier_input = text_input(&i18n.tr("auth-identifier-placeholder"), &self.identifier)
            .on_input(Message::IdentifierChanged)
            .padding(10);

        let password_input = text_input(&i18n.tr("auth-password-placeholder"), &self.password)
            .on_input(Message::PasswordChanged)
            .secure(true)
            .padding(10);

        let mut submit = button(Text::new(i18n.tr("sign-in-button"))).width(Length::Fill);
        if !self.submitting {
            submit = submit.on_press(Message::Submit);
        }

        let links = Row::new()
            .push(
                button(Text::new(i18n.tr("auth-open-register-link")).size(13))
                    .style(button::text)
                    .on_press(Message::OpenRegister),
            )
            .push(
                button(Text::new(i18n.tr("auth-open-forgot-link")).size(13))
                    .style(button::text)
                    .on_press(Message::OpenForgotPassword),
            )
            .spacing(8);

        let mut form = Column::new()
            .push(Text::new(i18n.tr("page-login-title")).size(22))
            .push(identifier_input)
            .push(password_input)
            .push(submit)
            .push(links)
            .spacing(12);

        if let Some(key) = self.error_key {
            form = form.push(Text::new(i18n.tr(key)).size(13));
        }

        form.into()
    }
}
