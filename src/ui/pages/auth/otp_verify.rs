// SPDX-License-Identifier: MPL-2.0
//! OTP verification form, the second step of the login sequence.

use crate::api::dto::{OtpChallenge, OtpVerifyRequest};
use crate::i18n::fluent::I18n;
use iced::widget::{button, text_input, Column, Text};
use iced::{Element, Length};

pub const CODE_INVALID_KEY: &str = "otp-code-invalid";
pub const NO_CHALLENGE_KEY: &str = "otp-no-challenge";

#[derive(Debug, Default)]
pub struct State {
    code: String,
    /// The pending challenge from a successful login submit. Absent when
    /// the page is reached by deep link.
    challenge: Option<OtpChallenge>,
    error_key: Option<&'static str>,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    CodeChanged(String),
    Submit,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit(OtpVerifyRequest),
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::CodeChanged(value) => {
                // Codes are numeric; drop anything else as it is typed.
                self.code = value.chars().filter(char::is_ascii_digit).take(6).collect();
                self.error_key = None;
                Event::None
            }
            Message::Submit => {
                let Some(challenge) = &self.challenge else {
                    self.error_key = Some(NO_CHALLENGE_KEY);
                    return Event::None;
                };
                if self.code.len() != 6 {
                    self.error_key = Some(CODE_INVALID_KEY);
                    return Event::None;
                }
                self.submitting = true;
                Event::Submit(OtpVerifyRequest {
                    challenge_id: challenge.challenge_id.clone(),
                    code: self.code.clone(),
                })
            }
        }
    }

    /// Arms the form with the challenge issued by the login step.
    pub fn set_challenge(&mut self, challenge: OtpChallenge) {
        self.challenge = Some(challenge);
        self.code.clear();
        self.error_key = None;
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    pub fn set_error(&mut self, key: &'static str) {
        self.error_key = Some(key);
    }

    /// Clears the pending challenge once a session is established.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn error_key(&self) -> Option<&'static str> {
        self.error_key
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let explainer = match &self.challenge {
            Some(challenge) => {
                i18n.tr_with_args("otp-explainer", &[("target", challenge.sent_to.as_str())])
            }
            None => i18n.tr("otp-no-challenge"),
        };

        let code_input = text_input(&i18n.tr("otp-code-placeholder"), &self.code)
            .on_input(Message::CodeChanged)
            .padding(10);

        let mut submit = button(Text::new(i18n.tr("otp-submit-button"))).width(Length::Fill);
        if !self.submitting && self.challenge.is_some() {
            submit = submit.on_press(Message::Submit);
        }

        let mut form = Column::new()
            .push(Text::new(i18n.tr("page-otp-title")).size(22))
            .push(Text::new(explainer).size(13))
            .push(code_input)
            .push(submit)
            .spacing(12);

        if let Some(key) = self.error_key {
            form = form.push(Text::new(i18n.tr(key)).size(13));
        }

        form.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock;

    #[test]
    fn submit_without_challenge_sets_error() {
        let mut state = State::default();
        let _ = state.update(Message::CodeChanged("123456".into()));

        assert!(matches!(state.update(Message::Submit), Event::None));
        assert_eq!(state.error_key(), Some(NO_CHALLENGE_KEY));
    }

    #[test]
    fn code_input_is_filtered_to_six_digits() {
        let mut state = State::default();
        let _ = state.update(Message::CodeChanged("12ab3456789".into()));
        state.set_challenge(mock::otp_challenge());

        // set_challenge cleared the code; type again.
        let _ = state.update(Message::CodeChanged("9876543".into()));
        match state.update(Message::Submit) {
            Event::Submit(request) => assert_eq!(request.code, "987654"),
            other => panic!("expected Submit, got {:?}", other),
        }
    }

    #[test]
    fn short_code_is_rejected() {
        let mut state = State::default();
        state.set_challenge(mock::otp_challenge());
        let _ = state.update(Message::CodeChanged("123".into()));

        assert!(matches!(state.update(Message::Submit), Event::None));
        assert_eq!(state.error_key(), Some(CODE_INVALID_KEY));
    }

    #[test]
    fn submit_carries_the_challenge_id() {
        let mut state = State::default();
        state.set_challenge(mock::otp_challenge());
        let _ = state.update(Message::CodeChanged("000000".into()));

        match state.update(Message::Submit) {
            Event::Submit(request) => {
                assert_eq!(request.challenge_id, mock::otp_challenge().challenge_id);
            }
            other => panic!("expected Submit, got {:?}", other),
        }
    }
}
