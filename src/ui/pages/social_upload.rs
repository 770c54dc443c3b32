// SPDX-License-Identifier: MPL-2.0
//! Post composer (`/social/upload`): caption plus an optional media
//! attachment picked through the system file dialog.

use crate::api::dto::NewPostRequest;
use crate::i18n::fluent::I18n;
use crate::ui::card_style;
use iced::widget::{button, container, text_input, Column, Row, Text};
use iced::{alignment, Element, Length};
use std::path::PathBuf;

pub const CAPTION_REQUIRED_KEY: &str = "upload-caption-required";

#[derive(Debug, Default)]
pub struct State {
    caption: String,
    selected_file: Option<PathBuf>,
    error_key: Option<&'static str>,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    CaptionChanged(String),
    PickFile,
    ClearFile,
    Submit,
}

/// Events propagated to the application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open the system file dialog.
    PickFile,
    /// Publish the composed post.
    Publish(NewPostRequest),
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::CaptionChanged(value) => {
                self.caption = value;
                self.error_key = None;
                Event::None
            }
            Message::PickFile => Event::PickFile,
            Message::ClearFile => {
                self.selected_file = None;
                Event::None
            }
            Message::Submit => {
                if self.caption.trim().is_empty() {
                    self.error_key = Some(CAPTION_REQUIRED_KEY);
                    return Event::None;
                }
                self.submitting = true;
                Event::Publish(NewPostRequest {
                    body: self.caption.trim().to_string(),
                    location_id: None,
                    media_name: self
                        .selected_file
                        .as_ref()
                        .and_then(|path| path.file_name())
                        .map(|name| name.to_string_lossy().into_owned()),
                })
            }
        }
    }

    pub fn set_selected_file(&mut self, path: Option<PathBuf>) {
        if let Some(path) = path {
            self.selected_file = Some(path);
        }
    }

    /// Called when publishing finished, successfully or not.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Clears the composer after a successful publish.
    pub fn reset(&mut self) {
        *self = Self::default();
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
        let caption_input = text_input(&i18n.tr("upload-caption-placeholder"), &self.caption)
            .on_input(Message::CaptionChanged)
            .padding(10);

        let file_row = match &self.selected_file {
            Some(path) => {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Row::new()
                    .push(Text::new(name).size(13).width(Length::Fill))
                    .push(
                        button(Text::new("\u{2715}").size(12))
                            .style(button::text)
                            .on_press(Message::ClearFile),
                    )
                    .align_y(alignment::Vertical::Center)
            }
            None => Row::new().push(
                button(Text::new(i18n.tr("upload-pick-file-button")).size(13))
                    .style(button::secondary)
                    .on_press(Message::PickFile),
            ),
        };

        let mut submit = button(Text::new(i18n.tr("upload-submit-button")));
        if !self.submitting {
            submit = submit.on_press(Message::Submit);
        }

        let mut form = Column::new()
            .push(Text::new(i18n.tr("page-upload-title")).size(26))
            .push(caption_input)
            .push(file_row)
            .push(submit)
            .spacing(12);

        if let Some(key) = self.error_key {
            form = form.push(Text::new(i18n.tr(key)).size(13));
        }

        Column::new()
            .push(
                container(form)
                    .padding(16)
                    .width(Length::Fill)
                    .style(card_style),
            )
            .padding(16)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_without_caption_sets_error() {
        let mut state = State::default();
        let event = state.update(Message::Submit);

        assert!(matches!(event, Event::None));
        assert_eq!(state.error_key(), Some(CAPTION_REQUIRED_KEY));
    }

    #[test]
    fn typing_clears_the_error() {
        let mut state = State::default();
        let _ = state.update(Message::Submit);
        let _ = state.update(Message::CaptionChanged("hello".into()));
        assert!(state.error_key().is_none());
    }

    #[test]
    fn submit_with_caption_publishes_trimmed_body() {
        let mut state = State::default();
        let _ = state.update(Message::CaptionChanged("  market day  ".into()));
        state.set_selected_file(Some(PathBuf::from("/tmp/pier.jpg")));

        match state.update(Message::Submit) {
            Event::Publish(request) => {
                assert_eq!(request.body, "market day");
                assert_eq!(request.media_name.as_deref(), Some("pier.jpg"));
            }
            other => panic!("expected Publish, got {:?}", other),
        }
        assert!(state.is_submitting());
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = State::default();
        let _ = state.update(Message::CaptionChanged("post".into()));
        state.set_selected_file(Some(PathBuf::from("/tmp/a.png")));
        state.reset();

        assert!(state.error_key().is_none());
        assert!(!state.is_submitting());
        match state.update(Message::Submit) {
            Event::None => {}
            other => panic!("caption should be empty again, got {:?}", other),
        }
    }
}
