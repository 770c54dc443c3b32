// SPDX-License-Identifier: MPL-2.0
//! Video page (`/video/:id`).
//!
//! Playback is delegated to the platform player; this page shows the clip
//! card and its stream address.

use crate::api::dto::VideoItem;
use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::ui::card_style;
use iced::widget::{container, Column, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub video: Option<&'a VideoItem>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(video) = ctx.video else {
        return Column::new()
            .push(Text::new(ctx.i18n.tr("loading-label")))
            .padding(16)
            .into();
    };

    let minutes = video.duration_secs / 60;
    let seconds = video.duration_secs % 60;
    let duration = format!("{minutes}:{seconds:02}");
    let byline = ctx.i18n.tr_with_args(
        "video-byline",
        &[
            ("author", video.author.as_str()),
            ("duration", duration.as_str()),
        ],
    );

    let card = Column::new()
        .push(Text::new(&video.title).size(22))
        .push(Text::new(byline).size(13))
        .push(Text::new(&video.stream_url).size(12))
        .spacing(8);

    Column::new()
        .push(
            container(card)
                .padding(16)
                .width(Length::Fill)
                .style(card_style),
        )
        .padding(16)
        .into()
}
