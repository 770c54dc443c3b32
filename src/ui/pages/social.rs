// SPDX-License-Identifier: MPL-2.0
//! Social feed page.

use crate::api::dto::FeedPost;
use crate::app::{Message, NavigationRequest};
use crate::i18n::fluent::I18n;
use crate::ui::card_style;
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub feed: Option<&'a [FeedPost]>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .push(
            Text::new(ctx.i18n.tr("page-social-title"))
                .size(26)
                .width(Length::Fill),
        )
        .push(
            button(Text::new(ctx.i18n.tr("social-upload-button")).size(13))
                .on_press(Message::Navigate(NavigationRequest::page("/social/upload"))),
        )
        .align_y(alignment::Vertical::Center);

    let mut content = Column::new().push(header).spacing(12).padding(16);

    match ctx.feed {
        Some(feed) if feed.is_empty() => {
            content = content.push(Text::new(ctx.i18n.tr("social-empty-label")));
        }
        Some(feed) => {
            for post in feed {
                content = content.push(post_card(&ctx, post));
            }
        }
        None => {
            content = content.push(Text::new(ctx.i18n.tr("loading-label")));
        }
    }

    scrollable(content.width(Length::Fill)).into()
}

fn post_card<'a>(ctx: &ViewContext<'a>, post: &'a FeedPost) -> Element<'a, Message> {
    let mut card = Column::new()
        .push(
            Row::new()
                .push(Text::new(&post.author).size(13).width(Length::Fill))
                .push(Text::new(post.posted_at.format("%b %e, %H:%M").to_string()).size(12)),
        )
        .push(Text::new(&post.body).size(14))
        .push(Text::new(format!("\u{2661} {}", post.likes)).size(12))
        .spacing(6);

    if let Some(location_id) = &post.location_id {
        card = card.push(
            button(Text::new(ctx.i18n.tr("social-view-location-button")).size(12))
                .style(button::text)
                .on_press(Message::Navigate(NavigationRequest::page(format!(
                    "/location/{location_id}"
                )))),
        );
    }

    if let Some(video_id) = &post.video_id {
        card = card.push(
            button(Text::new(ctx.i18n.tr("social-watch-video-button")).size(12))
                .style(button::text)
                .on_press(Message::Navigate(NavigationRequest::page(format!(
                    "/video/{video_id}"
                )))),
        );
    }

    container(card)
        .padding(12)
        .width(Length::Fill)
        .style(card_style)
        .into()
}
