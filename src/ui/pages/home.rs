// SPDX-License-Identifier: MPL-2.0
//! Home page: a digest of nearby highlights and recent feed activity.

use crate::api::dto::{FeedPost, LocationSummary};
use crate::app::{Message, NavigationRequest};
use crate::i18n::fluent::I18n;
use crate::ui::card_style;
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub nearby: Option<&'a [LocationSummary]>,
    pub feed: Option<&'a [FeedPost]>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("page-home-title")).size(26);

    let mut content = Column::new().push(title).spacing(16).padding(16);

    // Nearby highlights: the two best-rated places.
    content = content.push(Text::new(ctx.i18n.tr("home-nearby-heading")).size(18));
    match ctx.nearby {
        Some(nearby) => {
            let mut highlights: Vec<&LocationSummary> = nearby.iter().collect();
            highlights.sort_by(|a, b| b.rating.total_cmp(&a.rating));

            for location in highlights.into_iter().take(2) {
                content = content.push(highlight_card(ctx.i18n, location));
            }

            content = content.push(
                button(Text::new(ctx.i18n.tr("home-see-all-button")))
                    .style(button::text)
                    .on_press(Message::Navigate(NavigationRequest::page("/explore"))),
            );
        }
        None => {
            content = content.push(Text::new(ctx.i18n.tr("loading-label")));
        }
    }

    // Recent feed activity.
    content = content.push(Text::new(ctx.i18n.tr("home-feed-heading")).size(18));
    match ctx.feed {
        Some(feed) => {
            for post in feed.iter().take(3) {
                content = content.push(feed_line(post));
            }
            content = content.push(
                button(Text::new(ctx.i18n.tr("home-open-social-button")))
                    .style(button::text)
                    .on_press(Message::Navigate(NavigationRequest::page("/social"))),
            );
        }
        None => {
            content = content.push(Text::new(ctx.i18n.tr("loading-label")));
        }
    }

    scrollable(content.width(Length::Fill)).into()
}

fn highlight_card<'a>(i18n: &'a I18n, location: &'a LocationSummary) -> Element<'a, Message> {
    let open = button(Text::new(i18n.tr("open-location-button")).size(13)).on_press(
        Message::Navigate(NavigationRequest::page(format!("/location/{}", location.id))),
    );

    let row = Row::new()
        .push(
            Column::new()
                .push(Text::new(&location.name).size(16))
                .push(Text::new(format!("\u{2605} {:.1}", location.rating)).size(13))
                .spacing(2)
                .width(Length::Fill),
        )
        .push(open)
        .spacing(8);

    container(row)
        .padding(12)
        .width(Length::Fill)
        .style(card_style)
        .into()
}

fn feed_line(post: &FeedPost) -> Element<'_, Message> {
    let line = Column::new()
        .push(Text::new(&post.author).size(13))
        .push(Text::new(&post.body).size(14))
        .spacing(2);

    container(line)
        .padding(10)
        .width(Length::Fill)
        .style(card_style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock;

    #[test]
    fn view_renders_with_and_without_data() {
        let i18n = I18n::default();
        let nearby = mock::nearby_locations();
        let feed = mock::feed();

        let _ = view(ViewContext {
            i18n: &i18n,
            nearby: Some(&nearby),
            feed: Some(&feed),
        });
        let _ = view(ViewContext {
            i18n: &i18n,
            nearby: None,
            feed: None,
        });
    }
}
