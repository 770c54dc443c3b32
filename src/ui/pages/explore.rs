// SPDX-License-Identifier: MPL-2.0
//! Explore page: nearby locations with favourite toggles.

use crate::api::dto::LocationSummary;
use crate::app::{Message, NavigationRequest};
use crate::i18n::fluent::I18n;
use crate::store::Store;
use crate::ui::card_style;
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a Store,
    pub nearby: Option<&'a [LocationSummary]>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .push(
            Text::new(ctx.i18n.tr("page-explore-title"))
                .size(26)
                .width(Length::Fill),
        )
        .push(
            button(Text::new(ctx.i18n.tr("open-map-button")).size(13))
                .on_press(Message::Navigate(NavigationRequest::page("/map"))),
        )
        .align_y(alignment::Vertical::Center);

    let mut content = Column::new().push(header).spacing(12).padding(16);

    match ctx.nearby {
        Some(nearby) if nearby.is_empty() => {
            content = content.push(Text::new(ctx.i18n.tr("explore-empty-label")));
        }
        Some(nearby) => {
            for location in nearby {
                content = content.push(location_card(&ctx, location));
            }
        }
        None => {
            content = content.push(Text::new(ctx.i18n.tr("loading-label")));
        }
    }

    scrollable(content.width(Length::Fill)).into()
}

fn location_card<'a>(ctx: &ViewContext<'a>, location: &'a LocationSummary) -> Element<'a, Message> {
    let favourite_glyph = if ctx.store.is_favourite(&location.id) {
        "\u{2605}"
    } else {
        "\u{2606}"
    };
    let favourite_button = button(Text::new(favourite_glyph))
        .style(button::text)
        .on_press(Message::ToggleFavourite(location.id.clone()));

    let open_button = button(Text::new(ctx.i18n.tr("open-location-button")).size(13)).on_press(
        Message::Navigate(NavigationRequest::page(format!("/location/{}", location.id))),
    );

    let details = Column::new()
        .push(Text::new(&location.name).size(16))
        .push(
            Text::new(format!(
                "{} \u{00B7} \u{2605} {:.1}",
                ctx.i18n.tr(&format!("category-{}", location.category)),
                location.rating
            ))
            .size(13),
        )
        .spacing(2)
        .width(Length::Fill);

    let row = Row::new()
        .push(details)
        .push(favourite_button)
        .push(open_button)
        .spacing(8)
        .align_y(alignment::Vertical::Center);

    container(row)
        .padding(12)
        .width(Length::Fill)
        .style(card_style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock;

    #[test]
    fn view_renders_location_list() {
        let i18n = I18n::default();
        let store = Store::default();
        let nearby = mock::nearby_locations();

        let _ = view(ViewContext {
            i18n: &i18n,
            store: &store,
            nearby: Some(&nearby),
        });
    }

    #[test]
    fn view_renders_loading_state() {
        let i18n = I18n::default();
        let store = Store::default();

        let _ = view(ViewContext {
            i18n: &i18n,
            store: &store,
            nearby: None,
        });
    }
}
