// SPDX-License-Identifier: MPL-2.0
//! Location detail page (`/location/:id`).

use crate::api::dto::LocationDetail;
use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::store::Store;
use crate::ui::card_style;
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a Store,
    /// Detail for the currently requested id, once loaded.
    pub detail: Option<&'a LocationDetail>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(detail) = ctx.detail else {
        return Column::new()
            .push(Text::new(ctx.i18n.tr("loading-label")))
            .padding(16)
            .into();
    };

    let favourite_glyph = if ctx.store.is_favourite(&detail.summary.id) {
        "\u{2605}"
    } else {
        "\u{2606}"
    };

    let header = Row::new()
        .push(Text::new(&detail.summary.name).size(26).width(Length::Fill))
        .push(
            button(Text::new(favourite_glyph).size(20))
                .style(button::text)
                .on_press(Message::ToggleFavourite(detail.summary.id.clone())),
        )
        .align_y(alignment::Vertical::Center);

    let mut content = Column::new()
        .push(header)
        .push(
            Text::new(format!(
                "\u{2605} {:.1} \u{00B7} {}",
                detail.summary.rating, detail.address
            ))
            .size(13),
        )
        .push(Text::new(&detail.description).size(14))
        .spacing(10)
        .padding(16);

    content = content.push(Text::new(ctx.i18n.tr("location-reviews-heading")).size(18));
    for review in &detail.reviews {
        let card = Column::new()
            .push(
                Row::new()
                    .push(Text::new(&review.author).size(13).width(Length::Fill))
                    .push(Text::new(format!("\u{2605} {:.1}", review.rating)).size(12)),
            )
            .push(Text::new(&review.body).size(14))
            .push(Text::new(review.posted_at.format("%b %e, %Y").to_string()).size(11))
            .spacing(4);

        content = content.push(
            container(card)
                .padding(10)
                .width(Length::Fill)
                .style(card_style),
        );
    }

    scrollable(content.width(Length::Fill)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock;

    #[test]
    fn view_renders_detail_and_loading_states() {
        let i18n = I18n::default();
        let store = Store::default();
        let detail = mock::location_detail("harbor-market").expect("fixture");

        let _ = view(ViewContext {
            i18n: &i18n,
            store: &store,
            detail: Some(&detail),
        });
        let _ = view(ViewContext {
            i18n: &i18n,
            store: &store,
            detail: None,
        });
    }
}
