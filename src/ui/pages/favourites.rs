// SPDX-License-Identifier: MPL-2.0
//! Favourites page: the saved subset of the nearby location list.

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
    let mut content = Column::new()
        .push(Text::new(ctx.i18n.tr("page-favourites-title")).size(26))
        .spacing(12)
        .padding(16);

    match ctx.nearby {
        Some(nearby) => {
            let saved: Vec<&LocationSummary> = nearby
                .iter()
                .filter(|location| ctx.store.is_favourite(&location.id))
                .collect();

            if saved.is_empty() {
                content = content
                    .push(Text::new(ctx.i18n.tr("favourites-empty-label")))
                    .push(
                        button(Text::new(ctx.i18n.tr("home-see-all-button")))
                            .style(button::text)
                            .on_press(Message::Navigate(NavigationRequest::page("/explore"))),
                    );
            }

            for location in saved {
                let row = Row::new()
                    .push(Text::new(&location.name).size(15).width(Length::Fill))
                    .push(
                        button(Text::new("\u{2605}"))
                            .style(button::text)
                            .on_press(Message::ToggleFavourite(location.id.clone())),
                    )
                    .push(
                        button(Text::new(ctx.i18n.tr("open-location-button")).size(13)).on_press(
                            Message::Navigate(NavigationRequest::page(format!(
                                "/location/{}",
                                location.id
                            ))),
                        ),
                    )
                    .spacing(8)
                    .align_y(alignment::Vertical::Center);

                content = content.push(
                    container(row)
                        .padding(10)
                        .width(Length::Fill)
                        .style(card_style),
                );
            }
        }
        None => {
            content = content.push(Text::new(ctx.i18n.tr("loading-label")));
        }
    }

    scrollable(content.width(Length::Fill)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock;
    use crate::store::Action;

    #[test]
    fn view_filters_to_saved_locations() {
        let i18n = I18n::default();
        let mut store = Store::default();
        store.dispatch(Action::FavouriteAdded("cedar-park".into()));
        let nearby = mock::nearby_locations();

        let _ = view(ViewContext {
            i18n: &i18n,
            store: &store,
            nearby: Some(&nearby),
        });
    }

    #[test]
    fn view_renders_empty_state() {
        let i18n = I18n::default();
        let store = Store::default();
        let nearby = mock::nearby_locations();

        let _ = view(ViewContext {
            i18n: &i18n,
            store: &store,
            nearby: Some(&nearby),
        });
    }
}
