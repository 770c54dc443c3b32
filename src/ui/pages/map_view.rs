// SPDX-License-Identifier: MPL-2.0
//! Map page.
//!
//! Renders the nearby set as a positioned coordinate list; tile rendering
//! stays on the platform side.

use crate::api::dto::LocationSummary;
use crate::app::{Message, NavigationRequest};
use crate::i18n::fluent::I18n;
use crate::ui::card_style;
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub nearby: Option<&'a [LocationSummary]>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .push(Text::new(ctx.i18n.tr("page-map-title")).size(26))
        .spacing(12)
        .padding(16);

    match ctx.nearby {
        Some(nearby) => {
            for location in nearby {
                let row = Row::new()
                    .push(
                        Column::new()
                            .push(Text::new(&location.name).size(15))
                            .push(
                                Text::new(format!(
                                    "{:.4}, {:.4}",
                                    location.latitude, location.longitude
                                ))
                                .size(12),
                            )
                            .spacing(2)
                            .width(Length::Fill),
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

    #[test]
    fn view_renders_coordinates() {
        let i18n = I18n::default();
        let nearby = mock::nearby_locations();
        let _ = view(ViewContext {
            i18n: &i18n,
            nearby: Some(&nearby),
        });
    }
}
