// SPDX-License-Identifier: MPL-2.0
//! Wallet page: point balance and recent transactions.

use crate::app::{Message, NavigationRequest};
use crate::i18n::fluent::I18n;
use crate::store::Store;
use crate::ui::card_style;
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a Store,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .push(Text::new(ctx.i18n.tr("page-wallet-title")).size(26))
        .spacing(12)
        .padding(16);

    if !ctx.store.is_signed_in() {
        content = content
            .push(Text::new(ctx.i18n.tr("wallet-signed-out-label")))
            .push(
                button(Text::new(ctx.i18n.tr("sign-in-button")))
                    .on_press(Message::Navigate(NavigationRequest::modal("/login"))),
            );
        return content.into();
    }

    match ctx.store.wallet() {
        Some(wallet) => {
            let points = wallet.balance_points.to_string();
            let balance_label = ctx
                .i18n
                .tr_with_args("wallet-balance-label", &[("points", points.as_str())]);
            content = content.push(
                container(
                    Column::new()
                        .push(Text::new(balance_label).size(20))
                        .push(
                            Text::new(wallet.updated_at.format("%b %e, %H:%M").to_string())
                                .size(12),
                        )
                        .spacing(4),
                )
                .padding(16)
                .width(Length::Fill)
                .style(card_style),
            );

            content = content.push(Text::new(ctx.i18n.tr("wallet-activity-heading")).size(18));
            for transaction in &wallet.transactions {
                let sign = if transaction.amount_points >= 0 { "+" } else { "" };
                let row = Row::new()
                    .push(
                        Column::new()
                            .push(Text::new(&transaction.label).size(14))
                            .push(
                                Text::new(
                                    transaction.posted_at.format("%b %e, %H:%M").to_string(),
                                )
                                .size(12),
                            )
                            .spacing(2)
                            .width(Length::Fill),
                    )
                    .push(Text::new(format!("{sign}{}", transaction.amount_points)).size(14));

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
