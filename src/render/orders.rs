use super::{
    action_button, format_date, format_quantity, humanize, or_na, placeholder_row, stage_badge,
};
use crate::actions::RowAction;
use crate::markup::{el, Element};
use crate::models::Order;

pub const EMPTY_ORDERS: &str = "No orders found. Create your first order to get started.";
pub const EMPTY_RECENT: &str = "No recent orders.";

pub fn orders_table(orders: &[Order]) -> Element {
    if orders.is_empty() {
        return el("tbody").child(placeholder_row(8, EMPTY_ORDERS));
    }
    el("tbody").children(orders.iter().map(order_row))
}

fn order_row(order: &Order) -> Element {
    el("tr")
        .child(
            el("td")
                .class("font-mono")
                .text(or_na(order.order_number.as_deref())),
        )
        .child(el("td").text(or_na(order.customer_name.as_deref())))
        .child(el("td").text(or_na(order.style.as_deref())))
        .child(
            el("td")
                .class("font-mono")
                .text(format_quantity(order.quantity.unwrap_or(0))),
        )
        .child(el("td").child(stage_badge(order.current_stage)))
        .child(el("td").text(format_date(order.due_date)))
        .child(
            el("td").child(
                el("span")
                    .class(format!("badge status-{}", order.status))
                    .text(humanize(order.status)),
            ),
        )
        .child(
            el("td")
                .child(action_button(RowAction::ViewOrder, order.id))
                .child(action_button(RowAction::EditOrder, order.id)),
        )
}

/// Cards for the first `limit` recent orders.
pub fn recent_orders(orders: &[Order], limit: usize) -> Element {
    if orders.is_empty() {
        return el("div").child(el("p").class("empty-state").text(EMPTY_RECENT));
    }
    el("div").children(orders.iter().take(limit).map(recent_order_card))
}

fn recent_order_card(order: &Order) -> Element {
    el("div")
        .class("recent-order-card")
        .child(
            el("div")
                .class("recent-order-header")
                .child(
                    el("span")
                        .class("order-number")
                        .text(or_na(order.order_number.as_deref())),
                )
                .child(stage_badge(order.current_stage)),
        )
        .child(el("p").class("order-style").text(or_na(order.style.as_deref())))
        .child(
            el("p")
                .class("due-date")
                .text(format!("Due: {}", format_date(order.due_date))),
        )
}
