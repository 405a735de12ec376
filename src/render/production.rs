use std::collections::BTreeMap;

use super::{action_button, format_date, or_na, placeholder_row, stage_badge, stage_card};
use crate::actions::RowAction;
use crate::markup::{el, Element};
use crate::models::{Order, ProductionStage};

pub const EMPTY_PRODUCTION: &str = "No active production orders found.";

/// Per-stage counts over orders that are still active.
pub fn stage_counts(orders: &[Order]) -> BTreeMap<ProductionStage, u64> {
    let mut counts: BTreeMap<ProductionStage, u64> =
        ProductionStage::PIPELINE.iter().map(|s| (*s, 0)).collect();
    for order in orders.iter().filter(|o| o.is_active()) {
        if let Some(count) = counts.get_mut(&order.current_stage) {
            *count += 1;
        }
    }
    counts
}

pub fn pipeline(orders: &[Order]) -> Element {
    let counts = stage_counts(orders);
    el("div").children(ProductionStage::PIPELINE.iter().map(|stage| {
        stage_card(
            "production-stage",
            *stage,
            counts.get(stage).copied().unwrap_or(0),
        )
    }))
}

/// Renders `orders` as given; callers pass only active orders.
pub fn orders_table(orders: &[Order]) -> Element {
    if orders.is_empty() {
        return el("tbody").child(placeholder_row(8, EMPTY_PRODUCTION));
    }
    el("tbody").children(orders.iter().map(production_row))
}

fn production_row(order: &Order) -> Element {
    let progress = order.progress.unwrap_or(0).min(100);

    el("tr")
        .child(
            el("td").child(
                el("input")
                    .attr("type", "checkbox")
                    .attr("name", "order-select")
                    .attr("value", order.id.to_string()),
            ),
        )
        .child(
            el("td")
                .class("font-mono")
                .text(or_na(order.order_number.as_deref())),
        )
        .child(el("td").text(or_na(order.style.as_deref())))
        .child(el("td").child(stage_badge(order.current_stage)))
        .child(
            el("td").child(
                el("div")
                    .style("display: flex; align-items: center; gap: 8px;")
                    .child(
                        el("div").class("progress-bar").child(
                            el("div")
                                .class("progress-fill")
                                .style(format!("width: {}%", progress)),
                        ),
                    )
                    .child(
                        el("span")
                            .style("font-size: 12px; color: var(--muted-foreground);")
                            .text(format!("{}%", progress)),
                    ),
            ),
        )
        .child(el("td").text(order.assigned_team.as_deref().unwrap_or("Unassigned")))
        .child(el("td").text(format_date(order.due_date)))
        .child(
            el("td")
                .child(action_button(RowAction::AdvanceStage, order.id))
                .child(action_button(RowAction::EditProductionOrder, order.id)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    fn order(stage: &str, status: &str) -> Order {
        serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "order_number": format!("SF-{}-{}", stage, status),
            "style": "Derby",
            "current_stage": stage,
            "status": status
        }))
        .unwrap()
    }

    #[test]
    fn counts_only_active_orders() {
        let orders = vec![
            order("cutting", "pending"),
            order("cutting", "in_progress"),
            order("cutting", "completed"),
            order("packing", "delayed"),
            order("completed", "in_progress"),
        ];
        let counts = stage_counts(&orders);
        assert_eq!(counts[&ProductionStage::Cutting], 2);
        assert_eq!(counts[&ProductionStage::Packing], 0);
        assert!(!counts.contains_key(&ProductionStage::Completed));

        let widget = pipeline(&orders);
        let first = widget.child_elements().next().unwrap();
        assert!(first.has_class("production-stage"));
        assert_eq!(first.text_content(), "cutting2orders");
    }

    #[test]
    fn row_defaults_progress_and_team() {
        let body = orders_table(&[order("lasting", "pending")]);
        let row = body.child_elements().next().unwrap();
        let cells: Vec<String> = row.child_elements().map(Element::text_content).collect();
        assert_eq!(cells[4], "0%");
        assert_eq!(cells[5], "Unassigned");
        assert_eq!(cells[6], "N/A");

        let fill = row.find(&|e| e.has_class("progress-fill")).unwrap();
        assert_eq!(fill.get_attr("style"), Some("width: 0%"));
        let checkbox = row.find(&|e| e.tag() == "input").unwrap();
        assert_eq!(checkbox.get_attr("name"), Some("order-select"));
    }

    #[test]
    fn empty_production_gets_placeholder() {
        let body = orders_table(&[]);
        let cell = body.find(&|e| e.tag() == "td").unwrap();
        assert_eq!(cell.get_attr("colspan"), Some("8"));
        assert_eq!(body.text_content(), EMPTY_PRODUCTION);
    }
}
