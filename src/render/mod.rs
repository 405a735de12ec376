//! Pure renderers: entities in, markup out.
//!
//! Nothing here touches the surface or the network. Every table renderer
//! produces a `<tbody>` with at least one row: an empty list yields a
//! placeholder row spanning the table.

pub mod dashboard;
pub mod documents;
pub mod orders;
pub mod production;
pub mod quality;

use chrono::{Datelike, NaiveDateTime};

use crate::actions::RowAction;
use crate::markup::{el, Element};
use crate::models::ProductionStage;

pub const NOT_AVAILABLE: &str = "N/A";

const PLACEHOLDER_STYLE: &str =
    "text-align: center; padding: 32px; color: var(--muted-foreground);";

/// `M/D/YYYY`, or `N/A` when the date is missing.
pub fn format_date(date: Option<NaiveDateTime>) -> String {
    match date {
        Some(d) => format!("{}/{}/{}", d.month(), d.day(), d.year()),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Integer with `,` thousands separators.
pub fn format_quantity(quantity: i64) -> String {
    let digits = quantity.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if quantity < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Server enums are snake_case; labels show spaces.
pub fn humanize(value: impl ToString) -> String {
    value.to_string().replace('_', " ")
}

pub fn or_na(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

pub fn placeholder_row(colspan: u32, message: &str) -> Element {
    el("tr").child(
        el("td")
            .attr("colspan", colspan.to_string())
            .style(PLACEHOLDER_STYLE)
            .text(message),
    )
}

pub fn action_button(action: RowAction, id: impl ToString) -> Element {
    el("button")
        .class("action-btn")
        .attr("data-action", action.id())
        .attr("data-id", id.to_string())
        .child(el("i").class(action.icon()))
}

pub fn stage_badge(stage: ProductionStage) -> Element {
    el("span")
        .class(format!("badge stage-{}", stage))
        .text(stage.to_string())
}

/// One card of a pipeline widget. `kind` is `pipeline-stage` on the
/// dashboard and `production-stage` on the production page.
pub fn stage_card(kind: &str, stage: ProductionStage, count: u64) -> Element {
    el("div")
        .class(format!("{} stage-{}", kind, stage))
        .child(el("div").class("stage-icon").child(el("i").class(stage.icon())))
        .child(el("h4").text(stage.to_string()))
        .child(el("div").class("count").text(count.to_string()))
        .child(el("div").class("label").text("orders"))
}
