use super::{action_button, format_date, or_na, placeholder_row};
use crate::actions::RowAction;
use crate::markup::{el, Element};
use crate::models::{QcReport, QcStatus, QcSummary};
use crate::surface::Slot;

pub const EMPTY_REPORTS: &str = "No QC reports found. Create your first QC report to get started.";

const CLEAN: &str = "#22c55e";
const DEFECTIVE: &str = "#ef4444";

pub fn summary(summary: &QcSummary) -> Vec<(Slot, String)> {
    vec![
        (Slot::QcPassed, summary.passed.to_string()),
        (Slot::QcPending, summary.pending.to_string()),
        (Slot::QcFailed, summary.failed.to_string()),
    ]
}

pub fn reports_table(reports: &[QcReport]) -> Element {
    if reports.is_empty() {
        return el("tbody").child(placeholder_row(7, EMPTY_REPORTS));
    }
    el("tbody").children(reports.iter().map(report_row))
}

fn report_row(report: &QcReport) -> Element {
    let defects = report.defects_found.unwrap_or(0);
    let defects_cell = if defects == 0 {
        el("td").style(format!("color: {};", CLEAN)).text("0")
    } else {
        el("td")
            .style(format!("color: {};", DEFECTIVE))
            .text(format!("{} defects", defects))
    };

    let mut actions = el("td").child(action_button(RowAction::ViewQcReport, report.id));
    let follow_up = match report.qc_status {
        QcStatus::Pending => Some(RowAction::EditQcReport),
        QcStatus::Failed => Some(RowAction::RetryQc),
        QcStatus::Passed => None,
    };
    if let Some(action) = follow_up {
        actions = actions.child(action_button(action, report.id));
    }

    el("tr")
        .child(el("td").class("font-mono").text(or_na(report.order_id.as_deref())))
        .child(el("td").text("Order Style"))
        .child(el("td").text(or_na(report.inspector.as_deref())))
        .child(el("td").text(format_date(report.inspection_date)))
        .child(defects_cell)
        .child(
            el("td").child(
                el("span")
                    .class(format!("badge qc-{}", report.qc_status))
                    .text(report.qc_status.to_string()),
            ),
        )
        .child(actions)
}
