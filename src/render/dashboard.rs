use crate::markup::{el, Element};
use crate::models::{DashboardStats, ProductionStage};
use crate::surface::Slot;

/// Text for the four KPI cards.
pub fn kpis(stats: &DashboardStats) -> Vec<(Slot, String)> {
    vec![
        (Slot::ActiveOrders, stats.active_orders.to_string()),
        (Slot::CompletedOrders, stats.completed_orders.to_string()),
        (Slot::PendingQc, stats.pending_qc.to_string()),
        (
            Slot::MonthlyRevenue,
            stats
                .monthly_revenue
                .map(|r| r.to_string())
                .unwrap_or_else(|| "0".to_string()),
        ),
    ]
}

/// The five-stage pipeline widget, using the server-side histogram.
pub fn pipeline_stages(stats: &DashboardStats) -> Element {
    el("div").children(
        ProductionStage::PIPELINE
            .iter()
            .map(|stage| super::stage_card("pipeline-stage", *stage, stats.pipeline_count(*stage))),
    )
}
