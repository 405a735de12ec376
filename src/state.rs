use serde::Serialize;
use std::collections::HashMap;

use crate::filter::FilterCriteria;
use crate::models::{DashboardStats, Document, Order, QcReport, QcSummary};
use crate::surface::{Page, Slot};

/// Client-side application state.
///
/// Each page owns its own fields; data fetched for one page is kept when the
/// user navigates away but is only displayed while that page is active.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AppState {
    pub current_page: Page,
    pub dashboard_stats: Option<DashboardStats>,
    pub orders: Vec<Order>,
    pub recent_orders: Vec<Order>,
    pub documents: Vec<Document>,
    pub qc_reports: Vec<QcReport>,
    /// Orders still in the pipeline (pending or in progress).
    pub production_orders: Vec<Order>,
    #[serde(skip)]
    pub filters: HashMap<Slot, FilterCriteria>,
}

impl AppState {
    pub fn qc_summary(&self) -> QcSummary {
        QcSummary::from_reports(&self.qc_reports)
    }

    pub fn filter(&self, table: Slot) -> Option<&FilterCriteria> {
        self.filters.get(&table)
    }

    pub fn filter_mut(&mut self, table: Slot) -> &mut FilterCriteria {
        self.filters.entry(table).or_default()
    }

    /// JSON view of the data belonging to `page`.
    pub fn page_snapshot(&self, page: Page) -> serde_json::Value {
        use serde_json::json;
        match page {
            Page::Dashboard => json!({ "dashboard_stats": self.dashboard_stats }),
            Page::Orders => json!({
                "orders": self.orders,
                "recent_orders": self.recent_orders,
            }),
            Page::Documents => json!({ "documents": self.documents }),
            Page::Quality => json!({
                "summary": self.qc_summary(),
                "qc_reports": self.qc_reports,
            }),
            Page::Production => json!({ "production_orders": self.production_orders }),
        }
    }
}
