//! Per-page data loaders.
//!
//! Loading is split in two so no lock is held across the network:
//! [`load`] fetches without touching shared state, and
//! [`PageUpdate::apply`] stores the results and repaints the affected slots.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::api::{self, ApiClient};
use crate::filter;
use crate::models::{DashboardStats, Document, Order, QcReport};
use crate::render;
use crate::state::AppState;
use crate::surface::{Page, Slot, Surface};

/// Data fetched for one page. `None` marks a fetch that failed.
#[derive(Clone, Debug)]
pub enum PageUpdate {
    Dashboard(Option<DashboardStats>),
    Orders {
        orders: Option<Vec<Order>>,
        recent: Option<Vec<Order>>,
    },
    Documents(Option<Vec<Document>>),
    Quality(Option<Vec<QcReport>>),
    Production(Option<Vec<Order>>),
}

/// Fetches the data for `page`.
///
/// Returns `None` if `token` is cancelled before the fetches complete; the
/// in-flight requests are dropped.
#[instrument(skip(api, token))]
pub async fn load(page: Page, api: &ApiClient, token: &CancellationToken) -> Option<PageUpdate> {
    let fetch = async {
        match page {
            Page::Dashboard => {
                PageUpdate::Dashboard(api.fetch_resource(api::DASHBOARD_STATS).await)
            }
            Page::Orders => {
                let (orders, recent) = tokio::join!(
                    api.fetch_resource::<Vec<Order>>(api::ORDERS),
                    api.fetch_resource::<Vec<Order>>(api::RECENT_ORDERS),
                );
                PageUpdate::Orders { orders, recent }
            }
            Page::Documents => PageUpdate::Documents(api.fetch_resource(api::DOCUMENTS).await),
            Page::Quality => PageUpdate::Quality(api.fetch_resource(api::QC_REPORTS).await),
            Page::Production => PageUpdate::Production(
                api.fetch_resource::<Vec<Order>>(api::ORDERS)
                    .await
                    .map(|orders| orders.into_iter().filter(Order::is_active).collect()),
            ),
        }
    };

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            debug!(page = %page, "load cancelled");
            None
        }
        update = fetch => Some(update),
    }
}

impl PageUpdate {
    pub fn page(&self) -> Page {
        match self {
            Self::Dashboard(_) => Page::Dashboard,
            Self::Orders { .. } => Page::Orders,
            Self::Documents(_) => Page::Documents,
            Self::Quality(_) => Page::Quality,
            Self::Production(_) => Page::Production,
        }
    }

    /// Stores the successful parts in `state`. Returns the slots to repaint.
    fn store(self, state: &mut AppState) -> Vec<Slot> {
        match self {
            Self::Dashboard(Some(stats)) => {
                state.dashboard_stats = Some(stats);
                Page::Dashboard.slots()
            }
            Self::Orders { orders, recent } => {
                let mut slots = Vec::new();
                if let Some(recent) = recent {
                    state.recent_orders = recent;
                    slots.push(Slot::RecentOrders);
                }
                if let Some(orders) = orders {
                    state.orders = orders;
                    slots.push(Slot::OrdersTbody);
                }
                slots
            }
            Self::Documents(Some(documents)) => {
                state.documents = documents;
                Page::Documents.slots()
            }
            Self::Quality(Some(reports)) => {
                state.qc_reports = reports;
                Page::Quality.slots()
            }
            Self::Production(Some(orders)) => {
                state.production_orders = orders;
                Page::Production.slots()
            }
            _ => Vec::new(),
        }
    }

    /// Applies the update: state first, then the affected slots are
    /// re-rendered and the table filters re-applied. Failed fetches leave
    /// their slots untouched. Returns the number of slots repainted.
    pub fn apply(self, state: &mut AppState, surface: &mut Surface, recent_limit: usize) -> usize {
        let page = self.page();
        let slots = self.store(state);
        for slot in &slots {
            paint(*slot, state, surface, recent_limit);
        }
        info!(page = %page, slots = slots.len(), "page data applied");
        slots.len()
    }
}

/// Renders one slot from `state`.
pub fn paint(slot: Slot, state: &AppState, surface: &mut Surface, recent_limit: usize) {
    match slot {
        Slot::ActiveOrders | Slot::CompletedOrders | Slot::PendingQc | Slot::MonthlyRevenue => {
            if let Some(stats) = &state.dashboard_stats {
                if let Some((_, text)) = render::dashboard::kpis(stats)
                    .into_iter()
                    .find(|(s, _)| *s == slot)
                {
                    surface.set_text(slot, text);
                }
            }
        }
        Slot::PipelineStages => {
            if let Some(stats) = &state.dashboard_stats {
                surface.mount(slot, render::dashboard::pipeline_stages(stats));
            }
        }
        Slot::RecentOrders => {
            surface.mount(slot, render::orders::recent_orders(&state.recent_orders, recent_limit))
        }
        Slot::OrdersTbody => surface.mount(slot, render::orders::orders_table(&state.orders)),
        Slot::DocumentsTbody => {
            surface.mount(slot, render::documents::documents_table(&state.documents))
        }
        Slot::QcPassed | Slot::QcPending | Slot::QcFailed => {
            if let Some((_, text)) = render::quality::summary(&state.qc_summary())
                .into_iter()
                .find(|(s, _)| *s == slot)
            {
                surface.set_text(slot, text);
            }
        }
        Slot::QcReportsTbody => {
            surface.mount(slot, render::quality::reports_table(&state.qc_reports))
        }
        Slot::ProductionPipeline => {
            surface.mount(slot, render::production::pipeline(&state.production_orders))
        }
        Slot::ProductionOrdersTbody => surface.mount(
            slot,
            render::production::orders_table(&state.production_orders),
        ),
    }

    if slot.is_table() {
        reapply_filter(slot, state, surface);
    }
}

/// Re-runs the table's filter criteria over its current rows.
pub fn reapply_filter(table: Slot, state: &AppState, surface: &mut Surface) -> Option<usize> {
    let criteria = state.filter(table)?;
    let body = surface.element_mut(table)?;
    Some(filter::apply(criteria, body))
}
