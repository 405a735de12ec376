mod common;

use std::time::Duration;

use assert_matches::assert_matches;
use footwear_erp_dashboard::{
    api, notifications::ToastKind, surface::Page, surface::Slot, ClientError, LoadOutcome,
};
use serde_json::json;

use common::{document, order, stats, TestApp};

#[tokio::test]
async fn dashboard_orders_dashboard_refetches_each_time() {
    let app = TestApp::new().await;
    app.serve(api::DASHBOARD_STATS, stats(12), 2).await;
    app.serve(api::ORDERS, json!([order("SF-1", "cutting", "pending")]), 1)
        .await;
    app.serve(api::RECENT_ORDERS, json!([]), 1).await;

    assert_eq!(app.dashboard.start().await, LoadOutcome::Applied);
    assert_eq!(
        app.dashboard.navigate_to("orders").await.unwrap(),
        LoadOutcome::Applied
    );
    assert_eq!(
        app.dashboard.navigate_to_page(Page::Dashboard).await,
        LoadOutcome::Applied
    );

    app.dashboard.with_surface(|surface| {
        assert!(surface.is_active(Page::Dashboard));
        assert_eq!(surface.active_nav(), Some(Page::Dashboard));
        assert_eq!(surface.text(Slot::ActiveOrders).as_deref(), Some("12"));
        // Orders data stays rendered on its (hidden) page.
        assert_eq!(surface.rows(Slot::OrdersTbody).len(), 1);
    });
    assert!(app.dashboard.notifier().history().is_empty());
}

#[tokio::test]
async fn superseded_navigation_is_discarded() {
    let app = TestApp::new().await;
    let slow = Duration::from_millis(500);
    app.serve_delayed(api::ORDERS, json!([order("SF-9", "packing", "pending")]), slow)
        .await;
    app.serve_delayed(api::RECENT_ORDERS, json!([order("SF-9", "packing", "pending")]), slow)
        .await;
    app.serve(api::DOCUMENTS, json!([document("po-1.pdf", "purchase_order")]), 1)
        .await;

    let pending = {
        let dashboard = app.dashboard.clone();
        tokio::spawn(async move { dashboard.navigate_to_page(Page::Orders).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(
        app.dashboard.navigate_to_page(Page::Documents).await,
        LoadOutcome::Applied
    );
    assert_eq!(pending.await.unwrap(), LoadOutcome::Discarded);

    assert_eq!(app.dashboard.current_page(), Page::Documents);
    app.dashboard.with_state(|state| {
        assert!(state.orders.is_empty());
        assert!(state.recent_orders.is_empty());
        assert_eq!(state.documents.len(), 1);
    });
    app.dashboard.with_surface(|surface| {
        assert!(surface.element(Slot::OrdersTbody).is_none());
        assert!(surface.element(Slot::RecentOrders).is_none());
        assert_eq!(surface.rows(Slot::DocumentsTbody).len(), 1);
    });
}

#[tokio::test]
async fn refresh_after_navigating_away_is_discarded() {
    let app = TestApp::new().await;
    app.serve_delayed(api::QC_REPORTS, json!([]), Duration::from_millis(300))
        .await;
    app.serve(api::DASHBOARD_STATS, stats(1), 1).await;

    let refresh = {
        let dashboard = app.dashboard.clone();
        tokio::spawn(async move { dashboard.refresh(Page::Quality).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    app.dashboard.navigate_to_page(Page::Dashboard).await;

    assert_eq!(refresh.await.unwrap(), LoadOutcome::Discarded);
    app.dashboard
        .with_surface(|surface| assert!(surface.element(Slot::QcReportsTbody).is_none()));
}

#[tokio::test]
async fn unknown_page_is_rejected_without_side_effects() {
    let app = TestApp::new().await;
    app.serve(api::ORDERS, json!([]), 1).await;
    app.serve(api::RECENT_ORDERS, json!([]), 1).await;

    app.dashboard.navigate_to_page(Page::Orders).await;
    assert_matches!(
        app.dashboard.navigate_to("reports").await,
        Err(ClientError::UnknownPage(id)) if id == "reports"
    );

    assert_eq!(app.dashboard.current_page(), Page::Orders);
    app.dashboard
        .with_surface(|surface| assert!(surface.is_active(Page::Orders)));
    assert_eq!(app.dashboard.notifier().count(ToastKind::Error), 0);
}

#[tokio::test]
async fn qc_reports_quick_action_navigates_to_quality() {
    let app = TestApp::new().await;
    app.serve(api::QC_REPORTS, json!([]), 1).await;

    app.dashboard
        .handle_document_action("qc-reports")
        .await
        .unwrap();
    assert_eq!(app.dashboard.current_page(), Page::Quality);
    app.dashboard.with_surface(|surface| {
        assert_eq!(surface.text(Slot::QcPassed).as_deref(), Some("0"));
    });
}
