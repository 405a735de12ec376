mod common;

use footwear_erp_dashboard::{
    api,
    notifications::ToastKind,
    render::{documents, orders, production, quality},
    surface::{Page, Slot},
    LoadOutcome,
};
use rstest::rstest;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use common::{document, order, qc_report, TestApp};

#[rstest]
#[case(Page::Orders, Slot::OrdersTbody, orders::EMPTY_ORDERS)]
#[case(Page::Documents, Slot::DocumentsTbody, documents::EMPTY_DOCUMENTS)]
#[case(Page::Quality, Slot::QcReportsTbody, quality::EMPTY_REPORTS)]
#[case(Page::Production, Slot::ProductionOrdersTbody, production::EMPTY_PRODUCTION)]
#[tokio::test]
async fn empty_lists_render_placeholder_rows(
    #[case] page: Page,
    #[case] table: Slot,
    #[case] placeholder: &str,
) {
    let app = TestApp::new().await;
    app.serve_empty().await;

    assert_eq!(app.dashboard.navigate_to_page(page).await, LoadOutcome::Applied);
    app.dashboard.with_surface(|surface| {
        let rows = surface.rows(table);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text_content(), placeholder);
    });
}

#[tokio::test]
async fn null_due_date_renders_na_and_plain_quantity() {
    let app = TestApp::new().await;
    let id = Uuid::new_v4();
    app.serve(
        api::ORDERS,
        json!([{
            "id": id,
            "order_number": "SF-2024-000100",
            "customer_name": "Acme",
            "style": "Chelsea Boot",
            "quantity": 100,
            "due_date": null,
            "current_stage": "cutting",
            "status": "pending"
        }]),
        1,
    )
    .await;
    app.serve(api::RECENT_ORDERS, json!([]), 1).await;

    app.dashboard.navigate_to_page(Page::Orders).await;

    app.dashboard.with_surface(|surface| {
        let rows = surface.rows(Slot::OrdersTbody);
        let cells: Vec<String> = rows[0].child_elements().map(|c| c.text_content()).collect();
        assert_eq!(cells[3], "100");
        assert_eq!(cells[5], "N/A");
        assert_eq!(
            surface.text(Slot::RecentOrders).as_deref(),
            Some(orders::EMPTY_RECENT)
        );
    });
    let html = app.dashboard.render_page(Page::Orders);
    assert!(html.starts_with("<section class=\"page active\" id=\"orders\">"));
    assert!(html.contains(&format!("data-id=\"{}\"", id)));
}

#[tokio::test]
async fn api_failure_raises_one_toast_and_keeps_previous_table() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path(api::QC_REPORTS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            qc_report("ord-1", "passed", 0),
            qc_report("ord-2", "failed", 4),
        ])))
        .up_to_n_times(1)
        .mount(&app.server)
        .await;
    app.fail(api::QC_REPORTS, 500).await;

    assert_eq!(
        app.dashboard.navigate_to_page(Page::Quality).await,
        LoadOutcome::Applied
    );
    let before = app.dashboard.render_page(Page::Quality);

    assert_eq!(
        app.dashboard.navigate_to_page(Page::Quality).await,
        LoadOutcome::Unchanged
    );
    assert_eq!(
        app.dashboard.notifier().messages(ToastKind::Error),
        vec!["Error loading data"]
    );
    assert_eq!(app.dashboard.render_page(Page::Quality), before);
    app.dashboard.with_surface(|surface| {
        assert_eq!(surface.text(Slot::QcPassed).as_deref(), Some("1"));
        assert_eq!(surface.text(Slot::QcFailed).as_deref(), Some("1"));
    });
}

#[tokio::test]
async fn malformed_payload_is_rejected_whole() {
    let app = TestApp::new().await;
    app.serve(
        api::DOCUMENTS,
        json!([
            document("po-1.pdf", "purchase_order"),
            {"id": "not-a-uuid", "original_name": "broken.pdf"}
        ]),
        1,
    )
    .await;

    assert_eq!(
        app.dashboard.navigate_to_page(Page::Documents).await,
        LoadOutcome::Unchanged
    );
    assert_eq!(app.dashboard.notifier().count(ToastKind::Error), 1);
    app.dashboard.with_surface(|surface| {
        assert!(surface.element(Slot::DocumentsTbody).is_none());
    });
}

#[tokio::test]
async fn orders_fetches_succeed_independently() {
    let app = TestApp::new().await;
    app.fail(api::ORDERS, 502).await;
    app.serve(
        api::RECENT_ORDERS,
        json!([
            order("SF-1", "cutting", "pending"),
            order("SF-2", "lasting", "pending"),
            order("SF-3", "packing", "in_progress"),
            order("SF-4", "finishing", "pending"),
        ]),
        1,
    )
    .await;

    assert_eq!(
        app.dashboard.navigate_to_page(Page::Orders).await,
        LoadOutcome::Applied
    );
    assert_eq!(app.dashboard.notifier().count(ToastKind::Error), 1);
    app.dashboard.with_surface(|surface| {
        assert!(surface.element(Slot::OrdersTbody).is_none());
        let cards = surface.element(Slot::RecentOrders).unwrap();
        assert_eq!(cards.child_elements().count(), 3);
    });
}

#[tokio::test]
async fn production_page_shows_active_orders_only() {
    let app = TestApp::new().await;
    app.serve(
        api::ORDERS,
        json!([
            order("SF-1", "cutting", "pending"),
            order("SF-2", "cutting", "completed"),
            order("SF-3", "stitching", "in_progress"),
            order("SF-4", "packing", "delayed"),
        ]),
        1,
    )
    .await;

    app.dashboard.navigate_to_page(Page::Production).await;

    app.dashboard.with_surface(|surface| {
        assert_eq!(surface.rows(Slot::ProductionOrdersTbody).len(), 2);
        let pipeline = surface.element(Slot::ProductionPipeline).unwrap();
        let counts: Vec<String> = pipeline
            .child_elements()
            .map(|card| card.text_content())
            .collect();
        assert_eq!(
            counts,
            vec![
                "cutting1orders",
                "stitching1orders",
                "lasting0orders",
                "finishing0orders",
                "packing0orders"
            ]
        );
    });
}

#[tokio::test]
async fn null_document_name_still_renders_row() {
    let app = TestApp::new().await;
    let mut unnamed = document("ignored.pdf", "bom");
    unnamed["original_name"] = json!(null);
    app.serve(
        api::DOCUMENTS,
        json!([document("po-1.pdf", "purchase_order"), unnamed]),
        1,
    )
    .await;

    assert_eq!(
        app.dashboard.navigate_to_page(Page::Documents).await,
        LoadOutcome::Applied
    );
    assert_eq!(app.dashboard.notifier().count(ToastKind::Error), 0);
    app.dashboard.with_surface(|surface| {
        let rows = surface.rows(Slot::DocumentsTbody);
        assert_eq!(rows.len(), 2);
        let name = rows[1].child_elements().next().unwrap().text_content();
        assert_eq!(name, "N/A");
    });
}

#[tokio::test]
async fn null_order_fields_fall_back_to_defaults() {
    let app = TestApp::new().await;
    let mut sparse = order("ignored", "packing", "delayed");
    sparse["order_number"] = json!(null);
    sparse["current_stage"] = json!(null);
    sparse["status"] = json!(null);
    app.serve(
        api::ORDERS,
        json!([order("SF-1", "stitching", "in_progress"), sparse]),
        1,
    )
    .await;
    app.serve(api::RECENT_ORDERS, json!([]), 1).await;

    assert_eq!(
        app.dashboard.navigate_to_page(Page::Orders).await,
        LoadOutcome::Applied
    );
    assert_eq!(app.dashboard.notifier().count(ToastKind::Error), 0);
    app.dashboard.with_surface(|surface| {
        let rows = surface.rows(Slot::OrdersTbody);
        assert_eq!(rows.len(), 2);
        let cells: Vec<String> = rows[1].child_elements().map(|c| c.text_content()).collect();
        assert_eq!(cells[0], "N/A");
        assert_eq!(cells[4], "cutting");
        assert_eq!(cells[6], "pending");
    });
}

#[tokio::test]
async fn null_qc_fields_fall_back_to_defaults() {
    let app = TestApp::new().await;
    let mut sparse = qc_report("ignored", "failed", 1);
    sparse["order_id"] = json!(null);
    sparse["qc_status"] = json!(null);
    app.serve(
        api::QC_REPORTS,
        json!([qc_report("ord-1", "passed", 0), sparse]),
        1,
    )
    .await;

    assert_eq!(
        app.dashboard.navigate_to_page(Page::Quality).await,
        LoadOutcome::Applied
    );
    assert_eq!(app.dashboard.notifier().count(ToastKind::Error), 0);
    app.dashboard.with_surface(|surface| {
        let rows = surface.rows(Slot::QcReportsTbody);
        assert_eq!(rows.len(), 2);
        let first = rows[1].child_elements().next().unwrap().text_content();
        assert_eq!(first, "N/A");
        assert_eq!(surface.text(Slot::QcPending).as_deref(), Some("1"));
    });
}
