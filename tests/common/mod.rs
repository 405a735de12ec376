#![allow(dead_code)]

use std::time::Duration;

use footwear_erp_dashboard::{api, config::DashboardConfig, Dashboard};
use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate, Times};

/// A dashboard wired to a mock FootwearERP API.
pub struct TestApp {
    pub server: MockServer,
    pub dashboard: Dashboard,
}

impl TestApp {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let mut cfg = DashboardConfig::for_base_url(server.uri());
        cfg.request_timeout_secs = 5;
        let dashboard = Dashboard::new(&cfg).expect("dashboard for tests");
        Self { server, dashboard }
    }

    /// Serves `body` on `GET endpoint`; `times` is verified when the server drops.
    pub async fn serve(&self, endpoint: &str, body: Value, times: impl Into<Times>) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    pub async fn serve_delayed(&self, endpoint: &str, body: Value, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    pub async fn fail(&self, endpoint: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Serves empty or zeroed payloads for every read endpoint.
    pub async fn serve_empty(&self) {
        for endpoint in [api::ORDERS, api::RECENT_ORDERS, api::DOCUMENTS, api::QC_REPORTS] {
            self.serve(endpoint, json!([]), 0_u64..).await;
        }
        self.serve(api::DASHBOARD_STATS, stats(0), 0_u64..).await;
    }
}

pub fn stats(active: u64) -> Value {
    json!({
        "active_orders": active,
        "completed_orders": 40,
        "pending_qc": 3,
        "monthly_revenue": 0,
        "production_pipeline": {
            "cutting": 4,
            "stitching": 2,
            "lasting": 1,
            "finishing": 0,
            "packing": 5
        },
        "qc_status": {"passed": 10, "pending": 3, "failed": 1}
    })
}

pub fn order(number: &str, stage: &str, status: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "order_number": number,
        "customer_id": "CUST-1",
        "customer_name": "Acme Footwear",
        "style": "Trail Runner",
        "quantity": 1200,
        "order_amount": 54000.0,
        "current_stage": stage,
        "status": status,
        "priority": "normal",
        "due_date": "2024-12-01T00:00:00",
        "progress": 40,
        "assigned_team": "Line A",
        "created_at": "2024-10-01T09:00:00"
    })
}

pub fn document(name: &str, kind: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "order_id": "",
        "file_name": format!("{}-{}", Uuid::new_v4(), name),
        "original_name": name,
        "file_size": 2_097_152,
        "mime_type": "application/pdf",
        "document_type": kind,
        "uploaded_by": null,
        "uploaded_at": "2024-10-02T10:00:00"
    })
}

pub fn qc_report(order_id: &str, status: &str, defects: u32) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "order_id": order_id,
        "inspector": "M. Chen",
        "inspection_date": "2024-10-03T14:00:00",
        "defects_found": defects,
        "qc_status": status,
        "notes": ""
    })
}
