//! HTTP client for the FootwearERP REST API.

use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::config::DashboardConfig;
use crate::errors::ClientError;
use crate::models::{NewOrderForm, Order};
use crate::notifications::{Notifier, ToastKind, ToastNotifier};

pub const DASHBOARD_STATS: &str = "/api/dashboard/stats";
pub const ORDERS: &str = "/api/orders";
pub const RECENT_ORDERS: &str = "/api/orders/recent";
pub const DOCUMENTS: &str = "/api/documents";
pub const QC_REPORTS: &str = "/api/qc/reports";

/// Thin wrapper over [`reqwest::Client`] with uniform decoding and error reporting.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    notifier: ToastNotifier,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        notifier: ToastNotifier,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            notifier,
        })
    }

    pub fn from_config(
        config: &DashboardConfig,
        notifier: ToastNotifier,
    ) -> Result<Self, ClientError> {
        Self::new(config.api_base_url.clone(), config.request_timeout(), notifier)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// GETs `endpoint` and decodes the JSON body into `T`.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn try_fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ClientError> {
        let response = self
            .http
            .get(self.url(endpoint))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Like [`try_fetch`](Self::try_fetch), but absorbs every failure.
    ///
    /// A failure is logged and reported with exactly one error toast; the
    /// caller only sees `None`.
    pub async fn fetch_resource<T: DeserializeOwned>(&self, endpoint: &str) -> Option<T> {
        match self.try_fetch(endpoint).await {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(endpoint, error = %err, "fetch failed");
                self.notifier.notify(&err.toast_message(), ToastKind::Error);
                None
            }
        }
    }

    /// Submits the new-order form as `multipart/form-data`.
    ///
    /// A 2xx response is a success even if the body is not a decodable
    /// order; in that case `Ok(None)` is returned.
    #[instrument(skip(self, form), fields(customer_id = %form.customer_id, style = %form.style))]
    pub async fn create_order(&self, form: &NewOrderForm) -> Result<Option<Order>, ClientError> {
        let mut multipart = Form::new();
        for (name, value) in form.text_fields() {
            multipart = multipart.text(name, value);
        }
        if let Some(file) = &form.po_file {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.mime_type)?;
            multipart = multipart.part("po_file", part);
        }

        let response = self
            .http
            .post(self.url(ORDERS))
            .multipart(multipart)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                endpoint: ORDERS.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        match serde_json::from_slice::<Order>(&body) {
            Ok(order) => {
                info!(order_number = ?order.order_number, order_id = %order.id, "order created");
                Ok(Some(order))
            }
            Err(err) => {
                warn!(error = %err, "order created but response body was not an order");
                Ok(None)
            }
        }
    }
}
