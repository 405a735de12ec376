use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;
use validator::Validate;

use super::de;

/// Step of the production pipeline an order currently sits in.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductionStage {
    #[default]
    Cutting,
    Stitching,
    Lasting,
    Finishing,
    Packing,
    /// Emitted by the server once an order leaves the pipeline.
    Completed,
}

impl ProductionStage {
    /// The stages shown on pipeline widgets, in flow order.
    pub const PIPELINE: [ProductionStage; 5] = [
        ProductionStage::Cutting,
        ProductionStage::Stitching,
        ProductionStage::Lasting,
        ProductionStage::Finishing,
        ProductionStage::Packing,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Cutting => "fas fa-cut",
            Self::Stitching => "fas fa-tshirt",
            Self::Lasting => "fas fa-box",
            Self::Finishing => "fas fa-paint-brush",
            Self::Packing => "fas fa-truck",
            Self::Completed => "fas fa-check",
        }
    }
}

/// Enum representing the possible statuses of an order.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Delayed,
}

impl OrderStatus {
    /// Orders still moving through the pipeline.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }
}

/// An order as returned by `GET /api/orders`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,

    /// Human-facing order number (e.g. `SF-2024-123456`).
    #[serde(default, deserialize_with = "de::non_empty")]
    pub order_number: Option<String>,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub customer_id: Option<String>,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub customer_name: Option<String>,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub style: Option<String>,

    #[serde(default)]
    pub quantity: Option<i64>,

    #[serde(default, deserialize_with = "de::money")]
    pub order_amount: Option<Decimal>,

    #[serde(default, deserialize_with = "de::or_default")]
    pub current_stage: ProductionStage,

    #[serde(default, deserialize_with = "de::or_default")]
    pub status: OrderStatus,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub priority: Option<String>,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub customer_requirements: Option<String>,

    #[serde(default, deserialize_with = "de::timestamp")]
    pub due_date: Option<NaiveDateTime>,

    /// Completion percentage, 0-100.
    #[serde(default)]
    pub progress: Option<u32>,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub assigned_team: Option<String>,

    #[serde(default, deserialize_with = "de::timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

impl Order {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// A purchase-order file attached to a new order.
#[derive(Clone, Debug, PartialEq)]
pub struct PoAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl PoAttachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_for(&file_name).to_string();
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }

    /// Reads a PO file from disk.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "purchase-order".to_string());
        Ok(Self::new(file_name, bytes))
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "csv" => "text/csv",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Fields pulled out of a purchase order to pre-fill the new-order form.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractedPo {
    pub customer_name: String,
    pub style: String,
    pub quantity: u32,
    pub order_amount: Decimal,
}

/// The new-order form as submitted to `POST /api/orders`.
#[derive(Clone, Debug, PartialEq, Validate)]
pub struct NewOrderForm {
    #[validate(length(min = 1, message = "customer id is required"))]
    pub customer_id: String,

    #[validate(length(min = 1, message = "customer name is required"))]
    pub customer_name: String,

    #[validate(length(min = 1, message = "style is required"))]
    pub style: String,

    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,

    pub order_amount: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub priority: String,
    pub customer_requirements: Option<String>,
    pub po_file: Option<PoAttachment>,
}

impl Default for NewOrderForm {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            customer_name: String::new(),
            style: String::new(),
            quantity: 0,
            order_amount: None,
            due_date: None,
            priority: "normal".to_string(),
            customer_requirements: None,
            po_file: None,
        }
    }
}

impl NewOrderForm {
    /// Overwrites the extracted fields, leaving everything else as typed.
    pub fn apply_extraction(&mut self, extracted: &ExtractedPo) {
        self.customer_name = extracted.customer_name.clone();
        self.style = extracted.style.clone();
        self.quantity = extracted.quantity;
        self.order_amount = Some(extracted.order_amount);
    }

    /// Text fields in the order the server expects them.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("customer_id", self.customer_id.clone()),
            ("customer_name", self.customer_name.clone()),
            ("style", self.style.clone()),
            ("quantity", self.quantity.to_string()),
            (
                "order_amount",
                self.order_amount.map(|a| a.to_string()).unwrap_or_default(),
            ),
            (
                "due_date",
                self.due_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            ),
            ("priority", self.priority.clone()),
            (
                "customer_requirements",
                self.customer_requirements.clone().unwrap_or_default(),
            ),
        ]
    }
}
