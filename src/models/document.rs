use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::de;

#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum DocumentType {
    PurchaseOrder,
    Bom,
    QcReport,
    DispatchDocument,
}

impl DocumentType {
    /// Label shown in the documents table ("purchase order", "qc report", ...).
    pub fn label(&self) -> String {
        self.to_string().replace('_', " ")
    }
}

/// An uploaded file as returned by `GET /api/documents`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,

    /// Associated order; the server stores `""` until the order exists.
    #[serde(default, deserialize_with = "de::non_empty")]
    pub order_id: Option<String>,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub file_name: Option<String>,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub original_name: Option<String>,

    #[serde(default)]
    pub file_size: Option<u64>,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub mime_type: Option<String>,

    #[serde(default)]
    pub document_type: Option<DocumentType>,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub uploaded_by: Option<String>,

    #[serde(default, deserialize_with = "de::timestamp")]
    pub uploaded_at: Option<NaiveDateTime>,
}

impl Document {
    pub fn size_mb(&self) -> f64 {
        self.file_size.unwrap_or(0) as f64 / 1024.0 / 1024.0
    }
}
