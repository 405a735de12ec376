use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::de;

/// Outcome of a quality-control inspection.
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
pub enum QcStatus {
    #[default]
    Pending,
    Passed,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QcReport {
    pub id: Uuid,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub order_id: Option<String>,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub inspector: Option<String>,

    #[serde(default, deserialize_with = "de::timestamp")]
    pub inspection_date: Option<NaiveDateTime>,

    #[serde(default)]
    pub defects_found: Option<u32>,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub defect_description: Option<String>,

    #[serde(default, deserialize_with = "de::or_default")]
    pub qc_status: QcStatus,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub notes: Option<String>,
}

/// Passed / pending / failed counters for the QC summary cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QcSummary {
    pub passed: usize,
    pub pending: usize,
    pub failed: usize,
}

impl QcSummary {
    pub fn from_reports(reports: &[QcReport]) -> Self {
        reports.iter().fold(Self::default(), |mut acc, report| {
            match report.qc_status {
                QcStatus::Passed => acc.passed += 1,
                QcStatus::Pending => acc.pending += 1,
                QcStatus::Failed => acc.failed += 1,
            }
            acc
        })
    }
}
