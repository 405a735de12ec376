use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::de;
use super::{ProductionStage, QcStatus};

/// Aggregates served by `GET /api/dashboard/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "de::or_default")]
    pub active_orders: u64,

    #[serde(default, deserialize_with = "de::or_default")]
    pub completed_orders: u64,

    #[serde(default, deserialize_with = "de::or_default")]
    pub pending_qc: u64,

    #[serde(default, deserialize_with = "de::money")]
    pub monthly_revenue: Option<Decimal>,

    #[serde(default, deserialize_with = "de::or_default")]
    pub production_pipeline: BTreeMap<ProductionStage, u64>,

    #[serde(default, deserialize_with = "de::or_default")]
    pub qc_status: BTreeMap<QcStatus, u64>,
}

impl DashboardStats {
    pub fn pipeline_count(&self, stage: ProductionStage) -> u64 {
        self.production_pipeline.get(&stage).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_server_stats() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "active_orders": 12,
            "completed_orders": 40,
            "pending_qc": 3,
            "monthly_revenue": "0",
            "production_pipeline": {
                "cutting": 4,
                "stitching": 5,
                "lasting": 0,
                "finishing": 2,
                "packing": 1,
                "completed": 0
            },
            "qc_status": {"passed": 9, "pending": 3, "failed": 1}
        }))
        .unwrap();

        assert_eq!(stats.active_orders, 12);
        assert_eq!(stats.monthly_revenue, Some(Decimal::ZERO));
        assert_eq!(stats.pipeline_count(ProductionStage::Stitching), 5);
        assert_eq!(stats.qc_status.get(&QcStatus::Failed), Some(&1));
    }

    #[test]
    fn missing_pipeline_counts_default_to_zero() {
        let stats: DashboardStats = serde_json::from_value(json!({})).unwrap();
        assert_eq!(stats.pipeline_count(ProductionStage::Packing), 0);
        assert!(stats.monthly_revenue.is_none());
    }

    #[test]
    fn null_counters_decode_as_zero() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "active_orders": null,
            "pending_qc": 2,
            "production_pipeline": null
        }))
        .unwrap();
        assert_eq!(stats.active_orders, 0);
        assert_eq!(stats.pending_qc, 2);
        assert_eq!(stats.pipeline_count(ProductionStage::Cutting), 0);
    }
}
