//! Typed entities decoded at the API boundary.

pub mod dashboard;
pub mod de;
pub mod document;
pub mod order;
pub mod qc_report;

pub use dashboard::DashboardStats;
pub use document::{Document, DocumentType};
pub use order::{
    ExtractedPo, NewOrderForm, Order, OrderStatus, PoAttachment, ProductionStage,
};
pub use qc_report::{QcReport, QcStatus, QcSummary};
