use crate::errors::ClientError;

/// Per-row buttons rendered into the tables.
///
/// None of them has a server-side counterpart yet; triggering one raises an
/// info toast.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum RowAction {
    ViewOrder,
    EditOrder,
    ViewDocument,
    DownloadDocument,
    ViewQcReport,
    EditQcReport,
    RetryQc,
    AdvanceStage,
    EditProductionOrder,
}

impl RowAction {
    pub fn parse(id: &str) -> Result<Self, ClientError> {
        id.parse()
            .map_err(|_| ClientError::UnknownAction(id.to_string()))
    }

    pub fn id(&self) -> &'static str {
        self.into()
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::ViewOrder | Self::ViewDocument | Self::ViewQcReport => "fas fa-eye",
            Self::EditOrder | Self::EditQcReport | Self::EditProductionOrder => "fas fa-edit",
            Self::DownloadDocument => "fas fa-download",
            Self::RetryQc => "fas fa-redo",
            Self::AdvanceStage => "fas fa-arrow-right",
        }
    }

    pub fn toast_message(&self) -> &'static str {
        match self {
            Self::ViewOrder => "Order details modal coming soon",
            Self::EditOrder => "Edit order modal coming soon",
            Self::ViewDocument => "Document viewer coming soon",
            Self::DownloadDocument => "Document download coming soon",
            Self::ViewQcReport => "QC report details coming soon",
            Self::EditQcReport => "Edit QC report coming soon",
            Self::RetryQc => "QC retry functionality coming soon",
            Self::AdvanceStage => "Stage advancement coming soon",
            Self::EditProductionOrder => "Edit production order coming soon",
        }
    }
}

/// Quick actions on the documents page.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum DocumentAction {
    UploadPo,
    BomFiles,
    QcReports,
    DispatchDocs,
}

impl DocumentAction {
    pub fn parse(id: &str) -> Result<Self, ClientError> {
        id.parse()
            .map_err(|_| ClientError::UnknownAction(id.to_string()))
    }
}
