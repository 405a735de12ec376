//! Client-side row filtering over rendered table bodies.
//!
//! Every table keeps one [`FilterCriteria`]: an optional search term and an
//! optional select filter. A row is visible when it satisfies all criteria
//! that are set. Criteria are re-applied whenever they change and whenever
//! the table is re-rendered.

use tracing::debug;

use crate::errors::ClientError;
use crate::markup::Element;
use crate::models::{DocumentType, ProductionStage, QcStatus};
use crate::surface::Slot;

/// A `<select>` filter bound to one table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectFilter {
    /// Matches the row's `stage-*` badge.
    Stage(ProductionStage),
    /// Matches the type label in the third cell.
    DocumentType(DocumentType),
    /// Matches the row's `qc-*` badge.
    QcStatus(QcStatus),
}

impl SelectFilter {
    pub fn table(&self) -> Slot {
        match self {
            Self::Stage(_) => Slot::OrdersTbody,
            Self::DocumentType(_) => Slot::DocumentsTbody,
            Self::QcStatus(_) => Slot::QcReportsTbody,
        }
    }

    pub fn matches(&self, row: &Element) -> bool {
        match self {
            Self::Stage(stage) => badge_text(row, "stage-")
                .map(|text| text.contains(&stage.to_string()))
                .unwrap_or(false),
            Self::DocumentType(kind) => row
                .child_elements()
                .filter(|e| e.tag() == "td")
                .nth(2)
                .map(|cell| cell.text_content().contains(&kind.label()))
                .unwrap_or(false),
            Self::QcStatus(status) => badge_text(row, "qc-")
                .map(|text| text.contains(&status.to_string()))
                .unwrap_or(false),
        }
    }
}

fn badge_text(row: &Element, prefix: &str) -> Option<String> {
    row.find(&|e| e.has_class("badge") && e.has_class_prefix(prefix))
        .map(Element::text_content)
}

/// Which select filter a control id refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterControl {
    Stage,
    DocumentType,
    QcStatus,
}

impl FilterControl {
    /// Resolves a control by its element id, e.g. `stage-filter`.
    pub fn from_id(id: &str) -> Result<Self, ClientError> {
        if id.contains("stage") {
            Ok(Self::Stage)
        } else if id.contains("document-type") {
            Ok(Self::DocumentType)
        } else if id.contains("qc-status") {
            Ok(Self::QcStatus)
        } else {
            Err(ClientError::UnknownFilter(id.to_string()))
        }
    }

    pub fn table(&self) -> Slot {
        match self {
            Self::Stage => Slot::OrdersTbody,
            Self::DocumentType => Slot::DocumentsTbody,
            Self::QcStatus => Slot::QcReportsTbody,
        }
    }

    /// Parses a selected value; an empty value clears the filter.
    pub fn parse_value(&self, value: &str) -> Result<Option<SelectFilter>, ClientError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        let invalid = || ClientError::InvalidInput(format!("unknown filter value '{}'", value));
        let filter = match self {
            Self::Stage => SelectFilter::Stage(value.parse().map_err(|_| invalid())?),
            Self::DocumentType => {
                SelectFilter::DocumentType(value.parse().map_err(|_| invalid())?)
            }
            Self::QcStatus => SelectFilter::QcStatus(value.parse().map_err(|_| invalid())?),
        };
        Ok(Some(filter))
    }
}

/// Search inputs with "orders" in their id drive the orders table, all others the documents table.
pub fn search_target(input_id: &str) -> Slot {
    if input_id.contains("orders") {
        Slot::OrdersTbody
    } else {
        Slot::DocumentsTbody
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    search: Option<String>,
    select: Option<SelectFilter>,
}

impl FilterCriteria {
    pub fn set_search(&mut self, term: &str) {
        self.search = if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        };
    }

    pub fn set_select(&mut self, select: Option<SelectFilter>) {
        self.select = select;
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn select(&self) -> Option<SelectFilter> {
        self.select
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.select.is_none()
    }

    pub fn matches(&self, row: &Element) -> bool {
        let search_ok = match &self.search {
            Some(term) => search_text(row).contains(term.as_str()),
            None => true,
        };
        search_ok && self.select.map(|s| s.matches(row)).unwrap_or(true)
    }
}

/// Lowercased cell texts separated by spaces, so a term cannot match
/// across a cell boundary.
fn search_text(row: &Element) -> String {
    row.child_elements()
        .map(|cell| cell.text_content().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shows or hides every `<tr>` under `body`; returns the number left visible.
pub fn apply(criteria: &FilterCriteria, body: &mut Element) -> usize {
    let mut visible = 0;
    for row in body.child_elements_mut().filter(|e| e.tag() == "tr") {
        let show = criteria.matches(row);
        row.set_hidden(!show);
        if show {
            visible += 1;
        }
    }
    debug!(
        search = ?criteria.search(),
        select = ?criteria.select(),
        visible,
        "filter pass"
    );
    visible
}
