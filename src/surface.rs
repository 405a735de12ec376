//! The in-memory document the dashboard renders into.
//!
//! A [`Surface`] plays the role of the browser DOM: it knows which page and
//! navigation link are active, holds the rendered fragment for every element
//! id ([`Slot`]) and the state of the new-order modal.

use serde::Serialize;
use std::collections::HashMap;
use strum::IntoEnumIterator;

use crate::errors::ClientError;
use crate::markup::{el, Element};
use crate::models::NewOrderForm;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Orders,
    Documents,
    Quality,
    Production,
}

impl Page {
    /// Parses a `data-page` identifier.
    pub fn parse(id: &str) -> Result<Self, ClientError> {
        id.parse()
            .map_err(|_| ClientError::UnknownPage(id.to_string()))
    }

    pub fn id(&self) -> &'static str {
        self.into()
    }

    /// Element slots belonging to this page, in document order.
    pub fn slots(&self) -> Vec<Slot> {
        Slot::iter().filter(|slot| slot.page() == *self).collect()
    }
}

/// An element id on the surface.
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
pub enum Slot {
    ActiveOrders,
    CompletedOrders,
    PendingQc,
    MonthlyRevenue,
    PipelineStages,
    RecentOrders,
    OrdersTbody,
    DocumentsTbody,
    QcPassed,
    QcPending,
    QcFailed,
    QcReportsTbody,
    ProductionPipeline,
    ProductionOrdersTbody,
}

impl Slot {
    pub fn id(&self) -> &'static str {
        self.into()
    }

    pub fn page(&self) -> Page {
        match self {
            Self::ActiveOrders
            | Self::CompletedOrders
            | Self::PendingQc
            | Self::MonthlyRevenue
            | Self::PipelineStages => Page::Dashboard,
            Self::RecentOrders | Self::OrdersTbody => Page::Orders,
            Self::DocumentsTbody => Page::Documents,
            Self::QcPassed | Self::QcPending | Self::QcFailed | Self::QcReportsTbody => {
                Page::Quality
            }
            Self::ProductionPipeline | Self::ProductionOrdersTbody => Page::Production,
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(
            self,
            Self::OrdersTbody
                | Self::DocumentsTbody
                | Self::QcReportsTbody
                | Self::ProductionOrdersTbody
        )
    }
}

/// The new-order modal and its form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderModal {
    pub open: bool,
    pub form: NewOrderForm,
    pub file_info: Option<Element>,
}

impl OrderModal {
    /// Closes the modal, resetting the form and hiding the file info panel.
    pub fn close(&mut self) {
        self.open = false;
        self.form = NewOrderForm::default();
        self.file_info = None;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Surface {
    active_page: Option<Page>,
    active_nav: Option<Page>,
    slots: HashMap<Slot, Element>,
    modal: OrderModal,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `page`, hides every other page and moves the nav indicator.
    pub fn activate(&mut self, page: Page) {
        self.active_nav = Some(page);
        self.active_page = Some(page);
    }

    pub fn active_page(&self) -> Option<Page> {
        self.active_page
    }

    pub fn active_nav(&self) -> Option<Page> {
        self.active_nav
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.active_page == Some(page)
    }

    pub fn set_text(&mut self, slot: Slot, text: impl Into<String>) {
        self.slots
            .insert(slot, el("span").id(slot.id()).text(text.into()));
    }

    pub fn text(&self, slot: Slot) -> Option<String> {
        self.slots.get(&slot).map(Element::text_content)
    }

    /// Replaces the content of `slot`; the element always carries the slot's id.
    pub fn mount(&mut self, slot: Slot, element: Element) {
        self.slots.insert(slot, element.id(slot.id()));
    }

    pub fn element(&self, slot: Slot) -> Option<&Element> {
        self.slots.get(&slot)
    }

    pub fn element_mut(&mut self, slot: Slot) -> Option<&mut Element> {
        self.slots.get_mut(&slot)
    }

    /// Table rows rendered into `slot`; empty when nothing was rendered yet.
    pub fn rows(&self, slot: Slot) -> Vec<&Element> {
        self.slots
            .get(&slot)
            .map(|body| body.child_elements().filter(|e| e.tag() == "tr").collect())
            .unwrap_or_default()
    }

    pub fn visible_rows(&self, slot: Slot) -> Vec<&Element> {
        self.rows(slot).into_iter().filter(|r| !r.is_hidden()).collect()
    }

    pub fn modal(&self) -> &OrderModal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut OrderModal {
        &mut self.modal
    }

    /// Renders one page section with whatever its slots currently hold.
    pub fn render_page(&self, page: Page) -> String {
        let mut section = el("section").id(page.id()).class("page");
        if self.is_active(page) {
            section = section.class("active");
        }
        let section = section.children(
            page.slots()
                .into_iter()
                .filter_map(|slot| self.slots.get(&slot).cloned()),
        );
        section.render()
    }
}
