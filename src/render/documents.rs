use super::{action_button, format_date, or_na, placeholder_row};
use crate::actions::RowAction;
use crate::markup::{el, Element};
use crate::models::Document;

pub const EMPTY_DOCUMENTS: &str =
    "No documents found. Upload your first document to get started.";

pub fn documents_table(documents: &[Document]) -> Element {
    if documents.is_empty() {
        return el("tbody").child(placeholder_row(7, EMPTY_DOCUMENTS));
    }
    el("tbody").children(documents.iter().map(document_row))
}

fn document_row(doc: &Document) -> Element {
    let type_label = doc
        .document_type
        .map(|t| t.label())
        .unwrap_or_else(|| super::NOT_AVAILABLE.to_string());

    el("tr")
        .child(
            el("td").child(
                el("div")
                    .style("display: flex; align-items: center; gap: 8px;")
                    .child(
                        el("i")
                            .class("fas fa-file-text")
                            .style("color: var(--primary);"),
                    )
                    .child(el("span").text(or_na(doc.original_name.as_deref()))),
            ),
        )
        .child(el("td").class("font-mono").text(or_na(doc.order_id.as_deref())))
        .child(el("td").child(el("span").class("badge").text(type_label)))
        .child(el("td").text(doc.uploaded_by.as_deref().unwrap_or("System")))
        .child(el("td").text(format_date(doc.uploaded_at)))
        .child(el("td").text(format!("{:.1} MB", doc.size_mb())))
        .child(
            el("td")
                .child(action_button(RowAction::ViewDocument, doc.id))
                .child(action_button(RowAction::DownloadDocument, doc.id)),
        )
}
