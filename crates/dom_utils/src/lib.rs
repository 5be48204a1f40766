//! Stateless convenience surface over a [`dom::Document`].
//!
//! Every operation is a free function taking the document plus the relevant
//! [`NodeId`] handle(s); nothing here holds state across calls, and every
//! read re-queries the live tree. Lookup misses yield `None`/empty vectors,
//! and writes through a missing or non-element handle are silent no-ops —
//! faults are the tree's to report, not this layer's.
//!
//! Getters and setters are separate, named functions (`text`/`set_text`,
//! `checked`/`set_checked`, …); each setter returns the value it stored so
//! that set-then-get round-trips are explicit in the signature.

pub mod class_list;
pub mod content;
pub mod lookup;
pub mod visibility;

use dom::{Document, NodeId};

pub use crate::class_list::{
    add_class, ensure_class, has_class, remove_class, swap_class, toggle_class,
};
pub use crate::content::{
    append_markup, checked, disabled, inner_markup, set_checked, set_disabled, set_inner_markup,
    set_text, set_value, text, value,
};
pub use crate::lookup::{
    by_class_name, by_id, by_tag_name, child, query, query_all, query_all_within, query_within,
};
pub use crate::visibility::{hide, is_visible, set_visible, show};

/// Create a detached element handle for `tag`. Attaching it to the tree is
/// the caller's business (e.g. via [`Document::append_child`]).
pub fn create_element(doc: &mut Document, tag: &str) -> NodeId {
    doc.create_element(tag)
}

/// Set the document title. Write-only: replaces the text of the `<title>`
/// element, creating one under `<head>` when absent. A document without a
/// `<head>` is left untouched.
pub fn set_title(doc: &mut Document, title: &str) {
    if let Some(existing) = by_tag_name(doc, "title").first().copied() {
        doc.set_text_content(existing, title);
        return;
    }
    if let Some(head) = by_tag_name(doc, "head").first().copied() {
        let title_el = doc.create_element("title");
        doc.append_child(head, title_el);
        doc.set_text_content(title_el, title);
    }
}
