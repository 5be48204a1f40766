//! Text, form-value, flag, and markup accessors.
//!
//! Each getter/setter pair covers one property; setters return the value
//! they stored. Nothing validates that the element is form-like — `value`
//! and `checked` on a `<div>` read and write the same attributes the caller
//! asked for.

use std::fmt::Display;

use dom::{Document, NodeId};

/// Concatenated text of the element and its descendants; empty string for a
/// missing handle.
pub fn text(doc: &Document, el: NodeId) -> String {
    doc.text_content(el)
}

/// Replace the element's children with a single text node holding the
/// `Display` rendering of `value`; returns the stored string.
pub fn set_text<T: Display>(doc: &mut Document, el: NodeId, value: T) -> String {
    let stored = value.to_string();
    doc.set_text_content(el, &stored);
    stored
}

/// The `value` attribute as a string, empty when absent.
pub fn value(doc: &Document, el: NodeId) -> String {
    doc.attr(el, "value").unwrap_or_default().to_string()
}

pub fn set_value<T: Display>(doc: &mut Document, el: NodeId, value: T) -> String {
    let stored = value.to_string();
    doc.set_attr(el, "value", &stored);
    stored
}

/// Serialize the element's children back to markup.
pub fn inner_markup(doc: &Document, el: NodeId) -> String {
    dom::inner_markup(doc, el)
}

/// Replace the element's children with the parse of `markup`, verbatim and
/// unsanitized; returns the markup that was assigned. Malformed input takes
/// the parser's recovery path.
pub fn set_inner_markup(doc: &mut Document, el: NodeId, markup: &str) -> String {
    if doc.get(el).is_some() {
        doc.remove_children(el);
        doc.append_markup(el, markup);
    }
    markup.to_string()
}

/// Parse `markup` and append it after the element's existing children.
pub fn append_markup(doc: &mut Document, el: NodeId, markup: &str) {
    doc.append_markup(el, markup);
}

/// The boolean `checked` flag (attribute presence).
pub fn checked(doc: &Document, el: NodeId) -> bool {
    doc.has_attr(el, "checked")
}

pub fn set_checked(doc: &mut Document, el: NodeId, checked: bool) -> bool {
    if checked {
        doc.set_attr(el, "checked", "");
    } else {
        doc.remove_attr(el, "checked");
    }
    checked
}

/// The boolean `disabled` flag (attribute presence).
pub fn disabled(doc: &Document, el: NodeId) -> bool {
    doc.has_attr(el, "disabled")
}

pub fn set_disabled(doc: &mut Document, el: NodeId, disabled: bool) -> bool {
    if disabled {
        doc.set_attr(el, "disabled", "");
    } else {
        doc.remove_attr(el, "disabled");
    }
    disabled
}
