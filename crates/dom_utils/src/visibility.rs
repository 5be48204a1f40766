//! Visibility, keyed off the inline `display` style.
//!
//! The element's `style` attribute is the single source of truth: an element
//! is "hidden" exactly when its inline `display` is `none`. Stylesheet-level
//! hiding is invisible to this layer, so an element never touched by it
//! reads as visible.

use css::{get_property, parse_declarations, serialize_declarations, set_property};
use dom::{Document, NodeId};

fn set_display(doc: &mut Document, el: NodeId, value: &str) {
    let mut decls = doc
        .attr(el, "style")
        .map(parse_declarations)
        .unwrap_or_default();
    set_property(&mut decls, "display", value);
    doc.set_attr(el, "style", &serialize_declarations(&decls));
}

/// Unconditionally set inline `display: block`, discarding any prior
/// display value.
pub fn show(doc: &mut Document, el: NodeId) {
    set_display(doc, el, "block");
}

/// Unconditionally set inline `display: none`.
pub fn hide(doc: &mut Document, el: NodeId) {
    set_display(doc, el, "none");
}

/// Pure read: is the inline `display` anything other than `none`?
pub fn is_visible(doc: &Document, el: NodeId) -> bool {
    let Some(style) = doc.attr(el, "style") else {
        return true;
    };
    get_property(&parse_declarations(style), "display") != Some("none")
}

/// Show or hide according to `visible`, returning the resulting visibility
/// (always equal to `visible`).
pub fn set_visible(doc: &mut Document, el: NodeId, visible: bool) -> bool {
    if visible {
        show(doc, el);
    } else {
        hide(doc, el);
    }
    is_visible(doc, el)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> (Document, NodeId) {
        let doc = Document::from_markup(r#"<div id="panel">content</div>"#);
        let el = crate::lookup::by_id(&doc, "panel").unwrap();
        (doc, el)
    }

    #[test]
    fn untouched_element_reads_visible() {
        let (doc, el) = panel();
        assert!(is_visible(&doc, el));
    }

    #[test]
    fn hide_then_show_round_trip() {
        let (mut doc, el) = panel();
        hide(&mut doc, el);
        assert!(!is_visible(&doc, el));
        assert_eq!(doc.attr(el, "style"), Some("display: none"));

        show(&mut doc, el);
        assert!(is_visible(&doc, el));
        assert_eq!(doc.attr(el, "style"), Some("display: block"));
    }

    #[test]
    fn show_discards_prior_display_value() {
        let mut doc = Document::from_markup(r#"<div id="p" style="display: flex; color: red">x</div>"#);
        let el = crate::lookup::by_id(&doc, "p").unwrap();
        show(&mut doc, el);
        assert_eq!(
            doc.attr(el, "style"),
            Some("display: block; color: red"),
            "other inline properties must survive"
        );
    }

    #[test]
    fn set_visible_returns_resulting_state() {
        let (mut doc, el) = panel();
        assert!(!set_visible(&mut doc, el, false));
        assert!(!is_visible(&doc, el));
        assert!(set_visible(&mut doc, el, true));
        assert!(is_visible(&doc, el));
    }

    #[test]
    fn non_none_display_reads_visible() {
        let doc = Document::from_markup(r#"<div id="p" style="display: inline">x</div>"#);
        let el = crate::lookup::by_id(&doc, "p").unwrap();
        assert!(is_visible(&doc, el));
    }
}
