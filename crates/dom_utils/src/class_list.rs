//! Class-list membership on the whitespace-separated `class` attribute.
//!
//! All writes re-serialize the token list without duplicates; adding a
//! present class and removing an absent one are no-ops, never errors.

use dom::{Document, NodeId};

fn class_tokens(doc: &Document, el: NodeId) -> Vec<String> {
    doc.attr(el, "class")
        .map(|list| list.split_whitespace().map(String::from).collect())
        .unwrap_or_default()
}

fn write_tokens(doc: &mut Document, el: NodeId, tokens: &[String]) {
    doc.set_attr(el, "class", &tokens.join(" "));
}

/// Add every class in `classes`; duplicates are no-ops.
pub fn add_class(doc: &mut Document, el: NodeId, classes: &[&str]) {
    let mut tokens = class_tokens(doc, el);
    for class in classes {
        if !tokens.iter().any(|t| t == class) {
            tokens.push((*class).to_string());
        }
    }
    write_tokens(doc, el, &tokens);
}

/// Remove every class in `classes`; missing names are no-ops.
pub fn remove_class(doc: &mut Document, el: NodeId, classes: &[&str]) {
    let mut tokens = class_tokens(doc, el);
    tokens.retain(|t| !classes.contains(&t.as_str()));
    write_tokens(doc, el, &tokens);
}

/// Remove `to_remove` and add `to_add`, unconditionally — prior membership
/// of either class does not matter.
pub fn swap_class(doc: &mut Document, el: NodeId, to_remove: &str, to_add: &str) {
    remove_class(doc, el, &[to_remove]);
    add_class(doc, el, &[to_add]);
}

/// Flip membership of `class`.
pub fn toggle_class(doc: &mut Document, el: NodeId, class: &str) {
    if has_class(doc, el, class) {
        remove_class(doc, el, &[class]);
    } else {
        add_class(doc, el, &[class]);
    }
}

/// Force membership of every class in `classes` to match `present`;
/// returns the resulting membership state (always equal to `present`).
pub fn ensure_class(doc: &mut Document, el: NodeId, present: bool, classes: &[&str]) -> bool {
    if present {
        add_class(doc, el, classes);
    } else {
        remove_class(doc, el, classes);
    }
    present
}

/// Read-only membership query.
pub fn has_class(doc: &Document, el: NodeId, class: &str) -> bool {
    doc.attr(el, "class")
        .is_some_and(|list| list.split_whitespace().any(|c| c == class))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el_with(class_attr: &str) -> (Document, NodeId) {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        if !class_attr.is_empty() {
            doc.set_attr(el, "class", class_attr);
        }
        (doc, el)
    }

    #[test]
    fn add_is_idempotent_and_variadic() {
        let (mut doc, el) = el_with("a");
        add_class(&mut doc, el, &["a", "b", "c"]);
        assert_eq!(doc.attr(el, "class"), Some("a b c"));
        add_class(&mut doc, el, &["b"]);
        assert_eq!(doc.attr(el, "class"), Some("a b c"));
    }

    #[test]
    fn remove_missing_is_noop() {
        let (mut doc, el) = el_with("a b");
        remove_class(&mut doc, el, &["b", "zz"]);
        assert_eq!(doc.attr(el, "class"), Some("a"));
    }

    #[test]
    fn add_then_remove_restores_membership() {
        let (mut doc, el) = el_with("keep");
        add_class(&mut doc, el, &["temp"]);
        remove_class(&mut doc, el, &["temp"]);
        assert!(has_class(&doc, el, "keep"));
        assert!(!has_class(&doc, el, "temp"));
    }

    #[test]
    fn swap_is_exclusive_regardless_of_prior_state() {
        let (mut doc, el) = el_with("a");
        swap_class(&mut doc, el, "a", "b");
        assert!(!has_class(&doc, el, "a"));
        assert!(has_class(&doc, el, "b"));

        // Target already present: still exactly one `b`, no `a`.
        let (mut doc, el) = el_with("a b");
        swap_class(&mut doc, el, "a", "b");
        assert_eq!(doc.attr(el, "class"), Some("b"));
    }

    #[test]
    fn toggle_flips_membership() {
        let (mut doc, el) = el_with("");
        toggle_class(&mut doc, el, "on");
        assert!(has_class(&doc, el, "on"));
        toggle_class(&mut doc, el, "on");
        assert!(!has_class(&doc, el, "on"));
    }

    #[test]
    fn ensure_forces_membership_and_reports_it() {
        let (mut doc, el) = el_with("x");
        assert!(ensure_class(&mut doc, el, true, &["a", "b"]));
        assert!(has_class(&doc, el, "a") && has_class(&doc, el, "b"));

        assert!(!ensure_class(&mut doc, el, false, &["a", "b"]));
        assert!(!has_class(&doc, el, "a") && !has_class(&doc, el, "b"));
        assert!(has_class(&doc, el, "x"));
    }

    #[test]
    fn has_class_on_classless_element_is_false() {
        let (doc, el) = el_with("");
        assert!(!has_class(&doc, el, "any"));
    }
}
