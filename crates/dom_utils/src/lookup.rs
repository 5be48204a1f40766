//! Element lookup.
//!
//! Multi-result lookups return materialized `Vec` snapshots in document
//! order: stable, indexable, and immune to later tree mutation. Single
//! lookups return the first match in tree order, `None` on a miss.

use css::{matches, parse_selector_list};
use dom::{Document, NodeId};

fn elements_under(doc: &Document, root: NodeId) -> impl Iterator<Item = NodeId> {
    doc.descendants(root)
        .into_iter()
        .filter(|&id| doc.is_element(id))
}

/// First element whose `id` attribute equals `id`, searching the whole
/// document. `None` when nothing matches.
pub fn by_id(doc: &Document, id: &str) -> Option<NodeId> {
    elements_under(doc, doc.root()).find(|&el| doc.attr(el, "id") == Some(id))
}

/// All elements carrying `class`, in document order.
pub fn by_class_name(doc: &Document, class: &str) -> Vec<NodeId> {
    elements_under(doc, doc.root())
        .filter(|&el| {
            doc.attr(el, "class")
                .is_some_and(|list| list.split_whitespace().any(|c| c == class))
        })
        .collect()
}

/// All elements with the given tag name (ASCII-case-insensitive), in
/// document order.
pub fn by_tag_name(doc: &Document, tag: &str) -> Vec<NodeId> {
    elements_under(doc, doc.root())
        .filter(|&el| {
            doc.tag_name(el)
                .is_some_and(|name| name.eq_ignore_ascii_case(tag))
        })
        .collect()
}

/// First element in the document matching `selector`.
pub fn query(doc: &Document, selector: &str) -> Option<NodeId> {
    query_within(doc, doc.root(), selector)
}

/// First descendant of `root` matching `selector`. The root itself is never
/// a candidate.
pub fn query_within(doc: &Document, root: NodeId, selector: &str) -> Option<NodeId> {
    let selectors = parse_selector_list(selector);
    if selectors.is_empty() {
        return None;
    }
    elements_under(doc, root).find(|&el| selectors.iter().any(|sel| matches(doc, el, sel)))
}

/// All elements in the document matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Vec<NodeId> {
    query_all_within(doc, doc.root(), selector)
}

/// All descendants of `root` matching `selector`, in document order.
pub fn query_all_within(doc: &Document, root: NodeId, selector: &str) -> Vec<NodeId> {
    let selectors = parse_selector_list(selector);
    if selectors.is_empty() {
        return Vec::new();
    }
    elements_under(doc, root)
        .filter(|&el| selectors.iter().any(|sel| matches(doc, el, sel)))
        .collect()
}

/// The element child of `parent` at the given zero-based position, counting
/// element children only. Out-of-range indexes yield `None`.
pub fn child(doc: &Document, parent: NodeId, index: usize) -> Option<NodeId> {
    doc.element_children(parent).get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::from_markup(
            r#"<div id="panel" class="box">
                 text
                 <ul class="menu">
                   <li class="item">one</li>
                   <li class="item hot">two</li>
                 </ul>
                 <span class="item">loose</span>
               </div>"#,
        )
    }

    #[test]
    fn by_id_finds_first_match_or_none() {
        let doc = sample();
        let panel = by_id(&doc, "panel").unwrap();
        assert_eq!(doc.tag_name(panel), Some("div"));
        assert_eq!(by_id(&doc, "absent"), None);
    }

    #[test]
    fn by_class_name_returns_document_order() {
        let doc = sample();
        let items = by_class_name(&doc, "item");
        assert_eq!(items.len(), 3);
        assert_eq!(doc.tag_name(items[0]), Some("li"));
        assert_eq!(doc.tag_name(items[2]), Some("span"));
        assert!(by_class_name(&doc, "absent").is_empty());
    }

    #[test]
    fn by_tag_name_is_case_insensitive() {
        let doc = sample();
        assert_eq!(by_tag_name(&doc, "LI").len(), 2);
        assert!(by_tag_name(&doc, "table").is_empty());
    }

    #[test]
    fn query_returns_first_in_tree_order() {
        let doc = sample();
        let first = query(&doc, ".item").unwrap();
        assert_eq!(doc.text_content(first), "one");
        assert_eq!(query(&doc, "#nope"), None);
    }

    #[test]
    fn query_within_excludes_the_root_itself() {
        let doc = sample();
        let ul = query(&doc, "ul").unwrap();
        assert_eq!(query_within(&doc, ul, "ul"), None);
        assert_eq!(query_all_within(&doc, ul, ".item").len(), 2);
    }

    #[test]
    fn query_all_supports_lists_and_combinators() {
        let doc = sample();
        assert_eq!(query_all(&doc, "ul > li").len(), 2);
        assert_eq!(query_all(&doc, "#panel .hot, span").len(), 2);
        assert!(query_all(&doc, "ul > span").is_empty());
    }

    #[test]
    fn invalid_selector_matches_nothing() {
        let doc = sample();
        assert_eq!(query(&doc, "!!"), None);
        assert!(query_all(&doc, "!!").is_empty());
    }

    #[test]
    fn child_indexes_element_children_only() {
        let doc = sample();
        let panel = by_id(&doc, "panel").unwrap();
        // First node child is a text run; element index 0 is the <ul>.
        let ul = child(&doc, panel, 0).unwrap();
        assert_eq!(doc.tag_name(ul), Some("ul"));
        let span = child(&doc, panel, 1).unwrap();
        assert_eq!(doc.tag_name(span), Some("span"));
        assert_eq!(child(&doc, panel, 2), None);
    }
}
