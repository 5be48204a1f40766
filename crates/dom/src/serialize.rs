//! Markup serialization.
//!
//! The inverse of the fragment builder: children of a node back to a markup
//! string. Text nodes escape `& < >`, attribute values escape `& "`, void
//! elements omit their end tag, and `script`/`style` bodies are written raw.

use crate::tokenizer::is_void_element;
use crate::tree::Document;
use crate::types::{NodeData, NodeId};

/// Serialize the children of `id` in document order. The node's own tag is
/// not included. Missing handles serialize to the empty string.
pub fn inner_markup(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    for child in doc.children(id) {
        serialize_node(doc, child, &mut out);
    }
    out
}

fn serialize_node(doc: &Document, id: NodeId, out: &mut String) {
    let Some(node) = doc.get(id) else {
        return;
    };
    match &node.data {
        NodeData::Document { .. } => {
            for child in doc.children(id) {
                serialize_node(doc, child, out);
            }
        }
        NodeData::Element(el) => {
            out.push('<');
            out.push_str(&el.tag_name);
            for attr in &el.attrs {
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("=\"");
                escape_attr(&attr.value, out);
                out.push('"');
            }
            out.push('>');

            if is_void_element(&el.tag_name) {
                return;
            }
            if el.tag_name == "script" || el.tag_name == "style" {
                for child in doc.children(id) {
                    if let Some(NodeData::Text { text }) = doc.get(child).map(|n| &n.data) {
                        out.push_str(text);
                    }
                }
            } else {
                for child in doc.children(id) {
                    serialize_node(doc, child, out);
                }
            }
            out.push_str("</");
            out.push_str(&el.tag_name);
            out.push('>');
        }
        NodeData::Text { text } => escape_text(text, out),
        NodeData::Comment { text } => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
    }
}

fn escape_text(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
