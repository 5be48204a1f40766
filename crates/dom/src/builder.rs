//! Fragment builder: token stream → nodes under a given parent.
//!
//! End tags pop the open-element stack to the nearest matching name; stray
//! end tags are dropped. The fragment parent is never popped, so a fragment
//! can never mutate anything above its insertion point.

use crate::tokenizer::Token;
use crate::tree::Document;
use crate::types::NodeId;

pub(crate) fn build_fragment(doc: &mut Document, parent: NodeId, tokens: Vec<Token>) {
    let root = doc.root();
    let mut open: Vec<NodeId> = vec![parent];

    for token in tokens {
        let top = open.last().copied().unwrap_or(parent);
        match token {
            Token::Doctype(doctype) => {
                // Only meaningful when parsing a whole document.
                if parent == root && open.len() == 1 {
                    doc.set_doctype(Some(doctype));
                }
            }
            Token::Comment(text) => {
                let node = doc.create_comment(&text);
                doc.append_child(top, node);
            }
            Token::Text(text) => {
                if !text.is_empty() {
                    let node = doc.create_text(&text);
                    doc.append_child(top, node);
                }
            }
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                let el = doc.create_element(&name);
                for (attr_name, value) in &attributes {
                    doc.set_attr(el, attr_name, value.as_deref().unwrap_or(""));
                }
                doc.append_child(top, el);
                if !self_closing {
                    open.push(el);
                }
            }
            Token::EndTag(name) => {
                let matched = open
                    .iter()
                    .enumerate()
                    .skip(1)
                    .rev()
                    .find(|&(_, &id)| {
                        doc.tag_name(id)
                            .is_some_and(|tag| tag.eq_ignore_ascii_case(&name))
                    })
                    .map(|(index, _)| index);
                if let Some(index) = matched {
                    open.truncate(index);
                }
            }
        }
    }
}
