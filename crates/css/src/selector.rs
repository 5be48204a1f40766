//! Selector parsing and matching.
//!
//! Supported grammar: type, universal, id, and class simple selectors,
//! compounded without whitespace (`div.foo#bar`), chained with descendant
//! (whitespace) and child (`>`) combinators, listed with commas. Attribute
//! and pseudo selectors are out of scope for the lookup surface this backs.

use dom::{Document, NodeId};

/// Combinator between compound selectors in a complex selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    /// Whitespace: ancestor descendant.
    Descendant,
    /// `>`: parent > child.
    Child,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimpleSelector {
    /// Universal selector `*`.
    Universal,
    /// Type selector, e.g. `div` (matched ASCII-case-insensitively).
    Type(String),
    /// ID selector `#foo` (exact match).
    Id(String),
    /// Class selector `.bar` (exact match).
    Class(String),
}

/// A sequence of simple selectors with no combinator between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundSelector {
    pub simples: Vec<SimpleSelector>,
}

/// Compound selectors chained by combinators, stored right-to-left for
/// matching: `parts[0]` is the subject compound, and each part carries the
/// combinator linking it to the part on its left (`None` on the last).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplexSelector {
    pub parts: Vec<(CompoundSelector, Option<Combinator>)>,
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

fn parse_ident(s: &str) -> Option<(&str, &str)> {
    let end = s
        .as_bytes()
        .iter()
        .position(|&b| !is_ident_byte(b))
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    Some((&s[..end], &s[end..]))
}

fn parse_compound(s: &str) -> Option<CompoundSelector> {
    let mut simples = Vec::new();
    let mut rest = s;

    if let Some(stripped) = rest.strip_prefix('*') {
        simples.push(SimpleSelector::Universal);
        rest = stripped;
    } else if let Some((ident, tail)) = parse_ident(rest) {
        simples.push(SimpleSelector::Type(ident.to_ascii_lowercase()));
        rest = tail;
    }

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix('#') {
            let (ident, tail) = parse_ident(tail)?;
            simples.push(SimpleSelector::Id(ident.to_string()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('.') {
            let (ident, tail) = parse_ident(tail)?;
            simples.push(SimpleSelector::Class(ident.to_string()));
            rest = tail;
        } else {
            return None;
        }
    }

    if simples.is_empty() {
        return None;
    }
    Some(CompoundSelector { simples })
}

fn parse_complex(s: &str) -> Option<ComplexSelector> {
    // Normalize `>` into its own token, then split on whitespace; the items
    // alternate between compounds and child combinators.
    let spaced = s.replace('>', " > ");
    let mut parts: Vec<(CompoundSelector, Option<Combinator>)> = Vec::new();
    let mut pending: Option<Combinator> = None;

    for item in spaced.split_whitespace() {
        if item == ">" {
            // `> x`, `x > > y`, and a leading `>` are all malformed.
            if parts.is_empty() || pending.is_some() {
                return None;
            }
            pending = Some(Combinator::Child);
            continue;
        }
        let compound = parse_compound(item)?;
        if let Some(last) = parts.last_mut() {
            last.1 = Some(pending.take().unwrap_or(Combinator::Descendant));
        }
        parts.push((compound, None));
    }

    if parts.is_empty() || pending.is_some() {
        return None;
    }
    parts.reverse();
    // After reversing, each part's combinator must describe the link to the
    // part on its *left* (the next entry), so shift them by one.
    for i in 0..parts.len() {
        parts[i].1 = if i + 1 < parts.len() {
            parts[i + 1].1.take()
        } else {
            None
        };
    }
    Some(ComplexSelector { parts })
}

/// Parse a comma-separated selector list. Unparseable members are skipped,
/// so a fully invalid selector string yields an empty list (and therefore no
/// matches) rather than an error.
pub fn parse_selector_list(input: &str) -> Vec<ComplexSelector> {
    input
        .split(',')
        .filter(|member| !member.trim().is_empty())
        .filter_map(|member| {
            let parsed = parse_complex(member.trim());
            if parsed.is_none() {
                log::debug!(target: "css.selector", "skipping unparseable selector: {member:?}");
            }
            parsed
        })
        .collect()
}

fn matches_simple(doc: &Document, id: NodeId, simple: &SimpleSelector) -> bool {
    match simple {
        SimpleSelector::Universal => doc.is_element(id),
        SimpleSelector::Type(tag) => doc
            .tag_name(id)
            .is_some_and(|name| name.eq_ignore_ascii_case(tag)),
        SimpleSelector::Id(want) => doc.attr(id, "id") == Some(want.as_str()),
        SimpleSelector::Class(want) => doc
            .attr(id, "class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == want)),
    }
}

fn matches_compound(doc: &Document, id: NodeId, compound: &CompoundSelector) -> bool {
    doc.is_element(id)
        && compound
            .simples
            .iter()
            .all(|simple| matches_simple(doc, id, simple))
}

fn matches_from(
    doc: &Document,
    id: NodeId,
    parts: &[(CompoundSelector, Option<Combinator>)],
    index: usize,
) -> bool {
    if !matches_compound(doc, id, &parts[index].0) {
        return false;
    }
    match parts[index].1 {
        None => true,
        Some(Combinator::Child) => doc
            .get(id)
            .and_then(|n| n.parent)
            .is_some_and(|parent| matches_from(doc, parent, parts, index + 1)),
        Some(Combinator::Descendant) => doc
            .ancestors(id)
            .into_iter()
            .any(|ancestor| matches_from(doc, ancestor, parts, index + 1)),
    }
}

/// Does the element `id` match `selector`?
pub fn matches(doc: &Document, id: NodeId, selector: &ComplexSelector) -> bool {
    !selector.parts.is_empty() && matches_from(doc, id, &selector.parts, 0)
}
