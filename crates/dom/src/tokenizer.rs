//! Simplified markup tokenizer with a constrained, practical tag-name
//! character set.
//!
//! Supported tag/attribute-name characters (ASCII only): `[A-Za-z0-9:_-]`.
//! This is not a full HTML5 state machine; the constraint keeps tokenization
//! fast and allocation-light, which is all the fragment operations need.
//!
//! Known limitations (intentional):
//! - No spec parse-error recovery; unterminated constructs close at end of
//!   input.
//! - Rawtext close-tag scanning accepts only ASCII whitespace before `>`.

use memchr::memchr;

use crate::entities::decode_entities;

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

// Only matched starting at an ASCII `<`, which cannot appear in UTF-8
// continuation bytes, so byte-wise scanning stays on char boundaries.
const SCRIPT_CLOSE_TAG: &[u8] = b"</script";
const STYLE_CLOSE_TAG: &[u8] = b"</style";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Doctype(String),
    StartTag {
        name: String,
        attributes: Vec<(String, Option<String>)>,
        self_closing: bool,
    },
    EndTag(String),
    Comment(String),
    Text(String),
}

pub(crate) fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

fn starts_with_ignore_ascii_case_at(haystack: &[u8], start: usize, needle: &[u8]) -> bool {
    haystack.len() >= start + needle.len()
        && haystack[start..start + needle.len()].eq_ignore_ascii_case(needle)
}

fn find_rawtext_close_tag(haystack: &str, close_tag: &[u8]) -> Option<(usize, usize)> {
    let bytes = haystack.as_bytes();
    let len = bytes.len();
    let n = close_tag.len();
    let mut i = 0;
    while i + n <= len {
        let rel = memchr(b'<', &bytes[i..])?;
        i += rel;
        if i + n > len {
            return None;
        }
        if bytes[i + 1] == b'/' && starts_with_ignore_ascii_case_at(bytes, i, close_tag) {
            let mut k = i + n;
            while k < len && bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            if k < len && bytes[k] == b'>' {
                return Some((i, k + 1));
            }
        }
        i += 1;
    }
    None
}

fn emit(out: &mut Vec<Token>, token: Token) {
    log::trace!(target: "dom.tokenizer", "emit token: {token:?}");
    out.push(token);
}

/// Tokenize `input` into a flat token stream. Never fails.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    // Invariant: slices are only cut at ASCII structural bytes, so every slice
    // endpoint is a UTF-8 char boundary.
    while i < len {
        if bytes[i] != b'<' {
            let start = i;
            i = match memchr(b'<', &bytes[i..]) {
                Some(rel) => i + rel,
                None => len,
            };
            let decoded = decode_entities(&input[start..i]);
            if !decoded.is_empty() {
                emit(&mut out, Token::Text(decoded));
            }
            continue;
        }

        if input[i..].starts_with(COMMENT_START) {
            let body_start = i + COMMENT_START.len();
            match input[body_start..].find(COMMENT_END) {
                Some(end) => {
                    emit(
                        &mut out,
                        Token::Comment(input[body_start..body_start + end].to_string()),
                    );
                    i = body_start + end + COMMENT_END.len();
                }
                None => {
                    emit(&mut out, Token::Comment(input[body_start..].to_string()));
                    i = len;
                }
            }
            continue;
        }

        if starts_with_ignore_ascii_case_at(bytes, i, b"<!doctype") {
            let body_start = i + b"<!doctype".len();
            match input[body_start..].find('>') {
                Some(end) => {
                    emit(
                        &mut out,
                        Token::Doctype(input[body_start..body_start + end].trim().to_string()),
                    );
                    i = body_start + end + 1;
                }
                None => i = len,
            }
            continue;
        }

        // End tag.
        if i + 2 <= len && bytes[i + 1] == b'/' {
            let start = i + 2;
            let mut j = start;
            while j < len && is_name_byte(bytes[j]) {
                j += 1;
            }
            let name = input[start..j].to_ascii_lowercase();
            while j < len && bytes[j] != b'>' {
                j += 1;
            }
            if j < len {
                j += 1;
            }
            if !name.is_empty() {
                emit(&mut out, Token::EndTag(name));
            }
            i = j;
            continue;
        }

        // Start tag; a `<` not followed by a name byte is plain text.
        let start = i + 1;
        if start >= len || !is_name_byte(bytes[start]) {
            emit(&mut out, Token::Text("<".to_string()));
            i += 1;
            continue;
        }
        let mut j = start;
        while j < len && is_name_byte(bytes[j]) {
            j += 1;
        }
        let name = input[start..j].to_ascii_lowercase();

        let mut attributes: Vec<(String, Option<String>)> = Vec::new();
        let mut self_closing = false;
        let mut k = j;
        loop {
            while k < len && bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            if k >= len {
                break;
            }
            if bytes[k] == b'>' {
                k += 1;
                break;
            }
            if bytes[k] == b'/' {
                if k + 1 < len && bytes[k + 1] == b'>' {
                    self_closing = true;
                    k += 2;
                    break;
                }
                k += 1;
                continue;
            }

            let name_start = k;
            while k < len && is_name_byte(bytes[k]) {
                k += 1;
            }
            if name_start == k {
                k += 1;
                continue;
            }
            let attr_name = input[name_start..k].to_ascii_lowercase();

            while k < len && bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            let value = if k < len && bytes[k] == b'=' {
                k += 1;
                while k < len && bytes[k].is_ascii_whitespace() {
                    k += 1;
                }
                if k < len && (bytes[k] == b'"' || bytes[k] == b'\'') {
                    let quote = bytes[k];
                    k += 1;
                    let vstart = k;
                    while k < len && bytes[k] != quote {
                        k += 1;
                    }
                    let raw = &input[vstart..k];
                    if k < len {
                        k += 1;
                    }
                    Some(decode_entities(raw))
                } else {
                    let vstart = k;
                    while k < len && !bytes[k].is_ascii_whitespace() && bytes[k] != b'>' {
                        if bytes[k] == b'/' && k + 1 < len && bytes[k + 1] == b'>' {
                            break;
                        }
                        k += 1;
                    }
                    Some(decode_entities(&input[vstart..k]))
                }
            } else {
                None
            };
            attributes.push((attr_name, value));
        }

        if is_void_element(&name) {
            self_closing = true;
        }

        let rawtext = (name == "script" || name == "style") && !self_closing;
        emit(
            &mut out,
            Token::StartTag {
                name: name.clone(),
                attributes,
                self_closing,
            },
        );

        if rawtext {
            let close_tag = if name == "script" {
                SCRIPT_CLOSE_TAG
            } else {
                STYLE_CLOSE_TAG
            };
            match find_rawtext_close_tag(&input[k..], close_tag) {
                Some((rel_start, rel_end)) => {
                    let raw = &input[k..k + rel_start];
                    if !raw.is_empty() {
                        emit(&mut out, Token::Text(raw.to_string()));
                    }
                    emit(&mut out, Token::EndTag(name));
                    i = k + rel_end;
                }
                None => {
                    // Close tag missing: emit an implicit end tag and treat
                    // the remainder as rawtext content.
                    let raw = &input[k..];
                    if !raw.is_empty() {
                        emit(&mut out, Token::Text(raw.to_string()));
                    }
                    emit(&mut out, Token::EndTag(name));
                    i = len;
                }
            }
            continue;
        }

        i = k;
    }

    out
}
