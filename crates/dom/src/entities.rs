//! Minimal, explicitly limited entity decoding.
//!
//! Contract:
//! - Named entities decoded: `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`,
//!   `&nbsp;`.
//! - Numeric entities decoded only when well-formed and semicolon-terminated:
//!   `&#123;` (decimal) and `&#x1F4A9;` (hex). Invalid scalar values pass
//!   through unchanged.
//! - Missing semicolons, unknown names, and malformed numerics are left
//!   unchanged.
//!
//! Intentionally not HTML5-spec-complete; keep the behavior narrow and stable.

use memchr::memchr;

const NAMED: [(&str, char); 6] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&apos;", '\''),
    ("&nbsp;", '\u{a0}'),
];

const MAX_HEX_DIGITS: usize = 6; // 0x10FFFF
const MAX_DEC_DIGITS: usize = 7; // 1114111

// Bounded scan so adversarial input cannot trigger quadratic rescans.
fn scan_numeric(bytes: &[u8], start: usize, max_digits: usize, hex: bool) -> Option<usize> {
    let mut j = start;
    let mut digits = 0usize;
    while j < bytes.len() {
        let b = bytes[j];
        if b == b';' {
            return (digits > 0).then_some(j);
        }
        if digits == max_digits {
            return None;
        }
        let ok = if hex {
            b.is_ascii_hexdigit()
        } else {
            b.is_ascii_digit()
        };
        if !ok {
            return None;
        }
        digits += 1;
        j += 1;
    }
    None
}

// Decode a numeric reference starting at the `&`. Returns the decoded char
// and the index just past the `;`.
fn decode_numeric(s: &str, amp: usize) -> Option<(char, usize)> {
    let bytes = s.as_bytes();
    let after_hash = amp + 2;
    if bytes.get(amp + 1) != Some(&b'#') {
        return None;
    }
    let (digit_start, hex) = match bytes.get(after_hash) {
        Some(b'x') | Some(b'X') => (after_hash + 1, true),
        _ => (after_hash, false),
    };
    let max = if hex { MAX_HEX_DIGITS } else { MAX_DEC_DIGITS };
    let semi = scan_numeric(bytes, digit_start, max, hex)?;
    let radix = if hex { 16 } else { 10 };
    let code = u32::from_str_radix(&s[digit_start..semi], radix).ok()?;
    let ch = char::from_u32(code)?;
    Some((ch, semi + 1))
}

pub(crate) fn decode_entities(s: &str) -> String {
    let bytes = s.as_bytes();
    if memchr(b'&', bytes).is_none() {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < bytes.len() {
        let Some(rel) = memchr(b'&', &bytes[i..]) else {
            out.push_str(&s[i..]);
            break;
        };
        let amp = i + rel;
        out.push_str(&s[i..amp]);

        if let Some((name, ch)) = NAMED.iter().find(|(name, _)| s[amp..].starts_with(name)) {
            out.push(*ch);
            i = amp + name.len();
            continue;
        }
        if let Some((ch, next)) = decode_numeric(s, amp) {
            out.push(ch);
            i = next;
            continue;
        }
        // Malformed or unknown reference: pass the `&` through unchanged.
        out.push('&');
        i = amp + 1;
    }
    out
}
