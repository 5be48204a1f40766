//! Inline style declarations.
//!
//! The `style=""` attribute is parsed into a flat declaration list and
//! written back with one canonical `name: value; …` spelling.

/// A single property: `display: none`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

/// input:  `"color: red; font-size: 12px;"`
/// output: `[{color, red}, {font-size, 12px}]`
pub fn parse_declarations(input: &str) -> Vec<Declaration> {
    input
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.split_once(':')?;
            let name = name.trim().to_ascii_lowercase();
            if name.is_empty() {
                return None;
            }
            Some(Declaration {
                name,
                value: value.trim().to_string(),
            })
        })
        .collect()
}

pub fn serialize_declarations(decls: &[Declaration]) -> String {
    decls
        .iter()
        .map(|d| format!("{}: {}", d.name, d.value))
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn get_property<'a>(decls: &'a [Declaration], name: &str) -> Option<&'a str> {
    decls
        .iter()
        .find(|d| d.name.eq_ignore_ascii_case(name))
        .map(|d| d.value.as_str())
}

/// Replace the value of `name` in place, or append the declaration.
pub fn set_property(decls: &mut Vec<Declaration>, name: &str, value: &str) {
    let name = name.to_ascii_lowercase();
    match decls.iter_mut().find(|d| d.name == name) {
        Some(decl) => decl.value = value.to_string(),
        None => decls.push(Declaration {
            name,
            value: value.to_string(),
        }),
    }
}
