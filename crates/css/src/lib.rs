pub mod selector;
pub mod style;

pub use crate::selector::{
    Combinator, ComplexSelector, CompoundSelector, SimpleSelector, matches, parse_selector_list,
};
pub use crate::style::{
    Declaration, get_property, parse_declarations, serialize_declarations, set_property,
};
