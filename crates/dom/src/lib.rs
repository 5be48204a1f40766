pub mod serialize;
pub mod tree;
pub mod types;

mod builder;
mod entities;
mod tokenizer;

pub use crate::serialize::inner_markup;
pub use crate::tokenizer::{Token, tokenize};
pub use crate::tree::Document;
pub use crate::types::{Attr, ElementData, Node, NodeData, NodeId};
