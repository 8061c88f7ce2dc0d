//! The two backend strategies.
//!
//! [`StringBackend`] concatenates escaped markup directly; [`TreeBackend`]
//! builds real nodes in an arena DOM tree. Identical call sequences through
//! [`crate::cursor::BuilderCore`] produce byte-identical serialized output
//! on both.

mod string;
mod tree;

pub use string::StringBackend;
pub use tree::{BuiltElement, TreeBackend};
