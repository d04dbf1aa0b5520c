//! Checkers move generation: per-piece move trees, path flattening and the
//! mandatory-capture rule.

pub mod generator;
pub mod node;
pub mod path;


pub use generator::PathMap;
pub use node::{MoveTree, Node, NodeId};
pub use path::{Path, Step};
