//! Argument graph storage, structural validation, and restrictions.

pub mod restriction;
pub mod stable_graph;
pub mod validation;

pub use restriction::Restriction;
pub use stable_graph::{ArgumentGraph, ArgumentNode, RelationEdge};
