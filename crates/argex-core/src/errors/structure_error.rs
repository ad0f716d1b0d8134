//! Structural errors detected once, when a debate is turned into a graph.

use super::error_code::{self, ArgexErrorCode};

/// The relation structure is not a forest of in-trees.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StructureError {
    #[error("cycle detected in relation structure: {path}")]
    CyclicStructure { path: String },

    #[error("argument {node_id} declares more than one successor: {successors:?}")]
    MultipleSuccessors {
        node_id: String,
        successors: Vec<String>,
    },

    #[error("edge {source_id} -> {successor_id} references an undeclared argument")]
    DanglingEdge {
        source_id: String,
        successor_id: String,
    },

    #[error("argument {node_id} relates to itself")]
    SelfLoop { node_id: String },

    #[error("argument {node_id} is declared more than once")]
    DuplicateArgument { node_id: String },

    #[error("argument {node_id} is not part of the graph")]
    UnknownArgument { node_id: String },
}

impl ArgexErrorCode for StructureError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CyclicStructure { .. } => error_code::CYCLIC_STRUCTURE,
            Self::MultipleSuccessors { .. } => error_code::MULTIPLE_SUCCESSORS,
            Self::DanglingEdge { .. } => error_code::DANGLING_EDGE,
            Self::SelfLoop { .. } => error_code::SELF_LOOP,
            Self::DuplicateArgument { .. } => error_code::DUPLICATE_ARGUMENT,
            Self::UnknownArgument { .. } => error_code::UNKNOWN_ARGUMENT,
        }
    }
}
