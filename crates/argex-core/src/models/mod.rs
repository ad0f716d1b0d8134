//! Value types shared by every argex crate.

pub mod argument;
pub mod branch_category;
pub mod debate;
pub mod direction;
pub mod heuristic;
pub mod relation;
pub mod strategy;

pub use argument::{Argument, VoteTally};
pub use branch_category::{BranchCategory, Polarity};
pub use debate::Debate;
pub use direction::Direction;
pub use heuristic::RankingHeuristic;
pub use relation::{Relation, RelationSign};
pub use strategy::ExplanationStrategy;
