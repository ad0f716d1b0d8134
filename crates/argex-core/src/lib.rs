//! # argex-core
//!
//! Shared foundation for the argex workspace: argument/relation/debate models,
//! vote aggregation, the error taxonomy, layered configuration, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod votes;

pub use config::ArgexConfig;
pub use errors::{ArgexError, ArgexErrorCode, ArgexResult};
pub use models::{
    Argument, BranchCategory, Debate, Direction, ExplanationStrategy, RankingHeuristic,
    Relation, RelationSign, VoteTally,
};
pub use traits::WeightLookup;
