//! # argex-branches
//!
//! Classifies the sub-trees hanging under a target argument into six branch
//! categories (pro, con, their unweakened cores, and the branches weakening
//! those cores) and orders them under three ranking heuristics.

pub mod branch;
pub mod extraction;
pub mod polarity;
pub mod ranking;

pub use branch::{Branch, BranchSet};
pub use extraction::BranchExtractor;
pub use polarity::PolarityMap;
pub use ranking::{BranchRanker, RankedBranchSet, RankedCategory};
