//! # argex-pipeline
//!
//! Everything around the core computation: reading debate files, splitting a
//! debate into one sub-debate per target, running each (debate, target) unit
//! on a rayon pool, and writing the interchange rows as JSON lines.

pub mod batch;
pub mod filter;
pub mod loader;
pub mod rows;
pub mod subdebate;
pub mod targets;
pub mod tracing;
pub mod unit;

pub use batch::{BatchReport, BatchRunner};
pub use filter::{classify_recorded, FilterReason};
pub use loader::{list_debate_files, load_debate, load_unit, parse_debate, save_debate};
pub use rows::{BranchRankingRow, ExplanationRow, FailureRow, SizeRow, StrategyColumns};
pub use subdebate::extract_subdebates;
pub use targets::{debate_id_from_name, infer_target_by_in_degree, target_from_name};
pub use unit::{process_unit, DebateUnit, UnitReport};
