//! Compiled defaults for every config field.

use crate::constants;

pub const DEFAULT_DERIVE_MISSING_INITIAL_WEIGHTS: bool = true;
pub const DEFAULT_NEUTRAL_WEIGHT: f64 = constants::NEUTRAL_INITIAL_WEIGHT;
pub const DEFAULT_VALIDATE_WEIGHT_RANGE: bool = true;

pub const DEFAULT_MAX_STEPS: usize = constants::DEFAULT_MAX_SEARCH_STEPS;
pub const DEFAULT_VERIFY_EXPLANATIONS: bool = true;

/// 0 lets rayon pick the thread count.
pub const DEFAULT_THREADS: usize = 0;
pub const DEFAULT_INFER_MISSING_TARGETS: bool = false;
pub const DEFAULT_INPUT_DIR: &str = "sub-debates";
pub const DEFAULT_OUTPUT_DIR: &str = "argex-reports";

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
