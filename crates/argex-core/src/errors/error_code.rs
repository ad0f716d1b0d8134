//! Stable error codes for report rows and batch failure records.

/// Every error enum implements this to expose a machine-readable code.
pub trait ArgexErrorCode {
    /// Returns the error code string (e.g., "CYCLIC_STRUCTURE").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CYCLIC_STRUCTURE: &str = "CYCLIC_STRUCTURE";
pub const MULTIPLE_SUCCESSORS: &str = "MULTIPLE_SUCCESSORS";
pub const DANGLING_EDGE: &str = "DANGLING_EDGE";
pub const SELF_LOOP: &str = "SELF_LOOP";
pub const DUPLICATE_ARGUMENT: &str = "DUPLICATE_ARGUMENT";
pub const UNKNOWN_ARGUMENT: &str = "UNKNOWN_ARGUMENT";
pub const MISSING_WEIGHT: &str = "MISSING_WEIGHT";
pub const WEIGHT_OUT_OF_RANGE: &str = "WEIGHT_OUT_OF_RANGE";
pub const TARGET_NOT_FOUND: &str = "TARGET_NOT_FOUND";
pub const STEP_LIMIT_EXCEEDED: &str = "STEP_LIMIT_EXCEEDED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const TARGET_UNRESOLVED: &str = "TARGET_UNRESOLVED";
