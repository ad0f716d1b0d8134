//! Error handling for argex.
//! One error enum per concern, `thiserror` only.

pub mod argex_error;
pub mod config_error;
pub mod error_code;
pub mod load_error;
pub mod search_error;
pub mod structure_error;
pub mod weight_error;

pub use argex_error::{ArgexError, ArgexResult};
pub use config_error::ConfigError;
pub use error_code::ArgexErrorCode;
pub use load_error::LoadError;
pub use search_error::SearchError;
pub use structure_error::StructureError;
pub use weight_error::{WeightError, WeightKind};
