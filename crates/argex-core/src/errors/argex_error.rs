//! Aggregate error for operations that cross subsystems.

use super::error_code::ArgexErrorCode;
use super::{ConfigError, LoadError, SearchError, StructureError, WeightError};

#[derive(Debug, thiserror::Error)]
pub enum ArgexError {
    #[error("Structure error: {0}")]
    Structure(#[from] StructureError),

    #[error("Weight error: {0}")]
    Weight(#[from] WeightError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),
}

impl ArgexErrorCode for ArgexError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Structure(e) => e.error_code(),
            Self::Weight(e) => e.error_code(),
            Self::Search(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Load(e) => e.error_code(),
        }
    }
}

pub type ArgexResult<T> = Result<T, ArgexError>;
