use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Fallback log level when `ARGEX_LOG` is unset. Default: "info".
    pub log_level: Option<String>,
}

impl ObservabilityConfig {
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(defaults::DEFAULT_LOG_LEVEL)
    }
}
