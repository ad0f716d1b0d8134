//! Batch pipeline configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Worker threads. 0 or unset lets rayon decide.
    pub threads: Option<usize>,
    /// Folder of sub-debate JSON files. Default: `sub-debates`.
    pub input_dir: Option<PathBuf>,
    /// Folder the JSON-lines reports are written to. Default: `argex-reports`.
    pub output_dir: Option<PathBuf>,
    /// Fall back to in-degree target inference when a file name carries no
    /// target. Default: false.
    pub infer_missing_targets: Option<bool>,
}

impl PipelineConfig {
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(defaults::DEFAULT_THREADS)
    }

    pub fn effective_input_dir(&self) -> PathBuf {
        self.input_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::DEFAULT_INPUT_DIR))
    }

    pub fn effective_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::DEFAULT_OUTPUT_DIR))
    }

    pub fn effective_infer_missing_targets(&self) -> bool {
        self.infer_missing_targets
            .unwrap_or(defaults::DEFAULT_INFER_MISSING_TARGETS)
    }
}
