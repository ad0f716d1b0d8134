//! Top-level argex configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{defaults, ObservabilityConfig, PipelineConfig, PropagationConfig, SearchConfig};
use crate::constants::{CONFIG_FILE_NAME, ENV_PREFIX};
use crate::errors::ConfigError;
use crate::models::{ExplanationStrategy, RankingHeuristic};

/// Resolution order (highest priority first):
/// 1. CLI flags (`CliOverrides`)
/// 2. Environment variables (`ARGEX_*`)
/// 3. Project config (`argex.toml` in the config root)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ArgexConfig {
    pub propagation: PropagationConfig,
    pub search: SearchConfig,
    pub pipeline: PipelineConfig,
    pub observability: ObservabilityConfig,
}

/// Overrides supplied by a front end, applied last.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub threads: Option<usize>,
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub max_steps: Option<usize>,
    pub heuristics: Option<Vec<RankingHeuristic>>,
    pub infer_missing_targets: Option<bool>,
}

impl ArgexConfig {
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Parse a TOML string without touching the environment.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    pub fn validate(config: &ArgexConfig) -> Result<(), ConfigError> {
        if let Some(neutral) = config.propagation.neutral_weight {
            if !(0.0..=1.0).contains(&neutral) {
                return Err(ConfigError::ValidationFailed {
                    field: "propagation.neutral_weight".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if config.search.max_steps == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "search.max_steps".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref level) = config.observability.log_level {
            if !defaults::VALID_LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "observability.log_level".to_string(),
                    message: format!("must be one of {:?}", defaults::VALID_LOG_LEVELS),
                });
            }
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut ArgexConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ArgexConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Values set in `other` win over `base`.
    fn merge(base: &mut ArgexConfig, other: &ArgexConfig) {
        // Propagation
        if other.propagation.derive_missing_initial_weights.is_some() {
            base.propagation.derive_missing_initial_weights =
                other.propagation.derive_missing_initial_weights;
        }
        if other.propagation.neutral_weight.is_some() {
            base.propagation.neutral_weight = other.propagation.neutral_weight;
        }
        if other.propagation.validate_weight_range.is_some() {
            base.propagation.validate_weight_range = other.propagation.validate_weight_range;
        }

        // Search
        if !other.search.heuristics.is_empty() {
            base.search.heuristics = other.search.heuristics.clone();
        }
        if !other.search.strategies.is_empty() {
            base.search.strategies = other.search.strategies.clone();
        }
        if other.search.max_steps.is_some() {
            base.search.max_steps = other.search.max_steps;
        }
        if other.search.verify_explanations.is_some() {
            base.search.verify_explanations = other.search.verify_explanations;
        }

        // Pipeline
        if other.pipeline.threads.is_some() {
            base.pipeline.threads = other.pipeline.threads;
        }
        if other.pipeline.input_dir.is_some() {
            base.pipeline.input_dir = other.pipeline.input_dir.clone();
        }
        if other.pipeline.output_dir.is_some() {
            base.pipeline.output_dir = other.pipeline.output_dir.clone();
        }
        if other.pipeline.infer_missing_targets.is_some() {
            base.pipeline.infer_missing_targets = other.pipeline.infer_missing_targets;
        }

        // Observability
        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
    }

    /// Pattern: `ARGEX_SEARCH_MAX_STEPS`, `ARGEX_PIPELINE_THREADS`, etc.
    /// Unparseable numeric or boolean values are ignored; an unknown
    /// heuristic or strategy name is an error.
    fn apply_env_overrides(config: &mut ArgexConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_parse::<bool>("PROPAGATION_DERIVE_MISSING_INITIAL_WEIGHTS") {
            config.propagation.derive_missing_initial_weights = Some(v);
        }
        if let Some(v) = env_parse::<f64>("PROPAGATION_NEUTRAL_WEIGHT") {
            config.propagation.neutral_weight = Some(v);
        }
        if let Some(v) = env_parse::<usize>("SEARCH_MAX_STEPS") {
            config.search.max_steps = Some(v);
        }
        if let Some(v) = env_parse::<bool>("SEARCH_VERIFY_EXPLANATIONS") {
            config.search.verify_explanations = Some(v);
        }
        if let Some(raw) = env_var("SEARCH_HEURISTICS") {
            config.search.heuristics = parse_list::<RankingHeuristic>("search.heuristics", &raw)?;
        }
        if let Some(raw) = env_var("SEARCH_STRATEGIES") {
            config.search.strategies =
                parse_list::<ExplanationStrategy>("search.strategies", &raw)?;
        }
        if let Some(v) = env_parse::<usize>("PIPELINE_THREADS") {
            config.pipeline.threads = Some(v);
        }
        if let Some(v) = env_var("PIPELINE_INPUT_DIR") {
            config.pipeline.input_dir = Some(PathBuf::from(v));
        }
        if let Some(v) = env_var("PIPELINE_OUTPUT_DIR") {
            config.pipeline.output_dir = Some(PathBuf::from(v));
        }
        if let Some(v) = env_parse::<bool>("PIPELINE_INFER_MISSING_TARGETS") {
            config.pipeline.infer_missing_targets = Some(v);
        }
        if let Some(v) = env_var("LOG_LEVEL") {
            config.observability.log_level = Some(v);
        }
        Ok(())
    }

    fn apply_cli_overrides(config: &mut ArgexConfig, cli: &CliOverrides) {
        if let Some(v) = cli.threads {
            config.pipeline.threads = Some(v);
        }
        if let Some(ref v) = cli.input_dir {
            config.pipeline.input_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.output_dir {
            config.pipeline.output_dir = Some(v.clone());
        }
        if let Some(v) = cli.max_steps {
            config.search.max_steps = Some(v);
        }
        if let Some(ref v) = cli.heuristics {
            config.search.heuristics = v.clone();
        }
        if let Some(v) = cli.infer_missing_targets {
            config.pipeline.infer_missing_targets = Some(v);
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_var(suffix: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{suffix}")).ok()
}

fn env_parse<T: std::str::FromStr>(suffix: &str) -> Option<T> {
    env_var(suffix).and_then(|v| v.parse::<T>().ok())
}

fn parse_list<T>(field: &str, raw: &str) -> Result<Vec<T>, ConfigError>
where
    T: std::str::FromStr<Err = String>,
{
    raw.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| {
            part.parse::<T>().map_err(|message| ConfigError::InvalidValue {
                field: field.to_string(),
                message,
            })
        })
        .collect()
}
