/// Value assigned to each vote bucket `"0"`..`"4"`.
pub const VOTE_BUCKET_VALUES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Initial weight of an argument nobody voted on.
pub const NEUTRAL_INITIAL_WEIGHT: f64 = 0.5;

/// Default upper bound on propagation retests per explanation search.
pub const DEFAULT_MAX_SEARCH_STEPS: usize = 10_000;

/// Suffix of the root argument id inside a debate (`<debate_id>.0`).
pub const ROOT_ARGUMENT_SUFFIX: &str = ".0";

/// Project config file name looked up in the config root.
pub const CONFIG_FILE_NAME: &str = "argex.toml";

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "ARGEX_";
