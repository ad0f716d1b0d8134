pub mod argex_config;
pub mod defaults;
pub mod observability_config;
pub mod pipeline_config;
pub mod propagation_config;
pub mod search_config;

pub use argex_config::{ArgexConfig, CliOverrides};
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::PipelineConfig;
pub use propagation_config::PropagationConfig;
pub use search_config::SearchConfig;
