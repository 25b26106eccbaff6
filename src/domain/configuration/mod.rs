pub mod loader;
pub mod pipeline_config;

pub use loader::parse_config_content;
pub use pipeline_config::{CacheConfig, HostConfig, PipelineConfig};
