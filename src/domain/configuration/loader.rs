//! Pipeline configuration parsing.

use crate::domain::AppError;
use crate::domain::configuration::PipelineConfig;

/// Parse configuration from string content and validate it.
pub fn parse_config_content(content: &str) -> Result<PipelineConfig, AppError> {
    let config: PipelineConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
