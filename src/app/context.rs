use crate::domain::PipelineConfig;
use crate::ports::{HostApp, PipelineFs};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: PipelineFs, H: HostApp> {
    fs: F,
    host: H,
    config: PipelineConfig,
}

impl<F: PipelineFs, H: HostApp> AppContext<F, H> {
    /// Create a new application context.
    pub fn new(fs: F, host: H, config: PipelineConfig) -> Self {
        Self { fs, host, config }
    }

    /// Get a reference to the pipeline filesystem.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Get a reference to the host application.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Get the loaded pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}
