mod context_store;
mod host_app;
mod pipeline_fs;

pub use context_store::ContextStore;
pub use host_app::HostApp;
pub use pipeline_fs::{DirEntryInfo, PipelineFs};
