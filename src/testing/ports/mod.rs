mod memory_context_store;
mod memory_pipeline_fs;
mod recording_host;

pub use self::memory_context_store::MemoryContextStore;
pub use self::memory_pipeline_fs::MemoryPipelineFs;
pub use self::recording_host::RecordingHost;
