pub mod ports;

#[allow(unused_imports)]
pub use ports::MemoryContextStore;
#[allow(unused_imports)]
pub use ports::MemoryPipelineFs;
#[allow(unused_imports)]
pub use ports::RecordingHost;
