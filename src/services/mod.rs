mod command_host;
mod directory_cache;
mod json_context_store;
mod pipeline_filesystem;
pub mod revision_scanner;
pub mod shot_listing;
pub mod version_resolver;

pub use command_host::CommandHost;
pub use directory_cache::CachedFs;
pub use json_context_store::{CONTEXT_FILE, JsonContextStore};
pub use pipeline_filesystem::FilesystemPipelineFs;
pub use revision_scanner::{latest_revision, scan_revisions};
pub use shot_listing::list_shots;
pub use version_resolver::resolve;
