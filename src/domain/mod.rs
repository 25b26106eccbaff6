pub mod configuration;
pub mod context;
pub mod error;
pub mod identifiers;
pub mod layout;
pub mod path_preset;
pub mod project;
pub mod resolution;
pub mod revision;
pub mod roles;

pub use configuration::{CacheConfig, HostConfig, PipelineConfig};
pub use context::{ContextUpdate, CurrentContext};
pub use error::AppError;
pub use identifiers::{ASSEMBLY_ROLE, RoleName, ShotId, ShotKind};
pub use layout::{LayoutConfig, WipLocation, WipPlacement};
pub use path_preset::{PathPreset, PathVars};
pub use project::{ProjectInfo, RootPolicy};
pub use resolution::{Resolution, ResolveAction};
pub use revision::{Revision, RevisionStem};
pub use roles::{ProjectMode, RoleChoice, RoleConfig};
