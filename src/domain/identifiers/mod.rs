pub mod role_name;
pub mod shot_id;
pub mod validation;

pub use role_name::{ASSEMBLY_ROLE, RoleName};
pub use shot_id::{ShotId, ShotKind};
