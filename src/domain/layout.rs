//! Workspace layout: directory names and file-name builders.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{ASSEMBLY_ROLE, ProjectInfo, RevisionStem, RoleName, ShotId};

/// Folder names under the shots directory that are infrastructure, not shots.
pub const RESERVED_SHOT_FOLDERS: [&str; 4] = [ASSEMBLY_ROLE, "!LOCAL", "_WIP", "ASSETS 3D"];

/// Marker between a base name and its revision number.
pub const WIP_MARKER: &str = "_WIP_";

/// Where first WIP revisions are written relative to the publish file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WipPlacement {
    /// A named subdirectory inside the publish directory.
    #[default]
    Subdirectory,
    /// Next to the publish file.
    PublishDir,
}

/// Directory-naming conventions of a project workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    #[serde(default = "default_shots_dir")]
    pub shots_dir: String,
    #[serde(default)]
    pub wip: WipPlacement,
    #[serde(default = "default_wip_dir")]
    pub wip_dir: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { shots_dir: default_shots_dir(), wip: WipPlacement::default(), wip_dir: default_wip_dir() }
    }
}

fn default_shots_dir() -> String {
    "SHOTS".to_string()
}

fn default_wip_dir() -> String {
    "_WIP".to_string()
}

/// Resolved WIP location for a single publish file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WipLocation {
    pub dir: PathBuf,
    /// Naming shared by the publish file and its revisions.
    pub stem: RevisionStem,
}

impl LayoutConfig {
    /// `<workspace>/SHOTS`
    pub fn shots_root(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.shots_dir)
    }

    /// `<workspace>/SHOTS/ASSEMBLY`
    pub fn assembly_dir(&self, workspace_root: &Path) -> PathBuf {
        self.shots_root(workspace_root).join(ASSEMBLY_ROLE)
    }

    /// `<workspace>/SHOTS/ASSEMBLY/<prefix>_<shot>_ASSEMBLY.<ext>`
    pub fn assembly_file(&self, project: &ProjectInfo, shot: &ShotId, extension: &str) -> PathBuf {
        self.assembly_dir(&project.workspace_root)
            .join(publish_file_name(&project.prefix, shot, &RoleName::assembly(), extension))
    }

    /// Where WIP revisions of the publish named by `stem` in `publish_dir` live.
    pub fn wip_location(&self, publish_dir: &Path, stem: RevisionStem) -> WipLocation {
        let dir = match self.wip {
            WipPlacement::Subdirectory => publish_dir.join(&self.wip_dir),
            WipPlacement::PublishDir => publish_dir.to_path_buf(),
        };
        WipLocation { dir, stem }
    }
}

/// Base `<prefix>_<shot>_<role>` and `.<ext>`, kept apart so extensions
/// containing dots stay intact in revision names.
pub fn publish_stem(prefix: &str, shot: &ShotId, role: &RoleName, extension: &str) -> RevisionStem {
    RevisionStem::new(format!("{}_{}_{}", prefix, shot, role), format!(".{}", extension))
}

/// `<prefix>_<shot>_<role>.<ext>`
pub fn publish_file_name(prefix: &str, shot: &ShotId, role: &RoleName, extension: &str) -> String {
    publish_stem(prefix, shot, role, extension).publish_name()
}

/// Whether a folder under the shots directory is reserved infrastructure.
pub fn is_reserved_shot_folder(name: &str) -> bool {
    RESERVED_SHOT_FOLDERS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> ProjectInfo {
        ProjectInfo {
            name: "pfx_film".to_string(),
            workspace_root: PathBuf::from("/ws"),
            prefix: "PFX".to_string(),
        }
    }

    #[test]
    fn publish_name_joins_tokens() {
        let shot = ShotId::new("SHOT_010").unwrap();
        let role = RoleName::new("LAYOUT").unwrap();
        assert_eq!(publish_file_name("PFX", &shot, &role, "blend"), "PFX_SHOT_010_LAYOUT.blend");
    }

    #[test]
    fn assembly_file_lives_under_shots_assembly() {
        let layout = LayoutConfig::default();
        let shot = ShotId::new("SCENE_intro").unwrap();
        assert_eq!(
            layout.assembly_file(&project(), &shot, "blend"),
            PathBuf::from("/ws/SHOTS/ASSEMBLY/PFX_SCENE_intro_ASSEMBLY.blend")
        );
    }

    #[test]
    fn wip_location_follows_placement() {
        let publish_dir = Path::new("/ws/SHOTS/SHOT_010/LAYOUT/PUBLISH");
        let stem = RevisionStem::new("PFX_SHOT_010_LAYOUT", ".blend");

        let sub = LayoutConfig::default();
        assert_eq!(
            sub.wip_location(publish_dir, stem.clone()).dir,
            PathBuf::from("/ws/SHOTS/SHOT_010/LAYOUT/PUBLISH/_WIP")
        );

        let flat = LayoutConfig { wip: WipPlacement::PublishDir, ..LayoutConfig::default() };
        assert_eq!(flat.wip_location(publish_dir, stem).dir, PathBuf::from("/ws/SHOTS/SHOT_010/LAYOUT/PUBLISH"));
    }

    #[test]
    fn dotted_extension_stays_whole() {
        let shot = ShotId::new("SHOT_010").unwrap();
        let role = RoleName::new("LAYOUT").unwrap();
        let stem = publish_stem("PFX", &shot, &role, "tar.gz");

        assert_eq!(stem.publish_name(), "PFX_SHOT_010_LAYOUT.tar.gz");
        assert_eq!(stem.file_name(1), "PFX_SHOT_010_LAYOUT_WIP_001.tar.gz");
    }

    #[test]
    fn reserved_folders() {
        for name in ["ASSEMBLY", "!LOCAL", "_WIP", "ASSETS 3D"] {
            assert!(is_reserved_shot_folder(name));
        }
        assert!(!is_reserved_shot_folder("SHOT_010"));
    }
}
