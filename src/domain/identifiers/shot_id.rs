use std::cmp::Ordering;

use super::validation::validate_folder_token;
use crate::domain::AppError;
use crate::impl_validated_id;

const SHOT_PREFIX: &str = "SHOT_";
const SCENE_PREFIX: &str = "SCENE_";

/// Which of the two folder shapes a shot identifier has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShotKind {
    /// `SHOT_<n>`: a numbered sequence shot.
    Shot,
    /// `SCENE_<name>`: a standalone scene.
    Scene,
}

/// A validated shot folder name.
///
/// Guarantees:
/// - Starts with `SHOT_` or `SCENE_` followed by a non-empty suffix
/// - Safe as a single path component and as a file-name fragment
///
/// Ordering puts every `SHOT_*` before every `SCENE_*`, each group
/// lexicographic, which is the order selection menus present them in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShotId(String);

impl_validated_id!(ShotId, is_valid_shot_id, AppError::InvalidShotId);

fn is_valid_shot_id(id: &str) -> bool {
    validate_folder_token(id) && split_kind(id).is_some()
}

fn split_kind(id: &str) -> Option<(ShotKind, &str)> {
    if let Some(rest) = id.strip_prefix(SHOT_PREFIX) {
        return (!rest.is_empty()).then_some((ShotKind::Shot, rest));
    }
    if let Some(rest) = id.strip_prefix(SCENE_PREFIX) {
        return (!rest.is_empty()).then_some((ShotKind::Scene, rest));
    }
    None
}

impl ShotId {
    /// Validate and create a new shot identifier.
    pub fn new(id: &str) -> Result<Self, AppError> {
        Self::check(id)?;
        Ok(Self(id.to_string()))
    }

    pub fn kind(&self) -> ShotKind {
        split_kind(&self.0).map(|(kind, _)| kind).unwrap_or(ShotKind::Scene)
    }

    /// The part after `SHOT_` / `SCENE_`.
    pub fn suffix(&self) -> &str {
        split_kind(&self.0).map(|(_, rest)| rest).unwrap_or(&self.0)
    }

    /// Short label for selection menus.
    pub fn label(&self) -> String {
        match self.kind() {
            ShotKind::Shot => format!("Shot {}", self.suffix()),
            ShotKind::Scene => format!("Scene: {}", self.suffix()),
        }
    }

    /// Longer description for the shot listing.
    pub fn description(&self) -> String {
        match self.kind() {
            ShotKind::Shot => format!("Shot {}", self.suffix()),
            ShotKind::Scene => format!("Standalone scene: {}", self.suffix()),
        }
    }
}

impl Ord for ShotId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind().cmp(&other.kind()).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for ShotId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
