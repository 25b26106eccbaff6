use std::path::{Path, PathBuf};

/// What the version resolver did for a publish path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveAction {
    /// No publish exists; nothing to open.
    None,
    /// An existing WIP revision is the answer.
    Redirect,
    /// The first WIP was copied from the publish.
    Created,
}

/// Outcome of resolving a publish path to a concrete file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub action: ResolveAction,
    pub path: Option<PathBuf>,
}

impl Resolution {
    pub fn none() -> Self {
        Self { action: ResolveAction::None, path: None }
    }

    pub fn redirect(path: PathBuf) -> Self {
        Self { action: ResolveAction::Redirect, path: Some(path) }
    }

    pub fn created(path: PathBuf) -> Self {
        Self { action: ResolveAction::Created, path: Some(path) }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
