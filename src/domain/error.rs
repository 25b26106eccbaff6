use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for shotdesk operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure not attributable to a more specific kind.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Project root is empty or has no usable final component.
    #[error("Invalid project path '{0}'")]
    InvalidProjectPath(String),

    /// A path template references a variable that was not supplied.
    #[error("Template '{template}' references unresolved variable '{variable}'")]
    UnresolvedTemplateVariable { template: String, variable: String },

    /// Copying the publish file into the first WIP revision failed.
    #[error("Failed to create first WIP at {path}: {source}")]
    WipCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A role or setting the request needs is absent from configuration.
    #[error("{0}")]
    ConfigurationMissing(String),

    /// Shot identifier does not match `SHOT_<n>` or `SCENE_<name>`.
    #[error("Invalid shot '{0}': expected SHOT_<n> or SCENE_<name>")]
    InvalidShotId(String),

    /// Role name is invalid.
    #[error("Invalid role name '{0}': must be alphanumeric with hyphens or underscores")]
    InvalidRoleName(String),

    /// No project was given and none is recorded in the current context.
    #[error("No project selected. Pass --project or run 'shotdesk context set --project <path>'")]
    NoProjectSelected,

    /// No shot was given and none is recorded in the current context.
    #[error("A shot is required (SHOT_<n> or SCENE_<name>)")]
    ShotRequired,

    /// Several roles are selectable and none was given.
    #[error("A role is required. Available: {available}")]
    RoleRequired { available: String },

    /// The workspace has no shots directory to enumerate.
    #[error("Shots directory not found: {0}")]
    ShotsDirectoryMissing(PathBuf),

    /// Configuration file parsed but failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No configuration file could be located.
    #[error("Configuration file not found (searched: {0})")]
    ConfigNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The persisted context could not be read or written.
    #[error("Context store error at {path}: {details}")]
    ContextStore { path: PathBuf, details: String },

    /// The host application rejected an open or save request.
    #[error("Host error: {0}")]
    Host(String),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Io { path: path.into(), source }
    }

    pub fn config_missing<S: Into<String>>(message: S) -> Self {
        AppError::ConfigurationMissing(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that bucket failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io { source, .. } | AppError::WipCreationFailed { source, .. } => {
                source.kind()
            }
            AppError::InvalidProjectPath(_)
            | AppError::UnresolvedTemplateVariable { .. }
            | AppError::InvalidShotId(_)
            | AppError::InvalidRoleName(_)
            | AppError::ShotRequired
            | AppError::RoleRequired { .. }
            | AppError::InvalidConfig(_)
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigurationMissing(_)
            | AppError::NoProjectSelected
            | AppError::ShotsDirectoryMissing(_)
            | AppError::ConfigNotFound(_) => io::ErrorKind::NotFound,
            AppError::ContextStore { .. } | AppError::Host(_) => io::ErrorKind::Other,
        }
    }
}
