//! Shared testing utilities for shotdesk CLI and library tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PROJECT_NAME: &str = "pfx_film";
pub const PREFIX: &str = "PFX";

const DEFAULT_ROLES: &str = r#"
[[roles]]
name = "LAYOUT"
preset = "shot_role"
description = "Layout"

[[roles]]
name = "LIGHTING"

[[roles]]
name = "FX"
preset = "custom"
template = "FX/{{ shot }}/PUBLISH"
"#;

/// Isolated project tree, configuration file and session directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Team-mode configuration with LAYOUT, LIGHTING and a custom FX role.
    pub fn new() -> Self {
        Self::with_roles(DEFAULT_ROLES)
    }

    /// Configuration with the given extra TOML (mode and roles).
    pub fn with_roles(extra: &str) -> Self {
        Self::with_settings(extra, 0)
    }

    /// Default roles with directory listings cached for `ttl_secs`.
    pub fn with_cache_ttl(ttl_secs: u64) -> Self {
        Self::with_settings(DEFAULT_ROLES, ttl_secs)
    }

    fn with_settings(extra: &str, ttl_secs: u64) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(root.path().join("projects").join(PROJECT_NAME).join("SHOTS"))
            .expect("Failed to create project tree");

        let ctx = Self { root, work_dir };
        let config = format!(
            "session_dir = '{}'\n{}\n[cache]\nttl_secs = {}\n",
            ctx.session_dir().display(),
            extra,
            ttl_secs
        );
        fs::write(ctx.config_path(), config).expect("Failed to write config");
        ctx
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.work_dir.join("shotdesk.toml")
    }

    pub fn session_dir(&self) -> PathBuf {
        self.root.path().join("session")
    }

    pub fn project(&self) -> PathBuf {
        self.root.path().join("projects").join(PROJECT_NAME)
    }

    pub fn project_arg(&self) -> String {
        self.project().display().to_string()
    }

    pub fn shots_dir(&self) -> PathBuf {
        self.project().join("SHOTS")
    }

    pub fn add_shot(&self, shot: &str) {
        fs::create_dir_all(self.shots_dir().join(shot)).expect("Failed to create shot dir");
    }

    pub fn publish_dir(&self, shot: &str, role: &str) -> PathBuf {
        self.shots_dir().join(shot).join(role).join("PUBLISH")
    }

    pub fn publish_file(&self, shot: &str, role: &str) -> PathBuf {
        self.publish_dir(shot, role).join(format!("{}_{}_{}.blend", PREFIX, shot, role))
    }

    pub fn wip_file(&self, shot: &str, role: &str, revision: u32) -> PathBuf {
        self.publish_dir(shot, role)
            .join("_WIP")
            .join(format!("{}_{}_{}_WIP_{:03}.blend", PREFIX, shot, role, revision))
    }

    pub fn write_file(&self, path: &Path, content: &str) {
        fs::create_dir_all(path.parent().expect("file has a parent")).expect("mkdir");
        fs::write(path, content).expect("Failed to write file");
    }

    pub fn write_publish(&self, shot: &str, role: &str, content: &str) -> PathBuf {
        let path = self.publish_file(shot, role);
        self.write_file(&path, content);
        path
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("Failed to read file")
    }

    pub fn context_json(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.session_dir().join("context.json"))
            .expect("context.json should exist");
        serde_json::from_str(&content).expect("context.json should be valid JSON")
    }

    /// Command for the compiled binary, run from the work directory with an
    /// isolated environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("shotdesk").expect("Failed to locate shotdesk binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("SHOTDESK_CONFIG")
            .env_remove("RUST_LOG")
            .env("HOME", self.root.path())
            .env("XDG_CONFIG_HOME", self.root.path().join("xdg-config"))
            .env("XDG_DATA_HOME", self.root.path().join("xdg-data"));
        cmd
    }

    /// Execute a closure with `$SHOTDESK_CONFIG` pointing at this context's
    /// configuration. Callers must be `#[serial]`.
    pub fn with_config_env<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::var_os("SHOTDESK_CONFIG");
        unsafe {
            env::set_var("SHOTDESK_CONFIG", self.config_path());
        }
        let result = action();
        match original {
            Some(value) => unsafe { env::set_var("SHOTDESK_CONFIG", value) },
            None => unsafe { env::remove_var("SHOTDESK_CONFIG") },
        }
        result
    }
}
