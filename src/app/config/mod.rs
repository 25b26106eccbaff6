//! Filesystem- and environment-backed configuration loading.
//!
//! Pure schema parsing and validation live in `domain::configuration`.

mod load_config;
mod session_dir;

pub use load_config::{CONFIG_ENV, CONFIG_FILE, ConfigSearch, load_config};
pub use session_dir::session_dir;
