//! WIP revision naming: `<base>_WIP_<digits><ext>`.

use std::path::PathBuf;

use crate::domain::layout::WIP_MARKER;

/// Digits used when formatting a new revision number.
pub const REVISION_WIDTH: usize = 3;

/// One WIP revision found on disk.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Revision {
    pub number: u32,
    pub path: PathBuf,
}

/// Base name and dotted extension shared by a publish file and its WIPs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionStem {
    pub base: String,
    /// Includes the leading dot, or is empty for extension-less files.
    pub ext: String,
}

impl RevisionStem {
    pub fn new(base: impl Into<String>, ext: impl Into<String>) -> Self {
        Self { base: base.into(), ext: ext.into() }
    }

    /// File name of the publish itself.
    pub fn publish_name(&self) -> String {
        format!("{}{}", self.base, self.ext)
    }

    /// File name of revision `number`, zero-padded.
    pub fn file_name(&self, number: u32) -> String {
        format!("{}{}{:0width$}{}", self.base, WIP_MARKER, number, self.ext, width = REVISION_WIDTH)
    }

    /// Revision number encoded in `file_name`, if it belongs to this stem.
    ///
    /// Exact and case-sensitive; the digit run must be non-empty, all ASCII
    /// digits, and fit in a `u32`.
    pub fn parse(&self, file_name: &str) -> Option<u32> {
        let rest = file_name.strip_prefix(self.base.as_str())?.strip_prefix(WIP_MARKER)?;
        let digits = rest.strip_suffix(self.ext.as_str())?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}
