use std::path::PathBuf;
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::archive::DEFAULT_ARCHIVE_DIR;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Top-level configuration for a scan run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config schema version. "1" or missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Share location [share].
    #[serde(default)]
    pub share: ShareConfig,

    /// Scan selection and recency window [scan].
    #[serde(default)]
    pub scan: ScanConfig,

    /// Projects reachable outside the office enumeration [overrides].
    /// Keys are office codes, values are 5-digit project tokens. Order is
    /// kept, so report sections follow the file.
    #[serde(default)]
    pub overrides: IndexMap<String, Vec<String>>,
}

/// Location of the project share.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShareConfig {
    /// Share root holding one folder per office. Required for scanning;
    /// comes from the file or from `--root`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Name of the record-copy folder inside a discipline directory.
    #[serde(default = "default_archive_dir")]
    pub archive_dir: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            root: None,
            archive_dir: default_archive_dir(),
        }
    }
}

/// What to scan and how far back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Office codes to enumerate, in report order.
    #[serde(default)]
    pub offices: Vec<String>,

    /// Discipline codes checked inside each project directory.
    #[serde(default)]
    pub disciplines: Vec<String>,

    /// Recency window in days. A file modified within the window marks its
    /// directory as recently issued.
    #[serde(default = "default_window_days")]
    pub window_days: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            offices: Vec::new(),
            disciplines: Vec::new(),
            window_days: default_window_days(),
        }
    }
}

impl ScanConfig {
    /// The recency window as a duration for cutoff arithmetic. Saturates
    /// instead of overflowing, so an absurd `window_days` surfaces as a
    /// cutoff error rather than a panic.
    #[must_use]
    pub const fn window(&self) -> Duration {
        Duration::from_secs(self.window_days.saturating_mul(24 * 60 * 60))
    }
}

fn default_archive_dir() -> String {
    DEFAULT_ARCHIVE_DIR.to_string()
}

const fn default_window_days() -> u64 {
    30
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
