use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::project_number::ProjectNumberError;

#[derive(Error, Debug)]
pub enum RcrdScanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RcrdScanError>;

impl RcrdScanError {
    /// Short category label for error output headers.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// Primary message line, without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, .. } => path.display().to_string(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, if there is more to say than the message line.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint for the `help:` line of error output.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some("Check the config file format and values"),
            Self::TomlParse(_) => Some("Check the TOML syntax of the config file"),
            Self::FileRead { source, .. } | Self::Io(source) => match source.kind() {
                io::ErrorKind::NotFound => {
                    Some("Verify the file path exists and is spelled correctly")
                }
                io::ErrorKind::PermissionDenied => Some("Check file and directory permissions"),
                _ => None,
            },
            Self::JsonSerialize(_) => None,
        }
    }
}

/// A non-fatal condition met while discovering or scanning.
///
/// Warnings ride along in outcome values (`Discovery`, `ArchiveScan`,
/// `Assembly`) and are printed by the command layer. A warned branch
/// contributes an empty result; it never disappears from the report's key
/// space and never aborts sibling branches.
#[derive(Debug)]
pub enum ScanWarning {
    /// A directory could not be enumerated.
    ReadDir { path: PathBuf, source: io::Error },

    /// An entry's file type or modification time could not be read; the
    /// remainder of its directory is treated as having no qualifying file.
    Metadata { path: PathBuf, source: io::Error },

    /// An override project's derived path did not resolve to a directory;
    /// the entry is dropped.
    OverrideMissing {
        office: String,
        project: String,
        derived: PathBuf,
    },

    /// A project directory yielded no usable report key.
    ProjectNumber(ProjectNumberError),
}

impl ScanWarning {
    /// Primary message line for warning output.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::ReadDir { path, .. } => format!("skipping {}", path.display()),
            Self::Metadata { path, .. } => {
                format!("skipping remaining entries of {}", path.display())
            }
            Self::OverrideMissing {
                office, project, ..
            } => format!("dropping override project {office}/{project}"),
            Self::ProjectNumber(
                ProjectNumberError::NotFound { path } | ProjectNumberError::Ambiguous { path, .. },
            ) => format!("skipping project directory {}", path.display()),
        }
    }

    /// Cause line printed under the message.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::ReadDir { source, .. } | Self::Metadata { source, .. } => {
                Some(source.to_string())
            }
            Self::OverrideMissing { derived, .. } => Some(format!(
                "derived group path does not exist: {}",
                derived.display()
            )),
            Self::ProjectNumber(e) => Some(e.to_string()),
        }
    }
}

impl std::fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.detail() {
            Some(detail) => write!(f, "{}: {detail}", self.message()),
            None => write!(f, "{}", self.message()),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
