//! Configuration semantic validation.
//!
//! Validates that configuration values are semantically correct after parsing.
//! This includes range checks, token shape checks, and override constraints.

use crate::config::Config;
use crate::project_number::is_project_number;
use crate::{RcrdScanError, Result};

/// Characters that would make an office or discipline token traverse
/// directories instead of naming one.
const PATH_SEPARATORS: &[char] = &['/', '\\'];

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if `window_days` is zero, an office or discipline token
/// is empty or contains a path separator, or an override project is not a
/// valid project number.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_scan_section(config)?;
    validate_share_section(config)?;
    validate_overrides_section(config)?;
    Ok(())
}

fn validate_scan_section(config: &Config) -> Result<()> {
    if config.scan.window_days < 1 {
        return Err(RcrdScanError::Config(format!(
            "scan.window_days must be at least 1, got {}",
            config.scan.window_days
        )));
    }

    for (i, office) in config.scan.offices.iter().enumerate() {
        validate_token(&format!("scan.offices[{i}]"), office)?;
    }
    for (i, discipline) in config.scan.disciplines.iter().enumerate() {
        validate_token(&format!("scan.disciplines[{i}]"), discipline)?;
    }
    Ok(())
}

fn validate_share_section(config: &Config) -> Result<()> {
    validate_token("share.archive_dir", &config.share.archive_dir)
}

fn validate_overrides_section(config: &Config) -> Result<()> {
    for (office, projects) in &config.overrides {
        validate_token("overrides office", office)?;
        for project in projects {
            if !is_project_number(project) {
                return Err(RcrdScanError::Config(format!(
                    "overrides.{office} entries must be 5-digit project numbers not ending in 000, got '{project}'"
                )));
            }
        }
    }
    Ok(())
}

fn validate_token(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RcrdScanError::Config(format!("{field} must not be empty")));
    }
    if value.contains(PATH_SEPARATORS) {
        return Err(RcrdScanError::Config(format!(
            "{field} must not contain path separators, got '{value}'"
        )));
    }
    Ok(())
}
