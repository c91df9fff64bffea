use std::fs;

use crate::output::print_error_full;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, RcrdScanError, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error_full(e.error_type(), &e.message(), e.detail().as_deref(), None);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(RcrdScanError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    let template = generate_config_template();

    fs::write(output_path, template)?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# rcrd-scan configuration file

version = "1"

[share]
# Root of the project share, holding one folder per office.
# Use a literal string so backslashes survive:
# root = '\\fileserver\projects'

# Name of the record copy folder inside each discipline directory
archive_dir = "RCRD CPY"

[scan]
# Office folders to enumerate under the share root
offices = ["SSC"]

# Discipline folders checked inside each project directory
disciplines = ["CVL", "STR"]

# How many days back counts as recent activity (default: 30)
window_days = 30

# Projects reachable only through office folders outside the list above.
# Keys are office folder names, values are 5-digit project numbers.
# [overrides]
# SYD = ["27868"]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
