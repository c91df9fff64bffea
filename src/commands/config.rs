use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigOutputFormat};
use crate::config::{Config, ConfigLoader, FileConfigLoader, validate_config_semantics};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, RcrdScanError, Result};

#[must_use]
pub fn run_config(args: &crate::cli::ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            crate::output::print_error_full(
                e.error_type(),
                &e.message(),
                e.detail().as_deref(),
                None,
            );
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, declares
/// an unsupported version, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(RcrdScanError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let loader = FileConfigLoader::new();
    let loaded = loader.load_from_path(config_path)?;

    validate_config_semantics(&loaded.config)?;

    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            crate::output::print_error_full(
                e.error_type(),
                &e.message(),
                e.detail().as_deref(),
                None,
            );
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    cli: &Cli,
) -> Result<String> {
    let loaded = super::context::load_config(config_path, cli.no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => Ok(format_config_text(&loaded.config)),
    }
}

#[must_use]
pub(crate) fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[share]\n");
    if let Some(root) = &config.share.root {
        let _ = writeln!(output, "  root = \"{}\"", root.display());
    } else {
        output.push_str("  root = (unset)\n");
    }
    let _ = writeln!(output, "  archive_dir = \"{}\"", config.share.archive_dir);

    output.push_str("\n[scan]\n");
    let _ = writeln!(output, "  offices = {:?}", config.scan.offices);
    let _ = writeln!(output, "  disciplines = {:?}", config.scan.disciplines);
    let _ = writeln!(output, "  window_days = {}", config.scan.window_days);

    if !config.overrides.is_empty() {
        output.push_str("\n[overrides]\n");
        for (office, projects) in &config.overrides {
            let _ = writeln!(output, "  {office} = {projects:?}");
        }
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
