use std::time::SystemTime;

use crate::cli::{Cli, ScanArgs};
use crate::config::validate_config_semantics;
use crate::discovery::discover;
use crate::error::ScanWarning;
use crate::output::{
    CsvFormatter, JsonFormatter, OutputFormat, ReportFormatter, ScanProgress, TextFormatter,
    print_warning_full,
};
use crate::report::{AssembleStats, ScanReport, assemble};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, RcrdScanError};

use crate::commands::context::{color_choice_to_mode, load_config, write_output};

#[must_use]
pub fn run_scan(args: &ScanArgs, cli: &Cli) -> i32 {
    match run_scan_impl(args, cli) {
        Ok(exit_code) => exit_code,
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

pub fn run_scan_impl(args: &ScanArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Load configuration
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    let mut config = loaded.config;
    if cli.verbose > 0
        && let Some(source) = &loaded.source
    {
        eprintln!("Loaded configuration from: {}", source.display());
    }

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Validate the effective configuration
    validate_config_semantics(&config)?;
    let Some(root) = config.share.root.clone() else {
        return Err(RcrdScanError::Config(
            "No share root configured. Set share.root or pass --root.".to_string(),
        ));
    };
    if config.scan.offices.is_empty() && config.overrides.is_empty() {
        return Err(RcrdScanError::Config(
            "Nothing to scan. Set scan.offices or [overrides], or pass --office.".to_string(),
        ));
    }
    if config.scan.disciplines.is_empty() {
        return Err(RcrdScanError::Config(
            "No disciplines configured. Set scan.disciplines or pass --discipline.".to_string(),
        ));
    }

    // 4. Resolve the recency cutoff
    let cutoff = SystemTime::now()
        .checked_sub(config.scan.window())
        .ok_or_else(|| {
            RcrdScanError::Config(format!(
                "scan.window_days is too large: {}",
                config.scan.window_days
            ))
        })?;

    // 5. Discover project directories office by office
    let discovery = discover(&root, &config.scan.offices, &config.overrides);
    report_warnings(&discovery.warnings);
    if cli.verbose > 0 {
        let found: usize = discovery.by_office.values().map(Vec::len).sum();
        eprintln!(
            "Discovered {} project directories across {} offices",
            found,
            discovery.by_office.len()
        );
    }

    // 6. Scan every archive for recent activity
    let total: usize = discovery
        .by_office
        .values()
        .map(|projects| projects.len() * config.scan.disciplines.len())
        .sum();
    let progress = ScanProgress::new(total as u64, cli.quiet);
    let assembly = assemble(
        &config.scan.disciplines,
        &discovery.by_office,
        cutoff,
        &config.share.archive_dir,
        &progress,
    );
    progress.finish();
    report_warnings(&assembly.warnings);

    // 7. Format output
    let output = format_report(args.format, &assembly.report, &assembly.stats, cli)?;

    // 8. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 9. Write sidecar formats if requested
    write_additional_formats(args, &assembly.report, &assembly.stats, cli)?;

    Ok(EXIT_SUCCESS)
}

/// CLI arguments replace their configuration counterparts wholesale.
pub(crate) fn apply_cli_overrides(config: &mut crate::config::Config, args: &ScanArgs) {
    if let Some(root) = &args.root {
        config.share.root = Some(root.clone());
    }

    if !args.offices.is_empty() {
        config.scan.offices.clone_from(&args.offices);
    }

    if !args.disciplines.is_empty() {
        config.scan.disciplines.clone_from(&args.disciplines);
    }

    if let Some(days) = args.days {
        config.scan.window_days = days;
    }

    if let Some(archive_dir) = &args.archive_dir {
        config.share.archive_dir.clone_from(archive_dir);
    }
}

/// Warnings go to stderr even in quiet mode; quiet only trims stdout.
fn report_warnings(warnings: &[ScanWarning]) {
    for warning in warnings {
        print_warning_full(&warning.message(), warning.detail().as_deref(), None);
    }
}

fn format_report(
    format: OutputFormat,
    report: &ScanReport,
    stats: &AssembleStats,
    cli: &Cli,
) -> crate::Result<String> {
    match format {
        OutputFormat::Text => {
            TextFormatter::new(color_choice_to_mode(cli.color)).format(report, stats)
        }
        OutputFormat::Json => JsonFormatter.format(report, stats),
        OutputFormat::Csv => CsvFormatter.format(report, stats),
    }
}

fn write_additional_formats(
    args: &ScanArgs,
    report: &ScanReport,
    stats: &AssembleStats,
    cli: &Cli,
) -> crate::Result<()> {
    // File writes always proceed; quiet only affects stdout (which isn't used here)
    if let Some(json_path) = &args.write_json {
        let json_output = JsonFormatter.format(report, stats)?;
        write_output(Some(json_path), &json_output, cli.quiet)?;
    }

    if let Some(csv_path) = &args.write_csv {
        let csv_output = CsvFormatter.format(report, stats)?;
        write_output(Some(csv_path), &csv_output, cli.quiet)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
