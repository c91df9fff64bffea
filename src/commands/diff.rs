use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::cli::{Cli, DiffArgs};
use crate::output::{parse_csv, render_csv};
use crate::report::PATH_COLUMN;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, RcrdScanError, Result};

use super::context::write_output;

#[must_use]
pub fn run_diff(args: &DiffArgs, cli: &Cli) -> i32 {
    match run_diff_impl(args, cli) {
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

/// Emits the report rows whose path does not appear in the reference table.
///
/// Both inputs are CSV with a header row; the path column is located by name
/// in each table independently, so column order and extra columns in the
/// reference do not matter. The surviving rows keep the report's header and
/// column layout.
///
/// # Errors
/// Returns an error if either file cannot be read, is empty, or lacks a
/// path column.
pub fn run_diff_impl(args: &DiffArgs, cli: &Cli) -> Result<i32> {
    // 1. Read both tables
    let report = read_table(&args.report)?;
    let reference = read_table(&args.reference)?;

    // 2. Locate the path column in each header row
    let report_col = path_column(&report, &args.report)?;
    let reference_col = path_column(&reference, &args.reference)?;

    // 3. Collect the paths the reference already tracks
    let known: HashSet<&str> = reference[1..]
        .iter()
        .filter_map(|row| row.get(reference_col))
        .map(String::as_str)
        .collect();

    // 4. Keep report rows whose path is new
    let mut surviving = vec![report[0].clone()];
    for row in &report[1..] {
        let Some(path) = row.get(report_col) else {
            continue;
        };
        if !known.contains(path.as_str()) {
            surviving.push(row.clone());
        }
    }

    // 5. Emit the set difference
    let new_rows = surviving.len() - 1;
    let output = render_csv(&surviving);
    write_output(args.output.as_deref(), &output, cli.quiet)?;
    if !cli.quiet && args.output.is_some() {
        println!("{new_rows} paths not present in the reference");
    }

    Ok(EXIT_SUCCESS)
}

fn read_table(path: &Path) -> Result<Vec<Vec<String>>> {
    let content = fs::read_to_string(path).map_err(|source| RcrdScanError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = parse_csv(&content);
    if rows.is_empty() {
        return Err(RcrdScanError::Config(format!(
            "{} is empty, expected a CSV table with a header row",
            path.display()
        )));
    }
    Ok(rows)
}

fn path_column(rows: &[Vec<String>], origin: &Path) -> Result<usize> {
    rows[0]
        .iter()
        .position(|header| header.eq_ignore_ascii_case(PATH_COLUMN))
        .ok_or_else(|| {
            RcrdScanError::Config(format!(
                "{} does not have a '{PATH_COLUMN}' column",
                origin.display()
            ))
        })
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
