use crate::error::Result;
use crate::report::{AssembleStats, ScanReport, flatten};

use super::ReportFormatter;

/// Column names for the flattened report, matching the historical sheet layout.
const LEVEL_NAMES: [&str; 3] = ["office", "discipline", "project"];

/// Characters that force a field into RFC 4180 quoting.
const QUOTE_TRIGGERS: &[char] = &[',', '"', '\r', '\n'];

/// Flattens the report to `office,discipline,project,path` rows. Only
/// branches with matched paths survive flattening, so the CSV is the
/// "work to do" view of the report.
pub struct CsvFormatter;

impl ReportFormatter for CsvFormatter {
    fn format(&self, report: &ScanReport, _stats: &AssembleStats) -> Result<String> {
        let level_names: Vec<String> = LEVEL_NAMES.iter().map(ToString::to_string).collect();
        let table = flatten(report, &level_names)?;

        let mut output = String::new();
        push_row(&mut output, &table.headers);
        for row in &table.rows {
            push_row(&mut output, row);
        }
        Ok(output)
    }
}

/// Renders rows back into CSV text with the formatter's quoting rules.
/// Inverse of [`parse_csv`], for tools that rewrite tables.
#[must_use]
pub fn render_csv(rows: &[Vec<String>]) -> String {
    let mut output = String::new();
    for row in rows {
        push_row(&mut output, row);
    }
    output
}

fn push_row(output: &mut String, fields: &[String]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        push_field(output, field);
    }
    output.push('\n');
}

fn push_field(output: &mut String, field: &str) {
    if !field.contains(QUOTE_TRIGGERS) {
        output.push_str(field);
        return;
    }

    output.push('"');
    for c in field.chars() {
        if c == '"' {
            output.push('"');
        }
        output.push(c);
    }
    output.push('"');
}

/// Parses CSV content into rows of fields.
///
/// Accepts the quoting produced by [`CsvFormatter`] plus CRLF line endings,
/// which covers reference sheets exported from other tools.
#[must_use]
pub fn parse_csv(content: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            // Bare CR is dropped; the writer quotes any CR inside a field.
            '\r' => {}
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
