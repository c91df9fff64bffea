use crate::error::Result;
use crate::report::{AssembleStats, ScanReport};

use super::ReportFormatter;

/// Serializes the nested report exactly as assembled, office to discipline to
/// project number to matched paths, so downstream tooling can consume the
/// structure without caring about presentation.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport, _stats: &AssembleStats) -> Result<String> {
        let json = serde_json::to_string_pretty(report)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
