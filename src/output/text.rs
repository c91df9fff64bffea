use std::io::Write;

use crate::error::Result;
use crate::report::{AssembleStats, ScanReport};

use super::{ReportFormatter, ansi};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_summary(&self, stats: &AssembleStats) -> String {
        let matched = self.colorize(&stats.matched_directories.to_string(), ansi::GREEN);
        format!(
            "Summary: {} project directories, {} archives scanned, {matched} matching directories",
            stats.projects_visited, stats.archives_scanned
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ScanReport, stats: &AssembleStats) -> Result<String> {
        let mut output = Vec::new();

        for (office, disciplines) in report.offices() {
            writeln!(output, "{}", self.colorize(office, ansi::BOLD)).ok();

            for (discipline, projects) in disciplines {
                writeln!(output, "  {discipline}").ok();

                if projects.is_empty() {
                    let note = self.colorize("(no archives found)", ansi::DIM);
                    writeln!(output, "    {note}").ok();
                    continue;
                }

                for (project, paths) in projects {
                    if paths.is_empty() {
                        let line =
                            self.colorize(&format!("{project}: no recent activity"), ansi::DIM);
                        writeln!(output, "    {line}").ok();
                        continue;
                    }

                    let head = self
                        .colorize(&format!("{project}: {} matching", paths.len()), ansi::GREEN);
                    writeln!(output, "    {head}").ok();
                    for path in paths {
                        writeln!(output, "      {}", path.display()).ok();
                    }
                }
            }

            writeln!(output).ok();
        }

        writeln!(output, "{}", self.format_summary(stats)).ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
