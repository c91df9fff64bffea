use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for archive scanning.
///
/// Disabled in quiet mode or when stderr is not a TTY, so redirected runs
/// and scripts see no control characters.
pub struct ScanProgress {
    progress_bar: ProgressBar,
}

impl ScanProgress {
    /// Creates a progress bar sized to the number of archive probes.
    ///
    /// The bar outputs to stderr to avoid interfering with report output
    /// on stdout.
    ///
    /// # Panics
    ///
    /// Panics if the progress bar template is invalid. The template is a
    /// compile-time constant, so this should never happen.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    /// Creates a progress bar with explicit visibility control.
    ///
    /// Internal constructor that lets tests exercise the visible path in
    /// non-TTY environments.
    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };

        Self { progress_bar }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} Scanning [{bar:40.cyan/blue}] {pos}/{len} archives ({percent}%)",
                )
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Advances the bar by one archive probe.
    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Advances the bar by several probes at once, used when a project is
    /// skipped before its disciplines are visited.
    pub fn inc_by(&self, delta: u64) {
        self.progress_bar.inc(delta);
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
