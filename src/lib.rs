pub mod archive;
pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod project_number;
pub mod report;
pub mod scan;
pub mod taxonomy;

pub use error::{RcrdScanError, Result, ScanWarning};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
