pub mod config;
pub(crate) mod context;
pub mod diff;
pub mod fixture;
pub mod init;
pub mod scan;

pub use config::run_config;
pub use diff::run_diff;
pub use fixture::run_fixture;
pub use init::run_init;
pub use scan::run_scan;
