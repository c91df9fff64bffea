mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LoadResult, RealFileSystem};
pub use model::{CONFIG_VERSION, Config, ScanConfig, ShareConfig};
pub use validation::validate_config_semantics;
