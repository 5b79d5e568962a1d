mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{AuditConfig, Config, ScannerConfig, YamlConfig};
pub use validation::validate_config_semantics;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
