pub mod check;
pub mod get;
pub mod list;
pub mod set;

use std::path::Path;

use libconf::Config;

/// Reads and parses a configuration file.
pub fn load(file: &Path) -> libconf::Result<Config> {
    let mut config = Config::new();
    config.read_file(file)?;
    tracing::info!(file = %file.display(), settings = config.root().len(), "Loaded configuration");
    Ok(config)
}
