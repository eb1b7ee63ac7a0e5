use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Starter configuration pointing at the public Star Wars API.
pub const DEFAULT_CONFIG: &str = r#"# Starroster Configuration

[api]
# First page of the character list; later pages follow the `next` links.
url = "https://swapi.dev/api/people/"
# user_agent = "starroster"

[logging]
# level = "info"
# file = "/tmp/starroster.log"
"#;

/// Write `.starroster.toml` into `dir`, refusing to clobber an existing
/// file unless `force` is set.
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}
