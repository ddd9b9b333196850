use crate::config::{self, Config};
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Abstract config persistence interface
pub trait ConfigStorage {
    /// Return the stored config. If none is stored, returns Ok(None)
    fn load(&self) -> Result<Option<Config>>;
    /// Persist the config
    fn save(&self, config: &Config) -> Result<()>;
}

/// File-based config persistence implementation
pub struct FileConfigStorage {
    path: PathBuf,
}

impl FileConfigStorage {
    /// Storage at the fixed config filename in the working directory.
    pub fn new() -> Self {
        FileConfigStorage {
            path: PathBuf::from(config::CONFIG_FILENAME),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        FileConfigStorage { path: path.into() }
    }
}

impl Default for FileConfigStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStorage for FileConfigStorage {
    fn load(&self) -> Result<Option<Config>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read(&self.path)
            .with_context(|| format!("Failed to read config file {}", self.path.display()))?;
        config::parse_config(&content).map(Some)
    }

    fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let data = config::serialize_config(config)?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options
            .open(&self.path)
            .context("Failed to open config file for writing")?;
        file.write_all(&data)
            .context("Failed to write config to file")?;
        Ok(())
    }
}
