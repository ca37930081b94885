//! Data directory and `config.toml` resolution.
//!
//! Resolution order (highest priority first):
//! 1. CLI flags (applied by the caller)
//! 2. `<data dir>/config.toml`
//! 3. Compiled defaults
//!
//! The data directory is `$EXO_DATA_DIR` when set, else `~/.exo-archive`.

use std::path::{Path, PathBuf};
use std::{env, fs};

use exo_core::FilterPolicy;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

pub const DATA_DIR_ENV: &str = "EXO_DATA_DIR";
pub const CONFIG_FILE: &str = "config.toml";
pub const CATALOG_FILE: &str = "planets.min.json";
pub const MISSIONS_FILE: &str = "missions.json";
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Default base directory for catalog data.
fn default_data_dir() -> PathBuf {
    dirs_home().join(".exo-archive")
}

fn dirs_home() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

pub fn data_dir() -> PathBuf {
    env::var(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_data_dir())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExoConfig {
    /// Catalog file; relative paths resolve against the data directory.
    pub catalog: Option<PathBuf>,
    pub missions: Option<PathBuf>,
    pub page_size: Option<usize>,
    pub default_filter: FilterPolicy,
    #[serde(skip)]
    data_dir: PathBuf,
}

impl ExoConfig {
    /// Load from the resolved data directory.
    pub fn load() -> Result<Self> {
        Self::load_from(&data_dir())
    }

    /// Load `config.toml` from `dir`. A missing file yields defaults.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        let mut config = if path.exists() {
            tracing::debug!("reading config from {}", path.display());
            Self::from_toml(&fs::read_to_string(&path)?)?
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Self::default()
        };
        config.data_dir = dir.to_path_buf();
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.page_size == Some(0) {
            return Err(CatalogError::InvalidData(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn resolve(&self, configured: Option<&Path>, default_name: &str) -> PathBuf {
        match configured {
            Some(p) if p.is_absolute() => p.to_path_buf(),
            Some(p) => self.data_dir.join(p),
            None => self.data_dir.join(default_name),
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.resolve(self.catalog.as_deref(), CATALOG_FILE)
    }

    pub fn missions_path(&self) -> PathBuf {
        self.resolve(self.missions.as_deref(), MISSIONS_FILE)
    }

    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
