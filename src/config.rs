use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use voxlogic_mesh_cpu::MeshMode;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub mesh: MeshConfig,
    #[serde(default)]
    pub logic: LogicConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct WorldConfig {
    /// World file to load; a fresh floor world is built when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MeshConfig {
    #[serde(default = "default_greedy")]
    pub greedy: bool,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            greedy: default_greedy(),
        }
    }
}

impl MeshConfig {
    pub fn mode(&self) -> MeshMode {
        if self.greedy {
            MeshMode::Greedy
        } else {
            MeshMode::Naive
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct LogicConfig {
    /// Directory of per-gate model files, `<kind id>/<input bits>`.
    #[serde(default)]
    pub models_dir: Option<PathBuf>,
    #[serde(default)]
    pub max_ticks: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Also write the log here.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

fn default_greedy() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

pub fn load_config(path: &Path) -> Result<AppConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&s)?;
    Ok(cfg)
}

/// Loads `path` if it exists. The flag reports whether a file was read.
pub fn load_or_default(path: &Path) -> Result<(AppConfig, bool), Box<dyn Error>> {
    if path.exists() {
        Ok((load_config(path)?, true))
    } else {
        Ok((AppConfig::default(), false))
    }
}
