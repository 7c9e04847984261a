//! Configuration for prtemplate

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Repository checkout to scan for templates
    #[serde(default = "default_workspace")]
    pub workspace: PathBuf,

    /// Characters of template content shown in listings
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

fn default_workspace() -> PathBuf {
    PathBuf::from(".")
}

fn default_preview_chars() -> usize {
    crate::DEFAULT_PREVIEW_CHARS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace: default_workspace(),
            preview_chars: default_preview_chars(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("prtemplate").join("config.yml")),
            Some(PathBuf::from("prtemplate.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
