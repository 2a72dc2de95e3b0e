//! Main MargaConfig and loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pathfinding::SearchConfig;

use super::error::ConfigLoadError;
use super::map::MapSection;
use super::render::RenderSection;
use super::search::SearchSection;

/// Default config location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/marga.yaml";

/// Full Marga configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MargaConfig {
    /// Search settings
    #[serde(default)]
    pub search: SearchSection,

    /// Map image interpretation
    #[serde(default)]
    pub map: MapSection,

    /// Overlay and frame output
    #[serde(default)]
    pub render: RenderSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path, falling back to defaults if absent
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Get the search config
    pub fn search_config(&self) -> SearchConfig {
        self.search.to_search_config()
    }
}
