// crates/geoview-core/src/config.rs

use crate::error::{GeoViewError, Result};
use crate::resolve::CandidateKeys;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONTAINER_ID: &str = "mydiv";
pub const DEFAULT_RESOURCE_PATH: &str = "data/MegaCities.geojson";
pub const DEFAULT_SECTION_TITLE: &str = "GeoJSON — MegaCities";
pub const DEFAULT_RAW_PREVIEW_LIMIT: usize = 4000;
pub const DEFAULT_COORDS_PREVIEW_LIMIT: usize = 120;

/// Everything a page load needs to know up front.
///
/// Every field is optional in a config file; missing ones take the defaults
/// above.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Id of the container both tables are appended to.
    pub container_id: String,
    /// Relative path (or URL) of the GeoJSON resource.
    pub resource_path: String,
    pub section_title: String,
    /// Characters of pretty-printed JSON shown before the truncation marker.
    pub raw_preview_limit: usize,
    /// Characters of non-`Point` coordinates shown before the ellipsis.
    pub coords_preview_limit: usize,
    pub candidate_keys: CandidateKeys,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            section_title: DEFAULT_SECTION_TITLE.to_string(),
            raw_preview_limit: DEFAULT_RAW_PREVIEW_LIMIT,
            coords_preview_limit: DEFAULT_COORDS_PREVIEW_LIMIT,
            candidate_keys: CandidateKeys::default(),
        }
    }
}

impl PageConfig {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GeoViewError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let config: PageConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.container_id.trim().is_empty() {
            return Err(GeoViewError::Config("container_id must not be empty".into()));
        }
        if self.resource_path.trim().is_empty() {
            return Err(GeoViewError::Config("resource_path must not be empty".into()));
        }
        Ok(())
    }
}
