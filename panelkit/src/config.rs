//! Panel configuration.
//!
//! Every key is optional; a missing file section falls back to the defaults
//! below. Example:
//!
//! ```json
//! {
//!     "search_dirs": ["resources", "/usr/share/panelkit"],
//!     "descriptor_suffix": ".descriptor",
//!     "background": [60, 60, 60],
//!     "decoration_sheet": "decorations.png",
//!     "decoration_insets": [3, 3, 3, 3]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::atlas::AtlasLoader;
use crate::error::AtlasError;
use crate::resources::ResourcePaths;

/// Environment variable holding extra resource directories (platform path list).
pub const RESOURCES_ENV: &str = "PANELKIT_RESOURCES";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Directories searched after the executable's own; later entries win.
    pub search_dirs: Vec<PathBuf>,
    /// Appended to a sheet name to find its descriptor.
    pub descriptor_suffix: String,
    /// Panel background, RGB.
    pub background: [u8; 3],
    /// Label text color, RGB.
    pub text: [u8; 3],
    /// Sheet holding decoration samples, tagged by decoration name.
    pub decoration_sheet: Option<String>,
    /// Decoration insets `[left, right, top, bottom]` for themed samples.
    pub decoration_insets: [i32; 4],
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            search_dirs: Vec::new(),
            descriptor_suffix: AtlasLoader::DEFAULT_DESCRIPTOR_SUFFIX.to_string(),
            background: [60, 60, 60],
            text: [150, 150, 150],
            decoration_sheet: Some("decorations.png".to_string()),
            decoration_insets: [3, 3, 3, 3],
        }
    }
}

impl PanelConfig {
    pub fn from_json(text: &str) -> Result<Self, AtlasError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AtlasError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Append directories listed in `PANELKIT_RESOURCES`.
    pub fn with_env(mut self) -> Self {
        if let Some(value) = std::env::var_os(RESOURCES_ENV) {
            self.search_dirs.extend(std::env::split_paths(&value));
        }
        self
    }

    /// The executable's resource directories followed by `search_dirs`.
    pub fn resource_paths(&self) -> ResourcePaths {
        let mut paths = ResourcePaths::beside_executable();
        for dir in &self.search_dirs {
            paths.push(dir.clone());
        }
        paths
    }
}
