//! Asset manifest describing every generated placeholder
//!
//! The manifest is written next to the images as `placeholders.json` so a
//! build step can tell which files are still stand-ins.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "placeholders.json";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetFormat {
    Png,
    Ico,
}

/// One file written by the generator
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    /// Path relative to the output root, always with `/` separators
    pub path: String,

    pub format: AssetFormat,

    pub width: u32,

    pub height: u32,

    /// Square frame sizes stored in an ICO file
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<u32>,
}

impl GeneratedAsset {
    pub fn png(path: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            format: AssetFormat::Png,
            width,
            height,
            sizes: Vec::new(),
        }
    }

    /// An ICO asset; its nominal dimensions are those of the largest frame
    pub fn ico(path: impl Into<String>, sizes: Vec<u32>) -> Self {
        let largest = sizes.iter().copied().max().unwrap_or(0);
        Self {
            path: path.into(),
            format: AssetFormat::Ico,
            width: largest,
            height: largest,
            sizes,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct GeneratorInfo {
    pub name: String,
    pub version: String,
    pub note: String,
}

impl Default for GeneratorInfo {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            note: "Temporary placeholder images, replace before production use".to_string(),
        }
    }
}

/// Root of `placeholders.json`
#[derive(Serialize, Debug, Clone)]
pub struct Manifest {
    pub generator: GeneratorInfo,
    pub assets: Vec<GeneratedAsset>,
}

impl Manifest {
    pub fn new(assets: Vec<GeneratedAsset>) -> Self {
        Self {
            generator: GeneratorInfo::default(),
            assets,
        }
    }

    /// Serialize into `dir/placeholders.json` and return the written path
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let manifest_path = dir.join(MANIFEST_FILE);
        let manifest_json =
            serde_json::to_string_pretty(self).context("Failed to serialize manifest")?;

        std::fs::write(&manifest_path, manifest_json)
            .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

        Ok(manifest_path)
    }
}
