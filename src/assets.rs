//! Conventional image assets.
//!
//! The landing page expects a logo and a hero image under `public/`. The
//! terminal can't draw them, so we only probe their dimensions to label the
//! placeholder panels. Missing files are normal and fall back to text.

use std::path::{Path, PathBuf};

use crate::error::{StudyError, StudyResult};

pub const LOGO_PATH: &str = "public/logo.png";
pub const HERO_PATH: &str = "public/hero.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub path: PathBuf,
    /// (width, height) in pixels
    pub dimensions: (u32, u32),
}

impl ImageAsset {
    /// Short caption like "hero.png 1200x800"
    pub fn caption(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{} {}x{}", name, self.dimensions.0, self.dimensions.1)
    }
}

/// Assets found under an asset root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetCatalog {
    pub logo: Option<ImageAsset>,
    pub hero: Option<ImageAsset>,
}

impl AssetCatalog {
    /// Probe both conventional paths under `root`.
    ///
    /// Unreadable files are logged and treated as missing.
    pub fn discover(root: &Path) -> Self {
        Self {
            logo: probe_or_warn(&root.join(LOGO_PATH)),
            hero: probe_or_warn(&root.join(HERO_PATH)),
        }
    }
}

fn probe_or_warn(path: &Path) -> Option<ImageAsset> {
    match probe(path) {
        Ok(asset) => asset,
        Err(e) => {
            tracing::warn!(category = %e.category(), "{}", e);
            None
        }
    }
}

/// Read image dimensions. `Ok(None)` when the file does not exist.
pub fn probe(path: &Path) -> StudyResult<Option<ImageAsset>> {
    if !path.exists() {
        return Ok(None);
    }
    let dimensions = image::image_dimensions(path).map_err(|e| StudyError::Asset {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), ?dimensions, "Found asset");
    Ok(Some(ImageAsset {
        path: path.to_path_buf(),
        dimensions,
    }))
}
