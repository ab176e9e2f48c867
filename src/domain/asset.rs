// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/asset.rs
//
// Image asset identity, mime detection, and focal-point eligibility.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Derive an image mime type from the file extension.
///
/// Covers the formats a media library commonly holds; anything unknown is
/// simply not an asset.
pub fn mime_from_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();

    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        "avif" => Some("image/avif"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// An image in the opened library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub path: PathBuf,
    /// Stable opaque id: hex SHA-256 of the canonical path.
    pub id: String,
    pub mime: &'static str,
}

impl ImageAsset {
    /// Build an asset from a path, or `None` when the extension is not a
    /// known image type.
    pub fn from_path(path: &Path) -> Option<Self> {
        let mime = mime_from_path(path)?;
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        let mut hasher = Sha256::new();
        hasher.update(canonical.to_string_lossy().as_bytes());
        let id = format!("{:x}", hasher.finalize());

        Some(Self {
            path: path.to_path_buf(),
            id,
            mime,
        })
    }

    /// Whether this asset may carry a focal point. Only allow-listed mime
    /// types render the picker trigger; everything else gets no control.
    pub fn is_eligible(&self, allow_list: &[String]) -> bool {
        allow_list.iter().any(|mime| mime == self.mime)
    }

    /// File name for display, falling back to the full path.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Scan a directory for image assets, sorted by file name. A single file
/// path yields a one-element list.
pub fn scan(path: &Path) -> Vec<ImageAsset> {
    if path.is_file() {
        return ImageAsset::from_path(path).into_iter().collect();
    }

    let Ok(entries) = std::fs::read_dir(path) else {
        log::warn!("cannot read media directory {}", path.display());
        return Vec::new();
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    paths
        .iter()
        .filter_map(|p| ImageAsset::from_path(p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str) -> ImageAsset {
        ImageAsset::from_path(Path::new(name)).unwrap()
    }

    fn default_allow_list() -> Vec<String> {
        vec!["image/png".to_owned(), "image/jpeg".to_owned()]
    }

    #[test]
    fn mime_detection() {
        assert_eq!(mime_from_path(Path::new("a.png")), Some("image/png"));
        assert_eq!(mime_from_path(Path::new("a.JPG")), Some("image/jpeg"));
        assert_eq!(mime_from_path(Path::new("a.jpeg")), Some("image/jpeg"));
        assert_eq!(mime_from_path(Path::new("a.webp")), Some("image/webp"));
        assert_eq!(mime_from_path(Path::new("a.txt")), None);
        assert_eq!(mime_from_path(Path::new("noext")), None);
    }

    #[test]
    fn png_and_jpeg_are_eligible_by_default() {
        let allow = default_allow_list();
        assert!(asset("a.png").is_eligible(&allow));
        assert!(asset("a.jpg").is_eligible(&allow));
        assert!(asset("a.jpeg").is_eligible(&allow));
    }

    #[test]
    fn other_types_are_ineligible_by_default() {
        let allow = default_allow_list();
        assert!(!asset("a.gif").is_eligible(&allow));
        assert!(!asset("a.webp").is_eligible(&allow));
        assert!(!asset("a.svg").is_eligible(&allow));
    }

    #[test]
    fn allow_list_is_configuration() {
        let mut allow = default_allow_list();
        allow.push("image/webp".to_owned());
        assert!(asset("a.webp").is_eligible(&allow));
    }

    #[test]
    fn ids_are_stable_and_distinct() {
        assert_eq!(asset("a.png").id, asset("a.png").id);
        assert_ne!(asset("a.png").id, asset("b.png").id);
    }
}
