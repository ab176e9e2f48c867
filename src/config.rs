// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application with cosmic-config support.

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use std::path::PathBuf;

/// Global configuration for the application.
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq)]
#[version = 1]
pub struct AppConfig {
    /// Optional default directory to open images from.
    pub default_media_dir: Option<PathBuf>,
    /// Whether the context drawer (right panel) is visible.
    pub context_drawer_visible: bool,
    /// Mime types eligible for focal-point selection.
    ///
    /// Assets with any other type never render the picker trigger.
    pub focal_mime_types: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_media_dir: dirs::picture_dir().or_else(dirs::home_dir),
            context_drawer_visible: true,
            focal_mime_types: vec!["image/png".to_owned(), "image/jpeg".to_owned()],
        }
    }
}
