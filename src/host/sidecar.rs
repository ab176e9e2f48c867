// SPDX-License-Identifier: GPL-3.0-or-later
// src/host/sidecar.rs
//
// JSON sidecar store: per-asset focal-point fields in a file next to the
// media directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::FocalStore;
use crate::domain::FocalFields;

/// On-disk record: the two field values, stored verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
struct StoredFields {
    #[serde(rename = "focal-point-x", default)]
    x: String,
    #[serde(rename = "focal-point-y", default)]
    y: String,
}

/// File-backed focal-point store. The file holds a map of asset id to
/// field record and is rewritten whole on every save; libraries are small
/// enough that this is fine.
#[derive(Debug)]
pub struct SidecarStore {
    path: PathBuf,
    entries: BTreeMap<String, StoredFields>,
}

impl SidecarStore {
    /// Open the store at `path`, reading existing entries if the file is
    /// present. A missing file is an empty store, not an error; an
    /// unreadable one is logged and treated as empty.
    pub fn open(path: PathBuf) -> Self {
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    log::warn!("ignoring malformed store {}: {err}", path.display());
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Self { path, entries }
    }

    /// Default store location for a media directory.
    pub fn for_media_dir(dir: &Path) -> Self {
        Self::open(dir.join(crate::constant::STORE_FILE))
    }

    fn flush(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing focal-point store {}", self.path.display()))
    }
}

impl FocalStore for SidecarStore {
    fn load(&self, asset_id: &str) -> Option<FocalFields> {
        self.entries.get(asset_id).map(|record| FocalFields {
            x: record.x.clone(),
            y: record.y.clone(),
        })
    }

    fn save(&mut self, asset_id: &str, fields: &FocalFields) -> Result<()> {
        self.entries.insert(
            asset_id.to_owned(),
            StoredFields {
                x: fields.x.clone(),
                y: fields.y.clone(),
            },
        );
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(x: &str, y: &str) -> FocalFields {
        FocalFields {
            x: x.to_owned(),
            y: y.to_owned(),
        }
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = SidecarStore::for_media_dir(dir.path());
        assert_eq!(store.load("abc"), None);
    }

    #[test]
    fn save_then_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = SidecarStore::for_media_dir(dir.path());
        store.save("abc", &fields("50", "30")).unwrap();

        let reloaded = SidecarStore::for_media_dir(dir.path());
        assert_eq!(reloaded.load("abc"), Some(fields("50", "30")));
        assert_eq!(reloaded.load("missing"), None);
    }

    #[test]
    fn cleared_fields_persist_as_empty() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = SidecarStore::for_media_dir(dir.path());
        store.save("abc", &fields("50", "30")).unwrap();
        store.save("abc", &FocalFields::default()).unwrap();

        let reloaded = SidecarStore::for_media_dir(dir.path());
        assert_eq!(reloaded.load("abc"), Some(FocalFields::default()));
    }

    #[test]
    fn stored_json_uses_field_keys() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = SidecarStore::for_media_dir(dir.path());
        store.save("abc", &fields("12.3456", "7.5")).unwrap();

        let raw = fs::read_to_string(dir.path().join(crate::constant::STORE_FILE)).unwrap();
        assert!(raw.contains("\"focal-point-x\": \"12.3456\""));
        assert!(raw.contains("\"focal-point-y\": \"7.5\""));
    }

    #[test]
    fn malformed_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::constant::STORE_FILE);
        fs::write(&path, "not json").unwrap();

        let store = SidecarStore::open(path);
        assert_eq!(store.load("abc"), None);
    }
}
