// SPDX-License-Identifier: GPL-3.0-or-later
// src/host/mod.rs
//
// Host boundary: focal-point storage contract and implementations.

pub mod sidecar;

pub use sidecar::SidecarStore;

use anyhow::Result;

use crate::domain::FocalFields;

/// Storage collaborator for focal points.
///
/// The two field values pass through unchanged; interpreting them (or
/// rejecting bad ones) is the binding's job. Empty fields mean "no focal
/// point set".
pub trait FocalStore {
    /// Stored fields for an asset, or `None` when nothing was ever saved.
    fn load(&self, asset_id: &str) -> Option<FocalFields>;

    /// Persist the fields for an asset.
    fn save(&mut self, asset_id: &str, fields: &FocalFields) -> Result<()>;
}

/// In-memory store used by tests exercising the storage contract.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, FocalFields>,
}

impl FocalStore for MemoryStore {
    fn load(&self, asset_id: &str) -> Option<FocalFields> {
        self.entries.get(asset_id).cloned()
    }

    fn save(&mut self, asset_id: &str, fields: &FocalFields) -> Result<()> {
        self.entries.insert(asset_id.to_owned(), fields.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load("abc"), None);

        let fields = FocalFields {
            x: "50".to_owned(),
            y: "30".to_owned(),
        };
        store.save("abc", &fields).unwrap();

        assert_eq!(store.load("abc"), Some(fields));
        assert_eq!(store.load("other"), None);
    }
}
