// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/update.rs
//
// Message handling over the application model and the focal-point store.

use crate::config::AppConfig;
use crate::domain::{FieldBinding, asset};
use crate::host::FocalStore;
use crate::media::RasterImage;
use crate::ui::message::AppMessage;
use crate::ui::model::AppModel;

/// Apply a message to the model. All handlers are synchronous and run to
/// completion; window-level concerns (panels, config writes) live in
/// `app.rs`.
pub fn update(
    model: &mut AppModel,
    store: &mut dyn FocalStore,
    config: &AppConfig,
    message: &AppMessage,
) {
    match message {
        AppMessage::OpenPath(path) => {
            model.assets = asset::scan(path);
            model.picker.close();

            if model.assets.is_empty() {
                log::warn!("no image assets under {}", path.display());
                model.current_index = None;
                model.image = None;
                model.image_dimensions = None;
                model.binding = FieldBinding::default();
            } else {
                select_asset(model, store, 0);
            }
        }

        AppMessage::NextAsset => {
            if let Some(index) = model.current_index
                && !model.assets.is_empty()
            {
                let next = (index + 1) % model.assets.len();
                select_asset(model, store, next);
            }
        }

        AppMessage::PrevAsset => {
            if let Some(index) = model.current_index
                && !model.assets.is_empty()
            {
                let prev = (index + model.assets.len() - 1) % model.assets.len();
                select_asset(model, store, prev);
            }
        }

        AppMessage::OpenPicker => {
            // The trigger is only rendered for eligible assets; this guard
            // backs the same precondition for the keyboard path.
            let target = model.current_asset().and_then(|asset| {
                asset
                    .is_eligible(&config.focal_mime_types)
                    .then(|| asset.path.clone())
            });

            if let Some(path) = target {
                let current = model.binding.read();
                model.picker.open(current, path);
            }
        }

        AppMessage::ClosePicker => {
            model.picker.close();
        }

        AppMessage::PickerPointerMoved { x, y, area } => {
            model.picker.pointer_move(*area, *x, *y);
        }

        AppMessage::PickerPointerLeft => {
            model.picker.pointer_leave();
        }

        AppMessage::PickerCommit { x, y, area } => {
            if let Some(point) = model.picker.commit(*area, *x, *y) {
                model.binding.write(point);
            }
        }

        AppMessage::ClearFocalPoint => {
            model.binding.clear();
        }

        AppMessage::SaveFields => {
            if let Some(asset) = model.current_asset() {
                let id = asset.id.clone();
                let name = asset.display_name();

                match store.save(&id, model.binding.fields()) {
                    Ok(()) => {
                        model.binding.take_changed();
                        log::info!("saved focal point for {name}");
                    }
                    Err(err) => {
                        log::error!("save failed: {err:#}");
                        model.set_error(crate::fl!("save-failed"));
                    }
                }
            }
        }

        // Window-level; handled in app.rs before delegation.
        AppMessage::ToggleContextPage(_) => {}

        AppMessage::ClearError => {
            model.clear_error();
        }
    }
}

/// Switch the current asset: rebind fields from the store and decode the
/// image for display. Unsaved field edits are discarded, as dismissing the
/// settings panel does.
pub fn select_asset(model: &mut AppModel, store: &mut dyn FocalStore, index: usize) {
    let Some(asset) = model.assets.get(index).cloned() else {
        return;
    };

    model.current_index = Some(index);
    model.binding = FieldBinding::new(store.load(&asset.id).unwrap_or_default());
    model.picker.close();

    match RasterImage::open(&asset.path) {
        Ok(raster) => {
            model.image = Some(raster.handle);
            model.image_dimensions = Some(raster.dimensions);
        }
        Err(err) => {
            log::error!("failed to decode {}: {err}", asset.path.display());
            model.image = None;
            model.image_dimensions = None;
        }
    }
}
