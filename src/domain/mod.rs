// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain module root: focal-point value, picker session, field binding,
// and asset eligibility. No UI concerns.

pub mod asset;
pub mod binding;
pub mod focal;
pub mod picker;

pub use asset::ImageAsset;
pub use binding::{FieldBinding, FocalFields};
pub use focal::FocalPoint;
pub use picker::{PickerSession, TrackingArea};
