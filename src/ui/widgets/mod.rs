// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/widgets/mod.rs
//
// Custom widgets module.

pub mod focal_overlay;

pub use focal_overlay::focal_overlay;
