// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Upper bound of a focal coordinate (percentage of the image edge).
pub const COORD_MAX: f64 = 100.0;

/// Scale factor for rounding coordinates to 4 fractional digits.
pub const COORD_SCALE: f64 = 10_000.0;

/// File name of the sidecar store inside a media directory.
pub const STORE_FILE: &str = "focal-points.json";
