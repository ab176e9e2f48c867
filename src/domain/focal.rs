// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/focal.rs
//
// Focal point value type.

use std::fmt;

use crate::constant::{COORD_MAX, COORD_SCALE};

/// A focal point on an image, as percentage offsets from the left and top
/// edge. Both coordinates are always set together; an unset focal point is
/// `Option::<FocalPoint>::None`, which is distinct from `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FocalPoint {
    x: f64,
    y: f64,
}

impl FocalPoint {
    /// Build a focal point, clamping both coordinates to `[0, 100]` and
    /// rounding to 4 decimal places.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: round_coord(x.clamp(0.0, COORD_MAX)),
            y: round_coord(y.clamp(0.0, COORD_MAX)),
        }
    }

    /// Horizontal offset in percent of the image width.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical offset in percent of the image height.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Parse a stored coordinate pair.
    ///
    /// Returns `None` if either string is empty, non-numeric, or outside
    /// `[0, 100]`. Bad stored values are treated as "not set", never as an
    /// error.
    pub fn parse(x: &str, y: &str) -> Option<Self> {
        let x = parse_coord(x)?;
        let y = parse_coord(y)?;
        Some(Self::new(x, y))
    }

    /// Render one coordinate as a decimal string with up to 4 fractional
    /// digits, trailing zeros trimmed (`50`, `12.3456`).
    pub fn format_coord(value: f64) -> String {
        let s = format!("{value:.4}");
        let s = s.trim_end_matches('0').trim_end_matches('.');
        s.to_owned()
    }
}

/// Displays as the preview label form, e.g. `50%, 30%`.
impl fmt::Display for FocalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}%, {}%",
            Self::format_coord(self.x),
            Self::format_coord(self.y)
        )
    }
}

fn round_coord(value: f64) -> f64 {
    (value * COORD_SCALE).round() / COORD_SCALE
}

fn parse_coord(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() || !(0.0..=COORD_MAX).contains(&value) {
        return None;
    }

    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rounds_to_four_decimals() {
        let point = FocalPoint::new(33.333_333, 66.666_666);
        assert_eq!(point.x(), 33.3333);
        assert_eq!(point.y(), 66.6667);
    }

    #[test]
    fn new_clamps_to_range() {
        let point = FocalPoint::new(-5.0, 140.0);
        assert_eq!(point.x(), 0.0);
        assert_eq!(point.y(), 100.0);
    }

    #[test]
    fn parse_valid_pair() {
        let point = FocalPoint::parse("50.0000", "30").unwrap();
        assert_eq!(point, FocalPoint::new(50.0, 30.0));
    }

    #[test]
    fn parse_rejects_empty_and_garbage() {
        assert!(FocalPoint::parse("", "30").is_none());
        assert!(FocalPoint::parse("50", "").is_none());
        assert!(FocalPoint::parse("abc", "30").is_none());
        assert!(FocalPoint::parse("50", "NaN").is_none());
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!(FocalPoint::parse("101", "30").is_none());
        assert!(FocalPoint::parse("50", "-1").is_none());
    }

    #[test]
    fn format_trims_trailing_zeros() {
        assert_eq!(FocalPoint::format_coord(50.0), "50");
        assert_eq!(FocalPoint::format_coord(0.0), "0");
        assert_eq!(FocalPoint::format_coord(12.3456), "12.3456");
        assert_eq!(FocalPoint::format_coord(7.5), "7.5");
    }

    #[test]
    fn display_preview_form() {
        assert_eq!(FocalPoint::new(50.0, 30.0).to_string(), "50%, 30%");
        assert_eq!(FocalPoint::new(12.3456, 0.5).to_string(), "12.3456%, 0.5%");
    }

    #[test]
    fn format_parse_round_trip() {
        let point = FocalPoint::new(37.8912, 65.4301);
        let restored = FocalPoint::parse(
            &FocalPoint::format_coord(point.x()),
            &FocalPoint::format_coord(point.y()),
        )
        .unwrap();
        assert_eq!(restored, point);
    }
}
