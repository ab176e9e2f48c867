// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/binding.rs
//
// Field binding adapter: the pair of string-valued fields holding the
// focal point for the asset being edited, plus preview/clear state.

use super::focal::FocalPoint;

/// Raw focal-point field pair, stored and persisted as decimal strings.
/// Empty strings mean "no focal point set".
///
/// This is the unit the host persists unchanged on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocalFields {
    pub x: String,
    pub y: String,
}

impl FocalFields {
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.y.is_empty()
    }
}

/// Binds the focal-point fields of the active settings panel.
///
/// Constructed by the host once per panel with the fields it resolved;
/// the picker and settings view mutate fields only through this adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBinding {
    fields: FocalFields,
    changed: bool,
}

impl FieldBinding {
    pub fn new(fields: FocalFields) -> Self {
        Self {
            fields,
            changed: false,
        }
    }

    /// The currently bound point, or `None` if either field is empty or
    /// holds an invalid value.
    pub fn read(&self) -> Option<FocalPoint> {
        FocalPoint::parse(&self.fields.x, &self.fields.y)
    }

    /// Set both fields from `point` and raise the change notification.
    pub fn write(&mut self, point: FocalPoint) {
        self.fields.x = FocalPoint::format_coord(point.x());
        self.fields.y = FocalPoint::format_coord(point.y());
        self.changed = true;
    }

    /// Empty both fields and raise the change notification. Idempotent with
    /// respect to the bound value.
    pub fn clear(&mut self) {
        self.fields.x.clear();
        self.fields.y.clear();
        self.changed = true;
    }

    /// Preview label for the bound value, `None` when no valid point is set
    /// (the view renders its localized "not set" message instead).
    pub fn preview_text(&self) -> Option<String> {
        self.read().map(|point| point.to_string())
    }

    /// Whether the clear affordance should be visible.
    pub fn clear_visible(&self) -> bool {
        self.read().is_some()
    }

    /// Consume the change notification. Stands in for the original's field
    /// change event; true when fields were touched since the last take.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    pub fn fields(&self) -> &FocalFields {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_read_as_absent() {
        let binding = FieldBinding::default();
        assert_eq!(binding.read(), None);
        assert_eq!(binding.preview_text(), None);
        assert!(!binding.clear_visible());
    }

    #[test]
    fn half_set_fields_read_as_absent() {
        let binding = FieldBinding::new(FocalFields {
            x: "50".to_owned(),
            y: String::new(),
        });
        assert_eq!(binding.read(), None);
    }

    #[test]
    fn invalid_stored_values_read_as_absent() {
        let binding = FieldBinding::new(FocalFields {
            x: "banana".to_owned(),
            y: "250".to_owned(),
        });
        assert_eq!(binding.read(), None);
        assert!(!binding.clear_visible());
    }

    #[test]
    fn write_read_round_trip() {
        let mut binding = FieldBinding::default();
        let point = FocalPoint::new(50.0, 30.0);

        binding.write(point);

        assert_eq!(binding.read(), Some(point));
        assert_eq!(binding.fields().x, "50");
        assert_eq!(binding.fields().y, "30");
        assert!(binding.take_changed());
    }

    #[test]
    fn write_updates_preview_and_clear_affordance() {
        let mut binding = FieldBinding::default();
        binding.write(FocalPoint::new(50.0, 30.0));

        assert_eq!(binding.preview_text().as_deref(), Some("50%, 30%"));
        assert!(binding.clear_visible());
    }

    #[test]
    fn clear_resets_to_absent() {
        let mut binding = FieldBinding::default();
        binding.write(FocalPoint::new(50.0, 50.0));
        binding.take_changed();

        binding.clear();

        assert_eq!(binding.read(), None);
        assert_eq!(binding.preview_text(), None);
        assert!(!binding.clear_visible());
        assert!(binding.take_changed());
    }

    #[test]
    fn clear_twice_equals_clear_once() {
        let mut once = FieldBinding::default();
        once.write(FocalPoint::new(50.0, 50.0));
        once.clear();

        let mut twice = once.clone();
        twice.clear();

        assert_eq!(once, twice);
        assert!(twice.fields().is_empty());
    }

    #[test]
    fn change_notification_is_consumable() {
        let mut binding = FieldBinding::default();
        assert!(!binding.take_changed());

        binding.write(FocalPoint::new(1.0, 2.0));
        assert!(binding.take_changed());
        assert!(!binding.take_changed());
    }
}
