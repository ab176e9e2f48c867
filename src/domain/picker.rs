// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/picker.rs
//
// Picker session state machine and pointer-to-percentage conversion.

use std::path::PathBuf;

use super::focal::FocalPoint;

/// Viewport rectangle of the displayed image, in logical pixels. Pointer
/// positions are converted to percentages relative to this box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingArea {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl TrackingArea {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left
            && x <= self.left + self.width
            && y >= self.top
            && y <= self.top + self.height
    }

    /// Convert a viewport pointer position to percentage coordinates,
    /// rounded to 4 decimal places.
    ///
    /// Degenerate (zero-sized) areas yield `(0, 0)` rather than dividing
    /// by zero; the picker is never laid out that way in practice.
    pub fn to_percent(&self, client_x: f32, client_y: f32) -> FocalPoint {
        if self.width <= 0.0 || self.height <= 0.0 {
            return FocalPoint::default();
        }

        let px = f64::from(client_x - self.left) / f64::from(self.width) * 100.0;
        let py = f64::from(client_y - self.top) / f64::from(self.height) * 100.0;
        FocalPoint::new(px, py)
    }
}

/// Pointer-driven sub-state of an open picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerPhase {
    /// Pointer outside the tracking area; crosshair rests on the committed
    /// (or default) point.
    #[default]
    Idle,
    /// Pointer inside the tracking area; crosshair follows it.
    Previewing,
}

#[derive(Debug, Clone, PartialEq)]
enum PickerState {
    Closed,
    Open {
        source: PathBuf,
        /// Point stored when the session opened; the crosshair reverts to
        /// it when the pointer leaves without committing.
        committed: Option<FocalPoint>,
        crosshair: FocalPoint,
        phase: PointerPhase,
    },
}

/// Modal picker session: `Closed -> Open -> Closed`.
///
/// At most one session exists; opening while open replaces the session
/// outright (destroy-then-recreate). All transitions are synchronous and
/// pointer moves are last-write-wins.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerSession {
    state: PickerState,
}

impl Default for PickerSession {
    fn default() -> Self {
        Self {
            state: PickerState::Closed,
        }
    }
}

impl PickerSession {
    /// Open the picker over `source` with the currently stored point.
    /// The initial crosshair is the stored point, or `(0, 0)` when unset.
    pub fn open(&mut self, current: Option<FocalPoint>, source: PathBuf) {
        self.state = PickerState::Open {
            source,
            committed: current,
            crosshair: current.unwrap_or_default(),
            phase: PointerPhase::Idle,
        };
    }

    /// Track the pointer inside the area: move the crosshair to the pointer
    /// position. Pure visual feedback; no fields are written.
    pub fn pointer_move(&mut self, area: TrackingArea, client_x: f32, client_y: f32) {
        if let PickerState::Open {
            crosshair, phase, ..
        } = &mut self.state
        {
            *crosshair = area.to_percent(client_x, client_y);
            *phase = PointerPhase::Previewing;
        }
    }

    /// The pointer left the tracking area: discard the preview and snap the
    /// crosshair back to the committed (or default) point.
    pub fn pointer_leave(&mut self) {
        if let PickerState::Open {
            committed,
            crosshair,
            phase,
            ..
        } = &mut self.state
        {
            *crosshair = committed.unwrap_or_default();
            *phase = PointerPhase::Idle;
        }
    }

    /// Commit the pointer position as the new focal point and close the
    /// session. This is the only path that produces a durable point.
    pub fn commit(&mut self, area: TrackingArea, client_x: f32, client_y: f32) -> Option<FocalPoint> {
        if !self.is_open() {
            return None;
        }

        let point = area.to_percent(client_x, client_y);
        self.close();
        Some(point)
    }

    /// Tear the session down. Idempotent.
    pub fn close(&mut self) {
        self.state = PickerState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PickerState::Open { .. })
    }

    pub fn crosshair(&self) -> Option<FocalPoint> {
        match &self.state {
            PickerState::Open { crosshair, .. } => Some(*crosshair),
            PickerState::Closed => None,
        }
    }

    pub fn phase(&self) -> PointerPhase {
        match &self.state {
            PickerState::Open { phase, .. } => *phase,
            PickerState::Closed => PointerPhase::Idle,
        }
    }

    pub fn source(&self) -> Option<&PathBuf> {
        match &self.state {
            PickerState::Open { source, .. } => Some(source),
            PickerState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> TrackingArea {
        // 200x100 box at viewport offset (50, 50).
        TrackingArea::new(50.0, 50.0, 200.0, 100.0)
    }

    fn source() -> PathBuf {
        PathBuf::from("photo.jpg")
    }

    #[test]
    fn open_without_stored_point_starts_at_origin() {
        let mut picker = PickerSession::default();
        picker.open(None, source());

        assert!(picker.is_open());
        assert_eq!(picker.crosshair(), Some(FocalPoint::default()));
        assert_eq!(picker.phase(), PointerPhase::Idle);
    }

    #[test]
    fn open_with_stored_point_starts_there() {
        let mut picker = PickerSession::default();
        picker.open(Some(FocalPoint::new(20.0, 40.0)), source());

        assert_eq!(picker.crosshair(), Some(FocalPoint::new(20.0, 40.0)));
    }

    #[test]
    fn reopen_replaces_the_session() {
        let mut picker = PickerSession::default();
        picker.open(None, source());
        picker.pointer_move(area(), 150.0, 80.0);

        picker.open(Some(FocalPoint::new(10.0, 10.0)), PathBuf::from("other.png"));

        assert_eq!(picker.crosshair(), Some(FocalPoint::new(10.0, 10.0)));
        assert_eq!(picker.phase(), PointerPhase::Idle);
        assert_eq!(picker.source(), Some(&PathBuf::from("other.png")));
    }

    #[test]
    fn pointer_move_converts_to_percentages() {
        let mut picker = PickerSession::default();
        picker.open(None, source());
        picker.pointer_move(area(), 150.0, 80.0);

        assert_eq!(picker.crosshair(), Some(FocalPoint::new(50.0, 30.0)));
        assert_eq!(picker.phase(), PointerPhase::Previewing);
    }

    #[test]
    fn interior_positions_stay_in_range() {
        let a = area();
        for x in 51..250 {
            for y in 51..150 {
                let p = a.to_percent(x as f32, y as f32);
                assert!((0.0..=100.0).contains(&p.x()), "x out of range at {x},{y}");
                assert!((0.0..=100.0).contains(&p.y()), "y out of range at {x},{y}");
            }
        }
    }

    #[test]
    fn leave_without_commit_reverts_to_stored_point() {
        let mut picker = PickerSession::default();
        picker.open(Some(FocalPoint::new(20.0, 40.0)), source());

        // Preview roughly (90, 10), then leave.
        picker.pointer_move(area(), 230.0, 60.0);
        assert_eq!(picker.crosshair(), Some(FocalPoint::new(90.0, 10.0)));

        picker.pointer_leave();
        assert_eq!(picker.crosshair(), Some(FocalPoint::new(20.0, 40.0)));
        assert_eq!(picker.phase(), PointerPhase::Idle);
    }

    #[test]
    fn leave_without_stored_point_reverts_to_origin() {
        let mut picker = PickerSession::default();
        picker.open(None, source());
        picker.pointer_move(area(), 100.0, 100.0);

        picker.pointer_leave();
        assert_eq!(picker.crosshair(), Some(FocalPoint::default()));
    }

    #[test]
    fn commit_returns_point_and_closes() {
        let mut picker = PickerSession::default();
        picker.open(None, source());

        let point = picker.commit(area(), 150.0, 80.0);
        assert_eq!(point, Some(FocalPoint::new(50.0, 30.0)));
        assert!(!picker.is_open());
    }

    #[test]
    fn commit_while_closed_is_a_no_op() {
        let mut picker = PickerSession::default();
        assert_eq!(picker.commit(area(), 150.0, 80.0), None);
    }

    #[test]
    fn close_is_idempotent() {
        let mut picker = PickerSession::default();
        picker.open(None, source());

        picker.close();
        let after_once = picker.clone();
        picker.close();
        assert_eq!(picker, after_once);
    }

    #[test]
    fn moves_are_last_write_wins() {
        let mut picker = PickerSession::default();
        picker.open(None, source());

        picker.pointer_move(area(), 60.0, 60.0);
        picker.pointer_move(area(), 150.0, 80.0);
        assert_eq!(picker.crosshair(), Some(FocalPoint::new(50.0, 30.0)));
    }

    #[test]
    fn degenerate_area_yields_origin() {
        let a = TrackingArea::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(a.to_percent(10.0, 10.0), FocalPoint::default());
    }

    #[test]
    fn contains_checks_bounds() {
        let a = area();
        assert!(a.contains(50.0, 50.0));
        assert!(a.contains(250.0, 150.0));
        assert!(!a.contains(49.0, 60.0));
        assert!(!a.contains(100.0, 151.0));
    }
}
