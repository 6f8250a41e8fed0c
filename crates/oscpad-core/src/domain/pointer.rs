//! The pointer state machine: touch phase, pending target, and the
//! anti-idempotence commit rule.
//!
//! The control surface streams normalized `(x, y)` positions in `[0, 1]`
//! while a finger drags across the pad, then a touch-phase message when the
//! finger lifts.  The bridge moves the OS pointer once per gesture, on
//! release, to the last position streamed.
//!
//! # The anti-idempotence nudge
//!
//! The OS move primitive is a no-op when the target equals the pointer's
//! last-known position.  A drag gesture that returns to the same spot would
//! therefore produce no observable move at all, which breaks click-drag
//! workflows on the controlled application.  The commit step works around
//! this: whenever the pending coordinate equals the current one on an axis,
//! the committed target is nudged by one unit on that axis, and `current`
//! records the *nudged* value.  Consecutive identical gestures keep
//! alternating between the true target and target+1, so every commit
//! produces a real move.  This rule is deliberate; do not "fix" it away.

use tracing::trace;

/// Whether a finger is currently on the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchPhase {
    #[default]
    Idle,
    Touching,
}

/// Pointer session state surviving across messages.
///
/// `current_*` is the last coordinate actually sent to the OS (nudge
/// included); `pending_*` is the most recently computed target from a
/// normalized update.  `max_*` and `border` derive from configuration:
/// `max = screen_extent − 2·border`, keeping a dead zone at the screen
/// edges that the pad can never drive the pointer into.
#[derive(Debug, Clone)]
pub struct PointerPad {
    current_x: f64,
    current_y: f64,
    pending_x: f64,
    pending_y: f64,
    max_x: f64,
    max_y: f64,
    border: f64,
    phase: TouchPhase,
}

impl PointerPad {
    /// Creates the state machine for a screen of the given extent with the
    /// given dead-zone border.  Coordinates start at `(0, 0)`.
    pub fn new(screen_width: f64, screen_height: f64, border: f64) -> Self {
        Self {
            current_x: 0.0,
            current_y: 0.0,
            pending_x: 0.0,
            pending_y: 0.0,
            max_x: screen_width - border * 2.0,
            max_y: screen_height - border * 2.0,
            border,
            phase: TouchPhase::Idle,
        }
    }

    /// The current touch phase.
    pub fn phase(&self) -> TouchPhase {
        self.phase
    }

    /// The last coordinate actually committed to the OS.
    pub fn current(&self) -> (f64, f64) {
        (self.current_x, self.current_y)
    }

    /// The most recently computed pending target.
    pub fn pending(&self) -> (f64, f64) {
        (self.pending_x, self.pending_y)
    }

    /// A finger touched the pad.  No coordinate changes; the caller may log
    /// the OS cursor position as a gesture-start diagnostic.
    pub fn touch_begin(&mut self) {
        self.phase = TouchPhase::Touching;
    }

    /// Records a normalized position update as the pending target.
    ///
    /// The pad's vertical convention is bottom-zero while the screen's
    /// origin is top-left, so `y` is inverted:
    /// `pending_y = (1 − y)·max_y + border`.
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.pending_x = x * self.max_x + self.border;
        self.pending_y = (1.0 - y) * self.max_y + self.border;
    }

    /// The finger lifted: commits the pending target and returns the
    /// coordinate to move the OS pointer to.
    pub fn touch_end(&mut self) -> (f64, f64) {
        self.phase = TouchPhase::Idle;
        self.commit()
    }

    /// Commits an immediate move to the pad center.  Valid from any phase;
    /// no prior touch-begin is required.
    pub fn center(&mut self) -> (f64, f64) {
        self.pending_x = 0.5 * self.max_x + self.border;
        self.pending_y = 0.5 * self.max_y + self.border;
        self.commit()
    }

    /// Finalizes `pending` into the target actually sent, applying the
    /// anti-idempotence nudge independently per axis, and records that
    /// target as `current`.
    fn commit(&mut self) -> (f64, f64) {
        self.current_x = if self.current_x == self.pending_x {
            self.pending_x + 1.0
        } else {
            self.pending_x
        };
        self.current_y = if self.current_y == self.pending_y {
            self.pending_y + 1.0
        } else {
            self.pending_y
        };
        trace!(x = self.current_x, y = self.current_y, "pointer commit");
        (self.current_x, self.current_y)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// The documented default geometry: 1920×1200 screen, 10-unit border.
    fn default_pad() -> PointerPad {
        PointerPad::new(1920.0, 1200.0, 10.0)
    }

    #[test]
    fn test_usable_extent_subtracts_border_on_both_sides() {
        let mut pad = default_pad();
        // max = extent − 2·border: the pad corners map to the border inset,
        // never to the physical screen edge.
        pad.set_target(0.0, 1.0);
        assert_eq!(pad.pending(), (10.0, 10.0));
        pad.set_target(1.0, 0.0);
        assert_eq!(pad.pending(), (1910.0, 1190.0));
    }

    #[test]
    fn test_set_target_inverts_vertical_axis() {
        let mut pad = default_pad();

        // y = 0 on the pad is the *bottom* of the screen.
        pad.set_target(0.0, 0.0);
        assert_eq!(pad.pending(), (10.0, 1190.0));

        // y = 1 on the pad is the *top* of the screen.
        pad.set_target(0.0, 1.0);
        assert_eq!(pad.pending(), (10.0, 10.0));
    }

    #[test]
    fn test_vertical_inversion_holds_across_the_range() {
        let mut pad = default_pad();
        for y in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
            pad.set_target(0.3, y);
            let (_, py) = pad.pending();
            assert_eq!(py, (1.0 - y) * 1180.0 + 10.0, "y = {y}");
        }
    }

    #[test]
    fn test_midpoint_scenario_from_documented_defaults() {
        // border 10, max 1900×1180: normalized (0.5, 0.5) → (960, 600).
        let mut pad = default_pad();
        pad.set_target(0.5, 0.5);
        assert_eq!(pad.pending(), (960.0, 600.0));
    }

    #[test]
    fn test_touch_begin_sets_phase_without_touching_coordinates() {
        let mut pad = default_pad();
        pad.set_target(0.5, 0.5);
        let pending_before = pad.pending();
        let current_before = pad.current();

        pad.touch_begin();

        assert_eq!(pad.phase(), TouchPhase::Touching);
        assert_eq!(pad.pending(), pending_before);
        assert_eq!(pad.current(), current_before);
    }

    #[test]
    fn test_touch_end_returns_pending_and_goes_idle() {
        let mut pad = default_pad();
        pad.touch_begin();
        pad.set_target(0.5, 0.5);

        let target = pad.touch_end();

        assert_eq!(target, (960.0, 600.0));
        assert_eq!(pad.phase(), TouchPhase::Idle);
        assert_eq!(pad.current(), (960.0, 600.0));
    }

    #[test]
    fn test_committing_same_coordinate_twice_nudges_by_one_on_both_axes() {
        let mut pad = default_pad();

        pad.set_target(0.5, 0.5);
        let first = pad.touch_end();

        // Same normalized coordinate again — the OS would ignore an
        // identical move, so the commit must differ by exactly (1, 1).
        pad.set_target(0.5, 0.5);
        let second = pad.touch_end();

        assert_eq!(first, (960.0, 600.0));
        assert_eq!(second, (961.0, 601.0));
    }

    #[test]
    fn test_third_identical_commit_returns_to_the_true_target() {
        // current after the nudge is 961, which differs from pending 960,
        // so the third commit is un-nudged again: targets alternate.
        let mut pad = default_pad();
        pad.set_target(0.5, 0.5);
        assert_eq!(pad.touch_end(), (960.0, 600.0));
        pad.set_target(0.5, 0.5);
        assert_eq!(pad.touch_end(), (961.0, 601.0));
        pad.set_target(0.5, 0.5);
        assert_eq!(pad.touch_end(), (960.0, 600.0));
    }

    #[test]
    fn test_nudge_applies_independently_per_axis() {
        let mut pad = default_pad();
        pad.set_target(0.5, 0.5);
        pad.touch_end(); // current = (960, 600)

        // x coincides, y does not: only x is nudged.
        pad.set_target(0.5, 0.25);
        let target = pad.touch_end();
        assert_eq!(target, (961.0, 895.0));
    }

    #[test]
    fn test_center_commits_without_prior_touch_begin() {
        let mut pad = default_pad();
        assert_eq!(pad.phase(), TouchPhase::Idle);

        let target = pad.center();

        assert_eq!(target, (960.0, 600.0));
        assert_eq!(pad.phase(), TouchPhase::Idle);
    }

    #[test]
    fn test_center_twice_in_a_row_also_nudges() {
        let mut pad = default_pad();
        let first = pad.center();
        let second = pad.center();
        assert_eq!(first, (960.0, 600.0));
        assert_eq!(second, (961.0, 601.0));
    }

    #[test]
    fn test_initial_commit_at_origin_is_nudged() {
        // current and pending both start at (0, 0), so the very first
        // commit of an un-updated pad already triggers the nudge.
        let mut pad = default_pad();
        let target = pad.touch_end();
        assert_eq!(target, (1.0, 1.0));
    }
}
