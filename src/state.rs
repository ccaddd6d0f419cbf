//! Per-unit button state latching and edge detection.
//!
//! [`ButtonStateTracker`] owns one [`UnitState`] per controller unit. Each
//! unit keeps three `u32` bitmasks over the logical button ids:
//!
//! - `pressed` — the raw state written by the current cycle's
//!   `press`/`release` calls (bit set ⇔ last observed magnitude non-zero).
//! - `changed` — buttons whose pressed/released classification differs from
//!   the *previously committed* state. Valid only between the cycle's last
//!   `press`/`release` and its `commit`.
//! - `committed` — the baseline latched by the last `commit`; the reference
//!   every `changed` bit is computed against.
//!
//! Signed magnitudes are retained per button for analog consumers, but the
//! pressed/released classification is solely `magnitude != 0`.
//!
//! # Cycle discipline
//! Within one poll cycle and one unit, the caller must (1) feed a
//! `press`/`release` for *every* button, (2) read `pressed_mask`/
//! `changed_mask` for hotkey evaluation, (3) `commit`. Because step 1 visits
//! every button, every `changed` bit is recomputed exactly once per cycle;
//! there is deliberately no skip-if-unchanged shortcut. `commit` is
//! idempotent: with no intervening writes, a second commit latches the same
//! baseline and leaves both masks untouched.

use crate::buttons::{PadButton, MAX_KEYS};
use crate::GAMEPAD_NUMBER;

/// Latched state for a single controller unit.
#[derive(Clone, Debug)]
pub struct UnitState {
    pressed: u32,
    changed: u32,
    committed: u32,
    magnitudes: [i32; MAX_KEYS],
}

impl Default for UnitState {
    fn default() -> Self {
        Self {
            pressed: 0,
            changed: 0,
            committed: 0,
            magnitudes: [0; MAX_KEYS],
        }
    }
}

impl UnitState {
    /// Record this cycle's observation for one button.
    ///
    /// The edge bit is computed against `committed`, not against the live
    /// `pressed` mask, so feeding the same button twice in one cycle is
    /// harmless (last write wins).
    fn set(&mut self, button: PadButton, magnitude: i32) {
        let bit = button.bit();
        self.magnitudes[button.index()] = magnitude;

        let was_pressed = self.committed & bit != 0;
        let is_pressed = magnitude != 0;

        if is_pressed {
            self.pressed |= bit;
        } else {
            self.pressed &= !bit;
        }
        if was_pressed != is_pressed {
            self.changed |= bit;
        } else {
            self.changed &= !bit;
        }
    }

    fn commit(&mut self) {
        self.committed = self.pressed;
    }
}

/// Press/release/commit state for all controller units.
///
/// Plain owned data; create one per poll context. No interior globals, so
/// independent trackers never observe each other (useful for tests).
#[derive(Clone, Debug, Default)]
pub struct ButtonStateTracker {
    units: [UnitState; GAMEPAD_NUMBER],
}

impl ButtonStateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `button` pressed this cycle with the given raw magnitude.
    ///
    /// A zero magnitude is accepted and classifies as released; callers
    /// normally route zeros through [`release`](Self::release) instead.
    pub fn press(&mut self, unit: usize, button: PadButton, magnitude: i32) {
        self.units[unit].set(button, magnitude);
    }

    /// Mark `button` released this cycle (magnitude implicitly 0).
    pub fn release(&mut self, unit: usize, button: PadButton) {
        self.units[unit].set(button, 0);
    }

    /// Currently-pressed bitmask for `unit`.
    #[inline]
    pub fn pressed_mask(&self, unit: usize) -> u32 {
        self.units[unit].pressed
    }

    /// Transition bitmask for `unit`: buttons whose classification differs
    /// from the previously committed state.
    #[inline]
    pub fn changed_mask(&self, unit: usize) -> u32 {
        self.units[unit].changed
    }

    /// Retained signed magnitude for one button (0 when released).
    #[inline]
    pub fn magnitude(&self, unit: usize, button: PadButton) -> i32 {
        self.units[unit].magnitudes[button.index()]
    }

    /// Latch the cycle's `pressed` mask as the next cycle's baseline.
    pub fn commit(&mut self, unit: usize) {
        self.units[unit].commit();
    }

    /// Drop all latched state back to power-on defaults.
    pub fn reset(&mut self) {
        for unit in &mut self.units {
            *unit = UnitState::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_sets_pressed_and_changed_bits() {
        let mut t = ButtonStateTracker::new();
        t.press(0, PadButton::Cross, 255);
        assert_eq!(t.pressed_mask(0), PadButton::Cross.bit());
        assert_eq!(t.changed_mask(0), PadButton::Cross.bit());
        assert_eq!(t.magnitude(0, PadButton::Cross), 255);
    }

    #[test]
    fn held_button_has_no_edge_after_commit() {
        let mut t = ButtonStateTracker::new();
        t.press(0, PadButton::Cross, 100);
        t.commit(0);

        // Same observation next cycle: still pressed, no transition.
        t.press(0, PadButton::Cross, 90);
        assert_eq!(t.pressed_mask(0), PadButton::Cross.bit());
        assert_eq!(t.changed_mask(0), 0);
    }

    #[test]
    fn release_after_hold_is_an_edge() {
        let mut t = ButtonStateTracker::new();
        t.press(0, PadButton::Square, 1);
        t.commit(0);

        t.release(0, PadButton::Square);
        assert_eq!(t.pressed_mask(0), 0);
        assert_eq!(t.changed_mask(0), PadButton::Square.bit());
        assert_eq!(t.magnitude(0, PadButton::Square), 0);
    }

    #[test]
    fn commit_is_idempotent() {
        let mut t = ButtonStateTracker::new();
        t.press(0, PadButton::L1, 42);
        t.commit(0);
        let pressed = t.pressed_mask(0);
        let changed = t.changed_mask(0);
        t.commit(0);
        assert_eq!(t.pressed_mask(0), pressed);
        assert_eq!(t.changed_mask(0), changed);
    }

    #[test]
    fn edges_compare_against_committed_not_live_state() {
        let mut t = ButtonStateTracker::new();
        // Double write in one cycle: press then release. Net effect is "no
        // transition" because the committed baseline was released.
        t.press(0, PadButton::R1, 7);
        t.release(0, PadButton::R1);
        assert_eq!(t.pressed_mask(0), 0);
        assert_eq!(t.changed_mask(0), 0);
    }

    #[test]
    fn units_are_independent() {
        let mut t = ButtonStateTracker::new();
        t.press(0, PadButton::Start, 1);
        assert_eq!(t.pressed_mask(1), 0);
        assert_eq!(t.changed_mask(1), 0);
    }

    #[test]
    fn reset_returns_to_power_on_state() {
        let mut t = ButtonStateTracker::new();
        t.press(1, PadButton::Hotkey, 1);
        t.commit(1);
        t.reset();
        assert_eq!(t.pressed_mask(1), 0);
        assert_eq!(t.changed_mask(1), 0);
        assert_eq!(t.magnitude(1, PadButton::Hotkey), 0);
    }
}
