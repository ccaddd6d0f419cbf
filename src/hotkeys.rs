//! Hotkey bindings and edge-triggered dispatch.
//!
//! While the reserved [`PadButton::Hotkey`] modifier is held, a press edge on
//! one of the bound buttons fires the corresponding [`HotkeyAction`] through
//! an injected [`HotkeyHandler`]. The binding table is fixed at build time;
//! it is not user data.
//!
//! # Dispatch rule
//! Per unit and per frame, dispatch is attempted only when the modifier bit
//! is set in the held mask *and* at least one non-modifier bit changed this
//! cycle. Candidates are then tested in [`HOTKEY_PRIORITY`] order against
//! `held & changed` (so only freshly *pressed* buttons qualify, not
//! releases) and the first hit fires. At most one action fires per unit per
//! frame.
//!
//! The upstream pad code combined the modifier flag with the mask test using
//! a bare bitwise `&`, which operator precedence turns into a comparison of
//! the wrong grouping. This module uses the intended logical conjunction;
//! see DESIGN.md for the deviation note.

use serde::{Deserialize, Serialize};

use crate::buttons::PadButton;

/// Application-level action fired by a hotkey chord.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HotkeyAction {
    /// Quit the host application.
    ExitApplication,
    /// Capture the current video frame.
    TakeScreenshot,
    /// Select the next savestate slot.
    CycleSlotForward,
    /// Select the previous savestate slot.
    CycleSlotBackward,
    /// Save state into the current slot.
    FreezeSlot,
    /// Load state from the current slot.
    DefrostSlot,
    /// Step the video aspect-ratio setting.
    CycleAspectRatio,
    /// Toggle the slow-motion frame limiter.
    ToggleSlomo,
    /// Toggle the turbo frame limiter.
    ToggleTurbo,
}

/// Fixed-precedence binding table: first entry whose button edge matches
/// wins. The order is load-bearing and mirrors the upstream precedence list
/// entry for entry; do not reorder.
pub const HOTKEY_PRIORITY: [(PadButton, HotkeyAction); 9] = [
    (PadButton::Start, HotkeyAction::ExitApplication),
    (PadButton::L1, HotkeyAction::TakeScreenshot),
    (PadButton::Up, HotkeyAction::CycleSlotForward),
    (PadButton::Down, HotkeyAction::CycleSlotBackward),
    (PadButton::Square, HotkeyAction::FreezeSlot),
    (PadButton::Triangle, HotkeyAction::DefrostSlot),
    (PadButton::R1, HotkeyAction::CycleAspectRatio),
    (PadButton::Left, HotkeyAction::ToggleSlomo),
    (PadButton::Right, HotkeyAction::ToggleTurbo),
];

/// Receiver for fired hotkey actions.
///
/// Injected into the poll context so the core never links against the real
/// application subsystems; tests substitute a recording handler.
pub trait HotkeyHandler {
    fn on_hotkey(&mut self, action: HotkeyAction);
}

/// A handler that drops every action. Placeholder for contexts that only
/// want state tracking.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHandler;

impl HotkeyHandler for NullHandler {
    fn on_hotkey(&mut self, _action: HotkeyAction) {}
}

/// Evaluate the binding table against one unit's masks.
///
/// `held` and `changed` are the unit's pressed and transition masks, read
/// after the cycle's button sweep and before its commit. Returns the action
/// to fire, if any.
pub fn evaluate(held: u32, changed: u32) -> Option<HotkeyAction> {
    let modifier = PadButton::Hotkey.bit();

    let modifier_held = held & modifier != 0;
    let other_edges = changed & !modifier;
    if !modifier_held || other_edges == 0 {
        return None;
    }

    // Only freshly pressed buttons count: a release edge has changed=1 but
    // held=0, so it can never match.
    let fired = held & changed;
    HOTKEY_PRIORITY
        .iter()
        .find(|(button, _)| fired & button.bit() != 0)
        .map(|&(_, action)| action)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HK: u32 = PadButton::Hotkey.bit();

    #[test]
    fn no_dispatch_without_modifier() {
        let edge = PadButton::Start.bit();
        assert_eq!(evaluate(edge, edge), None);
    }

    #[test]
    fn no_dispatch_when_only_modifier_changed() {
        // Modifier freshly pressed, nothing else moved.
        assert_eq!(evaluate(HK, HK), None);
    }

    #[test]
    fn press_edge_fires_bound_action() {
        let held = HK | PadButton::L1.bit();
        let changed = PadButton::L1.bit();
        assert_eq!(evaluate(held, changed), Some(HotkeyAction::TakeScreenshot));
    }

    #[test]
    fn release_edge_does_not_fire() {
        // Start transitioned, but to released: held bit is clear.
        let held = HK;
        let changed = PadButton::Start.bit();
        assert_eq!(evaluate(held, changed), None);
    }

    #[test]
    fn priority_order_picks_first_match() {
        // Screenshot (L1) outranks slot-forward (Up).
        let held = HK | PadButton::L1.bit() | PadButton::Up.bit();
        let changed = PadButton::L1.bit() | PadButton::Up.bit();
        assert_eq!(evaluate(held, changed), Some(HotkeyAction::TakeScreenshot));

        // Exit (Start) outranks everything.
        let held = held | PadButton::Start.bit();
        let changed = changed | PadButton::Start.bit();
        assert_eq!(evaluate(held, changed), Some(HotkeyAction::ExitApplication));
    }

    #[test]
    fn unbound_edges_are_ignored() {
        let held = HK | PadButton::Cross.bit();
        let changed = PadButton::Cross.bit();
        assert_eq!(evaluate(held, changed), None);
    }

    #[test]
    fn null_handler_swallows_actions() {
        let mut handler = NullHandler;
        handler.on_hotkey(HotkeyAction::ToggleTurbo);
    }
}
