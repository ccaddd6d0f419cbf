//! The once-per-frame poll cycle.
//!
//! [`PollCycle`] is the context object tying the registry, the state
//! tracker and the hotkey handler together. One call to
//! [`poll_frame`](PollCycle::poll_frame) per emulated video frame performs
//! the whole input sweep; nothing in here blocks, suspends or retries.
//!
//! # Frame sequence
//! 1. `begin_frame` on every registered device, so software-snapshot
//!    sources (keyboards, report-draining HID handles) refresh exactly once
//!    per full cycle rather than once per unit.
//! 2. For each controller unit in ascending id order:
//!    resolve → `update_state` → sweep all buttons into the tracker →
//!    evaluate hotkeys → commit. A unit with no backing device is skipped
//!    whole: its latched state is left exactly as the last commit wrote it.
//! 3. `rumble_all` on the registry (fire-and-forget, outside the
//!    correctness contract).
//!
//! # Re-entrancy
//! Single-threaded by construction; the context has one owner and
//! `poll_frame` takes `&mut self`, so a second overlapping cycle cannot be
//! expressed.

use crate::buttons::PadButton;
use crate::hotkeys::{self, HotkeyHandler};
use crate::registry::DeviceRegistry;
use crate::state::ButtonStateTracker;
use crate::GAMEPAD_NUMBER;

/// Poll context: owns everything one input sweep touches.
///
/// Independent contexts share no state, so tests can run several side by
/// side.
pub struct PollCycle<H: HotkeyHandler> {
    registry: DeviceRegistry,
    tracker: ButtonStateTracker,
    handler: H,
}

impl<H: HotkeyHandler> PollCycle<H> {
    pub fn new(registry: DeviceRegistry, handler: H) -> Self {
        Self {
            registry,
            tracker: ButtonStateTracker::new(),
            handler,
        }
    }

    /// The registry, for hosts that add or rebind devices between frames.
    pub fn registry_mut(&mut self) -> &mut DeviceRegistry {
        &mut self.registry
    }

    /// Read-only view of the latched button state.
    pub fn tracker(&self) -> &ButtonStateTracker {
        &self.tracker
    }

    /// The installed hotkey handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Run one full input sweep. Call exactly once per emulated frame.
    pub fn poll_frame(&mut self) {
        for device in self.registry.devices_mut() {
            device.begin_frame();
        }

        for unit in 0..GAMEPAD_NUMBER {
            self.poll_unit(unit);
        }

        self.registry.rumble_all();
    }

    /// Sweep a single controller unit: read every button, fire at most one
    /// hotkey, commit.
    fn poll_unit(&mut self, unit: usize) {
        let Some(index) = self.registry.resolve(unit) else {
            return;
        };
        let Some(device) = self.registry.device_at_mut(index) else {
            return;
        };

        device.update_state();

        // Every button, every cycle: the tracker recomputes each edge bit
        // against the committed baseline, so there is no skip-if-unchanged
        // shortcut here.
        for button in PadButton::ALL {
            let value = device.read_button(button);
            if value != 0 {
                self.tracker.press(unit, button, value);
            } else {
                self.tracker.release(unit, button);
            }
        }

        let held = self.tracker.pressed_mask(unit);
        let changed = self.tracker.changed_mask(unit);
        if let Some(action) = hotkeys::evaluate(held, changed) {
            #[cfg(feature = "debug-log")]
            eprintln!("[padpoll] unit {unit}: {action:?}");
            self.handler.on_hotkey(action);
        }

        self.tracker.commit(unit);
    }
}

/// Convenience for hosts that only need the tracker and no hotkeys.
impl PollCycle<crate::hotkeys::NullHandler> {
    pub fn without_hotkeys(registry: DeviceRegistry) -> Self {
        Self::new(registry, crate::hotkeys::NullHandler)
    }
}
