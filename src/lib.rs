//! padpoll — frame-synchronous pad polling and hotkey dispatch.
//!
//! Once per emulated video frame, a [`PollCycle`] sweeps every virtual
//! controller unit: it resolves the unit to a device through the
//! [`DeviceRegistry`], reads every logical button, latches press/release
//! edges in the [`ButtonStateTracker`], and fires at most one
//! [`HotkeyAction`] per unit when a bound button edge lands while the
//! reserved modifier is held.
//!
//! The whole cycle is single-threaded, non-blocking and non-reentrant;
//! see the `poll` module docs for the exact frame sequence.
//!
//! ```
//! use padpoll::backends::virtual_pad::VirtualPad;
//! use padpoll::{DeviceRegistry, HotkeyLogger, PadButton, PollCycle};
//!
//! let mut registry = DeviceRegistry::new();
//! let (pad, handle) = VirtualPad::new("virtual:0", "Pad 0");
//! registry.add_assigned(0, Box::new(pad)).unwrap();
//!
//! let mut cycle = PollCycle::new(registry, HotkeyLogger::new());
//!
//! handle.set_button(PadButton::Hotkey, 1);
//! handle.set_button(PadButton::L1, 1);
//! cycle.poll_frame(); // prints "[hotkey] TakeScreenshot"
//! ```

pub mod backends;
pub mod buttons;
pub mod device;
pub mod error;
pub mod hotkeys;
pub mod logger;
pub mod metadata;
pub mod poll;
pub mod registry;
pub mod state;

pub use buttons::{PadButton, MAX_KEYS};
pub use device::PadDevice;
pub use error::PadError;
pub use hotkeys::{HotkeyAction, HotkeyHandler, NullHandler, HOTKEY_PRIORITY};
pub use logger::HotkeyLogger;
pub use metadata::DeviceMeta;
pub use poll::PollCycle;
pub use registry::DeviceRegistry;
pub use state::ButtonStateTracker;

/// Number of virtual controller units exposed to the emulated system.
pub const GAMEPAD_NUMBER: usize = 2;
