//! Logical pad buttons.
//!
//! A [`PadButton`] is a *logical* input channel on a virtual controller. The
//! mapping from physical signals (HID report bits, keyboard scancodes, stick
//! deflections) to logical ids is a backend concern; everything above the
//! backend boundary speaks `PadButton` only.
//!
//! # Conventions
//! - Ids are dense, `0 <= id < MAX_KEYS`, so a `u32` bitmask covers the set.
//! - Analog sticks are exposed as four *half-axes* each (`LUp`, `LRight`, …),
//!   matching the magnitude-per-channel model used by the poll core.
//! - [`PadButton::Hotkey`] is the reserved modifier that gates hotkey
//!   dispatch; it is an ordinary button to backends and the state tracker.

use serde::{Deserialize, Serialize};

/// Number of logical buttons per controller unit (including the modifier).
pub const MAX_KEYS: usize = 25;

/// Logical button id on a virtual controller.
///
/// Discriminants are stable and used directly as bit positions in the
/// per-unit state masks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PadButton {
    L2 = 0,
    R2 = 1,
    L1 = 2,
    R1 = 3,
    Triangle = 4,
    Circle = 5,
    Cross = 6,
    Square = 7,
    Select = 8,
    L3 = 9,
    R3 = 10,
    Start = 11,
    Up = 12,
    Right = 13,
    Down = 14,
    Left = 15,
    /// Left stick half-axes.
    LUp = 16,
    LRight = 17,
    LDown = 18,
    LLeft = 19,
    /// Right stick half-axes.
    RUp = 20,
    RRight = 21,
    RDown = 22,
    RLeft = 23,
    /// Reserved hotkey modifier.
    Hotkey = 24,
}

impl PadButton {
    /// All buttons in id order. The poll cycle iterates this every frame so
    /// each button's edge bit gets recomputed exactly once per cycle.
    pub const ALL: [PadButton; MAX_KEYS] = [
        PadButton::L2,
        PadButton::R2,
        PadButton::L1,
        PadButton::R1,
        PadButton::Triangle,
        PadButton::Circle,
        PadButton::Cross,
        PadButton::Square,
        PadButton::Select,
        PadButton::L3,
        PadButton::R3,
        PadButton::Start,
        PadButton::Up,
        PadButton::Right,
        PadButton::Down,
        PadButton::Left,
        PadButton::LUp,
        PadButton::LRight,
        PadButton::LDown,
        PadButton::LLeft,
        PadButton::RUp,
        PadButton::RRight,
        PadButton::RDown,
        PadButton::RLeft,
        PadButton::Hotkey,
    ];

    /// Dense id, usable as an array index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-bit mask for this button.
    #[inline]
    pub const fn bit(self) -> u32 {
        1 << self.index()
    }

    /// Whether this is the reserved hotkey modifier.
    #[inline]
    pub const fn is_hotkey(self) -> bool {
        matches!(self, PadButton::Hotkey)
    }

    /// Lookup by dense id. `None` for out-of-range ids.
    pub const fn from_index(id: usize) -> Option<PadButton> {
        if id < MAX_KEYS {
            Some(Self::ALL[id])
        } else {
            None
        }
    }
}
