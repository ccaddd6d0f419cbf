//! Input backends.
//!
//! Implementations of [`PadDevice`](crate::device::PadDevice) plus the
//! report-layout machinery they share. The poll core does not care which
//! backend produced a device; anything that answers `read_button` with a
//! logical-button magnitude fits.
//!
//! # Feature flags
//! - **`hid`** — HID-backed pads via `hidapi`. Off by default: enumeration
//!   is a host concern, and the core runs on injected devices alone.
//!
//! [`virtual_pad`] is always available; it is the test vehicle and the
//! simplest way to drive the poll cycle from host-side code.

pub mod layout;
pub mod virtual_pad;

#[cfg(feature = "hid")]
#[cfg_attr(docsrs, doc(cfg(feature = "hid")))]
pub mod hid;
