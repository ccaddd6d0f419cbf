//! Device capability trait.
//!
//! A [`PadDevice`] is one input source (gamepad, keyboard adapter, virtual
//! pad) already reduced to the logical-button model: callers hand it a
//! [`PadButton`](crate::buttons::PadButton) and get back a signed magnitude.
//! How a physical signal becomes a logical button is the implementation's
//! problem (see the backends module).
//!
//! # Contract
//! - `begin_frame` runs once per device per poll cycle, before any unit is
//!   processed. Sources that snapshot their input out-of-band (keyboards,
//!   report-draining HID handles) refresh here.
//! - `update_state` runs once per *resolved unit*; for devices refreshed in
//!   `begin_frame` it is a no-op.
//! - `read_button` must be non-blocking and must report a clean `0` when a
//!   read failed or the channel is unknown; the poll core treats any failure
//!   identically to "released".

use crate::buttons::PadButton;
use crate::metadata::DeviceMeta;

/// One input source, addressed by logical button.
pub trait PadDevice {
    /// Once-per-cycle refresh, before any unit is polled. Default no-op.
    fn begin_frame(&mut self) {}

    /// Per-unit state refresh. May be a no-op for sources that already
    /// refreshed in [`begin_frame`](PadDevice::begin_frame).
    fn update_state(&mut self);

    /// Signed magnitude of a logical button. `0` means released; any read
    /// failure is reported as `0`, never as an error.
    fn read_button(&self, button: PadButton) -> i32;

    /// Fire-and-forget force-feedback kick. Default no-op.
    fn rumble(&mut self) {}

    /// Human-friendly device name.
    fn name(&self) -> &str;

    /// Stable device id (backend-defined format).
    fn id(&self) -> &str;

    /// Metadata snapshot for diagnostics. Backends fill what they know.
    fn meta(&self) -> DeviceMeta {
        DeviceMeta::default()
    }
}
