//! Device metadata snapshot.
//!
//! [`DeviceMeta`] is a lightweight, cloneable description of a device used
//! for diagnostics and logging. Backends populate what they know; unknown
//! fields remain `None`.
//!
//! # Conventions
//! - `bus` is a short, human-readable hint like `"usb"`, `"bluetooth"`, or
//!   `"virtual"`.
//! - `product_string` should be a friendly, user-facing name when available.
//! - `path` is an OS/topology path (opaque string); it may change across
//!   ports and reconnects, so treat it as diagnostic first, identity second.
//! - `vid`/`pid` and `serial_number` (when present) are generally stable and
//!   useful for re-identification.

use serde::{Deserialize, Serialize};

/// Snapshot of metadata describing a single device.
///
/// All fields are optional; populate what is known on the current platform.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeviceMeta {
    /// High-level bus classification (e.g. `"usb"`, `"virtual"`).
    pub bus: Option<String>,

    /// USB Vendor ID (VID), if known.
    pub vid: Option<u16>,

    /// USB Product ID (PID), if known.
    pub pid: Option<u16>,

    /// Human-readable product name from the driver/firmware.
    pub product_string: Option<String>,

    /// Device serial number supplied by firmware/OS, if present.
    pub serial_number: Option<String>,

    /// OS/topological path to the device. Format is platform-specific and
    /// should be treated as opaque.
    pub path: Option<String>,
}

impl DeviceMeta {
    /// JSON dump for diagnostics and bug reports.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_roundtrip_keeps_identity_fields() {
        let meta = DeviceMeta {
            bus: Some("usb".into()),
            vid: Some(0x054c),
            pid: Some(0x0268),
            product_string: Some("PLAYSTATION(R)3 Controller".into()),
            ..Default::default()
        };
        let back: DeviceMeta = serde_json::from_str(&meta.to_json()).unwrap();
        assert_eq!(back.vid, Some(0x054c));
        assert_eq!(back.pid, Some(0x0268));
        assert_eq!(back.product_string.as_deref(), Some("PLAYSTATION(R)3 Controller"));
    }
}
