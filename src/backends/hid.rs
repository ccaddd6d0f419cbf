#![cfg(feature = "hid")]

//! HID-backed pads via `hidapi`.
//!
//! [`HidPad`] wraps a `hidapi::HidDevice` and a [`ReportLayout`]. It is
//! responsible for:
//! - opening the HID handle in non-blocking mode
//! - draining a bounded number of reports per frame in `begin_frame`
//! - splitting `[report_id][payload...]` and decoding the payload into the
//!   logical magnitude table through the layout
//!
//! It does **not** latch edges or evaluate hotkeys (the poll core's job) and
//! it does **not** guess layouts: a device without a layout is not opened.
//!
//! Reads here are snapshots, so `update_state` is a no-op; per-unit work is
//! already covered by the per-frame drain.

use hidapi::{DeviceInfo, HidApi};

use crate::backends::layout::ReportLayout;
use crate::buttons::{PadButton, MAX_KEYS};
use crate::device::PadDevice;
use crate::error::PadError;
use crate::metadata::DeviceMeta;

/// Safety valve: maximum number of HID reports drained per frame.
///
/// Prevents a single chatty device from starving the emulation loop if it
/// produces data faster than the host polls.
const MAX_REPORTS_PER_FRAME: usize = 32;

/// Read buffer size; large enough for any pad report we map.
const REPORT_BUF_LEN: usize = 64;

/// Concrete HID-backed [`PadDevice`].
pub struct HidPad {
    id: String,
    name: String,
    raw: hidapi::HidDevice,
    layout: ReportLayout,
    buf: [u8; REPORT_BUF_LEN],
    magnitudes: [i32; MAX_KEYS],
    meta: DeviceMeta,
}

impl HidPad {
    /// Open and wrap one HID device entry with its report layout.
    pub fn open(info: &DeviceInfo, api: &HidApi, layout: ReportLayout) -> Result<Self, PadError> {
        let device = info.open_device(api)?;
        // The poll cycle must never block on a backend read.
        let _ = device.set_blocking_mode(false);

        let name = info.product_string().unwrap_or("Unknown").to_string();
        let meta = DeviceMeta {
            bus: Some("usb".to_string()),
            vid: Some(info.vendor_id()),
            pid: Some(info.product_id()),
            product_string: info.product_string().map(str::to_string),
            serial_number: info.serial_number().map(str::to_string),
            path: Some(info.path().to_string_lossy().into_owned()),
        };

        #[cfg(feature = "debug-log")]
        eprintln!(
            "[padpoll/hid] open vid=0x{:04x} pid=0x{:04x} product={name}",
            info.vendor_id(),
            info.product_id(),
        );

        Ok(Self {
            id: format!("hid:{:04x}:{:04x}", info.vendor_id(), info.product_id()),
            name,
            raw: device,
            layout,
            buf: [0; REPORT_BUF_LEN],
            magnitudes: [0; MAX_KEYS],
            meta,
        })
    }

    /// Split a report into `(report_id, payload)`.
    ///
    /// Many HID stacks deliver `[report_id][payload...]` even when the
    /// device uses a single report; an empty read splits as `(0, [])`.
    #[inline]
    fn split_report(data: &[u8]) -> (u8, &[u8]) {
        match data {
            [] => (0, &[]),
            [id, payload @ ..] => (*id, payload),
        }
    }
}

impl PadDevice for HidPad {
    /// Drain pending reports; the last decodable report wins the frame.
    fn begin_frame(&mut self) {
        for _ in 0..MAX_REPORTS_PER_FRAME {
            match self.raw.read(&mut self.buf) {
                Ok(0) => break,
                Ok(len) => {
                    let (report_id, payload) = Self::split_report(&self.buf[..len]);
                    self.layout.decode(report_id, payload, &mut self.magnitudes);
                }
                Err(_e) => {
                    // A failed read classifies as everything-released; the
                    // device will be read again next frame.
                    #[cfg(feature = "debug-log")]
                    eprintln!("[padpoll/hid] {} read error: {_e:?}", self.name);
                    self.magnitudes = [0; MAX_KEYS];
                    break;
                }
            }
        }
    }

    fn update_state(&mut self) {
        // Snapshot already refreshed once per frame in begin_frame.
    }

    fn read_button(&self, button: PadButton) -> i32 {
        self.magnitudes[button.index()]
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn meta(&self) -> DeviceMeta {
        self.meta.clone()
    }
}

/// Open every enumerated device that has a layout in `layouts`
/// (keyed by `(vid, pid)`).
///
/// Devices that fail to open are skipped; discovery is best-effort by
/// design, the host retries on its own schedule.
pub fn probe_devices(
    api: &HidApi,
    layouts: &std::collections::HashMap<(u16, u16), ReportLayout>,
) -> Vec<Box<dyn PadDevice>> {
    let mut found: Vec<Box<dyn PadDevice>> = Vec::new();
    for info in api.device_list() {
        let key = (info.vendor_id(), info.product_id());
        let Some(layout) = layouts.get(&key) else {
            continue;
        };
        match HidPad::open(info, api, layout.clone()) {
            Ok(pad) => found.push(Box::new(pad)),
            Err(_e) => {
                #[cfg(feature = "debug-log")]
                eprintln!("[padpoll/hid] skipping {key:?}: {_e}");
            }
        }
    }
    found
}
