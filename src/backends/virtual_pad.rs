//! Injectable software pad.
//!
//! [`VirtualPad`] is a [`PadDevice`] whose magnitudes are written by the
//! host instead of read from hardware. Construction returns the device plus
//! a cloneable [`VirtualPadHandle`]; the registry owns the device while the
//! host (or a test) keeps feeding it through the handle.
//!
//! The handle is `Rc`-based and single-threaded, matching the poll core's
//! concurrency model.

use std::cell::RefCell;
use std::rc::Rc;

use crate::buttons::{PadButton, MAX_KEYS};
use crate::device::PadDevice;
use crate::metadata::DeviceMeta;

#[derive(Debug)]
struct Shared {
    magnitudes: [i32; MAX_KEYS],
    rumbles: u32,
}

/// Software device fed through a [`VirtualPadHandle`].
pub struct VirtualPad {
    id: String,
    name: String,
    shared: Rc<RefCell<Shared>>,
}

/// Feeder side of a [`VirtualPad`]. Cheap to clone.
#[derive(Clone)]
pub struct VirtualPadHandle(Rc<RefCell<Shared>>);

impl VirtualPad {
    /// Create a pad and its feeder handle.
    pub fn new(id: &str, name: &str) -> (Self, VirtualPadHandle) {
        let shared = Rc::new(RefCell::new(Shared {
            magnitudes: [0; MAX_KEYS],
            rumbles: 0,
        }));
        let pad = Self {
            id: id.to_string(),
            name: name.to_string(),
            shared: Rc::clone(&shared),
        };
        (pad, VirtualPadHandle(shared))
    }
}

impl VirtualPadHandle {
    /// Set a button's raw magnitude. Zero means released.
    pub fn set_button(&self, button: PadButton, magnitude: i32) {
        self.0.borrow_mut().magnitudes[button.index()] = magnitude;
    }

    /// Shorthand for `set_button(button, 0)`.
    pub fn release_button(&self, button: PadButton) {
        self.set_button(button, 0);
    }

    /// Release everything.
    pub fn clear(&self) {
        self.0.borrow_mut().magnitudes = [0; MAX_KEYS];
    }

    /// How many rumble kicks the registry has forwarded so far.
    pub fn rumble_count(&self) -> u32 {
        self.0.borrow().rumbles
    }
}

impl PadDevice for VirtualPad {
    fn update_state(&mut self) {
        // Magnitudes are pushed by the handle; nothing to refresh.
    }

    fn read_button(&self, button: PadButton) -> i32 {
        self.shared.borrow().magnitudes[button.index()]
    }

    fn rumble(&mut self) {
        self.shared.borrow_mut().rumbles += 1;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn meta(&self) -> DeviceMeta {
        DeviceMeta {
            bus: Some("virtual".to_string()),
            product_string: Some(self.name.clone()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_feeds_device() {
        let (pad, handle) = VirtualPad::new("virtual:t", "Test Pad");
        assert_eq!(pad.read_button(PadButton::Cross), 0);

        handle.set_button(PadButton::Cross, 200);
        assert_eq!(pad.read_button(PadButton::Cross), 200);

        handle.clear();
        assert_eq!(pad.read_button(PadButton::Cross), 0);
    }

    #[test]
    fn meta_reports_virtual_bus() {
        let (pad, _handle) = VirtualPad::new("virtual:t", "Test Pad");
        assert_eq!(pad.meta().bus.as_deref(), Some("virtual"));
    }
}
