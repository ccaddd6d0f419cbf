//! Device ownership and unit-slot resolution.
//!
//! [`DeviceRegistry`] owns the boxed [`PadDevice`] handles in a stable,
//! indexable order and maps controller-unit ids onto those indices. The
//! registry does not enumerate hardware itself; the host discovers devices
//! (see the backends module) and hands them over.
//!
//! # Slot semantics
//! - A unit either points at exactly one device index or at nothing.
//! - Several units may share one index (e.g. a keyboard adapter feeding both
//!   pads).
//! - `resolve` is a fixed-size array lookup: O(1), no allocation, no
//!   blocking, safe to call every frame for every unit.
//! - An unresolved unit is not an error; the poll cycle simply skips it this
//!   frame and retries naturally on the next.

use crate::device::PadDevice;
use crate::error::PadError;
use crate::GAMEPAD_NUMBER;

/// Owns the device handles and the unit → index slot table.
#[derive(Default)]
pub struct DeviceRegistry {
    devices: Vec<Box<dyn PadDevice>>,
    slots: [Option<usize>; GAMEPAD_NUMBER],
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a device; returns its stable index.
    pub fn add_device(&mut self, device: Box<dyn PadDevice>) -> usize {
        self.devices.push(device);
        self.devices.len() - 1
    }

    /// Add a device and immediately bind `unit` to it.
    pub fn add_assigned(&mut self, unit: usize, device: Box<dyn PadDevice>) -> Result<usize, PadError> {
        let index = self.add_device(device);
        self.assign(unit, index)?;
        Ok(index)
    }

    /// Bind a controller unit to a device index.
    pub fn assign(&mut self, unit: usize, index: usize) -> Result<(), PadError> {
        if unit >= GAMEPAD_NUMBER {
            return Err(PadError::UnitOutOfRange { unit });
        }
        if index >= self.devices.len() {
            return Err(PadError::NoSuchDevice { index });
        }
        self.slots[unit] = Some(index);
        Ok(())
    }

    /// Clear a unit's binding. Harmless for out-of-range units.
    pub fn unassign(&mut self, unit: usize) {
        if let Some(slot) = self.slots.get_mut(unit) {
            *slot = None;
        }
    }

    /// Device index backing `unit`, if any. Never allocates or blocks.
    #[inline]
    pub fn resolve(&self, unit: usize) -> Option<usize> {
        *self.slots.get(unit)?
    }

    /// Shared access to a device handle.
    pub fn device_at(&self, index: usize) -> Option<&dyn PadDevice> {
        self.devices.get(index).map(|d| d.as_ref())
    }

    /// Exclusive access to a device handle.
    pub fn device_at_mut(&mut self, index: usize) -> Option<&mut Box<dyn PadDevice>> {
        self.devices.get_mut(index)
    }

    /// Number of registered devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Iterate all registered devices mutably (frame-begin sweep).
    pub fn devices_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn PadDevice>> {
        self.devices.iter_mut()
    }

    /// End-of-frame force-feedback kick for every device. Fire-and-forget;
    /// per-device intensity is the device's business.
    pub fn rumble_all(&mut self) {
        for device in &mut self.devices {
            device.rumble();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::virtual_pad::VirtualPad;

    #[test]
    fn resolve_follows_assignment() {
        let mut reg = DeviceRegistry::new();
        assert!(reg.is_empty());

        let (pad, _handle) = VirtualPad::new("virtual:0", "Pad 0");
        let index = reg.add_device(Box::new(pad));
        assert_eq!(reg.len(), 1);

        assert_eq!(reg.resolve(0), None);
        reg.assign(0, index).unwrap();
        assert_eq!(reg.resolve(0), Some(index));
        assert_eq!(reg.device_at(index).map(|d| d.id()), Some("virtual:0"));

        reg.unassign(0);
        assert_eq!(reg.resolve(0), None);
    }

    #[test]
    fn two_units_may_share_one_device() {
        let mut reg = DeviceRegistry::new();
        let (pad, _handle) = VirtualPad::new("virtual:kbd", "Keyboard Adapter");
        let index = reg.add_assigned(0, Box::new(pad)).unwrap();
        reg.assign(1, index).unwrap();
        assert_eq!(reg.resolve(0), reg.resolve(1));
    }

    #[test]
    fn bad_assignments_are_rejected() {
        let mut reg = DeviceRegistry::new();
        assert!(matches!(
            reg.assign(GAMEPAD_NUMBER, 0),
            Err(PadError::UnitOutOfRange { .. })
        ));
        assert!(matches!(reg.assign(0, 0), Err(PadError::NoSuchDevice { .. })));
    }

    #[test]
    fn resolve_out_of_range_is_none() {
        let reg = DeviceRegistry::new();
        assert_eq!(reg.resolve(GAMEPAD_NUMBER + 5), None);
    }
}
