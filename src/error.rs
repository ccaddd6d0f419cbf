//! Error taxonomy.
//!
//! The poll cycle itself is infallible: an unresolved unit is skipped and a
//! failed backend read is a clean zero. Errors exist only on the fallible
//! *setup* paths, where they are worth reporting to the host.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PadError {
    /// Controller-unit id outside `0..GAMEPAD_NUMBER`.
    #[error("controller unit {unit} is out of range")]
    UnitOutOfRange { unit: usize },

    /// Device index not backed by a registered device.
    #[error("no device registered at index {index}")]
    NoSuchDevice { index: usize },

    /// A report layout file failed to parse.
    #[error("invalid report layout: {0}")]
    InvalidLayout(#[from] toml::de::Error),

    /// A report layout references a byte beyond the report it claims to
    /// describe.
    #[error("layout field for {button:?} reads byte {byte}, report is {len} bytes")]
    LayoutOutOfBounds {
        button: crate::buttons::PadButton,
        byte: usize,
        len: usize,
    },

    /// The OS refused to open a device handle.
    #[cfg(feature = "hid")]
    #[error("failed to open HID device: {0}")]
    HidOpen(#[from] hidapi::HidError),
}
