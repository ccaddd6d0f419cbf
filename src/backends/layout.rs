//! HID report layouts.
//!
//! A [`ReportLayout`] describes where each logical button lives inside a
//! device's input report. This *is* the physical-to-logical remapping step:
//! everything above the backend boundary sees [`PadButton`] magnitudes only.
//!
//! Layouts are plain data and load from TOML, so supporting a new pad is a
//! file, not a code change:
//!
//! ```toml
//! report_id = 1
//!
//! [[fields]]
//! button = "Cross"
//! byte = 3
//! bit = 6
//!
//! [[fields]]
//! button = "LUp"
//! byte = 7
//! ```
//!
//! A field with a `bit` is digital: the bit's value maps to magnitude
//! `0`/`DIGITAL_MAGNITUDE`. A field without one is analog: the whole byte is
//! the magnitude, with an optional `rest` value subtracted so the channel
//! reads 0 when idle.

use serde::{Deserialize, Serialize};

use crate::buttons::{PadButton, MAX_KEYS};
use crate::error::PadError;

/// Magnitude reported for a pressed digital field.
pub const DIGITAL_MAGNITUDE: i32 = 255;

/// One button's position inside the report payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ButtonField {
    /// Logical button the field feeds.
    pub button: PadButton,
    /// Payload byte offset (after the report id, if any).
    pub byte: usize,
    /// Bit within the byte for digital fields; absent means the whole byte
    /// is an analog magnitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit: Option<u8>,
    /// Idle value subtracted from analog fields (e.g. 128 for a centered
    /// axis byte). Ignored for digital fields.
    #[serde(default)]
    pub rest: i32,
}

/// Where every mapped button lives inside one input report.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReportLayout {
    /// Expected report id; `None` accepts any report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<u8>,
    /// Mapped fields. Unmapped buttons always read 0.
    #[serde(default)]
    pub fields: Vec<ButtonField>,
}

impl ReportLayout {
    /// Parse a layout from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, PadError> {
        Ok(toml::from_str(text)?)
    }

    /// Check every field fits inside a `payload_len`-byte report.
    pub fn validate(&self, payload_len: usize) -> Result<(), PadError> {
        for field in &self.fields {
            if field.byte >= payload_len {
                return Err(PadError::LayoutOutOfBounds {
                    button: field.button,
                    byte: field.byte,
                    len: payload_len,
                });
            }
        }
        Ok(())
    }

    /// Decode one report payload into a magnitude table.
    ///
    /// Reports with the wrong id are ignored. A field pointing past the end
    /// of a short payload decodes as 0, matching the "backend read failure
    /// is a clean zero" rule.
    pub fn decode(&self, report_id: u8, payload: &[u8], out: &mut [i32; MAX_KEYS]) {
        if let Some(expected) = self.report_id {
            if report_id != expected {
                return;
            }
        }

        for field in &self.fields {
            // A missing byte is a clean zero, including for analog fields
            // with a non-zero rest value.
            let value = match (payload.get(field.byte), field.bit) {
                (None, _) => 0,
                (Some(&raw), Some(bit)) => {
                    if raw & (1 << bit) != 0 {
                        DIGITAL_MAGNITUDE
                    } else {
                        0
                    }
                }
                (Some(&raw), None) => i32::from(raw) - field.rest,
            };
            out[field.button.index()] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = r#"
        report_id = 1

        [[fields]]
        button = "Cross"
        byte = 0
        bit = 2

        [[fields]]
        button = "Hotkey"
        byte = 0
        bit = 7

        [[fields]]
        button = "LUp"
        byte = 1
        rest = 128
    "#;

    #[test]
    fn parses_digital_and_analog_fields() {
        let layout = ReportLayout::from_toml_str(LAYOUT).unwrap();
        assert_eq!(layout.report_id, Some(1));
        assert_eq!(layout.fields.len(), 3);
        assert_eq!(layout.fields[0].bit, Some(2));
        assert_eq!(layout.fields[2].bit, None);
        assert_eq!(layout.fields[2].rest, 128);
    }

    #[test]
    fn decodes_into_magnitudes() {
        let layout = ReportLayout::from_toml_str(LAYOUT).unwrap();
        let mut out = [0i32; MAX_KEYS];

        // Cross bit set, hotkey bit clear, stick pushed past center.
        layout.decode(1, &[0b0000_0100, 200], &mut out);
        assert_eq!(out[PadButton::Cross.index()], DIGITAL_MAGNITUDE);
        assert_eq!(out[PadButton::Hotkey.index()], 0);
        assert_eq!(out[PadButton::LUp.index()], 72);
    }

    #[test]
    fn wrong_report_id_is_ignored() {
        let layout = ReportLayout::from_toml_str(LAYOUT).unwrap();
        let mut out = [0i32; MAX_KEYS];
        layout.decode(2, &[0xff, 0xff], &mut out);
        assert_eq!(out, [0i32; MAX_KEYS]);
    }

    #[test]
    fn short_payload_reads_zero() {
        let layout = ReportLayout::from_toml_str(LAYOUT).unwrap();
        let mut out = [0i32; MAX_KEYS];
        layout.decode(1, &[0b1000_0000], &mut out);
        assert_eq!(out[PadButton::Hotkey.index()], DIGITAL_MAGNITUDE);
        // Analog byte missing entirely: clean zero, not an error.
        assert_eq!(out[PadButton::LUp.index()], 0);
    }

    #[test]
    fn validate_rejects_out_of_range_fields() {
        let layout = ReportLayout::from_toml_str(LAYOUT).unwrap();
        assert!(layout.validate(2).is_ok());
        assert!(layout.validate(1).is_err());
    }
}
