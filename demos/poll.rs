//! Frame-loop demo over virtual pads.
//!
//! Scripts a few frames of input against the poll cycle and prints the
//! resulting state masks and fired hotkeys. Run with:
//! `cargo run --example poll`

use padpoll::backends::virtual_pad::VirtualPad;
use padpoll::{DeviceRegistry, HotkeyLogger, PadButton, PollCycle, GAMEPAD_NUMBER};

fn main() {
    let mut registry = DeviceRegistry::new();
    let mut pads = Vec::new();
    for unit in 0..GAMEPAD_NUMBER {
        let (pad, handle) = VirtualPad::new(&format!("virtual:{unit}"), "Demo Pad");
        registry
            .add_assigned(unit, Box::new(pad))
            .expect("assign demo pad");
        pads.push(handle);
    }

    let mut cycle = PollCycle::new(registry, HotkeyLogger::new());

    // A small input script: (frame, unit, button, magnitude).
    let script = [
        (1, 0, PadButton::Cross, 255),
        (2, 0, PadButton::Cross, 0),
        (3, 0, PadButton::Hotkey, 1),
        (4, 0, PadButton::L1, 1), // chord: screenshot
        (5, 0, PadButton::L1, 0),
        (5, 1, PadButton::Up, 1), // no modifier on unit 1: nothing fires
        (6, 0, PadButton::Hotkey, 0),
    ];

    for frame in 1..=7u32 {
        for &(at, unit, button, magnitude) in &script {
            if at == frame {
                pads[unit].set_button(button, magnitude);
            }
        }

        cycle.poll_frame();

        for unit in 0..GAMEPAD_NUMBER {
            let pressed = cycle.tracker().pressed_mask(unit);
            let changed = cycle.tracker().changed_mask(unit);
            if pressed != 0 || changed != 0 {
                println!("frame {frame} unit {unit}: pressed={pressed:#027b} changed={changed:#027b}");
            }
        }
    }
}
