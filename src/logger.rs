use crate::hotkeys::{HotkeyAction, HotkeyHandler};

/// A simple handler that logs every fired hotkey to stdout.
///
/// Handy for demos and device bring-up; real hosts install a handler that
/// calls into their own subsystems.
#[derive(Debug, Default)]
pub struct HotkeyLogger;

impl HotkeyLogger {
    pub fn new() -> Self {
        HotkeyLogger
    }
}

impl HotkeyHandler for HotkeyLogger {
    fn on_hotkey(&mut self, action: HotkeyAction) {
        println!("[hotkey] {:?}", action);
    }
}
