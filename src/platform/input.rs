//! Keyboard mapping to input signals

use crate::sim::InputSignal;

/// Map a `KeyboardEvent.code` to the signal it triggers
///
/// Pointer presses always map to `InputSignal::Flap` and are wired by the host.
pub fn signal_for_key(code: &str) -> Option<InputSignal> {
    match code {
        "Space" | "ArrowUp" => Some(InputSignal::Flap),
        "KeyP" => Some(InputSignal::Pause),
        "KeyR" => Some(InputSignal::Resume),
        "Enter" => Some(InputSignal::Start),
        _ => None,
    }
}
