use crate::sound::{Cue, SHATTER_DELAY_MS};

/// Vibration for a tap fracture (ms on/off/on)
pub const TAP_VIBRATION: [u32; 3] = [15, 10, 30];

/// Stronger vibration for a swipe fracture
pub const SWIPE_VIBRATION: [u32; 5] = [20, 10, 40, 10, 20];

/// Short pulse confirming vibration was switched on
pub const CONFIRM_VIBRATION: [u32; 1] = [10];

/// Side effect the host should perform. The pane only records these; playing
/// sound and driving the vibration motor happen outside the simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    Sound { cue: Cue, delay_ms: u32 },
    Vibrate(Vec<u32>),
}

/// Break + staggered shatter, then vibration if allowed
pub(super) fn fracture_feedback(queue: &mut Vec<Feedback>, vibrate: bool, pattern: &[u32]) {
    queue.push(Feedback::Sound { cue: Cue::Break, delay_ms: 0 });
    queue.push(Feedback::Sound { cue: Cue::Shatter, delay_ms: SHATTER_DELAY_MS });
    if vibrate {
        queue.push(Feedback::Vibrate(pattern.to_vec()));
    }
}
