/// Delay between the break cue and the shatter cue
pub const SHATTER_DELAY_MS: u32 = 100;

/// Named audio cue played on fracture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Break,
    Shatter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Sawtooth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ramp {
    Linear,
    Exponential,
}

/// Synthesized stand-in for a cue when sample playback is unavailable.
/// Gain always decays exponentially.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    pub waveform: Waveform,
    pub freq_start_hz: f32,
    pub freq_end_hz: f32,
    pub freq_ramp: Ramp,
    pub freq_ramp_secs: f64,
    pub gain_start: f32,
    pub gain_end: f32,
    pub gain_ramp_secs: f64,
    pub duration_secs: f64,
}

impl Cue {
    pub const ALL: [Cue; 2] = [Cue::Break, Cue::Shatter];

    pub fn name(self) -> &'static str {
        match self {
            Cue::Break => "break",
            Cue::Shatter => "shatter",
        }
    }

    /// Sample served next to the app
    pub fn asset_path(self) -> &'static str {
        match self {
            Cue::Break => "assets/sounds/glass-break.mp3",
            Cue::Shatter => "assets/sounds/glass-shatter.mp3",
        }
    }

    pub fn fallback_tone(self) -> ToneSpec {
        match self {
            // Short descending ping
            Cue::Break => ToneSpec {
                waveform: Waveform::Sine,
                freq_start_hz: 800.0,
                freq_end_hz: 200.0,
                freq_ramp: Ramp::Exponential,
                freq_ramp_secs: 0.2,
                gain_start: 0.8,
                gain_end: 0.001,
                gain_ramp_secs: 0.5,
                duration_secs: 0.5,
            },
            // Longer buzzy tail
            Cue::Shatter => ToneSpec {
                waveform: Waveform::Sawtooth,
                freq_start_hz: 100.0,
                freq_end_hz: 50.0,
                freq_ramp: Ramp::Linear,
                freq_ramp_secs: 0.3,
                gain_start: 0.3,
                gain_end: 0.001,
                gain_ramp_secs: 0.8,
                duration_secs: 0.8,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_tones_descend_and_fade() {
        for cue in Cue::ALL {
            let tone = cue.fallback_tone();
            assert!(tone.freq_end_hz < tone.freq_start_hz, "{}", cue.name());
            assert!(tone.gain_end < tone.gain_start);
            // Exponential ramps cannot target zero.
            assert!(tone.gain_end > 0.0);
            assert!(tone.duration_secs >= tone.gain_ramp_secs);
        }
        assert_eq!(Cue::Break.fallback_tone().waveform, Waveform::Sine);
        assert!(Cue::Shatter.fallback_tone().duration_secs > Cue::Break.fallback_tone().duration_secs);
    }
}
