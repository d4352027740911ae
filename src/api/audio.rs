//! Fracture sounds. Samples play through `HTMLAudioElement`; the first time
//! that fails (element creation error or a rejected `play()`), the bank
//! switches for good to tones synthesized with Web Audio.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AudioContext, HtmlAudioElement, OscillatorType};

use crate::core::GlassError;
use crate::sound::{Cue, Ramp, ToneSpec, Waveform};

struct Sounds {
    break_sample: Option<HtmlAudioElement>,
    shatter_sample: Option<HtmlAudioElement>,
    use_fallback: bool,
    // Created lazily: browsers only allow it after a user gesture
    context: Option<AudioContext>,
    // Attached to every `play()` promise; one per cue, reused
    break_rejected: Option<Closure<dyn FnMut(JsValue)>>,
    shatter_rejected: Option<Closure<dyn FnMut(JsValue)>>,
}

impl Sounds {
    fn rejected(&self, cue: Cue) -> Option<&Closure<dyn FnMut(JsValue)>> {
        match cue {
            Cue::Break => self.break_rejected.as_ref(),
            Cue::Shatter => self.shatter_rejected.as_ref(),
        }
    }
}

impl Drop for Sounds {
    fn drop(&mut self) {
        // A pending play() can still reject after the bank is gone; the
        // handlers then find no bank and return.
        for handler in [self.break_rejected.take(), self.shatter_rejected.take()].into_iter().flatten() {
            handler.forget();
        }
    }
}

/// Cheap to clone; clones share the same samples and fallback state
#[derive(Clone)]
pub(super) struct SoundBank {
    inner: Rc<RefCell<Sounds>>,
}

impl SoundBank {
    pub(super) fn new() -> Self {
        let break_sample = load(Cue::Break);
        let shatter_sample = load(Cue::Shatter);
        let use_fallback = break_sample.is_none() || shatter_sample.is_none();
        if use_fallback {
            log::warn!("audio samples unavailable, using synthesized sounds");
        }

        Self {
            inner: Rc::new_cyclic(|inner| {
                RefCell::new(Sounds {
                    break_sample,
                    shatter_sample,
                    use_fallback,
                    context: None,
                    break_rejected: Some(on_rejected(inner, Cue::Break)),
                    shatter_rejected: Some(on_rejected(inner, Cue::Shatter)),
                })
            }),
        }
    }

    /// Play `cue` now or after `delay_ms`. Never reports failure.
    pub(super) fn play(&self, cue: Cue, delay_ms: u32) {
        if delay_ms == 0 {
            self.play_now(cue);
            return;
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let bank = self.clone();
        let callback = Closure::once_into_js(move || bank.play_now(cue));
        if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms as i32,
        ) {
            log::debug!("could not schedule {} sound: {:?}", cue.name(), err);
        }
    }

    fn play_now(&self, cue: Cue) {
        let sample = {
            let sounds = self.inner.borrow();
            if sounds.use_fallback {
                None
            } else {
                match cue {
                    Cue::Break => sounds.break_sample.clone(),
                    Cue::Shatter => sounds.shatter_sample.clone(),
                }
            }
        };

        let Some(sample) = sample else {
            self.synthesize(cue);
            return;
        };

        sample.set_current_time(0.0);
        match sample.play() {
            Ok(promise) => {
                if let Some(on_reject) = self.inner.borrow().rejected(cue) {
                    let _ = promise.catch(on_reject);
                }
            }
            Err(err) => {
                log::warn!("{} sample failed ({:?}), switching to synthesized sounds", cue.name(), err);
                self.switch_to_fallback();
                self.synthesize(cue);
            }
        }
    }

    fn switch_to_fallback(&self) {
        self.inner.borrow_mut().use_fallback = true;
    }

    fn synthesize(&self, cue: Cue) {
        let mut sounds = self.inner.borrow_mut();
        if sounds.context.is_none() {
            match AudioContext::new() {
                Ok(ctx) => sounds.context = Some(ctx),
                Err(err) => {
                    log::debug!("{}", GlassError::js(&err));
                    return;
                }
            }
        }
        if let Some(ctx) = sounds.context.as_ref() {
            if let Err(err) = play_tone(ctx, &cue.fallback_tone()) {
                log::debug!("{} tone failed: {}", cue.name(), GlassError::js(&err));
            }
        }
    }
}

/// Rejection handler for `cue`'s `play()` promise. Holds the bank weakly so
/// the bank can own it.
fn on_rejected(inner: &Weak<RefCell<Sounds>>, cue: Cue) -> Closure<dyn FnMut(JsValue)> {
    let inner = inner.clone();
    Closure::wrap(Box::new(move |err: JsValue| {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        log::warn!("{} sample rejected ({:?}), switching to synthesized sounds", cue.name(), err);
        let bank = SoundBank { inner };
        bank.switch_to_fallback();
        bank.synthesize(cue);
    }) as Box<dyn FnMut(JsValue)>)
}

fn load(cue: Cue) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(cue.asset_path()) {
        Ok(el) => Some(el),
        Err(err) => {
            log::debug!("{} sample: {}", cue.name(), GlassError::js(&err));
            None
        }
    }
}

fn play_tone(ctx: &AudioContext, tone: &ToneSpec) -> Result<(), JsValue> {
    let oscillator = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    oscillator.set_type(match tone.waveform {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Sawtooth => OscillatorType::Sawtooth,
    });

    let now = ctx.current_time();
    let freq = oscillator.frequency();
    freq.set_value_at_time(tone.freq_start_hz, now)?;
    match tone.freq_ramp {
        Ramp::Linear => freq.linear_ramp_to_value_at_time(tone.freq_end_hz, now + tone.freq_ramp_secs)?,
        Ramp::Exponential => {
            freq.exponential_ramp_to_value_at_time(tone.freq_end_hz, now + tone.freq_ramp_secs)?
        }
    };

    let level = gain.gain();
    level.set_value_at_time(tone.gain_start, now)?;
    level.exponential_ramp_to_value_at_time(tone.gain_end, now + tone.gain_ramp_secs)?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    oscillator.start()?;
    oscillator.stop_with_when(now + tone.duration_secs)?;
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn rejection_handlers_are_shared_across_plays() {
        let bank = SoundBank::new();
        let handler = |bank: &SoundBank| -> *const Closure<dyn FnMut(JsValue)> {
            bank.inner.borrow().rejected(Cue::Break).unwrap()
        };
        let before = handler(&bank);
        bank.play(Cue::Break, 0);
        bank.play(Cue::Break, 0);
        assert!(std::ptr::eq(before, handler(&bank)));
    }

    #[wasm_bindgen_test]
    fn rejected_play_switches_to_fallback() {
        let bank = SoundBank::new();
        bank.inner.borrow_mut().use_fallback = false;

        let handler: js_sys::Function = bank
            .inner
            .borrow()
            .rejected(Cue::Shatter)
            .unwrap()
            .as_ref()
            .unchecked_ref::<js_sys::Function>()
            .clone();
        handler.call1(&JsValue::NULL, &JsValue::from_str("NotAllowedError")).unwrap();

        assert!(bank.inner.borrow().use_fallback);
    }
}
