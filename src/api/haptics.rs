use js_sys::{Array, Reflect};
use wasm_bindgen::JsValue;

/// `navigator.vibrate` exists (desktop browsers mostly lack it)
pub(super) fn supported() -> bool {
    web_sys::window()
        .map(|w| Reflect::has(&w.navigator(), &JsValue::from_str("vibrate")).unwrap_or(false))
        .unwrap_or(false)
}

/// Fire-and-forget vibration pattern (ms on/off/on...)
pub(super) fn vibrate(pattern: &[u32]) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let pattern: Array = pattern.iter().map(|ms| JsValue::from(*ms)).collect();
    if !window.navigator().vibrate_with_pattern(&pattern) {
        log::debug!("vibration request refused");
    }
}
