use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::PaneConfig;
use crate::core::GlassError;
use crate::simulation::{Feedback, PaneCore, PointerInput};

use super::audio::SoundBank;
use super::{canvas, haptics};

/// Orientation changes settle for this long before the canvas is refit
const RESIZE_DEBOUNCE_MS: i32 = 300;

/// Everything the frame loop and timers need to reach
struct Host {
    core: PaneCore,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    sounds: SoundBank,
}

impl Host {
    fn render(&mut self, time_ms: f64) {
        let list = self.core.frame(time_ms);
        if let Err(err) = canvas::replay(&self.ctx, list) {
            log::warn!("frame replay failed: {}", GlassError::js(&err));
        }
        self.dispatch_feedback();
    }

    fn dispatch_feedback(&mut self) {
        for feedback in self.core.drain_feedback() {
            match feedback {
                Feedback::Sound { cue, delay_ms } => self.sounds.play(cue, delay_ms),
                Feedback::Vibrate(pattern) => haptics::vibrate(&pattern),
            }
        }
    }

    /// Match the canvas backing store to its parent and rebuild the bounds
    fn fit_to_parent(&mut self) {
        let (width, height) = match self.canvas.parent_element() {
            Some(parent) => (parent.client_width().max(0) as u32, parent.client_height().max(0) as u32),
            None => (self.canvas.width(), self.canvas.height()),
        };
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.core.resize(width as f32, height as f32);
    }

    /// Client (viewport) coordinates -> canvas coordinates
    fn to_canvas(&self, client_x: f64, client_y: f64) -> (f32, f32) {
        let rect = self.canvas.get_bounding_client_rect();
        ((client_x - rect.left()) as f32, (client_y - rect.top()) as f32)
    }

    fn pointer(&self, id: i32, client_x: f64, client_y: f64, time_ms: f64) -> PointerInput {
        let (x, y) = self.to_canvas(client_x, client_y);
        PointerInput::new(id, x, y, time_ms)
    }
}

/// A breakable pane drawn on a canvas
#[wasm_bindgen]
pub struct Pane {
    host: Rc<RefCell<Host>>,
    frame_loop: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    resize_timer: Rc<Cell<Option<i32>>>,
}

#[wasm_bindgen]
impl Pane {
    /// Bind to `canvas`. `options_json` is an optional, possibly partial,
    /// camelCase options object (see `PaneConfig`).
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, options_json: Option<String>) -> Result<Pane, JsValue> {
        let config = match options_json.as_deref() {
            Some(json) if !json.trim().is_empty() => PaneConfig::from_json(json)?,
            _ => PaneConfig::default(),
        };

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| GlassError::Js("canvas has no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|err| GlassError::js(&err))?;

        let seed = ((js_sys::Math::random() * u32::MAX as f64) as u64) ^ ((js_sys::Date::now() as u64) << 20);
        let mut core = PaneCore::with_seed(config, canvas.width() as f32, canvas.height() as f32, seed)?;
        core.set_haptics_supported(haptics::supported());

        let mut host = Host {
            core,
            canvas,
            ctx,
            sounds: SoundBank::new(),
        };
        host.fit_to_parent();
        log::info!(
            "pane ready: {}x{}, {} glass",
            host.core.width(),
            host.core.height(),
            host.core.glass_type()
        );

        Ok(Pane {
            host: Rc::new(RefCell::new(host)),
            frame_loop: Rc::new(RefCell::new(None)),
            resize_timer: Rc::new(Cell::new(None)),
        })
    }

    /// Start the `requestAnimationFrame` loop. Runs until the page goes away;
    /// calling it again does nothing.
    pub fn start(&self) -> Result<(), JsValue> {
        if self.frame_loop.borrow().is_some() {
            return Ok(());
        }

        let host = Rc::clone(&self.host);
        let next = Rc::clone(&self.frame_loop);
        let tick = Closure::wrap(Box::new(move |time_ms: f64| {
            host.borrow_mut().render(time_ms);
            if let Some(cb) = next.borrow().as_ref() {
                if let Err(err) = request_frame(cb) {
                    log::error!("frame loop stopped: {}", GlassError::js(&err));
                }
            }
        }) as Box<dyn FnMut(f64)>);

        request_frame(&tick)?;
        *self.frame_loop.borrow_mut() = Some(tick);
        Ok(())
    }

    // === INPUT ===

    pub fn pointer_down(&self, id: i32, client_x: f64, client_y: f64, time_ms: f64) -> bool {
        let mut host = self.host.borrow_mut();
        let input = host.pointer(id, client_x, client_y, time_ms);
        let broke = host.core.pointer_down(input);
        host.dispatch_feedback();
        broke
    }

    pub fn pointer_move(&self, id: i32, client_x: f64, client_y: f64, time_ms: f64) -> bool {
        let mut host = self.host.borrow_mut();
        let input = host.pointer(id, client_x, client_y, time_ms);
        let broke = host.core.pointer_move(input);
        host.dispatch_feedback();
        broke
    }

    pub fn pointer_up(&self, id: i32) {
        self.host.borrow_mut().core.pointer_up(id);
    }

    pub fn click(&self, client_x: f64, client_y: f64) -> bool {
        let mut host = self.host.borrow_mut();
        let (x, y) = host.to_canvas(client_x, client_y);
        let broke = host.core.click(x, y);
        host.dispatch_feedback();
        broke
    }

    // === CONTROLS ===

    pub fn reset(&self) {
        self.host.borrow_mut().core.reset();
    }

    /// "normal", "thick" or "tinted"; anything else is ignored
    pub fn update_glass_type(&self, name: &str) -> bool {
        self.host.borrow_mut().core.update_glass_type(name)
    }

    pub fn set_vibration(&self, enabled: bool) {
        let mut host = self.host.borrow_mut();
        host.core.set_vibration(enabled);
        host.dispatch_feedback();
    }

    /// Tinted glass on phones and tablets
    pub fn apply_device_defaults(&self) -> Result<bool, JsValue> {
        let window = web_sys::window().ok_or_else(|| GlassError::Js("no window".into()))?;
        let user_agent = window.navigator().user_agent()?;
        Ok(self.host.borrow_mut().core.apply_device_defaults(&user_agent))
    }

    /// Refit the canvas now (window resize)
    pub fn resize_canvas(&self) {
        self.host.borrow_mut().fit_to_parent();
    }

    /// Refit the canvas once input has been quiet for 300 ms (orientation
    /// change). A new call restarts the wait.
    pub fn schedule_resize(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| GlassError::Js("no window".into()))?;
        if let Some(handle) = self.resize_timer.take() {
            window.clear_timeout_with_handle(handle);
        }

        let host = Rc::clone(&self.host);
        let timer = Rc::clone(&self.resize_timer);
        let callback = Closure::once_into_js(move || {
            timer.set(None);
            host.borrow_mut().fit_to_parent();
        });
        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            RESIZE_DEBOUNCE_MS,
        )?;
        self.resize_timer.set(Some(handle));
        Ok(())
    }

    // === STATE ===

    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> u32 {
        self.host.borrow().core.fps()
    }

    #[wasm_bindgen(getter)]
    pub fn shard_count(&self) -> u32 {
        self.host.borrow().core.shard_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn is_broken(&self) -> bool {
        self.host.borrow().core.is_broken()
    }

    #[wasm_bindgen(getter)]
    pub fn glass_type(&self) -> String {
        self.host.borrow().core.glass_type().as_str().to_string()
    }

    /// Current options as JSON
    pub fn config_json(&self) -> String {
        self.host.borrow().core.config().to_json()
    }
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or_else(|| GlassError::Js("no window".into()))?;
    window.request_animation_frame(cb.as_ref().unchecked_ref())
}
