//! Pane simulation: one breakable pane of glass and everything it owns.
//!
//! `PaneCore` holds the shard list, pointer tracker, fracture state, frame
//! clock and draw list. It never touches the browser; the `api` layer feeds
//! it input and time, replays its draw list and performs the queued
//! [`Feedback`].
//!
//! Operations live in the submodules below as free functions over
//! `&mut PaneCore`; this file only wires them up.

use rand::rngs::SmallRng;

use crate::config::PaneConfig;
use crate::core::GlassError;
use crate::glass::GlassType;
use crate::physics_world::PhysicsWorld;
use crate::rigid_body_system::RigidBodySystem;

#[path = "perf/frame_clock.rs"]
mod frame_clock;
#[path = "feedback/feedback.rs"]
mod feedback;
#[path = "input/gesture.rs"]
mod gesture;
#[path = "render/draw_list.rs"]
mod draw_list;
#[path = "render/paint.rs"]
mod paint;
#[path = "commands/shard.rs"]
mod shard;
#[path = "commands/fracture.rs"]
mod fracture;
#[path = "step/frame.rs"]
mod frame;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;

pub use draw_list::{DrawList, DrawOp};
pub use feedback::{Feedback, CONFIRM_VIBRATION, SWIPE_VIBRATION, TAP_VIBRATION};
pub use fracture::{swipe_shard_range, velocity_factor};
pub use frame::FADE_PER_FRAME;
pub use frame_clock::FrameClock;
pub use gesture::{
    GestureOutcome, GestureTracker, Pointer, PointerInput, SwipeEvent, SWIPE_THRESHOLD,
    SWIPE_VELOCITY_SCALE,
};
pub use shard::Shard;

/// A breakable pane
pub struct PaneCore<W: PhysicsWorld = RigidBodySystem> {
    config: PaneConfig,
    world: W,
    shards: Vec<Shard>,
    gestures: GestureTracker,
    broken: bool,

    width: f32,
    height: f32,

    rng: SmallRng,
    clock: FrameClock,

    // Host-facing output
    feedback: Vec<Feedback>,
    haptics_supported: bool,
    draw_list: DrawList,
}

impl PaneCore<RigidBodySystem> {
    /// Pane backed by the built-in rigid body world, with gravity and air
    /// resistance taken from `config`. Fails when `config` does not validate.
    pub fn with_seed(config: PaneConfig, width: f32, height: f32, seed: u64) -> Result<Self, GlassError> {
        config.validate()?;
        let world = RigidBodySystem::new(config.gravity, config.resistance);
        Ok(init::create_pane_core(config, world, width, height, seed))
    }
}

impl<W: PhysicsWorld> PaneCore<W> {
    /// Pane over a caller-supplied physics world
    pub fn with_world(
        config: PaneConfig,
        world: W,
        width: f32,
        height: f32,
        seed: u64,
    ) -> Result<Self, GlassError> {
        config.validate()?;
        Ok(init::create_pane_core(config, world, width, height, seed))
    }

    // === FRACTURE ===

    /// Shatter the intact pane radially around (x, y). Returns false (and
    /// does nothing) when already broken.
    pub fn break_at(&mut self, x: f32, y: f32) -> bool {
        fracture::break_at(self, x, y)
    }

    /// Shatter with a directional bias taken from `swipe`
    pub fn break_with_swipe(&mut self, x: f32, y: f32, swipe: &SwipeEvent) -> bool {
        fracture::break_with_swipe(self, x, y, swipe)
    }

    /// Restore the intact pane
    pub fn reset(&mut self) {
        fracture::reset(self);
        log::debug!("pane reset");
    }

    // === INPUT ===

    /// Touch start. Returns true when it broke the pane.
    pub fn pointer_down(&mut self, input: PointerInput) -> bool {
        match self.gestures.pointer_down(input, self.config.multi_touch_enabled) {
            GestureOutcome::Tap(at) => self.break_at(at.x, at.y),
            _ => false,
        }
    }

    /// Touch move. Returns true when a swipe broke the pane.
    pub fn pointer_move(&mut self, input: PointerInput) -> bool {
        match self.gestures.pointer_move(input, !self.broken) {
            GestureOutcome::Swipe { origin, swipe } => {
                self.break_with_swipe(origin.x, origin.y, &swipe)
            }
            _ => false,
        }
    }

    /// Touch end / cancel
    pub fn pointer_up(&mut self, id: i32) {
        self.gestures.pointer_up(id);
    }

    /// Mouse click: always a tap
    pub fn click(&mut self, x: f32, y: f32) -> bool {
        self.break_at(x, y)
    }

    // === SETTINGS ===

    /// Switch glass type by name ("normal", "thick", "tinted"). Unknown names
    /// are ignored and return false.
    pub fn update_glass_type(&mut self, name: &str) -> bool {
        settings::update_glass_type(self, name)
    }

    pub fn set_glass_type(&mut self, glass: GlassType) {
        settings::set_glass_type(self, glass);
    }

    pub fn set_vibration(&mut self, enabled: bool) {
        settings::set_vibration(self, enabled);
    }

    /// Whether the host can vibrate at all
    pub fn set_haptics_supported(&mut self, supported: bool) {
        self.haptics_supported = supported;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        settings::resize(self, width, height);
    }

    /// Mobile user agents get tinted glass. Returns true when applied.
    pub fn apply_device_defaults(&mut self, user_agent: &str) -> bool {
        settings::apply_device_defaults(self, user_agent)
    }

    // === FRAME ===

    /// Advance physics, fade shards and record this frame's drawing
    pub fn frame(&mut self, time_ms: f64) -> &DrawList {
        frame::frame(self, time_ms);
        &self.draw_list
    }

    /// Take every queued sound/vibration request, oldest first
    pub fn drain_feedback(&mut self) -> Vec<Feedback> {
        std::mem::take(&mut self.feedback)
    }

    // === STATE ===

    pub fn is_broken(&self) -> bool { self.broken }

    pub fn shard_count(&self) -> usize { self.shards.len() }

    pub fn shards(&self) -> &[Shard] { &self.shards }

    pub fn fps(&self) -> u32 { self.clock.fps() }

    pub fn glass_type(&self) -> GlassType { self.config.glass_type }

    pub fn config(&self) -> &PaneConfig { &self.config }

    pub fn world(&self) -> &W { &self.world }

    pub fn gestures(&self) -> &GestureTracker { &self.gestures }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    /// Last recorded frame
    pub fn draw_list(&self) -> &DrawList { &self.draw_list }

    pub fn haptics_supported(&self) -> bool { self.haptics_supported }

    /// Vibration is on and the host can actually vibrate
    pub fn vibration_allowed(&self) -> bool {
        self.config.vibrate_on_break && self.haptics_supported
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
