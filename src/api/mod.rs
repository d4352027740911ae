//! Browser facade: binds a `PaneCore` to a canvas, drives it from
//! `requestAnimationFrame` and performs its sound/vibration requests.

mod audio;
mod canvas;
mod haptics;
mod pane;

pub use pane::Pane;
