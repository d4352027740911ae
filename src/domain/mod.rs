//! Domain - glass presets, colors, sounds and pane options

pub mod color;
pub mod config;
pub mod device;
pub mod glass;
pub mod sound;
