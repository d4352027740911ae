//! Systems - physics the pane is simulated with

pub mod physics_world;
pub mod rigid_body;
pub mod rigid_body_system;
