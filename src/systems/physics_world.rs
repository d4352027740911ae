//! PhysicsWorld - the contract the pane consumes from a rigid-body engine
//!
//! The fracture controller and frame loop only ever talk to this trait, so
//! any engine that can add/remove polygon bodies, set velocities and step
//! time can drive a pane. [`RigidBodySystem`](crate::rigid_body_system::RigidBodySystem)
//! is the built-in implementation.

use crate::rigid_body::{PolygonDesc, Vec2};

/// Opaque reference to a body owned by a [`PhysicsWorld`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u32);

pub trait PhysicsWorld {
    /// Register a new dynamic body and return its handle
    fn add_body(&mut self, desc: PolygonDesc) -> BodyHandle;

    /// Remove a body. Returns `false` if the handle was unknown.
    fn remove_body(&mut self, handle: BodyHandle) -> bool;

    /// Remove every dynamic body (static bounds stay)
    fn clear_bodies(&mut self);

    fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2);

    fn set_angular_velocity(&mut self, handle: BodyHandle, omega: f32);

    /// Advance the simulation by `dt_ms` milliseconds
    fn step(&mut self, dt_ms: f64);

    /// World-space outline at the current pose
    fn body_vertices(&self, handle: BodyHandle) -> Option<&[Vec2]>;

    /// Rebuild the static boundary bodies for a canvas of this size
    fn set_bounds(&mut self, width: f32, height: f32);

    fn body_count(&self) -> usize;
}
