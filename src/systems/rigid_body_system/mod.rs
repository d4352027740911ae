//! RigidBodySystem - Minimal polygon dynamics for the glass pane
//!
//! No rotational contact response, no joints, no sleeping.
//! Goals:
//! - Satisfy the `PhysicsWorld` contract the pane is written against.
//! - Keep shards inside the canvas: floor plus left/right walls.
//! - Stay frame-rate independent by integrating in fixed sub-steps.
//!
//! Current behavior:
//! - Gravity and air resistance in Matter-style units (per 1000/60 ms step).
//! - Vertex-vs-wall contacts with restitution and friction.
//! - Shard-vs-shard contacts: SAT overlap, push-out and impulse split by
//!   inverse mass, so thick (denser) glass shoves normal glass around.

mod bounds;
mod collision;
mod system;

pub use bounds::{StaticWall, WALL_RESTITUTION, WALL_THICKNESS};
pub use system::{RigidBodySystem, BASE_DELTA_MS, GRAVITY_SCALE, MAX_STEP_MS};
