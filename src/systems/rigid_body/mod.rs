//! RigidBody - A convex polygon that moves as a unit
//!
//! The body stores its outline in local coordinates (relative to its area
//! centroid) and transforms them to world coordinates using position and
//! rotation. World vertices are cached after every integration so renderers
//! can borrow them without recomputing.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::{Material, PolygonDesc, RigidBody};
