use std::f32::consts::{PI, TAU};

use rand::Rng;

use crate::color::Rgba;
use crate::physics_world::{BodyHandle, PhysicsWorld};
use crate::rigid_body::{PolygonDesc, Vec2};

use super::PaneCore;

/// Outline corner count range (inclusive)
const MIN_SIDES: u32 = 3;
const MAX_SIDES: u32 = 5;

/// Corner radius = size * (JITTER_BASE + JITTER_SPAN * rand)
const RADIUS_JITTER_BASE: f32 = 0.7;
const RADIUS_JITTER_SPAN: f32 = 0.3;

/// Max angular velocity magnitude for undirected / directed shards
const SPIN_UNDIRECTED: f32 = 0.1;
const SPIN_DIRECTED: f32 = 0.15;

/// Directed shards scatter within +-45deg of the swipe
const DIRECTED_SPREAD: f32 = PI / 2.0;

/// One glass fragment: a physics body plus its fading look
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shard {
    pub body: BodyHandle,
    /// 1.0 when spawned, removed once it reaches 0
    pub opacity: f32,
    pub color: Rgba,
}

/// Spawn one shard at `origin`, register its body and append it to the pane.
///
/// Without a direction the shard flies off at a random angle; with one it
/// follows the direction (+-45deg) at a speed scaled by `intensity`.
pub(super) fn create_shard<W: PhysicsWorld>(
    pane: &mut PaneCore<W>,
    origin: Vec2,
    direction: Option<f32>,
    intensity: f32,
) -> BodyHandle {
    let glass = pane.config.glass_type;
    let rng = &mut pane.rng;

    let base_size = rng.random_range(pane.config.min_shard_size..=pane.config.max_shard_size);
    let size = base_size * glass.size_factor();

    let sides = rng.random_range(MIN_SIDES..=MAX_SIDES);
    let mut vertices = Vec::with_capacity(sides as usize);
    for i in 0..sides {
        let angle = TAU * i as f32 / sides as f32;
        let radius = size * (RADIUS_JITTER_BASE + rng.random::<f32>() * RADIUS_JITTER_SPAN);
        vertices.push(Vec2::from_angle(angle) * radius);
    }

    let v0 = pane.config.initial_velocity;
    let (velocity, spin) = match direction {
        None => {
            let angle = rng.random::<f32>() * TAU;
            let speed = v0 * (0.5 + rng.random::<f32>() * 0.5);
            let spin = (rng.random::<f32>() - 0.5) * 2.0 * SPIN_UNDIRECTED;
            (Vec2::from_angle(angle) * speed, spin)
        }
        Some(direction) => {
            let angle = direction + (rng.random::<f32>() - 0.5) * DIRECTED_SPREAD;
            let speed = v0 * intensity * (0.8 + rng.random::<f32>() * 0.4);
            let spin = (rng.random::<f32>() - 0.5) * 2.0 * SPIN_DIRECTED * intensity;
            (Vec2::from_angle(angle) * speed, spin)
        }
    };

    let palette = glass.palette();
    let color = palette[rng.random_range(0..palette.len())].with_alpha(glass.palette_alpha());

    let body = pane.world.add_body(PolygonDesc {
        position: origin,
        vertices,
        material: glass.material(),
    });
    pane.world.set_velocity(body, velocity);
    pane.world.set_angular_velocity(body, spin);

    pane.shards.push(Shard {
        body,
        opacity: 1.0,
        color,
    });
    body
}
