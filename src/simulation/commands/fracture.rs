use rand::Rng;

use crate::physics_world::PhysicsWorld;
use crate::rigid_body::Vec2;

use super::feedback::{fracture_feedback, SWIPE_VIBRATION, TAP_VIBRATION};
use super::gesture::SwipeEvent;
use super::shard::create_shard;
use super::PaneCore;

/// Swipe velocity per unit of intensity
const VELOCITY_PER_FACTOR: f32 = 5.0;
const MIN_VELOCITY_FACTOR: f32 = 1.0;
const MAX_VELOCITY_FACTOR: f32 = 3.0;

/// Swipe velocity -> shard speed/spin multiplier in [1, 3]
pub fn velocity_factor(velocity: f32) -> f32 {
    // max/min (not clamp) so NaN lands on the floor
    (velocity / VELOCITY_PER_FACTOR)
        .max(MIN_VELOCITY_FACTOR)
        .min(MAX_VELOCITY_FACTOR)
}

/// Inclusive shard-count range for a swipe fracture.
///
/// The lower bound scales with the factor while the upper bound stays at
/// `max_shards`; when the scaled lower bound overtakes it the range collapses
/// to exactly `max_shards`.
pub fn swipe_shard_range(min_shards: u32, max_shards: u32, factor: f32) -> (u32, u32) {
    let scaled = (min_shards as f32 * factor).floor() as u32;
    (scaled.min(max_shards), max_shards)
}

pub(super) fn break_at<W: PhysicsWorld>(pane: &mut PaneCore<W>, x: f32, y: f32) -> bool {
    if pane.broken {
        return false;
    }
    pane.broken = true;

    let vibrate = pane.vibration_allowed();
    fracture_feedback(&mut pane.feedback, vibrate, &TAP_VIBRATION);

    let count = pane
        .rng
        .random_range(pane.config.min_shards..=pane.config.max_shards);
    let origin = Vec2::new(x, y);
    for _ in 0..count {
        create_shard(pane, origin, None, 1.0);
    }

    log::info!("pane broken at ({:.0}, {:.0}) into {} shards", x, y, count);
    true
}

pub(super) fn break_with_swipe<W: PhysicsWorld>(
    pane: &mut PaneCore<W>,
    x: f32,
    y: f32,
    swipe: &SwipeEvent,
) -> bool {
    if pane.broken {
        return false;
    }
    pane.broken = true;

    let vibrate = pane.vibration_allowed();
    fracture_feedback(&mut pane.feedback, vibrate, &SWIPE_VIBRATION);

    let factor = velocity_factor(swipe.velocity);
    let (low, high) = swipe_shard_range(pane.config.min_shards, pane.config.max_shards, factor);
    let count = pane.rng.random_range(low..=high);
    let direction = swipe.angle();
    let origin = Vec2::new(x, y);
    for _ in 0..count {
        create_shard(pane, origin, Some(direction), factor);
    }

    log::info!(
        "pane swiped at ({:.0}, {:.0}): {} shards, direction {:.2} rad, factor {:.2}",
        x,
        y,
        count,
        direction,
        factor
    );
    true
}

/// Back to intact: drop every shard body, forget pointers and swipe state
pub(super) fn reset<W: PhysicsWorld>(pane: &mut PaneCore<W>) {
    // Every body in the world is a shard
    pane.shards.clear();
    pane.world.clear_bodies();
    pane.broken = false;
    pane.gestures.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_factor_clamps() {
        assert_eq!(velocity_factor(0.0), 1.0);
        assert_eq!(velocity_factor(7.5), 1.5);
        assert_eq!(velocity_factor(50.0), 3.0);
        assert_eq!(velocity_factor(f32::INFINITY), 3.0);
        assert_eq!(velocity_factor(f32::NAN), 1.0);
    }

    #[test]
    fn swipe_range_scales_lower_bound_only() {
        assert_eq!(swipe_shard_range(20, 40, 1.0), (20, 40));
        assert_eq!(swipe_shard_range(20, 40, 1.5), (30, 40));
        assert_eq!(swipe_shard_range(20, 40, 2.0), (40, 40));
        // 60 > 40: collapses onto the upper bound
        assert_eq!(swipe_shard_range(20, 40, 3.0), (40, 40));
    }
}
