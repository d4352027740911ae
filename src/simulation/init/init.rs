use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::PaneConfig;
use crate::physics_world::PhysicsWorld;

use super::draw_list::DrawList;
use super::frame_clock::FrameClock;
use super::gesture::GestureTracker;
use super::PaneCore;

pub(super) fn create_pane_core<W: PhysicsWorld>(
    config: PaneConfig,
    mut world: W,
    width: f32,
    height: f32,
    seed: u64,
) -> PaneCore<W> {
    let width = width.max(0.0);
    let height = height.max(0.0);
    world.set_bounds(width, height);

    PaneCore {
        config,
        world,
        shards: Vec::with_capacity(64),
        gestures: GestureTracker::new(),
        broken: false,
        width,
        height,
        rng: SmallRng::seed_from_u64(seed),
        clock: FrameClock::new(),
        feedback: Vec::with_capacity(4),
        haptics_supported: false,
        draw_list: DrawList::new(),
    }
}
