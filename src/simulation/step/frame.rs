use crate::physics_world::PhysicsWorld;

use super::draw_list::DrawOp;
use super::fracture;
use super::paint::{draw_pane, draw_shard};
use super::PaneCore;

/// Opacity every shard loses per drawn frame (not time-scaled)
pub const FADE_PER_FRAME: f32 = 0.0003;

pub(super) fn frame<W: PhysicsWorld>(pane: &mut PaneCore<W>, time_ms: f64) {
    let dt_ms = pane.clock.tick(time_ms);

    pane.draw_list.clear();
    pane.draw_list.push(DrawOp::Clear {
        width: pane.width,
        height: pane.height,
    });

    pane.world.step(dt_ms);

    if !pane.broken {
        draw_pane(&mut pane.draw_list, pane.config.glass_type, pane.width, pane.height);
    }

    draw_shards(pane);

    // Every shard faded out: back to intact on our own.
    if pane.broken && pane.shards.is_empty() {
        fracture::reset(pane);
        log::debug!("all shards faded, pane restored");
    }
}

/// Fade, cull and record shards. Walks back to front so removal keeps the
/// remaining indices valid.
fn draw_shards<W: PhysicsWorld>(pane: &mut PaneCore<W>) {
    for i in (0..pane.shards.len()).rev() {
        let shard = &mut pane.shards[i];
        shard.opacity -= FADE_PER_FRAME;

        if shard.opacity <= 0.0 {
            let gone = pane.shards.remove(i);
            pane.world.remove_body(gone.body);
            continue;
        }

        let (body, color, opacity) = (shard.body, shard.color, shard.opacity);
        if let Some(vertices) = pane.world.body_vertices(body) {
            draw_shard(&mut pane.draw_list, vertices, color, opacity);
        }
    }
}
