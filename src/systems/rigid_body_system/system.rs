use crate::physics_world::{BodyHandle, PhysicsWorld};
use crate::rigid_body::{PolygonDesc, RigidBody, Vec2};

use super::bounds::{walls_for, StaticWall};
use super::collision::{resolve_pair, resolve_walls};

/// Reference step length; velocities are expressed per base step
pub const BASE_DELTA_MS: f64 = 1000.0 / 60.0;

/// Gravity to acceleration factor (matches Matter.js' default scale)
pub const GRAVITY_SCALE: f32 = 0.001;

/// Largest span of time a single `step` call will simulate
pub const MAX_STEP_MS: f64 = 250.0;

/// Manages all shard bodies and the static canvas bounds
pub struct RigidBodySystem {
    bodies: Vec<RigidBody>,
    walls: Vec<StaticWall>,
    next_id: u32,
    /// Downward pull in Matter-style units
    gravity: f32,
    /// Velocity kept per base step (0.99 = lose 1% per step)
    resistance: f32,
}

impl RigidBodySystem {
    pub fn new(gravity: f32, resistance: f32) -> Self {
        Self {
            bodies: Vec::new(),
            walls: Vec::new(),
            next_id: 1,
            gravity,
            resistance: resistance.clamp(0.0, 1.0),
        }
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id == handle.0)
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.iter_mut().find(|b| b.id == handle.0)
    }

    pub fn walls(&self) -> &[StaticWall] {
        &self.walls
    }

    /// One integration pass covering `scale` base steps
    fn integrate(&mut self, scale: f32) {
        let g = GRAVITY_SCALE * (BASE_DELTA_MS * BASE_DELTA_MS) as f32;
        let accel = Vec2::new(0.0, self.gravity * g);
        let damping = self.resistance.powf(scale);

        for body in self.bodies.iter_mut() {
            body.velocity += accel * scale;
            body.velocity = body.velocity * damping;
            body.angular_vel *= damping;

            body.pos += body.velocity * scale;
            body.angle += body.angular_vel * scale;
            body.refresh_world_vertices();
        }

        // Shard pairs first, walls last so nothing is left inside a wall
        for i in 0..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                resolve_pair(a, b);
            }
        }
        for body in self.bodies.iter_mut() {
            resolve_walls(body, &self.walls);
        }
    }
}

impl PhysicsWorld for RigidBodySystem {
    fn add_body(&mut self, desc: PolygonDesc) -> BodyHandle {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        self.bodies.push(RigidBody::new_polygon(desc, id));
        BodyHandle(id)
    }

    fn remove_body(&mut self, handle: BodyHandle) -> bool {
        if let Some(idx) = self.bodies.iter().position(|b| b.id == handle.0) {
            self.bodies.swap_remove(idx);
            return true;
        }
        false
    }

    fn clear_bodies(&mut self) {
        self.bodies.clear();
    }

    fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2) {
        if let Some(body) = self.body_mut(handle) {
            body.velocity = velocity;
        }
    }

    fn set_angular_velocity(&mut self, handle: BodyHandle, omega: f32) {
        if let Some(body) = self.body_mut(handle) {
            body.angular_vel = omega;
        }
    }

    fn step(&mut self, dt_ms: f64) {
        let mut remaining = dt_ms.clamp(0.0, MAX_STEP_MS);
        while remaining > 0.0 {
            let h = remaining.min(BASE_DELTA_MS);
            self.integrate((h / BASE_DELTA_MS) as f32);
            remaining -= h;
        }
    }

    fn body_vertices(&self, handle: BodyHandle) -> Option<&[Vec2]> {
        self.body(handle).map(|b| b.world_vertices.as_slice())
    }

    fn set_bounds(&mut self, width: f32, height: f32) {
        self.walls = walls_for(width, height);
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::Material;

    const GLASS: Material = Material { restitution: 0.3, density: 0.001, friction: 0.2 };

    fn triangle_at(x: f32, y: f32) -> PolygonDesc {
        PolygonDesc {
            position: Vec2::new(x, y),
            vertices: vec![Vec2::new(0.0, -5.0), Vec2::new(5.0, 5.0), Vec2::new(-5.0, 5.0)],
            material: GLASS,
        }
    }

    #[test]
    fn gravity_pulls_bodies_down() {
        let mut world = RigidBodySystem::new(0.6, 1.0);
        world.set_bounds(400.0, 400.0);
        let h = world.add_body(triangle_at(200.0, 100.0));
        let y0 = world.body(h).unwrap().pos.y;

        world.step(BASE_DELTA_MS * 10.0);

        let body = world.body(h).unwrap();
        assert!(body.pos.y > y0);
        assert!(body.velocity.y > 0.0);
        assert!(body.velocity.x.abs() < 1e-6);
    }

    #[test]
    fn floor_stops_falling_bodies() {
        let mut world = RigidBodySystem::new(0.6, 0.99);
        world.set_bounds(200.0, 100.0);
        let h = world.add_body(triangle_at(100.0, 50.0));

        for _ in 0..600 {
            world.step(BASE_DELTA_MS);
        }

        for v in world.body_vertices(h).unwrap() {
            assert!(v.y <= 100.0 + 1.0, "vertex sank into the floor: {:?}", v);
        }
    }

    #[test]
    fn side_walls_reflect_horizontal_motion() {
        let mut world = RigidBodySystem::new(0.0, 1.0);
        world.set_bounds(100.0, 1000.0);
        let h = world.add_body(triangle_at(90.0, 500.0));
        world.set_velocity(h, Vec2::new(8.0, 0.0));

        for _ in 0..5 {
            world.step(BASE_DELTA_MS);
        }

        let body = world.body(h).unwrap();
        assert!(body.velocity.x < 0.0);
        assert!(body.pos.x < 100.0);
    }

    #[test]
    fn shards_collide_instead_of_passing_through() {
        let mut world = RigidBodySystem::new(0.0, 1.0);
        let a = world.add_body(triangle_at(100.0, 500.0));
        let b = world.add_body(triangle_at(130.0, 500.0));
        world.set_velocity(a, Vec2::new(3.0, 0.0));
        world.set_velocity(b, Vec2::new(-3.0, 0.0));

        for _ in 0..20 {
            world.step(BASE_DELTA_MS);
        }

        // Unobstructed they would have swapped sides by now
        assert!(world.body(a).unwrap().pos.x < world.body(b).unwrap().pos.x);
    }

    #[test]
    fn denser_glass_pushes_lighter_glass_further() {
        let heavy = Material { density: 0.002, restitution: 0.2, ..GLASS };
        let run = |material: Material| {
            let mut world = RigidBodySystem::new(0.0, 1.0);
            let striker = world.add_body(PolygonDesc { material, ..triangle_at(100.0, 500.0) });
            let target = world.add_body(triangle_at(112.0, 500.0));
            world.set_velocity(striker, Vec2::new(4.0, 0.0));
            for _ in 0..10 {
                world.step(BASE_DELTA_MS);
            }
            world.body(target).unwrap().velocity.x
        };

        let pushed_by_normal = run(GLASS);
        let pushed_by_thick = run(heavy);
        assert!(pushed_by_normal > 0.0);
        assert!(pushed_by_thick > pushed_by_normal);
    }

    #[test]
    fn remove_and_unknown_handles() {
        let mut world = RigidBodySystem::new(0.6, 0.99);
        let a = world.add_body(triangle_at(10.0, 10.0));
        let b = world.add_body(triangle_at(20.0, 10.0));
        assert_ne!(a, b);
        assert_eq!(world.body_count(), 2);

        assert!(world.remove_body(a));
        assert!(!world.remove_body(a));
        assert!(world.body_vertices(a).is_none());
        assert!(world.body_vertices(b).is_some());

        // No-ops on stale handles.
        world.set_velocity(a, Vec2::new(1.0, 1.0));
        world.set_angular_velocity(a, 1.0);

        world.clear_bodies();
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn set_bounds_rebuilds_walls() {
        let mut world = RigidBodySystem::new(0.6, 0.99);
        world.set_bounds(300.0, 200.0);
        assert_eq!(world.walls().len(), 3);
        assert_eq!(world.walls()[0].anchor.y, 200.0);

        world.set_bounds(500.0, 250.0);
        assert_eq!(world.walls().len(), 3);
        assert_eq!(world.walls()[0].anchor.y, 250.0);
        assert_eq!(world.walls()[2].anchor.x, 500.0);
    }

    #[test]
    fn step_ignores_negative_and_caps_large_gaps() {
        let mut world = RigidBodySystem::new(0.6, 1.0);
        let h = world.add_body(triangle_at(0.0, 0.0));
        let start = world.body(h).unwrap().pos;

        world.step(-50.0);
        assert_eq!(world.body(h).unwrap().pos, start);

        let mut capped = RigidBodySystem::new(0.6, 1.0);
        let hc = capped.add_body(triangle_at(0.0, 0.0));
        capped.step(MAX_STEP_MS);
        let mut huge = RigidBodySystem::new(0.6, 1.0);
        let hh = huge.add_body(triangle_at(0.0, 0.0));
        huge.step(MAX_STEP_MS * 40.0);

        let a = capped.body(hc).unwrap().pos.y;
        let b = huge.body(hh).unwrap().pos.y;
        assert!((a - b).abs() < 1e-3);
    }
}
