use crate::rigid_body::{RigidBody, Vec2};

use super::bounds::StaticWall;

/// Approach speed below which contacts stop bouncing (units per base step)
pub(super) const RESTING_SPEED: f32 = 0.5;

/// Overlap tolerated between two shards before they are pushed apart
const CONTACT_SLOP: f32 = 0.05;

/// Share of the remaining overlap removed per sub-step
const POSITION_CORRECTION: f32 = 0.8;

/// Push `body` out of every wall it overlaps and respond to the impact.
///
/// Returns true if any wall was touched.
pub(super) fn resolve_walls(body: &mut RigidBody, walls: &[StaticWall]) -> bool {
    let mut touched = false;

    for wall in walls {
        let mut deepest = 0.0f32;
        for v in body.world_vertices.iter() {
            if wall.contains(*v) {
                deepest = deepest.max(wall.depth(*v));
            }
        }
        if deepest <= 0.0 {
            continue;
        }
        touched = true;

        body.pos += wall.normal * deepest;

        let vn = body.velocity.dot(wall.normal);
        if vn < 0.0 {
            let restitution = if -vn < RESTING_SPEED {
                0.0
            } else {
                body.restitution.max(wall.restitution)
            };
            let normal_part = wall.normal * vn;
            let tangent = body.velocity - normal_part;
            body.velocity = tangent * (1.0 - body.friction) - normal_part * restitution;
        }
        body.angular_vel *= 1.0 - body.friction;

        body.refresh_world_vertices();
    }

    touched
}

/// Separate two overlapping shards and exchange momentum along the contact
/// normal. Both the push-out and the impulse are split by inverse mass, so a
/// dense shard moves less than a light one.
///
/// Returns true if the shards were in contact.
pub(super) fn resolve_pair(a: &mut RigidBody, b: &mut RigidBody) -> bool {
    let reach = a.radius + b.radius;
    if (b.pos - a.pos).length_squared() > reach * reach {
        return false;
    }
    let Some((mut normal, depth)) = min_overlap(&a.world_vertices, &b.world_vertices) else {
        return false;
    };
    // normal points from a to b
    if (b.pos - a.pos).dot(normal) < 0.0 {
        normal = -normal;
    }

    let inv_a = 1.0 / a.mass;
    let inv_b = 1.0 / b.mass;
    let inv_sum = inv_a + inv_b;

    let push = normal * ((depth - CONTACT_SLOP).max(0.0) * POSITION_CORRECTION / inv_sum);
    a.pos -= push * inv_a;
    b.pos += push * inv_b;

    let vn = (b.velocity - a.velocity).dot(normal);
    if vn < 0.0 {
        let restitution = if -vn < RESTING_SPEED {
            0.0
        } else {
            a.restitution.max(b.restitution)
        };
        let j = -(1.0 + restitution) * vn / inv_sum;
        a.velocity -= normal * (j * inv_a);
        b.velocity += normal * (j * inv_b);
    }

    a.refresh_world_vertices();
    b.refresh_world_vertices();
    true
}

/// Separating-axis test over the edge normals of two convex outlines.
///
/// Returns the axis of least overlap and the overlap depth, or None when
/// some axis separates them.
fn min_overlap(a: &[Vec2], b: &[Vec2]) -> Option<(Vec2, f32)> {
    let mut best: Option<(Vec2, f32)> = None;

    for poly in [a, b] {
        for (i, p) in poly.iter().enumerate() {
            let edge = poly[(i + 1) % poly.len()] - *p;
            let axis = Vec2::new(-edge.y, edge.x).normalize();
            if axis.length_squared() == 0.0 {
                continue;
            }

            let (a_min, a_max) = project(a, axis);
            let (b_min, b_max) = project(b, axis);
            let overlap = a_max.min(b_max) - a_min.max(b_min);
            if overlap <= 0.0 {
                return None;
            }
            if best.map_or(true, |(_, d)| overlap < d) {
                best = Some((axis, overlap));
            }
        }
    }

    best
}

fn project(poly: &[Vec2], axis: Vec2) -> (f32, f32) {
    poly.iter()
        .map(|v| v.dot(axis))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), d| (lo.min(d), hi.max(d)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::{Material, PolygonDesc};

    fn square(x: f32, density: f32) -> RigidBody {
        let desc = PolygonDesc {
            position: Vec2::new(x, 0.0),
            vertices: vec![
                Vec2::new(-5.0, -5.0),
                Vec2::new(5.0, -5.0),
                Vec2::new(5.0, 5.0),
                Vec2::new(-5.0, 5.0),
            ],
            material: Material { restitution: 0.0, density, friction: 0.2 },
        };
        RigidBody::new_polygon(desc, 1)
    }

    #[test]
    fn separated_squares_do_not_touch() {
        let mut a = square(0.0, 0.001);
        let mut b = square(10.5, 0.001);
        assert!(!resolve_pair(&mut a, &mut b));
        assert_eq!(a.pos, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn overlap_axis_is_the_shallow_one() {
        let a = square(0.0, 0.001);
        let b = square(8.5, 0.001);
        let (axis, depth) = min_overlap(&a.world_vertices, &b.world_vertices).unwrap();
        assert!(axis.y.abs() < 1e-4);
        assert!((depth - 1.5).abs() < 1e-4);
    }

    #[test]
    fn light_shard_gives_way_to_heavy_one() {
        let mut light = square(0.0, 0.001);
        let mut heavy = square(8.5, 0.002);
        light.velocity = Vec2::new(2.0, 0.0);
        let momentum = light.mass * light.velocity.x;

        assert!(resolve_pair(&mut light, &mut heavy));

        // Momentum survives the exchange
        let after = light.mass * light.velocity.x + heavy.mass * heavy.velocity.x;
        assert!((after - momentum).abs() < 1e-5);

        // Twice the mass, half the change in velocity and position
        let dv_light = 2.0 - light.velocity.x;
        let dv_heavy = heavy.velocity.x;
        assert!((dv_light - 2.0 * dv_heavy).abs() < 1e-4);
        assert!((light.pos.x.abs() - 2.0 * (heavy.pos.x - 8.5)).abs() < 1e-4);
        assert!(heavy.velocity.x > 0.0);
    }
}
