use super::vec2::Vec2;

/// Surface properties of a body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    /// Mass per unit of area
    pub density: f32,
    /// Tangential damping applied on contact (0.0 = ice, 1.0 = glue)
    pub friction: f32,
}

/// Everything needed to spawn a polygon body
#[derive(Clone, Debug)]
pub struct PolygonDesc {
    /// World position the outline is centred on
    pub position: Vec2,
    /// Convex outline around `position`, any winding
    pub vertices: Vec<Vec2>,
    pub material: Material,
}

/// Rigid Body - moves as a single unit
pub struct RigidBody {
    // === Physics State ===
    /// World position (area centroid)
    pub pos: Vec2,
    /// Velocity vector (units per base step)
    pub velocity: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    /// Angular velocity (radians per base step)
    pub angular_vel: f32,
    /// density * area
    pub mass: f32,
    /// Distance from the centroid to the farthest vertex
    pub radius: f32,
    /// Unique ID for this body
    pub id: u32,

    // === Shape Definition ===
    /// Outline relative to the centroid
    pub local_vertices: Vec<Vec2>,
    /// Outline at the current pose, refreshed after every integration
    pub world_vertices: Vec<Vec2>,

    // === Material properties ===
    pub restitution: f32,
    pub friction: f32,
}

impl RigidBody {
    /// Create a polygon body, re-centring the outline on its area centroid
    pub fn new_polygon(desc: PolygonDesc, id: u32) -> Self {
        let (centroid, area) = centroid_and_area(&desc.vertices);
        let local_vertices: Vec<Vec2> = desc.vertices.iter().map(|v| *v - centroid).collect();
        let world_vertices = Vec::with_capacity(local_vertices.len());
        let radius = local_vertices.iter().map(|v| v.length()).fold(0.0f32, f32::max);

        let mut body = Self {
            pos: desc.position + centroid,
            velocity: Vec2::zero(),
            angle: 0.0,
            angular_vel: 0.0,
            mass: (desc.material.density * area).max(f32::EPSILON),
            radius,
            id,
            local_vertices,
            world_vertices,
            restitution: desc.material.restitution.clamp(0.0, 1.0),
            friction: desc.material.friction.clamp(0.0, 1.0),
        };
        body.refresh_world_vertices();
        body
    }

    /// Recompute the cached world outline from pos/angle
    pub fn refresh_world_vertices(&mut self) {
        let (sin, cos) = self.angle.sin_cos();
        self.world_vertices.clear();
        for v in &self.local_vertices {
            self.world_vertices.push(self.pos + v.rotate_sc(sin, cos));
        }
    }
}

/// Area centroid and absolute area of a simple polygon.
///
/// Degenerate outlines (fewer than 3 points or ~zero area) fall back to the
/// vertex mean with zero area.
pub(crate) fn centroid_and_area(vertices: &[Vec2]) -> (Vec2, f32) {
    if vertices.is_empty() {
        return (Vec2::zero(), 0.0);
    }

    let mut twice_area = 0.0f32;
    let mut acc = Vec2::zero();
    for (i, a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % vertices.len()];
        let cross = a.cross(b);
        twice_area += cross;
        acc += (*a + b) * cross;
    }

    if vertices.len() < 3 || twice_area.abs() < 1e-6 {
        let mut mean = Vec2::zero();
        for v in vertices {
            mean += *v;
        }
        return (mean * (1.0 / vertices.len() as f32), 0.0);
    }

    (acc * (1.0 / (3.0 * twice_area)), twice_area.abs() * 0.5)
}
