use crate::rigid_body::Vec2;

/// Thickness of each boundary wall
pub const WALL_THICKNESS: f32 = 100.0;

/// Bounciness of the boundary walls
pub const WALL_RESTITUTION: f32 = 0.7;

/// Axis-aligned static wall. `normal` points out of the wall into the play
/// area and `anchor` lies on the wall's exposed face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticWall {
    pub min: Vec2,
    pub max: Vec2,
    pub normal: Vec2,
    pub anchor: Vec2,
    pub restitution: f32,
}

impl StaticWall {
    fn from_center(center: Vec2, width: f32, height: f32, normal: Vec2) -> Self {
        let half = Vec2::new(width * 0.5, height * 0.5);
        let min = center - half;
        let max = center + half;
        // The exposed face is the side the normal points through.
        let anchor = Vec2::new(
            if normal.x > 0.0 { max.x } else if normal.x < 0.0 { min.x } else { center.x },
            if normal.y > 0.0 { max.y } else if normal.y < 0.0 { min.y } else { center.y },
        );
        Self {
            min,
            max,
            normal,
            anchor,
            restitution: WALL_RESTITUTION,
        }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }

    /// How far `p` sits behind the exposed face (positive = inside)
    #[inline]
    pub fn depth(&self, p: Vec2) -> f32 {
        (self.anchor - p).dot(self.normal)
    }
}

/// Floor below the canvas plus a wall on each side. No ceiling.
pub(super) fn walls_for(width: f32, height: f32) -> Vec<StaticWall> {
    let t = WALL_THICKNESS;
    vec![
        // Floor
        StaticWall::from_center(
            Vec2::new(width / 2.0, height + t / 2.0),
            width + t,
            t,
            Vec2::new(0.0, -1.0),
        ),
        // Left
        StaticWall::from_center(
            Vec2::new(-t / 2.0, height / 2.0),
            t,
            height + t,
            Vec2::new(1.0, 0.0),
        ),
        // Right
        StaticWall::from_center(
            Vec2::new(width + t / 2.0, height / 2.0),
            t,
            height + t,
            Vec2::new(-1.0, 0.0),
        ),
    ]
}
