//! Draw list: the frame step records what to paint, the browser layer replays
//! it onto a 2D context. Polygon outlines share one vertex buffer so a frame
//! full of shards does not allocate once the buffers are warm.

use std::ops::Range;

use crate::color::Rgba;
use crate::rigid_body::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Wipe the whole canvas
    Clear { width: f32, height: f32 },
    /// Fill a rectangle with a two-stop linear gradient running `from` -> `to`
    FillGradientRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        from: Vec2,
        to: Vec2,
        stops: [Rgba; 2],
    },
    /// Closed polygon fill; `points` indexes [`DrawList::points`]
    FillPolygon { points: Range<usize>, color: Rgba },
    /// Closed polygon outline
    StrokePolygon { points: Range<usize>, color: Rgba, line_width: f32 },
    StrokeLine { from: Vec2, to: Vec2, color: Rgba, line_width: f32 },
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba,
        line_width: f32,
    },
}

#[derive(Debug, Default)]
pub struct DrawList {
    ops: Vec<DrawOp>,
    points: Vec<Vec2>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
        self.points.clear();
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Vertices a polygon op refers to
    pub fn polygon(&self, range: &Range<usize>) -> &[Vec2] {
        self.points.get(range.clone()).unwrap_or(&[])
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// Copy an outline into the shared buffer
    pub fn push_points(&mut self, vertices: &[Vec2]) -> Range<usize> {
        let start = self.points.len();
        self.points.extend_from_slice(vertices);
        start..self.points.len()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::WHITE;

    #[test]
    fn polygons_share_the_point_buffer() {
        let mut list = DrawList::new();
        let a = list.push_points(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)]);
        let b = list.push_points(&[Vec2::new(5.0, 5.0), Vec2::new(6.0, 5.0), Vec2::new(6.0, 6.0), Vec2::new(5.0, 6.0)]);
        list.push(DrawOp::FillPolygon { points: a.clone(), color: WHITE.with_alpha(1.0) });
        list.push(DrawOp::FillPolygon { points: b.clone(), color: WHITE.with_alpha(1.0) });

        assert_eq!(a, 0..3);
        assert_eq!(b, 3..7);
        assert_eq!(list.polygon(&b)[0], Vec2::new(5.0, 5.0));
        assert_eq!(list.len(), 2);

        list.clear();
        assert!(list.is_empty());
        assert!(list.points().is_empty());
        assert!(list.polygon(&b).is_empty());
    }
}
