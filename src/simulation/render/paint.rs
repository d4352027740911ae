use crate::color::{Rgba, WHITE};
use crate::glass::GlassType;
use crate::rigid_body::Vec2;

use super::draw_list::{DrawList, DrawOp};

/// Fraction of each canvas edge the corner highlight spans
const HIGHLIGHT_SPAN: f32 = 0.3;

const BORDER_GLOW_WIDTH: f32 = 10.0;
const BORDER_GLOW_INSET: f32 = 5.0;

const SHARD_OUTLINE_WIDTH: f32 = 1.0;

/// Intact pane: gradient body, corner highlight, thick-glass border glow
pub(crate) fn draw_pane(list: &mut DrawList, glass: GlassType, width: f32, height: f32) {
    let style = glass.pane_style();

    list.push(DrawOp::FillGradientRect {
        x: 0.0,
        y: 0.0,
        width,
        height,
        from: Vec2::zero(),
        to: Vec2::new(width, height),
        stops: style.gradient,
    });

    let highlight = list.push_points(&[
        Vec2::zero(),
        Vec2::new(width * HIGHLIGHT_SPAN, 0.0),
        Vec2::new(0.0, height * HIGHLIGHT_SPAN),
    ]);
    list.push(DrawOp::FillPolygon {
        points: highlight,
        color: WHITE.with_alpha(style.reflection_opacity),
    });

    if let Some(glow) = style.border_glow {
        list.push(DrawOp::StrokeRect {
            x: BORDER_GLOW_INSET,
            y: BORDER_GLOW_INSET,
            width: width - 2.0 * BORDER_GLOW_INSET,
            height: height - 2.0 * BORDER_GLOW_INSET,
            color: glow,
            line_width: BORDER_GLOW_WIDTH,
        });
    }
}

/// One shard at `opacity`: fill, outline, and a highlight along its first edge
pub(crate) fn draw_shard(list: &mut DrawList, vertices: &[Vec2], color: Rgba, opacity: f32) {
    if vertices.len() < 2 {
        return;
    }

    let outline = list.push_points(vertices);
    list.push(DrawOp::FillPolygon {
        points: outline.clone(),
        color: color.at(opacity),
    });
    list.push(DrawOp::StrokePolygon {
        points: outline,
        color: WHITE.with_alpha(opacity),
        line_width: SHARD_OUTLINE_WIDTH,
    });
    list.push(DrawOp::StrokeLine {
        from: vertices[0],
        to: vertices[1],
        color: WHITE.with_alpha(opacity * 0.5),
        line_width: SHARD_OUTLINE_WIDTH,
    });
}
