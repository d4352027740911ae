use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::rigid_body::Vec2;
use crate::simulation::{DrawList, DrawOp};

/// Paint one recorded frame
pub(super) fn replay(ctx: &CanvasRenderingContext2d, list: &DrawList) -> Result<(), JsValue> {
    for op in list.ops() {
        match op {
            DrawOp::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
            }
            DrawOp::FillGradientRect { x, y, width, height, from, to, stops } => {
                let gradient =
                    ctx.create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
                gradient.add_color_stop(0.0, &stops[0].css())?;
                gradient.add_color_stop(1.0, &stops[1].css())?;
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.fill_rect(*x as f64, *y as f64, *width as f64, *height as f64);
            }
            DrawOp::FillPolygon { points, color } => {
                if trace(ctx, list.polygon(points)) {
                    ctx.set_fill_style_str(&color.css());
                    ctx.fill();
                }
            }
            DrawOp::StrokePolygon { points, color, line_width } => {
                if trace(ctx, list.polygon(points)) {
                    ctx.set_stroke_style_str(&color.css());
                    ctx.set_line_width(*line_width as f64);
                    ctx.stroke();
                }
            }
            DrawOp::StrokeLine { from, to, color, line_width } => {
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.set_stroke_style_str(&color.css());
                ctx.set_line_width(*line_width as f64);
                ctx.stroke();
            }
            DrawOp::StrokeRect { x, y, width, height, color, line_width } => {
                ctx.set_stroke_style_str(&color.css());
                ctx.set_line_width(*line_width as f64);
                ctx.stroke_rect(*x as f64, *y as f64, *width as f64, *height as f64);
            }
        }
    }
    Ok(())
}

/// Closed path through `points`; false when there is nothing to draw
fn trace(ctx: &CanvasRenderingContext2d, points: &[Vec2]) -> bool {
    let Some((first, rest)) = points.split_first() else {
        return false;
    };
    ctx.begin_path();
    ctx.move_to(first.x as f64, first.y as f64);
    for p in rest {
        ctx.line_to(p.x as f64, p.y as f64);
    }
    ctx.close_path();
    true
}
