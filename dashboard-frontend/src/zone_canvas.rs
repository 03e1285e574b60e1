//! Canvas painter for saved zones and the in-progress drag rectangle.
//!
//! A pure function of state to pixels: it never mutates model state, and
//! the dashboard invokes it after every change affecting geometry or mode
//! and on every canvas resize.

use dashboard_shared::geometry::{centroid, drag_rect, scale_point, PixelPoint};
use dashboard_shared::{palette, Zone, ZoneMode};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub fn paint(
    canvas: &HtmlCanvasElement,
    zones: &[Zone],
    mode: ZoneMode,
    stroke: Option<(PixelPoint, PixelPoint)>,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    if mode == ZoneMode::Previewing {
        for (index, zone) in zones.iter().enumerate() {
            let points: Vec<PixelPoint> = zone
                .coordinates
                .iter()
                .map(|&p| scale_point(p, width, height))
                .collect();
            draw_polygon(
                &ctx,
                &points,
                palette::fill(index),
                palette::stroke(index),
                Some(&zone.name),
            );
        }
    }

    if mode == ZoneMode::Drawing {
        if let Some((a, b)) = stroke {
            let corners = drag_rect(a, b);
            draw_polygon(
                &ctx,
                &corners,
                palette::DRAW_PREVIEW_FILL,
                palette::DRAW_PREVIEW_STROKE,
                Some("Drawing..."),
            );
        }
    }
}

fn draw_polygon(
    ctx: &CanvasRenderingContext2d,
    points: &[PixelPoint],
    fill: &str,
    stroke: &str,
    label: Option<&str>,
) {
    if points.is_empty() {
        return;
    }

    ctx.set_fill_style_str(fill);
    ctx.set_stroke_style_str(stroke);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(points[0].x, points[0].y);
    for p in &points[1..] {
        ctx.line_to(p.x, p.y);
    }
    ctx.close_path();
    ctx.fill();
    ctx.stroke();

    if let Some(name) = label {
        let center = centroid(points);
        ctx.set_font("bold 16px Poppins");
        ctx.set_fill_style_str("#ffffff");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        let _ = ctx.fill_text(name, center.x, center.y);
    }
}
