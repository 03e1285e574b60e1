//! Polyline painter for the rolling population chart.
//!
//! The chart model lives in `dashboard_shared::chart`; this just maps it
//! onto a canvas. The series window holds up to 21 samples (soft bound 20),
//! so the x step is derived from the actual label count.

use dashboard_shared::{palette, PopulationChart};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND: &str = "#0f172a";
const GRID: &str = "#334155";
const LABEL_COLOR: &str = "#e2e8f0";
const GRID_ROWS: usize = 4;

pub fn paint(canvas: &HtmlCanvasElement, chart: &PopulationChart) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_stroke_style_str(GRID);
    ctx.set_line_width(1.0);
    for row in 1..GRID_ROWS {
        let y = height * row as f64 / GRID_ROWS as f64;
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        ctx.stroke();
    }

    let samples = chart.labels().len();
    if samples < 2 {
        return;
    }

    // Leave headroom above the tallest sample so the line never rides the top.
    let y_max = chart.max_sample().max(1) as f64 * 1.25;
    let x_step = width / (samples - 1) as f64;
    let y_of = |count: u32| height - (count as f64 / y_max) * height;

    for series in chart.series() {
        let Some(&first) = series.samples.front() else {
            continue;
        };

        // Filled area under the line, then the line itself.
        ctx.set_fill_style_str(palette::chart_fill(series.color_index));
        ctx.begin_path();
        ctx.move_to(0.0, height);
        ctx.line_to(0.0, y_of(first));
        for (i, &count) in series.samples.iter().enumerate().skip(1) {
            ctx.line_to(i as f64 * x_step, y_of(count));
        }
        ctx.line_to((series.samples.len() - 1) as f64 * x_step, height);
        ctx.close_path();
        ctx.fill();

        ctx.set_stroke_style_str(palette::stroke(series.color_index));
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(0.0, y_of(first));
        for (i, &count) in series.samples.iter().enumerate().skip(1) {
            ctx.line_to(i as f64 * x_step, y_of(count));
        }
        ctx.stroke();
    }

    if let Some(last_label) = chart.labels().back() {
        ctx.set_font("11px sans-serif");
        ctx.set_fill_style_str(LABEL_COLOR);
        ctx.set_text_align("right");
        ctx.set_text_baseline("bottom");
        let _ = ctx.fill_text(last_label, width - 4.0, height - 4.0);
    }
}
