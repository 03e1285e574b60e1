//! Fixed zone color palette, shared by the canvas painter and the chart.
//!
//! Zones take their color from their position in the cache, wrapping every
//! four entries.

const FILLS: [&str; 4] = [
    "rgba(56, 189, 248, 0.7)",
    "rgba(232, 121, 249, 0.7)",
    "rgba(74, 222, 128, 0.7)",
    "rgba(251, 191, 36, 0.7)",
];

const STROKES: [&str; 4] = [
    "rgba(56, 189, 248, 1)",
    "rgba(232, 121, 249, 1)",
    "rgba(74, 222, 128, 1)",
    "rgba(251, 191, 36, 1)",
];

const CHART_FILLS: [&str; 4] = [
    "rgba(56, 189, 248, 0.2)",
    "rgba(232, 121, 249, 0.2)",
    "rgba(74, 222, 128, 0.2)",
    "rgba(251, 191, 36, 0.2)",
];

/// Translucent fill for the in-progress drag rectangle.
pub const DRAW_PREVIEW_FILL: &str = "rgba(56, 189, 248, 0.4)";
/// Outline for the in-progress drag rectangle.
pub const DRAW_PREVIEW_STROKE: &str = "rgba(56, 189, 248, 1)";

pub fn fill(index: usize) -> &'static str {
    FILLS[index % FILLS.len()]
}

pub fn stroke(index: usize) -> &'static str {
    STROKES[index % STROKES.len()]
}

pub fn chart_fill(index: usize) -> &'static str {
    CHART_FILLS[index % CHART_FILLS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps_by_zone_position() {
        assert_eq!(fill(0), fill(4));
        assert_eq!(stroke(1), stroke(5));
        assert_ne!(fill(0), fill(1));
        assert_eq!(chart_fill(7), chart_fill(3));
    }
}
