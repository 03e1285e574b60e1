//! Canvas-pixel / normalized-space mapping and drag-rectangle geometry.
//!
//! Zones are drawn in canvas pixels but persisted in a 0..=1000 normalized
//! space, so geometry survives window resizes and video source changes.

use crate::ZonePoint;

/// Span of the normalized coordinate space on each axis.
pub const NORMALIZED_SPAN: f64 = 1000.0;

/// Minimum drag side length, in canvas pixels, for a gesture to count as a
/// zone. Anything smaller is treated as a slip and discarded.
pub const MIN_ZONE_SIDE_PX: f64 = 5.0;

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Map a canvas pixel point into normalized space for a canvas of
/// `width` x `height` pixels. Coordinates round to the nearest integer.
pub fn normalize_point(p: PixelPoint, width: f64, height: f64) -> ZonePoint {
    ZonePoint {
        x: (p.x / width * NORMALIZED_SPAN).round() as i32,
        y: (p.y / height * NORMALIZED_SPAN).round() as i32,
    }
}

/// Map a normalized point back onto a canvas of `width` x `height` pixels.
pub fn scale_point(p: ZonePoint, width: f64, height: f64) -> PixelPoint {
    PixelPoint {
        x: p.x as f64 / NORMALIZED_SPAN * width,
        y: p.y as f64 / NORMALIZED_SPAN * height,
    }
}

/// Axis-aligned bounding box of a drag gesture as TL, TR, BR, BL corners.
/// Endpoint order does not matter.
pub fn drag_rect(a: PixelPoint, b: PixelPoint) -> [PixelPoint; 4] {
    let x1 = a.x.min(b.x);
    let y1 = a.y.min(b.y);
    let x2 = a.x.max(b.x);
    let y2 = a.y.max(b.y);
    [
        PixelPoint::new(x1, y1),
        PixelPoint::new(x2, y1),
        PixelPoint::new(x2, y2),
        PixelPoint::new(x1, y2),
    ]
}

/// True when either side of the dragged rectangle is under the minimum.
pub fn drag_too_small(a: PixelPoint, b: PixelPoint) -> bool {
    (a.x - b.x).abs() < MIN_ZONE_SIDE_PX || (a.y - b.y).abs() < MIN_ZONE_SIDE_PX
}

/// Normalize all four corners of a pixel-space rectangle.
pub fn normalize_rect(corners: [PixelPoint; 4], width: f64, height: f64) -> [ZonePoint; 4] {
    corners.map(|p| normalize_point(p, width, height))
}

/// Centroid of a point set; used to anchor the zone name label.
pub fn centroid(points: &[PixelPoint]) -> PixelPoint {
    if points.is_empty() {
        return PixelPoint::default();
    }
    let n = points.len() as f64;
    PixelPoint {
        x: points.iter().map(|p| p.x).sum::<f64>() / n,
        y: points.iter().map(|p| p.y).sum::<f64>() / n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_scenario_normalizes_as_expected() {
        // 500x300 canvas, drag from (50,50) to (250,150).
        let corners = drag_rect(PixelPoint::new(50.0, 50.0), PixelPoint::new(250.0, 150.0));
        let normalized = normalize_rect(corners, 500.0, 300.0);
        assert_eq!(
            normalized,
            [
                ZonePoint::new(100, 167),
                ZonePoint::new(500, 167),
                ZonePoint::new(500, 500),
                ZonePoint::new(100, 500),
            ]
        );
    }

    #[test]
    fn normalize_round_trips_within_one_pixel_unit() {
        let (w, h) = (640.0, 360.0);
        for &(x, y) in &[(0.0, 0.0), (17.0, 211.0), (333.0, 59.0), (640.0, 360.0)] {
            let p = PixelPoint::new(x, y);
            let back = scale_point(normalize_point(p, w, h), w, h);
            assert!((back.x - p.x).abs() <= 1.0, "x drifted: {} -> {}", p.x, back.x);
            assert!((back.y - p.y).abs() <= 1.0, "y drifted: {} -> {}", p.y, back.y);
        }
    }

    #[test]
    fn drag_rect_is_order_independent() {
        let a = PixelPoint::new(250.0, 150.0);
        let b = PixelPoint::new(50.0, 50.0);
        assert_eq!(drag_rect(a, b), drag_rect(b, a));
        let corners = drag_rect(a, b);
        assert_eq!(corners[0], PixelPoint::new(50.0, 50.0));
        assert_eq!(corners[2], PixelPoint::new(250.0, 150.0));
    }

    #[test]
    fn narrow_drags_are_too_small() {
        let origin = PixelPoint::new(100.0, 100.0);
        assert!(drag_too_small(origin, PixelPoint::new(104.9, 200.0)));
        assert!(drag_too_small(origin, PixelPoint::new(200.0, 103.0)));
        assert!(drag_too_small(origin, origin));
        assert!(!drag_too_small(origin, PixelPoint::new(105.0, 105.0)));
    }

    #[test]
    fn centroid_of_rectangle_is_its_center() {
        let corners = drag_rect(PixelPoint::new(0.0, 0.0), PixelPoint::new(100.0, 50.0));
        let c = centroid(&corners);
        assert_eq!(c, PixelPoint::new(50.0, 25.0));
    }
}
