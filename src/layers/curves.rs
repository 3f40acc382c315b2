//! Connector paths for lines and annotations.
//!
//! The two shapes bend differently on purpose: lines bow along the segment
//! normal in proportion to their length, while annotation connectors hook
//! through a control point skewed towards the label's horizontal offset.

use crate::core::constants::LINE_CURVE_FACTOR;
use crate::core::geo::{LngLat, Point};
use crate::projection::GeoProjection;

/// Control point of a line bowed by `curve` along the segment's left normal.
///
/// A zero-length segment has no normal and yields its own midpoint.
pub fn line_control_point(start: Point, end: Point, curve: f64) -> Point {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let distance = (dx * dx + dy * dy).sqrt();
    let (nx, ny) = if distance > 0.0 {
        (-dy / distance, dx / distance)
    } else {
        (0.0, 0.0)
    };
    let offset = distance * curve * LINE_CURVE_FACTOR;
    let mid = start.midpoint(&end);
    Point::new(mid.x + nx * offset, mid.y + ny * offset)
}

/// Path between two already projected points
pub fn screen_line_path(start: Point, end: Point, curve: f64) -> String {
    if curve == 0.0 {
        return format!("M{},{} L{},{}", start.x, start.y, end.x, end.y);
    }
    let control = line_control_point(start, end, curve);
    format!(
        "M{},{} Q{},{} {},{}",
        start.x, start.y, control.x, control.y, end.x, end.y
    )
}

/// Path from `from` to `to` through `projection`, bowed by `curve`.
///
/// Empty when either endpoint does not project; callers skip drawing then.
pub fn line_path(projection: &dyn GeoProjection, from: LngLat, to: LngLat, curve: f64) -> String {
    match (projection.project(from), projection.project(to)) {
        (Some(start), Some(end)) => screen_line_path(start, end, curve),
        _ => {
            log::debug!("line {:?} -> {:?} has an unprojectable endpoint", from, to);
            String::new()
        }
    }
}

/// Connector from `(x, y)` to the label at `(x + dx, y + dy)`, in screen space
pub fn annotation_path(x: f64, y: f64, dx: f64, dy: f64, curve: f64) -> String {
    let (ex, ey) = (x + dx, y + dy);
    if curve <= 0.0 {
        return format!("M{},{} L{},{}", x, y, ex, ey);
    }
    let cx = x + dx * curve;
    let cy = y + dy * (1.0 - curve);
    format!("M{},{} Q{},{} {},{}", x, y, cx, cy, ex, ey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_line() {
        assert_eq!(
            screen_line_path(Point::new(0.0, 0.0), Point::new(10.0, 5.0), 0.0),
            "M0,0 L10,5"
        );
    }

    #[test]
    fn test_curve_scales_with_length() {
        let short = line_control_point(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 0.5);
        let long = line_control_point(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 0.5);
        assert_eq!(short, Point::new(5.0, 1.5));
        assert_eq!(long, Point::new(50.0, 15.0));
        assert_eq!(
            screen_line_path(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 0.5),
            "M0,0 Q5,1.5 10,0"
        );
    }

    #[test]
    fn test_zero_length_segment_is_defined() {
        let p = Point::new(3.0, 4.0);
        let path = screen_line_path(p, p, 0.5);
        assert_eq!(path, "M3,4 Q3,4 3,4");
        assert!(!path.contains("NaN"));
    }

    #[test]
    fn test_annotation_hook() {
        assert_eq!(annotation_path(10.0, 20.0, 30.0, -30.0, 0.0), "M10,20 L40,-10");
        // Control point leans towards dx, away from dy
        assert_eq!(
            annotation_path(0.0, 0.0, 40.0, -20.0, 0.25),
            "M0,0 Q10,-15 40,-20"
        );
        assert_eq!(annotation_path(0.0, 0.0, 40.0, -20.0, -1.0), "M0,0 L40,-20");
    }
}
