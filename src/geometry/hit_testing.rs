use super::Point2D;
use crate::shape::Geometry;

/// Thin shapes are still grabbable within this distance.
pub const MIN_HIT_DISTANCE: f64 = 3.0;

/// Distance from a point to a line segment
pub fn distance_to_segment(point: Point2D, start: Point2D, end: Point2D) -> f64 {
    let segment = end - start;
    let length_sq = segment.x * segment.x + segment.y * segment.y;
    if length_sq == 0.0 {
        return point.distance(start);
    }

    let to_point = point - start;
    let t = ((to_point.x * segment.x + to_point.y * segment.y) / length_sq).clamp(0.0, 1.0);
    let projection = Point2D::new(start.x + segment.x * t, start.y + segment.y * t);
    point.distance(projection)
}

/// Tests a point given in the geometry's own coordinates (layout already removed).
pub fn geometry_contains(geometry: &Geometry, outline_width: f64, point: Point2D) -> bool {
    let tolerance = (outline_width / 2.0).max(MIN_HIT_DISTANCE);

    match geometry {
        Geometry::Path { points } => match points.as_slice() {
            [] => false,
            [only] => point.distance(*only) <= tolerance,
            _ => points
                .windows(2)
                .any(|w| distance_to_segment(point, w[0], w[1]) <= tolerance),
        },
        Geometry::Line { start, end } => distance_to_segment(point, *start, *end) <= tolerance,
        Geometry::Rect(bounds) => bounds.expand(outline_width / 2.0).contains(point),
        Geometry::Circle { center, radius } => point.distance(*center) <= radius + outline_width / 2.0,
        Geometry::Ellipse {
            center,
            radius_x,
            radius_y,
        } => {
            let rx = radius_x + outline_width / 2.0;
            let ry = radius_y + outline_width / 2.0;
            if rx <= 0.0 || ry <= 0.0 {
                return point.distance(*center) <= tolerance;
            }
            let dx = (point.x - center.x) / rx;
            let dy = (point.y - center.y) / ry;
            dx * dx + dy * dy <= 1.0
        }
    }
}
