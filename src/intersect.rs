use crate::geometry::{Circle, LineSegment, Point, Rect};

/// Determinants or discriminants below this are treated as zero
pub const EPSILON: f32 = 1e-6;

/// Intersection point of two segments, if they cross
///
/// Parallel, collinear and degenerate segments never intersect.
pub fn line_to_line(a: &LineSegment, b: &LineSegment) -> Option<Point> {
    let denom = (b.y2 - b.y1) * (a.x2 - a.x1) - (b.x2 - b.x1) * (a.y2 - a.y1);
    if denom.abs() < EPSILON {
        return None;
    }

    let num_a = (b.x2 - b.x1) * (a.y1 - b.y1) - (b.y2 - b.y1) * (a.x1 - b.x1);
    let num_b = (a.x2 - a.x1) * (a.y1 - b.y1) - (a.y2 - a.y1) * (a.x1 - b.x1);

    let u_a = num_a / denom;
    let u_b = num_b / denom;

    if (0.0..=1.0).contains(&u_a) && (0.0..=1.0).contains(&u_b) {
        Some(Point::new(
            a.x1 + u_a * (a.x2 - a.x1),
            a.y1 + u_a * (a.y2 - a.y1),
        ))
    } else {
        None
    }
}

/// Every point where `line` crosses an edge of `rect`
///
/// Edges are tested top, right, bottom, left. A line through a corner reports
/// that corner once per edge it touches.
pub fn line_to_rect(line: &LineSegment, rect: &Rect) -> Vec<Point> {
    rect.edges()
        .iter()
        .filter_map(|edge| line_to_line(line, edge))
        .collect()
}

/// Points where `line` meets the outline of `circle`
///
/// Returns 0, 1 (tangent) or 2 points, nearer-first along the segment.
pub fn line_to_circle(line: &LineSegment, circle: &Circle) -> Vec<Point> {
    let dir_x = line.x2 - line.x1;
    let dir_y = line.y2 - line.y1;
    let off_x = line.x1 - circle.x;
    let off_y = line.y1 - circle.y;

    let a = dir_x * dir_x + dir_y * dir_y;
    if a < EPSILON {
        return Vec::new();
    }
    let b = 2.0 * (dir_x * off_x + dir_y * off_y);
    let c = off_x * off_x + off_y * off_y - circle.radius * circle.radius;

    let disc = b * b - 4.0 * a * c;
    let point_at = |t: f32| Point::new(line.x1 + t * dir_x, line.y1 + t * dir_y);
    let in_range = |t: &f32| (0.0..=1.0).contains(t);

    if disc.abs() < EPSILON {
        let t = -b / (2.0 * a);
        return if in_range(&t) { vec![point_at(t)] } else { Vec::new() };
    }
    if disc < 0.0 {
        return Vec::new();
    }

    let root = disc.sqrt();
    [(-b - root) / (2.0 * a), (-b + root) / (2.0 * a)]
        .into_iter()
        .filter(in_range)
        .map(point_at)
        .collect()
}
