use lodestar_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Every offset within Manhattan distance `radius` of the origin, excluding
/// the origin itself, in row-major order.
pub fn manhattan_ball(radius: i32) -> Vec<Point> {
    let mut offsets = Vec::new();
    for dy in -radius..=radius {
        let span = radius - dy.abs();
        for dx in -span..=span {
            if dx != 0 || dy != 0 {
                offsets.push(Point::new(dx, dy));
            }
        }
    }
    offsets
}
