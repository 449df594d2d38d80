use geo_types::{Coord, LineString};
use imageproc::point::Point;
use crate::traits::PolygonApproximator;

/// Length of the polyline through `points`. A closed curve also counts the
/// segment from the last point back to the first.
pub fn arc_length(points: &[Point<i32>], closed: bool) -> f64 {
    let open: f64 = points
        .windows(2)
        .map(|w| distance(w[0], w[1]))
        .sum();

    match (closed, points.first(), points.last()) {
        (true, Some(&first), Some(&last)) if points.len() > 1 => open + distance(last, first),
        _ => open,
    }
}

fn distance(a: Point<i32>, b: Point<i32>) -> f64 {
    let dx = (b.x - a.x) as f64;
    let dy = (b.y - a.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

fn farthest_from(points: &[Point<i32>], origin: Point<i32>) -> usize {
    points
        .iter()
        .enumerate()
        .fold((0, -1.0), |(best, best_dist), (i, &p)| {
            let d = distance(origin, p);
            if d > best_dist { (i, d) } else { (best, best_dist) }
        })
        .0
}

fn simplify_chain(chain: &[Point<i32>], epsilon: f64) -> Vec<Point<i32>> {
    use geo::Simplify;

    let coords: Vec<Coord<f64>> = chain
        .iter()
        .map(|p| Coord { x: p.x as f64, y: p.y as f64 })
        .collect();
    let simplified = LineString::new(coords).simplify(&epsilon);

    // Every coordinate is one of the integer inputs, so the round-trip is exact
    simplified
        .coords()
        .map(|c| Point::new(c.x as i32, c.y as i32))
        .collect()
}

/// Closed-curve Ramer-Douglas-Peucker using geo's implementation.
///
/// A closed ring has no natural end points, so it is split at two extreme
/// points (the point farthest from the first one, then the point farthest
/// from that) and each half is simplified as an open chain. The extremes are
/// always kept, which makes the result independent of where tracing started
/// on the ring for convex shapes.
#[derive(Debug, Clone, Default)]
pub struct ClosedDouglasPeucker;

impl PolygonApproximator for ClosedDouglasPeucker {
    fn approximate(&self, points: &[Point<i32>], epsilon: f64) -> Vec<Point<i32>> {
        if points.len() < 3 {
            return points.to_vec();
        }

        let a = farthest_from(points, points[0]);
        let b = farthest_from(points, points[a]);
        if a == b {
            // Every point coincides
            return vec![points[a]];
        }

        let (start, end) = (a.min(b), a.max(b));

        let forward = &points[start..=end];
        let backward: Vec<Point<i32>> = points[end..]
            .iter()
            .chain(&points[..=start])
            .copied()
            .collect();

        let mut polygon = simplify_chain(forward, epsilon);
        let back = simplify_chain(&backward, epsilon);

        // Both halves share their end points; keep them once
        if back.len() > 2 {
            polygon.extend_from_slice(&back[1..back.len() - 1]);
        }

        polygon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dense closed boundary through the given corners, one point per unit step
    fn dense_ring(corners: &[Point<i32>]) -> Vec<Point<i32>> {
        let mut ring = Vec::new();
        for (i, &a) in corners.iter().enumerate() {
            let b = corners[(i + 1) % corners.len()];
            let steps = (b.x - a.x).abs().max((b.y - a.y).abs());
            for s in 0..steps {
                let t = s as f64 / steps as f64;
                ring.push(Point::new(
                    (a.x as f64 + t * (b.x - a.x) as f64).round() as i32,
                    (a.y as f64 + t * (b.y - a.y) as f64).round() as i32,
                ));
            }
        }
        ring
    }

    #[test]
    fn test_arc_length_open_and_closed() {
        let pts = vec![Point::new(0, 0), Point::new(3, 0), Point::new(3, 4)];
        assert!((arc_length(&pts, false) - 7.0).abs() < 1e-9);
        assert!((arc_length(&pts, true) - 12.0).abs() < 1e-9);
        assert_eq!(arc_length(&pts[..1], true), 0.0);
        assert_eq!(arc_length(&[], true), 0.0);
    }

    #[test]
    fn test_triangle_ring_reduces_to_corners() {
        let corners = [Point::new(10, 80), Point::new(50, 10), Point::new(90, 80)];
        let ring = dense_ring(&corners);
        let epsilon = 0.04 * arc_length(&ring, true);

        let mut approx = ClosedDouglasPeucker.approximate(&ring, epsilon);
        approx.sort_by_key(|p| (p.x, p.y));
        assert_eq!(approx, vec![corners[0], corners[1], corners[2]]);
    }

    #[test]
    fn test_square_ring_keeps_four_corners() {
        let ring = dense_ring(&[
            Point::new(0, 0),
            Point::new(40, 0),
            Point::new(40, 40),
            Point::new(0, 40),
        ]);
        let epsilon = 0.04 * arc_length(&ring, true);
        assert_eq!(ClosedDouglasPeucker.approximate(&ring, epsilon).len(), 4);
    }

    #[test]
    fn test_start_point_does_not_matter() {
        let ring = dense_ring(&[Point::new(10, 80), Point::new(50, 10), Point::new(90, 80)]);
        let epsilon = 0.04 * arc_length(&ring, true);

        for shift in [0, 7, 31, ring.len() / 2] {
            let mut rotated = ring.clone();
            rotated.rotate_left(shift);
            assert_eq!(ClosedDouglasPeucker.approximate(&rotated, epsilon).len(), 3);
        }
    }

    #[test]
    fn test_never_grows() {
        let pts = vec![Point::new(0, 0), Point::new(5, 1), Point::new(2, 6), Point::new(1, 3)];
        for epsilon in [0.0, 0.5, 2.0, 100.0] {
            assert!(ClosedDouglasPeucker.approximate(&pts, epsilon).len() <= pts.len());
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        let single = vec![Point::new(4, 4)];
        assert_eq!(ClosedDouglasPeucker.approximate(&single, 1.0), single);

        let same = vec![Point::new(2, 2); 5];
        assert_eq!(ClosedDouglasPeucker.approximate(&same, 1.0), vec![Point::new(2, 2)]);
    }
}
