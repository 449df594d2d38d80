use crate::{
    algorithms::{ClosedDouglasPeucker, arc_length},
    traits::{PolygonApproximator, ShapeClassifier},
    types::{Contour, Polygon},
};

/// Accepts contours whose approximation has exactly `target_vertices`
/// vertices. The approximation tolerance is `epsilon_fraction` of the
/// contour's closed perimeter, so the decision does not depend on scale.
#[derive(Debug, Clone)]
pub struct VertexCountClassifier<A: PolygonApproximator = ClosedDouglasPeucker> {
    pub approximator: A,
    pub epsilon_fraction: f64,
    pub target_vertices: usize,
}

impl Default for VertexCountClassifier {
    fn default() -> Self {
        Self::triangles(0.04)
    }
}

impl VertexCountClassifier {
    pub fn triangles(epsilon_fraction: f64) -> Self {
        Self {
            approximator: ClosedDouglasPeucker,
            epsilon_fraction,
            target_vertices: 3,
        }
    }
}

impl<A: PolygonApproximator> VertexCountClassifier<A> {
    pub fn new(approximator: A, epsilon_fraction: f64, target_vertices: usize) -> Self {
        Self {
            approximator,
            epsilon_fraction,
            target_vertices,
        }
    }

    /// Approximate without filtering
    pub fn approximate(&self, contour: &Contour) -> Polygon {
        let epsilon = self.epsilon_fraction * arc_length(&contour.points, true);
        Polygon::new(self.approximator.approximate(&contour.points, epsilon))
    }
}

impl<A: PolygonApproximator> ShapeClassifier for VertexCountClassifier<A> {
    fn classify(&self, contour: &Contour) -> Option<Polygon> {
        let polygon = self.approximate(contour);
        tracing::trace!(
            points = contour.len(),
            vertices = polygon.vertex_count(),
            "approximated contour"
        );

        (polygon.vertex_count() == self.target_vertices).then_some(polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BorderType;
    use imageproc::point::Point;

    fn ring(corners: &[Point<i32>], scale: i32) -> Contour {
        let mut points = Vec::new();
        for (i, &a) in corners.iter().enumerate() {
            let b = corners[(i + 1) % corners.len()];
            let (a, b) = (Point::new(a.x * scale, a.y * scale), Point::new(b.x * scale, b.y * scale));
            let steps = (b.x - a.x).abs().max((b.y - a.y).abs());
            for s in 0..steps {
                let t = s as f64 / steps as f64;
                points.push(Point::new(
                    (a.x as f64 + t * (b.x - a.x) as f64).round() as i32,
                    (a.y as f64 + t * (b.y - a.y) as f64).round() as i32,
                ));
            }
        }
        Contour::new(points, BorderType::Outer, None)
    }

    fn equilateral() -> [Point<i32>; 3] {
        // side 60, height ~52
        [Point::new(20, 72), Point::new(50, 20), Point::new(80, 72)]
    }

    #[test]
    fn test_accepts_triangle() {
        let polygon = VertexCountClassifier::triangles(0.04)
            .classify(&ring(&equilateral(), 1))
            .expect("Triangle should be accepted");
        assert_eq!(polygon.vertex_count(), 3);
    }

    #[test]
    fn test_rejects_square() {
        let square = [Point::new(10, 10), Point::new(60, 10), Point::new(60, 60), Point::new(10, 60)];
        assert!(VertexCountClassifier::triangles(0.04).classify(&ring(&square, 1)).is_none());
    }

    #[test]
    fn test_classification_is_idempotent() {
        let classifier = VertexCountClassifier::triangles(0.04);
        let contour = ring(&equilateral(), 1);
        assert_eq!(classifier.classify(&contour), classifier.classify(&contour));
    }

    #[test]
    fn test_scale_invariance() {
        let classifier = VertexCountClassifier::triangles(0.04);
        for scale in [1, 2, 4] {
            let polygon = classifier
                .classify(&ring(&equilateral(), scale))
                .expect("Scaled triangle should be accepted");
            assert_eq!(polygon.vertex_count(), 3);
        }
    }

    #[test]
    fn test_degenerate_contours_fail_vertex_count() {
        let classifier = VertexCountClassifier::triangles(0.04);
        let empty = Contour::new(vec![], BorderType::Outer, None);
        let pair = Contour::new(vec![Point::new(0, 0), Point::new(5, 5)], BorderType::Hole, Some(0));
        assert!(classifier.classify(&empty).is_none());
        assert!(classifier.classify(&pair).is_none());
    }

    #[test]
    fn test_approximation_never_exceeds_contour() {
        let classifier = VertexCountClassifier::triangles(0.04);
        let contour = ring(&equilateral(), 3);
        assert!(classifier.approximate(&contour).vertex_count() <= contour.len());
    }

    #[test]
    fn test_custom_target_accepts_quadrilaterals() {
        let square = [Point::new(10, 10), Point::new(60, 10), Point::new(60, 60), Point::new(10, 60)];
        let classifier = VertexCountClassifier::new(ClosedDouglasPeucker, 0.04, 4);
        assert!(classifier.classify(&ring(&square, 1)).is_some());
    }
}
