//! 2D segment intersection.
//!
//! The solver works on the parametric form P = P0 + t*(P1-P0), t in
//! [0,1] on the segment. Unlike an Option-returning query, it always
//! produces a point: callers that draw guide lines or extend segments
//! need the infinite-line crossing even when the segments themselves
//! miss each other.

use super::{midpoint, Point2};

/// Intersection of segments (p1,p2) and (p3,p4).
///
/// Returns the crossing point and whether the two *segments* (not just
/// their infinite lines) actually meet. The point is always populated:
///
/// - segments share the endpoint p2 == p3: that point, reported as a hit;
/// - non-parallel lines: the infinite-line crossing, a hit only when the
///   parametric position lies in [0,1] on both segments;
/// - parallel with one segment exactly horizontal or vertical and the
///   other not: solved along the non-degenerate axis, a hit only when
///   the position along the other segment lies in [0,1];
/// - otherwise (general parallel, collinear, or a zero-length input):
///   the midpoint of p2 and p3, never a hit.
///
/// Parallelism is an exact `divisor == 0` test, consistent with the
/// segment type's exact vertical/horizontal contract.
pub fn segment_intersection(
    p1: Point2,
    p2: Point2,
    p3: Point2,
    p4: Point2,
) -> (Point2, bool) {
    if p2 == p3 {
        return (p2, true);
    }

    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let divisor = d1.x * d2.y - d2.x * d1.y;

    if divisor == 0.0 {
        let d1_is_zero = d1.x == 0.0 && d1.y == 0.0;
        let d2_is_zero = d2.x == 0.0 && d2.y == 0.0;

        if !(d1_is_zero || d2_is_zero) {
            if d1.y == 0.0 && d2.y != 0.0 {
                let along = (p1.y - p3.y) / d2.y;
                return (
                    Point2::new(p3.x + along * d2.x, p1.y),
                    (0.0..=1.0).contains(&along),
                );
            } else if d2.y == 0.0 && d1.y != 0.0 {
                let along = (p3.y - p1.y) / d1.y;
                return (
                    Point2::new(p1.x + along * d1.x, p3.y),
                    (0.0..=1.0).contains(&along),
                );
            } else if d1.x == 0.0 && d2.x != 0.0 {
                let along = (p1.x - p3.x) / d2.x;
                return (
                    Point2::new(p1.x, p3.y + along * d2.y),
                    (0.0..=1.0).contains(&along),
                );
            } else if d2.x == 0.0 && d1.x != 0.0 {
                let along = (p3.x - p1.x) / d1.x;
                return (
                    Point2::new(p3.x, p1.y + along * d1.y),
                    (0.0..=1.0).contains(&along),
                );
            }
        }

        return (midpoint(&p2, &p3), false);
    }

    let along1 = ((p1.y - p3.y) * d2.x - (p1.x - p3.x) * d2.y) / divisor;
    let point = p1 + d1 * along1;

    if !(0.0..=1.0).contains(&along1) {
        return (point, false);
    }

    let along2 = ((p1.y - p3.y) * d1.x - (p1.x - p3.x) * d1.y) / divisor;
    (point, (0.0..=1.0).contains(&along2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{ApproxEq, Segment};

    #[test]
    fn test_crossing_segments() {
        let horizontal = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        let vertical = Segment::from_coords(5.0, -5.0, 5.0, 5.0);

        let (point, hit) = horizontal.intersection(&vertical);
        assert!(hit);
        assert!(point.approx_eq(&Point2::new(5.0, 0.0)));
    }

    #[test]
    fn test_lines_cross_outside_segments() {
        let horizontal = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        let vertical = Segment::from_coords(20.0, -5.0, 20.0, 5.0);

        // The infinite lines meet at (20, 0), beyond the first segment.
        let (point, hit) = horizontal.intersection(&vertical);
        assert!(!hit);
        assert!(point.approx_eq(&Point2::new(20.0, 0.0)));
    }

    #[test]
    fn test_parallel_fallback_point() {
        let a = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        let b = Segment::from_coords(0.0, 5.0, 10.0, 5.0);

        // No crossing exists; the fallback is the a.end / b.start midpoint.
        let (point, hit) = a.intersection(&b);
        assert!(!hit);
        assert!(point.approx_eq(&Point2::new(5.0, 2.5)));
    }

    #[test]
    fn test_collinear_overlap_reports_miss() {
        // Collinear overlapping segments have no single crossing point;
        // the solver reports a miss with the deterministic fallback.
        let a = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        let b = Segment::from_coords(5.0, 0.0, 15.0, 0.0);

        let (point, hit) = a.intersection(&b);
        assert!(!hit);
        assert!(point.approx_eq(&Point2::new(7.5, 0.0)));
    }

    #[test]
    fn test_shared_endpoint() {
        let a = Segment::from_coords(0.0, 0.0, 5.0, 5.0);
        let b = Segment::from_coords(5.0, 5.0, 9.0, 0.0);

        let (point, hit) = a.intersection(&b);
        assert!(hit);
        assert_eq!(point, Point2::new(5.0, 5.0));
    }

    #[test]
    fn test_diagonal_cross() {
        let a = Segment::from_coords(0.0, 0.0, 10.0, 10.0);
        let b = Segment::from_coords(0.0, 10.0, 10.0, 0.0);

        let (point, hit) = a.intersection(&b);
        assert!(hit);
        assert!(point.approx_eq(&Point2::new(5.0, 5.0)));
    }

    #[test]
    fn test_hit_symmetry() {
        // The boolean outcome never depends on argument order.
        let cases = [
            (
                Segment::from_coords(0.0, 0.0, 10.0, 0.0),
                Segment::from_coords(5.0, -5.0, 5.0, 5.0),
            ),
            (
                Segment::from_coords(0.0, 0.0, 10.0, 0.0),
                Segment::from_coords(20.0, -5.0, 20.0, 5.0),
            ),
            (
                Segment::from_coords(0.0, 0.0, 10.0, 0.0),
                Segment::from_coords(0.0, 5.0, 10.0, 5.0),
            ),
            (
                Segment::from_coords(0.0, 0.0, 10.0, 10.0),
                Segment::from_coords(0.0, 10.0, 10.0, 0.0),
            ),
        ];

        for (a, b) in cases {
            assert_eq!(a.intersects(&b), b.intersects(&a));
        }
    }

    #[test]
    fn test_degenerate_input() {
        let dot = Segment::from_coords(3.0, 3.0, 3.0, 3.0);
        let seg = Segment::from_coords(0.0, 0.0, 10.0, 0.0);

        // Zero direction vector: fallback midpoint, no hit.
        let (point, hit) = dot.intersection(&seg);
        assert!(!hit);
        assert!(point.approx_eq(&midpoint(&dot.end, &seg.start)));
    }

    #[test]
    fn test_point_always_populated() {
        // Even a miss yields the infinite-line crossing.
        let a = Segment::from_coords(0.0, 0.0, 1.0, 0.0);
        let b = Segment::from_coords(100.0, -1.0, 100.0, 1.0);
        let point = a.intersection_point(&b);
        assert!(point.approx_eq(&Point2::new(100.0, 0.0)));
    }
}
