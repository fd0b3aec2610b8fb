//! Annulus boundary circle intersection
use itertools::iproduct;
use nalgebra::Vector2;

use crate::{annulus::Annulus, constants::EPSILON_TANGENT, point::Point2D};

impl Annulus {
    /// Computes the plausible intersection points between the boundary
    /// circles of two annuli. Each of the four min/max radius combinations
    /// is evaluated independently and contributes 0, 1 or 2 points: up to
    /// 8 points total. Combinations whose circles never meet contribute
    /// nothing, so the result only ever holds usable points.
    /// Combination order is fixed (min/min, min/max, max/min, max/max),
    /// which keeps downstream tie-breaking deterministic.
    pub fn intersect(&self, rhs: &Self) -> Vec<Point2D> {
        iproduct!(
            [self.min_radius, self.max_radius],
            [rhs.min_radius, rhs.max_radius]
        )
        .flat_map(|(r_ref, r_other)| crossing_points(&self.center, r_ref, &rhs.center, r_other))
        .collect()
    }
}

/// Intersection of the circle (c_ref, r_ref) with the circle
/// (c_other, r_other). The first circle is the reference: its radius
/// drives the height term and the tangency test.
fn crossing_points(c_ref: &Point2D, r_ref: f64, c_other: &Point2D, r_other: f64) -> Vec<Point2D> {
    let axis = c_other.to_vec2() - c_ref.to_vec2();
    let d = axis.norm();

    // concentric circles: division by d is undefined, no usable fix
    if d == 0.0 {
        return Vec::new();
    }

    // too far apart for this radius combination
    if d > r_ref + r_other {
        return Vec::new();
    }

    // distance from c_ref to the chord, along the center line
    let offset = (r_ref.powi(2) - r_other.powi(2) + d.powi(2)) / (2.0 * d);

    // round-off near tangency may push this slightly negative
    let height = (r_ref.powi(2) - offset.powi(2)).max(0.0).sqrt();

    let mid = c_ref.to_vec2() + axis * (offset / d);
    let perp = Vector2::new(axis[1], -axis[0]) / d;

    let first = Point2D::from(mid + perp * height);

    if (d - r_ref).abs() < EPSILON_TANGENT {
        // circles contact: both solutions coincide
        return vec![first];
    }

    vec![first, Point2D::from(mid - perp * height)]
}

#[cfg(test)]
mod test {
    use super::crossing_points;
    use crate::{annulus::Annulus, point::Point2D};

    fn sorted(mut points: Vec<Point2D>) -> Vec<Point2D> {
        points.sort_by(|a, b| (a.x, a.y).partial_cmp(&(b.x, b.y)).unwrap());
        points
    }

    fn point_sets_match(lhs: &[Point2D], rhs: &[Point2D]) -> bool {
        lhs.len() == rhs.len()
            && lhs
                .iter()
                .zip(rhs.iter())
                .all(|(a, b)| a.distance(b) < 1.0E-9)
    }

    #[test]
    fn test_disjoint_circles() {
        let points = crossing_points(&Point2D::new(0.0, 0.0), 1.0, &Point2D::new(10.0, 0.0), 2.0);
        assert!(points.is_empty());
    }

    #[test]
    fn test_concentric_circles() {
        let center = Point2D::new(3.0, -4.0);
        assert!(crossing_points(&center, 1.0, &center, 2.0).is_empty());
        assert!(crossing_points(&center, 2.0, &center, 2.0).is_empty());
    }

    #[test]
    fn test_secant_circles() {
        // centers 10 apart, both radii > 5: two solutions mirrored
        // across the center line
        let points = crossing_points(&Point2D::new(0.0, 0.0), 8.0, &Point2D::new(10.0, 0.0), 8.0);
        assert_eq!(points.len(), 2);

        for point in &points {
            assert!((point.x - 5.0).abs() < 1.0E-9);
        }
        assert!((points[0].y + points[1].y).abs() < 1.0E-9);
    }

    #[test]
    fn test_tangency_collapse() {
        // |d - r_ref| = 0.005 < 0.01: single contact point
        let points = crossing_points(
            &Point2D::new(0.0, 0.0),
            5.0,
            &Point2D::new(5.005, 0.0),
            2.0,
        );
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_symmetry() {
        let a = Annulus::new(Point2D::new(0.0, 0.0), 1.0, 0.1, 7.0);
        let b = Annulus::new(Point2D::new(10.0, 0.0), 1.0, 0.1, 6.0);

        let ab = sorted(a.intersect(&b));
        let ba = sorted(b.intersect(&a));
        assert!(
            point_sets_match(&ab, &ba),
            "intersection geometry depends on argument order"
        );
    }

    #[test]
    fn test_collapsed_annuli() {
        // null tolerance: the four combinations degenerate to the same
        // circle pair, each solution reported 4 times
        let a = Annulus::new(Point2D::new(0.0, 0.0), 1.0, 0.0, 8.0);
        let b = Annulus::new(Point2D::new(10.0, 0.0), 1.0, 0.0, 8.0);

        let points = a.intersect(&b);
        assert_eq!(points.len(), 8);

        let distinct = sorted(points)
            .windows(2)
            .filter(|w| w[0].distance(&w[1]) > 1.0E-9)
            .count()
            + 1;
        assert_eq!(distinct, 2);
    }

    #[test]
    fn test_annuli_point_count_bounds() {
        let a = Annulus::new(Point2D::new(0.0, 0.0), 1.0, 0.2, 7.0);
        let b = Annulus::new(Point2D::new(10.0, 0.0), 1.0, 0.2, 7.0);
        let points = a.intersect(&b);
        assert!(!points.is_empty());
        assert!(points.len() <= 8);
    }
}
