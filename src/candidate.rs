//! Position fix candidates
use itertools::iproduct;

use crate::point::Point2D;

/// One intersection point drawn from each pairwise intersection set,
/// evaluated as a potential position fix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CandidateTriple {
    /// Point contributed by the first↔second receiver pair
    pub first: Point2D,
    /// Point contributed by the first↔third receiver pair
    pub second: Point2D,
    /// Point contributed by the second↔third receiver pair
    pub third: Point2D,
    /// Perimeter of the triangle formed by the three points.
    /// The smaller the perimeter, the more mutually consistent
    /// the three pairwise solutions.
    pub perimeter: f64,
}

impl CandidateTriple {
    pub fn new(first: Point2D, second: Point2D, third: Point2D) -> Self {
        let perimeter =
            first.distance(&second) + first.distance(&third) + second.distance(&third);
        Self {
            first,
            second,
            third,
            perimeter,
        }
    }

    /// Average of the three vertices.
    pub fn centroid(&self) -> Point2D {
        Point2D::new(
            (self.first.x + self.second.x + self.third.x) / 3.0,
            (self.first.y + self.second.y + self.third.y) / 3.0,
        )
    }
}

/// Forms one [CandidateTriple] per element of the Cartesian product of
/// the three pairwise intersection sets. Empty if any set is empty.
/// Brute force is intentional here: each set holds at most 8 points,
/// 512 candidates worst case.
pub(crate) fn enumerate(
    set_ab: &[Point2D],
    set_ac: &[Point2D],
    set_bc: &[Point2D],
) -> Vec<CandidateTriple> {
    iproduct!(set_ab, set_ac, set_bc)
        .map(|(ab, ac, bc)| CandidateTriple::new(*ab, *ac, *bc))
        .collect()
}

/// Exhaustive minimum perimeter selection, ties broken by
/// first-encountered order. None on empty input.
pub(crate) fn select_best(triples: &[CandidateTriple]) -> Option<&CandidateTriple> {
    triples
        .iter()
        .reduce(|best, triple| {
            if triple.perimeter < best.perimeter {
                triple
            } else {
                best
            }
        })
}
