#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nalgebra::Vector2;

/// 2D position, in distance units.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Point2D {
    fn from(p: (f64, f64)) -> Self {
        Self { x: p.0, y: p.1 }
    }
}

impl From<Vector2<f64>> for Point2D {
    fn from(vec: Vector2<f64>) -> Self {
        Self {
            x: vec[0],
            y: vec[1],
        }
    }
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to rhs.
    pub fn distance(&self, rhs: &Self) -> f64 {
        (self.to_vec2() - rhs.to_vec2()).norm()
    }

    pub(crate) fn to_vec2(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

#[cfg(test)]
mod test {
    use super::Point2D;

    #[test]
    fn test_distance() {
        let origin = Point2D::default();
        assert_eq!(origin.distance(&Point2D::new(3.0, 4.0)), 5.0);
        assert_eq!(origin.distance(&origin), 0.0);

        let p = Point2D::new(-1.0, 2.0);
        assert_eq!(p.distance(&origin), origin.distance(&p));
    }
}
