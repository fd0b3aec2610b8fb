use crate::point::Point2D;

/// Plausible emitter distance band around one receiver,
/// for one time sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Annulus {
    /// Receiver position
    pub center: Point2D,
    /// Inner radius: speed * time * (1 - tolerance)
    pub min_radius: f64,
    /// Outer radius: speed * time * (1 + tolerance)
    pub max_radius: f64,
}

impl Annulus {
    /// Builds the [Annulus] of plausible emitter distances from `center`,
    /// for a signal that propagated at `speed` during `time`, with a
    /// fractional radius uncertainty of `tolerance` (in [0, 1], verified
    /// by [Config::validate](crate::prelude::Config) upstream).
    pub fn new(center: Point2D, speed: f64, tolerance: f64, time: f64) -> Self {
        let radius = speed * time;
        Self {
            center,
            min_radius: radius * (1.0 - tolerance),
            max_radius: radius * (1.0 + tolerance),
        }
    }
}
