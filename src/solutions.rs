//! Per sample solver output
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::point::Point2D;

/// Resolved emitter position for one time sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PositionEstimate {
    /// Index of the sample within the input sequence
    pub sample: usize,
    /// Estimated emitter position
    pub position: Point2D,
}

/// A sample for which at least one receiver pair produced an empty
/// intersection set: no candidate triple exists and no position can be
/// reported. Recorded against the sample, subsequent samples are
/// unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SampleFailure {
    /// Index of the sample within the input sequence
    pub sample: usize,
}

impl std::fmt::Display for SampleFailure {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "sample {}: annuli do not pairwise intersect", self.sample)
    }
}
