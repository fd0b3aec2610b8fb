use thiserror::Error;

/// Configuration and scenario level errors: fatal to the whole run.
/// Per sample estimation failures are values in the output sequence
/// ([SampleFailure](crate::prelude::SampleFailure)), never errors.
#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// No distance can be derived from a non positive propagation speed.
    #[error("non positive propagation speed: {0}")]
    NonPositiveSpeed(f64),

    /// The fractional radius error band must lie within [0, 1].
    #[error("tolerance outside [0, 1]: {0}")]
    InvalidTolerance(f64),

    /// Failed to parse a [Vertex](crate::prelude::Vertex) selection strategy.
    #[error("non supported/invalid vertex strategy")]
    InvalidVertexStrategy,

    /// Scenario content with no receiver line: nothing to solve.
    #[error("empty scenario (missing receiver line)")]
    EmptyScenario,

    /// The receiver line must define exactly three receivers
    /// (six coordinates).
    #[error("expected 6 receiver coordinates, found {0}")]
    ReceiverCount(usize),

    /// Malformed receiver coordinate. Parsing aborts here rather than
    /// substituting zero, which would silently corrupt every annulus.
    #[error("invalid receiver coordinate \"{0}\"")]
    InvalidCoordinate(String),

    /// Each sample line must carry exactly three arrival times.
    #[error("sample {0}: expected 3 arrival times, found {1}")]
    TimeCount(usize, usize),

    /// Malformed arrival time reading (same policy as
    /// [Error::InvalidCoordinate]).
    #[error("sample {0}: invalid arrival time \"{1}\"")]
    InvalidTime(usize, String),

    /// Arrival times are elapsed propagation times and cannot be negative.
    #[error("sample {0}: negative arrival time {1}")]
    NegativeTime(usize, f64),
}
