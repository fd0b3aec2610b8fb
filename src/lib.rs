#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod annulus;
mod candidate;
mod cfg;
mod constants;
mod error;
mod intersection;
mod point;
mod scenario;
mod solutions;
mod solver;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::annulus::Annulus;
    pub use crate::candidate::CandidateTriple;
    pub use crate::cfg::{Config, Vertex};
    pub use crate::error::Error;
    pub use crate::point::Point2D;
    pub use crate::scenario::{write_solutions, Scenario, TimeSample};
    pub use crate::solutions::{PositionEstimate, SampleFailure};
    pub use crate::solver::Solver;
    // re-export
    pub use nalgebra::Vector2;
}

// pub export
pub use error::Error;
