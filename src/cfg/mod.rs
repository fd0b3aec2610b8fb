#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{constants::SPEED_OF_LIGHT_M_S, error::Error};

mod vertex;
pub use vertex::Vertex;

fn default_speed() -> f64 {
    SPEED_OF_LIGHT_M_S
}

fn default_tolerance() -> f64 {
    0.05
}

/// Solver parametrization
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Propagation speed, in distance units per second.
    /// Defaults to the speed of light in m.s⁻¹.
    #[cfg_attr(feature = "serde", serde(default = "default_speed"))]
    pub speed: f64,

    /// Fractional radius error band, in [0, 1].
    /// 0 collapses each annulus to a single circle.
    #[cfg_attr(feature = "serde", serde(default = "default_tolerance"))]
    pub tolerance: f64,

    /// [Vertex] of the winning triple reported as the position estimate.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vertex: Vertex,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            tolerance: default_tolerance(),
            vertex: Default::default(),
        }
    }
}

impl Config {
    /// Verifies the scalar parameters, once, prior to any resolution
    /// attempt. An invalid parameter here would compromise every sample.
    pub fn validate(&self) -> Result<(), Error> {
        if self.speed.is_nan() || self.speed <= 0.0 {
            return Err(Error::NonPositiveSpeed(self.speed));
        }
        if !(0.0..=1.0).contains(&self.tolerance) {
            return Err(Error::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}
