//! TDOA multilateration solver
use log::{debug, warn};

use crate::{
    annulus::Annulus,
    candidate::{enumerate, select_best},
    cfg::{Config, Vertex},
    error::Error,
    point::Point2D,
    scenario::TimeSample,
    solutions::{PositionEstimate, SampleFailure},
};

/// [Solver] resolves 2D emitter positions from arrival time samples
/// collected by three fixed receivers.
pub struct Solver {
    /// Solver parametrization
    pub cfg: Config,
    /// The three fixed receiver positions
    receivers: [Point2D; 3],
}

impl Solver {
    /// Builds a new [Solver] for this receiver geometry.
    /// ## Input
    /// - cfg: [Config]uration, validated here once. Estimation never
    ///   starts on a non positive speed or an out of range tolerance.
    /// - receivers: the three fixed receiver positions. Order defines
    ///   the receiver indices every [TimeSample] refers to.
    pub fn new(cfg: Config, receivers: [Point2D; 3]) -> Result<Self, Error> {
        cfg.validate()?;
        Ok(Self { cfg, receivers })
    }

    /// Resolves one position per [TimeSample], in input order: the output
    /// holds exactly one entry per sample, preserving positional
    /// correspondence. Samples are independent, a [SampleFailure] on one
    /// never affects the others.
    pub fn resolve(
        &self,
        samples: &[TimeSample],
    ) -> Vec<Result<PositionEstimate, SampleFailure>> {
        samples
            .iter()
            .enumerate()
            .map(|(index, sample)| self.resolve_sample(index, sample))
            .collect()
    }

    fn resolve_sample(
        &self,
        index: usize,
        sample: &TimeSample,
    ) -> Result<PositionEstimate, SampleFailure> {
        let times = sample.as_array();

        let annulus = |rx: usize| {
            Annulus::new(
                self.receivers[rx],
                self.cfg.speed,
                self.cfg.tolerance,
                times[rx],
            )
        };

        let (first, second, third) = (annulus(0), annulus(1), annulus(2));

        let set_ab = first.intersect(&second);
        let set_ac = first.intersect(&third);
        let set_bc = second.intersect(&third);

        let triples = enumerate(&set_ab, &set_ac, &set_bc);

        match select_best(&triples) {
            Some(best) => {
                debug!(
                    "sample {}: {} candidates, best perimeter {:.6e}",
                    index,
                    triples.len(),
                    best.perimeter
                );

                let position = match self.cfg.vertex {
                    Vertex::Lead => best.first,
                    Vertex::Centroid => best.centroid(),
                };

                Ok(PositionEstimate {
                    sample: index,
                    position,
                })
            },
            None => {
                let failure = SampleFailure { sample: index };
                warn!("{}", failure);
                Err(failure)
            },
        }
    }
}
