//! Scenario parsing and solution serialization
use std::io::Write;

use log::warn;

use crate::{
    error::Error,
    point::Point2D,
    solutions::{PositionEstimate, SampleFailure},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arrival time readings of the three receivers, for one sampling
/// instant, in receiver order.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeSample {
    /// Arrival time at the first receiver (s)
    pub first: f64,
    /// Arrival time at the second receiver (s)
    pub second: f64,
    /// Arrival time at the third receiver (s)
    pub third: f64,
}

impl From<(f64, f64, f64)> for TimeSample {
    fn from(t: (f64, f64, f64)) -> Self {
        Self {
            first: t.0,
            second: t.1,
            third: t.2,
        }
    }
}

impl TimeSample {
    pub fn new(first: f64, second: f64, third: f64) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// Readings in receiver order.
    pub(crate) fn as_array(&self) -> [f64; 3] {
        [self.first, self.second, self.third]
    }
}

/// Receiver geometry and the complete timing sequence of one run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scenario {
    /// The three fixed receiver positions. Order defines the receiver
    /// indices every [TimeSample] refers to.
    pub receivers: [Point2D; 3],
    /// Arrival time triples, one per sampling instant.
    pub samples: Vec<TimeSample>,
}

impl std::str::FromStr for Scenario {
    type Err = Error;

    /// Parses the legacy text format:
    /// - first non empty line: comma separated receiver coordinates,
    ///   flat list `x0,y0,x1,y1,x2,y2`,
    /// - each following non empty line: one sample, `t0,t1,t2` arrival
    ///   times in receiver order.
    ///
    /// Malformed numbers abort the parse with a dedicated [Error]:
    /// a reading silently turned into zero would corrupt every annulus
    /// built from it.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());

        let header = lines.next().ok_or(Error::EmptyScenario)?;

        let coordinates = header
            .split(',')
            .map(|field| {
                let field = field.trim();
                field
                    .parse::<f64>()
                    .map_err(|_| Error::InvalidCoordinate(field.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if coordinates.len() != 6 {
            return Err(Error::ReceiverCount(coordinates.len()));
        }

        let receivers = [
            Point2D::new(coordinates[0], coordinates[1]),
            Point2D::new(coordinates[2], coordinates[3]),
            Point2D::new(coordinates[4], coordinates[5]),
        ];

        let mut samples = Vec::new();

        for (index, line) in lines.enumerate() {
            let times = line
                .split(',')
                .map(|field| {
                    let field = field.trim();
                    field
                        .parse::<f64>()
                        .map_err(|_| Error::InvalidTime(index, field.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;

            if times.len() != 3 {
                return Err(Error::TimeCount(index, times.len()));
            }

            if let Some(time) = times.iter().find(|t| **t < 0.0) {
                return Err(Error::NegativeTime(index, *time));
            }

            samples.push(TimeSample::new(times[0], times[1], times[2]));
        }

        Ok(Self { receivers, samples })
    }
}

/// Serializes resolved positions, one `x,y` line per sample, in input
/// order. Failed samples produce no line and are reported through the
/// log facade, so the trajectory file only ever holds positions.
pub fn write_solutions<W: Write>(
    writer: &mut W,
    solutions: &[Result<PositionEstimate, SampleFailure>],
) -> std::io::Result<()> {
    for solution in solutions {
        match solution {
            Ok(estimate) => {
                writeln!(writer, "{},{}", estimate.position.x, estimate.position.y)?;
            },
            Err(failure) => {
                warn!("{}: dropped from output", failure);
            },
        }
    }
    Ok(())
}
