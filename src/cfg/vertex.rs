use crate::prelude::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which vertex of the minimum perimeter triangle is reported as the
/// position estimate.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Vertex {
    /// The vertex contributed by the first↔second receiver pair.
    /// Historical selection, kept as the default.
    #[default]
    Lead,

    /// Average of the three vertices of the winning triangle.
    /// All three pairwise solutions contribute to the fix.
    Centroid,
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Lead => write!(fmt, "lead"),
            Self::Centroid => write!(fmt, "centroid"),
        }
    }
}

impl std::str::FromStr for Vertex {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lead" => Ok(Self::Lead),
            "centroid" => Ok(Self::Centroid),
            _ => Err(Error::InvalidVertexStrategy),
        }
    }
}
