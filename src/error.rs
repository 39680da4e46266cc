//! Error types for polycube queries and projections.

use std::fmt;

/// Errors arising from operations that require a particular shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolycubeError {
    /// The operation needs a single-layer polycube.
    NotPlanar,
    /// The operation needs a connected polycube.
    Disconnected,
    /// The query has no implementation yet.
    Unsupported(&'static str),
}

impl fmt::Display for PolycubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPlanar => write!(f, "polycube spans more than one layer"),
            Self::Disconnected => write!(f, "polycube is not connected"),
            Self::Unsupported(what) => write!(f, "{what} is not supported yet"),
        }
    }
}

impl std::error::Error for PolycubeError {}
