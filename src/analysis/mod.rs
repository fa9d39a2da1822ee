//! Analysis types and options

pub mod frame;
pub mod truss;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};
use crate::model::Structure;
use crate::results::AnalysisResults;

/// Relative pivot size below which a system is reported singular
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;
/// Relative member length below which a member is reported degenerate
pub const DEFAULT_LENGTH_TOLERANCE: f64 = 1e-12;

/// Type of structural analysis to perform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    /// Euler-Bernoulli frame, 3 DOF per node
    #[default]
    Frame,
    /// Pin-jointed truss solved by the method of joints
    Truss,
}

impl AnalysisType {
    /// Parse an analysis type, falling back to `Frame` for missing or
    /// unrecognized values
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            None => Self::Frame,
            Some(s) => s.parse().unwrap_or_else(|_| {
                log::warn!("Unrecognized analysis type '{}', falling back to frame", s);
                Self::Frame
            }),
        }
    }

    /// Run this analysis on a structure
    pub fn analyze(
        &self,
        structure: &Structure,
        options: &AnalysisOptions,
    ) -> SolverResult<AnalysisResults> {
        match self {
            Self::Frame => frame::analyze(structure, options),
            Self::Truss => truss::analyze(structure, options),
        }
    }
}

impl FromStr for AnalysisType {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frame" => Ok(Self::Frame),
            "truss" => Ok(Self::Truss),
            _ => Err(SolverError::UnknownAnalysisType(s.to_string())),
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frame => write!(f, "frame"),
            Self::Truss => write!(f, "truss"),
        }
    }
}

/// Options for structural analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Smallest LU pivot, relative to the largest, accepted as non-singular
    pub pivot_tolerance: f64,
    /// Smallest member length, relative to the coordinate magnitude
    pub length_tolerance: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            length_tolerance: DEFAULT_LENGTH_TOLERANCE,
        }
    }
}

impl AnalysisOptions {
    /// Set the singularity tolerance
    pub fn with_pivot_tolerance(mut self, tol: f64) -> Self {
        self.pivot_tolerance = tol;
        self
    }

    /// Set the zero-length tolerance
    pub fn with_length_tolerance(mut self, tol: f64) -> Self {
        self.length_tolerance = tol;
        self
    }
}
