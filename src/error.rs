//! Error types for the frame solver

use std::fmt;

use thiserror::Error;

/// What referenced a node that does not exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// A member, by id
    Member(String),
    /// A load, by its position in the load list
    Load(usize),
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Member(id) => write!(f, "member '{}'", id),
            Reference::Load(index) => write!(f, "load #{}", index),
        }
    }
}

/// Main error type for solver operations
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("{referenced_by} references unknown node '{node}'")]
    UnknownNode {
        referenced_by: Reference,
        node: String,
    },

    #[error("Duplicate {entity} id '{id}'")]
    DuplicateId { entity: &'static str, id: String },

    #[error("Member '{0}' has zero length")]
    ZeroLengthMember(String),

    #[error("Member '{member}' has invalid {property} = {value} (must be positive)")]
    InvalidSection {
        member: String,
        property: &'static str,
        value: f64,
    },

    #[error("Global stiffness matrix is singular - structure is unstable or has insufficient supports")]
    Unstable,

    #[error(
        "Truss is not statically determinate: m + r = {unknowns} ({members} members + {reactions} reactions), 2j = {equations}"
    )]
    NotDeterminate {
        members: usize,
        reactions: usize,
        unknowns: usize,
        equations: usize,
    },

    #[error("Singular equilibrium system - truss is unstable or indeterminate")]
    SingularEquilibrium,

    #[error("Unknown analysis type '{0}' (expected 'frame' or 'truss')")]
    UnknownAnalysisType(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SolverError {
    /// Stable machine-readable code for the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            SolverError::UnknownNode { .. } => "unknown_node",
            SolverError::DuplicateId { .. } => "duplicate_id",
            SolverError::ZeroLengthMember(_) => "zero_length",
            SolverError::InvalidSection { .. } => "invalid_section",
            SolverError::Unstable => "unstable",
            SolverError::NotDeterminate { .. } => "not_determinate",
            SolverError::SingularEquilibrium => "singular_equilibrium",
            SolverError::UnknownAnalysisType(_) => "invalid_analysis_type",
            SolverError::Serialization(_) => "serialization",
        }
    }
}

/// Result type for solver operations
pub type SolverResult<T> = Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinacy_message_reports_counts() {
        let err = SolverError::NotDeterminate {
            members: 2,
            reactions: 3,
            unknowns: 5,
            equations: 6,
        };
        let msg = err.to_string();
        assert!(msg.contains("m + r = 5"));
        assert!(msg.contains("2j = 6"));
        assert_eq!(err.kind(), "not_determinate");
    }

    #[test]
    fn test_unknown_node_names_offender() {
        let err = SolverError::UnknownNode {
            referenced_by: Reference::Member("B7".into()),
            node: "N99".into(),
        };
        assert_eq!(err.to_string(), "member 'B7' references unknown node 'N99'");
    }
}
