//! Frame Solver - a native Rust 2D structural analysis library
//!
//! This library analyses planar frameworks such as vehicle chassis,
//! supporting:
//! - Frame analysis with Euler-Bernoulli beam elements (3 DOF per node)
//! - Truss analysis of pin-jointed members by the method of joints
//! - Linear elasticity, small displacements, concentrated nodal loads
//!
//! Every analysis is a pure function of its input structure.
//!
//! ## Example
//! ```rust
//! use frame_solver::prelude::*;
//!
//! let mut structure = Structure::new();
//!
//! // Add nodes
//! structure
//!     .add_node(Node::new("N1", 0.0, 0.0).with_constraints(NodeConstraint::fixed()))
//!     .unwrap();
//! structure.add_node(Node::new("N2", 1.0, 0.0)).unwrap();
//!
//! // Add a member (E, I, A)
//! structure
//!     .add_member(Member::new("B1", "N1", "N2", 210e9, 1e-6, 1e-3))
//!     .unwrap();
//!
//! // Add loads
//! structure.add_load(NodeLoad::fy("N2", -1000.0));
//!
//! // Analyze
//! let results = analyze(&structure, AnalysisType::Frame).unwrap();
//!
//! // Get results
//! let tip = results.displacement("N2").unwrap();
//! assert!(tip.uy < 0.0);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;
pub mod topology;

use analysis::{AnalysisOptions, AnalysisType};
use error::SolverResult;
use model::{AnalysisRequest, Structure};
use results::AnalysisResults;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{AnalysisOptions, AnalysisType};
    pub use crate::elements::{Material, Member, Node, NodeConstraint, Section};
    pub use crate::error::{SolverError, SolverResult};
    pub use crate::loads::NodeLoad;
    pub use crate::model::{AnalysisRequest, Structure};
    pub use crate::results::{
        AnalysisResults, AnalysisSummary, MemberForces, NodeDisplacement, NodeReaction,
    };
    pub use crate::{analyze, analyze_json, analyze_with_options};
}

/// Analyze a structure with default options
pub fn analyze(structure: &Structure, analysis_type: AnalysisType) -> SolverResult<AnalysisResults> {
    analysis_type.analyze(structure, &AnalysisOptions::default())
}

/// Analyze a structure with explicit options
pub fn analyze_with_options(
    structure: &Structure,
    analysis_type: AnalysisType,
    options: &AnalysisOptions,
) -> SolverResult<AnalysisResults> {
    analysis_type.analyze(structure, options)
}

/// Analyze a JSON request `{nodes, members|beams, loads?, analysis_type?}`
/// and return the results as JSON
pub fn analyze_json(input: &str) -> SolverResult<String> {
    let request: AnalysisRequest = serde_json::from_str(input)?;
    let results = request.run(&AnalysisOptions::default())?;
    Ok(serde_json::to_string(&results)?)
}

#[cfg(feature = "wasm")]
pub mod wasm;
