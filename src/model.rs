//! Structure - the input container handed to one analysis call

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisOptions, AnalysisType};
use crate::elements::{Member, Node};
use crate::error::{SolverError, SolverResult};
use crate::loads::NodeLoad;
use crate::results::AnalysisResults;

/// A 2D structure: nodes, members and concentrated nodal loads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    /// Nodes, in the order results are reported
    pub nodes: Vec<Node>,
    /// Members (frame or truss elements)
    #[serde(alias = "beams")]
    pub members: Vec<Member>,
    /// Nodal loads; several loads on one node accumulate
    #[serde(default)]
    pub loads: Vec<NodeLoad>,
}

impl Structure {
    /// Create a new empty structure
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the structure
    pub fn add_node(&mut self, node: Node) -> SolverResult<()> {
        if self.node(&node.id).is_some() {
            return Err(SolverError::DuplicateId {
                entity: "node",
                id: node.id,
            });
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Add a member to the structure
    pub fn add_member(&mut self, member: Member) -> SolverResult<()> {
        if self.member(&member.id).is_some() {
            return Err(SolverError::DuplicateId {
                entity: "member",
                id: member.id,
            });
        }
        self.members.push(member);
        Ok(())
    }

    /// Add a nodal load
    pub fn add_load(&mut self, load: NodeLoad) {
        self.loads.push(load);
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up a member by id
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Total length of all members
    pub fn total_member_length(&self) -> f64 {
        self.members
            .iter()
            .filter_map(|m| {
                let start = self.node(&m.node_start)?;
                let end = self.node(&m.node_end)?;
                Some(start.distance_to(end))
            })
            .sum()
    }

    /// Run an analysis with default options
    pub fn analyze(&self, analysis_type: AnalysisType) -> SolverResult<AnalysisResults> {
        analysis_type.analyze(self, &AnalysisOptions::default())
    }
}

/// JSON request accepted by the HTTP and WASM surfaces
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    #[serde(flatten)]
    pub structure: Structure,
    /// "frame" or "truss"; anything else falls back to frame
    #[serde(default)]
    pub analysis_type: Option<String>,
}

impl AnalysisRequest {
    /// Run the requested analysis
    pub fn run(&self, options: &AnalysisOptions) -> SolverResult<AnalysisResults> {
        let analysis_type = AnalysisType::parse_lenient(self.analysis_type.as_deref());
        analysis_type.analyze(&self.structure, options)
    }
}
