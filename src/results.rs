//! Result types for frame and truss analysis

use serde::{Deserialize, Serialize};

/// Displacement results at a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Node id
    pub id: String,
    /// Displacement in X direction
    pub ux: f64,
    /// Displacement in Y direction
    pub uy: f64,
    /// Rotation about the out-of-plane axis
    pub rotation: f64,
}

impl NodeDisplacement {
    /// Create from array [UX, UY, ROTATION]
    pub fn from_array(id: &str, arr: [f64; 3]) -> Self {
        Self {
            id: id.to_string(),
            ux: arr[0],
            uy: arr[1],
            rotation: arr[2],
        }
    }

    /// Zero displacement for a node
    pub fn zero(id: &str) -> Self {
        Self::from_array(id, [0.0; 3])
    }

    /// Get translation magnitude
    pub fn translation_magnitude(&self) -> f64 {
        self.ux.hypot(self.uy)
    }
}

/// Internal forces in a member (axial positive in tension)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberForces {
    /// Member id
    pub id: String,
    /// Axial force (positive = tension)
    pub axial: f64,
    /// Shear force at the start node
    pub shear_start: f64,
    /// Shear force at the end node
    pub shear_end: f64,
    /// Bending moment at the start node
    pub moment_start: f64,
    /// Bending moment at the end node
    pub moment_end: f64,
}

impl MemberForces {
    /// Create from local end forces [Fx_i, Fy_i, Mz_i, Fx_j, Fy_j, Mz_j]
    ///
    /// The local end forces act on the member, so the axial force at the
    /// i-node is negated to report tension positive and the j-node shear
    /// and moment are negated to report them with the i-node sign convention.
    pub fn from_local_forces(id: &str, forces: &[f64; 6]) -> Self {
        Self {
            id: id.to_string(),
            axial: -forces[0],
            shear_start: forces[1],
            moment_start: forces[2],
            shear_end: -forces[4],
            moment_end: -forces[5],
        }
    }

    /// Axial-only result for a two-force member
    pub fn axial_only(id: &str, axial: f64) -> Self {
        Self {
            id: id.to_string(),
            axial,
            shear_start: 0.0,
            shear_end: 0.0,
            moment_start: 0.0,
            moment_end: 0.0,
        }
    }

    /// Zero internal forces
    pub fn zero(id: &str) -> Self {
        Self::axial_only(id, 0.0)
    }

    /// Largest absolute end moment
    pub fn max_moment(&self) -> f64 {
        self.moment_start.abs().max(self.moment_end.abs())
    }

    /// Axial stress for a given cross-sectional area
    pub fn axial_stress(&self, area: f64) -> f64 {
        self.axial / area
    }
}

/// Reaction forces at a supported node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeReaction {
    /// Node id
    pub id: String,
    /// Reaction force in X direction
    pub fx: f64,
    /// Reaction force in Y direction
    pub fy: f64,
    /// Reaction moment
    pub moment: f64,
}

impl NodeReaction {
    /// Create from array [FX, FY, MOMENT]
    pub fn from_array(id: &str, arr: [f64; 3]) -> Self {
        Self {
            id: id.to_string(),
            fx: arr[0],
            fy: arr[1],
            moment: arr[2],
        }
    }

    /// Get total force magnitude
    pub fn force_magnitude(&self) -> f64 {
        self.fx.hypot(self.fy)
    }
}

/// Complete output of one analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// One entry per node, in node input order
    pub displacements: Vec<NodeDisplacement>,
    /// One entry per member, in member input order
    pub internal_forces: Vec<MemberForces>,
    /// One entry per supported node, in node input order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reactions: Vec<NodeReaction>,
}

impl AnalysisResults {
    /// Empty result for a structure with no nodes
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a node displacement by id
    pub fn displacement(&self, node_id: &str) -> Option<&NodeDisplacement> {
        self.displacements.iter().find(|d| d.id == node_id)
    }

    /// Look up member forces by id
    pub fn member_forces(&self, member_id: &str) -> Option<&MemberForces> {
        self.internal_forces.iter().find(|f| f.id == member_id)
    }

    /// Look up a support reaction by node id
    pub fn reaction(&self, node_id: &str) -> Option<&NodeReaction> {
        self.reactions.iter().find(|r| r.id == node_id)
    }

    /// Summarize the extreme values
    pub fn summary(&self) -> AnalysisSummary {
        let mut summary = AnalysisSummary {
            num_nodes: self.displacements.len(),
            num_members: self.internal_forces.len(),
            ..Default::default()
        };

        for disp in &self.displacements {
            let mag = disp.translation_magnitude();
            if mag > summary.max_displacement {
                summary.max_displacement = mag;
                summary.max_disp_node = disp.id.clone();
            }
        }

        for forces in &self.internal_forces {
            if forces.axial.abs() > summary.max_axial.abs() {
                summary.max_axial = forces.axial;
                summary.max_axial_member = forces.id.clone();
            }
            if forces.max_moment() > summary.max_moment {
                summary.max_moment = forces.max_moment();
                summary.max_moment_member = forces.id.clone();
            }
        }

        summary
    }
}

/// Summary of analysis results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Maximum translation magnitude
    pub max_displacement: f64,
    /// Node with maximum translation
    pub max_disp_node: String,
    /// Axial force with the largest magnitude (signed, tension positive)
    pub max_axial: f64,
    /// Member with maximum axial force
    pub max_axial_member: String,
    /// Maximum absolute end moment
    pub max_moment: f64,
    /// Member with maximum moment
    pub max_moment_member: String,
    /// Total number of nodes
    pub num_nodes: usize,
    /// Total number of members
    pub num_members: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_force_sign_convention() {
        let f = MemberForces::from_local_forces("m", &[-10.0, 2.0, 3.0, 10.0, -2.0, 4.0]);
        assert_eq!(f.axial, 10.0);
        assert_eq!(f.shear_start, 2.0);
        assert_eq!(f.moment_start, 3.0);
        assert_eq!(f.shear_end, 2.0);
        assert_eq!(f.moment_end, -4.0);
    }

    #[test]
    fn test_summary_picks_extremes() {
        let results = AnalysisResults {
            displacements: vec![
                NodeDisplacement::from_array("a", [0.0, 0.0, 0.0]),
                NodeDisplacement::from_array("b", [0.003, -0.004, 0.1]),
            ],
            internal_forces: vec![
                MemberForces::axial_only("m1", 50.0),
                MemberForces::axial_only("m2", -75.0),
                MemberForces::from_local_forces("m3", &[0.0, 1.0, -9.0, 0.0, -1.0, 2.0]),
            ],
            reactions: Vec::new(),
        };

        let summary = results.summary();
        assert_eq!(summary.max_disp_node, "b");
        assert!((summary.max_displacement - 0.005).abs() < 1e-12);
        assert_eq!(summary.max_axial, -75.0);
        assert_eq!(summary.max_axial_member, "m2");
        assert_eq!(summary.max_moment, 9.0);
        assert_eq!(summary.max_moment_member, "m3");
        assert_eq!(summary.num_members, 3);
    }

    #[test]
    fn test_empty_reactions_are_not_serialized() {
        let json = serde_json::to_value(AnalysisResults::empty()).unwrap();
        assert_eq!(json, serde_json::json!({"displacements": [], "internal_forces": []}));
    }
}
