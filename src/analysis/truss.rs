//! Pin-jointed truss analysis by the method of joints
//!
//! Unknowns are the member axial forces (tension positive) followed by one
//! reaction per restrained translation. Each node contributes two
//! equilibrium rows, ΣFx at `2k` and ΣFy at `2k + 1`.

use crate::analysis::AnalysisOptions;
use crate::error::{SolverError, SolverResult};
use crate::math::{self, Mat, Vec as FEVec};
use crate::model::Structure;
use crate::results::{AnalysisResults, MemberForces, NodeDisplacement, NodeReaction};
use crate::topology::{self, Topology};

/// Translation restrained by a support
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Solved joint equilibrium system
#[derive(Debug, Clone, PartialEq)]
pub struct JointSolution {
    /// Axial force per member, in member input order
    pub member_forces: Vec<f64>,
    /// (node index, axis, reaction) per restrained translation, in discovery order
    pub reactions: Vec<(usize, Axis, f64)>,
}

/// Run a method-of-joints truss analysis
pub fn analyze(structure: &Structure, options: &AnalysisOptions) -> SolverResult<AnalysisResults> {
    if structure.nodes.is_empty() {
        return Ok(AnalysisResults::empty());
    }

    let topology = topology::resolve(structure)?;
    let solution = solve_joints(structure, &topology, options)?;

    let displacements = structure
        .nodes
        .iter()
        .map(|n| NodeDisplacement::zero(&n.id))
        .collect();

    let internal_forces = structure
        .members
        .iter()
        .zip(&solution.member_forces)
        .map(|(member, &axial)| MemberForces::axial_only(&member.id, axial))
        .collect();

    Ok(AnalysisResults {
        displacements,
        internal_forces,
        reactions: collect_reactions(structure, &solution),
    })
}

/// Restrained translations in discovery order: node order, X before Y
fn reaction_dofs(structure: &Structure) -> Vec<(usize, Axis)> {
    let mut dofs = Vec::new();
    for (k, node) in structure.nodes.iter().enumerate() {
        let constraint = node.constraint();
        if constraint.fix_x {
            dofs.push((k, Axis::X));
        }
        if constraint.fix_y {
            dofs.push((k, Axis::Y));
        }
    }
    dofs
}

/// Assemble and solve the joint equilibrium equations
pub fn solve_joints(
    structure: &Structure,
    topology: &Topology,
    options: &AnalysisOptions,
) -> SolverResult<JointSolution> {
    let reaction_dofs = reaction_dofs(structure);

    let m = structure.members.len();
    let r = reaction_dofs.len();
    let j = structure.nodes.len();

    if m + r != 2 * j {
        return Err(SolverError::NotDeterminate {
            members: m,
            reactions: r,
            unknowns: m + r,
            equations: 2 * j,
        });
    }

    let n = 2 * j;
    let mut a = Mat::zeros(n, n);
    let mut b = FEVec::zeros(n);

    // Tension pulls each end towards the other
    for (col, (member, &(i_idx, j_idx))) in structure
        .members
        .iter()
        .zip(&topology.member_nodes)
        .enumerate()
    {
        let (_, c, s) = math::member_geometry(
            &structure.nodes[i_idx].coords(),
            &structure.nodes[j_idx].coords(),
            options.length_tolerance,
        )
        .ok_or_else(|| SolverError::ZeroLengthMember(member.id.clone()))?;

        a[(2 * i_idx, col)] += c;
        a[(2 * j_idx, col)] -= c;
        a[(2 * i_idx + 1, col)] += s;
        a[(2 * j_idx + 1, col)] -= s;
    }

    for (k, &(node, axis)) in reaction_dofs.iter().enumerate() {
        let row = match axis {
            Axis::X => 2 * node,
            Axis::Y => 2 * node + 1,
        };
        a[(row, m + k)] = 1.0;
    }

    for (load, &node) in structure.loads.iter().zip(&topology.load_nodes) {
        b[2 * node] -= load.fx;
        b[2 * node + 1] -= load.fy;
    }

    log::debug!(
        "Truss analysis: {} joints, {} members, {} reactions",
        j,
        m,
        r
    );

    let x = math::solve_dense(a, &b, options.pivot_tolerance)
        .ok_or(SolverError::SingularEquilibrium)?;

    Ok(JointSolution {
        member_forces: x.rows(0, m).iter().copied().collect(),
        reactions: reaction_dofs
            .iter()
            .enumerate()
            .map(|(k, &(node, axis))| (node, axis, x[m + k]))
            .collect(),
    })
}

fn collect_reactions(structure: &Structure, solution: &JointSolution) -> Vec<NodeReaction> {
    structure
        .nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.constraint().num_translational() > 0)
        .map(|(k, node)| {
            let mut arr = [0.0; 3];
            for &(_, axis, value) in solution.reactions.iter().filter(|(n, _, _)| *n == k) {
                match axis {
                    Axis::X => arr[0] = value,
                    Axis::Y => arr[1] = value,
                }
            }
            NodeReaction::from_array(&node.id, arr)
        })
        .collect()
}
