//! Linear static frame analysis by the direct stiffness method
//!
//! Each node carries three DOFs (X translation, Y translation, rotation),
//! numbered `3k, 3k+1, 3k+2` for the node at input position `k`.

use crate::analysis::AnalysisOptions;
use crate::elements::{Member, Node};
use crate::error::{SolverError, SolverResult};
use crate::math::{self, Mat, Mat6, Vec as FEVec, Vec6, DOF_PER_NODE};
use crate::model::Structure;
use crate::results::{AnalysisResults, MemberForces, NodeDisplacement, NodeReaction};
use crate::topology::{self, Topology};

/// A frame member prepared for assembly
///
/// The local stiffness and transformation are kept so that force recovery
/// does not repeat the trigonometry.
#[derive(Debug, Clone)]
pub struct FrameElement {
    /// Member length
    pub length: f64,
    /// Direction cosine with the global X axis
    pub c: f64,
    /// Direction cosine with the global Y axis
    pub s: f64,
    /// Local stiffness matrix
    pub k_local: Mat6,
    /// Global-to-local transformation matrix
    pub t: Mat6,
    /// Global stiffness contribution, `Tᵀ·k·T`
    pub k_global: Mat6,
    /// Global DOF indices of the six element DOFs
    pub dofs: [usize; 6],
}

impl FrameElement {
    /// Formulate the element for `member` spanning node indices `i` -> `j`
    pub fn new(
        member: &Member,
        (i, i_node): (usize, &Node),
        (j, j_node): (usize, &Node),
        options: &AnalysisOptions,
    ) -> SolverResult<Self> {
        check_section(member)?;

        let (length, c, s) =
            math::member_geometry(&i_node.coords(), &j_node.coords(), options.length_tolerance)
                .ok_or_else(|| SolverError::ZeroLengthMember(member.id.clone()))?;

        let k_local = math::member_local_stiffness(member.e, member.a, member.i, length);
        let t = math::member_transformation_matrix(c, s);
        let k_global = t.transpose() * k_local * t;

        let [i0, i1, i2] = math::node_dofs(i);
        let [j0, j1, j2] = math::node_dofs(j);

        Ok(Self {
            length,
            c,
            s,
            k_local,
            t,
            k_global,
            dofs: [i0, i1, i2, j0, j1, j2],
        })
    }

    /// Local end forces for a full global displacement vector
    pub fn local_forces(&self, d_global: &FEVec) -> Vec6 {
        let d_elem = Vec6::from_fn(|r, _| d_global[self.dofs[r]]);
        self.k_local * (self.t * d_elem)
    }
}

fn check_section(member: &Member) -> SolverResult<()> {
    for (property, value) in [("E", member.e), ("A", member.a), ("I", member.i)] {
        if !(value > 0.0) || !value.is_finite() {
            return Err(SolverError::InvalidSection {
                member: member.id.clone(),
                property,
                value,
            });
        }
    }
    Ok(())
}

/// Run a linear static frame analysis
pub fn analyze(structure: &Structure, options: &AnalysisOptions) -> SolverResult<AnalysisResults> {
    if structure.nodes.is_empty() {
        return Ok(AnalysisResults::empty());
    }

    let topology = topology::resolve(structure)?;
    let elements = formulate(structure, &topology, options)?;

    let n_dofs = structure.nodes.len() * DOF_PER_NODE;
    let k_global = build_global_stiffness(n_dofs, &elements);
    let p_global = build_load_vector(n_dofs, structure, &topology);
    let (free_dofs, restrained_dofs) = partition_dofs(&structure.nodes);

    log::debug!(
        "Frame analysis: {} nodes, {} members, {} DOFs ({} free)",
        structure.nodes.len(),
        elements.len(),
        n_dofs,
        free_dofs.len()
    );

    if free_dofs.is_empty() {
        // Fully restrained: nothing moves and supports carry the loads directly
        let d_full = FEVec::zeros(n_dofs);
        return Ok(AnalysisResults {
            displacements: structure
                .nodes
                .iter()
                .map(|n| NodeDisplacement::zero(&n.id))
                .collect(),
            internal_forces: structure
                .members
                .iter()
                .map(|m| MemberForces::zero(&m.id))
                .collect(),
            reactions: calculate_reactions(structure, &k_global, &p_global, &d_full),
        });
    }

    let d_full = solve_linear(&k_global, &p_global, &free_dofs, n_dofs, options)?;
    debug_assert!(restrained_dofs.iter().all(|&d| d_full[d] == 0.0));

    let displacements = structure
        .nodes
        .iter()
        .enumerate()
        .map(|(k, node)| {
            let [ux, uy, rz] = math::node_dofs(k);
            NodeDisplacement::from_array(&node.id, [d_full[ux], d_full[uy], d_full[rz]])
        })
        .collect();

    let internal_forces = structure
        .members
        .iter()
        .zip(&elements)
        .map(|(member, element)| {
            let f = element.local_forces(&d_full);
            MemberForces::from_local_forces(&member.id, &[f[0], f[1], f[2], f[3], f[4], f[5]])
        })
        .collect();

    Ok(AnalysisResults {
        displacements,
        internal_forces,
        reactions: calculate_reactions(structure, &k_global, &p_global, &d_full),
    })
}

/// Formulate every member, in member input order
fn formulate(
    structure: &Structure,
    topology: &Topology,
    options: &AnalysisOptions,
) -> SolverResult<Vec<FrameElement>> {
    structure
        .members
        .iter()
        .zip(&topology.member_nodes)
        .map(|(member, &(i, j))| {
            FrameElement::new(
                member,
                (i, &structure.nodes[i]),
                (j, &structure.nodes[j]),
                options,
            )
        })
        .collect()
}

/// Scatter element contributions into the global stiffness matrix
fn build_global_stiffness(n_dofs: usize, elements: &[FrameElement]) -> Mat {
    let mut k = Mat::zeros(n_dofs, n_dofs);

    for element in elements {
        for (a, &ga) in element.dofs.iter().enumerate() {
            for (b, &gb) in element.dofs.iter().enumerate() {
                k[(ga, gb)] += element.k_global[(a, b)];
            }
        }
    }

    k
}

/// Accumulate nodal loads into the global load vector
fn build_load_vector(n_dofs: usize, structure: &Structure, topology: &Topology) -> FEVec {
    let mut p = FEVec::zeros(n_dofs);

    for (load, &node) in structure.loads.iter().zip(&topology.load_nodes) {
        for (dof, value) in math::node_dofs(node).into_iter().zip(load.as_array()) {
            p[dof] += value;
        }
    }

    p
}

/// Split DOFs into (free, restrained), both ascending
fn partition_dofs(nodes: &[Node]) -> (Vec<usize>, Vec<usize>) {
    let mut free_dofs = Vec::new();
    let mut restrained_dofs = Vec::new();

    for (k, node) in nodes.iter().enumerate() {
        let restraints = node.constraint().as_array();
        for (dof, fixed) in math::node_dofs(k).into_iter().zip(restraints) {
            if fixed {
                restrained_dofs.push(dof);
            } else {
                free_dofs.push(dof);
            }
        }
    }

    (free_dofs, restrained_dofs)
}

/// Solve K11 * D1 = P1 and expand to the full displacement vector
fn solve_linear(
    k_global: &Mat,
    p_global: &FEVec,
    free_dofs: &[usize],
    n_dofs: usize,
    options: &AnalysisOptions,
) -> SolverResult<FEVec> {
    let n_free = free_dofs.len();
    let mut k11 = Mat::zeros(n_free, n_free);
    let mut p1 = FEVec::zeros(n_free);

    for (i, &di) in free_dofs.iter().enumerate() {
        p1[i] = p_global[di];
        for (j, &dj) in free_dofs.iter().enumerate() {
            k11[(i, j)] = k_global[(di, dj)];
        }
    }

    let d1 = math::solve_dense(k11, &p1, options.pivot_tolerance).ok_or(SolverError::Unstable)?;

    let mut d_full = FEVec::zeros(n_dofs);
    for (i, &di) in free_dofs.iter().enumerate() {
        d_full[di] = d1[i];
    }

    Ok(d_full)
}

/// Support reactions R = K·D - P at the restrained DOFs of each supported node
fn calculate_reactions(
    structure: &Structure,
    k_global: &Mat,
    p_global: &FEVec,
    d_full: &FEVec,
) -> Vec<NodeReaction> {
    let kd = k_global * d_full;

    structure
        .nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.constraint().is_supported())
        .map(|(k, node)| {
            let restraints = node.constraint().as_array();
            let dofs = math::node_dofs(k);
            let mut arr = [0.0; 3];
            for r in 0..3 {
                if restraints[r] {
                    arr[r] = kd[dofs[r]] - p_global[dofs[r]];
                }
            }
            NodeReaction::from_array(&node.id, arr)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::NodeConstraint;
    use crate::loads::NodeLoad;
    use approx::assert_relative_eq;

    const E: f64 = 210e9;
    const I: f64 = 1e-6;
    const A: f64 = 1e-3;

    fn cantilever(length: f64, angle: f64, load: NodeLoad) -> Structure {
        let mut s = Structure::new();
        s.add_node(Node::new("n1", 0.0, 0.0).with_constraints(NodeConstraint::fixed()))
            .unwrap();
        s.add_node(Node::new("n2", length * angle.cos(), length * angle.sin()))
            .unwrap();
        s.add_member(Member::new("b1", "n1", "n2", E, I, A)).unwrap();
        s.add_load(load);
        s
    }

    #[test]
    fn test_simple_cantilever() {
        let p = -1000.0;
        let s = cantilever(1.0, 0.0, NodeLoad::fy("n2", p));
        let results = analyze(&s, &AnalysisOptions::default()).unwrap();

        let tip = results.displacement("n2").unwrap();
        assert_relative_eq!(tip.uy, p / (3.0 * E * I), max_relative = 1e-3);
        assert_relative_eq!(tip.rotation, p / (2.0 * E * I), max_relative = 1e-3);

        let forces = results.member_forces("b1").unwrap();
        assert!(forces.axial.abs() < 1e-3);
        // Fixed-end moment equals P·L in magnitude, free-end moment vanishes
        assert_relative_eq!(forces.moment_start.abs(), 1000.0, max_relative = 1e-6);
        assert!(forces.moment_end.abs() < 1e-6);
        assert_relative_eq!(forces.shear_start, forces.shear_end, max_relative = 1e-9);

        let rxn = results.reaction("n1").unwrap();
        assert_relative_eq!(rxn.fy, 1000.0, max_relative = 1e-9);
        assert_relative_eq!(rxn.moment, 1000.0, max_relative = 1e-9);
    }

    #[test]
    fn test_inclined_cantilever_matches_horizontal() {
        // Rotating the whole problem must rotate the answer with it
        let angle: f64 = 30f64.to_radians();
        let p = 500.0;
        let (c, s) = (angle.cos(), angle.sin());
        let load = NodeLoad::force("n2", -p * s, p * c);
        let st = cantilever(2.0, angle, load);
        let results = analyze(&st, &AnalysisOptions::default()).unwrap();

        let tip = results.displacement("n2").unwrap();
        let transverse = -tip.ux * s + tip.uy * c;
        let axial = tip.ux * c + tip.uy * s;
        assert_relative_eq!(transverse, p * 8.0 / (3.0 * E * I), max_relative = 1e-6);
        assert!(axial.abs() < 1e-12);
        assert_relative_eq!(tip.rotation, p * 4.0 / (2.0 * E * I), max_relative = 1e-6);
        assert!(results.member_forces("b1").unwrap().axial.abs() < 1e-6);
    }

    #[test]
    fn test_inclined_axial_tension() {
        let angle: f64 = 135f64.to_radians();
        let p = 2500.0;
        let s = cantilever(1.5, angle, NodeLoad::force("n2", p * angle.cos(), p * angle.sin()));
        let results = analyze(&s, &AnalysisOptions::default()).unwrap();
        assert_relative_eq!(results.internal_forces[0].axial, p, max_relative = 1e-9);
    }

    #[test]
    fn test_element_global_stiffness_is_symmetric() {
        let a = Node::new("a", 0.0, 0.0);
        let b = Node::new("b", 1.0, 2.0);
        let member = Member::new("m", "a", "b", E, I, A);
        let el = FrameElement::new(&member, (0, &a), (1, &b), &AnalysisOptions::default()).unwrap();
        assert_relative_eq!(el.k_global, el.k_global.transpose(), max_relative = 1e-12);
        assert_relative_eq!(el.length, 5f64.sqrt());
        assert_eq!(el.dofs, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_invalid_section() {
        let mut s = cantilever(1.0, 0.0, NodeLoad::fy("n2", -1.0));
        s.members[0].i = 0.0;
        assert!(matches!(
            analyze(&s, &AnalysisOptions::default()),
            Err(SolverError::InvalidSection { property: "I", .. })
        ));
    }

    #[test]
    fn test_loads_accumulate() {
        let mut once = cantilever(1.0, 0.0, NodeLoad::fy("n2", -1000.0));
        let mut twice = cantilever(1.0, 0.0, NodeLoad::fy("n2", -400.0));
        twice.add_load(NodeLoad::fy("n2", -600.0));
        once.add_load(NodeLoad::moment("n2", 0.0));

        let r1 = analyze(&once, &AnalysisOptions::default()).unwrap();
        let r2 = analyze(&twice, &AnalysisOptions::default()).unwrap();
        assert_relative_eq!(r1.displacements[1].uy, r2.displacements[1].uy, max_relative = 1e-12);
    }
}
