//! Node id resolution - maps user-facing ids to dense indices

use std::collections::{HashMap, HashSet};

use crate::error::{Reference, SolverError, SolverResult};
use crate::model::Structure;

/// Dense index space for one structure
///
/// Node indices follow input order, so node `k` owns frame DOFs
/// `3k..3k+3` and truss equilibrium rows `2k..2k+2`.
#[derive(Debug, Clone)]
pub struct Topology {
    /// (start, end) node indices per member, in member input order
    pub member_nodes: Vec<(usize, usize)>,
    /// Target node index per load, in load input order
    pub load_nodes: Vec<usize>,
}

/// Build the node id -> index map, rejecting duplicate ids
pub fn node_index(structure: &Structure) -> SolverResult<HashMap<&str, usize>> {
    let mut index = HashMap::with_capacity(structure.nodes.len());
    for (i, node) in structure.nodes.iter().enumerate() {
        if index.insert(node.id.as_str(), i).is_some() {
            return Err(SolverError::DuplicateId {
                entity: "node",
                id: node.id.clone(),
            });
        }
    }
    Ok(index)
}

/// Resolve every member endpoint and load target to a node index
pub fn resolve(structure: &Structure) -> SolverResult<Topology> {
    let index = node_index(structure)?;

    let lookup = |node: &str, referenced_by: Reference| -> SolverResult<usize> {
        index
            .get(node)
            .copied()
            .ok_or_else(|| SolverError::UnknownNode {
                referenced_by,
                node: node.to_string(),
            })
    };

    let mut seen_members = HashSet::with_capacity(structure.members.len());
    let mut member_nodes = Vec::with_capacity(structure.members.len());
    for member in &structure.members {
        if !seen_members.insert(member.id.as_str()) {
            return Err(SolverError::DuplicateId {
                entity: "member",
                id: member.id.clone(),
            });
        }
        let i = lookup(&member.node_start, Reference::Member(member.id.clone()))?;
        let j = lookup(&member.node_end, Reference::Member(member.id.clone()))?;
        member_nodes.push((i, j));
    }

    let load_nodes = structure
        .loads
        .iter()
        .enumerate()
        .map(|(k, load)| lookup(&load.node_id, Reference::Load(k)))
        .collect::<SolverResult<Vec<_>>>()?;

    Ok(Topology {
        member_nodes,
        load_nodes,
    })
}
