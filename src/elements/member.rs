//! Member element - 2D frame or truss member

use serde::{Deserialize, Serialize};

use super::{Material, Section};

/// A straight member between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: String,
    /// Id of the start node
    pub node_start: String,
    /// Id of the end node
    pub node_end: String,
    /// Modulus of elasticity
    #[serde(rename = "E")]
    pub e: f64,
    /// Second moment of area (bending about the out-of-plane axis)
    #[serde(rename = "I")]
    pub i: f64,
    /// Cross-sectional area
    #[serde(rename = "A")]
    pub a: f64,
}

impl Member {
    /// Create a new member from raw properties
    pub fn new(id: &str, node_start: &str, node_end: &str, e: f64, i: f64, a: f64) -> Self {
        Self {
            id: id.to_string(),
            node_start: node_start.to_string(),
            node_end: node_end.to_string(),
            e,
            i,
            a,
        }
    }

    /// Create a member whose properties come from a material and a section
    pub fn from_section(
        id: &str,
        node_start: &str,
        node_end: &str,
        material: &Material,
        section: &Section,
    ) -> Self {
        Self::new(id, node_start, node_end, material.e, section.i, section.a)
    }

    /// Axial rigidity EA
    pub fn axial_rigidity(&self) -> f64 {
        self.e * self.a
    }

    /// Flexural rigidity EI
    pub fn flexural_rigidity(&self) -> f64 {
        self.e * self.i
    }
}
