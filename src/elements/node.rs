//! Node element - a joint in the 2D plane

use serde::{Deserialize, Serialize};

use super::NodeConstraint;

/// A 2D node in the structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: String,
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Support conditions, `None` when the node is free
    #[serde(default)]
    pub constraints: Option<NodeConstraint>,
}

impl Node {
    /// Create a new unconstrained node at the given coordinates
    pub fn new(id: &str, x: f64, y: f64) -> Self {
        Self {
            id: id.to_string(),
            x,
            y,
            constraints: None,
        }
    }

    /// Attach support conditions to the node
    pub fn with_constraints(mut self, constraints: NodeConstraint) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Effective constraint flags (all free when none were given)
    pub fn constraint(&self) -> NodeConstraint {
        self.constraints.unwrap_or_default()
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}
