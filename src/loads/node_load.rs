//! Node loads - forces and moments applied directly to nodes

use serde::{Deserialize, Serialize};

/// A concentrated load applied directly to a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLoad {
    /// Id of the loaded node
    pub node_id: String,
    /// Force in X direction
    #[serde(rename = "Fx", default)]
    pub fx: f64,
    /// Force in Y direction
    #[serde(rename = "Fy", default)]
    pub fy: f64,
    /// Moment about the out-of-plane axis (ignored by truss analysis)
    #[serde(rename = "Moment", default)]
    pub moment: f64,
}

impl NodeLoad {
    /// Create a new node load with all components
    pub fn new(node_id: &str, fx: f64, fy: f64, moment: f64) -> Self {
        Self {
            node_id: node_id.to_string(),
            fx,
            fy,
            moment,
        }
    }

    /// Create a force-only node load
    pub fn force(node_id: &str, fx: f64, fy: f64) -> Self {
        Self::new(node_id, fx, fy, 0.0)
    }

    /// Create a moment-only node load
    pub fn moment(node_id: &str, moment: f64) -> Self {
        Self::new(node_id, 0.0, 0.0, moment)
    }

    /// Create a load in X direction
    pub fn fx(node_id: &str, value: f64) -> Self {
        Self::force(node_id, value, 0.0)
    }

    /// Create a load in Y direction
    pub fn fy(node_id: &str, value: f64) -> Self {
        Self::force(node_id, 0.0, value)
    }

    /// Get the load as an array [FX, FY, MOMENT]
    pub fn as_array(&self) -> [f64; 3] {
        [self.fx, self.fy, self.moment]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_components_default_to_zero() {
        let load: NodeLoad = serde_json::from_str(r#"{"node_id": "n2", "Fy": -1000.0}"#).unwrap();
        assert_eq!(load.as_array(), [0.0, -1000.0, 0.0]);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(NodeLoad::moment("n", 5.0).as_array(), [0.0, 0.0, 5.0]);
        assert_eq!(NodeLoad::fx("n", 2.0).as_array(), [2.0, 0.0, 0.0]);
    }
}
