//! Support conditions

use serde::{Deserialize, Serialize};

/// Boundary condition flags for a node (x translation, y translation, rotation)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConstraint {
    /// Restrained in X translation
    #[serde(default)]
    pub fix_x: bool,
    /// Restrained in Y translation
    #[serde(default)]
    pub fix_y: bool,
    /// Restrained in rotation (ignored by truss analysis)
    #[serde(default)]
    pub fix_rotation: bool,
}

impl NodeConstraint {
    /// Create a constraint with no restraints
    pub fn free() -> Self {
        Self::default()
    }

    /// Create a fully fixed support (all DOFs restrained)
    pub fn fixed() -> Self {
        Self::with_restraints(true, true, true)
    }

    /// Create a pinned support (translations restrained, rotation free)
    pub fn pinned() -> Self {
        Self::with_restraints(true, true, false)
    }

    /// Create a roller support (Y translation restrained only)
    pub fn roller_y() -> Self {
        Self::with_restraints(false, true, false)
    }

    /// Create a roller support (X translation restrained only)
    pub fn roller_x() -> Self {
        Self::with_restraints(true, false, false)
    }

    /// Create a support with specific restraints
    pub fn with_restraints(fix_x: bool, fix_y: bool, fix_rotation: bool) -> Self {
        Self {
            fix_x,
            fix_y,
            fix_rotation,
        }
    }

    /// Restraint flags as [X, Y, ROTATION]
    pub fn as_array(&self) -> [bool; 3] {
        [self.fix_x, self.fix_y, self.fix_rotation]
    }

    /// Get list of restrained DOF indices (0-2)
    pub fn restrained_dofs(&self) -> Vec<usize> {
        self.as_array()
            .iter()
            .enumerate()
            .filter_map(|(i, &fixed)| fixed.then_some(i))
            .collect()
    }

    /// Number of restrained translations, the only reactions a pin-jointed truss has
    pub fn num_translational(&self) -> usize {
        usize::from(self.fix_x) + usize::from(self.fix_y)
    }

    /// Check if any DOF is restrained
    pub fn is_supported(&self) -> bool {
        self.fix_x || self.fix_y || self.fix_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_support() {
        let support = NodeConstraint::fixed();
        assert_eq!(support.restrained_dofs(), vec![0, 1, 2]);
        assert_eq!(support.num_translational(), 2);
    }

    #[test]
    fn test_pinned_support() {
        let support = NodeConstraint::pinned();
        assert!(support.fix_x && support.fix_y);
        assert!(!support.fix_rotation);
        assert_eq!(support.restrained_dofs(), vec![0, 1]);
    }

    #[test]
    fn test_rotation_only_has_no_translational_restraint() {
        let support = NodeConstraint::with_restraints(false, false, true);
        assert!(support.is_supported());
        assert_eq!(support.num_translational(), 0);
    }

    #[test]
    fn test_partial_flags_deserialize() {
        let c: NodeConstraint = serde_json::from_str(r#"{"fix_y": true}"#).unwrap();
        assert_eq!(c, NodeConstraint::roller_y());
    }
}
