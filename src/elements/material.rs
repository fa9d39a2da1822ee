//! Material properties

use serde::{Deserialize, Serialize};

/// Linear-elastic material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity (Young's modulus) in Pa
    pub e: f64,
    /// Density in kg/m³
    pub rho: f64,
    /// Yield strength (optional) in Pa
    pub fy: Option<f64>,
}

impl Material {
    /// Create a new material with given properties
    pub fn new(e: f64, rho: f64) -> Self {
        Self { e, rho, fy: None }
    }

    /// Set the yield strength
    pub fn with_yield_strength(mut self, fy: f64) -> Self {
        self.fy = Some(fy);
        self
    }

    /// Mild steel (A36)
    pub fn steel() -> Self {
        Self {
            e: 200e9,
            rho: 7850.0,
            fy: Some(250e6),
        }
    }

    /// 4130 chromoly tube, normalized
    pub fn chromoly() -> Self {
        Self {
            e: 205e9,
            rho: 7850.0,
            fy: Some(460e6),
        }
    }

    /// 6061-T6 aluminum
    pub fn aluminum() -> Self {
        Self {
            e: 68.9e9,
            rho: 2700.0,
            fy: Some(276e6),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::steel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steel_properties() {
        let steel = Material::steel();
        assert_eq!(steel.e, 200e9);
        assert!(steel.fy.is_some());
    }

    #[test]
    fn test_with_yield_strength() {
        let mat = Material::new(70e9, 2700.0).with_yield_strength(200e6);
        assert_eq!(mat.fy, Some(200e6));
    }
}
