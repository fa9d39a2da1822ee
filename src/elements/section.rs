//! Section properties for members

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Cross-section properties for in-plane bending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Cross-sectional area
    pub a: f64,
    /// Second moment of area about the out-of-plane axis
    pub i: f64,
    /// Outer depth of section (optional)
    pub depth: Option<f64>,
    /// Outer width of section (optional)
    pub width: Option<f64>,
}

impl Section {
    /// Create a new section with basic properties
    pub fn new(a: f64, i: f64) -> Self {
        Self {
            a,
            i,
            depth: None,
            width: None,
        }
    }

    /// Create a solid rectangular section bending about its depth
    pub fn rectangular(width: f64, depth: f64) -> Self {
        Self {
            a: width * depth,
            i: width * depth.powi(3) / 12.0,
            depth: Some(depth),
            width: Some(width),
        }
    }

    /// Create a solid circular section
    pub fn circular(diameter: f64) -> Self {
        let r = diameter / 2.0;
        Self {
            a: PI * r.powi(2),
            i: PI * r.powi(4) / 4.0,
            depth: Some(diameter),
            width: Some(diameter),
        }
    }

    /// Create a round tube section from outer diameter and wall thickness
    pub fn round_tube(outer_diameter: f64, wall_thickness: f64) -> Self {
        let r_o = outer_diameter / 2.0;
        let r_i = (r_o - wall_thickness).max(0.0);

        Self {
            a: PI * (r_o.powi(2) - r_i.powi(2)),
            i: PI * (r_o.powi(4) - r_i.powi(4)) / 4.0,
            depth: Some(outer_diameter),
            width: Some(outer_diameter),
        }
    }

    /// Create a square tube section from outer width and wall thickness
    pub fn square_tube(outer_width: f64, wall_thickness: f64) -> Self {
        Self::box_section(outer_width, outer_width, wall_thickness)
    }

    /// Create a rectangular box section bending about its depth
    pub fn box_section(width: f64, depth: f64, wall_thickness: f64) -> Self {
        let t = wall_thickness;
        let bi = (width - 2.0 * t).max(0.0);
        let di = (depth - 2.0 * t).max(0.0);

        Self {
            a: width * depth - bi * di,
            i: (width * depth.powi(3) - bi * di.powi(3)) / 12.0,
            depth: Some(depth),
            width: Some(width),
        }
    }

    /// Radius of gyration
    pub fn radius_of_gyration(&self) -> f64 {
        (self.i / self.a).sqrt()
    }

    /// Elastic section modulus, when the depth is known
    pub fn elastic_modulus(&self) -> Option<f64> {
        self.depth.map(|d| self.i / (d / 2.0))
    }
}
