//! Mathematical utilities for frame and truss calculations

use nalgebra::{DMatrix, DVector, Matrix6, Vector6};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// 6x6 matrix for 2D member stiffness
pub type Mat6 = Matrix6<f64>;
/// 6-element vector for member end forces/displacements
pub type Vec6 = Vector6<f64>;

/// Degrees of freedom per node for frame analysis (u, v, theta)
pub const DOF_PER_NODE: usize = 3;

/// Global DOF indices (X, Y, ROTATION) owned by a node
pub fn node_dofs(node_index: usize) -> [usize; 3] {
    let base = node_index * DOF_PER_NODE;
    [base, base + 1, base + 2]
}

/// Length and direction cosines of the segment from `i_node` to `j_node`
///
/// Returns `None` when the segment has zero length at working precision,
/// i.e. when its length is not greater than `tolerance` times the
/// coordinate magnitude (at least 1).
pub fn member_geometry(i_node: &[f64; 2], j_node: &[f64; 2], tolerance: f64) -> Option<(f64, f64, f64)> {
    let dx = j_node[0] - i_node[0];
    let dy = j_node[1] - i_node[1];
    let length = dx.hypot(dy);

    let scale = i_node
        .iter()
        .chain(j_node.iter())
        .fold(1.0_f64, |m, v| m.max(v.abs()));

    // also rejects NaN coordinates
    if !(length > tolerance * scale) || !length.is_finite() {
        return None;
    }

    Some((length, dx / length, dy / length))
}

/// Compute the transformation matrix for a 2D frame element
///
/// # Arguments
/// * `c` - Cosine of the member angle
/// * `s` - Sine of the member angle
///
/// # Returns
/// 6x6 matrix mapping global end displacements to local ones.
/// Each translational block is the transpose of the local-to-global
/// rotation `[c -s; s c]`; rotations are unaffected.
pub fn member_transformation_matrix(c: f64, s: f64) -> Mat6 {
    #[rustfmt::skip]
    let data = [
         c,   s,   0.0, 0.0, 0.0, 0.0,
        -s,   c,   0.0, 0.0, 0.0, 0.0,
         0.0, 0.0, 1.0, 0.0, 0.0, 0.0,
         0.0, 0.0, 0.0,  c,   s,  0.0,
         0.0, 0.0, 0.0, -s,   c,  0.0,
         0.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ];

    Mat6::from_row_slice(&data)
}

/// Compute the local stiffness matrix for a 2D Euler-Bernoulli frame element
///
/// # Arguments
/// * `e` - Modulus of elasticity
/// * `a` - Cross-sectional area
/// * `i` - Second moment of area
/// * `length` - Member length
///
/// # Returns
/// 6x6 local stiffness matrix, DOF order [u1, v1, θ1, u2, v2, θ2]
pub fn member_local_stiffness(e: f64, a: f64, i: f64, length: f64) -> Mat6 {
    let l = length;
    let l2 = l * l;
    let l3 = l2 * l;

    let ea_l = e * a / l;
    let ei_l3 = e * i / l3;
    let ei_l2 = e * i / l2;
    let ei_l = e * i / l;

    #[rustfmt::skip]
    let data = [
        // Row 0: axial at i
        ea_l,   0.0,          0.0,         -ea_l,  0.0,          0.0,
        // Row 1: shear at i
        0.0,    12.0*ei_l3,   6.0*ei_l2,   0.0,    -12.0*ei_l3,  6.0*ei_l2,
        // Row 2: moment at i
        0.0,    6.0*ei_l2,    4.0*ei_l,    0.0,    -6.0*ei_l2,   2.0*ei_l,
        // Row 3: axial at j
        -ea_l,  0.0,          0.0,         ea_l,   0.0,          0.0,
        // Row 4: shear at j
        0.0,    -12.0*ei_l3,  -6.0*ei_l2,  0.0,    12.0*ei_l3,   -6.0*ei_l2,
        // Row 5: moment at j
        0.0,    6.0*ei_l2,    2.0*ei_l,    0.0,    -6.0*ei_l2,   4.0*ei_l,
    ];

    Mat6::from_row_slice(&data)
}

/// Solve a dense square linear system using LU decomposition
///
/// The system is treated as singular when any pivot of the factorization
/// is not larger than `pivot_tolerance` times the largest pivot, or when
/// the solution is not finite.
pub fn solve_dense(a: Mat, b: &Vec, pivot_tolerance: f64) -> Option<Vec> {
    let n = a.nrows();
    if n != a.ncols() || n != b.len() {
        return None;
    }
    if n == 0 {
        return Some(Vec::zeros(0));
    }

    let lu = a.lu();
    let pivots = lu.u().diagonal();
    let max_pivot = pivots.iter().fold(0.0_f64, |m, p| m.max(p.abs()));
    if !(max_pivot > 0.0) || !max_pivot.is_finite() {
        return None;
    }

    let threshold = pivot_tolerance * max_pivot;
    if let Some(min_pivot) = pivots.iter().map(|p| p.abs()).reduce(f64::min) {
        if !(min_pivot > threshold) {
            log::debug!(
                "Pivot ratio {:e} below tolerance {:e}",
                min_pivot / max_pivot,
                pivot_tolerance
            );
            return None;
        }
    }

    let x = lu.solve(b)?;
    x.iter().all(|v| v.is_finite()).then_some(x)
}
