//! Mathematical utilities for the three-moment solver

use nalgebra::{DMatrix, DVector};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// Solve a general dense linear system using LU decomposition
///
/// Returns None if the matrix is singular. The three-moment matrix is
/// tridiagonal apart from the two boundary rows; a banded solver would
/// exploit that, but system sizes here are tiny.
pub fn solve_linear_system(a: &Mat, b: &Vec) -> Option<Vec> {
    a.clone().lu().solve(b)
}

/// Check that every component of a vector is finite
pub fn all_finite(v: &Vec) -> bool {
    v.iter().all(|x| x.is_finite())
}
