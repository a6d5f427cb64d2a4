// SPDX-License-Identifier: AGPL-3.0-only

//! Deterministic eigen-decomposition of the golden mass matrix.
//!
//! nalgebra's `symmetric_eigen` returns eigenvalues in an unspecified
//! order; every consumer here wants them sorted by descending magnitude
//! so that λ₁ is the dominant mode. This module pins that convention in
//! one place and keeps eigenvectors aligned with their eigenvalues under
//! the permutation.

use nalgebra::Matrix3;

use crate::constants::{PHI_INV, PHI_INV2};

/// Eigenvalues sorted by descending |λ|, with eigenvector columns
/// permuted to match.
#[derive(Debug, Clone)]
pub struct Eigenpairs {
    /// Eigenvalues with |λ₁| ≥ |λ₂| ≥ |λ₃|.
    pub values: [f64; 3],
    /// Column i is the unit eigenvector of `values[i]`.
    pub vectors: Matrix3<f64>,
}

/// Decomposes a real symmetric 3×3 matrix and sorts the spectrum by
/// descending magnitude.
///
/// Uses `total_cmp` for the ordering so the result is deterministic
/// bit-for-bit across runs even if two magnitudes tie.
#[must_use]
pub fn sorted_eigen(m: &Matrix3<f64>) -> Eigenpairs {
    let eig = m.symmetric_eigen();
    let ev = eig.eigenvalues;

    let mut order = [0usize, 1, 2];
    order.sort_by(|&a, &b| ev[b].abs().total_cmp(&ev[a].abs()));

    let cols = [
        eig.eigenvectors.column(order[0]).into_owned(),
        eig.eigenvectors.column(order[1]).into_owned(),
        eig.eigenvectors.column(order[2]).into_owned(),
    ];

    Eigenpairs {
        values: [ev[order[0]], ev[order[1]], ev[order[2]]],
        vectors: Matrix3::from_columns(&cols),
    }
}

/// Magnitudes normalized to the dominant eigenvalue: (1, |λ₂/λ₁|, |λ₃/λ₁|).
///
/// A spectrum with a vanishing leading magnitude has no hierarchy to
/// speak of and maps to all zeros.
#[must_use]
pub fn normalized_magnitudes(values: &[f64; 3]) -> [f64; 3] {
    let lead = values[0].abs();
    if lead > 0.0 {
        [
            values[0].abs() / lead,
            values[1].abs() / lead,
            values[2].abs() / lead,
        ]
    } else {
        [0.0; 3]
    }
}

/// Mean absolute deviation of normalized magnitudes from the ideal
/// golden hierarchy (1, φ⁻¹, φ⁻²).
///
/// The exact spectrum of M0 scores ≈ 0.0113; the superseded draft
/// spectrum scores ≈ 0.1919.
#[must_use]
pub fn golden_closeness(normalized: &[f64; 3]) -> f64 {
    let ideal = [1.0, PHI_INV, PHI_INV2];
    normalized
        .iter()
        .zip(ideal.iter())
        .map(|(n, i)| (n - i).abs())
        .sum::<f64>()
        / 3.0
}
