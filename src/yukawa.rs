// SPDX-License-Identifier: AGPL-3.0-only

//! Golden mass matrix and weight-scaled Yukawa textures.
//!
//! The base matrix M0 is the charged-lepton mass matrix the paper derives
//! at τ₀ (Equation 5): every entry is an exact expression in φ⁻¹, φ⁻²
//! and 1/√3, and the matrix is real symmetric with trace zero. Integer
//! weight assignments (k₁, k₂, k₃) then dress M0 entrywise with
//! φ^{-(kᵢ+kⱼ)/2} to produce the hierarchies of Table 2.

use nalgebra::Matrix3;

use crate::constants::{PHI, PHI_INV, PHI_INV2, SQRT_3};
use crate::eigen::sorted_eigen;
use crate::tolerances::MASS_FLOOR;

/// The golden mass matrix M0 (Equation 5).
///
/// ```text
///        ⎛ -2/√3      -1/√3      -φ⁻¹     ⎞
/// M0  =  ⎜ -1/√3      2φ⁻¹/√3    -φ⁻²     ⎟
///        ⎝ -φ⁻¹       -φ⁻²       2φ⁻²/√3  ⎠
/// ```
///
/// Trace vanishes exactly: (2/√3)(φ⁻¹ + φ⁻² - 1) = 0.
#[must_use]
pub fn golden_matrix() -> Matrix3<f64> {
    Matrix3::new(
        -2.0 / SQRT_3,
        -1.0 / SQRT_3,
        -PHI_INV,
        -1.0 / SQRT_3,
        2.0 * PHI_INV / SQRT_3,
        -PHI_INV2,
        -PHI_INV,
        -PHI_INV2,
        2.0 * PHI_INV2 / SQRT_3,
    )
}

/// Entrywise suppression factors φ^{-(kᵢ+kⱼ)/2} for an integer weight
/// assignment (k₁, k₂, k₃).
///
/// Symmetric by construction; k = (0, 0, 0) gives the all-ones matrix.
#[must_use]
pub fn suppression_matrix(weights: [u32; 3]) -> Matrix3<f64> {
    Matrix3::from_fn(|i, j| PHI.powf(-f64::from(weights[i] + weights[j]) / 2.0))
}

/// Physical Yukawa texture: g · M0 ∘ S(k), the Hadamard product of the
/// golden matrix with the weight suppression, scaled by the overall
/// coupling g.
#[must_use]
pub fn physical_yukawa(weights: [u32; 3], coupling: f64) -> Matrix3<f64> {
    golden_matrix().component_mul(&suppression_matrix(weights)) * coupling
}

/// Mass spectrum of the texture: singular values of Y, computed as
/// √|λ| of the symmetric product Y Yᵀ, sorted descending.
#[must_use]
pub fn mass_spectrum(weights: [u32; 3], coupling: f64) -> [f64; 3] {
    let y = physical_yukawa(weights, coupling);
    let h = y * y.transpose();
    let pairs = sorted_eigen(&h);
    // |λ| sorted descending survives the square root monotonically.
    [
        pairs.values[0].abs().sqrt(),
        pairs.values[1].abs().sqrt(),
        pairs.values[2].abs().sqrt(),
    ]
}

/// Orders of magnitude spanned by the nonzero masses:
/// log₁₀(largest/smallest) over the entries above [`MASS_FLOOR`].
///
/// With fewer than two nonzero masses there is no hierarchy and the
/// span is 0. Invariant under the overall coupling g.
#[must_use]
pub fn hierarchy_span(masses: &[f64; 3]) -> f64 {
    let nonzero: Vec<f64> = masses.iter().copied().filter(|&m| m > MASS_FLOOR).collect();
    if nonzero.len() < 2 {
        return 0.0;
    }
    let largest = nonzero[0];
    let smallest = nonzero[nonzero.len() - 1];
    (largest / smallest).log10()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eigen::normalized_magnitudes;

    #[test]
    fn golden_matrix_is_traceless() {
        let trace = golden_matrix().trace();
        assert!(trace.abs() < 1e-15, "trace must vanish, got {trace:.3e}");
    }

    #[test]
    fn golden_matrix_is_exactly_symmetric() {
        let m = golden_matrix();
        assert_eq!(m, m.transpose());
    }

    #[test]
    #[allow(clippy::float_cmp)] // φ⁰ = 1 exactly
    fn zero_weights_do_not_suppress() {
        let s = suppression_matrix([0, 0, 0]);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(s[(i, j)], 1.0);
            }
        }
    }

    #[test]
    fn suppression_matrix_is_symmetric() {
        let s = suppression_matrix([6, 4, 0]);
        assert_eq!(s, s.transpose());
    }

    #[test]
    fn suppression_corner_entries() {
        let s = suppression_matrix([6, 4, 0]);
        // (0,0) carries φ⁻⁶, (2,2) is unsuppressed.
        assert!((s[(0, 0)] - PHI.powi(-6)).abs() < 1e-15);
        assert!((s[(2, 2)] - 1.0).abs() < 1e-15);
    }

    #[test]
    fn reference_pattern_span() {
        // Weights (6, 4, 0) span 0.718 orders of magnitude (Table 2, row 1).
        let masses = mass_spectrum([6, 4, 0], 1.0);
        let span = hierarchy_span(&masses);
        assert!(
            (span - 0.718_011_247_769_338_6).abs() < 1e-12,
            "span for (6,4,0) drifted: {span:.16}"
        );
    }

    #[test]
    fn reference_pattern_ratios() {
        let masses = mass_spectrum([6, 4, 0], 1.0);
        let ratios = normalized_magnitudes(&masses);
        assert!((ratios[1] - 0.267_421).abs() < 1e-5);
        assert!((ratios[2] - 0.191_421).abs() < 1e-5);
    }

    #[test]
    fn span_is_coupling_invariant() {
        let unit = hierarchy_span(&mass_spectrum([8, 4, 0], 1.0));
        let scaled = hierarchy_span(&mass_spectrum([8, 4, 0], 2.5));
        assert!(
            (unit - scaled).abs() < 1e-12,
            "span must not depend on g: {unit:.16} vs {scaled:.16}"
        );
    }

    #[test]
    fn masses_come_out_descending() {
        let masses = mass_spectrum([10, 6, 0], 1.0);
        assert!(masses[0] >= masses[1]);
        assert!(masses[1] >= masses[2]);
        assert!(masses[2] > 0.0);
    }

    #[test]
    #[allow(clippy::float_cmp)] // degenerate spans are exactly zero
    fn span_ignores_masses_below_the_floor() {
        assert_eq!(hierarchy_span(&[1.0, 1e-20, 1e-22]), 0.0);
        assert_eq!(hierarchy_span(&[0.0, 0.0, 0.0]), 0.0);
        // Two survivors are enough.
        let span = hierarchy_span(&[1.0, 0.1, 1e-20]);
        assert!((span - 1.0).abs() < 1e-12);
    }
}
