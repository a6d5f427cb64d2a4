// SPDX-License-Identifier: AGPL-3.0-only

//! Weight-2 modular forms of Γ(5) evaluated at the golden point.
//!
//! At τ₀ = exp(2πi/5) the five-dimensional weight-2 multiplet collapses to
//! a real ray (Theorem 1):
//!
//! ```text
//! Y^(2)(τ₀) ∝ (1, φ⁻¹, φ⁻², -φ⁻², -φ⁻¹)
//! ```
//!
//! Everything downstream (the golden mass matrix, the eigenvalue spectrum,
//! Table 2) is built from these ratios, so they are exposed here once and
//! spelled in terms of the exact golden-ratio constants.

use crate::complex::Complex64;
use crate::constants::{PHI, PHI_INV, PHI_INV2, TAU_0_ARG};
use crate::error::GoldenPointError;
use crate::tolerances::EXACT_F64;

/// Component ratios of the weight-2 multiplet at τ₀ (Theorem 1).
///
/// Normalized so the first component is 1. The palindromic sign pattern
/// (1, φ⁻¹, φ⁻², -φ⁻², -φ⁻¹) is what forces the mass matrix to be real
/// and symmetric.
#[must_use]
pub fn y_ratios() -> [f64; 5] {
    [1.0, PHI_INV, PHI_INV2, -PHI_INV2, -PHI_INV]
}

/// The golden point τ₀ = exp(2πi/5), a primitive fifth root of unity on
/// the unit circle.
#[must_use]
pub fn tau_0() -> Complex64 {
    Complex64::from_polar(TAU_0_ARG)
}

/// Corollary 2: τ₀ sits at the ST-fixed point of the modular group, which
/// forces Y₁ + Y₄ + Y₅ = 0 among the ratio components.
///
/// With the exact constants the sum is 1 - φ⁻² - φ⁻¹ = 0 to the last bit;
/// the check still goes through [`EXACT_F64`] so it reads the same as the
/// other identity checks.
#[must_use]
pub fn stabilizer_fixed() -> bool {
    let y = y_ratios();
    (y[0] + y[3] + y[4]).abs() < EXACT_F64
}

/// Hierarchy suppression factor φ^{-(w-2)/2} carried by a modular form of
/// weight `w` (Equation 2.7).
///
/// Weight 2 is unsuppressed; each step of two in weight costs one power
/// of φ⁻¹.
///
/// # Errors
/// Returns `Err` for weights below 2, which do not correspond to
/// holomorphic forms of Γ(5).
pub fn weight_suppression(weight: u32) -> Result<f64, GoldenPointError> {
    if weight < 2 {
        return Err(GoldenPointError::InvalidWeight(weight));
    }
    Ok(PHI.powf(-(f64::from(weight - 2)) / 2.0))
}
