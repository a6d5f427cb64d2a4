// SPDX-License-Identifier: AGPL-3.0-only

//! Centralized verification tolerances with documented origin.
//!
//! Every threshold used by the verification binaries is defined here with
//! its rationale. No ad-hoc magic numbers in check calls.
//!
//! # Tolerance categories
//!
//! | Category | Basis | Example |
//! |----------|-------|---------|
//! | Machine precision | IEEE 754 f64 | 1e-10 for exact golden-ratio algebra |
//! | Paper text | printed precision of the manuscript | 1e-3 for quoted eigenvalues |
//! | Paper claim | stated accuracy of a structural claim | 5% golden hierarchy |

// ═══════════════════════════════════════════════════════════════════
// Machine-precision tolerances (IEEE 754 f64)
// ═══════════════════════════════════════════════════════════════════

/// Tolerance for operations that should be exact in f64 arithmetic.
///
/// φ, φ⁻¹ and φ⁻² are related by exact algebraic identities, and M0 is a
/// 3×3 matrix of such constants; one symmetric eigensolve accumulates far
/// less than 1e-10 of rounding. Used for Theorem 1, Corollary 2, the τ₀
/// root-of-unity identities, the M0 element checks, and the comparison
/// against the recorded exact spectrum.
pub const EXACT_F64: f64 = 1e-10;

/// Floor below which a mass eigenvalue counts as numerically zero.
///
/// √|λ| of a 3×3 product matrix cannot round a genuinely nonzero mass
/// below ~1e-15 for the weight range the paper uses; anything smaller is
/// treated as an exact zero when computing the hierarchy span.
pub const MASS_FLOOR: f64 = 1e-15;

// ═══════════════════════════════════════════════════════════════════
// Paper-text tolerances (Sections 3-4 of the manuscript)
// ═══════════════════════════════════════════════════════════════════

/// Eigenvalues as quoted in the manuscript text (Section 3.3, Equation 6).
///
/// The corrected manuscript prints eight decimals but claims agreement to
/// three; 1e-3 accepts the printed values while still rejecting the
/// superseded first-draft spectrum by three orders of magnitude.
pub const PAPER_TEXT_ABS: f64 = 1e-3;

/// Golden-hierarchy claim: |λ₁|:|λ₂|:|λ₃| ≈ 1:φ⁻¹:φ⁻² (Section 3.3).
///
/// The exact normalized magnitudes deviate from the ideal golden ratios
/// by 2.7% and 4.4%; the paper states the hierarchy as approximate, and
/// 5% is the published acceptance.
pub const GOLDEN_HIERARCHY_REL: f64 = 0.05;

/// Table 2 ratio columns (Section 4).
///
/// The table rounds mass ratios to three decimals and the smallest entries
/// to two significant figures, so relative error against the recomputed
/// ratios can reach ~1% for (10,6,0). 15% matches the acceptance used when
/// the table was first cross-checked and leaves room for the coarse
/// rounding of the span column.
pub const TABLE2_RATIO_REL: f64 = 0.15;

/// Mean absolute deviation of normalized |λ| ratios from (1, φ⁻¹, φ⁻²)
/// below which a spectrum counts as golden-hierarchical.
///
/// The exact spectrum scores 0.0113, the superseded draft spectrum 0.1919;
/// 0.1 separates them by an order of magnitude on either side.
pub const GOLDEN_CLOSENESS_MAX: f64 = 0.1;
