// SPDX-License-Identifier: AGPL-3.0-only

//! Golden-ratio constants used throughout the A5 golden-point analysis.
//!
//! `PHI_INV` and `PHI_INV2` are defined through the exact algebraic
//! identities 1/φ = φ − 1 and 1/φ² = 2 − φ rather than by division, so
//! `PHI_INV + PHI_INV2 == 1.0` holds bit-exactly in f64.

/// Golden ratio φ = (1 + √5)/2.
pub const PHI: f64 = 1.618_033_988_749_894_9;

/// 1/φ = φ − 1.
pub const PHI_INV: f64 = PHI - 1.0;

/// 1/φ² = 2 − φ.
pub const PHI_INV2: f64 = 2.0 - PHI;

/// √3, the normalization appearing in the A5 Clebsch-Gordan coefficients.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Phase of the golden point τ₀ = e^{2πi/5} on the unit circle.
pub const TAU_0_ARG: f64 = 2.0 * std::f64::consts::PI / 5.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phi_satisfies_defining_quadratic() {
        // φ² − φ − 1 = 0 is exact for the nearest-f64 representation.
        assert_eq!(PHI * PHI - PHI - 1.0, 0.0);
    }

    #[test]
    fn inverse_identities_are_bit_exact() {
        assert_eq!(PHI_INV + PHI_INV2, 1.0);
        assert!((PHI_INV * PHI_INV - PHI_INV2).abs() < 1e-15);
        assert!((PHI * PHI_INV - 1.0).abs() < 1e-15);
        assert!((PHI * PHI * PHI_INV2 - 1.0).abs() < 1e-15);
    }

    #[test]
    fn sqrt3_matches_f64_sqrt() {
        assert!((SQRT_3 - 3.0_f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn golden_angle_is_a_fifth_of_the_circle() {
        assert!((5.0 * TAU_0_ARG - std::f64::consts::TAU).abs() < 1e-15);
    }
}
