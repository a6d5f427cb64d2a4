// SPDX-License-Identifier: AGPL-3.0-only

//! Integration tests: golden-point model pipeline end-to-end.
//!
//! These tests exercise the full chain from modular forms through matrix
//! construction to spectra and hierarchies, verifying that the public API
//! composes correctly across module boundaries.

use goldenpoint::constants::{PHI_INV, PHI_INV2};
use goldenpoint::eigen::{golden_closeness, normalized_magnitudes, sorted_eigen};
use goldenpoint::forms;
use goldenpoint::provenance::{DRAFT_EIGENVALUES, EXACT_EIGENVALUES, TABLE2_PATTERNS};
use goldenpoint::tolerances;
use goldenpoint::yukawa::{golden_matrix, hierarchy_span, mass_spectrum, physical_yukawa};

#[test]
fn golden_matrix_spectrum_matches_published_values() {
    let pairs = sorted_eigen(&golden_matrix());
    for i in 0..3 {
        assert!(
            (pairs.values[i] - EXACT_EIGENVALUES[i]).abs() < tolerances::EXACT_F64,
            "λ_{} = {} should match published {}",
            i + 1,
            pairs.values[i],
            EXACT_EIGENVALUES[i]
        );
    }
}

#[test]
fn eigenvectors_of_m0_satisfy_the_eigen_equation() {
    let m = golden_matrix();
    let pairs = sorted_eigen(&m);
    for i in 0..3 {
        let v = pairs.vectors.column(i).into_owned();
        let residual = m * v - v * pairs.values[i];
        assert!(
            residual.norm() < tolerances::EXACT_F64,
            "M₀ v = λ v violated for column {i}, residual {:.3e}",
            residual.norm()
        );
    }
}

#[test]
fn spectrum_shows_golden_hierarchy_within_five_percent() {
    let pairs = sorted_eigen(&golden_matrix());
    let mags = normalized_magnitudes(&pairs.values);
    let err2 = ((mags[1] - PHI_INV) / PHI_INV).abs();
    let err3 = ((mags[2] - PHI_INV2) / PHI_INV2).abs();
    assert!(
        err2 < tolerances::GOLDEN_HIERARCHY_REL,
        "|λ₂/λ₁| = {} deviates {:.2}% from φ⁻¹",
        mags[1],
        100.0 * err2
    );
    assert!(
        err3 < tolerances::GOLDEN_HIERARCHY_REL,
        "|λ₃/λ₁| = {} deviates {:.2}% from φ⁻²",
        mags[2],
        100.0 * err3
    );
}

#[test]
fn quintet_ratios_feed_the_matrix_entries() {
    let y = forms::y_ratios();
    let m = golden_matrix();
    assert!(
        (m[(0, 2)] + y[1]).abs() < tolerances::EXACT_F64,
        "M₁₃ should be -Y₂ = -φ⁻¹"
    );
    assert!(
        (m[(1, 2)] + y[2]).abs() < tolerances::EXACT_F64,
        "M₂₃ should be -Y₃ = -φ⁻²"
    );
    assert!(
        m.trace().abs() < tolerances::EXACT_F64,
        "M₀ trace should vanish, got {:.3e}",
        m.trace()
    );
}

#[test]
fn zero_weights_leave_the_golden_matrix_unscaled() {
    let y = physical_yukawa([0, 0, 0], 1.0);
    assert_eq!(
        y,
        golden_matrix(),
        "φ⁰ suppression and unit coupling must be exact identities"
    );
}

#[test]
fn table2_rows_reproduce_published_ratios_and_spans() {
    for pattern in TABLE2_PATTERNS {
        let masses = mass_spectrum(pattern.weights, 1.0);
        let mags = normalized_magnitudes(&masses);
        let span = hierarchy_span(&masses);
        let [k1, k2, k3] = pattern.weights;

        for (idx, (obs, exp)) in mags.iter().zip(pattern.ratios.iter()).enumerate().skip(1) {
            assert!(
                ((obs - exp) / exp).abs() < tolerances::TABLE2_RATIO_REL,
                "({k1},{k2},{k3}) ratio y_{}: computed {obs:.4}, published {exp}",
                idx + 1
            );
        }
        assert!(
            ((span - pattern.span_orders) / pattern.span_orders).abs()
                < tolerances::TABLE2_RATIO_REL,
            "({k1},{k2},{k3}) span: computed {span:.3}, published {}",
            pattern.span_orders
        );
    }
}

#[test]
fn reference_pattern_span_is_pinned() {
    let masses = mass_spectrum([6, 4, 0], 1.0);
    let span = hierarchy_span(&masses);
    assert!(
        (span - 0.718_011_247_769_338_7).abs() < 1e-12,
        "(6,4,0) span drifted: {span:.16}"
    );
}

#[test]
fn hierarchy_span_grows_with_total_weight() {
    let mut by_total: Vec<_> = TABLE2_PATTERNS
        .iter()
        .map(|p| {
            let total: u32 = p.weights.iter().sum();
            (total, hierarchy_span(&mass_spectrum(p.weights, 1.0)))
        })
        .collect();
    by_total.sort_by_key(|&(total, _)| total);
    for pair in by_total.windows(2) {
        assert!(
            pair[1].1 > pair[0].1,
            "span should widen with total weight: {pair:?}"
        );
    }
}

#[test]
fn span_is_invariant_under_coupling_rescale() {
    let reference = hierarchy_span(&mass_spectrum([8, 4, 0], 1.0));
    for &g in &[1e-3, 0.5, 137.0] {
        let span = hierarchy_span(&mass_spectrum([8, 4, 0], g));
        assert!(
            (span - reference).abs() < 1e-9,
            "span at coupling {g} is {span}, expected {reference}"
        );
    }
}

#[test]
fn closeness_metric_separates_exact_from_draft_spectrum() {
    let exact = golden_closeness(&normalized_magnitudes(&EXACT_EIGENVALUES));
    let draft = golden_closeness(&normalized_magnitudes(&DRAFT_EIGENVALUES));
    assert!(
        exact < tolerances::GOLDEN_CLOSENESS_MAX,
        "exact spectrum should sit inside the closeness threshold, got {exact:.4}"
    );
    assert!(
        draft > tolerances::GOLDEN_CLOSENESS_MAX,
        "draft spectrum should sit outside the closeness threshold, got {draft:.4}"
    );
}

#[test]
fn pipeline_is_bitwise_deterministic() {
    let a = mass_spectrum([10, 6, 0], 1.0);
    let b = mass_spectrum([10, 6, 0], 1.0);
    for i in 0..3 {
        assert_eq!(
            a[i].to_bits(),
            b[i].to_bits(),
            "mass spectrum must be deterministic at index {i}"
        );
    }

    let e1 = sorted_eigen(&golden_matrix());
    let e2 = sorted_eigen(&golden_matrix());
    for i in 0..3 {
        assert_eq!(
            e1.values[i].to_bits(),
            e2.values[i].to_bits(),
            "eigensolve must be deterministic at index {i}"
        );
    }
}

#[test]
fn tolerance_ladder_is_ordered() {
    assert!(
        tolerances::EXACT_F64 < tolerances::PAPER_TEXT_ABS,
        "machine precision < paper text"
    );
    assert!(
        tolerances::PAPER_TEXT_ABS < tolerances::GOLDEN_HIERARCHY_REL,
        "paper text < hierarchy"
    );
    assert!(
        tolerances::GOLDEN_HIERARCHY_REL < tolerances::TABLE2_RATIO_REL,
        "hierarchy < Table 2"
    );
}

#[test]
fn weight_guard_rejects_sub_threshold_weights() {
    assert!(forms::weight_suppression(0).is_err());
    assert!(forms::weight_suppression(1).is_err());
    assert!(forms::weight_suppression(2).is_ok());
    let s = forms::weight_suppression(6).expect("k=6 is valid");
    assert!(
        (s - PHI_INV2).abs() < tolerances::EXACT_F64,
        "k=6 suppression should be φ⁻², got {s}"
    );
}
