// SPDX-License-Identifier: AGPL-3.0-only

//! Golden Point Verification — A5 Modular Flavor Symmetry
//!
//! Re-derives every numerical claim in the manuscript from first principles
//! and checks it against the published values:
//!
//! | Section | Claim | Tolerance |
//! |---------|-------|-----------|
//! | [1] | τ₀ = e^{2πi/5} is a unit-modulus fifth root of unity | `EXACT_F64` |
//! | [2] | Theorem 1: Y(τ₀) ∝ (1, φ⁻¹, φ⁻², −φ⁻², −φ⁻¹) | `EXACT_F64` |
//! | [3] | Corollary 2: component sums ±1 from φ⁻¹ + φ⁻² = 1 | `EXACT_F64` |
//! | [4] | Stabilizer: Y₁ + Y₄ + Y₅ = 0 at the fixed point | `EXACT_F64` |
//! | [5] | Weight suppression φ^{−(k−2)/2} for k = 2..10 | `EXACT_F64` |
//! | [6] | M₀ entries, exact symmetry, vanishing trace | `EXACT_F64` |
//! | [7] | Eigenvalues (−1.564, 0.993, 0.571) | `EXACT_F64`, `PAPER_TEXT_ABS` |
//! | [8] | Hierarchy 1 : φ⁻¹ : φ⁻² within 5% | `GOLDEN_HIERARCHY_REL` |
//! | [9] | Table 2 benchmark weight patterns | `TABLE2_RATIO_REL` |
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin verify_results                    # all sections
//! cargo run --release --bin verify_results -- --eigenvalues   # one section
//! cargo run --release --bin verify_results -- --all --json=results/verify.json
//! ```
//!
//! Section flags combine (`--matrix --hierarchy` runs both); no section flag
//! means run everything. Exit code 0 if every check passes, 1 otherwise.

use goldenpoint::complex::Complex64;
use goldenpoint::constants::{PHI, PHI_INV, PHI_INV2, SQRT_3, TAU_0_ARG};
use goldenpoint::eigen::{normalized_magnitudes, sorted_eigen};
use goldenpoint::forms;
use goldenpoint::provenance::{
    EXACT_EIGENVALUES, PAPER_EIGENVALUES_8DP, PAPER_REFERENCE, TABLE2_PATTERNS,
};
use goldenpoint::report;
use goldenpoint::tolerances::{EXACT_F64, GOLDEN_HIERARCHY_REL, PAPER_TEXT_ABS, TABLE2_RATIO_REL};
use goldenpoint::validation::ValidationHarness;
use goldenpoint::yukawa::{golden_matrix, hierarchy_span, mass_spectrum};
use std::path::Path;

struct CliArgs {
    theorem1: bool,
    matrix: bool,
    eigenvalues: bool,
    hierarchy: bool,
    quiet: bool,
    json: Option<String>,
}

fn parse_args() -> CliArgs {
    let mut theorem1 = false;
    let mut matrix = false;
    let mut eigenvalues = false;
    let mut hierarchy = false;
    let mut all = false;
    let mut quiet = false;
    let mut json = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--theorem1" => theorem1 = true,
            "--matrix" => matrix = true,
            "--eigenvalues" => eigenvalues = true,
            "--hierarchy" => hierarchy = true,
            "--all" => all = true,
            "--quiet" => quiet = true,
            other => {
                if let Some(path) = other.strip_prefix("--json=") {
                    json = Some(path.to_string());
                }
            }
        }
    }

    // No section flag selects everything, as does --all.
    if all || !(theorem1 || matrix || eigenvalues || hierarchy) {
        theorem1 = true;
        matrix = true;
        eigenvalues = true;
        hierarchy = true;
    }

    CliArgs {
        theorem1,
        matrix,
        eigenvalues,
        hierarchy,
        quiet,
        json,
    }
}

fn main() {
    let args = parse_args();

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Golden Point Verification — A5 Modular Flavor Symmetry      ║");
    println!("║  Exact spectrum, golden hierarchy, Table 2 benchmarks        ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("  Reference: {PAPER_REFERENCE}");
    println!();

    let mut harness = if args.quiet {
        ValidationHarness::quiet("verify_results")
    } else {
        ValidationHarness::new("verify_results")
    };

    if args.theorem1 {
        check_golden_point(&mut harness);
        check_theorem1_ratios(&mut harness);
        check_corollary2(&mut harness);
        check_stabilizer(&mut harness);
        check_weight_suppression(&mut harness);
    }
    if args.matrix {
        check_golden_matrix(&mut harness);
    }
    if args.eigenvalues {
        check_eigenvalues(&mut harness);
    }
    if args.hierarchy {
        check_golden_hierarchy(&mut harness);
        check_table2_patterns(&mut harness);
    }

    if let Some(path) = &args.json {
        match report::write_json(Path::new(path), &harness.to_json()) {
            Ok(()) => println!("  JSON report → {path}"),
            Err(e) => eprintln!("  warning: JSON report not written: {e}"),
        }
    }

    harness.finish();
}

/// τ₀ = e^{2πi/5}: primitive fifth root of unity in the upper half-plane.
fn check_golden_point(harness: &mut ValidationHarness) {
    let tau = forms::tau_0();
    let fifth = tau * tau * tau * tau * tau;
    let fifth_err = (fifth - Complex64::ONE).abs();

    // All five powers of ζ₅ sum to zero (geometric series).
    let mut root_sum = Complex64::ZERO;
    for k in 0..5 {
        root_sum += Complex64::from_polar(f64::from(k) * TAU_0_ARG);
    }

    if harness.verbose {
        println!("[1] Golden Point τ₀ = e^{{2πi/5}}");
        println!("  τ₀ = {:.15} + {:.15}i", tau.re, tau.im);
        println!("  |τ₀| = {:.15}", tau.abs());
        println!("  |τ₀⁵ − 1| = {fifth_err:.2e}");
        println!("  |Σₖ ζ₅ᵏ| = {:.2e}", root_sum.abs());
        println!();
    }

    harness.check_abs("Re τ₀ = (√5−1)/4", tau.re, PHI_INV / 2.0, EXACT_F64);
    harness.check_lower("Im τ₀ > 0 (upper half-plane)", tau.im, 0.0);
    harness.check_abs("|τ₀| = 1", tau.abs(), 1.0, EXACT_F64);
    harness.check_upper("τ₀⁵ returns to 1", fifth_err, EXACT_F64);
    harness.check_upper("fifth roots sum to zero", root_sum.abs(), EXACT_F64);
}

/// Theorem 1: the weight-2 quintet at τ₀ has ratios (1, φ⁻¹, φ⁻², −φ⁻², −φ⁻¹).
fn check_theorem1_ratios(harness: &mut ValidationHarness) {
    let y = forms::y_ratios();
    let expected = [1.0, PHI_INV, PHI_INV2, -PHI_INV2, -PHI_INV];

    let max_err = y
        .iter()
        .zip(expected.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0_f64, f64::max);

    if harness.verbose {
        println!("[2] Theorem 1 — Quintet Ratios at τ₀");
        println!("    Y(τ₀) ∝ (1, φ⁻¹, φ⁻², −φ⁻², −φ⁻¹)");
        println!();
        println!("  φ   = {PHI:.15}");
        println!("  φ⁻¹ = {PHI_INV:.15}");
        println!("  φ⁻² = {PHI_INV2:.15}");
        for (i, (obs, exp)) in y.iter().zip(expected.iter()).enumerate() {
            println!("  Y_{}/Y_1 = {obs:>12.9}  (expected {exp:>12.9})", i + 1);
        }
        println!();
    }

    harness.check_upper("Theorem 1: max |Y/Y₁ − golden ratio power|", max_err, EXACT_F64);
}

/// Corollary 2: φ⁻¹ + φ⁻² = 1 forces the component sums Y₂+Y₃ = 1, Y₄+Y₅ = −1.
fn check_corollary2(harness: &mut ValidationHarness) {
    let y = forms::y_ratios();
    let positive_sum = y[1] + y[2];
    let negative_sum = y[3] + y[4];

    if harness.verbose {
        println!("[3] Corollary 2 — Golden Ratio Identity");
        println!("  Y₂ + Y₃ = {positive_sum:.15}  (φ⁻¹ + φ⁻² = 1)");
        println!("  Y₄ + Y₅ = {negative_sum:.15}");
        println!();
    }

    harness.check_abs("Y₂ + Y₃ = 1", positive_sum, 1.0, EXACT_F64);
    harness.check_abs("Y₄ + Y₅ = −1", negative_sum, -1.0, EXACT_F64);
}

/// The residual ℤ₅ stabilizer at τ₀ forces Y₁ + Y₄ + Y₅ = 0.
fn check_stabilizer(harness: &mut ValidationHarness) {
    let y = forms::y_ratios();
    let residual = y[0] + y[3] + y[4];

    if harness.verbose {
        println!("[4] Stabilizer Condition at the Fixed Point");
        println!("  Y₁ + Y₄ + Y₅ = {residual:.2e}  (ℤ₅ stabilizer direction)");
        println!();
    }

    harness.check_bool("stabilizer condition Y₁ + Y₄ + Y₅ = 0", forms::stabilizer_fixed());
}

/// Modular weight k suppresses couplings by φ^{−(k−2)/2}.
fn check_weight_suppression(harness: &mut ValidationHarness) {
    let expected: [(u32, f64); 5] = [
        (2, 1.0),
        (4, PHI_INV),
        (6, PHI_INV2),
        (8, PHI_INV2 * PHI_INV),
        (10, PHI_INV2 * PHI_INV2),
    ];

    if harness.verbose {
        println!("[5] Weight Suppression φ^{{−(k−2)/2}}");
        for &(k, exp) in &expected {
            let s = forms::weight_suppression(k).unwrap_or(f64::NAN);
            println!("  k = {k:>2}: {s:.15}  (expected {exp:.15})");
        }
        println!();
    }

    for &(k, exp) in &expected {
        let s = forms::weight_suppression(k).unwrap_or(f64::NAN);
        harness.check_abs(&format!("suppression at k = {k}"), s, exp, EXACT_F64);
    }

    let rejects_invalid =
        forms::weight_suppression(0).is_err() && forms::weight_suppression(1).is_err();
    harness.check_bool("weights below 2 rejected", rejects_invalid);
}

/// M₀ entries match the closed forms of Section 3.2; symmetric, traceless.
fn check_golden_matrix(harness: &mut ValidationHarness) {
    let m = golden_matrix();

    // Closed-form entries from the quintet contractions.
    let entries: [(&str, f64, f64); 6] = [
        ("M₁₁ = −2/√3", m[(0, 0)], -2.0 / SQRT_3),
        ("M₁₂ = −1/√3", m[(0, 1)], -1.0 / SQRT_3),
        ("M₁₃ = −φ⁻¹", m[(0, 2)], -PHI_INV),
        ("M₂₂ = 2φ⁻¹/√3", m[(1, 1)], 2.0 * PHI_INV / SQRT_3),
        ("M₂₃ = −φ⁻²", m[(1, 2)], -PHI_INV2),
        ("M₃₃ = 2φ⁻²/√3", m[(2, 2)], 2.0 * PHI_INV2 / SQRT_3),
    ];

    if harness.verbose {
        println!("[6] Golden Yukawa Matrix M₀");
        println!("  M₀ =");
        for i in 0..3 {
            println!(
                "    [{:>12.8} {:>12.8} {:>12.8}]",
                m[(i, 0)],
                m[(i, 1)],
                m[(i, 2)]
            );
        }
        println!("  Tr M₀ = {:.2e}", m.trace());
        println!();
    }

    harness.check_bool("M₀ symmetric (exact)", m == m.transpose());
    for (label, observed, expected) in entries {
        harness.check_abs(label, observed, expected, EXACT_F64);
    }
    harness.check_upper("|Tr M₀| vanishes", m.trace().abs(), EXACT_F64);
}

/// Eigenvalues of M₀ against the exact spectrum and the paper's 8-decimal text.
fn check_eigenvalues(harness: &mut ValidationHarness) {
    let pairs = sorted_eigen(&golden_matrix());

    if harness.verbose {
        println!("[7] Eigenvalues of M₀ (descending |λ|)");
        for (i, (lam, paper)) in pairs
            .values
            .iter()
            .zip(PAPER_EIGENVALUES_8DP.iter())
            .enumerate()
        {
            println!("  λ_{} = {lam:>14.10}  (paper {paper:>12.8})", i + 1);
        }
        println!();
    }

    let labels = ["λ₁ (dominant)", "λ₂", "λ₃"];
    for i in 0..3 {
        harness.check_abs(labels[i], pairs.values[i], EXACT_EIGENVALUES[i], EXACT_F64);
    }

    let max_paper_err = pairs
        .values
        .iter()
        .zip(PAPER_EIGENVALUES_8DP.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0_f64, f64::max);
    harness.check_upper("max |λ − paper 8dp|", max_paper_err, PAPER_TEXT_ABS);
}

/// Normalized eigenvalue magnitudes approximate 1 : φ⁻¹ : φ⁻² within 5%.
fn check_golden_hierarchy(harness: &mut ValidationHarness) {
    let pairs = sorted_eigen(&golden_matrix());
    let mags = normalized_magnitudes(&pairs.values);

    if harness.verbose {
        println!("[8] Golden Hierarchy of |λ|");
        println!(
            "  observed: 1.000 : {:.3} : {:.3}",
            mags[1], mags[2]
        );
        println!("  golden:   1.000 : {PHI_INV:.3} : {PHI_INV2:.3}");
        println!(
            "  rel errors: {:.2}%, {:.2}%",
            100.0 * ((mags[1] - PHI_INV) / PHI_INV).abs(),
            100.0 * ((mags[2] - PHI_INV2) / PHI_INV2).abs()
        );
        println!();
    }

    harness.check_rel("|λ₂/λ₁| vs φ⁻¹", mags[1], PHI_INV, GOLDEN_HIERARCHY_REL);
    harness.check_rel("|λ₃/λ₁| vs φ⁻²", mags[2], PHI_INV2, GOLDEN_HIERARCHY_REL);
}

/// Table 2: benchmark weight patterns reproduce the published ratios and spans.
fn check_table2_patterns(harness: &mut ValidationHarness) {
    if harness.verbose {
        println!("[9] Table 2 — Benchmark Weight Patterns");
    }

    for pattern in TABLE2_PATTERNS {
        let [k1, k2, k3] = pattern.weights;
        let masses = mass_spectrum(pattern.weights, 1.0);
        let mags = normalized_magnitudes(&masses);
        let span = hierarchy_span(&masses);

        if harness.verbose {
            println!(
                "  ({k1}, {k2}, {k3}): 1 : {:.3} : {:.3}, span {span:.2} orders  \
                 (paper 1 : {:.3} : {:.3}, ~{:.1})",
                mags[1], mags[2], pattern.ratios[1], pattern.ratios[2], pattern.span_orders
            );
        }

        let tag = format!("({k1},{k2},{k3})");
        harness.check_rel(&format!("{tag} m₂/m₁"), mags[1], pattern.ratios[1], TABLE2_RATIO_REL);
        harness.check_rel(&format!("{tag} m₃/m₁"), mags[2], pattern.ratios[2], TABLE2_RATIO_REL);
        harness.check_rel(
            &format!("{tag} span (orders)"),
            span,
            pattern.span_orders,
            TABLE2_RATIO_REL,
        );
    }

    if harness.verbose {
        println!();
    }
}
