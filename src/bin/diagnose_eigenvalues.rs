// SPDX-License-Identifier: AGPL-3.0-only

//! Eigenvalue discrepancy diagnostic for the golden Yukawa matrix.
//!
//! An early draft of the manuscript quoted λ ≈ (−1.4571, 0.3820, 0.2361)
//! for M₀; direct diagonalization gives (−1.5643, 0.9933, 0.5710). This
//! binary recomputes the spectrum, prints both sets side by side, and
//! scores each against the golden target 1 : φ⁻¹ : φ⁻² so the verdict is
//! mechanical rather than argued: the recomputed spectrum sits within the
//! closeness threshold, the draft numbers do not.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin diagnose_eigenvalues
//! ```
//!
//! Exit code 0 when the recomputed spectrum is the golden one.

use goldenpoint::constants::{PHI, PHI_INV, PHI_INV2};
use goldenpoint::eigen::{golden_closeness, normalized_magnitudes, sorted_eigen};
use goldenpoint::provenance::{DRAFT_EIGENVALUES, EXACT_EIGENVALUES};
use goldenpoint::tolerances::{EXACT_F64, GOLDEN_CLOSENESS_MAX};
use goldenpoint::validation::ValidationHarness;
use goldenpoint::yukawa::golden_matrix;

fn main() {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Eigenvalue Diagnostic — Draft vs Recomputed Spectrum        ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    println!("[1] Golden Ratio Constants");
    println!("  φ   = {PHI:.10}");
    println!("  φ⁻¹ = {PHI_INV:.10}");
    println!("  φ⁻² = {PHI_INV2:.10}");
    println!();

    let pairs = sorted_eigen(&golden_matrix());
    println!("[2] Recomputed Spectrum of M₀ (descending |λ|)");
    for (i, lam) in pairs.values.iter().enumerate() {
        println!("  λ_{} = {lam:>10.6}", i + 1);
    }
    println!();

    println!("[3] Draft Manuscript Values (superseded)");
    for (i, lam) in DRAFT_EIGENVALUES.iter().enumerate() {
        println!("  λ_{} = {lam:>10.6}", i + 1);
    }
    println!();

    let computed = normalized_magnitudes(&pairs.values);
    let draft = normalized_magnitudes(&DRAFT_EIGENVALUES);
    println!("[4] Normalized |λ| Against the Golden Target");
    println!("  golden:     1.000 : {PHI_INV:.3} : {PHI_INV2:.3}");
    println!("  recomputed: 1.000 : {:.3} : {:.3}", computed[1], computed[2]);
    println!("  draft:      1.000 : {:.3} : {:.3}", draft[1], draft[2]);
    println!();

    let computed_score = golden_closeness(&computed);
    let draft_score = golden_closeness(&draft);
    println!("[5] Mean Deviation from (1, φ⁻¹, φ⁻²)");
    println!("  recomputed: {computed_score:.4}");
    println!("  draft:      {draft_score:.4}");
    println!("  threshold:  {GOLDEN_CLOSENESS_MAX:.4}");
    if computed_score < GOLDEN_CLOSENESS_MAX && draft_score > GOLDEN_CLOSENESS_MAX {
        println!("  verdict: recomputed spectrum is golden, draft values are not");
    } else {
        println!("  verdict: closeness scores do not separate, inspect above");
    }
    println!();

    let mut harness = ValidationHarness::new("diagnose_eigenvalues");
    harness.check_abs("λ₁ (dominant)", pairs.values[0], EXACT_EIGENVALUES[0], EXACT_F64);
    harness.check_abs("λ₂", pairs.values[1], EXACT_EIGENVALUES[1], EXACT_F64);
    harness.check_abs("λ₃", pairs.values[2], EXACT_EIGENVALUES[2], EXACT_F64);
    harness.check_upper(
        "recomputed spectrum near golden hierarchy",
        computed_score,
        GOLDEN_CLOSENESS_MAX,
    );
    harness.check_lower(
        "draft spectrum away from golden hierarchy",
        draft_score,
        GOLDEN_CLOSENESS_MAX,
    );
    harness.finish();
}
