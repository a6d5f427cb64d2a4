// SPDX-License-Identifier: AGPL-3.0-only

//! Post-install sanity probe: confirms the golden-point machinery works.
//!
//! Runs a handful of fast self-contained checks (golden algebra, matrix
//! construction, eigensolve, harness plumbing) and prints one ✓/✗ line per
//! probe. Unlike `verify_results` this does not validate the manuscript,
//! it only confirms the crate is operational.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin selfcheck
//! ```

use goldenpoint::constants::{PHI, PHI_INV, PHI_INV2};
use goldenpoint::eigen::sorted_eigen;
use goldenpoint::forms;
use goldenpoint::tolerances::EXACT_F64;
use goldenpoint::validation::ValidationHarness;
use goldenpoint::yukawa::golden_matrix;
use std::process;

fn probe(name: &str, ok: bool) -> bool {
    let icon = if ok { "✓" } else { "✗" };
    println!("  {icon} {name}");
    ok
}

fn main() {
    println!("═══════════════════════════════════════════════════════════");
    println!("  goldenpoint self-check");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    let mut all = true;

    println!("Golden algebra:");
    all &= probe("φ satisfies φ² = φ + 1", (PHI * PHI - PHI - 1.0).abs() < EXACT_F64);
    all &= probe("φ⁻¹ + φ⁻² = 1", (PHI_INV + PHI_INV2 - 1.0).abs() < EXACT_F64);
    let y = forms::y_ratios();
    let expected = [1.0, PHI_INV, PHI_INV2, -PHI_INV2, -PHI_INV];
    let y_ok = y
        .iter()
        .zip(expected.iter())
        .all(|(a, b)| (a - b).abs() < EXACT_F64);
    all &= probe("quintet ratios at τ₀", y_ok);
    println!();

    println!("Matrix construction:");
    let m = golden_matrix();
    all &= probe("M₀ symmetric", m == m.transpose());
    let pairs = sorted_eigen(&m);
    all &= probe(
        "three finite eigenvalues",
        pairs.values.iter().all(|v| v.is_finite()),
    );
    all &= probe(
        "spectrum sorted by |λ|",
        pairs.values[0].abs() >= pairs.values[1].abs()
            && pairs.values[1].abs() >= pairs.values[2].abs(),
    );
    println!();

    println!("Harness and guards:");
    let mut h = ValidationHarness::quiet("selfcheck_probe");
    h.check_abs("unity", 1.0, 1.0, EXACT_F64);
    all &= probe("validation harness operational", h.all_passed());
    all &= probe(
        "weight guard rejects k < 2",
        forms::weight_suppression(1).is_err() && forms::weight_suppression(4).is_ok(),
    );
    println!();

    println!("═══════════════════════════════════════════════════════════");
    if all {
        println!("  ✓ ALL TESTS PASSED");
        println!();
        println!("  Next steps:");
        println!("    cargo run --release --bin verify_results -- --all");
        println!("    cargo run --release --bin weight_scan");
        println!("═══════════════════════════════════════════════════════════");
    } else {
        println!("  ✗ SOME TESTS FAILED");
        println!("═══════════════════════════════════════════════════════════");
        process::exit(1);
    }
}
