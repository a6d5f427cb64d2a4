// SPDX-License-Identifier: AGPL-3.0-only

//! Regenerates every numerical passage of the manuscript as a corrections file.
//!
//! Produces `PAPER_CORRECTIONS.txt` with the eigenvalue subsection, the
//! Table 2 hierarchy table, and the numerical appendix, each recomputed
//! from the code and framed with copy-paste instructions. The document is
//! echoed to stdout for review. For in-place editing of the LaTeX source
//! use `update_paper` instead.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin generate_corrections
//! cargo run --release --bin generate_corrections -- --output=fixes.txt
//! ```

use goldenpoint::eigen::sorted_eigen;
use goldenpoint::latex;
use goldenpoint::yukawa::golden_matrix;
use std::process;

fn main() {
    let mut output = String::from("PAPER_CORRECTIONS.txt");
    for arg in std::env::args().skip(1) {
        if let Some(val) = arg.strip_prefix("--output=") {
            output = val.to_string();
        }
    }

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Paper Corrections Generator                                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    println!("[1/3] Recomputing the spectrum of M₀");
    let spectrum = sorted_eigen(&golden_matrix()).values;
    println!(
        "      λ = ({:.6}, {:.6}, {:.6})",
        spectrum[0], spectrum[1], spectrum[2]
    );

    println!("[2/3] Rendering corrected LaTeX passages");
    let doc = latex::corrections_document();
    println!();
    println!("{doc}");

    println!("[3/3] Writing {output}");
    if let Err(e) = std::fs::write(&output, &doc) {
        eprintln!("ERROR: could not write {output}: {e}");
        process::exit(1);
    }

    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!("  Corrections written to {output}");
    println!("  Paste each block into the manuscript, then rerun");
    println!("  verify_results --all to confirm every check passes.");
    println!("═══════════════════════════════════════════════════════════");
}
