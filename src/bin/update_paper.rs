// SPDX-License-Identifier: AGPL-3.0-only

//! Rewrites the numerical passages of the LaTeX manuscript in place.
//!
//! Reads the paper source, splices the recomputed eigenvalue equation,
//! ratio line, Table 2, and numerical appendix over the existing passages,
//! and writes the result to a new file. Passages that cannot be located
//! are left untouched and reported; the input file is never modified.
//!
//! Every splice is idempotent: running the updater on its own output is a
//! byte-for-byte no-op.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin update_paper
//! cargo run --release --bin update_paper -- --input=draft.tex --output=draft_v2.tex
//! ```

use goldenpoint::eigen::sorted_eigen;
use goldenpoint::latex::{
    numerical_appendix, replace_eigenvalue_equation, replace_hierarchy_table, replace_ratio_line,
    upsert_numerical_appendix,
};
use goldenpoint::yukawa::golden_matrix;
use std::fs;
use std::process;

struct CliArgs {
    input: String,
    output: String,
}

fn parse_args() -> CliArgs {
    let mut input = String::from("main.tex");
    let mut output = String::from("main_corrected.tex");

    for arg in std::env::args().skip(1) {
        if let Some(val) = arg.strip_prefix("--input=") {
            input = val.to_string();
        } else if let Some(val) = arg.strip_prefix("--output=") {
            output = val.to_string();
        }
    }

    CliArgs { input, output }
}

fn main() {
    let args = parse_args();

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Paper Updater — Splice Recomputed Values into LaTeX         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    println!("[1/5] Reading {}", args.input);
    let tex = match fs::read_to_string(&args.input) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("ERROR: could not read {}: {e}", args.input);
            if let Ok(cwd) = std::env::current_dir() {
                eprintln!("  working directory: {}", cwd.display());
            }
            if let Ok(entries) = fs::read_dir(".") {
                let mut names: Vec<String> = entries
                    .filter_map(Result::ok)
                    .map(|ent| ent.file_name().to_string_lossy().into_owned())
                    .filter(|n| n.ends_with(".tex"))
                    .collect();
                names.sort();
                if names.is_empty() {
                    eprintln!("  no .tex files in the working directory");
                } else {
                    eprintln!("  .tex files here: {}", names.join(", "));
                }
            }
            process::exit(1);
        }
    };
    println!("      ✓ {} bytes", tex.len());

    let spectrum = sorted_eigen(&golden_matrix()).values;

    println!("[2/5] Updating eigenvalue equation and ratio line");
    let mut updated = replace_eigenvalue_equation(&tex, &spectrum);
    if updated == tex {
        println!("      eigenvalue equation not found, unchanged");
    } else {
        println!("      ✓ eigenvalue equation");
    }
    let before_ratio = updated.clone();
    updated = replace_ratio_line(&updated, &spectrum);
    if updated == before_ratio {
        println!("      ratio line not found, unchanged");
    } else {
        println!("      ✓ ratio line");
    }

    println!("[3/5] Updating Table 2");
    let before_table = updated.clone();
    updated = replace_hierarchy_table(&updated);
    if updated == before_table {
        println!("      no table environment found, unchanged");
    } else {
        println!("      ✓ Table 2");
    }

    println!("[4/5] Upserting numerical appendix");
    let before_appendix = updated.clone();
    updated = upsert_numerical_appendix(&updated, &numerical_appendix(&spectrum));
    if updated == before_appendix {
        println!("      appendix already current or no insertion point, unchanged");
    } else {
        println!("      ✓ numerical appendix");
    }

    println!("[5/5] Writing {}", args.output);
    if let Err(e) = fs::write(&args.output, &updated) {
        eprintln!("ERROR: could not write {}: {e}", args.output);
        process::exit(1);
    }
    println!("      ✓ {} bytes", updated.len());

    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!("  Updated manuscript written to {}", args.output);
    println!("  Compile it with your usual LaTeX toolchain, then rerun");
    println!("  verify_results --all against the final text.");
    println!("═══════════════════════════════════════════════════════════");
}
