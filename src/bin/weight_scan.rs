// SPDX-License-Identifier: AGPL-3.0-only

//! Weight-pattern burst scanner: hierarchy sweep across integer modular weights.
//!
//! Enumerates weight assignments (k₁, k₂, 0) with k₁ ≥ k₂ on an even grid,
//! computes the mass spectrum of each pattern in parallel, and aggregates
//! the normalized ratios and hierarchy spans into a JSONL table. The rows
//! with the widest spans are summarized on stdout and saved as JSON.
//!
//! Table 2 of the manuscript is the four-row slice of this scan at
//! (6,4,0), (8,4,0), (10,6,0), and (4,2,0).
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin weight_scan
//! cargo run --release --bin weight_scan -- --k-max=20 --step=2 --top=10
//! cargo run --release --bin weight_scan -- --output=results/scan.jsonl
//! ```

use goldenpoint::eigen::normalized_magnitudes;
use goldenpoint::report;
use goldenpoint::yukawa::{hierarchy_span, mass_spectrum};
use rayon::prelude::*;
use std::io::Write;
use std::time::Instant;

struct CliArgs {
    k_max: u32,
    step: usize,
    coupling: f64,
    top: usize,
    output: String,
}

fn parse_args() -> CliArgs {
    let mut k_max = 12u32;
    let mut step = 2usize;
    let mut coupling = 1.0f64;
    let mut top = 5usize;
    let mut output = String::from("results/weight_scan.jsonl");

    for arg in std::env::args().skip(1) {
        if let Some(val) = arg.strip_prefix("--k-max=") {
            k_max = val.parse().expect("--k-max=N");
        } else if let Some(val) = arg.strip_prefix("--step=") {
            step = val.parse().expect("--step=N");
        } else if let Some(val) = arg.strip_prefix("--coupling=") {
            coupling = val.parse().expect("--coupling=F");
        } else if let Some(val) = arg.strip_prefix("--top=") {
            top = val.parse().expect("--top=N");
        } else if let Some(val) = arg.strip_prefix("--output=") {
            output = val.to_string();
        }
    }

    CliArgs {
        k_max,
        step,
        coupling,
        top,
        output,
    }
}

/// One scanned weight assignment, in JSONL column order.
#[derive(serde::Serialize)]
struct ScanRow {
    k1: u32,
    k2: u32,
    k3: u32,
    ratio_2: f64,
    ratio_3: f64,
    span_orders: f64,
}

fn scan_pattern(weights: [u32; 3], coupling: f64) -> ScanRow {
    let masses = mass_spectrum(weights, coupling);
    let ratios = normalized_magnitudes(&masses);
    ScanRow {
        k1: weights[0],
        k2: weights[1],
        k3: weights[2],
        ratio_2: ratios[1],
        ratio_3: ratios[2],
        span_orders: hierarchy_span(&masses),
    }
}

fn main() {
    let args = parse_args();
    // step_by(0) panics
    let step = args.step.max(1);

    let mut combos: Vec<[u32; 3]> = Vec::new();
    for k1 in (0..=args.k_max).step_by(step) {
        for k2 in (0..=k1).step_by(step) {
            combos.push([k1, k2, 0]);
        }
    }

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Weight-Pattern Scanner — Hierarchies from Modular Weights   ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("  k grid: 0..={} step {step} (k₁ ≥ k₂, k₃ = 0)", args.k_max);
    println!("  Coupling: {}", args.coupling);
    println!("  Combinations: {}", combos.len());
    println!("  Output: {}", args.output);
    println!();

    let t_start = Instant::now();

    let rows: Vec<ScanRow> = combos
        .par_iter()
        .map(|&weights| scan_pattern(weights, args.coupling))
        .collect();

    if let Some(parent) = std::path::Path::new(&args.output).parent() {
        std::fs::create_dir_all(parent).ok();
    }
    let mut out_file = std::io::BufWriter::new(
        std::fs::File::create(&args.output)
            .unwrap_or_else(|e| panic!("Cannot create {}: {e}", args.output)),
    );
    for row in &rows {
        if let Ok(line) = serde_json::to_string(row) {
            writeln!(out_file, "{line}").ok();
        }
    }
    out_file.flush().ok();

    let mut by_span: Vec<&ScanRow> = rows.iter().collect();
    by_span.sort_by(|a, b| b.span_orders.total_cmp(&a.span_orders));

    println!("── Widest hierarchies ──");
    for row in by_span.iter().take(args.top) {
        println!(
            "  ({:>2}, {:>2}, {}): 1 : {:.3} : {:.3}  span {:.2} orders",
            row.k1, row.k2, row.k3, row.ratio_2, row.ratio_3, row.span_orders
        );
    }
    println!();

    let top_rows: Vec<&ScanRow> = by_span.iter().take(args.top).copied().collect();
    let summary = serde_json::json!({
        "k_max": args.k_max,
        "step": step,
        "coupling": args.coupling,
        "rows": top_rows,
    });
    match report::save_json_to_results("weight_scan_top.json", &summary) {
        Ok(path) => println!("  Top patterns → {}", path.display()),
        Err(e) => eprintln!("  warning: top-pattern summary not written: {e}"),
    }

    let wall = t_start.elapsed().as_secs_f64();
    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!("  Scan complete: {} rows in {wall:.2}s", rows.len());
    println!("  Output: {}", args.output);
    println!("═══════════════════════════════════════════════════════════");
}
