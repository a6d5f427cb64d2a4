// SPDX-License-Identifier: AGPL-3.0-only

//! Integration tests: LaTeX regeneration pipeline on a realistic manuscript.
//!
//! Drives the same operation sequence as the `update_paper` binary over a
//! miniature paper containing every passage the updater knows about, and
//! checks the corrections document against the live spectrum.

use goldenpoint::eigen::sorted_eigen;
use goldenpoint::latex::{
    corrections_document, hierarchy_table, numerical_appendix, replace_eigenvalue_equation,
    replace_hierarchy_table, replace_ratio_line, upsert_numerical_appendix,
};
use goldenpoint::yukawa::golden_matrix;

/// Miniature manuscript with the draft (superseded) numbers in place.
fn sample_manuscript() -> String {
    String::from(
        r"\documentclass{article}
\begin{document}
\section{The Golden Point}
The fixed point sits at $\tau_0 = e^{2\pi i/5}$.

\section{Mass Matrix}
Diagonalization gives
\begin{equation}
\lambda_1 \approx -1.4571, \quad \lambda_2 \approx 0.3820, \quad \lambda_3 \approx 0.2361.
\end{equation}
The magnitudes satisfy
\begin{equation}
|\lambda_1| : |\lambda_2| : |\lambda_3| \approx 1 : 0.262 : 0.162 \approx 1 : \phi^{-1} : \phi^{-2},
\end{equation}

\section{Hierarchies}
\begin{table}[h]
\centering
\caption{Stale hierarchy table}
\begin{tabular}{cc}
old & rows \\
\end{tabular}
\end{table}
as shown above.
\end{document}
",
    )
}

/// The operation sequence of the `update_paper` binary.
fn run_update_pipeline(tex: &str) -> String {
    let spectrum = sorted_eigen(&golden_matrix()).values;
    let out = replace_eigenvalue_equation(tex, &spectrum);
    let out = replace_ratio_line(&out, &spectrum);
    let out = replace_hierarchy_table(&out);
    upsert_numerical_appendix(&out, &numerical_appendix(&spectrum))
}

#[test]
fn full_update_pipeline_rewrites_every_passage() {
    let updated = run_update_pipeline(&sample_manuscript());

    assert!(
        updated.contains("\\lambda_1 \\approx -1.564"),
        "eigenvalue equation should carry the recomputed λ₁"
    );
    assert!(updated.contains("\\lambda_2 \\approx 0.993"));
    assert!(updated.contains("\\lambda_3 \\approx 0.571."));
    assert!(
        updated.contains("1 : 0.635 : 0.365 \\approx 1 : \\phi^{-1} : \\phi^{-2}"),
        "ratio line should carry the recomputed magnitudes"
    );
    assert!(
        updated.contains("(6, 4, 0) & $\\phi^{-6} : \\phi^{-4} : \\phi^{-0}$"),
        "Table 2 should list the benchmark patterns"
    );
    assert!(
        updated.contains("\\section{Numerical Values at $\\tau_0$}"),
        "numerical appendix should be inserted"
    );

    assert!(!updated.contains("1.4571"), "draft λ₁ must not survive");
    assert!(!updated.contains("0.2361"), "draft λ₃ must not survive");
    assert!(!updated.contains("old & rows"), "stale table must not survive");
}

#[test]
fn update_pipeline_is_idempotent() {
    let once = run_update_pipeline(&sample_manuscript());
    let twice = run_update_pipeline(&once);
    assert_eq!(once, twice, "second update pass must be a byte-level no-op");
}

#[test]
fn appendix_lands_before_end_document() {
    let updated = run_update_pipeline(&sample_manuscript());
    let appendix_at = updated
        .find("\\section{Numerical Values at $\\tau_0$}")
        .expect("appendix present");
    let end_at = updated.find("\\end{document}").expect("document terminator");
    assert!(
        appendix_at < end_at,
        "appendix must sit inside the document body"
    );
}

#[test]
fn pattern_free_text_passes_through_untouched() {
    let tex = "A short note with no equations and no terminator.";
    assert_eq!(run_update_pipeline(tex), tex);
}

#[test]
fn anchored_passages_update_even_without_end_document() {
    let tex = "\\lambda_1 \\approx -1.4571, \\quad \\lambda_2 \\approx 0.3820, \
               \\quad \\lambda_3 \\approx 0.2361. No terminator here.";
    let updated = run_update_pipeline(tex);
    assert!(updated.contains("\\lambda_1 \\approx -1.564"));
    assert!(
        !updated.contains("Numerical Values at $\\tau_0$"),
        "appendix needs \\end{{document}} to find an insertion point"
    );
}

#[test]
fn eigenvalue_splice_requires_companion_anchors() {
    // λ₁ quoted alone in prose, λ₂/λ₃ out of sentence range.
    let tex = "Recall \\lambda_1 \\approx -1.4571 dominates. Later \\lambda_2 \\approx 0.3820.";
    let spectrum = sorted_eigen(&golden_matrix()).values;
    assert_eq!(
        replace_eigenvalue_equation(tex, &spectrum),
        tex,
        "an eigenvalue sentence without all three anchors must be left alone"
    );
}

#[test]
fn table_splice_preserves_surrounding_prose() {
    let updated = run_update_pipeline(&sample_manuscript());
    assert!(updated.contains("\\section{Hierarchies}"));
    assert!(updated.contains("as shown above."));
    assert!(updated.contains("\\label{tab:hierarchies}"));
}

#[test]
fn regenerated_table_covers_all_benchmark_rows() {
    let table = hierarchy_table();
    for tuple in ["(6, 4, 0)", "(8, 4, 0)", "(10, 6, 0)", "(4, 2, 0)"] {
        assert!(table.contains(tuple), "table should list {tuple}");
    }
    assert!(table.starts_with("\\begin{table}"));
    assert!(table.ends_with("\\end{table}"));
}

#[test]
fn corrections_document_names_every_passage() {
    let doc = corrections_document();
    assert!(doc.contains("SECTION 3.3: EIGENVALUE ANALYSIS"));
    assert!(doc.contains("TABLE 2: HIERARCHICAL PATTERNS (Section 4)"));
    assert!(doc.contains("APPENDIX C: NUMERICAL VALUES"));
    assert!(doc.contains("verify_results --all"));
    assert!(
        doc.contains("-1.5642651736"),
        "appendix block should quote λ₁ at ten decimals"
    );
}

#[test]
fn appendix_quotes_live_constants_at_documented_precision() {
    let spectrum = sorted_eigen(&golden_matrix()).values;
    let appendix = numerical_appendix(&spectrum);
    assert!(
        appendix.contains("1.618033988749895"),
        "φ at fifteen decimals"
    );
    assert!(
        appendix.contains("Y_2(\\tau_0) &= 0.618033989"),
        "Y₂ at nine decimals"
    );
    assert!(
        appendix.contains("-1.15470054"),
        "M₀ leading entry at eight decimals"
    );
    assert!(
        appendix.contains("\\lambda_3 &= 0.5709945789"),
        "λ₃ at ten decimals"
    );
}

#[test]
fn updated_manuscript_round_trips_through_disk() {
    let dir = std::env::temp_dir();
    let input = dir.join(format!("goldenpoint_paper_{}_in.tex", std::process::id()));
    let output = dir.join(format!("goldenpoint_paper_{}_out.tex", std::process::id()));

    std::fs::write(&input, sample_manuscript()).expect("write sample");
    let tex = std::fs::read_to_string(&input).expect("read sample");
    let updated = run_update_pipeline(&tex);
    std::fs::write(&output, &updated).expect("write updated");

    let back = std::fs::read_to_string(&output).expect("read updated");
    assert_eq!(back, updated, "file round trip must preserve the update");
    assert!(back.contains("\\lambda_1 \\approx -1.564"));

    std::fs::remove_file(&input).ok();
    std::fs::remove_file(&output).ok();
}
