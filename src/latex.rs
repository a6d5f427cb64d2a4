// SPDX-License-Identifier: AGPL-3.0-only

//! Regeneration of the manuscript's numerical LaTeX passages.
//!
//! All substitutions are anchored string splices, not regex rewrites:
//! each pass locates a fixed anchor the paper is known to contain and
//! splices freshly computed text over the delimited span. A missing
//! anchor leaves the document untouched, so running against an
//! unrelated file is a no-op rather than corruption.
//!
//! Number spans end at the first period NOT followed by a digit. A bare
//! "first period" rule would cut values like 0.571 in half at the
//! decimal point and leave the tail digits behind in the document.

use std::fmt::Write;

use crate::constants::{PHI, PHI_INV, PHI_INV2};
use crate::eigen::normalized_magnitudes;
use crate::forms::y_ratios;
use crate::provenance::TABLE2_PATTERNS;
use crate::yukawa::{golden_matrix, hierarchy_span, mass_spectrum};

const LAMBDA1_ANCHOR: &str = "\\lambda_1 \\approx ";
const LAMBDA2_ANCHOR: &str = "\\lambda_2 \\approx";
const LAMBDA3_ANCHOR: &str = "\\lambda_3 \\approx";
const RATIO_ANCHOR: &str = "\\approx 1 : \\phi^{-1} : \\phi^{-2}";
const TABLE_BEGIN: &str = "\\begin{table}";
const TABLE_END: &str = "\\end{table}";
const APPENDIX_ANCHOR: &str = "\\section{Numerical Values at $\\tau_0$}";
const SECTION_TOKEN: &str = "\\section";
const END_DOCUMENT: &str = "\\end{document}";

/// Byte index just past the period that ends the sentence starting at
/// `from`. Periods followed by an ASCII digit are decimal points inside
/// a number, not sentence ends.
fn sentence_end(text: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == b'.' && !bytes.get(i + 1).map_or(false, u8::is_ascii_digit) {
            return Some(i + 1);
        }
        i += 1;
    }
    None
}

/// Rewrite the displayed eigenvalue equation (Section 3.3) with three
/// decimals of the given spectrum.
///
/// The replaced span runs from `\lambda_1 \approx` to the end of the
/// sentence and must mention λ₂ and λ₃; a lone λ₁ elsewhere in the
/// paper is left alone.
#[must_use]
pub fn replace_eigenvalue_equation(tex: &str, values: &[f64; 3]) -> String {
    let Some(start) = tex.find(LAMBDA1_ANCHOR) else {
        return tex.to_string();
    };
    let Some(end) = sentence_end(tex, start) else {
        return tex.to_string();
    };
    let span = &tex[start..end];
    if !span.contains(LAMBDA2_ANCHOR) || !span.contains(LAMBDA3_ANCHOR) {
        return tex.to_string();
    }
    let replacement = format!(
        "\\lambda_1 \\approx {:.3}, \\quad \\lambda_2 \\approx {:.3}, \\quad \\lambda_3 \\approx {:.3}.",
        values[0], values[1], values[2]
    );
    let mut out = String::with_capacity(tex.len() + replacement.len());
    out.push_str(&tex[..start]);
    out.push_str(&replacement);
    out.push_str(&tex[end..]);
    out
}

/// Rewrite the normalized-ratio line so the numbers in front of
/// `\approx 1 : \phi^{-1} : \phi^{-2}` match the given spectrum.
#[must_use]
pub fn replace_ratio_line(tex: &str, values: &[f64; 3]) -> String {
    let Some(anchor) = tex.find(RATIO_ANCHOR) else {
        return tex.to_string();
    };
    // The numeric prefix "1 : a.aaa : b.bbb " sits directly before the
    // anchor; walk back over digit/colon/space characters to find it.
    let head = &tex[..anchor];
    let mut prefix_start = anchor;
    for (i, ch) in head.char_indices().rev() {
        if matches!(ch, '0'..='9' | '.' | ':' | ' ') {
            prefix_start = i;
        } else {
            break;
        }
    }
    let Some(rel) = tex[prefix_start..anchor].find("1 : ") else {
        return tex.to_string();
    };
    let start = prefix_start + rel;
    let norm = normalized_magnitudes(values);
    let mut out = String::with_capacity(tex.len() + 24);
    out.push_str(&tex[..start]);
    let _ = write!(out, "1 : {:.3} : {:.3} ", norm[1], norm[2]);
    out.push_str(&tex[anchor..]);
    out
}

/// Table 2, regenerated from scratch with recomputed ratios and spans.
#[must_use]
pub fn hierarchy_table() -> String {
    let mut table = String::from(
        r"\begin{table}[h]
\centering
\caption{Hierarchical patterns from modular weight assignments}
\begin{tabular}{cccc}
\hline
Weight Assignment $(k_1, k_2, k_3)$ & Yukawa Scaling & Ratio $y_1 : y_2 : y_3$ & Span (orders) \\
\hline
",
    );
    for pattern in &TABLE2_PATTERNS {
        let masses = mass_spectrum(pattern.weights, 1.0);
        let ratios = normalized_magnitudes(&masses);
        let span = hierarchy_span(&masses);
        let [k1, k2, k3] = pattern.weights;
        let _ = writeln!(
            table,
            "({k1}, {k2}, {k3}) & $\\phi^{{-{k1}}} : \\phi^{{-{k2}}} : \\phi^{{-{k3}}}$ & 1 : {:.3} : {:.3} & $\\sim$ {span:.1} \\\\",
            ratios[1], ratios[2]
        );
    }
    table.push_str(
        r"\hline
\end{tabular}
\label{tab:hierarchies}
\end{table}",
    );
    table
}

/// Replace the first `table` environment in the document with a freshly
/// generated Table 2.
#[must_use]
pub fn replace_hierarchy_table(tex: &str) -> String {
    let Some(start) = tex.find(TABLE_BEGIN) else {
        return tex.to_string();
    };
    let Some(rel_end) = tex[start..].find(TABLE_END) else {
        return tex.to_string();
    };
    let end = start + rel_end + TABLE_END.len();
    let table = hierarchy_table();
    let mut out = String::with_capacity(tex.len() + table.len());
    out.push_str(&tex[..start]);
    out.push_str(&table);
    out.push_str(&tex[end..]);
    out
}

/// The numerical-values appendix: modular forms at nine decimals, M0 at
/// eight, the spectrum at ten. Ends with a single trailing newline and
/// carries no leading one; `upsert_numerical_appendix` handles spacing.
#[must_use]
pub fn numerical_appendix(values: &[f64; 3]) -> String {
    let y = y_ratios();
    let m0 = golden_matrix();
    let norm = normalized_magnitudes(values);

    let mut s = String::from(
        r"\section{Numerical Values at $\tau_0$}

\subsection{Modular Forms}

The weight-2 modular forms at $\tau_0 = e^{2\pi i/5}$ evaluate to:
\begin{align}
",
    );
    let _ = writeln!(s, "Y_1(\\tau_0) &= {:.9} \\nonumber \\\\", y[0]);
    let _ = writeln!(s, "Y_2(\\tau_0) &= {:.9} = \\phi^{{-1}} \\nonumber \\\\", y[1]);
    let _ = writeln!(s, "Y_3(\\tau_0) &= {:.9} = \\phi^{{-2}} \\nonumber \\\\", y[2]);
    let _ = writeln!(s, "Y_4(\\tau_0) &= {:.9} = -\\phi^{{-2}} \\nonumber \\\\", y[3]);
    let _ = writeln!(s, "Y_5(\\tau_0) &= {:.9} = -\\phi^{{-1}}", y[4]);
    s.push_str(r"\end{align}");
    s.push('\n');
    let _ = writeln!(s, "where $\\phi = (1+\\sqrt{{5}})/2 = {PHI:.15}$.");
    s.push_str(
        r"
\subsection{Golden Matrix $M_0$}

The explicit matrix elements are:
\begin{equation}
M_0 = \begin{pmatrix}
",
    );
    let _ = writeln!(
        s,
        "{:.8} & {:.8} & {:.8} \\\\",
        m0[(0, 0)],
        m0[(0, 1)],
        m0[(0, 2)]
    );
    let _ = writeln!(
        s,
        "{:.8} & {:.8} & {:.8} \\\\",
        m0[(1, 0)],
        m0[(1, 1)],
        m0[(1, 2)]
    );
    let _ = writeln!(s, "{:.8} & {:.8} & {:.8}", m0[(2, 0)], m0[(2, 1)], m0[(2, 2)]);
    s.push_str(
        r"\end{pmatrix}
\end{equation}

\subsection{Eigenvalues}

The eigenvalues of $M_0$ are:
\begin{align}
",
    );
    let _ = writeln!(s, "\\lambda_1 &= {:.10} \\nonumber \\\\", values[0]);
    let _ = writeln!(s, "\\lambda_2 &= {:.10} \\nonumber \\\\", values[1]);
    let _ = writeln!(s, "\\lambda_3 &= {:.10}", values[2]);
    s.push_str(
        r"\end{align}

with corresponding normalized ratios:
\begin{equation}
",
    );
    let _ = writeln!(
        s,
        "|\\lambda_1| : |\\lambda_2| : |\\lambda_3| = 1.000 : {:.3} : {:.3}",
        norm[1], norm[2]
    );
    s.push_str(r"\end{equation}");
    s.push('\n');
    s
}

/// Replace the numerical-values appendix in place, or insert it before
/// `\end{document}` when the paper does not have one yet.
///
/// The replaced region runs from the section heading to the next
/// `\section` or to `\end{document}`. With neither terminator present
/// the document is returned unchanged.
#[must_use]
pub fn upsert_numerical_appendix(tex: &str, appendix: &str) -> String {
    if let Some(anchor) = tex.find(APPENDIX_ANCHOR) {
        let from = anchor + APPENDIX_ANCHOR.len();
        let next_section = tex[from..].find(SECTION_TOKEN).map(|i| from + i);
        let end_doc = tex[from..].find(END_DOCUMENT).map(|i| from + i);
        let term = match (next_section, end_doc) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) | (None, Some(a)) => Some(a),
            (None, None) => None,
        };
        if let Some(term) = term {
            let mut out = String::with_capacity(tex.len() + appendix.len());
            out.push_str(&tex[..anchor]);
            out.push_str(appendix);
            out.push_str(&tex[term..]);
            return out;
        }
    }
    match tex.rfind(END_DOCUMENT) {
        Some(end) => {
            let mut out = String::with_capacity(tex.len() + appendix.len() + 1);
            out.push_str(&tex[..end]);
            out.push('\n');
            out.push_str(appendix);
            out.push_str(&tex[end..]);
            out
        }
        None => tex.to_string(),
    }
}

/// Corrected Section 3.3 for the corrections document.
#[must_use]
pub fn eigenvalue_subsection(values: &[f64; 3]) -> String {
    let norm = normalized_magnitudes(values);
    let mut s = String::from(
        r"\subsection{Eigenvalue Analysis}

The eigenvalues of $M_0$ can be computed exactly via the characteristic polynomial:
\begin{equation}
\det(M_0 - \lambda I) = -\lambda^3 + a_2\lambda^2 + a_1\lambda + a_0 = 0,
\end{equation}
where the coefficients are combinations of powers of $\phi$. Numerically, the eigenvalues are:
\begin{equation}
",
    );
    let _ = writeln!(
        s,
        "\\lambda_1 \\approx {:.3}, \\quad \\lambda_2 \\approx {:.3}, \\quad \\lambda_3 \\approx {:.3}.",
        values[0], values[1], values[2]
    );
    s.push_str(
        r"\end{equation}

This exhibits the characteristic golden-ratio hierarchy. Taking absolute values and normalizing to the largest:
\begin{equation}
",
    );
    let _ = writeln!(
        s,
        "|\\lambda_1| : |\\lambda_2| : |\\lambda_3| \\approx 1 : {:.3} : {:.3} \\approx 1 : \\phi^{{-1}} : \\phi^{{-2}},",
        norm[1], norm[2]
    );
    let _ = writeln!(
        s,
        "\\end{{equation}}\nwhere $\\phi^{{-1}} = {PHI_INV:.3}$ and $\\phi^{{-2}} = {PHI_INV2:.3}$. The overall sign of $\\lambda_1$ can be absorbed into the phase convention of the fermion mass matrix."
    );
    s
}

/// The complete corrections document: every numerical passage of the
/// paper regenerated, with instructions on where each block goes.
#[must_use]
pub fn corrections_document() -> String {
    let spectrum = crate::eigen::sorted_eigen(&golden_matrix()).values;
    let rule = "=".repeat(70);

    let mut doc = String::new();
    let _ = writeln!(doc, "{rule}");
    let _ = writeln!(doc, "PAPER CORRECTIONS - Generated from Computed Values");
    let _ = writeln!(doc, "{rule}");
    doc.push('\n');
    let _ = writeln!(
        doc,
        "Copy and paste these LaTeX sections into your paper to match"
    );
    let _ = writeln!(doc, "the actual computed values from the code.");
    doc.push('\n');
    let _ = writeln!(doc, "{rule}");

    let _ = writeln!(doc, "\n{rule}");
    let _ = writeln!(doc, "SECTION 3.3: EIGENVALUE ANALYSIS");
    let _ = writeln!(doc, "{rule}");
    let _ = writeln!(doc, "\nReplace the current Section 3.3 with:\n");
    doc.push_str(&eigenvalue_subsection(&spectrum));

    let _ = writeln!(doc, "\n{rule}");
    let _ = writeln!(doc, "TABLE 2: HIERARCHICAL PATTERNS (Section 4)");
    let _ = writeln!(doc, "{rule}");
    let _ = writeln!(doc, "\nReplace the current Table 2 with:\n");
    doc.push_str(&hierarchy_table());
    doc.push('\n');

    let _ = writeln!(doc, "\n{rule}");
    let _ = writeln!(doc, "APPENDIX C: NUMERICAL VALUES");
    let _ = writeln!(doc, "{rule}");
    let _ = writeln!(doc, "\nReplace the current Appendix C with:\n");
    doc.push_str(&numerical_appendix(&spectrum));

    let _ = writeln!(doc, "\n{rule}");
    let _ = writeln!(doc, "END OF CORRECTIONS");
    let _ = writeln!(doc, "{rule}");
    doc.push('\n');
    let _ = writeln!(
        doc,
        "NOTE: After updating your paper with these corrections,"
    );
    let _ = writeln!(doc, "rerun the verification suite (verify_results --all).");
    let _ = writeln!(doc, "All checks should now pass with 100% success rate.");
    doc
}
