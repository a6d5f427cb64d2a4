//! goldenpoint — numerical verification environment for the golden point
//!
//! Verifies every numerical claim of "The Golden Point in A5 Modular
//! Flavor Symmetry": the weight-2 form ratios at τ₀ = exp(2πi/5), the
//! golden mass matrix M0 and its eigenvalue spectrum, the weight-scaled
//! hierarchies of Table 2, and the LaTeX passages that print them.
//!
//! ## Modules
//!   - `constants` — exact golden-ratio constants (φ, φ⁻¹, φ⁻², √3)
//!   - `complex` — just enough complex arithmetic for the τ₀ identities
//!   - `forms` — weight-2 form ratios, τ₀, modular weight suppression
//!   - `yukawa` — M0, weight-scaled textures, mass spectra and spans
//!   - `eigen` — deterministic sorted symmetric eigendecomposition
//!   - `validation` — check harness shared by the verification binaries
//!   - `tolerances` — every acceptance threshold, with rationale
//!   - `provenance` — expected values traced to the manuscript
//!   - `latex` — anchored regeneration of the paper's numerical passages
//!   - `report` — JSON report output
//!   - `error` — shared error type for file I/O and weight guards
//!
//! ## Binaries
//!   - `verify_results` — full verification suite (exit 0 ⟺ paper holds)
//!   - `diagnose_eigenvalues` — exact vs. draft spectrum comparison
//!   - `generate_corrections` — corrected LaTeX blocks as a text file
//!   - `update_paper` — splice recomputed values into the manuscript
//!   - `weight_scan` — hierarchy span over a grid of weight assignments
//!   - `selfcheck` — quick environment sanity probe

pub mod complex;
pub mod constants;
pub mod eigen;
pub mod error;
pub mod forms;
pub mod latex;
pub mod provenance;
pub mod report;
pub mod tolerances;
pub mod validation;
pub mod yukawa;
