// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for the goldenpoint verification suite.

use std::fmt;

/// Errors surfaced by the library layer.
///
/// Binaries report these and exit nonzero; the numerical routines
/// themselves are total over their typed inputs.
#[derive(Debug)]
pub enum GoldenPointError {
    /// Reading or writing paper sources / result files failed.
    DataLoad(String),
    /// A modular weight below the minimum allowed by Equation 2.7.
    InvalidWeight(u32),
}

impl fmt::Display for GoldenPointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataLoad(msg) => write!(f, "data load error: {msg}"),
            Self::InvalidWeight(w) => {
                write!(f, "modular weight must be at least 2, got {w}")
            }
        }
    }
}

impl std::error::Error for GoldenPointError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_data_load() {
        let e = GoldenPointError::DataLoad("main.tex not found".to_string());
        assert_eq!(e.to_string(), "data load error: main.tex not found");
    }

    #[test]
    fn display_invalid_weight() {
        let e = GoldenPointError::InvalidWeight(1);
        assert_eq!(e.to_string(), "modular weight must be at least 2, got 1");
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&GoldenPointError::InvalidWeight(0));
    }
}
