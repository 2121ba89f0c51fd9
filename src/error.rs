// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors raised while validating or computing entropy measures.
///
/// Every variant is produced before any output is populated; there is no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntropyError {
    /// Wrong array rank, empty input, or a vector passed where a matrix is required.
    #[error("wrong data format: expected {expected}, got {found}")]
    Shape { expected: &'static str, found: String },

    #[error(
        "bin specifications ({given}) must match variables ({expected}); provide either a \
         single specification for all variables or one per variable"
    )]
    BinSpecMismatch { given: usize, expected: usize },

    /// Data falls outside explicitly supplied bin edges.
    #[error("data range [{min}, {max}] lies outside of bin edges [{lower}, {upper}]")]
    Range {
        min: f64,
        max: f64,
        lower: f64,
        upper: f64,
    },

    #[error("dimension error: {0}")]
    Dimension(String),

    #[error("invalid bin specification: {0}")]
    InvalidBins(String),

    #[error("non-finite value {value} at row {row}, variable {variable}")]
    NonFinite { row: usize, variable: usize, value: f64 },

    #[error("class label {label} of variable {variable} exceeds its {n_classes} classes")]
    ClassOutOfRange {
        variable: usize,
        label: usize,
        n_classes: usize,
    },

    #[error("variable index {index} out of range for {n_vars} variables")]
    VariableIndex { index: usize, n_vars: usize },
}

pub type Result<T> = std::result::Result<T, EntropyError>;
