// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayView1;

use crate::error::{EntropyError, Result};

/// Largest accepted bin count; the edge list of a count spec holds `n + 1` values.
pub const MAX_BIN_COUNT: usize = 1 << 24;

/// Binning scheme for a single variable.
#[derive(Debug, Clone, PartialEq)]
pub enum BinSpec {
    /// Equal-width bins spanning the observed `[min, max]` of the variable.
    Count(usize),
    /// Explicit, strictly increasing edges; `n` edges define `n - 1` bins.
    Edges(Vec<f64>),
}

impl BinSpec {
    /// Reject bin counts of zero or above [`MAX_BIN_COUNT`] and malformed edge lists.
    pub fn validate(&self) -> Result<()> {
        match self {
            BinSpec::Count(0) => Err(EntropyError::InvalidBins(
                "bin count must be at least 1".to_string(),
            )),
            BinSpec::Count(n) if *n > MAX_BIN_COUNT => Err(EntropyError::InvalidBins(format!(
                "bin count {n} exceeds the maximum of {MAX_BIN_COUNT}"
            ))),
            BinSpec::Count(_) => Ok(()),
            BinSpec::Edges(edges) => {
                if edges.len() < 2 {
                    return Err(EntropyError::InvalidBins(format!(
                        "need at least 2 edges, got {}",
                        edges.len()
                    )));
                }
                if let Some(bad) = edges.iter().find(|e| !e.is_finite()) {
                    return Err(EntropyError::InvalidBins(format!(
                        "edge {bad} is not finite"
                    )));
                }
                if let Some(w) = edges.windows(2).find(|w| w[0] >= w[1]) {
                    return Err(EntropyError::InvalidBins(format!(
                        "edges must be strictly increasing, found {} before {}",
                        w[0], w[1]
                    )));
                }
                Ok(())
            }
        }
    }
}

impl From<usize> for BinSpec {
    fn from(n_bins: usize) -> Self {
        BinSpec::Count(n_bins)
    }
}

impl From<Vec<f64>> for BinSpec {
    fn from(edges: Vec<f64>) -> Self {
        BinSpec::Edges(edges)
    }
}

impl From<&[f64]> for BinSpec {
    fn from(edges: &[f64]) -> Self {
        BinSpec::Edges(edges.to_vec())
    }
}

/// Bin specifications for a whole dataset.
///
/// A single specification is broadcast to every variable only through [`Bins::Uniform`];
/// a per-variable list must have exactly one entry per variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Bins {
    Uniform(BinSpec),
    PerVariable(Vec<BinSpec>),
}

impl Bins {
    pub fn uniform(spec: impl Into<BinSpec>) -> Self {
        Bins::Uniform(spec.into())
    }

    pub fn per_variable<S: Into<BinSpec>>(specs: impl IntoIterator<Item = S>) -> Self {
        Bins::PerVariable(specs.into_iter().map(Into::into).collect())
    }

    /// Expand into exactly one validated specification per variable.
    pub fn resolve(&self, n_vars: usize) -> Result<Vec<BinSpec>> {
        let specs = match self {
            Bins::Uniform(spec) => vec![spec.clone(); n_vars],
            Bins::PerVariable(specs) => {
                if specs.len() != n_vars {
                    return Err(EntropyError::BinSpecMismatch {
                        given: specs.len(),
                        expected: n_vars,
                    });
                }
                specs.clone()
            }
        };
        for spec in &specs {
            spec.validate()?;
        }
        Ok(specs)
    }
}

impl From<BinSpec> for Bins {
    fn from(spec: BinSpec) -> Self {
        Bins::Uniform(spec)
    }
}

impl From<usize> for Bins {
    fn from(n_bins: usize) -> Self {
        Bins::Uniform(BinSpec::Count(n_bins))
    }
}

impl From<Vec<BinSpec>> for Bins {
    fn from(specs: Vec<BinSpec>) -> Self {
        Bins::PerVariable(specs)
    }
}

/// `n_edges` equally spaced edges covering `column` with a 1e-6 margin on both sides.
///
/// The result always passes the range check of explicit edges, which makes it handy for
/// building [`BinSpec::Edges`] from the data itself.
pub fn padded_edges(column: ArrayView1<'_, f64>, n_edges: usize) -> Vec<f64> {
    let min = column.iter().copied().fold(f64::INFINITY, f64::min);
    let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    linspace(min - 1e-6, max + 1e-6, n_edges)
}

/// `n` evenly spaced points from `start` to `stop`, both included.
pub(crate) fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|k| start + k as f64 * step).collect();
            points[n - 1] = stop;
            points
        }
    }
}
