// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::borrow::Cow;
use std::sync::Arc;

use ndarray::{Array1, Array2, ArrayView1};
use tracing::debug;

use super::bins::{linspace, BinSpec, Bins};
use super::cache::DiscretizationCache;
use crate::estimators::approaches::common_nd::dataset::SampleData;
use crate::estimators::approaches::discrete::discrete_utils::DiscreteClasses;
use crate::error::{EntropyError, Result};

/// Class labels of one variable together with its number of bins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscretizedColumn {
    pub classes: Array1<usize>,
    pub n_bins: usize,
}

/// Map a column of finite values onto bin indices.
///
/// For [`BinSpec::Count`] the `n + 1` edges are spaced evenly between the column minimum and
/// maximum. Explicit edges must cover the whole column, otherwise a range error is returned.
/// Both outer edges are inclusive: a value on the left edge lands in bin 0 and a value on
/// the right edge lands in the last bin.
pub fn discretize_1d(data: ArrayView1<'_, f64>, bins: &BinSpec) -> Result<DiscretizedColumn> {
    bins.validate()?;
    if data.is_empty() {
        return Err(EntropyError::Shape {
            expected: "[timesteps]",
            found: "empty array".to_string(),
        });
    }
    if let Some((row, &value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(EntropyError::NonFinite {
            row,
            variable: 0,
            value,
        });
    }

    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let edges: Cow<'_, [f64]> = match bins {
        BinSpec::Count(n) => Cow::Owned(linspace(min, max, n + 1)),
        BinSpec::Edges(edges) => {
            let (lower, upper) = (edges[0], edges[edges.len() - 1]);
            if min < lower || max > upper {
                return Err(EntropyError::Range {
                    min,
                    max,
                    lower,
                    upper,
                });
            }
            Cow::Borrowed(edges.as_slice())
        }
    };

    let n_bins = edges.len() - 1;
    let last = n_bins - 1;
    let classes = data.mapv(|v| {
        // Index of the rightmost edge <= v; the right outer edge folds into the last bin.
        let idx = edges.partition_point(|&e| e <= v).saturating_sub(1);
        idx.min(last)
    });
    Ok(DiscretizedColumn { classes, n_bins })
}

/// Discretizes sample matrices column by column, optionally through a shared memo.
#[derive(Clone)]
pub struct Discretizer {
    cache: Option<Arc<DiscretizationCache>>,
}

impl Discretizer {
    pub fn new(cache: Arc<DiscretizationCache>) -> Self {
        Self { cache: Some(cache) }
    }

    /// Discretizer backed by the process-wide cache.
    pub fn global() -> Self {
        Self::new(DiscretizationCache::global())
    }

    /// Discretizer that recomputes every column.
    pub fn uncached() -> Self {
        Self { cache: None }
    }

    pub fn cache(&self) -> Option<&Arc<DiscretizationCache>> {
        self.cache.as_ref()
    }

    pub fn discretize_column(
        &self,
        data: ArrayView1<'_, f64>,
        spec: &BinSpec,
    ) -> Result<Arc<DiscretizedColumn>> {
        match &self.cache {
            Some(cache) => cache.get_or_try_insert(data, spec, || discretize_1d(data, spec)),
            None => discretize_1d(data, spec).map(Arc::new),
        }
    }

    /// Discretize every variable of `data` under its own bin specification.
    ///
    /// All bin specifications are resolved and validated before any column is touched.
    pub fn discretize(&self, data: &SampleData, bins: &Bins) -> Result<DiscreteClasses> {
        let specs = bins.resolve(data.n_vars())?;
        debug!(
            n_steps = data.n_steps(),
            n_vars = data.n_vars(),
            "discretizing sample matrix"
        );

        let mut classes = Array2::zeros((data.n_steps(), data.n_vars()));
        let mut n_classes = Vec::with_capacity(specs.len());
        for (variable, spec) in specs.iter().enumerate() {
            let column = self.discretize_column(data.column(variable), spec)?;
            classes.column_mut(variable).assign(&column.classes);
            n_classes.push(column.n_bins);
        }
        Ok(DiscreteClasses::from_parts(classes, n_classes, data.rank()))
    }
}

impl Default for Discretizer {
    fn default() -> Self {
        Self::global()
    }
}
