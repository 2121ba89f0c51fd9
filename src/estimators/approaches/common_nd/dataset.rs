// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, ArrayD, ArrayView1, ArrayView2, Axis, Ix1, Ix2, ShapeError};

use crate::error::{EntropyError, Result};

pub(crate) const VECTOR_DIMS: usize = 1;
pub(crate) const MATRIX_DIMS: usize = 2;
const EXPECTED_SHAPE: &str = "[timesteps] or [timesteps x variables]";

fn shape_error(err: ShapeError) -> EntropyError {
    EntropyError::Shape {
        expected: EXPECTED_SHAPE,
        found: err.to_string(),
    }
}

/// Raw numeric input accepted by the continuous estimators, before validation.
#[derive(Debug, Clone)]
pub enum SampleInput {
    /// One variable observed over time.
    Vector(Array1<f64>),
    /// Rows are timesteps, columns are variables.
    Matrix(Array2<f64>),
    /// Array of arbitrary rank; only rank 1 and 2 pass validation.
    Dynamic(ArrayD<f64>),
}

impl From<Array1<f64>> for SampleInput {
    fn from(array: Array1<f64>) -> Self {
        SampleInput::Vector(array)
    }
}

impl From<Array2<f64>> for SampleInput {
    fn from(array: Array2<f64>) -> Self {
        SampleInput::Matrix(array)
    }
}

impl From<ArrayD<f64>> for SampleInput {
    fn from(array: ArrayD<f64>) -> Self {
        SampleInput::Dynamic(array)
    }
}

impl From<ArrayView1<'_, f64>> for SampleInput {
    fn from(view: ArrayView1<'_, f64>) -> Self {
        SampleInput::Vector(view.to_owned())
    }
}

impl From<ArrayView2<'_, f64>> for SampleInput {
    fn from(view: ArrayView2<'_, f64>) -> Self {
        SampleInput::Matrix(view.to_owned())
    }
}

impl From<Vec<f64>> for SampleInput {
    fn from(values: Vec<f64>) -> Self {
        SampleInput::Vector(Array1::from(values))
    }
}

/// Validated sample matrix: non-empty, rectangular, finite.
///
/// A vector input is stored as a single column but remembers its rank, so that
/// pairwise operations can reject it as a shape error rather than a dimension error.
#[derive(Debug, Clone)]
pub struct SampleData {
    values: Array2<f64>,
    rank: usize,
}

impl SampleData {
    pub fn new(input: impl Into<SampleInput>) -> Result<Self> {
        let (values, rank) = match input.into() {
            SampleInput::Vector(v) => (v.insert_axis(Axis(1)), VECTOR_DIMS),
            SampleInput::Matrix(m) => (m, MATRIX_DIMS),
            SampleInput::Dynamic(d) => match d.ndim() {
                VECTOR_DIMS => {
                    let v = d.into_dimensionality::<Ix1>().map_err(shape_error)?;
                    (v.insert_axis(Axis(1)), VECTOR_DIMS)
                }
                MATRIX_DIMS => (d.into_dimensionality::<Ix2>().map_err(shape_error)?, MATRIX_DIMS),
                other => {
                    return Err(EntropyError::Shape {
                        expected: EXPECTED_SHAPE,
                        found: format!("array of rank {other}"),
                    });
                }
            },
        };

        if values.is_empty() {
            return Err(EntropyError::Shape {
                expected: EXPECTED_SHAPE,
                found: format!("empty array of shape {:?}", values.shape()),
            });
        }
        for ((row, variable), &value) in values.indexed_iter() {
            if !value.is_finite() {
                return Err(EntropyError::NonFinite {
                    row,
                    variable,
                    value,
                });
            }
        }
        Ok(Self { values, rank })
    }

    pub fn n_steps(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_vars(&self) -> usize {
        self.values.ncols()
    }

    /// Rank of the array the data was built from (1 or 2).
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    pub fn column(&self, variable: usize) -> ArrayView1<'_, f64> {
        self.values.column(variable)
    }

    /// Joint measures need `[timesteps x variables]` input, even with a single column.
    pub fn require_matrix(&self) -> Result<()> {
        require_matrix(self.rank, self.n_steps())
    }

    /// Pairwise joint measures additionally need at least two variables.
    pub fn require_pairwise(&self) -> Result<()> {
        require_pairwise(self.rank, self.n_steps(), self.n_vars())
    }

    /// Derived measures need at least two variables; a vector counts as one.
    pub fn require_multivariate(&self) -> Result<()> {
        require_multivariate(self.n_vars())
    }
}

pub(crate) fn require_matrix(rank: usize, n_steps: usize) -> Result<()> {
    if rank != MATRIX_DIMS {
        return Err(EntropyError::Shape {
            expected: "[timesteps x variables]",
            found: format!("vector of length {n_steps}"),
        });
    }
    Ok(())
}

pub(crate) fn require_pairwise(rank: usize, n_steps: usize, n_vars: usize) -> Result<()> {
    require_matrix(rank, n_steps)?;
    require_multivariate(n_vars)
}

pub(crate) fn require_multivariate(n_vars: usize) -> Result<()> {
    if n_vars < 2 {
        return Err(EntropyError::Dimension(format!(
            "need at least 2 variables, got {n_vars}"
        )));
    }
    Ok(())
}
