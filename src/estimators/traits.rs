// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, Axis};

use crate::estimators::approaches::common_nd::dataset::require_multivariate;
use crate::error::Result;

/// Entropy operations over a multivariate dataset.
///
/// Each measure comes in a scalar form selecting one variable (or pair) and a vector or
/// matrix form covering all of them. Matrix entries follow the variable order of the input.
pub trait EntropyEstimator {
    /// Number of variables (columns) in the dataset.
    fn n_vars(&self) -> usize;

    /// Entropy $H(X_v)$ of a single variable.
    fn entropy_of(&self, variable: usize) -> Result<f64>;

    /// Entropy of every variable.
    fn entropy_vector(&self) -> Result<Array1<f64>>;

    /// Joint entropy $H(X_i, X_j)$.
    fn joint_entropy_of(&self, pair: (usize, usize)) -> Result<f64>;

    /// Symmetric matrix of pairwise joint entropies; the diagonal holds the marginals.
    fn joint_entropy_matrix(&self) -> Result<Array2<f64>>;

    /// Joint entropy $H(X_1, \dots, X_n)$ of all variables at once.
    fn multivar_joint_entropy(&self) -> Result<f64>;

    /// Conditional entropy $H(X_i | X_j) = H(X_i, X_j) - H(X_j)$.
    ///
    /// Single-variable data, including a plain vector, is a dimension error.
    fn conditional_entropy_of(&self, (i, j): (usize, usize)) -> Result<f64> {
        require_multivariate(self.n_vars())?;
        let h_xy = self.joint_entropy_of((i, j))?;
        let h_x = self.entropy_of(j)?;
        Ok(h_xy - h_x)
    }

    /// Matrix whose entry `[i, j]` is $H(X_i | X_j)$. Not symmetric in general.
    fn conditional_entropy_matrix(&self) -> Result<Array2<f64>> {
        require_multivariate(self.n_vars())?;
        let h_xy = self.joint_entropy_matrix()?;
        let h_x = self.entropy_vector()?;
        Ok(h_xy - &h_x.insert_axis(Axis(0)))
    }
}
