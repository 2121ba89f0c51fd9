// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: entropy engine over pre-discretized class labels.

pub mod discrete_utils;
pub mod mle;

pub use discrete_utils::{entropy_from_counts, joint_counts, DiscreteClasses};
pub use mle::discrete_multivar_joint_entropy;

use ndarray::{Array1, Array2};

use crate::estimators::traits::EntropyEstimator;
use crate::error::Result;

/// Entropy of one variable of pre-discretized data.
pub fn discrete_entropy_of(classes: &DiscreteClasses, variable: usize) -> Result<f64> {
    classes.entropy_of(variable)
}

/// Entropy of every variable of pre-discretized data.
pub fn discrete_entropy_vector(classes: &DiscreteClasses) -> Result<Array1<f64>> {
    classes.entropy_vector()
}

pub fn discrete_joint_entropy_of(classes: &DiscreteClasses, pair: (usize, usize)) -> Result<f64> {
    classes.joint_entropy_of(pair)
}

pub fn discrete_joint_entropy_matrix(classes: &DiscreteClasses) -> Result<Array2<f64>> {
    classes.joint_entropy_matrix()
}

/// $H(X_i | X_j)$ via the chain rule.
pub fn discrete_conditional_entropy_of(
    classes: &DiscreteClasses,
    pair: (usize, usize),
) -> Result<f64> {
    classes.conditional_entropy_of(pair)
}

/// Entry `[i, j]` is $H(X_i | X_j)$.
pub fn discrete_conditional_entropy_matrix(classes: &DiscreteClasses) -> Result<Array2<f64>> {
    classes.conditional_entropy_matrix()
}
