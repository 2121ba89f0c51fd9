use ndarray::{Array1, Array2, ArrayView1};

use crate::estimators::approaches::discrete::discrete_utils::{
    check_labels, joint_entropy_of_columns, DiscreteClasses,
};
use crate::estimators::traits::EntropyEstimator;
use crate::error::{EntropyError, Result};

/// Maximum-likelihood (plug-in) Shannon entropy of pre-discretized classes, natural log base.
///
/// Probabilities are bin counts over the number of timesteps; H = -Σ p ln p over p > 0.
/// Joint entropies count co-occurrences in the full cross product of the variables'
/// classes. Conditional entropies come from the chain rule (see [`EntropyEstimator`]).
impl EntropyEstimator for DiscreteClasses {
    fn n_vars(&self) -> usize {
        DiscreteClasses::n_vars(self)
    }

    fn entropy_of(&self, variable: usize) -> Result<f64> {
        self.check_variable(variable)?;
        Ok(joint_entropy_of_columns(
            &[self.column(variable)],
            &self.n_classes()[variable..=variable],
        ))
    }

    fn entropy_vector(&self) -> Result<Array1<f64>> {
        Ok(Array1::from_shape_fn(DiscreteClasses::n_vars(self), |v| {
            joint_entropy_of_columns(&[self.column(v)], &self.n_classes()[v..=v])
        }))
    }

    fn joint_entropy_of(&self, (i, j): (usize, usize)) -> Result<f64> {
        self.require_pairwise()?;
        self.check_variable(i)?;
        self.check_variable(j)?;
        Ok(self.pair_entropy(i, j))
    }

    fn joint_entropy_matrix(&self) -> Result<Array2<f64>> {
        self.require_pairwise()?;
        let n_vars = DiscreteClasses::n_vars(self);
        let mut jent = Array2::zeros((n_vars, n_vars));
        for i in 0..n_vars {
            for j in i..n_vars {
                let h = self.pair_entropy(i, j);
                jent[[i, j]] = h;
                jent[[j, i]] = h;
            }
        }
        Ok(jent)
    }

    fn multivar_joint_entropy(&self) -> Result<f64> {
        self.require_matrix()?;
        let columns: Vec<ArrayView1<'_, usize>> =
            (0..DiscreteClasses::n_vars(self)).map(|v| self.column(v)).collect();
        Ok(joint_entropy_of_columns(&columns, self.n_classes()))
    }
}

impl DiscreteClasses {
    fn pair_entropy(&self, i: usize, j: usize) -> f64 {
        joint_entropy_of_columns(
            &[self.column(i), self.column(j)],
            &[self.n_classes()[i], self.n_classes()[j]],
        )
    }
}

/// Joint entropy H(X1, ..., Xn) of an arbitrary number of aligned label vectors.
///
/// The vectors need not come from the same [`DiscreteClasses`]; transfer entropy, for
/// instance, combines a current column with lagged ones.
pub fn discrete_multivar_joint_entropy(
    classes: &[ArrayView1<'_, usize>],
    n_classes: &[usize],
) -> Result<f64> {
    let Some(first) = classes.first() else {
        return Err(EntropyError::Shape {
            expected: "at least one class vector",
            found: "no class vectors".to_string(),
        });
    };
    if first.is_empty() {
        return Err(EntropyError::Shape {
            expected: "non-empty class vectors",
            found: "empty class vector".to_string(),
        });
    }
    if let Some(other) = classes.iter().find(|c| c.len() != first.len()) {
        return Err(EntropyError::Shape {
            expected: "class vectors of equal length",
            found: format!("lengths {} and {}", first.len(), other.len()),
        });
    }
    if n_classes.len() != classes.len() {
        return Err(EntropyError::BinSpecMismatch {
            given: n_classes.len(),
            expected: classes.len(),
        });
    }
    check_labels(classes.iter().cloned(), n_classes)?;
    Ok(joint_entropy_of_columns(classes, n_classes))
}
