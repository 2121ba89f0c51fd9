use ndarray::{Array1, Array2, ArrayView2};
use tracing::debug;

use crate::estimators::approaches::binning::{Bins, Discretizer};
use crate::estimators::approaches::common_nd::dataset::{SampleData, SampleInput};
use crate::estimators::approaches::discrete::discrete_utils::joint_entropy_of_columns;
use crate::estimators::approaches::discrete::DiscreteClasses;
use crate::estimators::entropy::BinnedData;
use crate::estimators::utils::te_slicing::lag_slices;
use crate::error::Result;

/// Threshold above which a normalized transfer entropy counts as a causal link.
pub const NORMALIZED_CAUSAL_THRESHOLD: f64 = 0.15;

/// Entropy terms of the transfer entropy decomposition for every (target, source) pair.
///
/// With $Y$ the target at time $t$, $Y^-$ the target at $t - \text{lag}$ and $X^-$ the source
/// at $t - \text{lag}$:
///
/// $TE(X \to Y) = H(Y^-, Y) + H(Y^-, X^-) - H(Y^-, Y, X^-) - H(Y^-)$
///
/// Entry `[i, j]` of every matrix refers to source `j` acting on target `i`.
pub struct TransferEntropy {
    /// $H(Y_i^-, Y_i)$ per target.
    h_y_ylag: Array1<f64>,
    /// $H(Y_i^-)$ per target.
    h_ylag: Array1<f64>,
    /// $H(Y_i^-, X_j^-)$.
    h_ylag_xlag: Array2<f64>,
    /// $H(Y_i^-, Y_i, X_j^-)$.
    h_y_ylag_xlag: Array2<f64>,
    n_classes: Vec<usize>,
}

impl TransferEntropy {
    /// Compute all entropy terms once for pre-discretized data.
    ///
    /// Requires `[timesteps x variables]` labels with at least two variables and
    /// `1 <= lag < timesteps`.
    pub fn new_discrete(classes: &DiscreteClasses, lag: usize) -> Result<Self> {
        classes.require_multivariate()?;
        let (current, lagged) = lag_slices(classes.view(), lag)?;
        Ok(Self::from_slices(current, lagged, classes.n_classes()))
    }

    /// Bin continuous data and compute the entropy terms.
    pub fn new_binned(data: impl Into<SampleInput>, bins: impl Into<Bins>, lag: usize) -> Result<Self> {
        let samples = SampleData::new(data)?;
        samples.require_multivariate()?;
        // Reject a bad lag before spending time on binning.
        lag_slices(samples.view(), lag)?;
        let bins = bins.into();
        debug!(
            n_steps = samples.n_steps(),
            n_vars = samples.n_vars(),
            lag,
            "computing transfer entropy"
        );
        let binned = BinnedData::from_samples(&samples, &bins, &Discretizer::global())?;
        Self::new_discrete(binned.classes(), lag)
    }

    fn from_slices(
        current: ArrayView2<'_, usize>,
        lagged: ArrayView2<'_, usize>,
        n_classes: &[usize],
    ) -> Self {
        let n_vars = n_classes.len();
        let h_ylag = Array1::from_shape_fn(n_vars, |i| {
            joint_entropy_of_columns(&[lagged.column(i)], &n_classes[i..=i])
        });
        let h_y_ylag = Array1::from_shape_fn(n_vars, |i| {
            joint_entropy_of_columns(
                &[current.column(i), lagged.column(i)],
                &[n_classes[i], n_classes[i]],
            )
        });

        let mut h_ylag_xlag = Array2::zeros((n_vars, n_vars));
        for i in 0..n_vars {
            for j in i..n_vars {
                let h = joint_entropy_of_columns(
                    &[lagged.column(i), lagged.column(j)],
                    &[n_classes[i], n_classes[j]],
                );
                h_ylag_xlag[[i, j]] = h;
                h_ylag_xlag[[j, i]] = h;
            }
        }

        let h_y_ylag_xlag = Array2::from_shape_fn((n_vars, n_vars), |(i, j)| {
            joint_entropy_of_columns(
                &[current.column(i), lagged.column(i), lagged.column(j)],
                &[n_classes[i], n_classes[i], n_classes[j]],
            )
        });

        Self {
            h_y_ylag,
            h_ylag,
            h_ylag_xlag,
            h_y_ylag_xlag,
            n_classes: n_classes.to_vec(),
        }
    }

    fn n_vars(&self) -> usize {
        self.n_classes.len()
    }

    /// Raw transfer entropy in nats; entry `[i, j]` is TE from `j` to `i`.
    pub fn matrix(&self) -> Array2<f64> {
        let n = self.n_vars();
        Array2::from_shape_fn((n, n), |(i, j)| {
            self.h_y_ylag[i] + self.h_ylag_xlag[[i, j]]
                - self.h_y_ylag_xlag[[i, j]]
                - self.h_ylag[i]
        })
    }

    /// $1 - H(Y | Y^-, X^-) / H(Y | Y^-)$, with entries defined as 0 where the target is
    /// fully determined by its own past ($H(Y | Y^-) = 0$).
    pub fn normalized_matrix(&self) -> Array2<f64> {
        let n = self.n_vars();
        Array2::from_shape_fn((n, n), |(i, j)| {
            let h_y_given_ylag_xlag = self.h_y_ylag_xlag[[i, j]] - self.h_ylag_xlag[[i, j]];
            let h_y_given_ylag = self.h_y_ylag[i] - self.h_ylag[i];
            if h_y_given_ylag != 0.0 {
                1.0 - h_y_given_ylag_xlag / h_y_given_ylag
            } else {
                0.0
            }
        })
    }

    /// Raw transfer entropy with row `i` divided by $\ln N_i$, the class count of variable `i`.
    ///
    /// Not guarded: a variable with a single class yields a non-finite row.
    pub fn logn_normalized_matrix(&self) -> Array2<f64> {
        let mut te = self.matrix();
        for (mut row, &n) in te.rows_mut().into_iter().zip(&self.n_classes) {
            let log_n = (n as f64).ln();
            row.mapv_inplace(|v| v / log_n);
        }
        te
    }
}

pub fn discrete_transfer_entropy(classes: &DiscreteClasses, lag: usize) -> Result<Array2<f64>> {
    Ok(TransferEntropy::new_discrete(classes, lag)?.matrix())
}

pub fn discrete_normalized_transfer_entropy(
    classes: &DiscreteClasses,
    lag: usize,
) -> Result<Array2<f64>> {
    Ok(TransferEntropy::new_discrete(classes, lag)?.normalized_matrix())
}

pub fn discrete_logn_normalized_transfer_entropy(
    classes: &DiscreteClasses,
    lag: usize,
) -> Result<Array2<f64>> {
    Ok(TransferEntropy::new_discrete(classes, lag)?.logn_normalized_matrix())
}

/// Transfer entropy between all pairs of variables.
///
/// # Arguments
///
/// * `data` - Samples `[timesteps x variables]`, uniformly spaced in time
/// * `bins` - Bin count or edges, uniform or per variable
/// * `lag` - Offset in rows between the current and the lagged observations
///
/// # Returns
///
/// Matrix whose entry `[i, j]` is the transfer entropy from variable `j` to variable `i`.
pub fn transfer_entropy(
    data: impl Into<SampleInput>,
    bins: impl Into<Bins>,
    lag: usize,
) -> Result<Array2<f64>> {
    Ok(TransferEntropy::new_binned(data, bins, lag)?.matrix())
}

/// H-normalized transfer entropy, see [`TransferEntropy::normalized_matrix`].
pub fn normalized_transfer_entropy(
    data: impl Into<SampleInput>,
    bins: impl Into<Bins>,
    lag: usize,
) -> Result<Array2<f64>> {
    Ok(TransferEntropy::new_binned(data, bins, lag)?.normalized_matrix())
}

/// LogN-normalized transfer entropy, see [`TransferEntropy::logn_normalized_matrix`].
pub fn logn_normalized_transfer_entropy(
    data: impl Into<SampleInput>,
    bins: impl Into<Bins>,
    lag: usize,
) -> Result<Array2<f64>> {
    Ok(TransferEntropy::new_binned(data, bins, lag)?.logn_normalized_matrix())
}

/// A directed entry of a causality matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CausalLink {
    pub target: usize,
    pub source: usize,
    pub value: f64,
}

/// Off-diagonal entries strictly above `threshold`, in row-major order.
pub fn significant_links(matrix: ArrayView2<'_, f64>, threshold: f64) -> Vec<CausalLink> {
    matrix
        .indexed_iter()
        .filter(|&((target, source), &value)| target != source && value > threshold)
        .map(|((target, source), &value)| CausalLink {
            target,
            source,
            value,
        })
        .collect()
}
