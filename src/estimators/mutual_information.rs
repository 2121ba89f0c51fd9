use ndarray::Array2;
use tracing::debug;

use crate::estimators::approaches::binning::{Bins, Discretizer};
use crate::estimators::approaches::common_nd::dataset::{SampleData, SampleInput};
use crate::estimators::approaches::discrete::DiscreteClasses;
use crate::estimators::entropy::BinnedData;
use crate::estimators::traits::EntropyEstimator;
use crate::error::Result;

/// Pairwise mutual information of pre-discretized variables.
///
/// Entry `[i, j]` is $I(X_i; X_j) = H(X_i) + H(X_j) - H(X_i, X_j)$. With `normalize`, each
/// entry is divided by $\sqrt{H(X_i) H(X_j)}$. That division is not guarded: a variable with
/// zero entropy turns its row and column into NaN.
pub fn discrete_mutual_information(classes: &DiscreteClasses, normalize: bool) -> Result<Array2<f64>> {
    classes.require_multivariate()?;
    let h_xy = classes.joint_entropy_matrix()?;
    let h_x = classes.entropy_vector()?;

    let n_vars = classes.n_vars();
    Ok(Array2::from_shape_fn((n_vars, n_vars), |(i, j)| {
        let mi = h_x[j] + h_x[i] - h_xy[[j, i]];
        if normalize {
            mi / (h_x[j] * h_x[i]).sqrt()
        } else {
            mi
        }
    }))
}

/// Pairwise mutual information of continuous data binned under `bins`.
///
/// # Arguments
///
/// * `data` - Samples `[timesteps x variables]`
/// * `bins` - Bin count or edges, uniform or per variable
/// * `normalize` - Divide by $\sqrt{H(X_i) H(X_j)}$
pub fn mutual_information(
    data: impl Into<SampleInput>,
    bins: impl Into<Bins>,
    normalize: bool,
) -> Result<Array2<f64>> {
    let samples = SampleData::new(data)?;
    samples.require_multivariate()?;
    let bins = bins.into();
    debug!(
        n_steps = samples.n_steps(),
        n_vars = samples.n_vars(),
        normalize,
        "computing mutual information"
    );
    let binned = BinnedData::from_samples(&samples, &bins, &Discretizer::global())?;
    discrete_mutual_information(binned.classes(), normalize)
}
