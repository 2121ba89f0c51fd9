use ndarray::{Array1, Array2};
use tracing::debug;

use crate::estimators::approaches::binning::{Bins, Discretizer};
use crate::estimators::approaches::common_nd::dataset::{SampleData, SampleInput};
use crate::estimators::approaches::discrete::DiscreteClasses;
pub use crate::estimators::traits::EntropyEstimator;
use crate::error::Result;

/// Entropy estimator factory for discrete and binned continuous data.
pub struct Entropy;

impl Entropy {
    /// Creates an estimator over pre-discretized labels.
    ///
    /// # Arguments
    ///
    /// * `classes` - Label matrix `[timesteps x variables]`
    /// * `n_classes` - Number of classes of each variable
    pub fn new_discrete(classes: Array2<usize>, n_classes: Vec<usize>) -> Result<DiscreteClasses> {
        DiscreteClasses::new(classes, n_classes)
    }

    /// Creates a histogram estimator over continuous data, discretized through the
    /// process-wide cache.
    ///
    /// # Arguments
    ///
    /// * `data` - `[timesteps]` or `[timesteps x variables]` samples
    /// * `bins` - One bin specification for all variables, or one per variable
    pub fn new_binned(data: impl Into<SampleInput>, bins: impl Into<Bins>) -> Result<BinnedData> {
        BinnedData::new(data, bins)
    }
}

/// Continuous samples already mapped onto histogram bins.
///
/// Wraps the discrete engine: every entropy operation is answered from the class labels,
/// so one binning serves any number of measures.
#[derive(Debug, Clone)]
pub struct BinnedData {
    classes: DiscreteClasses,
}

impl BinnedData {
    pub fn new(data: impl Into<SampleInput>, bins: impl Into<Bins>) -> Result<Self> {
        Self::with_discretizer(data, bins, &Discretizer::global())
    }

    /// Bin through an explicit discretizer, e.g. one with a private or no cache.
    pub fn with_discretizer(
        data: impl Into<SampleInput>,
        bins: impl Into<Bins>,
        discretizer: &Discretizer,
    ) -> Result<Self> {
        let samples = SampleData::new(data)?;
        Self::from_samples(&samples, &bins.into(), discretizer)
    }

    pub fn from_samples(samples: &SampleData, bins: &Bins, discretizer: &Discretizer) -> Result<Self> {
        let classes = discretizer.discretize(samples, bins)?;
        Ok(Self { classes })
    }

    pub fn classes(&self) -> &DiscreteClasses {
        &self.classes
    }

    pub fn into_classes(self) -> DiscreteClasses {
        self.classes
    }
}

impl EntropyEstimator for BinnedData {
    fn n_vars(&self) -> usize {
        self.classes.n_vars()
    }

    fn entropy_of(&self, variable: usize) -> Result<f64> {
        self.classes.entropy_of(variable)
    }

    fn entropy_vector(&self) -> Result<Array1<f64>> {
        self.classes.entropy_vector()
    }

    fn joint_entropy_of(&self, pair: (usize, usize)) -> Result<f64> {
        self.classes.joint_entropy_of(pair)
    }

    fn joint_entropy_matrix(&self) -> Result<Array2<f64>> {
        self.classes.joint_entropy_matrix()
    }

    fn multivar_joint_entropy(&self) -> Result<f64> {
        self.classes.multivar_joint_entropy()
    }
}

enum Requirement {
    Any,
    Matrix,
    Pairwise,
    Multivariate,
}

/// Validate shape first, then bin; nothing is discretized for malformed input.
fn bin(data: impl Into<SampleInput>, bins: impl Into<Bins>, need: Requirement) -> Result<BinnedData> {
    let samples = SampleData::new(data)?;
    match need {
        Requirement::Any => {}
        Requirement::Matrix => samples.require_matrix()?,
        Requirement::Pairwise => samples.require_pairwise()?,
        Requirement::Multivariate => samples.require_multivariate()?,
    }
    let bins = bins.into();
    debug!(
        n_steps = samples.n_steps(),
        n_vars = samples.n_vars(),
        ?bins,
        "binning continuous data"
    );
    BinnedData::from_samples(&samples, &bins, &Discretizer::global())
}

/// Entropy of one variable of continuous data.
///
/// # Arguments
///
/// * `data` - `[timesteps]` or `[timesteps x variables]` samples
/// * `bins` - Bin count or edges, uniform or per variable
/// * `variable` - Column to evaluate
pub fn entropy_of(data: impl Into<SampleInput>, bins: impl Into<Bins>, variable: usize) -> Result<f64> {
    bin(data, bins, Requirement::Any)?.entropy_of(variable)
}

/// Entropy of every variable; a `[timesteps]` input yields a vector of length one.
pub fn entropy_vector(data: impl Into<SampleInput>, bins: impl Into<Bins>) -> Result<Array1<f64>> {
    bin(data, bins, Requirement::Any)?.entropy_vector()
}

pub fn joint_entropy_of(
    data: impl Into<SampleInput>,
    bins: impl Into<Bins>,
    pair: (usize, usize),
) -> Result<f64> {
    bin(data, bins, Requirement::Pairwise)?.joint_entropy_of(pair)
}

/// Pairwise joint entropy matrix; entry `[i, j]` is $H(X_i, X_j)$.
pub fn joint_entropy_matrix(data: impl Into<SampleInput>, bins: impl Into<Bins>) -> Result<Array2<f64>> {
    bin(data, bins, Requirement::Pairwise)?.joint_entropy_matrix()
}

/// Joint entropy $H(X_1, \dots, X_n)$ over all columns.
pub fn multivar_joint_entropy(data: impl Into<SampleInput>, bins: impl Into<Bins>) -> Result<f64> {
    bin(data, bins, Requirement::Matrix)?.multivar_joint_entropy()
}

pub fn conditional_entropy_of(
    data: impl Into<SampleInput>,
    bins: impl Into<Bins>,
    pair: (usize, usize),
) -> Result<f64> {
    bin(data, bins, Requirement::Multivariate)?.conditional_entropy_of(pair)
}

/// Conditional entropy matrix; entry `[i, j]` is $H(X_i | X_j)$.
pub fn conditional_entropy_matrix(
    data: impl Into<SampleInput>,
    bins: impl Into<Bins>,
) -> Result<Array2<f64>> {
    bin(data, bins, Requirement::Multivariate)?.conditional_entropy_matrix()
}
