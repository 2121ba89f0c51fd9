use std::collections::BTreeMap;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::estimators::approaches::common_nd::dataset::{
    require_matrix, require_multivariate, require_pairwise, MATRIX_DIMS, VECTOR_DIMS,
};
use crate::error::{EntropyError, Result};

/// Histograms with more cells than this are counted sparsely.
const MAX_DENSE_CELLS: usize = 1 << 22;

/// Discretized dataset: class labels `[timesteps x variables]` plus the number of classes
/// of each variable.
///
/// Labels of variable `v` lie in `0..n_classes[v]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteClasses {
    classes: Array2<usize>,
    n_classes: Vec<usize>,
    rank: usize,
}

impl DiscreteClasses {
    /// Build from a label matrix with one class count per variable.
    pub fn new(classes: Array2<usize>, n_classes: Vec<usize>) -> Result<Self> {
        Self::validated(classes, n_classes, MATRIX_DIMS)
    }

    /// Build from a label matrix where every variable has `n_classes` classes.
    pub fn uniform(classes: Array2<usize>, n_classes: usize) -> Result<Self> {
        let n_vars = classes.ncols();
        Self::validated(classes, vec![n_classes; n_vars], MATRIX_DIMS)
    }

    /// Build from the labels of a single variable.
    pub fn from_vector(classes: Array1<usize>, n_classes: usize) -> Result<Self> {
        Self::validated(classes.insert_axis(Axis(1)), vec![n_classes], VECTOR_DIMS)
    }

    /// Assemble from labels already known to be in range.
    pub(crate) fn from_parts(classes: Array2<usize>, n_classes: Vec<usize>, rank: usize) -> Self {
        debug_assert_eq!(classes.ncols(), n_classes.len());
        Self {
            classes,
            n_classes,
            rank,
        }
    }

    fn validated(classes: Array2<usize>, n_classes: Vec<usize>, rank: usize) -> Result<Self> {
        if classes.is_empty() {
            return Err(EntropyError::Shape {
                expected: "[timesteps] or [timesteps x variables]",
                found: format!("empty array of shape {:?}", classes.shape()),
            });
        }
        if n_classes.len() != classes.ncols() {
            return Err(EntropyError::BinSpecMismatch {
                given: n_classes.len(),
                expected: classes.ncols(),
            });
        }
        check_labels(classes.axis_iter(Axis(1)), &n_classes)?;
        Ok(Self {
            classes,
            n_classes,
            rank,
        })
    }

    pub fn n_steps(&self) -> usize {
        self.classes.nrows()
    }

    pub fn n_vars(&self) -> usize {
        self.classes.ncols()
    }

    pub fn n_classes(&self) -> &[usize] {
        &self.n_classes
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn view(&self) -> ArrayView2<'_, usize> {
        self.classes.view()
    }

    pub fn column(&self, variable: usize) -> ArrayView1<'_, usize> {
        self.classes.column(variable)
    }

    pub fn check_variable(&self, variable: usize) -> Result<()> {
        if variable >= self.n_vars() {
            return Err(EntropyError::VariableIndex {
                index: variable,
                n_vars: self.n_vars(),
            });
        }
        Ok(())
    }

    pub fn require_matrix(&self) -> Result<()> {
        require_matrix(self.rank, self.n_steps())
    }

    pub fn require_pairwise(&self) -> Result<()> {
        require_pairwise(self.rank, self.n_steps(), self.n_vars())
    }

    pub fn require_multivariate(&self) -> Result<()> {
        require_multivariate(self.n_vars())
    }
}

/// Every label must be below its variable's class count.
pub(crate) fn check_labels<'a>(
    columns: impl IntoIterator<Item = ArrayView1<'a, usize>>,
    n_classes: &[usize],
) -> Result<()> {
    for (variable, (column, &n)) in columns.into_iter().zip(n_classes).enumerate() {
        if let Some(&label) = column.iter().find(|&&label| label >= n) {
            return Err(EntropyError::ClassOutOfRange {
                variable,
                label,
                n_classes: n,
            });
        }
    }
    Ok(())
}

/// Counts of the non-empty cells of the joint histogram over `columns`.
///
/// Cells are visited in row-major (lexicographic) order on both the dense and the sparse
/// path, so the same input always yields the same sequence.
pub fn joint_counts(columns: &[ArrayView1<'_, usize>], n_classes: &[usize]) -> Vec<usize> {
    let n_steps = columns.first().map_or(0, |c| c.len());
    let cells = n_classes
        .iter()
        .try_fold(1usize, |acc, &n| acc.checked_mul(n))
        .filter(|&cells| cells <= MAX_DENSE_CELLS);

    match cells {
        Some(cells) => {
            let mut dense = vec![0usize; cells];
            for t in 0..n_steps {
                let mut flat = 0usize;
                for (column, &n) in columns.iter().zip(n_classes) {
                    flat = flat * n + column[t];
                }
                dense[flat] += 1;
            }
            dense.retain(|&cnt| cnt != 0);
            dense
        }
        None => {
            let mut sparse: BTreeMap<Vec<usize>, usize> = BTreeMap::new();
            for t in 0..n_steps {
                let key: Vec<usize> = columns.iter().map(|column| column[t]).collect();
                *sparse.entry(key).or_insert(0) += 1;
            }
            sparse.into_values().collect()
        }
    }
}

/// Shannon entropy in nats from bin counts over `n` observations.
///
/// Empty bins contribute nothing, so `0 ln 0` never turns into NaN.
pub fn entropy_from_counts(counts: impl IntoIterator<Item = usize>, n: usize) -> f64 {
    let n_f = n as f64;
    let mut h = 0.0_f64;
    for cnt in counts {
        if cnt > 0 {
            let p = cnt as f64 / n_f;
            h -= p * p.ln();
        }
    }
    h
}

/// Joint entropy of aligned label columns, without validation.
pub(crate) fn joint_entropy_of_columns(
    columns: &[ArrayView1<'_, usize>],
    n_classes: &[usize],
) -> f64 {
    let n_steps = columns.first().map_or(0, |c| c.len());
    entropy_from_counts(joint_counts(columns, n_classes), n_steps)
}
