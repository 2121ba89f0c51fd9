// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use approx::assert_abs_diff_eq;
use ndarray::{array, Array1, Array2, ArrayD, IxDyn};

use te_toolbox::estimators::approaches::binning::{BinSpec, Bins, DiscretizationCache, Discretizer};
use te_toolbox::estimators::entropy::{
    conditional_entropy_matrix, conditional_entropy_of, entropy_of, entropy_vector, joint_entropy_matrix,
    joint_entropy_of, multivar_joint_entropy, BinnedData, Entropy, EntropyEstimator,
};
use te_toolbox::EntropyError;

use crate::test_helpers::{generate_gaussian_data, generate_uniform_integer_data};

#[test]
fn constant_data_has_zero_entropy() {
    let data = Array1::from_elem(100, 2.5);
    assert_eq!(entropy_of(data.clone(), 10usize, 0).unwrap(), 0.0);
    assert_eq!(entropy_vector(data, 10usize).unwrap(), array![0.0]);
}

#[test]
fn integer_valued_data_maps_one_value_per_bin() {
    let data = generate_uniform_integer_data(5000, 1, 5, 3);
    let h = entropy_of(data.view(), 5usize, 0).unwrap();
    // Five equally likely values: close to ln 5 and never above it.
    assert!(h <= 5f64.ln() + 1e-12);
    assert!(h > 5f64.ln() - 0.01);
}

#[test]
fn explicit_edges_match_hand_computed_entropy() {
    let data = array![0.1, 0.2, 0.6, 0.7, 0.8, 0.9];
    // Two in [0, 0.5), four in [0.5, 1].
    let h = entropy_of(data, BinSpec::Edges(vec![0.0, 0.5, 1.0]), 0).unwrap();
    let expected = -((1.0 / 3.0) * (1.0f64 / 3.0).ln() + (2.0 / 3.0) * (2.0f64 / 3.0).ln());
    assert_abs_diff_eq!(h, expected, epsilon = 1e-12);
}

#[test]
fn explicit_edges_must_cover_data() {
    let data = array![[0.0, 1.0], [2.0, 3.0]];
    assert!(matches!(
        entropy_vector(data, BinSpec::Edges(vec![0.0, 1.0, 2.0])),
        Err(EntropyError::Range { .. })
    ));
}

#[test]
fn repeated_calls_are_identical() {
    let data = generate_gaussian_data(1000, 3, 0.0, 1.0, 21);
    let first = joint_entropy_matrix(data.view(), 10usize).unwrap();
    let second = joint_entropy_matrix(data.view(), 10usize).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        multivar_joint_entropy(data.view(), 10usize).unwrap(),
        multivar_joint_entropy(data.view(), 10usize).unwrap()
    );
}

#[test]
fn empty_and_high_rank_inputs_are_shape_errors() {
    assert!(matches!(
        entropy_vector(Array1::<f64>::zeros(0), 10usize),
        Err(EntropyError::Shape { .. })
    ));
    assert!(matches!(
        entropy_of(Array2::<f64>::zeros((0, 2)), 10usize, 0),
        Err(EntropyError::Shape { .. })
    ));
    assert!(matches!(
        entropy_vector(ArrayD::<f64>::zeros(IxDyn(&[3, 2, 2])), 10usize),
        Err(EntropyError::Shape { .. })
    ));
}

#[test]
fn vectors_and_single_columns_are_rejected() {
    let vector = array![0.1, 0.5, 0.3, 0.9];
    assert!(matches!(
        joint_entropy_matrix(vector.clone(), 10usize),
        Err(EntropyError::Shape { .. })
    ));
    assert!(matches!(
        joint_entropy_of(vector.clone(), 10usize, (0, 0)),
        Err(EntropyError::Shape { .. })
    ));
    assert!(matches!(
        multivar_joint_entropy(vector.clone(), 10usize),
        Err(EntropyError::Shape { .. })
    ));
    assert!(matches!(
        conditional_entropy_matrix(vector.clone(), 10usize),
        Err(EntropyError::Dimension(_))
    ));
    assert!(matches!(
        conditional_entropy_of(vector, 10usize, (0, 0)),
        Err(EntropyError::Dimension(_))
    ));

    let single = array![[0.1], [0.5], [0.3], [0.9]];
    assert!(matches!(
        joint_entropy_matrix(single.clone(), 10usize),
        Err(EntropyError::Dimension(_))
    ));
    assert!(multivar_joint_entropy(single, 10usize).is_ok());
}

#[test]
fn per_variable_bins_must_match_variable_count() {
    let data = generate_gaussian_data(50, 3, 0.0, 1.0, 5);
    let err = entropy_vector(data.view(), Bins::per_variable([4usize, 6])).unwrap_err();
    assert_eq!(err, EntropyError::BinSpecMismatch { given: 2, expected: 3 });

    let h = entropy_vector(data.view(), Bins::per_variable([4usize, 6, 8])).unwrap();
    assert_eq!(h.len(), 3);
}

#[test]
fn invalid_bins_are_rejected() {
    let data = array![0.0, 1.0, 2.0];
    assert!(matches!(
        entropy_of(data.clone(), 0usize, 0),
        Err(EntropyError::InvalidBins(_))
    ));
    assert!(matches!(
        entropy_of(data, BinSpec::Edges(vec![2.0, 0.0]), 0),
        Err(EntropyError::InvalidBins(_))
    ));
}

#[test]
fn variable_index_is_checked() {
    let data = generate_gaussian_data(20, 2, 0.0, 1.0, 8);
    assert_eq!(
        entropy_of(data.view(), 4usize, 2).unwrap_err(),
        EntropyError::VariableIndex { index: 2, n_vars: 2 }
    );
}

#[test]
fn non_finite_samples_are_rejected() {
    let data = array![[0.0, 1.0], [f64::NAN, 2.0]];
    assert!(matches!(
        entropy_vector(data, 10usize),
        Err(EntropyError::NonFinite { row: 1, variable: 0, .. })
    ));
}

#[test]
fn binned_data_serves_many_measures() {
    let data = generate_gaussian_data(800, 3, 0.0, 1.0, 13);
    let cache = Arc::new(DiscretizationCache::with_capacity(16));
    let discretizer = Discretizer::new(Arc::clone(&cache));

    let binned = BinnedData::with_discretizer(data.view(), 8usize, &discretizer).unwrap();
    assert_eq!(cache.stats().misses, 3);

    let h = binned.entropy_vector().unwrap();
    let jent = binned.joint_entropy_matrix().unwrap();
    assert_eq!(h, entropy_vector(data.view(), 8usize).unwrap());
    assert_eq!(jent, joint_entropy_matrix(data.view(), 8usize).unwrap());
    assert_eq!(binned.classes().n_classes(), &[8, 8, 8]);

    // Binning the same content again is served from the cache.
    let again = BinnedData::with_discretizer(data.clone(), 8usize, &discretizer).unwrap();
    assert_eq!(cache.stats().hits, 3);
    assert_eq!(again.classes(), binned.classes());

    let via_factory = Entropy::new_binned(data.view(), 8usize).unwrap();
    assert_eq!(via_factory.into_classes().view(), binned.classes().view());
}
