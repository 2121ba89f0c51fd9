// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::{array, Array2};

use te_toolbox::estimators::entropy::{entropy_vector, joint_entropy_matrix};
use te_toolbox::estimators::mutual_information::mutual_information;
use te_toolbox::EntropyError;

use crate::test_helpers::{
    generate_gaussian_data, generate_uniform_integer_data, Distribution, Normal, SeedableRng,
    StdRng,
};

#[test]
fn independent_gaussians_share_little_information() {
    let data = generate_gaussian_data(1000, 3, 0.0, 1.0, 42);
    let nmi = mutual_information(data.view(), 10usize, true).unwrap();
    for ((i, j), &v) in nmi.indexed_iter() {
        if i == j {
            assert_abs_diff_eq!(v, 1.0, epsilon = 1e-12);
        } else {
            assert!((0.0..0.15).contains(&v), "nmi[{i}, {j}] = {v}");
        }
    }
}

#[test]
fn independent_uniform_integers_share_little_information() {
    // Two independent sequences on 0..10, one bin per value.
    let data = generate_uniform_integer_data(1000, 2, 10, 2024);
    let nmi = mutual_information(data.view(), 10usize, true).unwrap();
    assert!((0.0..0.15).contains(&nmi[[0, 1]]), "nmi = {}", nmi[[0, 1]]);
    assert_abs_diff_eq!(nmi[[0, 1]], nmi[[1, 0]], epsilon = 1e-12);

    let mi = mutual_information(data.view(), 10usize, false).unwrap();
    assert!((0.0..0.15).contains(&mi[[0, 1]]), "mi = {}", mi[[0, 1]]);
}

#[test]
fn mi_matches_entropy_identity() {
    let data = generate_gaussian_data(600, 3, 1.0, 2.0, 3);
    let mi = mutual_information(data.view(), 6usize, false).unwrap();
    let h = entropy_vector(data.view(), 6usize).unwrap();
    let jent = joint_entropy_matrix(data.view(), 6usize).unwrap();
    for i in 0..3 {
        assert_abs_diff_eq!(mi[[i, i]], h[i], epsilon = 1e-12);
        for j in 0..3 {
            assert_abs_diff_eq!(mi[[i, j]], h[i] + h[j] - jent[[i, j]], epsilon = 1e-12);
            assert_abs_diff_eq!(mi[[i, j]], mi[[j, i]], epsilon = 1e-12);
        }
    }
}

#[test]
fn dependent_variables_have_high_normalized_mi() {
    let mut rng = StdRng::seed_from_u64(17);
    let noise = Normal::new(0.0, 0.05).unwrap();
    let x = generate_gaussian_data(2000, 1, 0.0, 1.0, 18);
    let data = Array2::from_shape_fn((2000, 2), |(t, v)| {
        if v == 0 { x[[t, 0]] } else { x[[t, 0]] + noise.sample(&mut rng) }
    });
    let nmi = mutual_information(data.view(), 8usize, true).unwrap();
    assert!(nmi[[0, 1]] > 0.7);
}

#[test]
fn normalized_mi_with_constant_variable_is_nan() {
    let mut data = generate_gaussian_data(200, 2, 0.0, 1.0, 1);
    data.column_mut(1).fill(4.0);

    let mi = mutual_information(data.view(), 10usize, false).unwrap();
    assert_abs_diff_eq!(mi[[0, 1]], 0.0, epsilon = 1e-12);

    let nmi = mutual_information(data.view(), 10usize, true).unwrap();
    assert!(nmi[[0, 1]].is_nan());
    assert!(nmi[[1, 0]].is_nan());
    assert!(nmi[[1, 1]].is_nan());
}

#[test]
fn mi_requires_two_variables() {
    assert!(matches!(
        mutual_information(array![0.0, 1.0, 2.0], 10usize, false),
        Err(EntropyError::Dimension(_))
    ));
    assert!(matches!(
        mutual_information(array![0.0, 1.0, 2.0], 10usize, true),
        Err(EntropyError::Dimension(_))
    ));
    assert!(matches!(
        mutual_information(array![[0.0], [1.0], [2.0]], 10usize, false),
        Err(EntropyError::Dimension(_))
    ));
}
