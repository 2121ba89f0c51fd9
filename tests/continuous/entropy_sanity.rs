// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::Array2;
use rstest::rstest;

use te_toolbox::estimators::entropy::{
    conditional_entropy_matrix, conditional_entropy_of, entropy_of, entropy_vector,
    joint_entropy_matrix, joint_entropy_of,
};

use crate::test_helpers::{generate_gaussian_data, NUMERIC_TOLERANCE};

#[rstest]
#[case(2)]
#[case(5)]
#[case(10)]
fn chain_rule_holds_for_every_pair(#[case] n_bins: usize) {
    let data = generate_gaussian_data(1000, 3, 0.0, 1.0, 42 + n_bins as u64);
    let h = entropy_vector(data.view(), n_bins).unwrap();
    let jent = joint_entropy_matrix(data.view(), n_bins).unwrap();
    let cond = conditional_entropy_matrix(data.view(), n_bins).unwrap();

    for i in 0..3 {
        assert_abs_diff_eq!(
            entropy_of(data.view(), n_bins, i).unwrap(),
            h[i],
            epsilon = 1e-12
        );
        for j in 0..3 {
            // H(X_i | X_j) + H(X_j) = H(X_i, X_j)
            assert_abs_diff_eq!(cond[[i, j]] + h[j], jent[[i, j]], epsilon = NUMERIC_TOLERANCE);
            assert_abs_diff_eq!(jent[[i, j]], jent[[j, i]], epsilon = 1e-12);
            assert_abs_diff_eq!(
                joint_entropy_of(data.view(), n_bins, (i, j)).unwrap(),
                jent[[i, j]],
                epsilon = 1e-12
            );
            assert_abs_diff_eq!(
                conditional_entropy_of(data.view(), n_bins, (i, j)).unwrap(),
                cond[[i, j]],
                epsilon = 1e-12
            );
        }
    }
}

#[rstest]
#[case(2)]
#[case(5)]
#[case(10)]
fn entropies_are_bounded(#[case] n_bins: usize) {
    let data = generate_gaussian_data(500, 2, 3.0, 0.5, 7);
    let h = entropy_vector(data.view(), n_bins).unwrap();
    for &v in h.iter() {
        assert!(v >= 0.0);
        assert!(v <= (n_bins as f64).ln() + 1e-12);
    }
    let cond = conditional_entropy_matrix(data.view(), n_bins).unwrap();
    assert!(cond.iter().all(|&v| v >= -1e-12));
}

#[test]
fn conditional_entropy_is_asymmetric() {
    // Column 1 is a coarse function of column 0.
    let data = generate_gaussian_data(2000, 1, 0.0, 1.0, 99);
    let mut pair = Array2::zeros((2000, 2));
    for t in 0..2000 {
        pair[[t, 0]] = data[[t, 0]];
        pair[[t, 1]] = if data[[t, 0]] > 0.0 { 1.0 } else { 0.0 };
    }
    let cond = conditional_entropy_matrix(pair.view(), 10usize).unwrap();
    // Knowing x fixes the sign bit up to the single bin straddling zero.
    assert!(cond[[1, 0]] < 0.25);
    assert!(cond[[0, 1]] > 0.8);
}
