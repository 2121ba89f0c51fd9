// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::{array, Array1};

use te_toolbox::estimators::approaches::discrete::{entropy_from_counts, joint_counts};

#[test]
fn entropy_from_counts_skips_empty_bins() {
    assert_abs_diff_eq!(entropy_from_counts([2, 0, 2], 4), 2f64.ln(), epsilon = 1e-12);
    assert_eq!(entropy_from_counts([5], 5), 0.0);
    assert_eq!(entropy_from_counts([0, 0, 3, 0], 3), 0.0);
}

#[test]
fn entropy_from_counts_uniform() {
    for k in [2usize, 3, 7, 16] {
        assert_abs_diff_eq!(
            entropy_from_counts(vec![1; k], k),
            (k as f64).ln(),
            epsilon = 1e-12
        );
    }
}

#[test]
fn joint_counts_are_row_major() {
    let x = array![1, 0, 1, 1, 0];
    let y = array![0, 2, 0, 1, 2];
    // Cells (0,2) x2, (1,0) x2, (1,1) x1 in lexicographic order.
    let counts = joint_counts(&[x.view(), y.view()], &[2, 3]);
    assert_eq!(counts, vec![2, 2, 1]);
}

#[test]
fn sparse_path_is_row_major() {
    // 3 x 2048 x 1024 cells exceeds the dense limit.
    let a = array![2, 0, 2, 1, 0, 2];
    let b = array![5, 2047, 5, 0, 2047, 1];
    let c = array![1023, 0, 1023, 7, 0, 7];
    let sparse = joint_counts(&[a.view(), b.view(), c.view()], &[3, 2048, 1024]);
    // (0,2047,0) x2, (1,0,7) x1, (2,1,7) x1, (2,5,1023) x2
    assert_eq!(sparse, vec![2, 1, 1, 2]);
}

#[test]
fn single_column_counts() {
    let x: Array1<usize> = Array1::from(vec![3, 3, 1, 0, 3]);
    assert_eq!(joint_counts(&[x.view()], &[4]), vec![1, 1, 3]);
}
