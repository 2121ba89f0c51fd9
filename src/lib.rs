// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # te-toolbox
//!
//! Histogram-based information measures for multivariate time series: entropy, joint and
//! conditional entropy, mutual information and transfer entropy, aimed at causality analysis
//! of financial returns.
//!
//! ## Quick Start
//!
//! ```rust
//! use te_toolbox::estimators::entropy::{BinnedData, EntropyEstimator};
//! use te_toolbox::estimators::transfer_entropy::transfer_entropy;
//! use ndarray::array;
//!
//! let data = array![[0.1, 1.0], [0.4, 0.2], [0.9, 0.5], [0.3, 0.8], [0.7, 0.1]];
//!
//! // Bin once, query many measures
//! let binned = BinnedData::new(data.clone(), 3usize).unwrap();
//! let h = binned.entropy_vector().unwrap();
//! let h_cond = binned.conditional_entropy_matrix().unwrap();
//!
//! // Entry [i, j] is the transfer entropy from variable j to variable i
//! let te = transfer_entropy(data, 3usize, 1).unwrap();
//! ```
//!
//! ## Measures
//!
//! | Measure | Continuous (binned) | Pre-discretized |
//! |---------|---------------------|-----------------|
//! | Entropy | `entropy_of`, `entropy_vector` | `discrete_entropy_*` |
//! | Joint entropy | `joint_entropy_of`, `joint_entropy_matrix`, `multivar_joint_entropy` | `discrete_joint_entropy_*`, `discrete_multivar_joint_entropy` |
//! | Conditional entropy | `conditional_entropy_of`, `conditional_entropy_matrix` | `discrete_conditional_entropy_*` |
//! | Mutual information | `mutual_information` | `discrete_mutual_information` |
//! | Transfer entropy | `transfer_entropy`, `normalized_transfer_entropy`, `logn_normalized_transfer_entropy` | `discrete_*_transfer_entropy` |
//!
//! All entropies are in nats.
//!
//! ## Architecture
//!
//! 1. **Binning**: `BinSpec`/`Bins` describe bins per variable; the `Discretizer` maps
//!    columns to class labels, memoized by content in a bounded LRU `DiscretizationCache`.
//! 2. **Discrete engine**: `DiscreteClasses` answers marginal, joint (pairwise and n-way)
//!    and conditional entropies from label histograms.
//! 3. **Continuous façade**: `BinnedData` and the free functions in `estimators::entropy`.
//! 4. **Derived measures**: mutual information and transfer entropy composed from entropies.
//!
//! Failures are reported as [`EntropyError`] before any output is computed.

pub mod error;
pub mod estimators;

pub use error::{EntropyError, Result};
pub use estimators::traits::EntropyEstimator;
