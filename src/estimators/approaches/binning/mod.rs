// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Binning: turns continuous columns into class labels, memoized by content.

pub mod bins;
pub mod cache;
pub mod discretizer;

pub use bins::{padded_edges, BinSpec, Bins, MAX_BIN_COUNT};
pub use cache::{CacheStats, DiscretizationCache, DEFAULT_CACHE_CAPACITY};
pub use discretizer::{discretize_1d, DiscretizedColumn, Discretizer};
