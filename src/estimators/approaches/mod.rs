pub mod binning;
pub mod common_nd;
pub mod discrete;

// Re-exports so callers can import common types from `approaches::*`.
pub use binning::{BinSpec, Bins, DiscretizationCache, Discretizer};
pub use common_nd::dataset::{SampleData, SampleInput};
pub use discrete::DiscreteClasses;
