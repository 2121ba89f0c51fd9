pub mod entropy;
pub mod mutual_information;
pub mod transfer_entropy;
pub mod traits;
pub mod approaches;
pub mod utils;

pub use traits::EntropyEstimator;
