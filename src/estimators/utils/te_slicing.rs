use ndarray::{s, ArrayView2};
use tracing::trace;

use crate::error::{EntropyError, Result};

/// Split `[timesteps x variables]` data into aligned current and lagged observations.
///
/// Returns `(current, lagged)`, where `current` holds rows `lag..n` and `lagged` holds rows
/// `0..n - lag`. Row `t` of both views refers to times `t + lag` and `t`; alignment is by
/// position, so the series must be uniformly sampled.
///
/// Fails unless `1 <= lag < n`, since otherwise one of the slices would be empty.
pub fn lag_slices<T>(
    data: ArrayView2<'_, T>,
    lag: usize,
) -> Result<(ArrayView2<'_, T>, ArrayView2<'_, T>)> {
    let n = data.nrows();
    if lag == 0 || lag >= n {
        return Err(EntropyError::Dimension(format!(
            "lag must satisfy 1 <= lag < {n}, got {lag}"
        )));
    }
    trace!(lag, n_steps = n, n_samples = n - lag, "slicing lagged observations");
    let current = data.slice_move(s![lag.., ..]);
    let lagged = data.slice_move(s![..n - lag, ..]);
    Ok((current, lagged))
}
