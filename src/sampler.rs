//! Random quote sampling without replacement.

use crate::error::{QuoteError, Result};
use rand::Rng;
use tracing::{debug, instrument};

/// Draw `count` sentences from `pool` using the thread-local RNG.
///
/// See [`sample_with`] for the exact contract.
pub fn sample(pool: &mut Vec<String>, count: usize) -> Result<Vec<String>> {
    sample_with(&mut rand::rng(), pool, count)
}

/// Draw `count` sentences uniformly at random from `pool`, without
/// replacement.
///
/// Each draw picks a remaining *position* and removes exactly that position,
/// so duplicate sentence texts at different positions can both be drawn but
/// no position is drawn twice. On return the pool holds the undrawn
/// sentences in their original relative order.
///
/// # Errors
///
/// [`QuoteError::TooManyQuotes`] if `count` exceeds the pool size; the pool
/// is left untouched in that case.
#[instrument(level = "debug", skip(rng, pool), fields(pool_size = pool.len()))]
pub fn sample_with<R: Rng>(
    rng: &mut R,
    pool: &mut Vec<String>,
    count: usize,
) -> Result<Vec<String>> {
    if count > pool.len() {
        return Err(QuoteError::TooManyQuotes {
            requested: count,
            available: pool.len(),
        });
    }

    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.random_range(0..pool.len());
        drawn.push(pool.remove(index));
    }

    debug!(drawn = drawn.len(), remaining = pool.len(), "Sampled quotes");
    Ok(drawn)
}
