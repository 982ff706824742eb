use rand::Rng;

use crate::core::error::GameError;

/// In-place Fisher-Yates shuffle. Walks from the back, swapping each slot
/// with a uniformly chosen slot at or before it.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Draws `size` words from `source` without replacement.
///
/// The source is copied, shuffled and truncated, so every `size`-subset is
/// equally likely. `source` is expected to be normalized already (see
/// [`super::words::normalize`]); the pool then holds distinct entries.
pub fn draw_pool<R: Rng + ?Sized>(
    source: &[String],
    size: usize,
    rng: &mut R,
) -> Result<Vec<String>, GameError> {
    if size > source.len() {
        return Err(GameError::PoolTooLarge {
            requested: size,
            available: source.len(),
        });
    }

    let mut pool = source.to_vec();
    shuffle(&mut pool, rng);
    pool.truncate(size);
    Ok(pool)
}
