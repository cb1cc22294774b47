//! Helpers for common random operations over a [`RandomSource`].

use crate::RandomSource;

/// Returns whether a random event with probability `numerator /
/// denominator` occurs.
pub fn chance(rng: &mut dyn RandomSource, numerator: u64, denominator: u64) -> bool {
    rng.next().rem_euclid(denominator) < numerator
}

/// Returns a random integer in the range `[min, max)`.
pub fn range(rng: &mut dyn RandomSource, min: u64, max: u64) -> u64 {
    rng.next().rem_euclid(max - min) + min
}

/// Returns a random element of the given slice, or `None` if it is empty.
pub fn sample_slice<'a, T>(rng: &mut dyn RandomSource, slice: &'a [T]) -> Option<&'a T> {
    if slice.is_empty() {
        return None;
    }
    let index = range(rng, 0, slice.len() as u64) as usize;
    slice.get(index)
}

/// Fisher-Yates shuffle.
pub fn shuffle<T>(rng: &mut dyn RandomSource, items: &mut [T]) {
    if items.is_empty() {
        return;
    }
    for i in 0..items.len() - 1 {
        let j = range(rng, i as u64, items.len() as u64) as usize;
        items.swap(i, j);
    }
}

/// Returns `count` distinct elements of the given slice, uniformly at
/// random, or `None` if the slice has fewer than `count` elements.
///
/// Implemented as a partial Fisher-Yates shuffle over indices, so only the
/// first `count` positions consume randomness.
pub fn sample_distinct<T>(rng: &mut dyn RandomSource, slice: &[T], count: usize) -> Option<Vec<T>>
where
    T: Clone,
{
    if slice.len() < count {
        return None;
    }
    let mut indices = (0..slice.len()).collect::<Vec<_>>();
    for i in 0..count {
        let j = range(rng, i as u64, indices.len() as u64) as usize;
        indices.swap(i, j);
    }
    Some(
        indices[..count]
            .iter()
            .map(|&index| slice[index].clone())
            .collect(),
    )
}
