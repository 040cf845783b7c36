//! Deterministic test vectors, covering several density regimes.
//!
//! Every function here is pure: the same parameters always give the same
//! sequence, element for element.

mod lcg;
mod regime;

pub use lcg::Lcg;
pub use regime::Regime;

use crate::Entry;

/// No value at all.
pub fn empty() -> Vec<u64> {
    Vec::new()
}

/// A single value.
pub fn singleton(value: u64) -> Vec<u64> {
    vec![value]
}

/// `len` consecutive integers, starting at `start`.
pub fn dense_range(start: u64, len: u64) -> Vec<u64> {
    (0..len).map(|i| start + i).collect()
}

/// `count` integers spaced by `stride`, the first one being `offset`.
pub fn strided(count: u64, stride: u64, offset: u64) -> Vec<u64> {
    (0..count).map(|i| offset + i * stride).collect()
}

/// A dense run `[0, dense_len)` followed by a strided sparse run.
///
/// The sparse run should start past the dense one, so the bitmap ends up
/// mixing container kinds.
pub fn mixed(
    dense_len: u64,
    sparse_count: u64,
    stride: u64,
    offset: u64,
) -> Vec<u64> {
    let mut values = dense_range(0, dense_len);
    values.extend(strided(sparse_count, stride, offset));
    values
}

/// `len` consecutive integers at the beginning of the given 32-bit bucket.
pub fn high_bits(bucket: u32, len: u32) -> Vec<u64> {
    (0..len)
        .map(|i| Entry::from_parts(bucket, i).into())
        .collect()
}

/// `per_bucket` consecutive integers at the beginning of each of the first
/// `buckets` 32-bit buckets.
pub fn multi_bucket(buckets: u32, per_bucket: u32) -> Vec<u64> {
    (0..buckets).flat_map(|bucket| high_bits(bucket, per_bucket)).collect()
}

/// `count` values from the linear congruential generator, in generation
/// order.
pub fn pseudo_random(seed: u64, count: usize) -> Vec<u64> {
    Lcg::new(seed).take(count).collect()
}

/// `2^i` for every `i` in `[0, count)`.
///
/// `count` must not exceed 64.
pub fn powers_of_two(count: u32) -> Vec<u64> {
    (0..count).map(|i| 1 << i).collect()
}
