use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Description of a test vector: which regime, with which parameters.
///
/// A regime is cheap to store and to serialize; the vector itself is only
/// materialized by [`Regime::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Regime {
    /// No value.
    Empty,
    /// A single value.
    Singleton {
        /// The value.
        value: u64,
    },
    /// Consecutive integers.
    DenseRange {
        /// First value.
        #[serde(default)]
        start: u64,
        /// Number of values.
        len: u64,
    },
    /// Integers spaced by a fixed stride.
    Strided {
        /// Number of values.
        count: u64,
        /// Gap between two consecutive values.
        stride: u64,
        /// First value.
        #[serde(default)]
        offset: u64,
    },
    /// A dense run starting at zero, followed by a strided sparse run.
    Mixed {
        /// Length of the dense run.
        dense_len: u64,
        /// Number of values in the sparse run.
        sparse_count: u64,
        /// Gap between two consecutive sparse values.
        stride: u64,
        /// First value of the sparse run.
        offset: u64,
    },
    /// Consecutive integers in a non-zero 32-bit bucket.
    HighBits {
        /// Bucket key (upper 32 bits).
        bucket: u32,
        /// Number of values.
        len: u32,
    },
    /// Consecutive integers in each of the first buckets.
    MultiBucket {
        /// Number of buckets.
        buckets: u32,
        /// Number of values per bucket.
        per_bucket: u32,
    },
    /// Linear congruential sequence.
    PseudoRandom {
        /// Initial state, emitted first.
        seed: u64,
        /// Number of values.
        count: usize,
    },
    /// Successive powers of two, starting at 1.
    PowersOfTwo {
        /// Number of values, at most 64.
        count: u32,
    },
}

impl Regime {
    /// Short name of the regime, as used in suite files.
    pub fn name(&self) -> &'static str {
        match *self {
            Self::Empty => "empty",
            Self::Singleton { .. } => "singleton",
            Self::DenseRange { .. } => "dense_range",
            Self::Strided { .. } => "strided",
            Self::Mixed { .. } => "mixed",
            Self::HighBits { .. } => "high_bits",
            Self::MultiBucket { .. } => "multi_bucket",
            Self::PseudoRandom { .. } => "pseudo_random",
            Self::PowersOfTwo { .. } => "powers_of_two",
        }
    }

    /// Checks that every value of the regime fits in 64 bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] when at least one value would not.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::DenseRange { start, len } => {
                self.check(last_value(len, 1, start), "range end")
            },
            Self::Strided {
                count,
                stride,
                offset,
            } => self.check(last_value(count, stride, offset), "last value"),
            Self::Mixed {
                sparse_count,
                stride,
                offset,
                ..
            } => self.check(
                last_value(sparse_count, stride, offset),
                "last sparse value",
            ),
            Self::PowersOfTwo { count } if count > u64::BITS => {
                Err(Error::Overflow {
                    regime: self.name(),
                    reason: format!("2^{} is not a 64-bit value", count - 1),
                })
            },
            // Bucketed regimes are bounded by their 32-bit parameters.
            _ => Ok(()),
        }
    }

    /// Materializes the test vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the parameters are out of range (see
    /// [`Regime::validate`]).
    pub fn generate(&self) -> Result<Vec<u64>> {
        self.validate()?;

        Ok(match *self {
            Self::Empty => super::empty(),
            Self::Singleton { value } => super::singleton(value),
            Self::DenseRange { start, len } => super::dense_range(start, len),
            Self::Strided {
                count,
                stride,
                offset,
            } => super::strided(count, stride, offset),
            Self::Mixed {
                dense_len,
                sparse_count,
                stride,
                offset,
            } => super::mixed(dense_len, sparse_count, stride, offset),
            Self::HighBits { bucket, len } => super::high_bits(bucket, len),
            Self::MultiBucket {
                buckets,
                per_bucket,
            } => super::multi_bucket(buckets, per_bucket),
            Self::PseudoRandom { seed, count } => {
                super::pseudo_random(seed, count)
            },
            Self::PowersOfTwo { count } => super::powers_of_two(count),
        })
    }

    fn check(&self, last: Option<u64>, what: &str) -> Result<()> {
        last.map(|_| ()).ok_or_else(|| Error::Overflow {
            regime: self.name(),
            reason: format!("{what} exceeds {}", u64::MAX),
        })
    }
}

/// Computes `offset + (count - 1) * stride`, the largest value of a strided
/// run, or `None` on overflow.
///
/// An empty run never overflows.
fn last_value(count: u64, stride: u64, offset: u64) -> Option<u64> {
    match count.checked_sub(1) {
        None => Some(offset),
        Some(last) => last.checked_mul(stride)?.checked_add(offset),
    }
}
