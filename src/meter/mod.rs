//! Serialized-size measurement, one adapter per Roaring implementation.

mod croaring;
mod roaring_rs;

pub use self::croaring::CRoaringMeter;
pub use self::roaring_rs::RoaringRsMeter;

use std::fmt;

/// Serialization format requested from a Roaring implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Format meant to be readable across platforms and implementations.
    Portable,
    /// Implementation-specific format, possibly more compact.
    Native,
}

impl Format {
    /// Maps a "portable" flag to the matching format.
    pub fn from_portable(portable: bool) -> Self {
        if portable {
            Self::Portable
        } else {
            Self::Native
        }
    }

    /// Returns true for the portable format.
    pub fn is_portable(self) -> bool {
        self == Self::Portable
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Self::Portable => "portable",
            Self::Native => "native",
        })
    }
}

/// Builds a 64-bit compressed bitmap and reports its serialized size.
///
/// Implementations must treat `values` as a set: ordering and duplicates are
/// handled by the underlying bitmap.
pub trait SizeMeter {
    /// Human-readable name of the implementation under test.
    fn name(&self) -> &str;

    /// Returns the size, in bytes, of the bitmap holding `values` once
    /// serialized in the given format.
    fn measure(&self, values: &[u64], format: Format) -> usize;
}

impl<M: SizeMeter + ?Sized> SizeMeter for &M {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn measure(&self, values: &[u64], format: Format) -> usize {
        (**self).measure(values, format)
    }
}
