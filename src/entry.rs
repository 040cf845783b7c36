/// A 64-bit value split along the 32-bit bucket boundary used by Roaring
/// tree-maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    /// Bucket key (the 32 most significant bits).
    pub(crate) bucket: u32,
    /// Position inside the bucket (the 32 least significant bits).
    pub(crate) offset: u32,
}

impl Entry {
    /// Initialize a new entry from its bucket and its offset in the bucket.
    pub(crate) fn from_parts(bucket: u32, offset: u32) -> Self {
        Self { bucket, offset }
    }
}

impl From<u64> for Entry {
    #[allow(clippy::cast_possible_truncation)] // We truncate on purpose here.
    fn from(value: u64) -> Self {
        Self::from_parts((value >> 32) as u32, (value & 0xFFFF_FFFF) as u32)
    }
}

impl From<Entry> for u64 {
    fn from(entry: Entry) -> Self {
        u64::from(entry.bucket) << 32 | u64::from(entry.offset)
    }
}
