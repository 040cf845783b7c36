use super::{Format, SizeMeter};
use ::croaring::{Native, Portable, Treemap};

/// Measures bitmaps built with CRoaring, through its tree-map of 32-bit
/// bitmaps.
///
/// Both serialization formats are supported.
#[derive(Debug, Default, Clone, Copy)]
pub struct CRoaringMeter;

impl CRoaringMeter {
    /// Creates a new meter.
    pub fn new() -> Self {
        Self
    }
}

impl SizeMeter for CRoaringMeter {
    fn name(&self) -> &str {
        "CRoaring"
    }

    fn measure(&self, values: &[u64], format: Format) -> usize {
        let mut treemap = Treemap::new();
        for &value in values {
            treemap.add(value);
        }

        match format {
            Format::Portable => {
                treemap.get_serialized_size_in_bytes::<Portable>()
            },
            Format::Native => treemap.get_serialized_size_in_bytes::<Native>(),
        }
    }
}
