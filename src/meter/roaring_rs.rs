use super::{Format, SizeMeter};
use roaring::RoaringTreemap;

/// Measures bitmaps built with the pure-Rust `roaring` crate.
///
/// The crate only knows the portable layout: a native request is measured in
/// that layout too.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoaringRsMeter;

impl RoaringRsMeter {
    /// Creates a new meter.
    pub fn new() -> Self {
        Self
    }
}

impl SizeMeter for RoaringRsMeter {
    fn name(&self) -> &str {
        "roaring-rs"
    }

    fn measure(&self, values: &[u64], format: Format) -> usize {
        let treemap = values.iter().copied().collect::<RoaringTreemap>();
        if format == Format::Native {
            log::trace!("{}: no native format, using portable", self.name());
        }

        treemap.serialized_size()
    }
}
