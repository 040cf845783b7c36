/// Linear congruential generator producing a reproducible "random-like"
/// sequence.
///
/// The recurrence is `x' = (x * 1103515245 + 12345) & 0x7FFF_FFFF`, evaluated
/// with wrapping 64-bit arithmetic. The iterator yields the current state
/// *before* advancing, so the seed itself is the first value.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Multiplier of the recurrence.
    pub const MULTIPLIER: u64 = 1_103_515_245;
    /// Increment of the recurrence.
    pub const INCREMENT: u64 = 12_345;
    /// Mask applied after each step (keeps 31 bits).
    pub const MASK: u64 = 0x7FFF_FFFF;

    /// Initializes a generator from its seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl Iterator for Lcg {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let value = self.state;
        self.state = (self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT))
            & Self::MASK;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
