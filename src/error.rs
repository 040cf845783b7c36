use thiserror::Error;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading a suite, generating its vectors or writing the
/// report.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a suite file or writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A suite description could not be parsed.
    #[error("invalid suite: {0}")]
    Suite(#[from] serde_json::Error),

    /// Regime parameters yielding values outside of the 64-bit range.
    #[error("regime `{regime}` overflows: {reason}")]
    Overflow {
        /// Name of the offending regime.
        regime: &'static str,
        /// What exactly does not fit.
        reason: String,
    },
}
