//! Roaring size comparison — serializes the same 64-bit bitmaps with two
//! Roaring implementations and reports how their sizes differ.

// Lints {{{

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    future_incompatible,
    missing_docs,
    unsafe_code,
    unused_import_braces,
    unused_lifetimes,
    clippy::dbg_macro,
    clippy::exit,
    clippy::mem_forget,
    clippy::print_stdout,
    clippy::todo,
    clippy::unwrap_used
)]
#![warn(
    rustdoc::all,
    unreachable_pub,
    unused,
    unused_qualifications,
    clippy::all,
    clippy::pedantic,
    clippy::clone_on_ref_ptr,
    clippy::float_cmp_const,
    clippy::lossy_float_literal,
    clippy::pattern_type_mismatch,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::verbose_file_reads,
    clippy::let_underscore_must_use
)]
#![allow(
    // The 90’s called and wanted their charset back :p
    clippy::non_ascii_literal,
    // Too noisy for little value.
    clippy::must_use_candidate,
    // Only used in stats logging.
    clippy::use_debug,
)]

// }}}

mod entry;
mod error;
mod harness;
mod report;
mod stats;
mod suite;

pub mod generator;
pub mod meter;

pub use error::{Error, Result};
pub use generator::Regime;
pub use harness::Harness;
pub use meter::{CRoaringMeter, Format, RoaringRsMeter, SizeMeter};
pub use report::{Measurement, Outcome, Reporter, Summary};
pub use stats::Stats;
pub use suite::{Scenario, Suite};

pub(crate) use entry::Entry;
