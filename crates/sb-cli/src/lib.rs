//! Stimulus-to-BIDS converter CLI library.
//!
//! This crate provides the command-line boundary for `sb-core`.

mod cli;
mod run;

pub use cli::Cli;
pub use run::run;
