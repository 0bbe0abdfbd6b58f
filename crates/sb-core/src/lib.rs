//! Core conversion logic for stimulus timing files.
//!
//! This crate turns FSL-style 3-column stimulus files (onset, duration,
//! intensity) into a single BIDS events table:
//! - Parsing: reading one stimulus file into labelled records
//! - Binding: pairing trial-type labels with their stimulus files
//! - Merging: combining record sets into one onset-ordered sequence
//! - Writing: projecting and serializing the BIDS TSV

pub mod binder;
mod merge;
pub mod parser;
mod pipeline;
pub mod record;
pub mod sink;
pub mod types;

pub use binder::{
    BindError, DuplicateLabels, StimulusAssociation, bind_labels, fold_associations,
    pair_associations,
};
pub use merge::merge_records;
pub use parser::{ParseError, parse_stimulus, read_stimulus_file};
pub use pipeline::{Conversion, ConvertConfig, PipelineError, convert};
pub use record::{BidsRow, StimulusRecord};
pub use sink::{BidsTable, SinkError, normalize_output_path, write_table};
pub use types::{TrialType, ValidationError};
