//! End-to-end conversion: bind, merge, write.

use std::path::PathBuf;

use thiserror::Error;

use crate::binder::{BindError, DuplicateLabels, StimulusAssociation, bind_labels};
use crate::merge::merge_records;
use crate::sink::{BidsTable, SinkError, write_table};

/// Conversion errors.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Bind(#[from] BindError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Everything a conversion run needs, built once at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Labelled stimulus files, in argument order.
    pub associations: Vec<StimulusAssociation>,
    /// Requested destination; `.tsv` is appended when missing.
    pub out: PathBuf,
    pub duplicates: DuplicateLabels,
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub table: BidsTable,
    /// The path actually written.
    pub path: PathBuf,
}

/// Runs the whole conversion.
///
/// The destination is only touched after every stimulus file has parsed.
pub fn convert(config: &ConvertConfig) -> Result<Conversion, PipelineError> {
    let sets = bind_labels(&config.associations, config.duplicates)?;
    let merged = merge_records(sets);
    let (table, path) = write_table(merged, &config.out)?;
    Ok(Conversion { table, path })
}
