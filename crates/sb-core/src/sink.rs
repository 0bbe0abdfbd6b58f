//! Writing the BIDS events table.

use std::ffi::OsString;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use thiserror::Error;

use crate::record::{BidsRow, StimulusRecord};

const TSV_SUFFIX: &str = ".tsv";

/// Errors raised while writing the output table.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The destination could not be created or truncated.
    #[error("cannot create output file {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing rows to the destination failed.
    #[error("failed to write output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// The final onset-ordered events table, without the intensity column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BidsTable {
    rows: Vec<BidsRow>,
}

impl BidsTable {
    /// Projects records into output rows, keeping their order.
    pub fn from_records(records: Vec<StimulusRecord>) -> Self {
        Self {
            rows: records.into_iter().map(BidsRow::from).collect(),
        }
    }

    pub fn rows(&self) -> &[BidsRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serializes the table as tab-separated text with a header row.
    ///
    /// Numbers use their shortest round-trip form and always carry a
    /// fractional part (`1.0`, `0.5`). Very large or very small magnitudes
    /// switch to exponent notation (`1e20`, `1e-7`). Labels are quoted only
    /// when needed.
    pub fn write_tsv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut writer = WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_writer(writer);

        writer.write_record(BidsRow::HEADER)?;
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Appends `.tsv` to `path` unless it already ends with it.
pub fn normalize_output_path(path: &Path) -> PathBuf {
    if path.as_os_str().as_encoded_bytes().ends_with(TSV_SUFFIX.as_bytes()) {
        return path.to_path_buf();
    }
    let mut normalized = OsString::from(path.as_os_str());
    normalized.push(TSV_SUFFIX);
    PathBuf::from(normalized)
}

/// Projects `records` and writes them to `out`, replacing any existing file.
///
/// Returns the table that was written and the normalized destination path.
pub fn write_table(
    records: Vec<StimulusRecord>,
    out: &Path,
) -> Result<(BidsTable, PathBuf), SinkError> {
    let path = normalize_output_path(out);
    let table = BidsTable::from_records(records);

    let file = File::create(&path).map_err(|source| SinkError::Create {
        path: path.clone(),
        source,
    })?;
    table.write_tsv(file).map_err(|source| SinkError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(path = ?path, rows = table.len(), "wrote events table");
    Ok((table, path))
}
