//! Reading FSL custom 3-column stimulus files.
//!
//! Each non-blank line holds exactly three tab-separated numeric fields:
//! onset, duration and intensity. There is no header row. A single bad line
//! fails the whole file.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use crate::record::StimulusRecord;
use crate::types::TrialType;

/// Column names of the 3-column format, in file order.
const COLUMNS: [&str; 3] = ["onset", "duration", "intensity"];

/// Errors raised while parsing a stimulus file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The stimulus file could not be opened.
    #[error("cannot open stimulus file {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading or decoding the file failed part-way through.
    #[error("failed to read stimulus file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// A line did not hold exactly three fields.
    #[error("{}:{line}: expected 3 tab-separated fields, found {found}", path.display())]
    FieldCount { path: PathBuf, line: u64, found: usize },
    /// A field was not a number.
    #[error("{}:{line}: {column} is not a number: {value:?}", path.display())]
    InvalidNumber {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },
    /// The file held no events at all.
    #[error("stimulus file {} contains no events", path.display())]
    Empty { path: PathBuf },
}

/// Opens and parses a stimulus file, stamping every record with `trial_type`.
pub fn read_stimulus_file(
    path: &Path,
    trial_type: &TrialType,
) -> Result<Vec<StimulusRecord>, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    parse_stimulus(file, path, trial_type)
}

/// Parses stimulus records from any reader.
///
/// `path` is only used to label diagnostics. Records come back in file order.
pub fn parse_stimulus<R: Read>(
    reader: R,
    path: &Path,
    trial_type: &TrialType,
) -> Result<Vec<StimulusRecord>, ParseError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|source| ParseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        // Whitespace-only lines trim down to one empty field.
        if row.len() == 1 && row[0].is_empty() {
            continue;
        }
        records.push(parse_row(&row, path, trial_type)?);
    }

    if records.is_empty() {
        return Err(ParseError::Empty {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = ?path,
        trial_type = %trial_type,
        records = records.len(),
        "parsed stimulus file"
    );
    Ok(records)
}

fn parse_row(
    row: &StringRecord,
    path: &Path,
    trial_type: &TrialType,
) -> Result<StimulusRecord, ParseError> {
    let line = row.position().map_or(0, csv::Position::line);

    if row.len() != COLUMNS.len() {
        return Err(ParseError::FieldCount {
            path: path.to_path_buf(),
            line,
            found: row.len(),
        });
    }

    let mut values = [0.0_f64; 3];
    for (idx, (field, column)) in row.iter().zip(COLUMNS).enumerate() {
        values[idx] = field
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidNumber {
                path: path.to_path_buf(),
                line,
                column,
                value: field.to_string(),
            })?;
    }

    let [onset, duration, intensity] = values;
    Ok(StimulusRecord::new(
        onset,
        duration,
        intensity,
        trial_type.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn parse(input: &str) -> Result<Vec<StimulusRecord>, ParseError> {
        let label = TrialType::new("go").unwrap();
        parse_stimulus(Cursor::new(input), Path::new("go.txt"), &label)
    }

    #[test]
    fn parses_three_columns_in_file_order() {
        let records = parse("1.0\t2.0\t5\n3.0\t1.0\t5\n0.25\t0.5\t1\n").unwrap();

        let onsets: Vec<f64> = records.iter().map(StimulusRecord::onset).collect();
        assert_eq!(onsets, vec![1.0, 3.0, 0.25]);
        assert_eq!(records[0].duration(), 2.0);
        assert_eq!(records[2].intensity(), 1.0);
    }

    #[test]
    fn one_record_per_line() {
        let input = "0\t1\t1\n2\t1\t1\n4\t1\t1\n6\t1\t1\n";
        let records = parse(input).unwrap();
        assert_eq!(records.len(), input.lines().count());
    }

    #[test]
    fn every_record_carries_the_label() {
        let records = parse("1\t1\t1\n2\t1\t1\n").unwrap();
        assert!(records.iter().all(|r| r.trial_type().as_str() == "go"));
    }

    #[test]
    fn missing_trailing_newline_and_padding_are_accepted() {
        let records = parse(" 1.5 \t2\t 1\n\n3\t4\t1").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].onset(), 1.5);
        assert_eq!(records[1].duration(), 4.0);
    }

    #[test]
    fn whitespace_only_lines_are_skipped() {
        let records = parse("1\t2\t5\n   \n3\t1\t0.75\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].onset(), 3.0);
        assert_eq!(records[1].intensity(), 0.75);
    }

    #[test]
    fn line_of_empty_fields_is_rejected() {
        let err = parse("1\t2\t5\n\t\t\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidNumber {
                line: 2,
                column: "onset",
                ..
            }
        ));
    }

    #[test]
    fn two_field_line_is_rejected() {
        let err = parse("1\t2\t1\n3\t4\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::FieldCount {
                line: 2,
                found: 2,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "go.txt:2: expected 3 tab-separated fields, found 2"
        );
    }

    #[test]
    fn four_field_line_is_rejected() {
        let err = parse("1\t2\t1\t9\n").unwrap_err();
        assert!(matches!(err, ParseError::FieldCount { found: 4, .. }));
    }

    #[test]
    fn space_separated_line_is_a_single_field() {
        let err = parse("1 2 1\n").unwrap_err();
        assert!(matches!(err, ParseError::FieldCount { found: 1, .. }));
    }

    #[test]
    fn non_numeric_field_names_the_column() {
        let err = parse("1\tlong\t1\n").unwrap_err();
        match err {
            ParseError::InvalidNumber {
                line,
                column,
                ref value,
                ..
            } => {
                assert_eq!(line, 1);
                assert_eq!(column, "duration");
                assert_eq!(value, "long");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, ParseError::Empty { .. }));
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = tempfile::tempdir().unwrap();
        let label = TrialType::new("go").unwrap();
        let err = read_stimulus_file(&temp.path().join("absent.txt"), &label).unwrap_err();
        assert!(matches!(err, ParseError::NotFound { .. }));
    }

    #[test]
    fn reads_from_disk() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("stop.txt");
        std::fs::write(&path, "0.5\t1.0\t5\n").unwrap();

        let label = TrialType::new("stop").unwrap();
        let records = read_stimulus_file(&path, &label).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].onset(), 0.5);
        assert_eq!(records[0].trial_type(), &label);
    }
}
