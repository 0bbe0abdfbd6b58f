//! Stimulus events and their projected BIDS rows.

use serde::Serialize;

use crate::types::TrialType;

/// One parsed line of an FSL 3-column stimulus file.
///
/// Records are read-only once the parser creates them; the label is stamped
/// at construction and shared by every record from the same file.
#[derive(Debug, Clone, PartialEq)]
pub struct StimulusRecord {
    onset: f64,
    duration: f64,
    intensity: f64,
    trial_type: TrialType,
}

impl StimulusRecord {
    pub const fn new(onset: f64, duration: f64, intensity: f64, trial_type: TrialType) -> Self {
        Self {
            onset,
            duration,
            intensity,
            trial_type,
        }
    }

    /// Event onset in seconds.
    pub const fn onset(&self) -> f64 {
        self.onset
    }

    /// Event duration in seconds.
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Parametric modulation value from the third column. Not part of the output.
    pub const fn intensity(&self) -> f64 {
        self.intensity
    }

    pub const fn trial_type(&self) -> &TrialType {
        &self.trial_type
    }
}

/// A single row of the BIDS events table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BidsRow {
    #[serde(rename = "ONSET")]
    pub onset: f64,
    #[serde(rename = "DURATION")]
    pub duration: f64,
    #[serde(rename = "TRIAL_TYPE")]
    pub trial_type: TrialType,
}

impl BidsRow {
    /// Column names, in output order.
    pub const HEADER: [&'static str; 3] = ["ONSET", "DURATION", "TRIAL_TYPE"];
}

impl From<StimulusRecord> for BidsRow {
    fn from(record: StimulusRecord) -> Self {
        Self {
            onset: record.onset,
            duration: record.duration,
            trial_type: record.trial_type,
        }
    }
}
