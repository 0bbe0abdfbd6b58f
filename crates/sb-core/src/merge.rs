//! Combining labelled record sets into one chronological sequence.

use crate::record::StimulusRecord;

/// Concatenates record sets in the given order and sorts the result by onset.
///
/// The sort is stable: records with equal onsets keep their post-concatenation
/// order. Onsets compare with [`f64::total_cmp`], so a NaN onset sorts last.
pub fn merge_records(sets: Vec<Vec<StimulusRecord>>) -> Vec<StimulusRecord> {
    let mut merged: Vec<StimulusRecord> = sets.into_iter().flatten().collect();
    merged.sort_by(|a, b| a.onset().total_cmp(&b.onset()));

    tracing::debug!(records = merged.len(), "merged stimulus records");
    merged
}
