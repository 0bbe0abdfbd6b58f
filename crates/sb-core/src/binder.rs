//! Pairing trial-type labels with stimulus files.
//!
//! Labels and files arrive as two parallel lists from the command line. They
//! are paired positionally into [`StimulusAssociation`]s, folded into an
//! insertion-ordered label → file mapping, and each entry is then parsed.

use std::path::PathBuf;

use thiserror::Error;

use crate::parser::{ParseError, read_stimulus_file};
use crate::record::StimulusRecord;
use crate::types::{TrialType, ValidationError};

/// Binding errors.
#[derive(Debug, Error)]
pub enum BindError {
    /// The number of labels and files differ.
    #[error("Input lists of stimulus and file names are of unequal length.")]
    CountMismatch { names: usize, files: usize },
    /// A label failed validation.
    #[error("invalid trial type label")]
    Label(#[from] ValidationError),
    /// A label was supplied more than once under [`DuplicateLabels::Reject`].
    #[error("trial type {trial_type} is given more than once")]
    DuplicateLabel { trial_type: TrialType },
    /// A stimulus file failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A trial-type label paired with the stimulus file holding its events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StimulusAssociation {
    pub trial_type: TrialType,
    pub path: PathBuf,
}

impl StimulusAssociation {
    pub fn new(trial_type: TrialType, path: impl Into<PathBuf>) -> Self {
        Self {
            trial_type,
            path: path.into(),
        }
    }
}

/// What to do when the same label is given more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateLabels {
    /// The later file replaces the earlier one; the label keeps its first position.
    #[default]
    Overwrite,
    /// Fail with [`BindError::DuplicateLabel`].
    Reject,
}

/// Pairs labels with files by position.
pub fn pair_associations<N, F>(names: N, files: F) -> Result<Vec<StimulusAssociation>, BindError>
where
    N: IntoIterator,
    N::Item: Into<String>,
    F: IntoIterator,
    F::Item: Into<PathBuf>,
{
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    let files: Vec<PathBuf> = files.into_iter().map(Into::into).collect();

    if names.len() != files.len() {
        return Err(BindError::CountMismatch {
            names: names.len(),
            files: files.len(),
        });
    }

    names
        .into_iter()
        .zip(files)
        .map(|(name, path)| -> Result<_, BindError> {
            Ok(StimulusAssociation::new(TrialType::new(name)?, path))
        })
        .collect()
}

/// Folds associations into an insertion-ordered mapping from label to file.
pub fn fold_associations(
    associations: &[StimulusAssociation],
    policy: DuplicateLabels,
) -> Result<Vec<StimulusAssociation>, BindError> {
    let mut folded: Vec<StimulusAssociation> = Vec::with_capacity(associations.len());

    for association in associations {
        let existing = folded
            .iter()
            .position(|entry| entry.trial_type == association.trial_type);

        match existing {
            None => folded.push(association.clone()),
            Some(_) if policy == DuplicateLabels::Reject => {
                return Err(BindError::DuplicateLabel {
                    trial_type: association.trial_type.clone(),
                });
            }
            Some(idx) => {
                let entry = &mut folded[idx];
                tracing::warn!(
                    trial_type = %association.trial_type,
                    replaced = ?entry.path,
                    path = ?association.path,
                    "duplicate trial type, later stimulus file wins"
                );
                entry.path.clone_from(&association.path);
            }
        }
    }

    Ok(folded)
}

/// Parses every bound stimulus file, one record set per distinct label.
///
/// Record sets come back in mapping order, which differs from argument order
/// only when labels repeat.
pub fn bind_labels(
    associations: &[StimulusAssociation],
    policy: DuplicateLabels,
) -> Result<Vec<Vec<StimulusRecord>>, BindError> {
    fold_associations(associations, policy)?
        .iter()
        .map(|entry| read_stimulus_file(&entry.path, &entry.trial_type).map_err(BindError::from))
        .collect()
}
