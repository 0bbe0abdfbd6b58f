//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

use sb_core::{BindError, ConvertConfig, DuplicateLabels, pair_associations};

/// Build a BIDS events TSV from FSL-style 3-column stimulus files.
///
/// Each `--name` labels the `--stimulus` file in the same position. Events
/// from all files are merged, sorted by onset and written with the columns
/// ONSET, DURATION and TRIAL_TYPE. The options `-n` and `-s` are repeatable.
#[derive(Debug, Parser)]
#[command(name = "stim2bids", version, about, arg_required_else_help = true)]
pub struct Cli {
    /// Name (label) of stimulus [Repeatable].
    #[arg(short, long = "name", value_name = "STR", required = true)]
    pub names: Vec<String>,

    /// Input stimulus file [Repeatable].
    #[arg(short, long = "stimulus", value_name = "FILE", required = true)]
    pub stimuli: Vec<PathBuf>,

    /// Output TSV (tab separated values) file to be written.
    #[arg(short, long, value_name = "TSV")]
    pub out: PathBuf,

    /// Fail when a label is given more than once instead of keeping the last file.
    #[arg(long)]
    pub reject_duplicates: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the conversion configuration from the parsed arguments.
    pub fn into_config(self) -> Result<ConvertConfig, BindError> {
        let associations = pair_associations(self.names, self.stimuli)?;
        let duplicates = if self.reject_duplicates {
            DuplicateLabels::Reject
        } else {
            DuplicateLabels::Overwrite
        };
        Ok(ConvertConfig {
            associations,
            out: self.out,
            duplicates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("stim2bids").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn repeated_flags_pair_in_order() {
        let cli = parse(&[
            "-n", "go", "-s", "go.txt", "--name", "stop", "--stimulus", "stop.txt", "-o",
            "events",
        ])
        .unwrap();

        let config = cli.into_config().unwrap();
        assert_eq!(config.associations.len(), 2);
        assert_eq!(config.associations[0].trial_type.as_str(), "go");
        assert_eq!(config.associations[1].path, PathBuf::from("stop.txt"));
        assert_eq!(config.out, PathBuf::from("events"));
        assert_eq!(config.duplicates, DuplicateLabels::Overwrite);
    }

    #[test]
    fn reject_duplicates_flag_selects_policy() {
        let cli = parse(&["-n", "go", "-s", "a.txt", "-o", "x", "--reject-duplicates"]).unwrap();
        assert_eq!(cli.into_config().unwrap().duplicates, DuplicateLabels::Reject);
    }

    #[test]
    fn missing_out_is_a_usage_error() {
        let err = parse(&["-n", "go", "-s", "a.txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unequal_counts_fail_config() {
        let cli = parse(&["-n", "go", "-n", "stop", "-s", "a.txt", "-o", "x"]).unwrap();
        assert!(matches!(
            cli.into_config(),
            Err(BindError::CountMismatch { names: 2, files: 1 })
        ));
    }
}
