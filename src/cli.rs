use std::path::PathBuf;

use clap::Parser;

/// Daily puzzle solutions for the 2024 and 2025 events.
#[derive(Parser, Debug)]
#[command(name = "advent", version, about = "Solve one day of a puzzle event")]
pub struct Cli {
    /// Event year.
    pub year: u16,

    /// Day of the event, starting at 1.
    pub day: u8,

    /// Run only this part; both run when omitted.
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Read the worked example, `input_example_<SUFFIX>.txt` when a suffix is given.
    #[arg(short, long, num_args = 0..=1, default_missing_value = "", value_name = "SUFFIX")]
    pub example: Option<String>,

    /// Read this file instead of looking under the input directory.
    #[arg(short, long, conflicts_with = "example")]
    pub input: Option<PathBuf>,

    /// Root of the `<year>/Day<day>/` input tree.
    #[arg(long, env = "ADVENT_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_selection() {
        let cli = Cli::try_parse_from(["advent", "2025", "7", "2"]).unwrap();
        assert_eq!((cli.year, cli.day, cli.part), (2025, 7, Some(2)));
        assert_eq!(cli.example, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn example_suffix_is_optional() {
        let cli = Cli::try_parse_from(["advent", "2025", "11", "--example"]).unwrap();
        assert_eq!(cli.example.as_deref(), Some(""));
        let cli = Cli::try_parse_from(["advent", "2025", "11", "--example", "part2"]).unwrap();
        assert_eq!(cli.example.as_deref(), Some("part2"));
    }

    #[test]
    fn part_must_be_one_or_two() {
        assert!(Cli::try_parse_from(["advent", "2025", "1", "3"]).is_err());
    }

    #[test]
    fn explicit_input_excludes_example() {
        assert!(Cli::try_parse_from(["advent", "2025", "1", "-e", "-i", "x.txt"]).is_err());
    }

    #[test]
    fn repeated_verbose() {
        let cli = Cli::try_parse_from(["advent", "-vv", "2024", "1"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
