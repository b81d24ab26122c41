use crate::core::DEFAULT_FIELD_WIDTH;
use crate::pipeline::MailerConfig;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Merge dispatch addresses with card/PIN records into a PIN mailer file
#[derive(Parser, Debug)]
#[command(name = "pin-mailer")]
#[command(about = "Merge dispatch addresses with card/PIN records into a PIN mailer file", long_about = None)]
pub struct CliArgs {
    /// Directory where inputs are discovered and dated folders are created
    #[arg(
        long = "work-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory holding Dispatch*.csv and *.pin inputs"
    )]
    pub work_dir: PathBuf,

    /// Explicit dispatch sheet export
    #[arg(
        long = "dispatch",
        value_name = "FILE",
        help = "Dispatch sheet export to use instead of discovering Dispatch*.csv"
    )]
    pub dispatch: Option<PathBuf>,

    /// Explicit record files
    #[arg(
        long = "pin",
        value_name = "FILE",
        help = "Record file to merge (repeatable); disables *.pin discovery"
    )]
    pub pin_files: Vec<PathBuf>,

    /// Explicit output file
    #[arg(
        long = "output",
        value_name = "FILE",
        help = "Output file (default: PROCESSED_DATA_<date>/SLCBNK-EXTPINPRINTING-<date>-01.csv)"
    )]
    pub output: Option<PathBuf>,

    /// Run date
    #[arg(
        long = "date",
        value_name = "YYYY-MM-DD",
        help = "Run date naming the dated folders and output file (default: today)"
    )]
    pub date: Option<NaiveDate>,

    /// Leave discovered inputs where they are
    #[arg(
        long = "no-stage",
        help = "Do not move discovered inputs into TODAY_DATA_<date>/"
    )]
    pub no_stage: bool,

    /// Maximum width of each address field
    #[arg(
        long = "max-width",
        value_name = "CHARS",
        default_value_t = DEFAULT_FIELD_WIDTH,
        value_parser = parse_width,
        help = "Maximum characters per address field"
    )]
    pub max_width: usize,

    /// Log level used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info",
        help = "Log level: error, warn, info, debug or trace (RUST_LOG takes precedence)"
    )]
    pub log_level: String,
}

/// Parse a field width, rejecting zero
fn parse_width(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("width must be at least 1".to_string()),
        Ok(width) => Ok(width),
        Err(e) => Err(format!("invalid width '{}': {}", value, e)),
    }
}

impl CliArgs {
    /// Create a MailerConfig from CLI arguments
    ///
    /// `today` is used when no `--date` was given.
    pub fn to_config(&self, today: NaiveDate) -> MailerConfig {
        MailerConfig {
            work_dir: self.work_dir.clone(),
            dispatch: self.dispatch.clone(),
            pin_files: self.pin_files.clone(),
            output: self.output.clone(),
            run_date: self.date.unwrap_or(today),
            stage_inputs: !self.no_stage,
            max_width: self.max_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_defaults() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();
        let config = parsed.to_config(today());

        assert_eq!(config, MailerConfig::new(".", today()));
        assert_eq!(parsed.log_level, "info");
    }

    #[rstest]
    #[case::date(&["program", "--date", "2025-10-01"], NaiveDate::from_ymd_opt(2025, 10, 1).unwrap())]
    #[case::no_date(&["program"], today())]
    fn test_run_date(#[case] args: &[&str], #[case] expected: NaiveDate) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.to_config(today()).run_date, expected);
    }

    #[test]
    fn test_explicit_inputs() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--dispatch",
            "addr.csv",
            "--pin",
            "a.pin",
            "--pin",
            "b.pin",
            "--output",
            "out.csv",
            "--no-stage",
            "--max-width",
            "30",
        ])
        .unwrap();
        let config = parsed.to_config(today());

        assert_eq!(config.dispatch, Some(PathBuf::from("addr.csv")));
        assert_eq!(config.pin_files, vec![PathBuf::from("a.pin"), PathBuf::from("b.pin")]);
        assert_eq!(config.output, Some(PathBuf::from("out.csv")));
        assert!(!config.stage_inputs);
        assert_eq!(config.max_width, 30);
    }

    #[rstest]
    #[case::zero_width(&["program", "--max-width", "0"])]
    #[case::bad_width(&["program", "--max-width", "wide"])]
    #[case::bad_date(&["program", "--date", "08-10-2025"])]
    #[case::unknown_flag(&["program", "--format", "json"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
