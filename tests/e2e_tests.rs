//! End-to-end integration tests
//!
//! These tests validate the complete mailer pipeline using predefined test
//! fixtures. Each fixture directory under tests/fixtures/ holds:
//! 1. `Dispatch.csv` - the dispatch sheet export
//! 2. one or more `*.pin` record files, merged in file name order
//! 3. `expected.csv` - the mailer file the run must produce
//!
//! Fixtures cover:
//! - Happy path merging
//! - Address cascading across the five bounded fields, including dropped overflow
//! - Kits missing from the dispatch sheet
//! - Serial numbers running across several record files
//! - Malformed and short record lines
//! - Duplicate kits in the dispatch sheet
//! - Dirty sheet text (commas, pipes, tabs, quoted newlines)

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pin_mailer::pipeline::{run, MailerConfig};
    use rstest::rstest;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn run_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 8).expect("valid date")
    }

    /// Sorted `.pin` files of a fixture directory
    fn pin_files(dir: &Path) -> Vec<PathBuf> {
        let mut pins: Vec<PathBuf> = fs::read_dir(dir)
            .unwrap_or_else(|e| panic!("Failed to list {}: {}", dir.display(), e))
            .map(|entry| entry.expect("Failed to read dir entry").path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "pin"))
            .collect();
        pins.sort();
        pins
    }

    /// Run a fixture with explicit inputs and compare with expected.csv
    ///
    /// Inputs are used in place (no staging) and the output goes to a
    /// temporary directory, so the fixture tree is never modified.
    fn run_test_fixture(fixture_name: &str) {
        let fixture_dir = Path::new("tests/fixtures").join(fixture_name);
        let dispatch = fixture_dir.join("Dispatch.csv");
        let expected_path = fixture_dir.join("expected.csv");

        assert!(dispatch.exists(), "Dispatch file not found: {}", dispatch.display());
        assert!(
            expected_path.exists(),
            "Expected file not found: {}",
            expected_path.display()
        );

        let out_dir = TempDir::new().expect("Failed to create temp dir");
        let output = out_dir.path().join("mailer.csv");

        let mut config = MailerConfig::new(&fixture_dir, run_date());
        config.dispatch = Some(dispatch);
        config.pin_files = pin_files(&fixture_dir);
        config.output = Some(output.clone());
        config.stage_inputs = false;

        let summary = run(&config)
            .unwrap_or_else(|e| panic!("Failed to process fixture {}: {}", fixture_name, e));
        assert_eq!(summary.output.as_deref(), Some(output.as_path()));

        let actual_output = fs::read_to_string(&output)
            .unwrap_or_else(|e| panic!("Failed to read output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
            panic!("Failed to read expected file {}: {}", expected_path.display(), e)
        });

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("happy_path")]
    #[case("cascading_addresses")]
    #[case("missing_kits")]
    #[case("multiple_files")]
    #[case("malformed_lines")]
    #[case("duplicate_kits")]
    #[case("dirty_text")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }

    #[test]
    fn test_malformed_lines_are_counted() {
        let fixture_dir = Path::new("tests/fixtures/malformed_lines");
        let out_dir = TempDir::new().unwrap();

        let mut config = MailerConfig::new(fixture_dir, run_date());
        config.dispatch = Some(fixture_dir.join("Dispatch.csv"));
        config.pin_files = pin_files(fixture_dir);
        config.output = Some(out_dir.path().join("mailer.csv"));
        config.stage_inputs = false;

        let summary = run(&config).unwrap();
        assert_eq!(summary.merge.lines_skipped, 2);
        assert_eq!(summary.merge.records_written, 4);
    }

    #[test]
    fn test_duplicate_kits_are_reported() {
        let fixture_dir = Path::new("tests/fixtures/duplicate_kits");
        let out_dir = TempDir::new().unwrap();

        let mut config = MailerConfig::new(fixture_dir, run_date());
        config.dispatch = Some(fixture_dir.join("Dispatch.csv"));
        config.pin_files = pin_files(fixture_dir);
        config.output = Some(out_dir.path().join("mailer.csv"));
        config.stage_inputs = false;

        let summary = run(&config).unwrap();
        assert_eq!(summary.index_size, 1);
        assert_eq!(summary.duplicate_kits, 1);
    }

    /// Discovery and staging against a copy of the happy path fixture
    #[test]
    fn test_discovered_and_staged_run() {
        let work = TempDir::new().unwrap();
        let fixture_dir = Path::new("tests/fixtures/happy_path");
        for name in ["Dispatch.csv", "cards.pin"] {
            fs::copy(fixture_dir.join(name), work.path().join(name)).unwrap();
        }

        let summary = run(&MailerConfig::new(work.path(), run_date())).unwrap();

        let staged = work.path().join("TODAY_DATA_08-10-2025");
        assert!(staged.join("Dispatch.csv").exists());
        assert!(staged.join("cards.pin").exists());
        assert!(!work.path().join("cards.pin").exists());

        let output = work
            .path()
            .join("PROCESSED_DATA_08-10-2025")
            .join("SLCBNK-EXTPINPRINTING-08102025-01.csv");
        assert_eq!(summary.output.as_deref(), Some(output.as_path()));
        assert_eq!(
            fs::read_to_string(output).unwrap(),
            fs::read_to_string(fixture_dir.join("expected.csv")).unwrap()
        );
    }

    /// A rerun picks up inputs already staged by an earlier run
    #[test]
    fn test_rerun_finds_staged_inputs() {
        let work = TempDir::new().unwrap();
        let fixture_dir = Path::new("tests/fixtures/happy_path");
        let staged = work.path().join("TODAY_DATA_08-10-2025");
        fs::create_dir_all(&staged).unwrap();
        for name in ["Dispatch.csv", "cards.pin"] {
            fs::copy(fixture_dir.join(name), staged.join(name)).unwrap();
        }

        let summary = run(&MailerConfig::new(work.path(), run_date())).unwrap();
        assert_eq!(summary.merge.records_written, 2);
    }

    #[test]
    fn test_no_pin_files_ends_cleanly() {
        let work = TempDir::new().unwrap();
        fs::copy(
            "tests/fixtures/happy_path/Dispatch.csv",
            work.path().join("Dispatch.csv"),
        )
        .unwrap();

        let summary = run(&MailerConfig::new(work.path(), run_date())).unwrap();

        assert_eq!(summary.output, None);
        assert!(!work.path().join("PROCESSED_DATA_08-10-2025").exists());
    }
}
