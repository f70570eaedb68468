use std::fs;
use std::sync::Once;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use wordfreq_engine::{aggregate, aggregate_file, aggregate_files, EngineError};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(wordfreq_logging::initialize_for_tests);
}

fn aggregate_str(input: &str) -> String {
    let mut out = Vec::new();
    aggregate(input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn example_stream_is_sorted_by_count() {
    init_logging();
    assert_eq!(aggregate_str("a b a c b a"), "3 a\n2 b\n1 c\n");
}

#[test]
fn ties_are_broken_by_token() {
    init_logging();
    assert_eq!(aggregate_str("z y"), "1 y\n1 z\n");
}

#[test]
fn empty_and_blank_sources_produce_no_output() {
    init_logging();
    assert_eq!(aggregate_str(""), "");
    assert_eq!(aggregate_str(" \n\t "), "");
}

#[test]
fn mixed_whitespace_is_one_separator() {
    init_logging();
    assert_eq!(
        aggregate_str("\n the\t\twalrus  the\r\nwalrus said "),
        "2 the\n2 walrus\n1 said\n"
    );
}

#[test]
fn file_round_trip_writes_report() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("words.txt");
    let output = temp.path().join("decoded.txt");
    fs::write(&input, "time has come time ").unwrap();

    let summary = aggregate_file(&input, &output).unwrap();

    assert_eq!(summary.distinct, 3);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.output_path, output);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "2 time\n1 come\n1 has\n"
    );
}

#[test]
fn repeated_runs_are_byte_identical() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("words.txt");
    let output = temp.path().join("decoded.txt");
    fs::write(&input, "of many things of the talk to said the of").unwrap();

    aggregate_file(&input, &output).unwrap();
    let first = fs::read(&output).unwrap();
    aggregate_file(&input, &output).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_input_is_a_read_error_and_output_untouched() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("decoded.txt");
    fs::write(&output, "previous\n").unwrap();

    let err = aggregate_file(&temp.path().join("nope.txt"), &output).unwrap_err();

    assert!(matches!(err, EngineError::Read { .. }));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
}

#[test]
fn unwritable_output_is_a_write_error() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("words.txt");
    fs::write(&input, "a").unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let err = aggregate_file(&input, &blocker.join("decoded.txt")).unwrap_err();
    assert!(matches!(err, EngineError::Write { .. }));
}

#[test]
fn several_inputs_merge_into_one_report() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("one.txt");
    let second = temp.path().join("two.txt");
    let output = temp.path().join("decoded.txt");
    fs::write(&first, "the walrus said").unwrap();
    fs::write(&second, "the time has come the walrus said").unwrap();

    let summary = aggregate_files(&[&first, &second], &output).unwrap();

    assert_eq!(summary.total, 10);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "3 the\n2 said\n2 walrus\n1 come\n1 has\n1 time\n"
    );
}

#[test]
fn missing_output_directory_is_a_write_error() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("words.txt");
    fs::write(&input, "a b").unwrap();
    let missing = temp.path().join("no").join("such").join("dir");

    let err = aggregate_file(&input, &missing.join("decoded.txt")).unwrap_err();

    assert!(matches!(err, EngineError::Write { .. }));
    assert!(!temp.path().join("no").exists());
}
