use std::fs;
use std::sync::Once;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use wordfreq_core::{tokenize, FrequencyTable, Report};
use wordfreq_engine::{load_config, run_pipeline, EngineError, WordfreqConfig};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(wordfreq_logging::initialize_for_tests);
}

#[test]
fn pipeline_report_matches_generated_words() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let config = WordfreqConfig {
        input_path: temp.path().join("words.txt"),
        output_path: temp.path().join("decoded.txt"),
        seed: Some(2024),
        ..Default::default()
    };

    let summary = run_pipeline(&config).unwrap();
    let words = fs::read_to_string(&config.input_path).unwrap();
    let report = fs::read_to_string(&config.output_path).unwrap();

    assert_eq!(summary.generated, 100);
    assert_eq!(summary.aggregate.total, 100);
    assert_eq!(tokenize(&words).count(), 100);
    assert_eq!(
        report,
        Report::from_table(FrequencyTable::from_text(&words)).to_string()
    );
    assert!(summary.aggregate.distinct <= config.vocabulary.len());
}

#[test]
fn config_file_overrides_only_given_fields() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("wordfreq.ron");
    fs::write(
        &path,
        r#"(sample_count: 7, vocabulary: ["walrus", "carpenter"], seed: Some(3))"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();

    assert_eq!(config.sample_count, 7);
    assert_eq!(config.vocabulary.as_slice(), &["walrus", "carpenter"]);
    assert_eq!(config.seed, Some(3));
    assert_eq!(config.input_path, WordfreqConfig::default().input_path);
}

#[test]
fn malformed_config_reports_parse_error() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("wordfreq.ron");
    fs::write(&path, "(sample_count: \"lots\")").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, EngineError::ConfigParse { .. }));
}

#[test]
fn missing_config_reports_read_error() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let err = load_config(&temp.path().join("absent.ron")).unwrap_err();
    assert!(matches!(err, EngineError::Read { .. }));
}
