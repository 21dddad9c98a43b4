//! End-to-End CLI Integration Tests
//!
//! Drives the type-check Runner from parsed command lines, the same path
//! the binary takes after argument parsing.

use clap::Parser as ClapParser;
use type_check_cli::{Cli, CliError, Runner};

fn run(args: &[&str]) -> (String, i32) {
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    let execution = Runner::new().execute(&cli.command).expect("command should succeed");
    (execution.output, execution.exit_code)
}

/// Test: classify a JSON literal
#[test]
fn test_e2e_classify_json() {
    assert_eq!(run(&["type-check", "classify", "--json", "[1, 2]"]), ("Array\n".to_string(), 0));
    assert_eq!(run(&["type-check", "classify", "--json", "null"]), ("null\n".to_string(), 0));
}

/// Test: classify named samples
#[test]
fn test_e2e_classify_samples() {
    let cases = [
        ("buffer", "Buffer"),
        ("boxed-number", "number"),
        ("async-function", "AsyncFunction"),
        ("class", "function"),
        ("big-uint64-array", "BigUint64Array"),
        ("html-element", "HTMLElement"),
        ("null-prototype-object", "Object"),
    ];
    for (sample, expected) in cases {
        let (output, code) = run(&["type-check", "classify", "--sample", sample]);
        assert_eq!(output.trim_end(), expected, "sample {}", sample);
        assert_eq!(code, 0);
    }
}

/// Test: check reports through the exit code
#[test]
fn test_e2e_check() {
    assert_eq!(
        run(&["type-check", "check", "is_plain_object", "--json", "{}"]),
        ("true\n".to_string(), 0)
    );
    assert_eq!(
        run(&["type-check", "check", "is_plain_object", "--sample", "null-prototype-object"]),
        ("false\n".to_string(), 1)
    );
    assert_eq!(
        run(&["type-check", "check", "is_timestamp", "--sample", "two-pow-53"]),
        ("false\n".to_string(), 1)
    );
}

/// Test: JSON report
#[test]
fn test_e2e_report_json() {
    let args = ["type-check", "report", "--sample", "empty-buffer", "--format", "json"];
    let (output, code) = run(&args);
    assert_eq!(code, 0);

    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["type"], "Buffer");
    assert_eq!(report["kind"], "Uint8Array");
    assert_eq!(report["value"], "");
    let predicates: Vec<&str> = report["predicates"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p.as_str())
        .collect();
    assert!(predicates.contains(&"is_buffer"));
    assert!(predicates.contains(&"is_empty_buffer"));
    assert!(predicates.contains(&"is_empty"));
    assert!(predicates.contains(&"is_typed_array"));
}

/// Test: text report
#[test]
fn test_e2e_report_text() {
    let (output, _) = run(&["type-check", "report", "--sample", "date"]);
    assert!(output.starts_with("value:      Thu Jan 01 1970 00:00:00 GMT+0000"));
    assert!(output.contains("type:       Date\n"));
    assert!(output.contains("is_date"));
}

/// Test: failures surface as errors, not output
#[test]
fn test_e2e_errors() {
    let runner = Runner::new();

    let cli = Cli::try_parse_from(["type-check", "check", "is_nope", "--json", "1"]).unwrap();
    let err = runner.execute(&cli.command).unwrap_err();
    assert!(matches!(err, CliError::UnknownPredicate(ref name) if name == "is_nope"));

    let cli = Cli::try_parse_from(["type-check", "classify", "--sample", "nope"]).unwrap();
    let err = runner.execute(&cli.command).unwrap_err();
    assert!(matches!(err, CliError::UnknownSample(_)));
    assert!(err.to_string().contains("nope"));
}

/// Test: vocabulary listing
#[test]
fn test_e2e_vocabulary() {
    let (output, code) = run(&["type-check", "vocabulary"]);
    assert_eq!(code, 0);
    assert_eq!(output.lines().next(), Some("Array"));
    assert!(output.lines().any(|line| line == "AsyncGeneratorFunction"));
}
