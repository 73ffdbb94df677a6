//! End-to-end tests for `inline-picker decompose`.

mod fixtures;

use fixtures::*;

#[test]
fn test_decompose_duration_preset_json() {
    let output = run(&["decompose", "1230000", "--preset", "duration", "--json"]);
    assert_success(&output);

    let result = stdout_json(&output);
    assert_eq!(result["input"], "1230000");
    assert_eq!(result["matched"], true);
    assert_eq!(result["rows"], serde_json::json!([12, 30, 0]));
    assert_eq!(result["labels"], serde_json::json!(["12", "30", "000"]));
    assert_eq!(result["display"], "12:30:000");
    assert_eq!(result["value"], 1_230_000);
}

#[test]
fn test_decompose_money_display_string() {
    let output = run(&["decompose", "$123,4567.89", "--preset", "money", "--json"]);
    assert_success(&output);

    let result = stdout_json(&output);
    assert_eq!(result["rows"], serde_json::json!([123, 4567, 89]));
    assert_eq!(result["display"], "$123,4567.89");
    assert_eq!(result["value"], 123_456_789);
}

#[test]
fn test_decompose_custom_match() {
    let output = run(&["decompose", "35mm", "--preset", "lens", "--json"]);
    assert_success(&output);

    let result = stdout_json(&output);
    assert_eq!(result["matched"], true);
    assert_eq!(result["rows"], serde_json::json!([1]));
    assert_eq!(result["display"], "35mm");
    assert!(result.get("value").is_none());
}

#[test]
fn test_decompose_custom_no_match_is_not_an_error() {
    let output = run(&["decompose", "85mm", "--preset", "lens", "--json"]);
    assert_success(&output);

    let result = stdout_json(&output);
    assert_eq!(result["matched"], false);
    assert_eq!(result["custom_entry"], "85mm");
    assert!(result.get("rows").is_none());
}

#[test]
fn test_decompose_custom_no_match_plain() {
    let output = run(&["decompose", "85mm", "--mode", "custom", "--choice", "24mm"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Matched: no"));
    assert!(stdout.contains("Custom:  85mm"));
}

#[test]
fn test_decompose_time_plain() {
    let output = run(&["decompose", "0930", "--mode", "time"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rows:    9 30"));
    assert!(stdout.contains("Display: 9:30"));
    assert!(stdout.contains("Value:   930"));
}

#[test]
fn test_decompose_time_saturates_to_last_row() {
    let output = run(&["decompose", "9999", "--mode", "time", "--json"]);
    assert_success(&output);

    let result = stdout_json(&output);
    assert_eq!(result["rows"], serde_json::json!([23, 59]));
    assert_eq!(result["display"], "23:59");
}

#[test]
fn test_decompose_with_separator_overrides() {
    let output = run(&[
        "decompose",
        "23456789",
        "--mode",
        "number",
        "--digit-grouping",
        "thousand-decimal",
        "--separator",
        ".",
        "--decimal-separator",
        ",",
        "--json",
    ]);
    assert_success(&output);

    let result = stdout_json(&output);
    assert_eq!(result["display"], "234.567,89");
}

#[test]
fn test_decompose_weight_preset_strips_suffix() {
    let (path, _temp_dir) = write_temp_config(&config_with_weight_preset());
    let output = run_with_config(
        &path,
        &["decompose", "1,234.007 kg", "--preset", "weight", "--json"],
    );
    assert_success(&output);

    let result = stdout_json(&output);
    assert_eq!(result["rows"], serde_json::json!([1, 234, 7]));
    assert_eq!(result["display"], "1,234.007 kg");
}

#[test]
fn test_decompose_invalid_config_file() {
    let (path, _temp_dir) = temp_config_path();
    std::fs::write(&path, "[[preset]]\nname = \"bad\"\nmode = \"number\"\ndecimal_precision = 0\n")
        .unwrap();

    let output = run_with_config(&path, &["decompose", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
}
