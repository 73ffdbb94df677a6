//! End-to-end tests for `inline-picker compose`.

mod fixtures;

use fixtures::*;

#[test]
fn test_compose_duration_preset_json() {
    let output = run(&["compose", "12", "30", "0", "--preset", "duration", "--json"]);
    assert_success(&output);

    let result = stdout_json(&output);
    assert_eq!(result["labels"], serde_json::json!(["12", "30", "000"]));
    assert_eq!(result["display"], "12:30:000");
    assert_eq!(result["value"], 1_230_000);
}

#[test]
fn test_compose_half_second_row() {
    let output = run(&[
        "compose",
        "1",
        "23",
        "45",
        "1",
        "--mode",
        "time",
        "--time-precision",
        "hour-minute-second-millisecond-per500",
        "--json",
    ]);
    assert_success(&output);

    let result = stdout_json(&output);
    assert_eq!(result["display"], "1:23:45:500");
    assert_eq!(result["value"], 12_345_500);
}

#[test]
fn test_compose_money_preset() {
    let output = run(&["compose", "0", "12", "5", "--preset", "money"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Labels:  $0 | 0012 | 05"));
    assert!(stdout.contains("Display: $0,0012.05"));
    assert!(stdout.contains("Value:   1205"));
}

#[test]
fn test_compose_custom_choice() {
    let output = run(&["compose", "2", "--preset", "lens"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Display: 40mm"));
    assert!(!stdout.contains("Value:"));
}

#[test]
fn test_compose_row_out_of_range() {
    let output = run(&["compose", "0", "60", "--mode", "time"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Row 60 is out of range for wheel 1 (60 rows)"),
        "stderr: {stderr}"
    );
}

#[test]
fn test_compose_wrong_row_count() {
    let output = run(&["compose", "1", "--mode", "time"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Selection has 1 rows but the picker has 2 wheels"));
}

#[test]
fn test_compose_custom_out_of_range() {
    let output = run(&["compose", "5", "--preset", "lens"]);
    assert_eq!(output.status.code(), Some(1));
}
