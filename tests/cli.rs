use assert_cmd::Command;
use predicates::prelude::*;

fn plotprep() -> Command {
    Command::cargo_bin("plotprep").unwrap()
}

#[test]
fn runs() {
    plotprep().assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = plotprep();
    cmd.arg("-V");
    cmd.assert().success().stdout("plotprep 0.1.0\n");
}

// Distribution subcommand tests

#[test]
fn distribution_clean_input_succeeds() {
    let mut cmd = plotprep();
    cmd.args(["distribution", "tests/fixtures/distribution_clean.json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("histogram \"Distribution\""))
        .stdout(predicate::str::contains("4 value(s), 30 bin(s) requested"));
}

#[test]
fn distribution_drops_invalid_samples() {
    let mut cmd = plotprep();
    cmd.args(["distribution", "tests/fixtures/distribution_messy.json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3 value(s)"));
}

#[test]
fn distribution_report_goes_to_stderr() {
    let mut cmd = plotprep();
    cmd.args([
        "distribution",
        "tests/fixtures/distribution_messy.json",
        "--report",
    ]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("distribution: 5 point(s)"))
        .stderr(predicate::str::contains("Warnings (2):"))
        .stderr(predicate::str::contains("1 null sample(s) dropped"));
}

#[test]
fn distribution_json_output() {
    let mut cmd = plotprep();
    cmd.args([
        "distribution",
        "tests/fixtures/distribution_clean.json",
        "--output",
        "json",
        "--bins",
        "12",
        "--title",
        "Latency",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ready\""))
        .stdout(predicate::str::contains("\"kind\": \"histogram\""))
        .stdout(predicate::str::contains("\"bins\": 12"))
        .stdout(predicate::str::contains("\"title\": \"Latency\""));
}

#[test]
fn distribution_empty_is_not_an_error() {
    let mut cmd = plotprep();
    cmd.args(["distribution", "tests/fixtures/distribution_empty.json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Nothing to plot: No data available (no-data)"));
}

#[test]
fn distribution_all_invalid_reports_no_valid_data() {
    let mut cmd = plotprep();
    cmd.args([
        "distribution",
        "tests/fixtures/distribution_all_invalid.json",
        "--output",
        "json",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"empty\""))
        .stdout(predicate::str::contains("\"reason\": \"no-valid-data\""));
}

#[test]
fn strict_fails_on_empty_outcome() {
    let mut cmd = plotprep();
    cmd.args([
        "distribution",
        "tests/fixtures/distribution_empty.json",
        "--strict",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to plot: no-data"));
}

#[test]
fn strict_fails_on_warnings() {
    let mut cmd = plotprep();
    cmd.args([
        "distribution",
        "tests/fixtures/distribution_messy.json",
        "--strict",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("2 warning(s)"));
}

#[test]
fn strict_passes_on_clean_input() {
    let mut cmd = plotprep();
    cmd.args([
        "distribution",
        "tests/fixtures/distribution_clean.json",
        "--strict",
    ]);
    cmd.assert().success();
}

#[test]
fn unsupported_output_format_fails() {
    let mut cmd = plotprep();
    cmd.args([
        "distribution",
        "tests/fixtures/distribution_clean.json",
        "--output",
        "yaml",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format"));
}

#[test]
fn nonexistent_input_fails() {
    let mut cmd = plotprep();
    cmd.args(["distribution", "nonexistent_file.json"]);
    cmd.assert().failure();
}

#[test]
fn distribution_wrong_key_fails() {
    let mut cmd = plotprep();
    cmd.args(["distribution", "tests/fixtures/distribution_wrong_key.json"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("expected a 'data' key, found 'values'"));
}

#[test]
fn malformed_json_fails() {
    let mut cmd = plotprep();
    cmd.args(["distribution", "-"]).write_stdin("{not json");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse input JSON"));
}

#[test]
fn reads_input_from_stdin() {
    let mut cmd = plotprep();
    cmd.args(["distribution", "-"]).write_stdin("[1, 2, null]");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 value(s)"));
}

// Trend subcommand tests

#[test]
fn trend_dates_are_truncated_and_typed() {
    let mut cmd = plotprep();
    cmd.args(["trend", "tests/fixtures/trend_dates.json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 point(s) as lines+markers"))
        .stdout(predicate::str::contains("x axis: Date [date]"));
}

#[test]
fn trend_numeric_x_is_linear() {
    let mut cmd = plotprep();
    cmd.args(["trend", "tests/fixtures/trend_numeric.json", "--output", "json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"scatter\""))
        .stdout(predicate::str::contains("\"axis_type\": \"linear\""));
}

#[test]
fn trend_options_file_then_flags() {
    let mut cmd = plotprep();
    cmd.args([
        "trend",
        "tests/fixtures/trend_numeric.json",
        "--options",
        "tests/fixtures/options_trend.json",
        "--mode",
        "lines",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("scatter \"Visits\""))
        .stdout(predicate::str::contains("as lines ('visits')"));
}

#[test]
fn show_legend_flag_overrides_options_file() {
    let run = |extra: &[&str]| {
        let mut cmd = plotprep();
        cmd.args([
            "trend",
            "tests/fixtures/trend_numeric.json",
            "--options",
            "tests/fixtures/options_trend.json",
            "--output",
            "json",
        ])
        .args(extra);
        cmd.assert()
    };

    run(&[])
        .success()
        .stdout(predicate::str::contains("\"show_legend\": true"));
    run(&["--show-legend=false"])
        .success()
        .stdout(predicate::str::contains("\"show_legend\": false"));
}

#[test]
fn trend_truncation_is_reported() {
    let mut cmd = plotprep();
    cmd.args(["trend", "tests/fixtures/trend_dates.json", "--report"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Notes (1):"))
        .stderr(predicate::str::contains("1 trailing x value(s) discarded"));
}

#[test]
fn trend_truncation_passes_strict() {
    let mut cmd = plotprep();
    cmd.args(["trend", "tests/fixtures/trend_dates.json", "--strict"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 point(s)"));
}

#[test]
fn invalid_mode_is_rejected() {
    let mut cmd = plotprep();
    cmd.args([
        "trend",
        "tests/fixtures/trend_numeric.json",
        "--mode",
        "bars",
    ]);
    cmd.assert().failure();
}

// Heatmap subcommand tests

#[test]
fn heatmap_sparse_input() {
    let mut cmd = plotprep();
    cmd.args(["heatmap", "tests/fixtures/heatmap_sparse.json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "heatmap \"Matrice de Co-occurrence\"",
        ))
        .stdout(predicate::str::contains("2 x 2 cells, colorscale Blues"))
        .stdout(predicate::str::contains("(reversed)"));
}

#[test]
fn heatmap_sparse_zero_fill_is_not_a_warning() {
    let mut cmd = plotprep();
    cmd.args([
        "heatmap",
        "tests/fixtures/heatmap_sparse.json",
        "--strict",
        "--report",
    ]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("1 missing cell(s) filled with 0"));
}

#[test]
fn heatmap_dense_gets_ordinal_labels() {
    let mut cmd = plotprep();
    cmd.args([
        "heatmap",
        "tests/fixtures/heatmap_dense.json",
        "--output",
        "json",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"Col 1\""))
        .stdout(predicate::str::contains("\"Row 2\""))
        .stdout(predicate::str::contains("\"reversed\": true"));
}

#[test]
fn heatmap_label_overrides() {
    let mut cmd = plotprep();
    cmd.args([
        "heatmap",
        "tests/fixtures/heatmap_dense.json",
        "--output",
        "json",
        "--x-labels",
        "left,right",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"left\""))
        .stdout(predicate::str::contains("\"Row 1\""));
}

#[test]
fn heatmap_ragged_fails_strict() {
    let mut cmd = plotprep();
    cmd.args(["heatmap", "tests/fixtures/heatmap_ragged.json", "--strict"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Strict mode"));
}

#[test]
fn heatmap_unsupported_input() {
    let mut cmd = plotprep();
    cmd.args([
        "heatmap",
        "tests/fixtures/heatmap_unsupported.json",
        "--output",
        "json",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"reason\": \"unsupported-format\""))
        .stdout(predicate::str::contains("Unsupported data format"));
}

#[test]
fn heatmap_yaml_options() {
    let mut cmd = plotprep();
    cmd.args([
        "heatmap",
        "tests/fixtures/heatmap_dense.json",
        "--options",
        "tests/fixtures/options_heatmap.yaml",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("heatmap \"Co-occurrence\""))
        .stdout(predicate::str::contains("colorscale Viridis"))
        .stdout(predicate::str::contains("x axis: First test"));
}

#[test]
fn broken_options_file_fails() {
    let mut cmd = plotprep();
    cmd.args([
        "heatmap",
        "tests/fixtures/heatmap_dense.json",
        "--options",
        "tests/fixtures/options_broken.yaml",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load options"));
}

#[test]
fn writes_descriptor_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.json");

    let mut cmd = plotprep();
    cmd.args(["heatmap", "tests/fixtures/heatmap_sparse.json", "--output", "json", "--out"])
        .arg(&out);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    let outcome = plotprep::series::io_json::from_json_str(&written).unwrap();
    assert!(!outcome.is_empty());
}

// Shape subcommand tests

#[test]
fn shape_reports_representation() {
    plotprep()
        .args(["shape", "tests/fixtures/heatmap_sparse.json"])
        .assert()
        .success()
        .stdout("sparse-keyed\n");
    plotprep()
        .args(["shape", "tests/fixtures/heatmap_dense.json"])
        .assert()
        .success()
        .stdout("dense-matrix\n");
    plotprep()
        .args(["shape", "tests/fixtures/heatmap_object_of_arrays.json"])
        .assert()
        .success()
        .stdout("unsupported (an object of arrays)\n");
}
