//! Integration tests for the extract command.
//!
//! Runs the compiled binary against temporary input files and checks the
//! written output, exit codes and stderr diagnostics.

use std::fs;

use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use vidrows::extract::output_header;

use crate::helpers::{
    data_line, data_line_raw, full_answer, full_entry, input_text, short_answer, vidrows,
    write_temp,
};

fn sample_input() -> String {
    let full = full_answer(json!([
        full_entry("https://www.youtube.com/watch?v=a", "First", "10:00"),
        full_entry("https://vimeo.com/b", "Dropped", "1:00"),
        full_entry("https://www.tiktok.com/@c/video/3", "Third", "0:45")
    ]));
    let short_only = short_answer(json!([{"Url": "https://www.youtube.com/shorts/z", "Title": "z"}]));
    input_text(&[
        data_line(&full, "how to bake bread"),
        data_line_raw("definitely-not-base64!", "broken line"),
        data_line(&short_only, "shorts only"),
    ])
}

#[test]
fn extract_writes_rows_for_full_answers() {
    let dir = TempDir::new().unwrap();
    let input = write_temp(&dir, "in.tsv", &sample_input());
    let output = dir.path().join("out.tsv");

    vidrows()
        .args(["extract", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--video-type", "0", "--top-n", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("3 lines"));

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], output_header());
    assert_eq!(
        lines[1],
        "how to bake bread\t0\thttps://www.youtube.com/watch?v=a\thttps://www.youtube.com/@channel\tChannel\tFirst\tYouTube\t2024-05-01T10:00:00Z\t600\t1000"
    );
    assert!(lines[2].starts_with("how to bake bread\t2\thttps://www.tiktok.com/@c/video/3\t"));
    assert!(lines[2].contains("\tTikTok\t"));
    assert_eq!(lines[3], "broken line\t");
    assert_eq!(lines[4], "shorts only\t");
    assert_eq!(lines.len(), 5);
}

#[test]
fn extract_short_answers() {
    let dir = TempDir::new().unwrap();
    let input = write_temp(&dir, "in.tsv", &sample_input());
    let output = dir.path().join("out.tsv");

    vidrows()
        .args(["extract", "-t", "1", "-n", "2", "--short-durations", "seconds", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[1], "how to bake bread\t");
    assert_eq!(lines[2], "broken line\t");
    assert_eq!(
        lines[3],
        "shorts only\t0\thttps://www.youtube.com/shorts/z\tnone\tnone\tz\tYouTube\t-1\t-1\t-1"
    );
}

#[test]
fn extract_fails_without_query_column() {
    let dir = TempDir::new().unwrap();
    let input = write_temp(&dir, "in.tsv", "base64response\tregion\nabc\tus\n");
    let output = dir.path().join("out.tsv");

    vidrows()
        .args(["extract", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no 'query' column"));

    assert!(!output.exists(), "no output should be written on setup failure");
}

#[test]
fn extract_fails_on_missing_input() {
    let dir = TempDir::new().unwrap();

    vidrows()
        .args(["extract", "-i"])
        .arg(dir.path().join("missing.tsv"))
        .arg("-o")
        .arg(dir.path().join("out.tsv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));
}

#[test]
fn extract_rejects_zero_top_n() {
    let dir = TempDir::new().unwrap();
    let input = write_temp(&dir, "in.tsv", &sample_input());

    vidrows()
        .args(["extract", "--top-n", "0", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.tsv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("top-n must be > 0"));
}

#[test]
fn extract_unknown_video_type_keeps_one_row_per_query() {
    let dir = TempDir::new().unwrap();
    let input = write_temp(&dir, "in.tsv", &sample_input());
    let output = dir.path().join("out.tsv");

    vidrows()
        .args(["extract", "--video-type", "5", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown video type"));

    let written = fs::read_to_string(&output).unwrap();
    let rows: Vec<&str> = written.lines().skip(1).collect();
    assert_eq!(rows, vec!["how to bake bread\t", "broken line\t", "shorts only\t"]);
}

#[test]
fn extract_reads_defaults_from_config_file() {
    let dir = TempDir::new().unwrap();
    let input = write_temp(&dir, "in.tsv", &sample_input());
    let config = write_temp(&dir, "config.toml", "[extract]\ntop_n = 1\n");
    let output = dir.path().join("out.tsv");

    vidrows()
        .args(["extract", "--config"])
        .arg(&config)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    // top_n = 1 leaves only position 0 for the first query
    assert_eq!(written.matches("how to bake bread").count(), 1);
}

#[test]
fn extract_verbose_logs_skipped_lines() {
    let dir = TempDir::new().unwrap();
    let input = write_temp(&dir, "in.tsv", &sample_input());

    vidrows()
        .args(["extract", "--verbose", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.tsv"))
        .assert()
        .success()
        .stderr(predicate::str::contains("line skipped"))
        .stderr(predicate::str::contains("result entry rejected"));
}
