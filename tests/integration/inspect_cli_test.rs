//! Integration tests for the inspect command.

use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use vidrows::decode::encode_response;

use crate::helpers::{data_line, full_answer, full_entry, input_text, vidrows, write_temp};

#[test]
fn inspect_lists_answer_blocks() {
    let doc = full_answer(json!([
        full_entry("https://youtube.com/a", "a", "1"),
        full_entry("https://youtube.com/b", "b", "2")
    ]));

    vidrows()
        .arg("inspect")
        .arg(encode_response(&doc))
        .assert()
        .success()
        .stdout(predicate::str::contains("WebAnswer"))
        .stdout(predicate::str::contains(
            "MultimediaKifVideoAnswer [full video answer, 2 results]",
        ));
}

#[test]
fn inspect_reads_first_line_of_file() {
    let dir = TempDir::new().unwrap();
    let doc = full_answer(json!([full_entry("https://youtube.com/a", "a", "1")]));
    let input = write_temp(&dir, "in.tsv", &input_text(&[data_line(&doc, "q")]));

    vidrows()
        .arg("inspect")
        .arg("--line-file")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 results"));
}

#[test]
fn inspect_reports_decode_failure() {
    vidrows()
        .args(["inspect", "%%%"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode response"));
}
