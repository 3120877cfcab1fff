//! Unit tests for line processing and the extraction driver

use serde_json::json;

use vidrows::extract::{output_header, HeaderError, OutputRow};
use vidrows::{ExtractOptions, Extraction};

use crate::helpers::{data_line, data_line_raw, full_answer, full_entry, input_text, short_answer};

fn run(options: ExtractOptions, lines: &[String]) -> Vec<String> {
    let input = input_text(lines);
    Extraction::new(options)
        .process_reader(input.as_bytes())
        .unwrap()
        .rows
        .iter()
        .map(|row| row.to_string())
        .collect()
}

fn top(n: usize) -> ExtractOptions {
    ExtractOptions {
        top_n: n,
        ..ExtractOptions::default()
    }
}

#[test]
fn full_answer_rows_have_expected_columns() {
    let doc = full_answer(json!([full_entry(
        "https://www.youtube.com/watch?v=1",
        "Intro",
        "1:02:03"
    )]));
    let rows = run(top(5), &[data_line(&doc, "learn rust")]);
    assert_eq!(
        rows,
        vec![
            "learn rust\t0\thttps://www.youtube.com/watch?v=1\thttps://www.youtube.com/@channel\tChannel\tIntro\tYouTube\t2024-05-01T10:00:00Z\t3723\t1000"
        ]
    );
}

#[test]
fn top_n_beyond_list_length_emits_existing_rows_only() {
    let doc = full_answer(json!([
        full_entry("https://youtube.com/a", "a", "1"),
        full_entry("https://youtube.com/b", "b", "2")
    ]));
    let rows = run(top(3), &[data_line(&doc, "q")]);
    assert_eq!(rows.len(), 2);
}

#[test]
fn missing_answer_kind_yields_single_bare_row() {
    let doc = short_answer(json!([{"Url": "https://youtube.com/a", "Title": "a"}]));
    let rows = run(top(3), &[data_line(&doc, "q")]);
    assert_eq!(rows, vec!["q\t"]);
}

#[test]
fn invalid_base64_line_does_not_disturb_later_lines() {
    let good = full_answer(json!([full_entry("https://youtube.com/a", "a", "5")]));
    let rows = run(
        top(3),
        &[
            data_line_raw("@@not base64@@", "bad"),
            data_line(&good, "good"),
        ],
    );
    assert_eq!(rows[0], "bad\t");
    assert!(rows[1].starts_with("good\t0\thttps://youtube.com/a\t"));
}

#[test]
fn short_answers_extracted_with_video_type_one() {
    let doc = short_answer(json!([{
        "Url": "https://www.tiktok.com/@a/video/1",
        "Title": "dance",
        "TimeLength": "0:30",
        "DAPubUser": "a",
        "DAPublicationDate": "2024-02-02",
        "ViewCount": "3M"
    }]));
    let options = ExtractOptions {
        video_type: 1,
        ..top(5)
    };
    let rows = run(options, &[data_line(&doc, "dance")]);
    assert_eq!(
        rows,
        vec!["dance\t0\thttps://www.tiktok.com/@a/video/1\tnone\ta\tdance\tTikTok\t2024-02-02\t0:30\t3M"]
    );
}

#[test]
fn same_input_twice_gives_identical_output() {
    let doc = full_answer(json!([
        full_entry("https://youtube.com/a", "a", "1:00"),
        full_entry("https://vimeo.com/b", "b", "2:00")
    ]));
    let input = input_text(&[data_line(&doc, "q"), data_line_raw("x", "r")]);

    let first = Extraction::default()
        .process_reader(input.as_bytes())
        .unwrap()
        .to_string()
        .unwrap();
    let second = Extraction::default()
        .process_reader(input.as_bytes())
        .unwrap()
        .to_string()
        .unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with(&output_header()));
}

#[test]
fn header_without_query_column_fails_fast() {
    let err = Extraction::default()
        .process_reader("base64response\tregion\nabc\tus\n".as_bytes())
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<HeaderError>(),
        Some(HeaderError::MissingQueryColumn { .. })
    ));
}

#[test]
fn summary_counts_line_outcomes() {
    let good = full_answer(json!([full_entry("https://youtube.com/a", "a", "1")]));
    let none = short_answer(json!([]));
    let input = input_text(&[
        data_line(&good, "a"),
        data_line(&none, "b"),
        data_line_raw("???", "c"),
    ]);
    let extracted = Extraction::new(top(2)).process_reader(input.as_bytes()).unwrap();
    assert_eq!(extracted.summary.lines_read, 3);
    assert_eq!(extracted.summary.lines_with_results, 1);
    assert_eq!(extracted.summary.lines_without_answer, 1);
    assert_eq!(extracted.summary.lines_failed, 1);
    assert_eq!(extracted.summary.rows_written, 3);
    assert_eq!(extracted.rows[1], OutputRow::empty("b"));
}
