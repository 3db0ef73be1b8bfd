//! Integration tests for document sessions and JSON page documents.

use pdf_readaloud::document::{MemoryPageSource, PageSource, ReadAloudSession};
use pdf_readaloud::pipeline::{paragraphs_to_json, ReadAloudConfig};
use std::io::Write;

const DOCUMENT: &str = r#"{
  "pages": [
    [
      {"str": "A Study of Things", "x": 200, "y": 780},
      {"str": "Reading text aloud needs care", "x": 72, "y": 700},
      {"str": "ful clean", "x": 72, "y": 686},
      {"str": "-", "x": 120, "y": 686},
      {"str": "up [1].", "x": 72, "y": 672},
      {"str": "1", "x": 300, "y": 40}
    ],
    [
      {"str": "A Study of Things", "x": 200, "y": 780},
      {"str": "Headers repeat on ", "x": 72, "y": 700},
      {"str": "every page.", "x": 170, "y": 700},
      {"str": "2", "x": 300, "y": 40}
    ]
  ]
}"#;

#[test]
fn test_reads_document_in_order() {
    let source = MemoryPageSource::from_json_str(DOCUMENT).unwrap();
    assert_eq!(source.page_count(), 2);
    let mut session = ReadAloudSession::new(source);

    let first = session.get_texts(0, false).unwrap().unwrap();
    assert_eq!(
        first,
        vec!["A Study of Things Reading text aloud needs care ful cleanup.", "1"]
    );

    let second = session.get_texts(1, false).unwrap().unwrap();
    assert_eq!(second, vec!["Headers repeat on every page."]);
    assert_eq!(session.current_index(), 1);

    assert_eq!(session.get_texts(2, false).unwrap(), None);
    assert_eq!(session.current_index(), 1);
}

#[test]
fn test_quiet_prefetch_keeps_position() {
    let source = MemoryPageSource::from_json_str(DOCUMENT).unwrap();
    let mut session = ReadAloudSession::new(source);
    session.get_texts(0, false).unwrap();
    session.get_texts(1, true).unwrap();
    assert_eq!(session.current_index(), 0);
}

#[test]
fn test_reset_history_reads_headers_again() {
    let source = MemoryPageSource::from_json_str(DOCUMENT).unwrap();
    let mut session = ReadAloudSession::new(source);
    session.get_texts(0, false).unwrap();
    session.reset_history();
    let second = session.get_texts(1, false).unwrap().unwrap();
    assert_eq!(second, vec!["A Study of Things Headers repeat on every page.", "2"]);
}

#[test]
fn test_invalid_config_rejected() {
    let mut config = ReadAloudConfig::default();
    config.trimmer.history_capacity = 0;
    let result = ReadAloudSession::with_config(MemoryPageSource::default(), config);
    assert!(result.is_err());
}

#[test]
fn test_load_from_file_and_emit_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DOCUMENT.as_bytes()).unwrap();

    let reader = std::fs::File::open(file.path()).unwrap();
    let source = MemoryPageSource::from_reader(reader).unwrap();
    let mut session = ReadAloudSession::new(source);
    session.get_texts(0, true).unwrap();
    let second = session.get_texts(1, true).unwrap().unwrap();

    assert_eq!(
        paragraphs_to_json(&second).unwrap(),
        r#"["Headers repeat on every page."]"#
    );
}
