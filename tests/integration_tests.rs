//! Integration tests for end-to-end scanning.
//!
//! These tests run the whole path from an on-disk source through the line
//! producer, the scanner, the count table and the text report.

use lexscan::{
    format_error,
    lexer::tokens::TokenKind,
    report::report::Reporter,
    scan::scan::scan_lines,
    source::source::LineSource,
};
use std::{fs, io::Write, path::PathBuf};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_scan_sample_fixture() {
    let source = LineSource::open(fixture("sample.txt")).unwrap();
    let scan = scan_lines(source, |_| Ok(())).unwrap();
    let summary = scan.summary();

    assert_eq!(scan.line_count(), 12);
    assert_eq!(summary.get(TokenKind::ReservedWord), 8);
    assert_eq!(summary.get(TokenKind::Identifier), 13);
    assert_eq!(summary.get(TokenKind::Operator), 9);
    assert_eq!(summary.get(TokenKind::NumberLiteral), 8);
    assert_eq!(summary.get(TokenKind::GroupingSymbol), 10);
    assert_eq!(summary.get(TokenKind::LexicalError), 2);
    assert_eq!(summary.total(), scan.tokens().len());
}

#[test]
fn test_error_tokens_carry_positions() {
    let source = LineSource::open(fixture("sample.txt")).unwrap();
    let scan = scan_lines(source, |_| Ok(())).unwrap();

    let errors: Vec<(u32, u32, &str)> = scan
        .tokens()
        .iter()
        .filter(|t| t.kind == TokenKind::LexicalError)
        .map(|t| (t.line, t.column, t.lexeme.as_str()))
        .collect();
    assert_eq!(errors, vec![(11, 18, "."), (11, 21, "$")]);
}

#[test]
fn test_full_report_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "if a==b {\n\n  x = 12 # y\n}\n").unwrap();

    let source = LineSource::open(&path).unwrap();
    let mut reporter = Reporter::new(Vec::new(), true, true);
    let scan = scan_lines(source, |tokens| reporter.tokens(tokens)).unwrap();
    reporter.summary(&scan.summary()).unwrap();

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    let expected = [
        "[Line 1, Col 1] Reserved Word          : if",
        "[Line 1, Col 4] Identifier             : a",
        "[Line 1, Col 5] Operator               : ==",
        "[Line 1, Col 7] Identifier             : b",
        "[Line 1, Col 9] Grouping Symbol        : {",
        "[Line 3, Col 3] Identifier             : x",
        "[Line 3, Col 5] Operator               : =",
        "[Line 3, Col 7] Number Literal         : 12",
        "[Line 3, Col 10] Lexical Error          : #",
        "[Line 3, Col 12] Identifier             : y",
        "[Line 4, Col 1] Grouping Symbol        : }",
        "",
        "--- Token count by category ---",
        "Grouping Symbol        : 2",
        "Identifier             : 4",
        "Lexical Error          : 1",
        "Number Literal         : 1",
        "Operator               : 2",
        "Reserved Word          : 1",
    ];
    assert_eq!(output.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn test_crlf_and_missing_final_newline() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"var a\r\nb").unwrap();

    let source = LineSource::open(file.path()).unwrap();
    let scan = scan_lines(source, |_| Ok(())).unwrap();

    let lexemes: Vec<&str> = scan.tokens().iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["var", "a", "b"]);
    assert_eq!(scan.line_count(), 2);
}

#[test]
fn test_invalid_utf8_becomes_error_token() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"a \xff b").unwrap();

    let source = LineSource::open(file.path()).unwrap();
    let scan = scan_lines(source, |_| Ok(())).unwrap();

    let kinds: Vec<TokenKind> = scan.tokens().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::LexicalError,
            TokenKind::Identifier,
        ]
    );
    assert_eq!(scan.tokens()[1].lexeme, "\u{FFFD}");
    assert_eq!(scan.tokens()[2].column, 5);
}

#[test]
fn test_truncated_sequence_keeps_byte_columns() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"\xE2\x82 x\n").unwrap();

    let source = LineSource::open(file.path()).unwrap();
    let scan = scan_lines(source, |_| Ok(())).unwrap();

    let tokens: Vec<(u32, TokenKind)> = scan.tokens().iter().map(|t| (t.column, t.kind)).collect();
    assert_eq!(
        tokens,
        vec![
            (1, TokenKind::LexicalError),
            (2, TokenKind::LexicalError),
            (4, TokenKind::Identifier),
        ]
    );
}

#[test]
fn test_empty_file_has_no_summary_entries() {
    let file = tempfile::NamedTempFile::new().unwrap();

    let source = LineSource::open(file.path()).unwrap();
    let scan = scan_lines(source, |_| Ok(())).unwrap();

    assert_eq!(scan.line_count(), 0);
    assert!(scan.summary().is_empty());
}

#[test]
fn test_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.txt");

    let error = LineSource::open(&path).err().unwrap();

    assert_eq!(error.get_error_name(), "SourceNotFound");
    assert_eq!(error.get_position().0, 0);
    assert!(format_error(&error)[0].starts_with("Error: SourceNotFound"));
}

#[test]
fn test_empty_source_path() {
    let error = LineSource::open("").err().unwrap();

    assert_eq!(error.get_error_name(), "EmptySourcePath");
}

#[test]
fn test_directory_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();

    let result = LineSource::open(dir.path()).and_then(|source| {
        scan_lines(source, |_| Ok(())).map(|_| ())
    });

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "SourceUnreadable");
}

#[test]
fn test_path_through_a_file_is_unreadable_not_missing() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let path = file.path().join("child.txt");

    let error = LineSource::open(&path).err().unwrap();

    assert_eq!(error.get_error_name(), "SourceUnreadable");
}
