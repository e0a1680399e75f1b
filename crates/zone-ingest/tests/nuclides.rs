//! Integration tests for the nuclide reference loader.

use std::io::Write;

use zone_ingest::{ParseError, load_nuclides, parse_nuclides};
use zone_model::Nuclide;

#[test]
fn test_parses_listing_with_comments() {
    let text = "# symbol z a\n\
                n 0 1\n\
                \n\
                H1 1 1\n\
                He4 2 4\n";
    let table = parse_nuclides(text.as_bytes(), "nuclides").unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.get("n"), Some(&Nuclide { z: 0, a: 1 }));
    assert_eq!(table.get("He4"), Some(&Nuclide { z: 2, a: 4 }));
    assert!(!table.contains("Fe56"));
}

#[test]
fn test_wrong_column_count_fails() {
    let error = parse_nuclides("H1 1\n".as_bytes(), "nuclides").unwrap_err();
    match error {
        ParseError::ColumnCount {
            line,
            expected,
            found,
            ..
        } => {
            assert_eq!(line, 1);
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        other => panic!("expected ColumnCount, got {other:?}"),
    }
}

#[test]
fn test_malformed_number_fails() {
    let error = parse_nuclides("H1 one 1\n".as_bytes(), "nuclides").unwrap_err();
    assert!(matches!(error, ParseError::Number { token, .. } if token == "one"));
}

#[test]
fn test_empty_listing_fails() {
    let error = parse_nuclides("# only comments\n".as_bytes(), "nuclides").unwrap_err();
    assert!(matches!(error, ParseError::Empty { .. }));
}

#[test]
fn test_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nuclides.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "n 0 1").unwrap();
    writeln!(file, "He4 2 4").unwrap();

    let table = load_nuclides(&path).unwrap();
    assert_eq!(table.len(), 2);
}
