//! Pattern geometry and loader behavior through the public API

use std::io::Write as _;

use turflife::{BoardError, Pattern, PatternFormat};

fn pattern(text: &str) -> Pattern {
    match Pattern::parse(text, PatternFormat::Plaintext) {
        Ok(p) => p,
        Err(e) => unreachable!("pattern setup failed: {e}"),
    }
}

#[test]
fn test_empty_pattern_has_no_live_offsets() {
    let p = Pattern::empty(3, 2);
    assert_eq!(p.rows(), 3);
    assert_eq!(p.cols(), 2);
    assert!(p.live_offsets().is_empty());
    assert!(!p.is_live(0, 0));
}

#[test]
fn test_center_uses_floor_of_dimension_minus_one() {
    assert_eq!(Pattern::empty(3, 2).center(), [1, 0]);
    assert_eq!(Pattern::empty(1, 1).center(), [0, 0]);
    assert_eq!(Pattern::empty(4, 4).center(), [1, 1]);
    assert_eq!(Pattern::empty(0, 0).center(), [0, 0]);
}

#[test]
fn test_bounding_rectangle_is_half_open() {
    let p = Pattern::empty(3, 2);
    let (start, end) = p.bounding_rectangle(1, 2);
    assert_eq!(start, [0, 2]);
    assert_eq!(end, [3, 4]);

    // Near the origin the rectangle may go negative; boards reject it
    let (start, _) = p.bounding_rectangle(0, 0);
    assert_eq!(start, [-1, 0]);
}

#[test]
fn test_live_offsets_match_o_characters() {
    let p = pattern(".O.\n..O\nOOO");
    assert_eq!(
        p.live_offsets(),
        vec![[0, 1], [1, 2], [2, 0], [2, 1], [2, 2]]
    );
    assert!(p.is_live(0, 1));
    assert!(!p.is_live(0, 0));
    assert!(!p.is_live(9, 9));
}

#[test]
fn test_load_replaces_footprint_whole() {
    let mut p = Pattern::empty(3, 2);
    assert!(p.load(".O.\n..O\nOOO", PatternFormat::Plaintext).is_ok());
    assert_eq!(p.rows(), 3);
    assert_eq!(p.cols(), 3);
    assert_eq!(p.live_offsets().len(), 5);
}

#[test]
fn test_failed_load_keeps_previous_footprint() {
    let mut p = pattern("OO\nOO");
    assert!(p.load(".O.\n.X.", PatternFormat::Plaintext).is_err());
    assert_eq!(p.rows(), 2);
    assert_eq!(p.cols(), 2);
    assert_eq!(p.live_offsets().len(), 4);
}

#[test]
fn test_bad_character_names_offender() {
    match Pattern::parse("..\n.g", PatternFormat::Plaintext) {
        Err(BoardError::UnrecognizedCharacter {
            character,
            line,
            column,
        }) => {
            assert_eq!(character, 'g');
            assert_eq!(line, 2);
            assert_eq!(column, 2);
        }
        other => unreachable!("expected UnrecognizedCharacter, got {other:?}"),
    }
}

#[test]
fn test_file_loading_skips_blank_lines() {
    let mut file = match tempfile::NamedTempFile::new() {
        Ok(f) => f,
        Err(e) => unreachable!("tempfile failed: {e}"),
    };
    assert!(write!(file, "\n.O.\nO.O\n   \n.O.\n\n").is_ok());
    let path = file.path().to_string_lossy().to_string();
    match Pattern::parse(&path, PatternFormat::PlaintextFile) {
        Ok(p) => {
            assert_eq!(p.rows(), 3);
            assert_eq!(p.cols(), 3);
            assert_eq!(p.live_offsets(), vec![[0, 1], [1, 0], [1, 2], [2, 1]]);
        }
        Err(e) => unreachable!("file parse failed: {e}"),
    }
}

#[test]
fn test_missing_file_reports_filesystem_error() {
    assert!(matches!(
        Pattern::parse("no/such/pattern.pat", PatternFormat::PlaintextFile),
        Err(BoardError::FileSystem { .. })
    ));
}
