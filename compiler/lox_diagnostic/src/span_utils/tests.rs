use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

const PROGRAM: &str = "print 1;\nvar x = 2;\nprint x + 3;";

/// Reference answer: count newlines and characters from the start.
fn scan_line_col(source: &str, offset: usize) -> (u32, u32) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |nl| nl + 1);
    let col = before[line_start..].chars().count() + 1;
    (line as u32, col as u32)
}

#[test]
fn test_line_starts() {
    let table = LineOffsetTable::build(PROGRAM);
    assert_eq!(table.line_count(), 3);
    assert_eq!(table.line_start_offset(0), None);
    assert_eq!(table.line_start_offset(1), Some(0));
    assert_eq!(table.line_start_offset(2), Some(9));
    assert_eq!(table.line_start_offset(3), Some(20));
    assert_eq!(table.line_start_offset(4), None);
}

#[test]
fn test_newline_belongs_to_the_line_it_ends() {
    let table = LineOffsetTable::build(PROGRAM);
    assert_eq!(table.line_from_offset(7), 1); // ';'
    assert_eq!(table.line_from_offset(8), 1); // '\n'
    assert_eq!(table.line_from_offset(9), 2); // 'v'
    assert_eq!(table.line_from_offset(31), 3); // last ';'
}

#[test]
fn test_columns_of_tokens() {
    let table = LineOffsetTable::build(PROGRAM);
    assert_eq!(table.offset_to_line_col(PROGRAM, 0), (1, 1)); // print
    assert_eq!(table.offset_to_line_col(PROGRAM, 13), (2, 5)); // x
    assert_eq!(table.offset_to_line_col(PROGRAM, 28), (3, 9)); // +
}

#[test]
fn test_columns_count_characters_not_bytes() {
    let source = "print \"é\";\n\"ü\" @";
    let table = LineOffsetTable::build(source);
    // 'é' is two bytes, so ';' is byte 10 but column 10.
    assert_eq!(table.offset_to_line_col(source, 10), (1, 10));
    assert_eq!(table.offset_to_line_col(source, 17), (2, 5)); // '@'
}

#[test]
fn test_offsets_past_the_end_clamp() {
    let table = LineOffsetTable::build("1 +");
    assert_eq!(table.offset_to_line_col("1 +", 3), (1, 4));
    assert_eq!(table.offset_to_line_col("1 +", 40), (1, 4));
    assert_eq!(LineOffsetTable::build("").offset_to_line_col("", 0), (1, 1));
}

#[test]
fn test_line_text_strips_terminators() {
    let source = "print 1;\r\n// comment\n\nprint 2;";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("print 1;"));
    assert_eq!(table.line_text(source, 2), Some("// comment"));
    assert_eq!(table.line_text(source, 3), Some(""));
    assert_eq!(table.line_text(source, 4), Some("print 2;"));
    assert_eq!(table.line_text(source, 5), None);
}

#[test]
fn test_trailing_newline_opens_an_empty_line() {
    let source = "print 1;\n";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 2);
    assert_eq!(table.line_from_offset(9), 2);
    assert_eq!(table.line_text(source, 2), Some(""));
}

proptest! {
    #[test]
    fn table_lookup_matches_a_scan(source in "[a-z;\"é \n]{0,60}") {
        let table = LineOffsetTable::build(&source);
        for (offset, _) in source.char_indices().chain([(source.len(), ' ')]) {
            prop_assert_eq!(
                table.offset_to_line_col(&source, offset as u32),
                scan_line_col(&source, offset)
            );
        }
    }
}
