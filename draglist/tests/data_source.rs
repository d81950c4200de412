use draglist::{DataSource, IndexPath, ReorderError, Section, Sections};

fn letters() -> Sections<&'static str> {
    Sections::new(vec![
        Section::titled("First", vec!["a", "b", "c"]),
        Section::new(vec!["d", "e"]),
    ])
}

// ============================================================================
// IndexPath
// ============================================================================

#[test]
fn test_index_path_orders_by_section_then_row() {
    assert!(IndexPath::new(0, 5) < IndexPath::new(1, 0));
    assert!(IndexPath::new(1, 0) < IndexPath::new(1, 1));
    assert_eq!(IndexPath::from((2, 3)), IndexPath::new(2, 3));
    assert_eq!(IndexPath::new(0, 4).to_string(), "(0, 4)");
}

#[test]
fn test_after_move_down_within_section() {
    let from = IndexPath::new(0, 1);
    let to = IndexPath::new(0, 3);
    assert_eq!(IndexPath::new(0, 0).after_move(from, to), IndexPath::new(0, 0));
    assert_eq!(IndexPath::new(0, 2).after_move(from, to), IndexPath::new(0, 1));
    assert_eq!(IndexPath::new(0, 3).after_move(from, to), IndexPath::new(0, 2));
    assert_eq!(IndexPath::new(0, 4).after_move(from, to), IndexPath::new(0, 4));
}

#[test]
fn test_after_move_up_within_section() {
    let from = IndexPath::new(0, 3);
    let to = IndexPath::new(0, 1);
    assert_eq!(IndexPath::new(0, 0).after_move(from, to), IndexPath::new(0, 0));
    assert_eq!(IndexPath::new(0, 1).after_move(from, to), IndexPath::new(0, 2));
    assert_eq!(IndexPath::new(0, 2).after_move(from, to), IndexPath::new(0, 3));
    assert_eq!(IndexPath::new(0, 4).after_move(from, to), IndexPath::new(0, 4));
}

#[test]
fn test_after_move_across_sections() {
    let from = IndexPath::new(0, 0);
    let to = IndexPath::new(1, 1);
    // Rows after the source close the gap.
    assert_eq!(IndexPath::new(0, 1).after_move(from, to), IndexPath::new(0, 0));
    // Rows at or after the destination make room.
    assert_eq!(IndexPath::new(1, 0).after_move(from, to), IndexPath::new(1, 0));
    assert_eq!(IndexPath::new(1, 1).after_move(from, to), IndexPath::new(1, 2));
}

// ============================================================================
// Sections
// ============================================================================

#[test]
fn test_sections_report_counts_and_titles() {
    let data = letters();
    assert_eq!(data.number_of_sections(), 2);
    assert_eq!(data.number_of_rows(0), 3);
    assert_eq!(data.number_of_rows(1), 2);
    assert_eq!(data.number_of_rows(7), 0);
    assert_eq!(data.section_title(0), Some("First".to_string()));
    assert_eq!(data.section_title(1), None);
    assert_eq!(data.row_text(IndexPath::new(1, 1)), "e");
    assert_eq!(data.row_text(IndexPath::new(1, 9)), "");
}

#[test]
fn test_try_move_row_within_section() {
    let mut data = letters();
    data.try_move_row(IndexPath::new(0, 0), IndexPath::new(0, 2)).unwrap();
    assert_eq!(data.rows(0), &["b", "c", "a"]);
}

#[test]
fn test_try_move_row_across_sections() {
    let mut data = letters();
    data.try_move_row(IndexPath::new(1, 1), IndexPath::new(0, 0)).unwrap();
    assert_eq!(data.rows(0), &["e", "a", "b", "c"]);
    assert_eq!(data.rows(1), &["d"]);
}

#[test]
fn test_try_move_row_to_end_of_other_section() {
    let mut data = letters();
    data.try_move_row(IndexPath::new(0, 1), IndexPath::new(1, 2)).unwrap();
    assert_eq!(data.rows(0), &["a", "c"]);
    assert_eq!(data.rows(1), &["d", "e", "b"]);
}

#[test]
fn test_try_move_row_rejects_bad_coordinates() {
    let mut data = letters();
    assert_eq!(
        data.try_move_row(IndexPath::new(5, 0), IndexPath::new(0, 0)),
        Err(ReorderError::SectionOutOfBounds {
            section: 5,
            count: 2
        })
    );
    assert_eq!(
        data.try_move_row(IndexPath::new(0, 3), IndexPath::new(0, 0)),
        Err(ReorderError::RowOutOfBounds(IndexPath::new(0, 3)))
    );
    // Same section: the last valid destination is len - 1.
    assert_eq!(
        data.try_move_row(IndexPath::new(0, 0), IndexPath::new(0, 3)),
        Err(ReorderError::DestinationOutOfBounds(IndexPath::new(0, 3)))
    );
    // Untouched after the failures.
    assert_eq!(data, letters());
}

#[test]
fn test_move_row_ignores_invalid_moves() {
    let mut data = letters();
    DataSource::move_row(&mut data, IndexPath::new(0, 9), IndexPath::new(1, 0));
    assert_eq!(data, letters());
}

#[test]
fn test_reorder_error_messages() {
    let err = ReorderError::RowOutOfBounds(IndexPath::new(1, 4));
    assert_eq!(err.to_string(), "No row at (1, 4)");
    let err = ReorderError::SectionOutOfBounds {
        section: 3,
        count: 2,
    };
    assert_eq!(err.to_string(), "Section 3 out of bounds (2 sections)");
}
