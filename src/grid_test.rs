use super::*;

#[test]
fn from_canvas_floors_both_dimensions() {
    // 1000 / 18 = 55.55… → 55 whole cells per axis.
    let grid = Grid::from_canvas(1000.0, 1000.0, 18.0);
    assert_eq!(grid.rows(), 55);
    assert_eq!(grid.cols(), 55);

    let wide = Grid::from_canvas(90.0, 36.0, 18.0);
    assert_eq!(wide.rows(), 2);
    assert_eq!(wide.cols(), 5);
}

#[test]
fn new_grid_is_blank() {
    let grid = Grid::new(4, 6);
    assert!(grid.is_blank());
    assert_eq!(grid.painted_count(), 0);
    assert_eq!(grid.cell(0, 0), None);
}

#[test]
fn set_cell_and_read_back() {
    let mut grid = Grid::new(3, 3);
    grid.set_cell(1, 2, Some("7".to_string()));
    assert_eq!(grid.cell(1, 2), Some(&"7".to_string()));
    assert_eq!(grid.painted_count(), 1);

    // Overwrite with the no-draw state erases.
    grid.set_cell(1, 2, None);
    assert!(grid.is_blank());
}

#[test]
fn out_of_range_writes_are_ignored() {
    let mut grid = Grid::new(2, 2);
    grid.set_cell(2, 0, Some("0".to_string()));
    grid.set_cell(0, 2, Some("0".to_string()));
    grid.set_cell(usize::MAX, usize::MAX, Some("0".to_string()));
    assert!(grid.is_blank());
    assert_eq!(grid.cell(5, 5), None);
}

#[test]
fn clear_resets_every_cell() {
    let mut grid = Grid::new(2, 2);
    for row in 0..2 {
        for col in 0..2 {
            grid.set_cell(row, col, Some("1".to_string()));
        }
    }
    assert_eq!(grid.painted_count(), 4);
    grid.clear();
    assert!(grid.is_blank());
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 2);
}

#[test]
fn consistency_detects_truncated_cell_buffers() {
    let grid = Grid::new(2, 3);
    assert!(grid.is_consistent());

    let mangled: Grid =
        serde_json::from_str(r#"{"rows":2,"cols":3,"cells":[null,null]}"#).unwrap();
    assert!(!mangled.is_consistent());
}
