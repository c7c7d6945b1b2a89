//! Selection model tests through the grid API
//!
//! Covers idempotence, agreement of the selected list with the per-cell
//! state and the row/column flags, current-cell moves and structural edits.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use fastgrid::{CellPos, FastGrid, HostRequest};

fn grid(rows: usize, columns: usize) -> FastGrid {
    let mut grid = FastGrid::new();
    grid.resize(800, 600);
    grid.set_sizes(rows, columns, 1, 1);
    grid.take_requests();
    grid
}

fn assert_consistent(grid: &FastGrid) {
    assert!(grid.selection().is_consistent(), "{:?}", grid.selection());
}

#[test]
fn test_repeated_select_changes_nothing() {
    let mut grid = grid(4, 4);
    grid.set_cell_selected(1, 2, true);
    assert_eq!(grid.take_requests(), vec![HostRequest::Repaint]);

    grid.set_cell_selected(1, 2, true);
    assert!(grid.take_requests().is_empty());
    assert_eq!(grid.current_selection(), &[CellPos::new(1, 2)]);

    grid.set_cell_selected(3, 3, false);
    assert!(grid.take_requests().is_empty());
    assert_consistent(&grid);
}

#[test]
fn test_flags_follow_cells() {
    let mut grid = grid(4, 4);
    grid.set_cell_selected(0, 1, true);
    grid.set_cell_selected(2, 1, true);
    assert!(grid.row_selected(0) && grid.row_selected(2));
    assert!(grid.column_selected(1));
    assert!(!grid.column_selected(0));

    grid.set_cell_selected(0, 1, false);
    assert!(!grid.row_selected(0));
    assert!(grid.column_selected(1));
    assert_consistent(&grid);
}

#[test]
fn test_row_and_column_helpers() {
    let mut grid = grid(3, 5);
    grid.select_row(1);
    assert_eq!(grid.current_selection().len(), 5);
    assert!((0..5).all(|c| grid.column_selected(c)));

    grid.select_column(4);
    assert_eq!(grid.current_selection().len(), 7);

    grid.unselect_row(1);
    assert_eq!(
        grid.current_selection(),
        &[CellPos::new(0, 4), CellPos::new(2, 4)]
    );
    grid.unselect_column(4);
    assert!(grid.current_selection().is_empty());
    assert_consistent(&grid);
}

#[test]
fn test_select_all_lists_row_major() {
    let mut grid = grid(2, 3);
    grid.set_cell_selected(1, 1, true);
    grid.select_all();
    assert_eq!(grid.current_selection().len(), 6);
    assert_eq!(grid.current_selection()[0], CellPos::new(0, 0));
    assert_eq!(grid.current_selection()[5], CellPos::new(1, 2));
    grid.unselect_all();
    assert!(grid.current_selection().is_empty());
    assert!(!grid.row_selected(1));
    assert_consistent(&grid);
}

#[test]
fn test_current_cell_moves() {
    let mut grid = grid(5, 5);
    grid.set_current_cell(Some(CellPos::new(1, 1)), false);
    assert_eq!(grid.current_selection(), &[CellPos::new(1, 1)]);

    grid.set_current_cell(Some(CellPos::new(3, 2)), true);
    assert_eq!(grid.current_cell(), Some(CellPos::new(3, 2)));
    assert_eq!(grid.current_selection(), &[CellPos::new(1, 1)]);

    grid.set_current_row(4, false);
    assert_eq!(grid.current_cell(), Some(CellPos::new(4, 2)));
    assert_eq!(grid.current_selection(), &[CellPos::new(4, 2)]);

    grid.set_current_column(0, true);
    assert_eq!(grid.current_cell(), Some(CellPos::new(4, 0)));

    grid.set_current_cell(Some(CellPos::new(9, 9)), false);
    assert_eq!(grid.current_cell(), None);
    assert_consistent(&grid);
}

#[test]
fn test_current_row_without_current_cell_stays_empty() {
    let mut grid = grid(3, 3);
    grid.set_current_row(1, false);
    assert_eq!(grid.current_cell(), None);
}

#[test]
fn test_structure_edits_shift_selection() {
    let mut grid = grid(4, 4);
    grid.set_cell_selected(1, 1, true);
    grid.set_cell_selected(3, 0, true);
    grid.set_current_cell(Some(CellPos::new(3, 3)), true);

    grid.insert_row(0);
    assert!(grid.cell_selected(2, 1));
    assert_eq!(grid.current_cell(), Some(CellPos::new(4, 3)));

    grid.delete_column(0);
    assert_eq!(grid.current_selection(), &[CellPos::new(2, 0)]);
    assert!(!grid.column_selected(2));
    assert_eq!(grid.current_cell(), Some(CellPos::new(4, 2)));

    grid.delete_row(4);
    assert_eq!(grid.current_cell(), None);
    assert_consistent(&grid);
}

#[test]
fn test_shrinking_counts_drop_selection() {
    let mut grid = grid(6, 6);
    grid.select_all();
    grid.set_sizes(2, 3, 1, 1);
    assert_eq!(grid.current_selection().len(), 6);
    assert_consistent(&grid);

    grid.clear();
    assert!(grid.current_selection().is_empty());
    assert_eq!(grid.current_cell(), None);
}
