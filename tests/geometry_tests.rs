//! Geometry tests: offsets, totals and visibility across the four axes
//!
//! Every test finishes by checking the offset bookkeeping against a full
//! recomputation.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use fastgrid::{AxisKind, FastGrid};
use test_case::test_case;

fn assert_consistent(grid: &FastGrid) {
    assert!(grid.geometry().is_consistent(), "{:?}", grid.geometry());
}

#[test]
fn test_insert_at_front_shifts_every_row() {
    let mut grid = FastGrid::new();
    grid.set_row_count(3);
    grid.set_column_count(1);
    grid.set_row_height(1, 40);
    grid.set_row_height(2, 50);
    assert_eq!(grid.geometry().rows().offsets(), &[0, 30, 70]);

    grid.insert_row(0);

    let rows = grid.geometry().rows();
    assert_eq!(rows.sizes(), &[30, 30, 40, 50]);
    assert_eq!(rows.offsets(), &[0, 30, 60, 100]);
    assert_eq!(grid.total_height(), 150);
    assert_consistent(&grid);
}

#[test]
fn test_zero_width_hides_and_restores() {
    let mut grid = FastGrid::new();
    grid.set_sizes(1, 3, 0, 0);
    grid.set_column_width(1, 70);
    assert_eq!(grid.total_width(), 270);

    grid.set_column_width(1, 0);
    assert!(!grid.column_visible(1));
    assert_eq!(grid.column_width(1), 70);
    assert_eq!(grid.total_width(), 200);
    assert_eq!(grid.geometry().columns().offset(2), 100);

    grid.set_column_visible(1, true);
    assert!(grid.column_visible(1));
    assert_eq!(grid.total_width(), 270);
    assert_eq!(grid.geometry().columns().offset(2), 170);
    assert_consistent(&grid);
}

#[test]
fn test_resizing_hidden_column_moves_nothing() {
    let mut grid = FastGrid::new();
    grid.set_sizes(1, 3, 0, 0);
    grid.set_column_visible(0, false);
    grid.take_requests();

    grid.set_column_width(0, 250);
    assert!(grid.take_requests().is_empty());
    assert_eq!(grid.total_width(), 200);

    grid.set_column_visible(0, true);
    assert_eq!(grid.total_width(), 450);
    assert_consistent(&grid);
}

#[test_case(0, 0 => (500, 300) ; "no headers")]
#[test_case(1, 0 => (500, 330) ; "one header row")]
#[test_case(0, 2 => (700, 300) ; "two header columns")]
#[test_case(2, 1 => (600, 360) ; "both bands")]
fn test_headers_add_to_totals(header_rows: usize, header_columns: usize) -> (i32, i32) {
    let mut grid = FastGrid::new();
    grid.set_sizes(10, 5, header_rows, header_columns);
    assert_consistent(&grid);
    (grid.total_width(), grid.total_height())
}

#[test]
fn test_header_changes_move_main_offsets() {
    let mut grid = FastGrid::new();
    grid.set_sizes(4, 4, 1, 1);
    assert_eq!(grid.geometry().rows().offset(0), 30);
    assert_eq!(grid.geometry().columns().offset(0), 100);

    grid.set_header_row_height(0, 45);
    assert_eq!(grid.geometry().rows().offset(0), 45);
    assert_eq!(grid.header_rows_total_height(), 45);

    grid.add_header_column();
    assert_eq!(grid.geometry().columns().offset(3), 500);

    grid.set_header_column_visible(0, false);
    assert_eq!(grid.header_columns_total_width(), 100);
    assert_eq!(grid.geometry().columns().offset(0), 100);

    grid.delete_header_row(0);
    assert_eq!(grid.geometry().rows().offset(0), 0);
    assert_eq!(grid.total_height(), 120);
    assert_consistent(&grid);
}

#[test]
fn test_default_sizes_apply_to_new_lines_only() {
    let mut grid = FastGrid::new();
    grid.set_sizes(2, 2, 0, 0);
    grid.set_default_width(64);
    grid.set_default_height(0);
    assert_eq!(grid.default_height(), 1);

    grid.add_column();
    grid.add_row();
    assert_eq!(grid.column_width(0), 100);
    assert_eq!(grid.column_width(2), 64);
    assert_eq!(grid.row_height(2), 1);
    assert_eq!(grid.total_width(), 264);
    assert_consistent(&grid);
}

#[test]
fn test_mixed_edits_stay_consistent() {
    let mut grid = FastGrid::new();
    grid.set_sizes(20, 20, 2, 2);
    for i in 0..10 {
        grid.set_row_height(i * 2, u32::try_from(10 + i).unwrap());
        grid.set_column_visible(i, i % 3 == 0);
    }
    grid.delete_row(5);
    grid.insert_column(7);
    grid.delete_header_column(1);
    grid.set_row_visible(3, false);
    grid.insert_row(0);
    grid.set_row_count(12);
    assert_eq!(grid.row_count(), 12);
    assert_eq!(grid.column_count(), 21);
    assert_eq!(grid.geometry().count(AxisKind::HeaderColumns), 1);
    assert_consistent(&grid);
}

#[test]
fn test_oversized_height_is_clamped() {
    let mut grid = FastGrid::new();
    grid.set_sizes(1, 1, 0, 0);
    grid.set_row_height(0, u32::MAX);
    assert_eq!(grid.row_height(0), fastgrid::layout::MAX_LINE_SIZE);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_delete_out_of_range_panics() {
    let mut grid = FastGrid::new();
    grid.set_sizes(2, 2, 0, 0);
    grid.delete_row(2);
}
