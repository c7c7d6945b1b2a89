//! Viewport and scroll tests
//!
//! Tests for scroll clamping, scrollbar ranges and the visible range as the
//! viewport scrolls, resizes and the content changes under it.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use fastgrid::{FastGrid, HostRequest, Span, VisibleRange};

/// 100 rows x 20 columns with one header row and column, in a 400x300 viewport.
fn grid() -> FastGrid {
    let mut grid = FastGrid::new();
    grid.resize(400, 300);
    grid.set_sizes(100, 20, 1, 1);
    grid.take_requests();
    grid
}

fn fresh_range(grid: &FastGrid) -> VisibleRange {
    VisibleRange::compute(grid.geometry(), &grid.viewport())
}

#[test]
fn test_initial_visible_range() {
    let grid = grid();
    let range = grid.visible_range();
    assert_eq!(range.rows, Some(Span::new(0, 8)));
    assert_eq!(range.columns, Some(Span::new(0, 2)));
    assert_eq!(grid.column_header_visible_range(), Some(Span::new(0, 0)));
    assert_eq!(grid.row_header_visible_range(), Some(Span::new(0, 0)));
}

#[test]
fn test_partial_rows_at_both_edges() {
    let mut grid = grid();
    grid.set_vertical_scroll(45);
    assert_eq!(grid.visible_range().rows, Some(Span::new(1, 10)));
    grid.set_horizontal_scroll(150);
    assert_eq!(grid.visible_range().columns, Some(Span::new(1, 4)));
}

#[test]
fn test_scrollbar_ranges() {
    let grid = grid();
    let bars = grid.scroll_bars();
    assert_eq!(bars.vertical.maximum, 3_030 - 300 + 1);
    assert_eq!(bars.horizontal.maximum, 2_100 - 400 + 1);
    assert_eq!(bars.vertical.page_step, 270);
    assert_eq!(bars.horizontal.page_step, 300);
    assert_eq!(bars.vertical.single_step, 100);
}

#[test]
fn test_incremental_range_matches_fresh_computation() {
    let mut grid = grid();
    grid.set_row_height(12, 0);
    grid.set_row_height(13, 200);
    grid.set_column_width(4, 5);

    let steps = [
        (0, 7),
        (13, 90),
        (0, 250),
        (-40, -300),
        (500, 1_000),
        (-1_000, -10_000),
        (3, 3),
    ];
    for (dx, dy) in steps {
        grid.scroll_by(dx, dy);
        assert_eq!(grid.visible_range(), fresh_range(&grid), "after {dx},{dy}");
    }
}

#[test]
fn test_range_follows_structure_changes() {
    let mut grid = grid();
    grid.scroll_to_bottom();
    grid.delete_row(99);
    grid.delete_row(0);
    assert_eq!(grid.visible_range(), fresh_range(&grid));
    assert_eq!(grid.visible_range().rows.unwrap().last, 97);

    grid.set_header_row_count(3);
    assert_eq!(grid.visible_range(), fresh_range(&grid));
}

#[test]
fn test_resize_reports_scrollbars() {
    let mut grid = grid();
    grid.resize(400, 600);
    let requests = grid.take_requests();
    assert!(matches!(
        requests[0],
        HostRequest::ScrollBarsChanged(bars) if bars.vertical.page_step == 570
    ));
    assert!(requests.contains(&HostRequest::Repaint));
    assert_eq!(grid.visible_range().rows, Some(Span::new(0, 18)));

    grid.resize(400, 600);
    assert!(grid.take_requests().is_empty());
}

#[test]
fn test_scroll_without_range_change_skips_scrollbar_notice() {
    let mut grid = grid();
    grid.set_scroll_position(10, 10);
    let requests = grid.take_requests();
    assert_eq!(requests, vec![HostRequest::Repaint]);
    assert_eq!(grid.scroll_position(), (10, 10));
}

#[test]
fn test_viewport_smaller_than_headers() {
    let mut grid = grid();
    grid.resize(80, 20);
    let range = grid.visible_range();
    assert_eq!(range.rows, None);
    assert_eq!(range.columns, None);
    assert_eq!(range.header_rows, Some(0));
}

#[test]
fn test_empty_grid() {
    let mut grid = FastGrid::new();
    grid.resize(400, 300);
    assert_eq!(grid.visible_range(), VisibleRange::default());
    assert_eq!(grid.scroll_bars().vertical.maximum, 0);
    grid.set_scroll_position(50, 50);
    assert_eq!(grid.scroll_position(), (0, 0));
}
