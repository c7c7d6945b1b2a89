//! Pointer interaction tests
//!
//! Drives the grid with pointer events in viewport pixels. Unless noted the
//! grid has one header row (30px) and one header column (100px), so cell
//! (r, c) is centred at (150 + 100c, 45 + 30r).

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use fastgrid::{
    CellPos, FastGrid, HeaderHit, HostRequest, InteractionMode, Modifiers, PointerEvent,
};

fn grid(rows: usize, columns: usize, width: i32, height: i32) -> FastGrid {
    let mut grid = FastGrid::new();
    grid.resize(width, height);
    grid.set_sizes(rows, columns, 1, 1);
    grid.take_requests();
    grid
}

fn small() -> FastGrid {
    grid(5, 5, 700, 200)
}

fn center(row: i32, column: i32) -> (i32, i32) {
    (150 + 100 * column, 45 + 30 * row)
}

fn click(grid: &mut FastGrid, row: i32, column: i32, modifiers: Modifiers) {
    let (x, y) = center(row, column);
    grid.pointer_down(PointerEvent::press(x, y, modifiers));
    grid.pointer_up(PointerEvent::release(x, y));
}

fn drag_to(grid: &mut FastGrid, row: i32, column: i32, modifiers: Modifiers) {
    let (x, y) = center(row, column);
    grid.pointer_move(PointerEvent::drag(x, y, modifiers));
}

fn selected(grid: &FastGrid) -> Vec<CellPos> {
    let mut cells = grid.current_selection().to_vec();
    cells.sort();
    cells
}

fn block(top: usize, left: usize, bottom: usize, right: usize) -> Vec<CellPos> {
    let mut cells = Vec::new();
    for row in top..=bottom {
        for column in left..=right {
            cells.push(CellPos::new(row, column));
        }
    }
    cells
}

#[test]
fn test_click_selects_single_cell() {
    let mut grid = small();
    click(&mut grid, 2, 2, Modifiers::NONE);
    assert_eq!(grid.current_cell(), Some(CellPos::new(2, 2)));
    assert_eq!(selected(&grid), vec![CellPos::new(2, 2)]);
    assert_eq!(grid.interaction_mode(), InteractionMode::Idle);
    assert!(grid.take_requests().contains(&HostRequest::Repaint));
}

#[test]
fn test_shift_click_extends_then_shrinks_back() {
    let mut grid = small();
    click(&mut grid, 2, 2, Modifiers::NONE);

    click(&mut grid, 4, 4, Modifiers::SHIFT);
    assert_eq!(grid.current_cell(), Some(CellPos::new(4, 4)));
    assert_eq!(selected(&grid), block(2, 2, 4, 4));
    assert_eq!(grid.shift_anchor(), Some(CellPos::new(2, 2)));

    click(&mut grid, 2, 2, Modifiers::SHIFT);
    assert_eq!(grid.current_cell(), Some(CellPos::new(2, 2)));
    assert_eq!(selected(&grid), vec![CellPos::new(2, 2)]);
    assert!(grid.selection().is_consistent());
}

#[test]
fn test_shift_extension_restores_cells_it_passed_over() {
    let mut grid = small();
    grid.set_cell_selected(4, 0, true);
    click(&mut grid, 0, 0, Modifiers::CTRL);
    click(&mut grid, 4, 1, Modifiers::SHIFT);
    assert_eq!(selected(&grid), block(0, 0, 4, 1));

    click(&mut grid, 1, 0, Modifiers::SHIFT);
    assert_eq!(
        selected(&grid),
        vec![CellPos::new(0, 0), CellPos::new(1, 0), CellPos::new(4, 0)]
    );
}

#[test]
fn test_shift_click_without_current_cell_anchors_at_origin() {
    let mut grid = small();
    click(&mut grid, 2, 2, Modifiers::SHIFT);
    assert_eq!(grid.shift_anchor(), Some(CellPos::new(0, 0)));
    assert_eq!(selected(&grid), block(0, 0, 2, 2));
}

#[test]
fn test_shift_click_after_current_cell_cleared_starts_fresh() {
    let mut grid = small();
    click(&mut grid, 1, 1, Modifiers::NONE);
    grid.set_current_cell(None, true);

    click(&mut grid, 3, 3, Modifiers::SHIFT);
    assert_eq!(grid.current_cell(), Some(CellPos::new(3, 3)));
    assert_eq!(grid.shift_anchor(), Some(CellPos::new(0, 0)));
    assert_eq!(selected(&grid), block(0, 0, 3, 3));
    assert!(grid.selection().is_consistent());
}

#[test]
fn test_ctrl_click_toggles() {
    let mut grid = small();
    click(&mut grid, 0, 0, Modifiers::NONE);
    click(&mut grid, 1, 1, Modifiers::CTRL);
    assert_eq!(
        selected(&grid),
        vec![CellPos::new(0, 0), CellPos::new(1, 1)]
    );
    assert_eq!(grid.current_cell(), Some(CellPos::new(1, 1)));

    click(&mut grid, 1, 1, Modifiers::CTRL);
    assert_eq!(selected(&grid), vec![CellPos::new(0, 0)]);
    assert_eq!(grid.current_cell(), Some(CellPos::new(1, 1)));
}

#[test]
fn test_plain_drag_selects_rectangle_from_press() {
    let mut grid = small();
    let (x, y) = center(0, 0);
    grid.pointer_down(PointerEvent::press(x, y, Modifiers::NONE));
    assert_eq!(grid.interaction_mode(), InteractionMode::PressedInCell);

    drag_to(&mut grid, 2, 1, Modifiers::NONE);
    assert_eq!(grid.current_cell(), Some(CellPos::new(2, 1)));
    assert_eq!(selected(&grid), block(0, 0, 2, 1));

    drag_to(&mut grid, 1, 1, Modifiers::NONE);
    assert_eq!(selected(&grid), block(0, 0, 1, 1));

    grid.pointer_up(PointerEvent::release(x, y));
    drag_to(&mut grid, 4, 4, Modifiers::NONE);
    assert_eq!(selected(&grid), block(0, 0, 1, 1));
}

#[test]
fn test_ctrl_drag_keeps_earlier_selection() {
    let mut grid = small();
    click(&mut grid, 4, 4, Modifiers::NONE);

    let (x, y) = center(0, 0);
    grid.pointer_down(PointerEvent::press(x, y, Modifiers::CTRL));
    drag_to(&mut grid, 1, 1, Modifiers::CTRL);
    let mut expected = block(0, 0, 1, 1);
    expected.push(CellPos::new(4, 4));
    assert_eq!(selected(&grid), expected);

    drag_to(&mut grid, 0, 1, Modifiers::CTRL);
    assert_eq!(
        selected(&grid),
        vec![CellPos::new(0, 0), CellPos::new(0, 1), CellPos::new(4, 4)]
    );
    assert!(grid.selection().is_consistent());
}

#[test]
fn test_shift_drag_shrink_restores_earlier_state() {
    let mut grid = small();
    grid.set_cell_selected(4, 0, true);
    click(&mut grid, 0, 0, Modifiers::CTRL);

    let (x, y) = center(0, 0);
    grid.pointer_down(PointerEvent::press(x, y, Modifiers::SHIFT));
    drag_to(&mut grid, 4, 1, Modifiers::SHIFT);
    assert_eq!(grid.current_cell(), Some(CellPos::new(4, 1)));
    assert_eq!(selected(&grid), block(0, 0, 4, 1));

    drag_to(&mut grid, 1, 0, Modifiers::SHIFT);
    assert_eq!(
        selected(&grid),
        vec![CellPos::new(0, 0), CellPos::new(1, 0), CellPos::new(4, 0)]
    );
    grid.pointer_up(PointerEvent::release(x, y));
    assert_eq!(grid.shift_anchor(), Some(CellPos::new(0, 0)));
    assert!(grid.selection().is_consistent());
}

#[test]
fn test_drag_past_content_clamps_to_last_cell() {
    let mut grid = small();
    let (x, y) = center(3, 3);
    grid.pointer_down(PointerEvent::press(x, y, Modifiers::NONE));
    grid.pointer_move(PointerEvent::drag(680, 185, Modifiers::NONE));
    assert_eq!(grid.current_cell(), Some(CellPos::new(4, 4)));
    assert_eq!(selected(&grid), block(3, 3, 4, 4));
}

#[test]
fn test_autoscroll_requests() {
    let mut grid = grid(50, 50, 400, 300);
    let (x, y) = center(0, 0);
    grid.pointer_down(PointerEvent::press(x, y, Modifiers::NONE));
    grid.take_requests();

    grid.pointer_move(PointerEvent::drag(x, 295, Modifiers::NONE));
    let requests = grid.take_requests();
    assert!(requests.contains(&HostRequest::StartAutoscroll { interval_ms: 5 }));
    assert!(requests
        .iter()
        .any(|r| matches!(r, HostRequest::ScrollBarsChanged(_))));
    assert_eq!(grid.scroll_position(), (0, 5));
    assert_eq!(grid.current_cell(), Some(CellPos::new(9, 0)));

    grid.autoscroll_tick();
    let requests = grid.take_requests();
    assert_eq!(grid.scroll_position(), (0, 10));
    assert!(!requests
        .iter()
        .any(|r| matches!(r, HostRequest::StartAutoscroll { .. })));

    grid.pointer_move(PointerEvent::drag(x, 150, Modifiers::NONE));
    assert!(grid.take_requests().contains(&HostRequest::StopAutoscroll));
    grid.autoscroll_tick();
    assert_eq!(grid.scroll_position(), (0, 10));
}

#[test]
fn test_release_stops_autoscroll() {
    let mut grid = grid(50, 50, 400, 300);
    let (x, y) = center(0, 0);
    grid.pointer_down(PointerEvent::press(x, y, Modifiers::NONE));
    grid.pointer_move(PointerEvent::drag(395, y, Modifiers::NONE));
    grid.take_requests();

    grid.pointer_up(PointerEvent::release(395, y));
    assert_eq!(grid.take_requests(), vec![HostRequest::StopAutoscroll]);
    assert_eq!(grid.interaction_mode(), InteractionMode::Idle);

    let before = grid.scroll_position();
    grid.autoscroll_tick();
    assert_eq!(grid.scroll_position(), before);
}

#[test]
fn test_header_presses_leave_selection_alone() {
    let mut grid = small();
    click(&mut grid, 2, 2, Modifiers::NONE);
    grid.take_requests();

    grid.pointer_down(PointerEvent::press(350, 15, Modifiers::NONE));
    assert_eq!(grid.interaction_mode(), InteractionMode::PressedInHeaderRow);
    assert_eq!(selected(&grid), vec![CellPos::new(2, 2)]);
    assert!(grid.take_requests().contains(&HostRequest::Repaint));
    drag_to(&mut grid, 4, 4, Modifiers::NONE);
    assert_eq!(selected(&grid), vec![CellPos::new(2, 2)]);
    grid.pointer_up(PointerEvent::release(350, 15));

    grid.pointer_down(PointerEvent::press(50, 135, Modifiers::CTRL));
    assert_eq!(
        grid.interaction_mode(),
        InteractionMode::PressedInHeaderColumn
    );
    assert_eq!(selected(&grid), vec![CellPos::new(2, 2)]);
    assert!(!grid.row_selected(3));
    grid.pointer_up(PointerEvent::release(50, 135));

    grid.pointer_down(PointerEvent::press(50, 15, Modifiers::NONE));
    assert_eq!(grid.interaction_mode(), InteractionMode::PressedInCorner);
    assert_eq!(selected(&grid), vec![CellPos::new(2, 2)]);
    assert_eq!(grid.current_cell(), Some(CellPos::new(2, 2)));
}

#[test]
fn test_hover_tracks_header_under_pointer() {
    let mut grid = small();
    grid.pointer_move(PointerEvent::hover(350, 15));
    assert_eq!(
        grid.hovered_header(),
        Some(HeaderHit::ColumnHeader(CellPos::new(0, 2)))
    );
    assert_eq!(grid.take_requests(), vec![HostRequest::Repaint]);

    grid.pointer_move(PointerEvent::hover(360, 20));
    assert!(grid.take_requests().is_empty());

    grid.pointer_move(PointerEvent::hover(50, 75));
    assert_eq!(
        grid.hovered_header(),
        Some(HeaderHit::RowHeader(CellPos::new(1, 0)))
    );

    grid.pointer_move(PointerEvent::hover(350, 105));
    assert_eq!(grid.hovered_header(), None);
}

#[test]
fn test_structure_change_forgets_anchor() {
    let mut grid = small();
    click(&mut grid, 1, 1, Modifiers::NONE);
    assert_eq!(grid.shift_anchor(), Some(CellPos::new(1, 1)));
    grid.insert_row(0);
    assert_eq!(grid.shift_anchor(), None);
    assert_eq!(grid.current_cell(), Some(CellPos::new(2, 1)));
}

#[test]
fn test_press_outside_everything_is_ignored() {
    let mut grid = grid(2, 2, 700, 200);
    grid.pointer_down(PointerEvent::press(650, 150, Modifiers::NONE));
    assert_eq!(grid.interaction_mode(), InteractionMode::Idle);
    assert!(grid.take_requests().is_empty());
}
