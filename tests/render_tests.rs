//! Rendering tests
//!
//! Paints whole frames into a recording canvas and checks the draw calls
//! each style produces, plus palette and routine switching.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::rc::Rc;

use fastgrid::render::{CellColors, Fill, FontSpec, LineStyle, Rect, Rgb, TextAlign};
use fastgrid::{
    Canvas, CellPos, DrawOp, FastGrid, GridConfig, HostRequest, Palette, PointerEvent,
    RecordingCanvas, Style,
};

/// 2x2 grid with one header row and column in a 400x300 viewport.
fn grid(style: Style) -> FastGrid {
    let config = GridConfig {
        style: Some(style),
        ..GridConfig::default()
    };
    let mut grid = FastGrid::with_config(config);
    grid.resize(400, 300);
    grid.set_sizes(2, 2, 1, 1);
    grid.take_requests();
    grid
}

fn frame(grid: &mut FastGrid) -> Vec<DrawOp> {
    let mut canvas = RecordingCanvas::new();
    grid.paint(&mut canvas);
    canvas.ops
}

fn fill_at(ops: &[DrawOp], rect: Rect) -> Option<Fill> {
    ops.iter().find_map(|op| match op {
        DrawOp::FillRect { rect: r, fill } if *r == rect => Some(*fill),
        _ => None,
    })
}

fn texts(ops: &[DrawOp]) -> Vec<&str> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_simple_frame_covers_every_region() {
    let mut grid = grid(Style::Simple);
    grid.set_cell_text(1, 1, "x");
    let ops = frame(&mut grid);

    // 4 cells + 2 column headers + 2 row headers + corner, each fill + outline,
    // plus row numbers and the one cell text.
    assert_eq!(ops.len(), 9 * 2 + 3);
    assert_eq!(texts(&ops), vec!["x", "1", "2"]);

    let palette = Palette::for_style(Style::Simple);
    assert_eq!(
        fill_at(&ops, Rect::new(100, 30, 100, 30)),
        Some(Fill::solid(palette.background))
    );
    assert_eq!(
        fill_at(&ops, Rect::new(0, 0, 100, 30)),
        Some(Fill::solid(palette.column_header.background))
    );
    assert!(matches!(
        ops.last(),
        Some(DrawOp::StrokeRect { rect, .. }) if *rect == Rect::new(0, 0, 100, 30)
    ));
    assert!(!grid.needs_repaint());
}

#[test]
fn test_selection_and_current_cell() {
    let mut grid = grid(Style::Simple);
    grid.set_current_cell(Some(CellPos::new(0, 1)), false);
    grid.set_cell_text(0, 1, "sel");
    let ops = frame(&mut grid);
    let palette = Palette::for_style(Style::Simple);

    assert_eq!(
        fill_at(&ops, Rect::new(200, 30, 100, 30)),
        Some(Fill::solid(palette.selection))
    );
    assert!(ops.contains(&DrawOp::StrokeRect {
        rect: Rect::new(201, 31, 98, 28),
        color: palette.cell_border,
        style: LineStyle::Dotted,
    }));
    assert!(ops.contains(&DrawOp::Text {
        rect: Rect::new(204, 34, 92, 22),
        text: "sel".to_string(),
        color: palette.selection_text,
        font: FontSpec::default(),
        align: TextAlign::Left,
    }));
}

#[test]
fn test_selected_lines_emphasize_headers() {
    let mut grid = grid(Style::Simple);
    grid.set_column_header_text(0, 0, "A");
    grid.set_column_header_text(0, 1, "B");
    grid.set_cell_selected(1, 1, true);
    let ops = frame(&mut grid);

    let font_of = |wanted: &str| {
        ops.iter()
            .find_map(|op| match op {
                DrawOp::Text { text, font, .. } if text == wanted => Some(*font),
                _ => None,
            })
            .unwrap()
    };
    assert_eq!(font_of("A"), FontSpec::default());
    assert_eq!(font_of("B"), FontSpec::default().emphasized());
    assert_eq!(font_of("2"), FontSpec::default().emphasized());
    assert_eq!(font_of("1"), FontSpec::default());
}

#[test]
fn test_hovered_header_is_highlighted() {
    let mut grid = grid(Style::Simple);
    grid.pointer_move(PointerEvent::hover(250, 10));
    let ops = frame(&mut grid);
    let palette = Palette::for_style(Style::Simple);
    assert_eq!(
        fill_at(&ops, Rect::new(200, 0, 100, 30)),
        Some(Fill::solid(palette.column_header.cell_border))
    );
    assert_eq!(
        fill_at(&ops, Rect::new(100, 0, 100, 30)),
        Some(Fill::solid(palette.column_header.background))
    );
}

#[test]
fn test_linux_uses_gradients() {
    let mut grid = grid(Style::Linux);
    let ops = frame(&mut grid);
    let palette = Palette::for_style(Style::Linux);
    assert_eq!(
        fill_at(&ops, Rect::new(100, 30, 100, 30)),
        Some(Fill::VerticalGradient {
            top: palette.background.brighten(10),
            bottom: palette.background,
        })
    );
    assert!(ops
        .iter()
        .all(|op| !matches!(op, DrawOp::FillRect { fill: Fill::Solid { .. }, .. })));
}

#[test]
fn test_windows_styles_draw_header_lines() {
    for style in [Style::WinXp, Style::Win7] {
        let mut grid = grid(style);
        let ops = frame(&mut grid);
        assert!(
            ops.iter().any(|op| matches!(op, DrawOp::Line { .. })),
            "{style} drew no lines"
        );
    }
    let mut simple = grid(Style::Simple);
    assert!(!frame(&mut simple)
        .iter()
        .any(|op| matches!(op, DrawOp::Line { .. })));
}

#[test]
fn test_scrolled_frame_keeps_headers_pinned() {
    let mut grid = grid(Style::Simple);
    grid.set_sizes(40, 10, 1, 1);
    grid.set_scroll_position(150, 45);
    let ops = frame(&mut grid);

    // Column 1 starts at content x 200 and row 1 at content y 60.
    assert!(fill_at(&ops, Rect::new(50, 15, 100, 30)).is_some());
    // Its column header stays at the top, its row header at the left.
    assert!(fill_at(&ops, Rect::new(50, 0, 100, 30)).is_some());
    assert!(fill_at(&ops, Rect::new(0, 15, 100, 30)).is_some());
    assert!(matches!(
        ops.last(),
        Some(DrawOp::StrokeRect { rect, .. }) if *rect == Rect::new(0, 0, 100, 30)
    ));
}

#[test]
fn test_hidden_lines_are_skipped() {
    let mut grid = grid(Style::Simple);
    grid.set_column_visible(0, false);
    grid.set_row_height(1, 0);
    let ops = frame(&mut grid);
    // One cell, one column header, one row header and the corner.
    assert_eq!(
        ops.iter()
            .filter(|op| matches!(op, DrawOp::FillRect { .. }))
            .count(),
        4
    );
    assert!(fill_at(&ops, Rect::new(100, 30, 100, 30)).is_some());
}

#[test]
fn test_style_switch_resets_or_keeps_palette() {
    let mut grid = grid(Style::Simple);
    grid.set_style(Style::Win7, false);
    assert_eq!(grid.style(), Style::Win7);
    assert_eq!(*grid.palette(), Palette::for_style(Style::Win7));
    assert_eq!(grid.take_requests(), vec![HostRequest::Repaint]);

    grid.set_style(Style::Win7, false);
    assert!(grid.take_requests().is_empty());

    grid.palette_mut().selection = Rgb::new(1, 2, 3);
    grid.set_style(Style::WinXp, true);
    assert_eq!(grid.palette().selection, Rgb::new(1, 2, 3));

    grid.set_style(Style::Simple, false);
    assert_eq!(*grid.palette(), Palette::default());
}

#[test]
fn test_custom_routines_replace_style() {
    let mut grid = grid(Style::Win7);
    grid.set_cell_paint_routine(Rc::new(
        |canvas: &mut dyn Canvas, rect: Rect, colors: CellColors| {
            canvas.fill_rect(rect, Fill::solid(colors.grid));
        },
    ));
    grid.set_header_paint_routine(Rc::new(
        |_canvas: &mut dyn Canvas, _rect: Rect, _colors: CellColors| {},
    ));
    let ops = frame(&mut grid);
    let grid_color = Palette::for_style(Style::Win7).grid;
    let fills: Vec<_> = ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillRect { fill, .. } => Some(*fill),
            _ => None,
        })
        .collect();
    assert_eq!(fills, vec![Fill::solid(grid_color); 4]);
    assert_eq!(texts(&ops), vec!["1", "2"]);
}

#[test]
fn test_short_header_row_uses_cell_routine() {
    let mut grid = grid(Style::Win7);
    grid.set_header_row_height(0, 8);
    let ops = frame(&mut grid);
    let band = Palette::for_style(Style::Win7).column_header;
    assert_eq!(
        fill_at(&ops, Rect::new(100, 0, 100, 8)),
        Some(Fill::solid(band.background))
    );
}
