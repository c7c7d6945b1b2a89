//! Frame painting: walks the visible range, resolves colors, fonts and text
//! for each cell, then hands the cell to the active paint routine.
//!
//! Paint order is main cells, column-header band, row-header band, corner,
//! so the pinned bands always cover scrolled content.

use std::borrow::Cow;

use serde::Serialize;

use super::backend::{Canvas, FontSpec, Rect, TextAlign};
use super::colors::Rgb;
use super::styles::{CellColors, StyleRegistry};
use crate::layout::{GridGeometry, HeaderHit, Viewport, VisibleRange};
use crate::types::{CellPos, SelectionModel, TextMatrix};

/// Cells no taller than this are painted with the cell routine even in headers.
const MIN_HEADER_ROUTINE_HEIGHT: i32 = 8;

/// Padding between a cell edge and its text.
const TEXT_PADDING: i32 = 4;

/// Which part of the grid a painted cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawComponent {
    Cell,
    ColumnHeader,
    RowHeader,
    Corner,
}

/// Everything resolved for one cell before it reaches a routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellPaint<'a> {
    pub component: DrawComponent,
    pub rect: Rect,
    pub colors: CellColors,
    pub text: Cow<'a, str>,
    pub foreground: Rgb,
    pub font: FontSpec,
    pub align: TextAlign,
}

/// Borrowed grid state needed to paint one frame.
#[derive(Debug, Clone, Copy)]
pub struct PaintContext<'a> {
    pub geometry: &'a GridGeometry,
    pub viewport: &'a Viewport,
    pub visible: &'a VisibleRange,
    pub cells: &'a TextMatrix,
    /// Text of the band above the grid, indexed (header row, column)
    pub column_headers: &'a TextMatrix,
    /// Text of the band left of the grid, indexed (row, header column)
    pub row_headers: &'a TextMatrix,
    pub selection: &'a SelectionModel,
    pub styles: &'a StyleRegistry,
    pub font: FontSpec,
    pub hovered: Option<HeaderHit>,
    pub pressed: Option<HeaderHit>,
}

impl<'a> PaintContext<'a> {
    fn highlighted(&self, hit: HeaderHit) -> bool {
        self.hovered == Some(hit) || self.pressed == Some(hit)
    }

    /// Resolve colors, text, font and alignment for one cell.
    ///
    /// `pos` is interpreted per component: (row, column) for body cells,
    /// (header row, column) for column headers and (row, header column) for
    /// row headers. It is ignored for the corner.
    pub fn resolve(&self, component: DrawComponent, pos: CellPos, rect: Rect) -> CellPaint<'a> {
        let palette = self.styles.palette();
        match component {
            DrawComponent::Cell => {
                let selected = self.selection.is_selected(pos);
                let current = self.selection.current() == Some(pos);
                CellPaint {
                    component,
                    rect,
                    colors: CellColors {
                        grid: palette.grid,
                        background: if selected {
                            palette.selection
                        } else {
                            palette.background
                        },
                        border: current.then_some(palette.cell_border),
                    },
                    text: Cow::Borrowed(self.cells.get(pos.row, pos.column)),
                    foreground: if selected {
                        palette.selection_text
                    } else {
                        palette.foreground
                    },
                    font: self.font,
                    align: TextAlign::Left,
                }
            }
            DrawComponent::ColumnHeader => {
                let band = palette.column_header;
                let highlighted = self.highlighted(HeaderHit::ColumnHeader(pos));
                CellPaint {
                    component,
                    rect,
                    colors: CellColors {
                        grid: band.grid,
                        background: band.background,
                        border: highlighted.then_some(band.cell_border),
                    },
                    text: Cow::Borrowed(self.column_headers.get(pos.row, pos.column)),
                    foreground: band.foreground,
                    font: if self.selection.column_selected(pos.column) {
                        self.font.emphasized()
                    } else {
                        self.font
                    },
                    align: TextAlign::Center,
                }
            }
            DrawComponent::RowHeader => {
                let band = palette.row_header;
                let highlighted = self.highlighted(HeaderHit::RowHeader(pos));
                let text = match self.row_headers.get(pos.row, pos.column) {
                    "" => Cow::Owned((pos.row + 1).to_string()),
                    text => Cow::Borrowed(text),
                };
                CellPaint {
                    component,
                    rect,
                    colors: CellColors {
                        grid: band.grid,
                        background: band.background,
                        border: highlighted.then_some(band.cell_border),
                    },
                    text,
                    foreground: band.foreground,
                    font: if self.selection.row_selected(pos.row) {
                        self.font.emphasized()
                    } else {
                        self.font
                    },
                    align: TextAlign::Left,
                }
            }
            DrawComponent::Corner => {
                let band = palette.column_header;
                CellPaint {
                    component,
                    rect,
                    colors: CellColors {
                        grid: band.grid,
                        background: band.background,
                        border: (self.hovered == Some(HeaderHit::Corner))
                            .then_some(band.cell_border),
                    },
                    text: Cow::Borrowed(""),
                    foreground: band.foreground,
                    font: self.font,
                    align: TextAlign::Left,
                }
            }
        }
    }

    /// Paint every visible cell of every region.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        let geometry = self.geometry;
        let rows = geometry.rows();
        let columns = geometry.columns();
        let header_rows = geometry.header_rows();
        let header_columns = geometry.header_columns();
        let mut painted = 0usize;

        if let (Some(row_span), Some(column_span)) = (self.visible.rows, self.visible.columns) {
            for row in row_span.iter().filter(|&r| rows.is_visible(r)) {
                let y = self.viewport.to_screen_y(rows.offset(row));
                for column in column_span.iter().filter(|&c| columns.is_visible(c)) {
                    let x = self.viewport.to_screen_x(columns.offset(column));
                    let rect = Rect::new(x, y, columns.size(column), rows.size(row));
                    let cell = self.resolve(DrawComponent::Cell, CellPos::new(row, column), rect);
                    paint_cell(canvas, self.styles, &cell);
                    painted += 1;
                }
            }
        }

        if let (Some(far), Some(column_span)) = (self.visible.header_rows, self.visible.columns) {
            for header_row in (0..=far).filter(|&r| header_rows.is_visible(r)) {
                let y = header_rows.offset(header_row);
                for column in column_span.iter().filter(|&c| columns.is_visible(c)) {
                    let x = self.viewport.to_screen_x(columns.offset(column));
                    let rect = Rect::new(x, y, columns.size(column), header_rows.size(header_row));
                    let pos = CellPos::new(header_row, column);
                    let cell = self.resolve(DrawComponent::ColumnHeader, pos, rect);
                    paint_cell(canvas, self.styles, &cell);
                    painted += 1;
                }
            }
        }

        if let (Some(row_span), Some(far)) = (self.visible.rows, self.visible.header_columns) {
            for row in row_span.iter().filter(|&r| rows.is_visible(r)) {
                let y = self.viewport.to_screen_y(rows.offset(row));
                for header_column in (0..=far).filter(|&c| header_columns.is_visible(c)) {
                    let x = header_columns.offset(header_column);
                    let rect = Rect::new(x, y, header_columns.size(header_column), rows.size(row));
                    let pos = CellPos::new(row, header_column);
                    let cell = self.resolve(DrawComponent::RowHeader, pos, rect);
                    paint_cell(canvas, self.styles, &cell);
                    painted += 1;
                }
            }
        }

        if self.visible.header_rows.is_some()
            && self.visible.header_columns.is_some()
            && geometry.header_width() > 0
            && geometry.header_height() > 0
        {
            let rect = Rect::new(0, 0, geometry.header_width(), geometry.header_height());
            let cell = self.resolve(DrawComponent::Corner, CellPos::default(), rect);
            paint_cell(canvas, self.styles, &cell);
            painted += 1;
        }

        tracing::trace!(target: "fastgrid::render", cells = painted, "frame painted");
    }
}

/// Run the routine for one resolved cell, then draw its text.
///
/// Body cells and very short header cells use the cell routine; other
/// header cells use the header routine.
pub fn paint_cell(canvas: &mut dyn Canvas, styles: &StyleRegistry, cell: &CellPaint<'_>) {
    let rect = cell.rect;
    let routine =
        if cell.component == DrawComponent::Cell || rect.height <= MIN_HEADER_ROUTINE_HEIGHT {
            styles.cell_routine()
        } else {
            styles.header_routine()
        };
    routine.paint(canvas, rect, cell.colors);

    if rect.width > 2 * TEXT_PADDING && rect.height > 2 * TEXT_PADDING && !cell.text.is_empty() {
        canvas.draw_text(
            rect.inset(TEXT_PADDING),
            &cell.text,
            cell.foreground,
            cell.font,
            cell.align,
        );
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::layout::AxisKind;
    use crate::render::backend::{DrawOp, RecordingCanvas};
    use crate::render::Style;

    const UNIT: Rect = Rect::new(0, 0, 10, 10);

    struct Fixture {
        geometry: GridGeometry,
        viewport: Viewport,
        visible: VisibleRange,
        cells: TextMatrix,
        column_headers: TextMatrix,
        row_headers: TextMatrix,
        selection: SelectionModel,
        styles: StyleRegistry,
    }

    impl Fixture {
        fn new(rows: usize, columns: usize) -> Self {
            let mut geometry = GridGeometry::new();
            let mut cells = TextMatrix::new();
            let mut column_headers = TextMatrix::new();
            let mut row_headers = TextMatrix::new();
            let mut selection = SelectionModel::new();
            geometry.insert(AxisKind::HeaderRows, 0);
            geometry.insert(AxisKind::HeaderColumns, 0);
            column_headers.insert_row(0);
            row_headers.insert_column(0);
            for r in 0..rows {
                geometry.insert(AxisKind::Rows, r);
                cells.insert_row(r);
                row_headers.insert_row(r);
                selection.insert_row(r);
            }
            for c in 0..columns {
                geometry.insert(AxisKind::Columns, c);
                cells.insert_column(c);
                column_headers.insert_column(c);
                selection.insert_column(c);
            }
            let viewport = Viewport::new(400, 300);
            let visible = VisibleRange::compute(&geometry, &viewport);
            Self {
                geometry,
                viewport,
                visible,
                cells,
                column_headers,
                row_headers,
                selection,
                styles: StyleRegistry::new(Style::Simple),
            }
        }

        fn context(&self) -> PaintContext<'_> {
            PaintContext {
                geometry: &self.geometry,
                viewport: &self.viewport,
                visible: &self.visible,
                cells: &self.cells,
                column_headers: &self.column_headers,
                row_headers: &self.row_headers,
                selection: &self.selection,
                styles: &self.styles,
                font: FontSpec::default(),
                hovered: None,
                pressed: None,
            }
        }
    }

    #[test]
    fn test_selected_cell_uses_selection_colors() {
        let mut fx = Fixture::new(3, 3);
        fx.selection.set_selected(CellPos::new(1, 1), true);
        fx.selection.set_current(Some(CellPos::new(1, 1)), true);
        let ctx = fx.context();
        let cell = ctx.resolve(DrawComponent::Cell, CellPos::new(1, 1), UNIT);
        let palette = Style::Simple.palette();
        assert_eq!(cell.colors.background, palette.selection);
        assert_eq!(cell.foreground, palette.selection_text);
        assert_eq!(cell.colors.border, Some(palette.cell_border));

        let other = ctx.resolve(DrawComponent::Cell, CellPos::new(0, 0), UNIT);
        assert_eq!(other.colors.background, palette.background);
        assert_eq!(other.colors.border, None);
    }

    #[test]
    fn test_row_header_defaults_to_row_number() {
        let mut fx = Fixture::new(3, 3);
        fx.row_headers.set(1, 0, "Second");
        let ctx = fx.context();
        let numbered = ctx.resolve(DrawComponent::RowHeader, CellPos::new(2, 0), UNIT);
        assert_eq!(numbered.text, "3");
        let named = ctx.resolve(DrawComponent::RowHeader, CellPos::new(1, 0), UNIT);
        assert_eq!(named.text, "Second");
    }

    #[test]
    fn test_selected_column_header_is_emphasized() {
        let mut fx = Fixture::new(3, 3);
        fx.selection.select_column(2);
        let ctx = fx.context();
        let header = ctx.resolve(DrawComponent::ColumnHeader, CellPos::new(0, 2), UNIT);
        assert!(header.font.bold);
        assert_eq!(header.align, TextAlign::Center);
        let plain = ctx.resolve(DrawComponent::ColumnHeader, CellPos::new(0, 1), UNIT);
        assert!(!plain.font.bold);
    }

    #[test]
    fn test_hovered_header_gets_border() {
        let fx = Fixture::new(3, 3);
        let mut ctx = fx.context();
        ctx.hovered = Some(HeaderHit::ColumnHeader(CellPos::new(0, 1)));
        let header = ctx.resolve(DrawComponent::ColumnHeader, CellPos::new(0, 1), UNIT);
        assert_eq!(
            header.colors.border,
            Some(fx.styles.palette().column_header.cell_border)
        );
    }

    #[test]
    fn test_paint_covers_all_regions() {
        let mut fx = Fixture::new(2, 2);
        fx.cells.set(0, 0, "a");
        fx.column_headers.set(0, 1, "B");
        let mut canvas = RecordingCanvas::new();
        fx.context().paint(&mut canvas);

        let texts: Vec<_> = canvas.texts().collect();
        assert_eq!(texts, vec!["a", "B", "1", "2"]);

        // Last op is the corner: fill then outline at the origin.
        let corner = Rect::new(0, 0, 100, 30);
        assert!(canvas.ops.contains(&DrawOp::StrokeRect {
            rect: corner,
            color: fx.styles.palette().column_header.grid,
            style: crate::render::LineStyle::Solid,
        }));
    }

    #[test]
    fn test_paint_skips_hidden_lines_and_scrolls() {
        let mut fx = Fixture::new(3, 3);
        fx.geometry.set_visible(AxisKind::Columns, 0, false);
        fx.cells.set(0, 1, "x");
        fx.viewport.scroll_y = 10;
        fx.visible = VisibleRange::compute(&fx.geometry, &fx.viewport);
        let mut canvas = RecordingCanvas::new();
        fx.context().paint(&mut canvas);

        let text_rect = canvas.ops.iter().find_map(|op| match op {
            DrawOp::Text { rect, text, .. } if text == "x" => Some(*rect),
            _ => None,
        });
        // Column 1 now starts right after the row header; row 0 starts at 30 - 10.
        assert_eq!(text_rect, Some(Rect::new(104, 24, 92, 22)));
    }

    #[test]
    fn test_short_header_uses_cell_routine() {
        let styles = StyleRegistry::new(Style::Win7);
        let cell = CellPaint {
            component: DrawComponent::ColumnHeader,
            rect: Rect::new(0, 0, 50, 8),
            colors: CellColors {
                grid: Rgb::BLACK,
                background: Rgb::WHITE,
                border: None,
            },
            text: Cow::Borrowed("hidden"),
            foreground: Rgb::BLACK,
            font: FontSpec::default(),
            align: TextAlign::Center,
        };
        let mut canvas = RecordingCanvas::new();
        paint_cell(&mut canvas, &styles, &cell);
        // Plain cell routine: one fill and one outline, no text at this height.
        assert_eq!(canvas.ops.len(), 2);
    }
}
