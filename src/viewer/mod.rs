//! `FastGrid` - the grid facade that owns every piece of state.
//!
//! This module provides the public mutation API and coordinates:
//! - Geometry updates on the four axes and the matching text/selection shape
//! - Scrollbar ranges and the visible range after every layout change
//! - Repaint and scrollbar notifications to the host, queued as [`HostRequest`]s
//! - Bulk updates that suppress intermediate recomputation
//!
//! Pointer handling lives in `events.rs` and scrolling in `scroll.rs`.

mod events;
mod scroll;

use std::rc::Rc;

use serde::Serialize;

pub use events::{
    InteractionMode, Modifiers, PointerButton, PointerButtons, PointerEvent, SelectionSnapshot,
};
use events::Interaction;

use crate::layout::{AxisKind, GridGeometry, ScrollBars, Span, Viewport, VisibleRange};
use crate::render::{Canvas, PaintContext, PaintRoutine, Palette, Style, StyleRegistry};
use crate::types::{CellPos, GridConfig, SelectionModel, TextMatrix};

/// Notification for the host, drained with [`FastGrid::take_requests`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostRequest {
    /// Draw the grid again. At most one is queued at a time.
    Repaint,
    /// Scrollbar range, page step or value changed.
    ScrollBarsChanged(ScrollBars),
    /// Call [`FastGrid::autoscroll_tick`] every `interval_ms` until stopped.
    #[serde(rename_all = "camelCase")]
    StartAutoscroll { interval_ms: u32 },
    StopAutoscroll,
}

/// Work deferred while updates are suspended.
#[derive(Debug, Clone, Copy, Default)]
struct Pending {
    layout: bool,
    repaint: bool,
}

/// A virtualized grid with row and column headers.
///
/// Every structural change patches offsets incrementally, recomputes the
/// scrollbar ranges and the visible range, and queues a repaint. Wrap bulk
/// changes in [`FastGrid::with_updates_suspended`] to do that work once.
#[derive(Debug)]
pub struct FastGrid {
    config: GridConfig,
    geometry: GridGeometry,
    cells: TextMatrix,
    /// (header row, column)
    column_headers: TextMatrix,
    /// (row, header column)
    row_headers: TextMatrix,
    selection: SelectionModel,
    viewport: Viewport,
    visible: VisibleRange,
    scroll_bars: ScrollBars,
    styles: StyleRegistry,
    interaction: Interaction,
    requests: Vec<HostRequest>,
    needs_repaint: bool,
    suspend_depth: usize,
    pending: Pending,
}

impl Default for FastGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl FastGrid {
    pub fn new() -> Self {
        Self::with_config(GridConfig::default())
    }

    pub fn with_config(config: GridConfig) -> Self {
        let mut geometry = GridGeometry::new();
        geometry.set_default_width(config.default_width);
        geometry.set_default_height(config.default_height);
        let style = config.resolved_style();
        tracing::debug!(target: "fastgrid::viewer", %style, "grid created");
        Self {
            styles: StyleRegistry::new(style),
            config,
            geometry,
            cells: TextMatrix::new(),
            column_headers: TextMatrix::new(),
            row_headers: TextMatrix::new(),
            selection: SelectionModel::new(),
            viewport: Viewport::default(),
            visible: VisibleRange::default(),
            scroll_bars: ScrollBars::default(),
            interaction: Interaction::default(),
            requests: Vec::new(),
            needs_repaint: false,
            suspend_depth: 0,
            pending: Pending::default(),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ---- Host notifications ----

    fn push_request(&mut self, request: HostRequest) {
        self.requests.push(request);
    }

    /// Queue a repaint unless one is already pending.
    pub(crate) fn request_repaint(&mut self) {
        if self.suspend_depth > 0 {
            self.pending.repaint = true;
            return;
        }
        self.needs_repaint = true;
        if !self.requests.contains(&HostRequest::Repaint) {
            self.push_request(HostRequest::Repaint);
        }
    }

    /// Drain queued host requests in the order they were raised.
    pub fn take_requests(&mut self) -> Vec<HostRequest> {
        std::mem::take(&mut self.requests)
    }

    /// True if something changed since the last [`FastGrid::paint`].
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Total sizes changed: refresh scrollbars and the visible range, then repaint.
    fn layout_changed(&mut self) {
        if self.suspend_depth > 0 {
            self.pending.layout = true;
            return;
        }
        self.update_scroll_bars();
        self.update_visible_range();
        self.request_repaint();
    }

    /// Line counts changed: also drop the drag extension state.
    fn structure_changed(&mut self) {
        self.interaction.reset_extension();
        self.interaction.last = None;
        self.interaction.hovered = None;
        self.interaction.pressed_header = None;
        self.layout_changed();
    }

    /// Run `f` with layout and repaint work deferred, then flush once.
    ///
    /// Calls nest; only the outermost one flushes.
    pub fn with_updates_suspended<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.suspend_depth += 1;
        let result = f(self);
        self.suspend_depth -= 1;
        if self.suspend_depth == 0 {
            let pending = std::mem::take(&mut self.pending);
            if pending.layout {
                tracing::debug!(target: "fastgrid::viewer", "bulk update flushed");
                self.layout_changed();
            } else if pending.repaint {
                self.request_repaint();
            }
        }
        result
    }

    // ---- Drawing ----

    /// Paint the visible part of the grid.
    pub fn paint(&mut self, canvas: &mut dyn Canvas) {
        self.paint_context().paint(canvas);
        self.needs_repaint = false;
    }

    /// Borrowed view of everything the painter reads.
    pub fn paint_context(&self) -> PaintContext<'_> {
        PaintContext {
            geometry: &self.geometry,
            viewport: &self.viewport,
            visible: &self.visible,
            cells: &self.cells,
            column_headers: &self.column_headers,
            row_headers: &self.row_headers,
            selection: &self.selection,
            styles: &self.styles,
            font: self.config.font,
            hovered: self.interaction.hovered,
            pressed: self.interaction.pressed_header,
        }
    }

    // ---- Rows and columns ----

    pub fn row_count(&self) -> usize {
        self.geometry.count(AxisKind::Rows)
    }

    pub fn column_count(&self) -> usize {
        self.geometry.count(AxisKind::Columns)
    }

    /// Rows of the column-header band.
    pub fn header_row_count(&self) -> usize {
        self.geometry.count(AxisKind::HeaderRows)
    }

    /// Columns of the row-header band.
    pub fn header_column_count(&self) -> usize {
        self.geometry.count(AxisKind::HeaderColumns)
    }

    /// Insert a default-height row before `row` (`row == row_count()` appends).
    pub fn insert_row(&mut self, row: usize) {
        self.geometry.insert(AxisKind::Rows, row);
        self.cells.insert_row(row);
        self.row_headers.insert_row(row);
        self.selection.insert_row(row);
        self.structure_changed();
    }

    pub fn add_row(&mut self) {
        self.insert_row(self.row_count());
    }

    pub fn delete_row(&mut self, row: usize) {
        self.geometry.remove(AxisKind::Rows, row);
        self.cells.remove_row(row);
        self.row_headers.remove_row(row);
        self.selection.remove_row(row);
        self.structure_changed();
    }

    pub fn insert_column(&mut self, column: usize) {
        self.geometry.insert(AxisKind::Columns, column);
        self.cells.insert_column(column);
        self.column_headers.insert_column(column);
        self.selection.insert_column(column);
        self.structure_changed();
    }

    pub fn add_column(&mut self) {
        self.insert_column(self.column_count());
    }

    pub fn delete_column(&mut self, column: usize) {
        self.geometry.remove(AxisKind::Columns, column);
        self.cells.remove_column(column);
        self.column_headers.remove_column(column);
        self.selection.remove_column(column);
        self.structure_changed();
    }

    /// Insert a row into the column-header band; the main grid moves down.
    pub fn insert_header_row(&mut self, header_row: usize) {
        self.geometry.insert(AxisKind::HeaderRows, header_row);
        self.column_headers.insert_row(header_row);
        self.structure_changed();
    }

    pub fn add_header_row(&mut self) {
        self.insert_header_row(self.header_row_count());
    }

    pub fn delete_header_row(&mut self, header_row: usize) {
        self.geometry.remove(AxisKind::HeaderRows, header_row);
        self.column_headers.remove_row(header_row);
        self.structure_changed();
    }

    /// Insert a column into the row-header band; the main grid moves right.
    pub fn insert_header_column(&mut self, header_column: usize) {
        self.geometry.insert(AxisKind::HeaderColumns, header_column);
        self.row_headers.insert_column(header_column);
        self.structure_changed();
    }

    pub fn add_header_column(&mut self) {
        self.insert_header_column(self.header_column_count());
    }

    pub fn delete_header_column(&mut self, header_column: usize) {
        self.geometry.remove(AxisKind::HeaderColumns, header_column);
        self.row_headers.remove_column(header_column);
        self.structure_changed();
    }

    fn set_count(&mut self, kind: AxisKind, count: usize) {
        let current = self.geometry.count(kind);
        if current == count {
            return;
        }
        tracing::debug!(
            target: "fastgrid::viewer",
            ?kind,
            from = current,
            to = count,
            "resizing line count"
        );
        self.with_updates_suspended(|grid| {
            let (insert, delete): (fn(&mut Self, usize), fn(&mut Self, usize)) = match kind {
                AxisKind::Rows => (Self::insert_row, Self::delete_row),
                AxisKind::Columns => (Self::insert_column, Self::delete_column),
                AxisKind::HeaderRows => (Self::insert_header_row, Self::delete_header_row),
                AxisKind::HeaderColumns => {
                    (Self::insert_header_column, Self::delete_header_column)
                }
            };
            loop {
                let len = grid.geometry.count(kind);
                if len < count {
                    insert(grid, len);
                } else if len > count {
                    delete(grid, len - 1);
                } else {
                    break;
                }
            }
        });
    }

    /// Grow or shrink the main rows, adding or removing at the end.
    pub fn set_row_count(&mut self, count: usize) {
        self.set_count(AxisKind::Rows, count);
    }

    pub fn set_column_count(&mut self, count: usize) {
        self.set_count(AxisKind::Columns, count);
    }

    pub fn set_header_row_count(&mut self, count: usize) {
        self.set_count(AxisKind::HeaderRows, count);
    }

    pub fn set_header_column_count(&mut self, count: usize) {
        self.set_count(AxisKind::HeaderColumns, count);
    }

    /// Set all four counts with a single flush.
    pub fn set_sizes(
        &mut self,
        rows: usize,
        columns: usize,
        header_rows: usize,
        header_columns: usize,
    ) {
        self.with_updates_suspended(|grid| {
            grid.set_row_count(rows);
            grid.set_column_count(columns);
            grid.set_header_row_count(header_rows);
            grid.set_header_column_count(header_columns);
        });
    }

    // ---- Sizes and visibility ----

    fn set_line_size(&mut self, kind: AxisKind, index: usize, size: u32) {
        // A hidden line only records the new size, so nothing moves.
        if self.geometry.set_size(kind, index, size) != 0 {
            self.layout_changed();
        }
    }

    fn set_line_visible(&mut self, kind: AxisKind, index: usize, visible: bool) {
        if self.geometry.set_visible(kind, index, visible) != 0 {
            self.layout_changed();
        }
    }

    /// Width of new columns. 0 becomes 1; oversized values are clamped.
    pub fn set_default_width(&mut self, width: u32) {
        self.geometry.set_default_width(width);
    }

    /// Height of new rows. 0 becomes 1; oversized values are clamped.
    pub fn set_default_height(&mut self, height: u32) {
        self.geometry.set_default_height(height);
    }

    pub fn default_width(&self) -> i32 {
        self.geometry.default_width()
    }

    pub fn default_height(&self) -> i32 {
        self.geometry.default_height()
    }

    /// Resize a column. Setting 0 hides it and remembers its width.
    pub fn set_column_width(&mut self, column: usize, width: u32) {
        self.set_line_size(AxisKind::Columns, column, width);
    }

    /// Resize a row. Setting 0 hides it and remembers its height.
    pub fn set_row_height(&mut self, row: usize, height: u32) {
        self.set_line_size(AxisKind::Rows, row, height);
    }

    pub fn set_header_row_height(&mut self, header_row: usize, height: u32) {
        self.set_line_size(AxisKind::HeaderRows, header_row, height);
    }

    pub fn set_header_column_width(&mut self, header_column: usize, width: u32) {
        self.set_line_size(AxisKind::HeaderColumns, header_column, width);
    }

    /// Width of a column, remembered even while it is hidden.
    pub fn column_width(&self, column: usize) -> i32 {
        self.geometry.columns().magnitude(column)
    }

    pub fn row_height(&self, row: usize) -> i32 {
        self.geometry.rows().magnitude(row)
    }

    pub fn header_row_height(&self, header_row: usize) -> i32 {
        self.geometry.header_rows().magnitude(header_row)
    }

    pub fn header_column_width(&self, header_column: usize) -> i32 {
        self.geometry.header_columns().magnitude(header_column)
    }

    pub fn set_column_visible(&mut self, column: usize, visible: bool) {
        self.set_line_visible(AxisKind::Columns, column, visible);
    }

    pub fn set_row_visible(&mut self, row: usize, visible: bool) {
        self.set_line_visible(AxisKind::Rows, row, visible);
    }

    pub fn set_header_row_visible(&mut self, header_row: usize, visible: bool) {
        self.set_line_visible(AxisKind::HeaderRows, header_row, visible);
    }

    pub fn set_header_column_visible(&mut self, header_column: usize, visible: bool) {
        self.set_line_visible(AxisKind::HeaderColumns, header_column, visible);
    }

    pub fn column_visible(&self, column: usize) -> bool {
        self.geometry.columns().is_visible(column)
    }

    pub fn row_visible(&self, row: usize) -> bool {
        self.geometry.rows().is_visible(row)
    }

    pub fn header_row_visible(&self, header_row: usize) -> bool {
        self.geometry.header_rows().is_visible(header_row)
    }

    pub fn header_column_visible(&self, header_column: usize) -> bool {
        self.geometry.header_columns().is_visible(header_column)
    }

    /// Content width including the row-header band.
    pub fn total_width(&self) -> i32 {
        self.geometry.total_width()
    }

    /// Content height including the column-header band.
    pub fn total_height(&self) -> i32 {
        self.geometry.total_height()
    }

    pub fn header_rows_total_height(&self) -> i32 {
        self.geometry.header_height()
    }

    pub fn header_columns_total_width(&self) -> i32 {
        self.geometry.header_width()
    }

    // ---- Visible range ----

    pub fn visible_range(&self) -> VisibleRange {
        self.visible
    }

    /// Visible rows of the column-header band.
    pub fn column_header_visible_range(&self) -> Option<Span> {
        self.visible.header_rows.map(|far| Span::new(0, far))
    }

    /// Visible columns of the row-header band.
    pub fn row_header_visible_range(&self) -> Option<Span> {
        self.visible.header_columns.map(|far| Span::new(0, far))
    }

    // ---- Text ----

    pub fn cell_text(&self, row: usize, column: usize) -> &str {
        self.cells.get(row, column)
    }

    pub fn set_cell_text(&mut self, row: usize, column: usize, text: impl Into<String>) {
        self.cells.set(row, column, text);
        self.request_repaint();
    }

    pub fn column_header_text(&self, header_row: usize, column: usize) -> &str {
        self.column_headers.get(header_row, column)
    }

    pub fn set_column_header_text(
        &mut self,
        header_row: usize,
        column: usize,
        text: impl Into<String>,
    ) {
        self.column_headers.set(header_row, column, text);
        self.request_repaint();
    }

    /// Put the same text in every header row above `column`.
    pub fn set_column_header_text_all_rows(&mut self, column: usize, text: impl Into<String>) {
        let text = text.into();
        for header_row in 0..self.header_row_count() {
            self.column_headers.set(header_row, column, text.clone());
        }
        self.request_repaint();
    }

    pub fn row_header_text(&self, row: usize, header_column: usize) -> &str {
        self.row_headers.get(row, header_column)
    }

    pub fn set_row_header_text(
        &mut self,
        row: usize,
        header_column: usize,
        text: impl Into<String>,
    ) {
        self.row_headers.set(row, header_column, text);
        self.request_repaint();
    }

    /// Put the same text in every header column left of `row`.
    pub fn set_row_header_text_all_columns(&mut self, row: usize, text: impl Into<String>) {
        let text = text.into();
        for header_column in 0..self.header_column_count() {
            self.row_headers.set(row, header_column, text.clone());
        }
        self.request_repaint();
    }

    // ---- Selection ----

    pub fn cell_selected(&self, row: usize, column: usize) -> bool {
        self.selection.is_selected(CellPos::new(row, column))
    }

    pub fn set_cell_selected(&mut self, row: usize, column: usize, selected: bool) {
        if self
            .selection
            .set_selected(CellPos::new(row, column), selected)
        {
            self.request_repaint();
        }
    }

    /// Selected cells in the order they were selected.
    pub fn current_selection(&self) -> &[CellPos] {
        self.selection.selected()
    }

    pub fn row_selected(&self, row: usize) -> bool {
        self.selection.row_selected(row)
    }

    pub fn column_selected(&self, column: usize) -> bool {
        self.selection.column_selected(column)
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn select_all(&mut self) {
        self.selection.select_all();
        self.request_repaint();
    }

    pub fn unselect_all(&mut self) {
        self.selection.unselect_all();
        self.request_repaint();
    }

    pub fn select_row(&mut self, row: usize) {
        self.selection.select_row(row);
        self.request_repaint();
    }

    pub fn unselect_row(&mut self, row: usize) {
        self.selection.unselect_row(row);
        self.request_repaint();
    }

    pub fn select_column(&mut self, column: usize) {
        self.selection.select_column(column);
        self.request_repaint();
    }

    pub fn unselect_column(&mut self, column: usize) {
        self.selection.unselect_column(column);
        self.request_repaint();
    }

    pub fn current_cell(&self) -> Option<CellPos> {
        self.selection.current()
    }

    /// Move the current cell; out-of-range targets clear it.
    ///
    /// Without `keep_selection` the selection collapses to the new current cell.
    pub fn set_current_cell(&mut self, cell: Option<CellPos>, keep_selection: bool) {
        if self.selection.set_current(cell, keep_selection) {
            self.request_repaint();
        }
    }

    /// Move the current cell to `row`, keeping its column.
    pub fn set_current_row(&mut self, row: usize, keep_selection: bool) {
        let target = self
            .current_cell()
            .map(|cell| CellPos::new(row, cell.column));
        self.set_current_cell(target, keep_selection);
    }

    /// Move the current cell to `column`, keeping its row.
    pub fn set_current_column(&mut self, column: usize, keep_selection: bool) {
        let target = self
            .current_cell()
            .map(|cell| CellPos::new(cell.row, column));
        self.set_current_cell(target, keep_selection);
    }

    // ---- Styles ----

    pub fn style(&self) -> Style {
        self.styles.style()
    }

    /// Switch style. Unless `keep_colors` is set the palette resets to the
    /// style's defaults.
    pub fn set_style(&mut self, style: Style, keep_colors: bool) {
        if self.styles.set_style(style, keep_colors) {
            self.request_repaint();
        }
    }

    pub fn palette(&self) -> &Palette {
        self.styles.palette()
    }

    /// Mutable palette access; a repaint is queued.
    pub fn palette_mut(&mut self) -> &mut Palette {
        self.request_repaint();
        self.styles.palette_mut()
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.styles.set_palette(palette);
        self.request_repaint();
    }

    /// Replace the routine that paints body cells.
    pub fn set_cell_paint_routine(&mut self, routine: Rc<dyn PaintRoutine>) {
        self.styles.set_cell_routine(routine);
        self.request_repaint();
    }

    /// Replace the routine that paints header cells.
    pub fn set_header_paint_routine(&mut self, routine: Rc<dyn PaintRoutine>) {
        self.styles.set_header_routine(routine);
        self.request_repaint();
    }

    // ---- Reset ----

    /// Drop every line, text, selection and pointer state. Defaults and style are kept.
    pub fn clear(&mut self) {
        self.geometry.clear();
        self.cells.clear();
        self.column_headers.clear();
        self.row_headers.clear();
        self.selection.clear();
        let armed = self.interaction.autoscroll_armed;
        self.interaction = Interaction::default();
        if armed {
            self.push_request(HostRequest::StopAutoscroll);
        }
        self.viewport.scroll_x = 0;
        self.viewport.scroll_y = 0;
        tracing::debug!(target: "fastgrid::viewer", "grid cleared");
        self.reset_visible_range();
        self.layout_changed();
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

    #[test]
    fn test_bulk_update_flushes_once() {
        let mut grid = FastGrid::new();
        grid.resize(400, 300);
        grid.take_requests();

        grid.set_sizes(50, 10, 1, 1);
        let requests = grid.take_requests();
        let repaints = requests
            .iter()
            .filter(|r| **r == HostRequest::Repaint)
            .count();
        let bar_updates = requests
            .iter()
            .filter(|r| matches!(r, HostRequest::ScrollBarsChanged(_)))
            .count();
        assert_eq!(repaints, 1);
        assert_eq!(bar_updates, 1);
        assert_eq!(grid.row_count(), 50);
        assert!(grid.geometry().is_consistent());
    }

    #[test]
    fn test_repaint_is_coalesced() {
        let mut grid = FastGrid::new();
        grid.set_sizes(3, 3, 0, 0);
        grid.take_requests();
        grid.set_cell_text(0, 0, "a");
        grid.set_cell_text(1, 1, "b");
        assert_eq!(grid.take_requests(), vec![HostRequest::Repaint]);
        assert!(grid.needs_repaint());
    }

    #[test]
    fn test_text_follows_structure() {
        let mut grid = FastGrid::new();
        grid.set_sizes(2, 2, 1, 1);
        grid.set_cell_text(1, 1, "x");
        grid.set_row_header_text(1, 0, "second");
        grid.insert_row(0);
        assert_eq!(grid.cell_text(2, 1), "x");
        assert_eq!(grid.row_header_text(2, 0), "second");
        grid.delete_column(0);
        assert_eq!(grid.cell_text(2, 0), "x");
        assert_eq!(grid.column_count(), 1);
    }

    #[test]
    fn test_header_text_fill_helpers() {
        let mut grid = FastGrid::new();
        grid.set_sizes(2, 2, 2, 3);
        grid.set_column_header_text_all_rows(1, "B");
        assert_eq!(grid.column_header_text(0, 1), "B");
        assert_eq!(grid.column_header_text(1, 1), "B");
        assert_eq!(grid.column_header_text(1, 0), "");

        grid.set_row_header_text_all_columns(0, "r");
        assert_eq!(grid.row_header_text(0, 2), "r");
    }

    #[test]
    fn test_current_row_and_column_keep_other_coordinate() {
        let mut grid = FastGrid::new();
        grid.set_sizes(5, 5, 0, 0);
        grid.set_current_row(2, false);
        assert_eq!(grid.current_cell(), None);

        grid.set_current_cell(Some(CellPos::new(1, 3)), false);
        grid.set_current_row(4, false);
        assert_eq!(grid.current_cell(), Some(CellPos::new(4, 3)));
        grid.set_current_column(0, true);
        assert_eq!(grid.current_cell(), Some(CellPos::new(4, 0)));
        assert_eq!(grid.current_selection(), &[CellPos::new(4, 3)]);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut grid = FastGrid::new();
        grid.resize(400, 300);
        grid.set_sizes(5, 5, 1, 1);
        grid.select_all();
        grid.set_current_cell(Some(CellPos::new(1, 1)), true);
        grid.clear();
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.header_row_count(), 0);
        assert!(grid.current_selection().is_empty());
        assert_eq!(grid.current_cell(), None);
        assert_eq!(grid.shift_anchor(), None);
        assert_eq!(grid.visible_range(), VisibleRange::default());
        assert_eq!(grid.total_width(), 0);
    }

    #[test]
    fn test_set_style_same_style_is_noop() {
        let mut grid = FastGrid::with_config(GridConfig {
            style: Some(Style::Simple),
            ..GridConfig::default()
        });
        grid.take_requests();
        grid.set_style(Style::Simple, false);
        assert!(grid.take_requests().is_empty());
        grid.set_style(Style::WinXp, false);
        assert_eq!(grid.take_requests(), vec![HostRequest::Repaint]);
        assert_eq!(grid.palette().grid, Style::WinXp.palette().grid);
    }
}
