//! The four coupled axes of a grid.
//!
//! Main rows and columns sit after the header band on their axis: the main
//! row axis starts where the header rows end, and the main column axis starts
//! where the header columns end. Every header mutation moves the matching
//! main axis origin, so main offsets and `total_height()` / `total_width()`
//! always include header thickness.

use serde::Serialize;

use super::axis::{Axis, MAX_LINE_SIZE};

/// Default column width in pixels.
pub const DEFAULT_COLUMN_WIDTH: i32 = 100;

/// Default row height in pixels.
pub const DEFAULT_ROW_HEIGHT: i32 = 30;

/// Which of the four axes an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    /// Rows of the main grid.
    Rows,
    /// Columns of the main grid.
    Columns,
    /// Rows of the column-header band above the grid.
    HeaderRows,
    /// Columns of the row-header band left of the grid.
    HeaderColumns,
}

impl AxisKind {
    pub const ALL: [AxisKind; 4] = [
        AxisKind::Rows,
        AxisKind::Columns,
        AxisKind::HeaderRows,
        AxisKind::HeaderColumns,
    ];

    /// True for axes that measure heights.
    pub fn is_vertical(self) -> bool {
        matches!(self, AxisKind::Rows | AxisKind::HeaderRows)
    }

    pub fn is_header(self) -> bool {
        matches!(self, AxisKind::HeaderRows | AxisKind::HeaderColumns)
    }

    fn label(self) -> &'static str {
        match self {
            AxisKind::Rows => "row",
            AxisKind::Columns => "column",
            AxisKind::HeaderRows => "header row",
            AxisKind::HeaderColumns => "header column",
        }
    }
}

/// Clamp a requested line size into the representable range.
///
/// Oversized values are logged and capped at [`MAX_LINE_SIZE`].
pub fn clamp_line_size(size: u32) -> i32 {
    match i32::try_from(size) {
        Ok(size) if size <= MAX_LINE_SIZE => size,
        _ => {
            tracing::warn!(
                target: "fastgrid::layout",
                requested = size,
                max = MAX_LINE_SIZE,
                "line size clamped"
            );
            MAX_LINE_SIZE
        }
    }
}

/// Geometry for the main grid and both header bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridGeometry {
    rows: Axis,
    columns: Axis,
    header_rows: Axis,
    header_columns: Axis,
    default_width: i32,
    default_height: i32,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::new()
    }
}

impl GridGeometry {
    pub fn new() -> Self {
        Self {
            rows: Axis::new(),
            columns: Axis::new(),
            header_rows: Axis::new(),
            header_columns: Axis::new(),
            default_width: DEFAULT_COLUMN_WIDTH,
            default_height: DEFAULT_ROW_HEIGHT,
        }
    }

    pub fn axis(&self, kind: AxisKind) -> &Axis {
        match kind {
            AxisKind::Rows => &self.rows,
            AxisKind::Columns => &self.columns,
            AxisKind::HeaderRows => &self.header_rows,
            AxisKind::HeaderColumns => &self.header_columns,
        }
    }

    fn axis_mut(&mut self, kind: AxisKind) -> &mut Axis {
        match kind {
            AxisKind::Rows => &mut self.rows,
            AxisKind::Columns => &mut self.columns,
            AxisKind::HeaderRows => &mut self.header_rows,
            AxisKind::HeaderColumns => &mut self.header_columns,
        }
    }

    pub fn rows(&self) -> &Axis {
        &self.rows
    }

    pub fn columns(&self) -> &Axis {
        &self.columns
    }

    pub fn header_rows(&self) -> &Axis {
        &self.header_rows
    }

    pub fn header_columns(&self) -> &Axis {
        &self.header_columns
    }

    pub fn count(&self, kind: AxisKind) -> usize {
        self.axis(kind).len()
    }

    pub fn default_width(&self) -> i32 {
        self.default_width
    }

    pub fn default_height(&self) -> i32 {
        self.default_height
    }

    /// Size given to newly inserted lines on `kind`.
    pub fn default_size(&self, kind: AxisKind) -> i32 {
        if kind.is_vertical() {
            self.default_height
        } else {
            self.default_width
        }
    }

    /// Set the width for new columns; 0 becomes 1 and oversized values are clamped.
    pub fn set_default_width(&mut self, width: u32) {
        self.default_width = clamp_line_size(width.max(1));
    }

    /// Set the height for new rows; 0 becomes 1 and oversized values are clamped.
    pub fn set_default_height(&mut self, height: u32) {
        self.default_height = clamp_line_size(height.max(1));
    }

    /// Thickness of the column-header band.
    pub fn header_height(&self) -> i32 {
        self.header_rows.total()
    }

    /// Thickness of the row-header band.
    pub fn header_width(&self) -> i32 {
        self.header_columns.total()
    }

    /// Full content height including the column-header band.
    pub fn total_height(&self) -> i32 {
        self.rows.extent()
    }

    /// Full content width including the row-header band.
    pub fn total_width(&self) -> i32 {
        self.columns.extent()
    }

    fn sync_origins(&mut self, kind: AxisKind) {
        match kind {
            AxisKind::HeaderRows => self.rows.set_origin(self.header_rows.total()),
            AxisKind::HeaderColumns => self.columns.set_origin(self.header_columns.total()),
            AxisKind::Rows | AxisKind::Columns => {}
        }
    }

    /// Insert a default-size line before `index` on `kind`.
    pub fn insert(&mut self, kind: AxisKind, index: usize) {
        let size = self.default_size(kind);
        self.axis_mut(kind).insert(index, size);
        self.sync_origins(kind);
        tracing::debug!(
            target: "fastgrid::layout",
            index,
            size,
            "inserted {}",
            kind.label()
        );
    }

    /// Remove the line at `index` on `kind`.
    pub fn remove(&mut self, kind: AxisKind, index: usize) {
        let size = self.axis_mut(kind).remove(index);
        self.sync_origins(kind);
        tracing::debug!(
            target: "fastgrid::layout",
            index,
            size,
            "removed {}",
            kind.label()
        );
    }

    /// Resize a line; returns the change in that axis' total.
    pub fn set_size(&mut self, kind: AxisKind, index: usize, size: u32) -> i32 {
        let size = clamp_line_size(size);
        let delta = self.axis_mut(kind).set_size(index, size);
        if delta != 0 {
            self.sync_origins(kind);
        }
        delta
    }

    /// Show or hide a line; returns the change in that axis' total.
    pub fn set_visible(&mut self, kind: AxisKind, index: usize, visible: bool) -> i32 {
        let delta = self.axis_mut(kind).set_visible(index, visible);
        if delta != 0 {
            self.sync_origins(kind);
        }
        delta
    }

    /// Drop every line on every axis. Default sizes are kept.
    pub fn clear(&mut self) {
        for kind in AxisKind::ALL {
            self.axis_mut(kind).clear();
        }
        self.rows.set_origin(0);
        self.columns.set_origin(0);
    }

    /// All four axes pass [`Axis::is_consistent`] and the main origins match
    /// the header thickness.
    pub fn is_consistent(&self) -> bool {
        AxisKind::ALL
            .iter()
            .all(|&kind| self.axis(kind).is_consistent())
            && self.rows.origin() == self.header_rows.total()
            && self.columns.origin() == self.header_columns.total()
            && self.header_rows.origin() == 0
            && self.header_columns.origin() == 0
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
    fn test_defaults() {
        let g = GridGeometry::new();
        assert_eq!(g.default_width(), 100);
        assert_eq!(g.default_height(), 30);
        assert_eq!(g.total_width(), 0);
        assert_eq!(g.total_height(), 0);
    }

    #[test]
    fn test_header_row_insert_displaces_main_rows() {
        let mut g = GridGeometry::new();
        g.insert(AxisKind::Rows, 0);
        g.insert(AxisKind::Rows, 1);
        assert_eq!(g.rows().offsets(), &[0, 30]);

        g.insert(AxisKind::HeaderRows, 0);
        assert_eq!(g.header_height(), 30);
        assert_eq!(g.rows().offsets(), &[30, 60]);
        assert_eq!(g.total_height(), 90);
        assert!(g.is_consistent());

        g.set_size(AxisKind::HeaderRows, 0, 20);
        assert_eq!(g.rows().offsets(), &[20, 50]);
        assert_eq!(g.total_height(), 80);

        g.remove(AxisKind::HeaderRows, 0);
        assert_eq!(g.rows().offsets(), &[0, 30]);
        assert!(g.is_consistent());
    }

    #[test]
    fn test_hidden_header_column_frees_space() {
        let mut g = GridGeometry::new();
        g.insert(AxisKind::Columns, 0);
        g.insert(AxisKind::HeaderColumns, 0);
        assert_eq!(g.columns().offset(0), 100);

        g.set_visible(AxisKind::HeaderColumns, 0, false);
        assert_eq!(g.columns().offset(0), 0);
        assert_eq!(g.header_width(), 0);

        g.set_visible(AxisKind::HeaderColumns, 0, true);
        assert_eq!(g.columns().offset(0), 100);
        assert!(g.is_consistent());
    }

    #[test]
    fn test_oversized_sizes_are_clamped() {
        let mut g = GridGeometry::new();
        g.insert(AxisKind::Columns, 0);
        g.set_size(AxisKind::Columns, 0, 100_000);
        assert_eq!(g.columns().size(0), MAX_LINE_SIZE);

        g.set_default_height(70_000);
        assert_eq!(g.default_height(), MAX_LINE_SIZE);
        g.set_default_width(0);
        assert_eq!(g.default_width(), 1);
    }

    #[test]
    fn test_clear_resets_origins() {
        let mut g = GridGeometry::new();
        g.insert(AxisKind::HeaderRows, 0);
        g.insert(AxisKind::Rows, 0);
        g.clear();
        assert_eq!(g.count(AxisKind::Rows), 0);
        assert_eq!(g.rows().origin(), 0);
        g.insert(AxisKind::Rows, 0);
        assert_eq!(g.rows().offset(0), 0);
        assert!(g.is_consistent());
    }
}
