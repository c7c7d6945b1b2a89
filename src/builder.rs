//! Construction helpers that lay out plain values as a ready-to-show grid.
//!
//! Every built grid has one header row, numbered `1..=n` across the columns,
//! and one header column, which falls back to row numbers when painted.

use std::fmt::Display;

use crate::delimited::{parse_delimited, Delimiter};
use crate::error::{GridError, Result};
use crate::types::GridConfig;
use crate::FastGrid;

/// Largest viewport suggested for a built grid.
const MAX_SUGGESTED_WIDTH: i32 = 800;
const MAX_SUGGESTED_HEIGHT: i32 = 600;

/// Room left around the content when suggesting a viewport.
const SUGGESTED_MARGIN: i32 = 30;

/// Direction a 1-D sequence is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// One value per row, in a single column.
    #[default]
    Column,
    /// One value per column, in a single row.
    Row,
}

/// Builds grids from values, sequences, matrices or delimited text.
#[derive(Debug, Clone, Default)]
pub struct GridBuilder {
    config: GridConfig,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GridConfig) -> Self {
        Self { config }
    }

    fn base(&self, rows: usize, columns: usize) -> FastGrid {
        let mut grid = FastGrid::with_config(self.config.clone());
        grid.set_sizes(rows, columns, 1, 1);
        grid
    }

    fn finish(mut grid: FastGrid) -> FastGrid {
        grid.with_updates_suspended(|grid| {
            for column in 0..grid.column_count() {
                grid.set_column_header_text(0, column, (column + 1).to_string());
            }
        });
        grid
    }

    /// A 1x1 grid holding `value`.
    pub fn value(&self, value: impl Display) -> FastGrid {
        let mut grid = self.base(1, 1);
        grid.set_cell_text(0, 0, value.to_string());
        Self::finish(grid)
    }

    /// A single column (or row) holding `values` in order.
    pub fn sequence<T: Display>(&self, values: &[T], orientation: Orientation) -> FastGrid {
        let mut grid = match orientation {
            Orientation::Column => self.base(values.len(), 1),
            Orientation::Row => self.base(1, values.len()),
        };
        grid.with_updates_suspended(|grid| {
            for (i, value) in values.iter().enumerate() {
                match orientation {
                    Orientation::Column => grid.set_cell_text(i, 0, value.to_string()),
                    Orientation::Row => grid.set_cell_text(0, i, value.to_string()),
                }
            }
        });
        Self::finish(grid)
    }

    /// A grid with one row per inner vector.
    ///
    /// Every row must be as long as the first one.
    pub fn matrix<T: Display>(&self, rows: &[Vec<T>]) -> Result<FastGrid> {
        let expected = rows.first().map_or(0, |row| row.len());
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(GridError::RaggedRow {
                row,
                expected,
                found,
            });
        }

        let mut grid = self.base(rows.len(), expected);
        grid.with_updates_suspended(|grid| {
            for (r, row) in rows.iter().enumerate() {
                for (c, value) in row.iter().enumerate() {
                    grid.set_cell_text(r, c, value.to_string());
                }
            }
        });
        Ok(Self::finish(grid))
    }

    /// A grid from CSV or TSV bytes; short lines are padded with empty cells.
    pub fn delimited(&self, data: &[u8], delim: Delimiter) -> Result<FastGrid> {
        let rows = parse_delimited(data, delim)?;
        tracing::debug!(target: "fastgrid::builder", rows = rows.len(), "parsed delimited input");
        self.matrix(&rows)
    }

    /// Viewport size that shows the whole grid plus a margin, capped at 800x600.
    pub fn suggested_viewport(grid: &FastGrid) -> (i32, i32) {
        (
            (grid.total_width() + SUGGESTED_MARGIN).min(MAX_SUGGESTED_WIDTH),
            (grid.total_height() + SUGGESTED_MARGIN).min(MAX_SUGGESTED_HEIGHT),
        )
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
    fn test_value() {
        let grid = GridBuilder::new().value(42);
        assert_eq!((grid.row_count(), grid.column_count()), (1, 1));
        assert_eq!(grid.cell_text(0, 0), "42");
        assert_eq!(grid.column_header_text(0, 0), "1");
        assert_eq!(grid.header_column_count(), 1);
    }

    #[test]
    fn test_sequence_orientation() {
        let builder = GridBuilder::new();
        let column = builder.sequence(&[true, false], Orientation::Column);
        assert_eq!((column.row_count(), column.column_count()), (2, 1));
        assert_eq!(column.cell_text(1, 0), "false");

        let row = builder.sequence(&[-3_i16, 7, 9], Orientation::Row);
        assert_eq!((row.row_count(), row.column_count()), (1, 3));
        assert_eq!(row.cell_text(0, 0), "-3");
        assert_eq!(row.column_header_text(0, 2), "3");
    }

    #[test]
    fn test_ragged_matrix_is_rejected() {
        let err = GridBuilder::new()
            .matrix(&[vec!["a", "b"], vec!["c"]])
            .unwrap_err();
        assert!(matches!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_empty_matrix() {
        let rows: Vec<Vec<i32>> = Vec::new();
        let grid = GridBuilder::new().matrix(&rows).unwrap();
        assert_eq!((grid.row_count(), grid.column_count()), (0, 0));
    }

    #[test]
    fn test_suggested_viewport_is_capped() {
        let builder = GridBuilder::new();
        let small = builder.value("x");
        // 100px header column + 100px column, 30px header row + 30px row.
        assert_eq!(GridBuilder::suggested_viewport(&small), (230, 90));

        let big = builder.sequence(&[0; 100], Orientation::Row);
        assert_eq!(GridBuilder::suggested_viewport(&big), (800, 90));
    }

    #[test]
    fn test_delimited() {
        let grid = GridBuilder::new()
            .delimited(b"a,b,c\n1,2", Delimiter::Comma)
            .unwrap();
        assert_eq!((grid.row_count(), grid.column_count()), (2, 3));
        assert_eq!(grid.cell_text(1, 2), "");
    }
}
