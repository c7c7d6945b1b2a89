//! Cell coordinates, rectangles and the text matrices that back the grid.
#![allow(clippy::indexing_slicing)]

use serde::{Deserialize, Serialize};

/// A (row, column) coordinate, 0-indexed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CellPos {
    pub row: usize,
    pub column: usize,
}

impl CellPos {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for CellPos {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

/// Inclusive rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRect {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl CellRect {
    /// The smallest rectangle holding both corners, in any order.
    pub fn spanning(a: CellPos, b: CellPos) -> Self {
        Self {
            top: a.row.min(b.row),
            left: a.column.min(b.column),
            bottom: a.row.max(b.row),
            right: a.column.max(b.column),
        }
    }

    pub fn single(pos: CellPos) -> Self {
        Self::spanning(pos, pos)
    }

    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        (self.top..=self.bottom).contains(&pos.row)
            && (self.left..=self.right).contains(&pos.column)
    }

    /// Row-major iteration over every cell in the rectangle.
    pub fn cells(&self) -> impl Iterator<Item = CellPos> {
        let (left, right) = (self.left, self.right);
        (self.top..=self.bottom)
            .flat_map(move |row| (left..=right).map(move |column| CellPos::new(row, column)))
    }
}

/// Rectangular matrix of cell text that grows and shrinks one line at a time.
///
/// The column count is tracked separately so a matrix with no rows still
/// knows how wide new rows must be.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextMatrix {
    rows: Vec<Vec<String>>,
    columns: usize,
}

impl TextMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> &str {
        &self.rows[row][column]
    }

    pub fn set(&mut self, row: usize, column: usize, text: impl Into<String>) {
        assert!(column < self.columns, "column {column} out of range");
        self.rows[row][column] = text.into();
    }

    pub fn insert_row(&mut self, index: usize) {
        self.rows.insert(index, vec![String::new(); self.columns]);
    }

    pub fn remove_row(&mut self, index: usize) {
        self.rows.remove(index);
    }

    pub fn insert_column(&mut self, index: usize) {
        assert!(index <= self.columns, "column {index} out of range");
        for row in &mut self.rows {
            row.insert(index, String::new());
        }
        self.columns += 1;
    }

    pub fn remove_column(&mut self, index: usize) {
        assert!(index < self.columns, "column {index} out of range");
        for row in &mut self.rows {
            row.remove(index);
        }
        self.columns -= 1;
    }

    /// Row-major view of the stored text.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.columns = 0;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pos_is_origin() {
        assert_eq!(CellPos::default(), CellPos::new(0, 0));
        assert_eq!(CellRect::single(CellPos::default()).cells().count(), 1);
    }

    #[test]
    fn test_rect_spanning_normalizes_corners() {
        let rect = CellRect::spanning(CellPos::new(4, 1), CellPos::new(2, 3));
        assert_eq!(
            rect,
            CellRect {
                top: 2,
                left: 1,
                bottom: 4,
                right: 3
            }
        );
        assert_eq!(rect.height(), 3);
        assert_eq!(rect.width(), 3);
        assert!(rect.contains(CellPos::new(3, 2)));
        assert!(!rect.contains(CellPos::new(1, 2)));
        assert_eq!(rect.cells().count(), 9);
        assert_eq!(rect.cells().next(), Some(CellPos::new(2, 1)));
    }

    #[test]
    fn test_matrix_keeps_width_without_rows() {
        let mut m = TextMatrix::new();
        m.insert_column(0);
        m.insert_column(1);
        assert_eq!(m.row_count(), 0);
        m.insert_row(0);
        assert_eq!(m.rows()[0].len(), 2);

        m.set(0, 1, "b");
        m.insert_column(0);
        assert_eq!(m.get(0, 2), "b");
        m.remove_column(0);
        assert_eq!(m.get(0, 1), "b");
    }
}
