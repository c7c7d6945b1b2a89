//! Per-cell selection state.
//!
//! Three views of the same state are kept in step:
//! - a row x column boolean matrix,
//! - a flat list of selected coordinates in the order they were selected,
//! - per-row and per-column "anything selected" flags used for header
//!   highlighting.
//!
//! The current cell lives here too since moving it can rewrite the selection.
#![allow(clippy::indexing_slicing)]

use serde::Serialize;

use super::cell::CellPos;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionModel {
    cells: Vec<Vec<bool>>,
    columns: usize,
    order: Vec<CellPos>,
    row_flags: Vec<bool>,
    column_flags: Vec<bool>,
    current: Option<CellPos>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.row_count() && pos.column < self.columns
    }

    pub fn is_selected(&self, pos: CellPos) -> bool {
        self.cells[pos.row][pos.column]
    }

    /// Selected coordinates in the order they were selected.
    pub fn selected(&self) -> &[CellPos] {
        &self.order
    }

    /// True if any cell in `row` is selected.
    pub fn row_selected(&self, row: usize) -> bool {
        self.row_flags[row]
    }

    /// True if any cell in `column` is selected.
    pub fn column_selected(&self, column: usize) -> bool {
        self.column_flags[column]
    }

    pub fn current(&self) -> Option<CellPos> {
        self.current
    }

    /// Select or deselect one cell. Returns false if nothing changed.
    pub fn set_selected(&mut self, pos: CellPos, selected: bool) -> bool {
        if self.cells[pos.row][pos.column] == selected {
            return false;
        }
        self.cells[pos.row][pos.column] = selected;
        if selected {
            self.order.push(pos);
            self.row_flags[pos.row] = true;
            self.column_flags[pos.column] = true;
        } else {
            if let Some(i) = self.order.iter().position(|&p| p == pos) {
                self.order.remove(i);
            }
            self.row_flags[pos.row] = self.order.iter().any(|p| p.row == pos.row);
            self.column_flags[pos.column] = self.order.iter().any(|p| p.column == pos.column);
        }
        true
    }

    /// Select every cell, rebuilding the list in row-major order.
    pub fn select_all(&mut self) {
        self.order.clear();
        for (r, row) in self.cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = true;
                self.order.push(CellPos::new(r, c));
            }
        }
        let any = self.columns > 0 && !self.cells.is_empty();
        self.row_flags.iter_mut().for_each(|f| *f = any);
        self.column_flags.iter_mut().for_each(|f| *f = any);
    }

    pub fn unselect_all(&mut self) {
        for row in &mut self.cells {
            row.iter_mut().for_each(|cell| *cell = false);
        }
        self.order.clear();
        self.row_flags.iter_mut().for_each(|f| *f = false);
        self.column_flags.iter_mut().for_each(|f| *f = false);
    }

    pub fn select_row(&mut self, row: usize) {
        for column in 0..self.columns {
            self.set_selected(CellPos::new(row, column), true);
        }
    }

    pub fn unselect_row(&mut self, row: usize) {
        for column in 0..self.columns {
            self.set_selected(CellPos::new(row, column), false);
        }
    }

    pub fn select_column(&mut self, column: usize) {
        for row in 0..self.row_count() {
            self.set_selected(CellPos::new(row, column), true);
        }
    }

    pub fn unselect_column(&mut self, column: usize) {
        for row in 0..self.row_count() {
            self.set_selected(CellPos::new(row, column), false);
        }
    }

    /// Move the current cell. Out-of-range targets normalize to `None`.
    ///
    /// Without `keep_selection`, a move that would leave anything other than
    /// exactly the new current cell selected clears the selection and selects
    /// the new current cell. Returns true if the model changed.
    pub fn set_current(&mut self, target: Option<CellPos>, keep_selection: bool) -> bool {
        let target = target.filter(|&pos| self.contains(pos));
        let reselect = !keep_selection
            && (self.order.len() > 1 || target.is_some_and(|pos| !self.is_selected(pos)));
        if target == self.current && !reselect {
            return false;
        }
        self.current = target;
        if !keep_selection {
            self.unselect_all();
            if let Some(pos) = target {
                self.set_selected(pos, true);
            }
        }
        true
    }

    pub fn insert_row(&mut self, index: usize) {
        self.cells.insert(index, vec![false; self.columns]);
        self.row_flags.insert(index, false);
        for pos in &mut self.order {
            if pos.row >= index {
                pos.row += 1;
            }
        }
        if let Some(current) = &mut self.current {
            if current.row >= index {
                current.row += 1;
            }
        }
    }

    pub fn remove_row(&mut self, index: usize) {
        self.cells.remove(index);
        self.row_flags.remove(index);
        self.order.retain(|pos| pos.row != index);
        for pos in &mut self.order {
            if pos.row > index {
                pos.row -= 1;
            }
        }
        self.current = match self.current {
            Some(pos) if pos.row == index => None,
            Some(pos) if pos.row > index => Some(CellPos::new(pos.row - 1, pos.column)),
            other => other,
        };
        self.refresh_column_flags();
    }

    pub fn insert_column(&mut self, index: usize) {
        assert!(index <= self.columns, "column {index} out of range");
        for row in &mut self.cells {
            row.insert(index, false);
        }
        self.columns += 1;
        self.column_flags.insert(index, false);
        for pos in &mut self.order {
            if pos.column >= index {
                pos.column += 1;
            }
        }
        if let Some(current) = &mut self.current {
            if current.column >= index {
                current.column += 1;
            }
        }
    }

    pub fn remove_column(&mut self, index: usize) {
        assert!(index < self.columns, "column {index} out of range");
        for row in &mut self.cells {
            row.remove(index);
        }
        self.columns -= 1;
        self.column_flags.remove(index);
        self.order.retain(|pos| pos.column != index);
        for pos in &mut self.order {
            if pos.column > index {
                pos.column -= 1;
            }
        }
        self.current = match self.current {
            Some(pos) if pos.column == index => None,
            Some(pos) if pos.column > index => Some(CellPos::new(pos.row, pos.column - 1)),
            other => other,
        };
        self.refresh_row_flags();
    }

    fn refresh_row_flags(&mut self) {
        self.row_flags.iter_mut().for_each(|f| *f = false);
        for pos in &self.order {
            self.row_flags[pos.row] = true;
        }
    }

    fn refresh_column_flags(&mut self) {
        self.column_flags.iter_mut().for_each(|f| *f = false);
        for pos in &self.order {
            self.column_flags[pos.column] = true;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check list, matrix and flags against each other.
    pub fn is_consistent(&self) -> bool {
        let matrix_count = self.cells.iter().flatten().filter(|&&c| c).count();
        if matrix_count != self.order.len() {
            return false;
        }
        if !self
            .order
            .iter()
            .all(|&pos| self.contains(pos) && self.is_selected(pos))
        {
            return false;
        }
        let rows_ok = (0..self.row_count())
            .all(|r| self.row_flags[r] == self.cells[r].iter().any(|&c| c));
        let columns_ok = (0..self.columns)
            .all(|c| self.column_flags[c] == self.cells.iter().any(|row| row[c]));
        let current_ok = self.current.map_or(true, |pos| self.contains(pos));
        rows_ok && columns_ok && current_ok
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

    fn model(rows: usize, columns: usize) -> SelectionModel {
        let mut m = SelectionModel::new();
        for c in 0..columns {
            m.insert_column(c);
        }
        for r in 0..rows {
            m.insert_row(r);
        }
        m
    }

    #[test]
    fn test_set_selected_is_idempotent() {
        let mut m = model(3, 3);
        assert!(m.set_selected(CellPos::new(1, 2), true));
        let once = m.clone();
        assert!(!m.set_selected(CellPos::new(1, 2), true));
        assert_eq!(m, once);
        assert!(m.row_selected(1));
        assert!(m.column_selected(2));
        assert!(m.is_consistent());
    }

    #[test]
    fn test_deselect_keeps_flag_while_row_has_other_cells() {
        let mut m = model(3, 3);
        m.set_selected(CellPos::new(1, 0), true);
        m.set_selected(CellPos::new(1, 2), true);
        m.set_selected(CellPos::new(1, 0), false);
        assert!(m.row_selected(1));
        assert!(!m.column_selected(0));
        m.set_selected(CellPos::new(1, 2), false);
        assert!(!m.row_selected(1));
        assert!(m.is_consistent());
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut m = model(3, 3);
        m.set_selected(CellPos::new(2, 2), true);
        m.set_selected(CellPos::new(0, 0), true);
        m.set_selected(CellPos::new(1, 1), true);
        assert_eq!(
            m.selected(),
            &[CellPos::new(2, 2), CellPos::new(0, 0), CellPos::new(1, 1)]
        );
    }

    #[test]
    fn test_select_all_and_unselect_all() {
        let mut m = model(2, 3);
        m.select_all();
        assert_eq!(m.selected().len(), 6);
        assert!(m.row_selected(1) && m.column_selected(2));
        assert!(m.is_consistent());
        m.unselect_all();
        assert!(m.selected().is_empty());
        assert!(!m.row_selected(0));
        assert!(m.is_consistent());
    }

    #[test]
    fn test_set_current_without_keep_selects_only_target() {
        let mut m = model(3, 3);
        m.select_row(0);
        assert!(m.set_current(Some(CellPos::new(2, 2)), false));
        assert_eq!(m.current(), Some(CellPos::new(2, 2)));
        assert_eq!(m.selected(), &[CellPos::new(2, 2)]);

        // Same cell, already the only selection: nothing to do.
        assert!(!m.set_current(Some(CellPos::new(2, 2)), false));
    }

    #[test]
    fn test_set_current_with_keep_leaves_selection() {
        let mut m = model(3, 3);
        m.set_selected(CellPos::new(0, 0), true);
        m.set_current(Some(CellPos::new(1, 1)), true);
        assert_eq!(m.current(), Some(CellPos::new(1, 1)));
        assert_eq!(m.selected(), &[CellPos::new(0, 0)]);
    }

    #[test]
    fn test_set_current_out_of_range_is_none() {
        let mut m = model(2, 2);
        m.set_current(Some(CellPos::new(0, 0)), false);
        m.set_current(Some(CellPos::new(5, 0)), true);
        assert_eq!(m.current(), None);
    }

    #[test]
    fn test_remove_row_shifts_list_and_current() {
        let mut m = model(4, 2);
        m.set_selected(CellPos::new(0, 0), true);
        m.set_selected(CellPos::new(1, 1), true);
        m.set_selected(CellPos::new(3, 1), true);
        m.set_current(Some(CellPos::new(3, 0)), true);

        m.remove_row(1);
        assert_eq!(m.selected(), &[CellPos::new(0, 0), CellPos::new(2, 1)]);
        assert_eq!(m.current(), Some(CellPos::new(2, 0)));
        assert!(m.is_consistent());

        m.remove_row(2);
        assert_eq!(m.current(), None);
        assert!(m.is_consistent());
    }

    #[test]
    fn test_insert_column_shifts_list() {
        let mut m = model(2, 2);
        m.set_selected(CellPos::new(1, 1), true);
        m.insert_column(0);
        assert_eq!(m.selected(), &[CellPos::new(1, 2)]);
        assert!(m.column_selected(2));
        assert!(!m.column_selected(0));
        assert!(m.is_consistent());

        m.remove_column(2);
        assert!(m.selected().is_empty());
        assert!(!m.row_selected(1));
        assert!(m.is_consistent());
    }
}
