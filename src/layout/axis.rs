//! One axis of the grid: per-line sizes, cumulative offsets and a running total.
//!
//! Sizes are signed. A positive value is a visible line of that many pixels,
//! zero is a collapsed line, and a negative value is a hidden line whose
//! magnitude is the size to bring back when it is shown again.
//!
//! Offsets are patched on every mutation instead of being recomputed, so that
//! `offset(i) == offset(i - 1) + max(size(i - 1), 0)` holds at all times and
//! `offset(0) == origin()`.
//!
//! Indices are a caller contract: passing one out of range panics.
#![allow(clippy::indexing_slicing)]

use serde::Serialize;

/// Largest size a single line can take, in pixels.
pub const MAX_LINE_SIZE: i32 = 32_767;

/// Size a line gets when it is shown again after being hidden at zero size.
pub const RESTORE_SIZE: i32 = 10;

/// Sizes and offsets for one run of lines (rows or columns).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Axis {
    sizes: Vec<i32>,
    offsets: Vec<i32>,
    /// Sum of all non-negative sizes.
    total: i32,
    /// Offset of the first line.
    origin: i32,
}

impl Axis {
    /// Create an empty axis starting at offset 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty axis whose first line will start at `origin`.
    pub fn with_origin(origin: i32) -> Self {
        Self {
            origin,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn origin(&self) -> i32 {
        self.origin
    }

    /// Sum of the visible sizes, not counting the origin.
    pub fn total(&self) -> i32 {
        self.total
    }

    /// Offset one past the last visible pixel (`origin + total`).
    pub fn extent(&self) -> i32 {
        self.origin + self.total
    }

    pub fn offset(&self, index: usize) -> i32 {
        self.offsets[index]
    }

    /// Stored size, negative when the line is hidden.
    pub fn raw_size(&self, index: usize) -> i32 {
        self.sizes[index]
    }

    /// Pixels the line occupies right now.
    pub fn size(&self, index: usize) -> i32 {
        self.sizes[index].max(0)
    }

    /// Size of the line ignoring visibility.
    pub fn magnitude(&self, index: usize) -> i32 {
        self.sizes[index].abs()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.sizes[index] > 0
    }

    /// Offset one past the last pixel of the line.
    pub fn end(&self, index: usize) -> i32 {
        self.offsets[index] + self.size(index)
    }

    pub fn sizes(&self) -> &[i32] {
        &self.sizes
    }

    pub fn offsets(&self) -> &[i32] {
        &self.offsets
    }

    fn offset_for_insert(&self, index: usize) -> i32 {
        if index == 0 {
            self.origin
        } else {
            self.offsets[index - 1] + self.sizes[index - 1].max(0)
        }
    }

    fn shift_from(&mut self, start: usize, delta: i32) {
        if delta == 0 {
            return;
        }
        for offset in &mut self.offsets[start..] {
            *offset += delta;
        }
    }

    /// Insert a line of `size` pixels before `index` (`index == len()` appends).
    pub fn insert(&mut self, index: usize, size: i32) {
        assert!(
            index <= self.len(),
            "insert index {index} out of range 0..={}",
            self.len()
        );
        let offset = self.offset_for_insert(index);
        let advance = size.max(0);
        self.sizes.insert(index, size);
        self.offsets.insert(index, offset);
        self.shift_from(index + 1, advance);
        self.total += advance;
    }

    pub fn push(&mut self, size: i32) {
        self.insert(self.len(), size);
    }

    /// Remove the line at `index`, returning its stored size.
    pub fn remove(&mut self, index: usize) -> i32 {
        assert!(
            index < self.len(),
            "remove index {index} out of range 0..{}",
            self.len()
        );
        let size = self.sizes[index];
        if size > 0 {
            self.total -= size;
            self.shift_from(index + 1, -size);
        }
        self.sizes.remove(index);
        self.offsets.remove(index);
        size
    }

    /// Resize the line at `index` and return the change in `total()`.
    ///
    /// A hidden line only has its remembered magnitude replaced. Setting a
    /// visible line to 0 hides it and remembers the size it had.
    pub fn set_size(&mut self, index: usize, size: i32) -> i32 {
        let current = self.sizes[index];
        if current < 0 {
            self.sizes[index] = -size;
            return 0;
        }
        let delta = size - current;
        if delta == 0 {
            return 0;
        }
        self.total += delta;
        self.shift_from(index + 1, delta);
        self.sizes[index] = if size == 0 { -current } else { size };
        delta
    }

    /// Show or hide the line at `index` and return the change in `total()`.
    pub fn set_visible(&mut self, index: usize, visible: bool) -> i32 {
        let current = self.sizes[index];
        if (current > 0) == visible {
            return 0;
        }
        if visible {
            let restore = if current == 0 { RESTORE_SIZE } else { -current };
            self.sizes[index] = 0;
            self.set_size(index, restore)
        } else {
            self.set_size(index, 0)
        }
    }

    /// Move the whole axis so that its first line starts at `origin`.
    pub fn set_origin(&mut self, origin: i32) {
        let delta = origin - self.origin;
        self.origin = origin;
        self.shift_from(0, delta);
    }

    pub fn clear(&mut self) {
        self.sizes.clear();
        self.offsets.clear();
        self.total = 0;
    }

    /// First visible line whose pixels cover `pos`, stepping over zero-size lines.
    ///
    /// Walks outward from `seed`, so the cost is proportional to the distance
    /// between `seed` and the answer. Positions before the first line clamp to
    /// 0 and positions past the end clamp to the last line.
    pub fn first_covering(&self, seed: usize, pos: i32) -> Option<usize> {
        let last = self.len().checked_sub(1)?;
        let mut i = seed.min(last);
        while i > 0 && self.offsets[i] > pos {
            i -= 1;
        }
        while i < last && (self.sizes[i] <= 0 || self.end(i) <= pos) {
            i += 1;
        }
        Some(i)
    }

    /// Last line that starts before `pos`, walking from `seed`.
    ///
    /// `None` when the axis is empty or its first line starts at or after `pos`.
    pub fn last_starting_before(&self, seed: usize, pos: i32) -> Option<usize> {
        let last = self.len().checked_sub(1)?;
        let mut i = seed.min(last);
        while i < last && self.offsets[i + 1] < pos {
            i += 1;
        }
        while i > 0 && self.offsets[i] >= pos {
            i -= 1;
        }
        (self.offsets[i] < pos).then_some(i)
    }

    /// Visible line containing `pos`, scanning only `first..=last`.
    pub fn line_at(&self, pos: i32, first: usize, last: usize) -> Option<usize> {
        let last = last.min(self.len().checked_sub(1)?);
        (first..=last)
            .find(|&i| self.sizes[i] > 0 && self.offsets[i] <= pos && pos < self.end(i))
    }

    /// Check the offset/total bookkeeping against a full recomputation.
    pub fn is_consistent(&self) -> bool {
        if self.sizes.len() != self.offsets.len() {
            return false;
        }
        let mut expected = self.origin;
        for (size, offset) in self.sizes.iter().zip(&self.offsets) {
            if *offset != expected {
                return false;
            }
            expected += (*size).max(0);
        }
        expected - self.origin == self.total
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

    fn axis(sizes: &[i32]) -> Axis {
        let mut axis = Axis::new();
        for &size in sizes {
            axis.push(size);
        }
        axis
    }

    #[test]
    fn test_insert_at_front_shifts_following() {
        let mut a = axis(&[30, 40, 50]);
        assert_eq!(a.offsets(), &[0, 30, 70]);

        a.insert(0, 30);
        assert_eq!(a.len(), 4);
        assert_eq!(a.raw_size(0), 30);
        assert_eq!(a.offsets(), &[0, 30, 60, 100]);
        assert_eq!(a.total(), 150);
        assert!(a.is_consistent());
    }

    #[test]
    fn test_insert_after_hidden_line() {
        let mut a = axis(&[30, 40]);
        a.set_visible(1, false);
        a.insert(2, 25);
        assert_eq!(a.offset(2), 30);
        assert!(a.is_consistent());
    }

    #[test]
    fn test_remove_visible_and_hidden() {
        let mut a = axis(&[30, 40, 50]);
        assert_eq!(a.remove(1), 40);
        assert_eq!(a.offsets(), &[0, 30]);
        assert_eq!(a.total(), 80);

        a.set_visible(0, false);
        assert_eq!(a.remove(0), -30);
        assert_eq!(a.offsets(), &[0]);
        assert_eq!(a.total(), 50);
        assert!(a.is_consistent());
    }

    #[test]
    fn test_set_size_shifts_following_offsets() {
        let mut a = axis(&[30, 40, 50]);
        assert_eq!(a.set_size(0, 10), -20);
        assert_eq!(a.offsets(), &[0, 10, 50]);
        assert_eq!(a.total(), 100);
        assert_eq!(a.set_size(0, 10), 0);
    }

    #[test]
    fn test_set_size_zero_hides_and_remembers() {
        let mut a = axis(&[100, 100, 100]);
        assert_eq!(a.set_size(1, 0), -100);
        assert!(!a.is_visible(1));
        assert_eq!(a.raw_size(1), -100);
        assert_eq!(a.offset(2), 100);
        assert_eq!(a.total(), 200);

        assert_eq!(a.set_visible(1, true), 100);
        assert_eq!(a.raw_size(1), 100);
        assert_eq!(a.offset(2), 200);
        assert!(a.is_consistent());
    }

    #[test]
    fn test_resize_hidden_line_only_updates_magnitude() {
        let mut a = axis(&[30, 40, 50]);
        a.set_visible(1, false);
        assert_eq!(a.set_size(1, 60), 0);
        assert_eq!(a.raw_size(1), -60);
        assert_eq!(a.offset(2), 30);

        a.set_visible(1, true);
        assert_eq!(a.size(1), 60);
        assert_eq!(a.offset(2), 90);
    }

    #[test]
    fn test_show_zero_magnitude_restores_default() {
        let mut a = axis(&[30, 40]);
        a.set_visible(0, false);
        a.set_size(0, 0);
        assert_eq!(a.raw_size(0), 0);
        assert!(!a.is_visible(0));

        a.set_visible(0, true);
        assert_eq!(a.size(0), RESTORE_SIZE);
        assert_eq!(a.offset(1), RESTORE_SIZE);
        assert!(a.is_consistent());
    }

    #[test]
    fn test_set_visible_is_noop_when_unchanged() {
        let mut a = axis(&[30, 40]);
        assert_eq!(a.set_visible(0, true), 0);
        a.set_visible(0, false);
        assert_eq!(a.set_visible(0, false), 0);
        assert_eq!(a.raw_size(0), -30);
    }

    #[test]
    fn test_origin_moves_every_offset() {
        let mut a = axis(&[30, 40]);
        a.set_origin(25);
        assert_eq!(a.offsets(), &[25, 55]);
        assert_eq!(a.extent(), 95);
        a.insert(0, 10);
        assert_eq!(a.offsets(), &[25, 35, 65]);
        assert!(a.is_consistent());
    }

    #[test]
    fn test_first_covering_skips_zero_lines() {
        let mut a = axis(&[30, 30, 30, 30]);
        a.set_visible(1, false);
        // offsets [0, 30, 30, 60]
        assert_eq!(a.first_covering(0, 29), Some(0));
        assert_eq!(a.first_covering(0, 30), Some(2));
        assert_eq!(a.first_covering(3, 30), Some(2));
        assert_eq!(a.first_covering(3, -5), Some(0));
        assert_eq!(a.first_covering(0, 1_000), Some(3));
        assert_eq!(Axis::new().first_covering(0, 0), None);
    }

    #[test]
    fn test_last_starting_before() {
        let a = axis(&[30, 30, 30, 30]);
        assert_eq!(a.last_starting_before(0, 45), Some(1));
        assert_eq!(a.last_starting_before(3, 45), Some(1));
        assert_eq!(a.last_starting_before(0, 60), Some(1));
        assert_eq!(a.last_starting_before(0, 61), Some(2));
        assert_eq!(a.last_starting_before(2, 5_000), Some(3));
        assert_eq!(a.last_starting_before(2, 0), None);
    }

    #[test]
    fn test_line_at_ignores_collapsed_lines() {
        let mut a = axis(&[30, 30, 30]);
        a.set_visible(1, false);
        assert_eq!(a.line_at(10, 0, 2), Some(0));
        assert_eq!(a.line_at(30, 0, 2), Some(2));
        assert_eq!(a.line_at(90, 0, 2), None);
        assert_eq!(a.line_at(10, 1, 2), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_remove_out_of_range_panics() {
        let mut a = axis(&[30]);
        a.remove(1);
    }
}
