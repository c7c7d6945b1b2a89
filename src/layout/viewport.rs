//! Viewport state, visible-range tracking and hit testing.
//!
//! All pointer coordinates are viewport pixels: (0, 0) is the top-left of the
//! corner cell. Header bands never scroll along their own axis, so the
//! column-header band is pinned to the top and the row-header band to the
//! left, while the main grid is drawn at `offset - scroll`.

use serde::Serialize;

use super::axis::Axis;
use super::geometry::GridGeometry;
use crate::types::CellPos;

/// Scroll position and size of the visible area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Horizontal scroll position in content pixels
    pub scroll_x: i32,
    /// Vertical scroll position in content pixels
    pub scroll_y: i32,
    /// Viewport width in pixels
    pub width: i32,
    /// Viewport height in pixels
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            scroll_x: 0,
            scroll_y: 0,
            width,
            height,
        }
    }

    /// Convert a content x offset to a viewport x.
    pub fn to_screen_x(&self, x: i32) -> i32 {
        x - self.scroll_x
    }

    /// Convert a content y offset to a viewport y.
    pub fn to_screen_y(&self, y: i32) -> i32 {
        y - self.scroll_y
    }
}

/// Inclusive range of line indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub first: usize,
    pub last: usize,
}

impl Span {
    pub fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.first..=self.last).contains(&index)
    }

    pub fn iter(&self) -> std::ops::RangeInclusive<usize> {
        self.first..=self.last
    }
}

/// Header-band element under a viewport point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HeaderHit {
    /// Cell of the band above the grid, as (header row, column).
    ColumnHeader(CellPos),
    /// Cell of the band left of the grid, as (row, header column).
    RowHeader(CellPos),
    Corner,
}

/// Lines of each axis currently intersecting the viewport.
///
/// `None` means nothing on that axis is visible. Header bands always start
/// at their first line, so only their far edge is tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleRange {
    pub rows: Option<Span>,
    pub columns: Option<Span>,
    /// Last visible row of the column-header band
    pub header_rows: Option<usize>,
    /// Last visible column of the row-header band
    pub header_columns: Option<usize>,
}

impl VisibleRange {
    /// Compute from scratch.
    pub fn compute(geometry: &GridGeometry, viewport: &Viewport) -> Self {
        let mut range = Self::default();
        range.update(geometry, viewport);
        range
    }

    /// Recompute, seeding every walk from the previous bounds.
    pub fn update(&mut self, geometry: &GridGeometry, viewport: &Viewport) {
        if geometry.rows().is_empty() || geometry.columns().is_empty() {
            *self = Self::default();
            return;
        }

        self.header_rows = far_edge(geometry.header_rows(), self.header_rows, viewport.height);
        self.header_columns = far_edge(
            geometry.header_columns(),
            self.header_columns,
            viewport.width,
        );

        self.rows = main_span(
            geometry.rows(),
            self.rows,
            geometry.header_height(),
            viewport.scroll_y,
            viewport.height,
        );
        self.columns = main_span(
            geometry.columns(),
            self.columns,
            geometry.header_width(),
            viewport.scroll_x,
            viewport.width,
        );

        tracing::trace!(
            target: "fastgrid::layout",
            rows = ?self.rows,
            columns = ?self.columns,
            header_rows = ?self.header_rows,
            header_columns = ?self.header_columns,
            "visible range updated"
        );
    }

    /// Main-grid cell under a viewport point.
    pub fn cell_at(
        &self,
        geometry: &GridGeometry,
        viewport: &Viewport,
        x: i32,
        y: i32,
    ) -> Option<CellPos> {
        if x < geometry.header_width()
            || y < geometry.header_height()
            || x >= viewport.width
            || y >= viewport.height
        {
            return None;
        }
        let rows = self.rows?;
        let columns = self.columns?;
        let row = geometry
            .rows()
            .line_at(y + viewport.scroll_y, rows.first, rows.last)?;
        let column = geometry
            .columns()
            .line_at(x + viewport.scroll_x, columns.first, columns.last)?;
        Some(CellPos::new(row, column))
    }

    /// Column-header cell under a viewport point, as (header row, column).
    pub fn header_row_cell_at(
        &self,
        geometry: &GridGeometry,
        viewport: &Viewport,
        x: i32,
        y: i32,
    ) -> Option<CellPos> {
        if y < 0
            || y >= geometry.header_height()
            || x < geometry.header_width()
            || x >= viewport.width
            || y >= viewport.height
        {
            return None;
        }
        let header_row = geometry.header_rows().line_at(y, 0, self.header_rows?)?;
        let columns = self.columns?;
        let column = geometry
            .columns()
            .line_at(x + viewport.scroll_x, columns.first, columns.last)?;
        Some(CellPos::new(header_row, column))
    }

    /// Row-header cell under a viewport point, as (row, header column).
    pub fn header_column_cell_at(
        &self,
        geometry: &GridGeometry,
        viewport: &Viewport,
        x: i32,
        y: i32,
    ) -> Option<CellPos> {
        if x < 0
            || x >= geometry.header_width()
            || y < geometry.header_height()
            || x >= viewport.width
            || y >= viewport.height
        {
            return None;
        }
        let rows = self.rows?;
        let row = geometry
            .rows()
            .line_at(y + viewport.scroll_y, rows.first, rows.last)?;
        let header_column = geometry
            .header_columns()
            .line_at(x, 0, self.header_columns?)?;
        Some(CellPos::new(row, header_column))
    }

    /// True when the point falls on the top-left corner where the bands meet.
    pub fn at_corner(&self, geometry: &GridGeometry, viewport: &Viewport, x: i32, y: i32) -> bool {
        x >= 0
            && y >= 0
            && x < geometry.header_width()
            && y < geometry.header_height()
            && x < viewport.width
            && y < viewport.height
    }

    /// Header element under a point: top band first, then left band, then corner.
    pub fn header_hit_at(
        &self,
        geometry: &GridGeometry,
        viewport: &Viewport,
        x: i32,
        y: i32,
    ) -> Option<HeaderHit> {
        if let Some(pos) = self.header_row_cell_at(geometry, viewport, x, y) {
            return Some(HeaderHit::ColumnHeader(pos));
        }
        if let Some(pos) = self.header_column_cell_at(geometry, viewport, x, y) {
            return Some(HeaderHit::RowHeader(pos));
        }
        self.at_corner(geometry, viewport, x, y)
            .then_some(HeaderHit::Corner)
    }
}

fn far_edge(axis: &Axis, previous: Option<usize>, extent: i32) -> Option<usize> {
    axis.last_starting_before(previous.unwrap_or(0), extent)
}

fn main_span(
    axis: &Axis,
    previous: Option<Span>,
    header: i32,
    scroll: i32,
    extent: i32,
) -> Option<Span> {
    if header >= extent {
        return None;
    }
    let start = scroll + header;
    let end = scroll + extent;
    let first = axis.first_covering(previous.map_or(0, |s| s.first), start)?;
    let last = axis
        .last_starting_before(previous.map_or(first, |s| s.last), end)
        .unwrap_or(first);
    Some(Span::new(first, last.max(first)))
}

/// One scrollbar's range and position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollBar {
    pub value: i32,
    pub maximum: i32,
    pub page_step: i32,
    pub single_step: i32,
}

impl ScrollBar {
    /// Clamp a requested value into `0..=maximum`.
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(0, self.maximum)
    }
}

/// Both scrollbars, derived from content totals and the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScrollBars {
    pub horizontal: ScrollBar,
    pub vertical: ScrollBar,
}

impl ScrollBars {
    /// Ranges for the given content; values are clamped into the new ranges.
    ///
    /// Both ranges collapse to 0 when either total is empty.
    pub fn compute(geometry: &GridGeometry, viewport: &Viewport, single_step: i32) -> Self {
        let total_width = geometry.total_width();
        let total_height = geometry.total_height();
        let (max_x, max_y) = if total_width <= 0 || total_height <= 0 {
            (0, 0)
        } else {
            (
                (total_width - viewport.width + 1).max(0),
                (total_height - viewport.height + 1).max(0),
            )
        };
        Self {
            horizontal: ScrollBar {
                value: viewport.scroll_x.clamp(0, max_x),
                maximum: max_x,
                page_step: (viewport.width - geometry.header_width()).max(0),
                single_step,
            },
            vertical: ScrollBar {
                value: viewport.scroll_y.clamp(0, max_y),
                maximum: max_y,
                page_step: (viewport.height - geometry.header_height()).max(0),
                single_step,
            },
        }
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

    fn geometry(
        rows: usize,
        columns: usize,
        header_rows: usize,
        header_columns: usize,
    ) -> GridGeometry {
        let mut g = GridGeometry::new();
        for i in 0..rows {
            g.insert(AxisKind::Rows, i);
        }
        for i in 0..columns {
            g.insert(AxisKind::Columns, i);
        }
        for i in 0..header_rows {
            g.insert(AxisKind::HeaderRows, i);
        }
        for i in 0..header_columns {
            g.insert(AxisKind::HeaderColumns, i);
        }
        g
    }

    #[test]
    fn test_empty_grid_has_no_visible_range() {
        let g = geometry(0, 5, 1, 1);
        let range = VisibleRange::compute(&g, &Viewport::new(400, 300));
        assert_eq!(range, VisibleRange::default());
    }

    #[test]
    fn test_visible_range_without_headers() {
        // 100 rows of 30px, 20 columns of 100px.
        let g = geometry(100, 20, 0, 0);
        let range = VisibleRange::compute(&g, &Viewport::new(250, 100));
        assert_eq!(range.rows, Some(Span::new(0, 3)));
        assert_eq!(range.columns, Some(Span::new(0, 2)));
        assert_eq!(range.header_rows, None);
        assert_eq!(range.header_columns, None);
    }

    #[test]
    fn test_visible_range_follows_scroll() {
        let g = geometry(100, 20, 0, 0);
        let mut vp = Viewport::new(250, 100);
        let mut range = VisibleRange::compute(&g, &vp);

        vp.scroll_y = 300;
        range.update(&g, &vp);
        assert_eq!(range.rows, Some(Span::new(10, 13)));

        vp.scroll_y = 2_000;
        range.update(&g, &vp);
        assert_eq!(range.rows, Some(Span::new(66, 69)));

        vp.scroll_y = 0;
        range.update(&g, &vp);
        assert_eq!(range.rows, Some(Span::new(0, 3)));
        assert_eq!(range, VisibleRange::compute(&g, &vp));
    }

    #[test]
    fn test_headers_reserve_space() {
        // Header band: one 30px row on top, one 100px column on the left.
        let g = geometry(10, 10, 1, 1);
        let range = VisibleRange::compute(&g, &Viewport::new(300, 100));
        assert_eq!(range.header_rows, Some(0));
        assert_eq!(range.header_columns, Some(0));
        // Main rows start at y=30: rows 0..=2 fill 30..120.
        assert_eq!(range.rows, Some(Span::new(0, 2)));
        assert_eq!(range.columns, Some(Span::new(0, 1)));
    }

    #[test]
    fn test_header_filling_viewport_hides_main_rows() {
        let g = geometry(10, 10, 4, 1);
        let range = VisibleRange::compute(&g, &Viewport::new(300, 100));
        assert_eq!(range.header_rows, Some(3));
        assert_eq!(range.rows, None);
        assert!(range.columns.is_some());
    }

    #[test]
    fn test_hit_tests() {
        let g = geometry(10, 10, 1, 1);
        let vp = Viewport::new(400, 300);
        let range = VisibleRange::compute(&g, &vp);

        assert_eq!(range.cell_at(&g, &vp, 150, 45), Some(CellPos::new(0, 0)));
        assert_eq!(range.cell_at(&g, &vp, 250, 95), Some(CellPos::new(2, 1)));
        assert_eq!(range.cell_at(&g, &vp, 50, 95), None);
        assert_eq!(range.cell_at(&g, &vp, 400, 95), None);

        assert_eq!(
            range.header_row_cell_at(&g, &vp, 250, 10),
            Some(CellPos::new(0, 1))
        );
        assert_eq!(range.header_row_cell_at(&g, &vp, 50, 10), None);

        assert_eq!(
            range.header_column_cell_at(&g, &vp, 50, 95),
            Some(CellPos::new(2, 0))
        );
        assert_eq!(range.header_column_cell_at(&g, &vp, 150, 95), None);

        assert!(range.at_corner(&g, &vp, 50, 10));
        assert!(!range.at_corner(&g, &vp, 150, 10));

        assert_eq!(
            range.header_hit_at(&g, &vp, 250, 10),
            Some(HeaderHit::ColumnHeader(CellPos::new(0, 1)))
        );
        assert_eq!(
            range.header_hit_at(&g, &vp, 50, 95),
            Some(HeaderHit::RowHeader(CellPos::new(2, 0)))
        );
        assert_eq!(
            range.header_hit_at(&g, &vp, 50, 10),
            Some(HeaderHit::Corner)
        );
        assert_eq!(range.header_hit_at(&g, &vp, 150, 95), None);
    }

    #[test]
    fn test_hit_test_accounts_for_scroll_and_hidden_lines() {
        let mut g = geometry(10, 10, 0, 0);
        g.set_visible(AxisKind::Columns, 1, false);
        let mut vp = Viewport::new(400, 300);
        vp.scroll_y = 45;
        let range = VisibleRange::compute(&g, &vp);
        // Column 1 is hidden, so x=100 lands on column 2.
        assert_eq!(range.cell_at(&g, &vp, 100, 0), Some(CellPos::new(1, 2)));
    }

    #[test]
    fn test_scrollbars() {
        let g = geometry(100, 20, 1, 1);
        // total width = 100 + 2000, total height = 30 + 3000
        let bars = ScrollBars::compute(&g, &Viewport::new(400, 300), 100);
        assert_eq!(bars.horizontal.maximum, 2_100 - 400 + 1);
        assert_eq!(bars.vertical.maximum, 3_030 - 300 + 1);
        assert_eq!(bars.horizontal.page_step, 300);
        assert_eq!(bars.vertical.page_step, 270);
        assert_eq!(bars.vertical.single_step, 100);

        let empty = ScrollBars::compute(&geometry(0, 3, 0, 0), &Viewport::new(400, 300), 100);
        assert_eq!(empty.horizontal.maximum, 0);
        assert_eq!(empty.vertical.maximum, 0);
    }
}
