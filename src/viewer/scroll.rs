//! Scroll position, scrollbar ranges and the drag autoscroll nudge.

use super::{FastGrid, HostRequest};
use crate::layout::{ScrollBars, VisibleRange};

impl FastGrid {
    /// Current (horizontal, vertical) scroll position.
    pub fn scroll_position(&self) -> (i32, i32) {
        (self.viewport.scroll_x, self.viewport.scroll_y)
    }

    pub fn scroll_bars(&self) -> ScrollBars {
        self.scroll_bars
    }

    /// Scroll to a position; each coordinate is clamped into its scrollbar range.
    pub fn set_scroll_position(&mut self, x: i32, y: i32) {
        let x = self.scroll_bars.horizontal.clamp(x);
        let y = self.scroll_bars.vertical.clamp(y);
        if (x, y) == self.scroll_position() {
            return;
        }
        self.viewport.scroll_x = x;
        self.viewport.scroll_y = y;
        self.scroll_bars.horizontal.value = x;
        self.scroll_bars.vertical.value = y;
        self.update_visible_range();
        self.request_repaint();
    }

    pub fn set_horizontal_scroll(&mut self, x: i32) {
        self.set_scroll_position(x, self.viewport.scroll_y);
    }

    pub fn set_vertical_scroll(&mut self, y: i32) {
        self.set_scroll_position(self.viewport.scroll_x, y);
    }

    /// Scroll relative to the current position.
    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        let (x, y) = self.scroll_position();
        self.set_scroll_position(x.saturating_add(dx), y.saturating_add(dy));
    }

    pub fn scroll_to_top(&mut self) {
        self.set_vertical_scroll(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.set_vertical_scroll(self.scroll_bars.vertical.maximum);
    }

    /// The host viewport changed size.
    pub fn resize(&mut self, width: i32, height: i32) {
        let (width, height) = (width.max(0), height.max(0));
        if width == self.viewport.width && height == self.viewport.height {
            return;
        }
        self.viewport.width = width;
        self.viewport.height = height;
        tracing::debug!(target: "fastgrid::scroll", width, height, "viewport resized");
        self.update_scroll_bars();
        self.update_visible_range();
        self.request_repaint();
    }

    /// Recompute scrollbar ranges, clamp the scroll position into them and
    /// tell the host when anything changed.
    pub(crate) fn update_scroll_bars(&mut self) {
        let bars = ScrollBars::compute(
            &self.geometry,
            &self.viewport,
            self.config.scroll_single_step,
        );
        self.viewport.scroll_x = bars.horizontal.value;
        self.viewport.scroll_y = bars.vertical.value;
        if bars != self.scroll_bars {
            self.scroll_bars = bars;
            self.push_request(HostRequest::ScrollBarsChanged(bars));
        }
    }

    pub(crate) fn update_visible_range(&mut self) {
        self.visible.update(&self.geometry, &self.viewport);
    }

    /// Rebuild the visible range without seeding from the previous one.
    pub(crate) fn reset_visible_range(&mut self) {
        self.visible = VisibleRange::compute(&self.geometry, &self.viewport);
    }

    /// Nudge the scrollbars when a drag point sits near a viewport edge.
    ///
    /// Returns true if the point is inside an autoscroll margin, whether or
    /// not the scrollbar could still move.
    pub(crate) fn autoscroll_nudge(&mut self, x: i32, y: i32) -> bool {
        let margin = self.config.autoscroll_margin;
        let step = self.config.autoscroll_step;
        let (width, height) = (self.viewport.width, self.viewport.height);

        let dx = if x < margin {
            -step
        } else if x > width - margin {
            step
        } else {
            0
        };
        let dy = if y < margin {
            -step
        } else if y > height - margin {
            step
        } else {
            0
        };

        if dx == 0 && dy == 0 {
            return false;
        }
        let (sx, sy) = self.scroll_position();
        self.set_scroll_position(sx + dx, sy + dy);
        let (nx, ny) = self.scroll_position();
        if (nx, ny) != (sx, sy) {
            self.push_request(HostRequest::ScrollBarsChanged(self.scroll_bars));
        }
        tracing::trace!(target: "fastgrid::scroll", dx, dy, x = nx, y = ny, "autoscroll nudge");
        true
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
    use crate::FastGrid;

    fn grid() -> FastGrid {
        let mut grid = FastGrid::new();
        grid.resize(400, 300);
        grid.set_sizes(100, 20, 1, 1);
        grid.take_requests();
        grid
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut grid = grid();
        grid.set_scroll_position(-50, 1_000_000);
        let bars = grid.scroll_bars();
        assert_eq!(grid.scroll_position(), (0, bars.vertical.maximum));
    }

    #[test]
    fn test_scroll_to_top_and_bottom() {
        let mut grid = grid();
        grid.scroll_to_bottom();
        assert_eq!(grid.scroll_position().1, 3_030 - 300 + 1);
        let rows = grid.visible_range().rows.unwrap();
        assert_eq!(rows.last, 99);
        grid.scroll_to_top();
        assert_eq!(grid.scroll_position().1, 0);
        assert_eq!(grid.visible_range().rows.unwrap().first, 0);
    }

    #[test]
    fn test_shrinking_content_pulls_scroll_back() {
        let mut grid = grid();
        grid.scroll_to_bottom();
        grid.set_row_count(5);
        assert_eq!(grid.scroll_position().1, 0);
        assert_eq!(grid.scroll_bars().vertical.maximum, 0);
    }
}
