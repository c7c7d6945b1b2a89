//! Layout engine: line geometry, visible ranges and hit testing.
//!
//! This module handles:
//! - Per-axis sizes and offsets, patched incrementally on every mutation
//! - Coupling header thickness into the main grid origin
//! - Tracking the visible index ranges as the viewport scrolls or resizes
//! - Mapping viewport pixels back to cells, header cells and the corner

mod axis;
mod geometry;
mod viewport;

pub use axis::{Axis, MAX_LINE_SIZE, RESTORE_SIZE};
pub use geometry::{
    clamp_line_size, AxisKind, GridGeometry, DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT,
};
pub use viewport::{HeaderHit, ScrollBar, ScrollBars, Span, Viewport, VisibleRange};
