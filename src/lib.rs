//! fastgrid - a virtualized spreadsheet grid
//!
//! Handles very large row and column counts by only touching what is on
//! screen:
//! - Per-axis offset tables, patched incrementally on insert/delete/resize
//! - Visible-range tracking that walks from the previous range while scrolling
//! - Cell selection with shift extension and ctrl toggling, driven by pointer events
//! - Four visual styles with replaceable cell and header paint routines
//!
//! The core is host-agnostic: it paints through the [`render::Canvas`] trait
//! and reports repaint/scrollbar/autoscroll needs as [`HostRequest`]s. On
//! `wasm32` the `web` module binds it to an `HtmlCanvasElement`.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'fastgrid';
//! await init();
//! const view = new GridView(canvas, { style: 'win7' });
//! view.loadDelimited(csvText, false);
//! ```
//!
//! # Usage (Rust)
//!
//! ```
//! use fastgrid::{FastGrid, RecordingCanvas};
//!
//! let mut grid = FastGrid::new();
//! grid.resize(400, 300);
//! grid.set_sizes(1_000, 50, 1, 1);
//! grid.set_cell_text(0, 0, "hello");
//!
//! let mut canvas = RecordingCanvas::new();
//! grid.paint(&mut canvas);
//! assert!(canvas.texts().any(|t| t == "hello"));
//! ```

pub mod builder;
pub mod delimited;
pub mod error;
pub mod layout;
pub mod render;
pub mod types;
pub mod viewer;

#[cfg(target_arch = "wasm32")]
pub mod web;

use wasm_bindgen::prelude::*;

pub use builder::{GridBuilder, Orientation};
pub use delimited::Delimiter;
pub use error::{GridError, Result};
pub use layout::{
    AxisKind, GridGeometry, HeaderHit, ScrollBar, ScrollBars, Span, Viewport, VisibleRange,
};
pub use render::{Canvas, DrawOp, Palette, RecordingCanvas, Style, StyleRegistry};
pub use types::*;
pub use viewer::{
    FastGrid, HostRequest, InteractionMode, Modifiers, PointerButton, PointerButtons,
    PointerEvent,
};

#[cfg(target_arch = "wasm32")]
pub use web::GridView;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
