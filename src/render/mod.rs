//! Rendering: drawing primitives, styles and the frame painter.
//!
//! This module provides:
//! - The [`Canvas`] trait hosts implement, plus a recording canvas
//! - Built-in styles, palettes and paint routines
//! - Color math used by the routines

pub mod backend;
pub mod colors;
pub mod painter;
pub mod styles;

pub use backend::{
    Canvas, DrawOp, Fill, FontSpec, LineStyle, Rect, RecordingCanvas, TextAlign,
};
pub use colors::Rgb;
pub use painter::{paint_cell, CellPaint, DrawComponent, PaintContext};
pub use styles::{
    BevelledHeader, CellColors, GlossyHeader, GradientCell, GradientHeader, HeaderPalette,
    PaintRoutine, Palette, PlainCell, PlainHeader, Style, StyleRegistry,
};
