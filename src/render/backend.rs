//! Drawing surface abstraction.
//!
//! The grid never rasterizes anything itself. Paint routines emit a small set
//! of primitives through the [`Canvas`] trait, and a host supplies the
//! implementation (Canvas 2D in the browser, or [`RecordingCanvas`] for
//! tests and the CLI).

use serde::{Deserialize, Serialize};

use super::colors::Rgb;

/// Pixel rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink by `amount` on every side.
    pub fn inset(&self, amount: i32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - 2 * amount,
            self.height - 2 * amount,
        )
    }
}

/// How a rectangle is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Fill {
    Solid { color: Rgb },
    /// Linear gradient from the top edge to the bottom edge.
    VerticalGradient { top: Rgb, bottom: Rgb },
}

impl Fill {
    pub const fn solid(color: Rgb) -> Self {
        Fill::Solid { color }
    }
}

/// Stroke pattern for outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LineStyle {
    Solid,
    /// One pixel on, one pixel off.
    Dotted,
}

/// Font request for cell text. The family is left to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontSpec {
    pub point_size: u16,
    pub bold: bool,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            point_size: 9,
            bold: false,
        }
    }
}

impl FontSpec {
    /// One point larger and bold, used for headers of selected lines.
    pub fn emphasized(self) -> Self {
        Self {
            point_size: self.point_size.saturating_add(1),
            bold: true,
        }
    }
}

/// Horizontal placement of text in its box. Text is always vertically centred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    Left,
    Center,
}

/// Target for paint routines.
///
/// Outlines follow the usual raster convention: `stroke_rect` covers the
/// pixels from `x` to `x + width` inclusive.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, fill: Fill);

    fn stroke_rect(&mut self, rect: Rect, color: Rgb, style: LineStyle);

    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb);

    fn draw_text(&mut self, rect: Rect, text: &str, color: Rgb, font: FontSpec, align: TextAlign);
}

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        fill: Fill,
    },
    StrokeRect {
        rect: Rect,
        color: Rgb,
        style: LineStyle,
    },
    Line {
        from: (i32, i32),
        to: (i32, i32),
        color: Rgb,
    },
    Text {
        rect: Rect,
        text: String,
        color: Rgb,
        font: FontSpec,
        align: TextAlign,
    },
}

/// Canvas that keeps every call in order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded text calls, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, fill: Fill) {
        self.ops.push(DrawOp::FillRect { rect, fill });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb, style: LineStyle) {
        self.ops.push(DrawOp::StrokeRect { rect, color, style });
    }

    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb) {
        self.ops.push(DrawOp::Line { from, to, color });
    }

    fn draw_text(&mut self, rect: Rect, text: &str, color: Rgb, font: FontSpec, align: TextAlign) {
        self.ops.push(DrawOp::Text {
            rect,
            text: text.to_string(),
            color,
            font,
            align,
        });
    }
}
