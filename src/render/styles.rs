//! Built-in visual styles and their paint routines.
//!
//! A style is a palette plus two routines: one paints body cells, the other
//! paints header cells. Switching style swaps both routines and, unless the
//! caller asks to keep custom colors, replaces the palette as well.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::backend::{Canvas, Fill, LineStyle, Rect};
use super::colors::Rgb;
use crate::error::GridError;

/// Named visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Flat cells and flat headers.
    #[default]
    Simple,
    /// Soft vertical gradients on cells and headers.
    Linux,
    /// Flat cells, bevelled headers with a highlighted bottom edge.
    WinXp,
    /// Flat cells, two-tone glossy headers.
    Win7,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Simple, Style::Linux, Style::WinXp, Style::Win7];

    /// Style native to the platform the crate was built for.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "linux") {
            Style::Linux
        } else if cfg!(target_os = "windows") {
            Style::Win7
        } else {
            Style::Simple
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Style::Simple => "simple",
            Style::Linux => "linux",
            Style::WinXp => "winxp",
            Style::Win7 => "win7",
        }
    }

    pub fn palette(self) -> Palette {
        Palette::for_style(self)
    }

    /// The (cell, header) routines this style paints with.
    pub fn routines(self) -> (Rc<dyn PaintRoutine>, Rc<dyn PaintRoutine>) {
        match self {
            Style::Simple => (Rc::new(PlainCell), Rc::new(PlainHeader)),
            Style::Linux => (Rc::new(GradientCell), Rc::new(GradientHeader)),
            Style::WinXp => (Rc::new(PlainCell), Rc::new(BevelledHeader)),
            Style::Win7 => (Rc::new(PlainCell), Rc::new(GlossyHeader)),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Style::ALL
            .into_iter()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| GridError::UnknownStyle(s.to_string()))
    }
}

/// Colors for one header band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderPalette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub grid: Rgb,
    /// Highlight for the hovered or pressed header cell
    pub cell_border: Rgb,
}

/// Every color the dispatcher can hand to a paint routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub grid: Rgb,
    /// Dotted outline around the current cell
    pub cell_border: Rgb,
    /// Band above the grid
    pub column_header: HeaderPalette,
    /// Band left of the grid
    pub row_header: HeaderPalette,
    pub selection: Rgb,
    pub selection_text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_style(Style::Simple)
    }
}

impl Palette {
    pub fn for_style(style: Style) -> Self {
        let header = |background, grid, cell_border| HeaderPalette {
            background,
            foreground: Rgb::BLACK,
            grid,
            cell_border,
        };
        match style {
            Style::Simple => {
                let band = header(
                    Rgb::new(220, 220, 220),
                    Rgb::new(200, 200, 200),
                    Rgb::new(240, 240, 240),
                );
                Self {
                    background: Rgb::WHITE,
                    foreground: Rgb::BLACK,
                    grid: Rgb::new(200, 200, 200),
                    cell_border: Rgb::new(180, 180, 180),
                    column_header: band,
                    row_header: band,
                    selection: Rgb::new(49, 106, 197),
                    selection_text: Rgb::WHITE,
                }
            }
            Style::Linux => Self {
                background: Rgb::WHITE,
                foreground: Rgb::BLACK,
                grid: Rgb::new(202, 201, 200),
                cell_border: Rgb::new(141, 140, 139),
                column_header: header(
                    Rgb::new(234, 233, 231),
                    Rgb::new(210, 207, 204),
                    Rgb::new(249, 248, 248),
                ),
                row_header: header(
                    Rgb::new(233, 232, 231),
                    Rgb::new(190, 186, 182),
                    Rgb::new(249, 248, 248),
                ),
                selection: Rgb::new(235, 110, 60),
                selection_text: Rgb::WHITE,
            },
            Style::WinXp => {
                let band = header(
                    Rgb::new(235, 234, 219),
                    Rgb::new(199, 197, 178),
                    Rgb::new(249, 177, 25),
                );
                Self {
                    background: Rgb::WHITE,
                    foreground: Rgb::BLACK,
                    grid: Rgb::new(192, 192, 192),
                    cell_border: Rgb::new(206, 149, 58),
                    column_header: band,
                    row_header: band,
                    selection: Rgb::new(49, 106, 197),
                    selection_text: Rgb::WHITE,
                }
            }
            Style::Win7 => {
                let band = header(
                    Rgb::new(241, 242, 244),
                    Rgb::new(213, 213, 213),
                    Rgb::new(105, 187, 227),
                );
                Self {
                    background: Rgb::WHITE,
                    foreground: Rgb::BLACK,
                    grid: Rgb::new(216, 216, 216),
                    cell_border: Rgb::new(206, 149, 58),
                    column_header: band,
                    row_header: band,
                    selection: Rgb::new(51, 153, 255),
                    selection_text: Rgb::WHITE,
                }
            }
        }
    }
}

/// Colors resolved for one cell, handed to a [`PaintRoutine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellColors {
    pub grid: Rgb,
    pub background: Rgb,
    /// Set when the cell should be outlined (current cell, hovered header).
    pub border: Option<Rgb>,
}

/// Paints the background, grid lines and border of one cell.
///
/// Text is drawn separately by the dispatcher after the routine returns.
pub trait PaintRoutine {
    fn paint(&self, canvas: &mut dyn Canvas, rect: Rect, colors: CellColors);
}

impl<F> PaintRoutine for F
where
    F: Fn(&mut dyn Canvas, Rect, CellColors),
{
    fn paint(&self, canvas: &mut dyn Canvas, rect: Rect, colors: CellColors) {
        self(canvas, rect, colors);
    }
}

/// Solid fill, grid outline, dotted border inset by one pixel.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCell;

impl PaintRoutine for PlainCell {
    fn paint(&self, canvas: &mut dyn Canvas, rect: Rect, colors: CellColors) {
        canvas.fill_rect(rect, Fill::solid(colors.background));
        canvas.stroke_rect(rect, colors.grid, LineStyle::Solid);
        if let Some(border) = colors.border {
            if rect.width > 2 && rect.height > 2 {
                canvas.stroke_rect(rect.inset(1), border, LineStyle::Dotted);
            }
        }
    }
}

/// Gradient from a slightly lighter top to the background; no border.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradientCell;

impl PaintRoutine for GradientCell {
    fn paint(&self, canvas: &mut dyn Canvas, rect: Rect, colors: CellColors) {
        let fill = Fill::VerticalGradient {
            top: colors.background.brighten(10),
            bottom: colors.background,
        };
        canvas.fill_rect(rect, fill);
        canvas.stroke_rect(rect, colors.grid, LineStyle::Solid);
    }
}

/// Flat header; a highlighted cell is filled with its border color.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHeader;

impl PaintRoutine for PlainHeader {
    fn paint(&self, canvas: &mut dyn Canvas, rect: Rect, colors: CellColors) {
        let back = colors.border.unwrap_or(colors.background);
        canvas.fill_rect(rect, Fill::solid(back));
        canvas.stroke_rect(rect, colors.grid, LineStyle::Solid);
    }
}

/// Header with a gradient toward its base color.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradientHeader;

impl PaintRoutine for GradientHeader {
    fn paint(&self, canvas: &mut dyn Canvas, rect: Rect, colors: CellColors) {
        let base = colors.border.unwrap_or(colors.background);
        let fill = Fill::VerticalGradient {
            top: base.brighten(20),
            bottom: base,
        };
        canvas.fill_rect(rect, fill);
        canvas.stroke_rect(rect, colors.grid, LineStyle::Solid);
    }
}

/// Header with white separators and a three-line bottom edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct BevelledHeader;

impl PaintRoutine for BevelledHeader {
    fn paint(&self, canvas: &mut dyn Canvas, rect: Rect, colors: CellColors) {
        let Rect {
            x,
            y,
            width: w,
            height: h,
        } = rect;
        let back = if colors.border.is_some() {
            colors.background.brighten(20)
        } else {
            colors.background
        };

        canvas.fill_rect(Rect::new(x + 1, y + 1, w, h - 3), Fill::solid(back));

        canvas.draw_line((x + w, y + 4), (x + w, y + h - 4), Rgb::WHITE);
        canvas.draw_line((x, y + 4), (x, y + h - 4), Rgb::WHITE);
        canvas.draw_line((x + w - 1, y + 4), (x + w - 1, y + h - 4), colors.grid);

        if y == 0 {
            canvas.draw_line((x, y), (x + w, y), colors.grid);
        }

        match colors.border {
            Some(border) => {
                canvas.draw_line((x, y + h - 2), (x + w, y + h - 2), border);
                canvas.draw_line((x, y + h), (x + w, y + h), border);
                canvas.draw_line((x, y + h - 1), (x + w, y + h - 1), border.offset(5, 20, 60));
            }
            None => {
                canvas.draw_line((x, y + h), (x + w, y + h), colors.grid);
                canvas.draw_line(
                    (x, y + h - 1),
                    (x + w, y + h - 1),
                    back.mix(colors.grid, 2, 3),
                );
                canvas.draw_line(
                    (x, y + h - 2),
                    (x + w, y + h - 2),
                    back.mix(colors.grid, 1, 3),
                );
            }
        }
    }
}

/// Two-tone header, lighter on the top half.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlossyHeader;

impl PaintRoutine for GlossyHeader {
    fn paint(&self, canvas: &mut dyn Canvas, rect: Rect, colors: CellColors) {
        let Rect {
            x,
            y,
            width: w,
            height: h,
        } = rect;
        let down = match colors.border {
            Some(border) => border.offset(80, 50, 20),
            None => colors.background,
        };
        let up = down.brighten(15);

        canvas.draw_line((x + 1, y), (x + 1, y + h), up);
        canvas.draw_line((x + w - 1, y), (x + w - 1, y + h), up);

        canvas.fill_rect(Rect::new(x + 2, y + 1, w - 3, h / 2 - 1), Fill::solid(up));
        canvas.fill_rect(
            Rect::new(x + 2, y + h / 2, w - 3, h - h / 2),
            Fill::solid(down),
        );

        let pen = colors.border.unwrap_or(colors.grid);
        if y == 0 || colors.border.is_some() {
            canvas.draw_line((x, y), (x + w, y), pen);
        }
        if x == 0 || colors.border.is_some() {
            canvas.draw_line((x, y), (x, y + h), pen);
        }
        canvas.draw_line((x + w, y), (x + w, y + h), pen);
        canvas.draw_line((x, y + h), (x + w, y + h), pen);
    }
}

/// Active style, its palette and the two routines in use.
///
/// Routines can be replaced independently of the style, e.g. to plug in a
/// custom look while keeping a built-in palette.
pub struct StyleRegistry {
    style: Style,
    palette: Palette,
    cell_routine: Rc<dyn PaintRoutine>,
    header_routine: Rc<dyn PaintRoutine>,
}

impl fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleRegistry")
            .field("style", &self.style)
            .field("palette", &self.palette)
            .finish_non_exhaustive()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new(Style::default())
    }
}

impl StyleRegistry {
    pub fn new(style: Style) -> Self {
        let (cell_routine, header_routine) = style.routines();
        Self {
            style,
            palette: style.palette(),
            cell_routine,
            header_routine,
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Switch style. Returns false (and changes nothing) if `style` is already active.
    pub fn set_style(&mut self, style: Style, keep_colors: bool) -> bool {
        if self.style == style {
            return false;
        }
        self.style = style;
        if !keep_colors {
            self.palette = style.palette();
        }
        let (cell_routine, header_routine) = style.routines();
        self.cell_routine = cell_routine;
        self.header_routine = header_routine;
        tracing::debug!(target: "fastgrid::render", %style, keep_colors, "style changed");
        true
    }

    pub fn cell_routine(&self) -> &dyn PaintRoutine {
        self.cell_routine.as_ref()
    }

    pub fn header_routine(&self) -> &dyn PaintRoutine {
        self.header_routine.as_ref()
    }

    pub fn set_cell_routine(&mut self, routine: Rc<dyn PaintRoutine>) {
        self.cell_routine = routine;
    }

    pub fn set_header_routine(&mut self, routine: Rc<dyn PaintRoutine>) {
        self.header_routine = routine;
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
    use crate::render::backend::{DrawOp, RecordingCanvas};

    fn colors(border: Option<Rgb>) -> CellColors {
        CellColors {
            grid: Rgb::new(200, 200, 200),
            background: Rgb::new(220, 220, 220),
            border,
        }
    }

    #[test]
    fn test_style_names_parse() {
        for style in Style::ALL {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
        assert_eq!("WinXP".parse::<Style>().unwrap(), Style::WinXp);
        assert!(matches!(
            "motif".parse::<Style>(),
            Err(GridError::UnknownStyle(_))
        ));
    }

    #[test]
    fn test_set_style_resets_palette_unless_kept() {
        let mut registry = StyleRegistry::new(Style::Simple);
        registry.palette_mut().selection = Rgb::new(1, 2, 3);

        assert!(registry.set_style(Style::Win7, true));
        assert_eq!(registry.palette().selection, Rgb::new(1, 2, 3));

        assert!(registry.set_style(Style::Linux, false));
        assert_eq!(registry.palette().selection, Rgb::new(235, 110, 60));

        assert!(!registry.set_style(Style::Linux, false));
    }

    #[test]
    fn test_plain_cell_border_only_when_room() {
        let mut canvas = RecordingCanvas::new();
        PlainCell.paint(
            &mut canvas,
            Rect::new(0, 0, 100, 30),
            colors(Some(Rgb::BLACK)),
        );
        assert_eq!(canvas.ops.len(), 3);
        assert_eq!(
            canvas.ops[2],
            DrawOp::StrokeRect {
                rect: Rect::new(1, 1, 98, 28),
                color: Rgb::BLACK,
                style: LineStyle::Dotted,
            }
        );

        canvas.clear();
        PlainCell.paint(
            &mut canvas,
            Rect::new(0, 0, 2, 30),
            colors(Some(Rgb::BLACK)),
        );
        assert_eq!(canvas.ops.len(), 2);
    }

    #[test]
    fn test_plain_header_fills_with_border_when_highlighted() {
        let mut canvas = RecordingCanvas::new();
        PlainHeader.paint(
            &mut canvas,
            Rect::new(0, 0, 100, 30),
            colors(Some(Rgb::WHITE)),
        );
        assert_eq!(
            canvas.ops[0],
            DrawOp::FillRect {
                rect: Rect::new(0, 0, 100, 30),
                fill: Fill::solid(Rgb::WHITE),
            }
        );
    }

    #[test]
    fn test_gradient_cell_brightens_top() {
        let mut canvas = RecordingCanvas::new();
        GradientCell.paint(&mut canvas, Rect::new(0, 0, 100, 30), colors(None));
        assert_eq!(
            canvas.ops[0],
            DrawOp::FillRect {
                rect: Rect::new(0, 0, 100, 30),
                fill: Fill::VerticalGradient {
                    top: Rgb::new(230, 230, 230),
                    bottom: Rgb::new(220, 220, 220),
                },
            }
        );
    }

    #[test]
    fn test_glossy_header_splits_fill() {
        let mut canvas = RecordingCanvas::new();
        GlossyHeader.paint(&mut canvas, Rect::new(100, 0, 100, 31), colors(None));
        let fills: Vec<_> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(
            fills,
            vec![Rect::new(102, 1, 97, 14), Rect::new(102, 15, 97, 16)]
        );
    }

    #[test]
    fn test_custom_routine_closure() {
        let mut registry = StyleRegistry::default();
        registry.set_cell_routine(Rc::new(
            |canvas: &mut dyn Canvas, rect: Rect, colors: CellColors| {
                canvas.fill_rect(rect, Fill::solid(colors.grid));
            },
        ));
        let mut canvas = RecordingCanvas::new();
        registry
            .cell_routine()
            .paint(&mut canvas, Rect::new(0, 0, 10, 10), colors(None));
        assert_eq!(canvas.ops.len(), 1);
    }
}
