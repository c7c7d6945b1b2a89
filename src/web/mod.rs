//! Browser host: binds a [`FastGrid`] to an `HtmlCanvasElement`.
//!
//! The grid queues [`HostRequest`]s; this module drains them after every
//! call and turns them into Canvas 2D repaints, JS callbacks and the
//! autoscroll interval timer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use crate::builder::GridBuilder;
use crate::delimited::Delimiter;
use crate::render::{Canvas, Fill, FontSpec, LineStyle, Rect, Rgb, Style, TextAlign};
use crate::types::{CellPos, GridConfig};
use crate::viewer::{FastGrid, HostRequest, Modifiers, PointerButton, PointerButtons, PointerEvent};

/// Canvas 2D implementation of [`Canvas`].
pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas 2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    fn clear(&self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }
}

fn font_string(font: FontSpec) -> String {
    let weight = if font.bold { "bold " } else { "" };
    format!("{weight}{}pt sans-serif", font.point_size)
}

impl Canvas for Canvas2d {
    fn fill_rect(&mut self, rect: Rect, fill: Fill) {
        let (x, y) = (f64::from(rect.x), f64::from(rect.y));
        let (w, h) = (f64::from(rect.width), f64::from(rect.height));
        match fill {
            Fill::Solid { color } => self.ctx.set_fill_style_str(&color.to_hex()),
            Fill::VerticalGradient { top, bottom } => {
                let gradient = self.ctx.create_linear_gradient(x, y, x, y + h);
                gradient.add_color_stop(0.0, &top.to_hex()).ok();
                gradient.add_color_stop(1.0, &bottom.to_hex()).ok();
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        self.ctx.fill_rect(x, y, w, h);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb, style: LineStyle) {
        self.ctx.set_stroke_style_str(&color.to_hex());
        self.ctx.set_line_width(1.0);
        let dash = Array::new();
        if style == LineStyle::Dotted {
            dash.push(&JsValue::from_f64(1.0));
            dash.push(&JsValue::from_f64(1.0));
        }
        self.ctx.set_line_dash(&dash).ok();
        // Half-pixel offset keeps 1px strokes crisp.
        self.ctx.stroke_rect(
            f64::from(rect.x) + 0.5,
            f64::from(rect.y) + 0.5,
            f64::from(rect.width),
            f64::from(rect.height),
        );
        self.ctx.set_line_dash(&Array::new()).ok();
    }

    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb) {
        self.ctx.set_stroke_style_str(&color.to_hex());
        self.ctx.set_line_width(1.0);
        self.ctx.begin_path();
        self.ctx
            .move_to(f64::from(from.0) + 0.5, f64::from(from.1) + 0.5);
        self.ctx.line_to(f64::from(to.0) + 0.5, f64::from(to.1) + 0.5);
        self.ctx.stroke();
    }

    fn draw_text(&mut self, rect: Rect, text: &str, color: Rgb, font: FontSpec, align: TextAlign) {
        let (x, y) = (f64::from(rect.x), f64::from(rect.y));
        let (w, h) = (f64::from(rect.width), f64::from(rect.height));

        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.rect(x, y, w, h);
        self.ctx.clip();

        self.ctx.set_font(&font_string(font));
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx.set_text_baseline("middle");
        let text_x = match align {
            TextAlign::Left => {
                self.ctx.set_text_align("left");
                x
            }
            TextAlign::Center => {
                self.ctx.set_text_align("center");
                x + w / 2.0
            }
        };
        self.ctx.fill_text(text, text_x, y + h / 2.0).ok();
        self.ctx.restore();
    }
}

struct SharedState {
    grid: FastGrid,
    surface: Canvas2d,
    render_callback: Option<Function>,
    scroll_callback: Option<Function>,
    autoscroll_timer: Option<i32>,
    autoscroll_closure: Option<Closure<dyn FnMut()>>,
}

type State = Rc<RefCell<SharedState>>;

/// Grid widget drawn into a canvas element.
#[wasm_bindgen]
pub struct GridView {
    state: State,
    // Listeners stay registered as long as the closures live.
    #[allow(dead_code)]
    closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    #[allow(dead_code)]
    wheel_closure: Closure<dyn FnMut(WheelEvent)>,
}

/// Translate a DOM mouse event; `changed` is false for plain motion.
#[allow(clippy::cast_possible_truncation)]
fn pointer_event(event: &MouseEvent, canvas: &HtmlCanvasElement, changed: bool) -> PointerEvent {
    let rect = canvas.get_bounding_client_rect();
    let button = changed.then(|| match event.button() {
        1 => PointerButton::Middle,
        2 => PointerButton::Right,
        _ => PointerButton::Left,
    });
    let held = event.buttons();
    PointerEvent {
        x: event.client_x() - rect.left() as i32,
        y: event.client_y() - rect.top() as i32,
        button,
        buttons: PointerButtons {
            left: held & 1 != 0,
            right: held & 2 != 0,
            middle: held & 4 != 0,
        },
        modifiers: Modifiers {
            ctrl: event.ctrl_key() || event.meta_key(),
            shift: event.shift_key(),
        },
    }
}

/// Act on everything the grid queued.
fn process_requests(state: &State) {
    let requests = state.borrow_mut().grid.take_requests();
    let mut repaint = false;
    for request in requests {
        match request {
            HostRequest::Repaint => repaint = true,
            HostRequest::ScrollBarsChanged(bars) => {
                let callback = state.borrow().scroll_callback.clone();
                if let Some(callback) = callback {
                    if let Ok(value) = serde_wasm_bindgen::to_value(&bars) {
                        callback.call1(&JsValue::NULL, &value).ok();
                    }
                }
            }
            HostRequest::StartAutoscroll { interval_ms } => start_autoscroll(state, interval_ms),
            HostRequest::StopAutoscroll => stop_autoscroll(state),
        }
    }
    if repaint {
        render(state);
    }
}

fn render(state: &State) {
    let callback = {
        let mut guard = state.borrow_mut();
        let shared = &mut *guard;
        let viewport = shared.grid.viewport();
        shared
            .surface
            .clear(f64::from(viewport.width), f64::from(viewport.height));
        shared.grid.paint(&mut shared.surface);
        shared.render_callback.clone()
    };
    if let Some(callback) = callback {
        callback.call0(&JsValue::NULL).ok();
    }
}

fn start_autoscroll(state: &State, interval_ms: u32) {
    stop_autoscroll(state);
    let Some(window) = web_sys::window() else {
        return;
    };
    let weak: Weak<RefCell<SharedState>> = Rc::downgrade(state);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(state) = weak.upgrade() {
            state.borrow_mut().grid.autoscroll_tick();
            process_requests(&state);
        }
    }) as Box<dyn FnMut()>);
    let timeout = i32::try_from(interval_ms).unwrap_or(i32::MAX);
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timeout,
    ) {
        Ok(handle) => {
            let mut shared = state.borrow_mut();
            shared.autoscroll_timer = Some(handle);
            shared.autoscroll_closure = Some(closure);
            tracing::trace!(target: "fastgrid::viewer", interval_ms, "autoscroll timer started");
        }
        Err(_) => tracing::warn!(target: "fastgrid::viewer", "failed to start autoscroll timer"),
    }
}

fn stop_autoscroll(state: &State) {
    let mut shared = state.borrow_mut();
    if let Some(handle) = shared.autoscroll_timer.take() {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(handle);
        }
    }
    // The closure may be the one running right now; it is replaced on the next start.
}

impl GridView {
    /// Run `f` against the grid, then flush whatever it queued.
    fn update<R>(&self, f: impl FnOnce(&mut FastGrid) -> R) -> R {
        let result = f(&mut self.state.borrow_mut().grid);
        process_requests(&self.state);
        result
    }
}

#[wasm_bindgen]
impl GridView {
    /// Attach a grid to `canvas`. `config` is an optional `GridConfig` object.
    ///
    /// Mouse selection, header hover and wheel scrolling are wired up here.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config: JsValue) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();

        let config: GridConfig = if config.is_undefined() || config.is_null() {
            GridConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        let surface = Canvas2d::new(&canvas)?;
        let mut grid = FastGrid::with_config(config);
        grid.resize(
            i32::try_from(canvas.width()).unwrap_or(i32::MAX),
            i32::try_from(canvas.height()).unwrap_or(i32::MAX),
        );

        let state = Rc::new(RefCell::new(SharedState {
            grid,
            surface,
            render_callback: None,
            scroll_callback: None,
            autoscroll_timer: None,
            autoscroll_closure: None,
        }));

        let mut closures: Vec<Closure<dyn FnMut(MouseEvent)>> = Vec::new();

        // Mouse down
        {
            let state = Rc::clone(&state);
            let target = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let pointer = pointer_event(&event, &target, true);
                state.borrow_mut().grid.pointer_down(pointer);
                process_requests(&state);
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Mouse move (drag selection + header hover)
        {
            let state = Rc::clone(&state);
            let target = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let pointer = pointer_event(&event, &target, false);
                state.borrow_mut().grid.pointer_move(pointer);
                process_requests(&state);
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Mouse up goes on the window so a release outside the canvas still ends the drag.
        {
            let state = Rc::clone(&state);
            let target = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let pointer = pointer_event(&event, &target, true);
                state.borrow_mut().grid.pointer_up(pointer);
                process_requests(&state);
            }) as Box<dyn FnMut(MouseEvent)>);
            if let Some(window) = web_sys::window() {
                window
                    .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())
                    .ok();
            }
            closures.push(closure);
        }

        // Mouse leave clears header hover
        {
            let state = Rc::clone(&state);
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                if event.buttons() != 0 {
                    return;
                }
                state
                    .borrow_mut()
                    .grid
                    .pointer_move(PointerEvent::hover(-1, -1));
                process_requests(&state);
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        let wheel_closure = {
            let state = Rc::clone(&state);
            #[allow(clippy::cast_possible_truncation)]
            let closure = Closure::wrap(Box::new(move |event: WheelEvent| {
                event.prevent_default();
                let (dx, dy) = (event.delta_x() as i32, event.delta_y() as i32);
                state.borrow_mut().grid.scroll_by(dx, dy);
                process_requests(&state);
            }) as Box<dyn FnMut(WheelEvent)>);
            canvas
                .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())
                .ok();
            closure
        };

        process_requests(&state);

        Ok(GridView {
            state,
            closures,
            wheel_closure,
        })
    }

    /// Called after every repaint.
    #[wasm_bindgen(js_name = "setRenderCallback")]
    pub fn set_render_callback(&mut self, callback: Option<Function>) {
        self.state.borrow_mut().render_callback = callback;
    }

    /// Called with the new `ScrollBars` whenever a range or value changes.
    #[wasm_bindgen(js_name = "setScrollCallback")]
    pub fn set_scroll_callback(&mut self, callback: Option<Function>) {
        self.state.borrow_mut().scroll_callback = callback;
    }

    /// Replace the grid with the contents of CSV (or TSV) text.
    #[wasm_bindgen(js_name = "loadDelimited")]
    pub fn load_delimited(&self, text: &str, tab_separated: bool) -> Result<(), JsValue> {
        let delim = if tab_separated {
            Delimiter::Tab
        } else {
            Delimiter::Comma
        };
        let (config, viewport) = {
            let shared = self.state.borrow();
            (shared.grid.config().clone(), shared.grid.viewport())
        };
        let mut grid = GridBuilder::with_config(config).delimited(text.as_bytes(), delim)?;
        grid.resize(viewport.width, viewport.height);
        self.state.borrow_mut().grid = grid;
        stop_autoscroll(&self.state);
        render(&self.state);
        Ok(())
    }

    pub fn render(&self) {
        render(&self.state);
    }

    pub fn resize(&self, width: i32, height: i32) {
        self.update(|grid| grid.resize(width, height));
    }

    #[wasm_bindgen(js_name = "setScroll")]
    pub fn set_scroll(&self, x: i32, y: i32) {
        self.update(|grid| grid.set_scroll_position(x, y));
    }

    #[wasm_bindgen(js_name = "setStyle")]
    pub fn set_style(&self, name: &str, keep_colors: bool) -> Result<(), JsValue> {
        let style: Style = name.parse()?;
        self.update(|grid| grid.set_style(style, keep_colors));
        Ok(())
    }

    #[wasm_bindgen(js_name = "setSizes")]
    pub fn set_sizes(
        &self,
        rows: usize,
        columns: usize,
        header_rows: usize,
        header_columns: usize,
    ) {
        self.update(|grid| grid.set_sizes(rows, columns, header_rows, header_columns));
    }

    #[wasm_bindgen(js_name = "setCellText")]
    pub fn set_cell_text(&self, row: usize, column: usize, text: String) {
        self.update(|grid| grid.set_cell_text(row, column, text));
    }

    #[wasm_bindgen(js_name = "cellText")]
    pub fn cell_text(&self, row: usize, column: usize) -> String {
        self.state.borrow().grid.cell_text(row, column).to_string()
    }

    #[wasm_bindgen(js_name = "setColumnHeaderText")]
    pub fn set_column_header_text(&self, header_row: usize, column: usize, text: String) {
        self.update(|grid| grid.set_column_header_text(header_row, column, text));
    }

    #[wasm_bindgen(js_name = "setRowHeaderText")]
    pub fn set_row_header_text(&self, row: usize, header_column: usize, text: String) {
        self.update(|grid| grid.set_row_header_text(row, header_column, text));
    }

    #[wasm_bindgen(js_name = "setColumnWidth")]
    pub fn set_column_width(&self, column: usize, width: u32) {
        self.update(|grid| grid.set_column_width(column, width));
    }

    #[wasm_bindgen(js_name = "setRowHeight")]
    pub fn set_row_height(&self, row: usize, height: u32) {
        self.update(|grid| grid.set_row_height(row, height));
    }

    #[wasm_bindgen(js_name = "selectAll")]
    pub fn select_all(&self) {
        self.update(FastGrid::select_all);
    }

    #[wasm_bindgen(js_name = "unselectAll")]
    pub fn unselect_all(&self) {
        self.update(FastGrid::unselect_all);
    }

    #[wasm_bindgen(js_name = "setCurrentCell")]
    pub fn set_current_cell(&self, row: usize, column: usize, keep_selection: bool) {
        self.update(|grid| grid.set_current_cell(Some(CellPos::new(row, column)), keep_selection));
    }

    /// Selected cells as an array of `{row, column}` objects.
    pub fn selection(&self) -> Result<JsValue, JsValue> {
        let shared = self.state.borrow();
        Ok(serde_wasm_bindgen::to_value(shared.grid.current_selection())?)
    }

    #[wasm_bindgen(js_name = "scrollBars")]
    pub fn scroll_bars(&self) -> Result<JsValue, JsValue> {
        let bars = self.state.borrow().grid.scroll_bars();
        Ok(serde_wasm_bindgen::to_value(&bars)?)
    }

    pub fn clear(&self) {
        self.update(FastGrid::clear);
    }
}

impl Drop for GridView {
    fn drop(&mut self) {
        stop_autoscroll(&self.state);
    }
}
