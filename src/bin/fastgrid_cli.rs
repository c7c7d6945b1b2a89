//! CLI tool for fastgrid - loads CSV/TSV into a grid, paints one frame and
//! outputs a JSON snapshot of the layout and draw calls
//!
//! Usage:
//!   fastgrid_cli <input.csv>                         # Snapshot to stdout
//!   fastgrid_cli <input.tsv> --config grid.json      # Load a GridConfig
//!   fastgrid_cli <input.csv> --size 640x480          # Explicit viewport
//!   fastgrid_cli <input.csv> --style win7 -o out.json
//!
//! Set `RUST_LOG=fastgrid=debug` for tracing output on stderr.

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use fastgrid::{
    Delimiter, FastGrid, GridBuilder, GridConfig, GridError, RecordingCanvas, Result, ScrollBars,
    Style, VisibleRange,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: fastgrid_cli <input.csv|input.tsv> [--config grid.json] \
                     [--size WIDTHxHEIGHT] [--style NAME] [-o output.json]";

#[derive(Debug, Default)]
struct Args {
    input: String,
    config: Option<String>,
    size: Option<(i32, i32)>,
    style: Option<Style>,
    output: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    rows: usize,
    columns: usize,
    header_rows: usize,
    header_columns: usize,
    total_width: i32,
    total_height: i32,
    viewport: (i32, i32),
    style: Style,
    visible: VisibleRange,
    scroll_bars: ScrollBars,
    ops: &'a RecordingCanvas,
}

fn parse_size(s: &str) -> Result<(i32, i32)> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| GridError::Other(format!("bad size: {s}")))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| GridError::Other(format!("bad size {s}: {e}")))
    };
    Ok((parse(w)?, parse(h)?))
}

fn parse_args(raw: &[String]) -> Result<Args> {
    let mut args = Args::default();
    let mut iter = raw.iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = || {
            iter.next()
                .cloned()
                .ok_or_else(|| GridError::Other(format!("{arg} needs a value")))
        };
        match arg.as_str() {
            "--config" | "-c" => args.config = Some(value()?),
            "--size" | "-s" => args.size = Some(parse_size(&value()?)?),
            "--style" => args.style = Some(value()?.parse()?),
            "-o" | "--output" => args.output = Some(value()?),
            _ if args.input.is_empty() => args.input = arg.clone(),
            other => return Err(GridError::Other(format!("unexpected argument: {other}"))),
        }
    }
    if args.input.is_empty() {
        return Err(GridError::Other(USAGE.to_string()));
    }
    Ok(args)
}

fn build(args: &Args) -> Result<(FastGrid, RecordingCanvas)> {
    let config = match &args.config {
        Some(path) => GridConfig::from_json(&fs::read_to_string(path)?)?,
        None => GridConfig::default(),
    };

    let delim = Path::new(&args.input)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(Delimiter::from_extension)
        .unwrap_or_default();
    let data = fs::read(&args.input)?;

    let mut grid = GridBuilder::with_config(config).delimited(&data, delim)?;
    if let Some(style) = args.style {
        grid.set_style(style, false);
    }
    let (width, height) = args
        .size
        .unwrap_or_else(|| GridBuilder::suggested_viewport(&grid));
    grid.resize(width, height);

    let mut canvas = RecordingCanvas::new();
    grid.paint(&mut canvas);
    tracing::info!(
        target: "fastgrid::builder",
        rows = grid.row_count(),
        columns = grid.column_count(),
        ops = canvas.ops.len(),
        "painted snapshot"
    );
    Ok((grid, canvas))
}

fn run(args: &Args) -> Result<()> {
    let (grid, canvas) = build(args)?;
    let viewport = grid.viewport();
    let snapshot = Snapshot {
        rows: grid.row_count(),
        columns: grid.column_count(),
        header_rows: grid.header_row_count(),
        header_columns: grid.header_column_count(),
        total_width: grid.total_width(),
        total_height: grid.total_height(),
        viewport: (viewport.width, viewport.height),
        style: grid.style(),
        visible: grid.visible_range(),
        scroll_bars: grid.scroll_bars(),
        ops: &canvas,
    };
    let json = serde_json::to_string_pretty(&snapshot)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!("Written: {path}");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let raw: Vec<String> = env::args().collect();
    let result = parse_args(&raw).and_then(|args| run(&args));
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
