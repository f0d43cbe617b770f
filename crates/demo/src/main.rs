// File: crates/demo/src/main.rs
// Summary: Demo loads per-operation batch durations from CSV, renders the stacked timeline
// to SVG/HTML/PNG and simulates hovering the first segment.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use timeline_core::{
    to_html_page, to_svg_document, AreaStack, AxisBounds, DataPoint, Document, PointerEvent, RecordingTooltips,
    TimelineContext, TimelineOptions, TooltipLookup,
};
use timeline_render_skia::SkiaRenderer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "crates/demo/data/batch_durations.csv";
const OUT_DIR: &str = "target/out";
/// Left margin shared by every timeline on the page.
const MARGIN_LEFT: f64 = 60.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let path = resolve_path(&raw)?;
    info!(input = %path.display(), "using input file");

    let opts = match args.next() {
        Some(p) => load_options(Path::new(&p))?,
        None => TimelineOptions::default(),
    };

    let (labels, values) = load_durations_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(labels = labels.len(), rows = values.len(), "loaded batch durations");
    if values.is_empty() {
        warn!("no rows loaded; the timeline will only show axes");
    }

    let lookup = TooltipLookup::from_points(&labels, &values, |x| format!("batch at {x}"));
    let ctx = TimelineContext::new(MARGIN_LEFT, -10.0, lookup);

    let mut doc = Document::new();
    let frame = doc.append(doc.root(), "div");
    let container = doc.append(frame, "div");
    doc.set_attr(container, "id", "timeline");

    let chart = AreaStack::new(labels, values)
        .with_bounds(AxisBounds::default())
        .draw(&mut doc, "#timeline", &ctx, &opts)
        .context("rendering timeline")?;

    let out = PathBuf::from(OUT_DIR);
    std::fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;

    let svg_path = out.join("timeline.svg");
    std::fs::write(&svg_path, to_svg_document(&doc, chart.svg))
        .with_context(|| format!("writing {}", svg_path.display()))?;
    info!(path = %svg_path.display(), "wrote svg");

    let html_path = out.join("timeline.html");
    std::fs::write(&html_path, to_html_page(&doc, "Batch durations"))
        .with_context(|| format!("writing {}", html_path.display()))?;
    info!(path = %html_path.display(), "wrote html");

    let png_path = out.join("timeline.png");
    SkiaRenderer::new().render_png(&doc, chart.svg, &png_path)?;
    info!(path = %png_path.display(), "wrote png");

    // Simulated hover over the bottom layer of the first bucket.
    if let Some(&node) = chart.segments.first().and_then(|layer| layer.first()) {
        let mut host = RecordingTooltips::new();
        let x = chart.layers[0].points.first().and_then(|pt| chart.x_scale.center(pt.x)).unwrap_or(0.0);
        let y = chart.y_scale.to_px(0.0);
        chart.dispatch(&mut doc, &ctx, node, PointerEvent::enter(x, y), &mut host)?;
        chart.dispatch(&mut doc, &ctx, node, PointerEvent::moved(x, y), &mut host)?;
        if let Some((_, text)) = host.visible.as_ref() {
            info!(tooltip = %text, "hover");
        }
        chart.dispatch(&mut doc, &ctx, node, PointerEvent::leave(x, y), &mut host)?;
        info!(shows = host.shows().count(), hides = host.hides().count(), "hover simulation done");
    }

    Ok(())
}

/// Resolve an input path as given, then relative to the workspace root.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    let alt = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..").join(raw);
    if alt.exists() {
        return Ok(alt);
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn load_options(path: &Path) -> Result<TimelineOptions> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let opts = serde_json::from_str(&text).with_context(|| format!("parsing options {}", path.display()))?;
    info!(path = %path.display(), "loaded options");
    Ok(opts)
}

/// Load a CSV whose first column is the timestamp and the rest are one duration column per operation.
/// Empty cells are left out of the row and render as missing values.
fn load_durations_csv(path: &Path) -> Result<(Vec<String>, Vec<DataPoint>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    let Some((first, labels)) = headers.split_first() else {
        anyhow::bail!("missing header row");
    };
    if !first.eq_ignore_ascii_case("x") && !first.eq_ignore_ascii_case("time") {
        warn!(column = %first, "first column is not named x/time; treating it as the timestamp");
    }
    let labels = labels.to_vec();

    let mut values = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", row + 1))?;
        let mut point = DataPoint::new(rec.get(0).unwrap_or_default());
        for (label, cell) in labels.iter().zip(rec.iter().skip(1)) {
            if cell.is_empty() {
                continue;
            }
            let v: f64 = cell
                .parse()
                .with_context(|| format!("row {}: bad value `{cell}` for {label}", row + 1))?;
            point = point.with(label.clone(), v);
        }
        values.push(point);
    }
    Ok((labels, values))
}
