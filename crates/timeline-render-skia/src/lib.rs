// File: crates/timeline-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; paints a rendered timeline scene and encodes it as PNG.

pub mod path;

use anyhow::Result;
use skia_safe as skia;
use timeline_core::{Document, NodeId, Rgba};
use tracing::debug;

use crate::path::{parse_length, parse_path, parse_translate, PathCmd};

const DEFAULT_FONT_SIZE: f32 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Anchor {
    Start,
    Middle,
    End,
}

/// Presentation state inherited down the tree.
#[derive(Clone, Copy, Debug)]
struct Inherited {
    fill: Option<Rgba>,
    stroke: Option<Rgba>,
    font_size: f32,
    anchor: Anchor,
}

impl Default for Inherited {
    fn default() -> Self {
        Self { fill: Some(Rgba::BLACK), stroke: None, font_size: DEFAULT_FONT_SIZE, anchor: Anchor::Start }
    }
}

pub struct SkiaRenderer {
    pub background: Rgba,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    pub fn new() -> Self { Self { background: Rgba::WHITE } }

    /// Paint the `svg` subtree and return PNG bytes sized by its `width`/`height` attributes.
    pub fn render_png_bytes(&self, doc: &Document, svg: NodeId) -> Result<Vec<u8>> {
        let (width, height) = svg_size(doc, svg)?;
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia(self.background));

        draw_node(canvas, doc, svg, Inherited::default());

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        debug!(width, height, bytes = data.as_bytes().len(), "rasterized timeline");
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file at `output_png_path`, creating parent directories.
    pub fn render_png(&self, doc: &Document, svg: NodeId, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_png_bytes(doc, svg)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn svg_size(doc: &Document, svg: NodeId) -> Result<(i32, i32)> {
    let dim = |name: &str| -> Result<i32> {
        let raw = doc.attr(svg, name).ok_or_else(|| anyhow::anyhow!("svg node {svg} has no `{name}`"))?;
        let v = parse_length(raw, DEFAULT_FONT_SIZE).ok_or_else(|| anyhow::anyhow!("bad svg {name} `{raw}`"))?;
        if !(v >= 1.0) {
            anyhow::bail!("svg {name} must be positive, got `{raw}`");
        }
        Ok(v.round() as i32)
    };
    Ok((dim("width")?, dim("height")?))
}

fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Style wins over attribute. `Some(None)` means explicitly `none`.
fn paint_prop(doc: &Document, id: NodeId, name: &str) -> Option<Option<Rgba>> {
    let raw = doc.style(id, name).or_else(|| doc.attr(id, name))?;
    if raw.trim() == "none" { Some(None) } else { Some(Rgba::parse(raw)) }
}

fn num_attr(doc: &Document, id: NodeId, name: &str, font_size: f32) -> f32 {
    doc.attr(id, name).and_then(|v| parse_length(v, font_size)).unwrap_or(0.0)
}

fn draw_node(canvas: &skia::Canvas, doc: &Document, id: NodeId, parent: Inherited) {
    if doc.style(id, "display") == Some("none") {
        return;
    }

    let mut st = parent;
    if let Some(fill) = paint_prop(doc, id, "fill") { st.fill = fill; }
    if let Some(stroke) = paint_prop(doc, id, "stroke") { st.stroke = stroke; }
    if let Some(size) = doc.style(id, "font-size").or_else(|| doc.attr(id, "font-size")).and_then(|v| parse_length(v, parent.font_size)) {
        st.font_size = size;
    }
    if let Some(anchor) = doc.style(id, "text-anchor").or_else(|| doc.attr(id, "text-anchor")) {
        st.anchor = match anchor {
            "middle" => Anchor::Middle,
            "end" => Anchor::End,
            _ => Anchor::Start,
        };
    }
    let opacity = doc
        .style(id, "opacity")
        .or_else(|| doc.attr(id, "opacity"))
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(1.0);

    let translated = doc.attr(id, "transform").and_then(parse_translate);
    if let Some((dx, dy)) = translated {
        canvas.save();
        canvas.translate((dx, dy));
    }

    match doc.node(id).tag.as_str() {
        "rect" => draw_rect(canvas, doc, id, &st, opacity),
        "line" => draw_line(canvas, doc, id, &st, opacity),
        "path" => draw_path(canvas, doc, id, &st, opacity),
        "text" => draw_text(canvas, doc, id, &st, opacity),
        _ => {}
    }
    for &child in doc.children(id) {
        draw_node(canvas, doc, child, st);
    }

    if translated.is_some() {
        canvas.restore();
    }
}

fn paint_for(color: Rgba, opacity: f64, style: skia::paint::Style) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(style);
    paint.set_stroke_width(1.0);
    paint.set_color(to_skia(color.with_opacity(opacity)));
    paint
}

fn draw_rect(canvas: &skia::Canvas, doc: &Document, id: NodeId, st: &Inherited, opacity: f64) {
    let Some(fill) = st.fill else { return };
    let x = num_attr(doc, id, "x", st.font_size);
    let y = num_attr(doc, id, "y", st.font_size);
    let w = num_attr(doc, id, "width", st.font_size);
    let h = num_attr(doc, id, "height", st.font_size);
    // NaN geometry from missing data is skipped rather than painted
    if !(w > 0.0 && h > 0.0 && x.is_finite() && y.is_finite()) {
        return;
    }
    let paint = paint_for(fill, opacity, skia::paint::Style::Fill);
    canvas.draw_rect(skia::Rect::from_xywh(x, y, w, h), &paint);
}

fn draw_line(canvas: &skia::Canvas, doc: &Document, id: NodeId, st: &Inherited, opacity: f64) {
    let Some(stroke) = st.stroke else { return };
    let p = |name: &str| num_attr(doc, id, name, st.font_size);
    let paint = paint_for(stroke, opacity, skia::paint::Style::Stroke);
    canvas.draw_line((p("x1"), p("y1")), (p("x2"), p("y2")), &paint);
}

fn draw_path(canvas: &skia::Canvas, doc: &Document, id: NodeId, st: &Inherited, opacity: f64) {
    let Some(cmds) = doc.attr(id, "d").and_then(parse_path) else { return };
    let mut path = skia::Path::new();
    for cmd in cmds {
        match cmd {
            PathCmd::MoveTo(x, y) => { path.move_to((x, y)); }
            PathCmd::LineTo(x, y) => { path.line_to((x, y)); }
            PathCmd::Close => { path.close(); }
        }
    }
    if let Some(fill) = st.fill {
        canvas.draw_path(&path, &paint_for(fill, opacity, skia::paint::Style::Fill));
    }
    if let Some(stroke) = st.stroke {
        canvas.draw_path(&path, &paint_for(stroke, opacity, skia::paint::Style::Stroke));
    }
}

fn draw_text(canvas: &skia::Canvas, doc: &Document, id: NodeId, st: &Inherited, opacity: f64) {
    let Some(text) = doc.text(id).filter(|t| !t.is_empty()) else { return };
    let Some(fill) = st.fill else { return };
    let paint = paint_for(fill, opacity, skia::paint::Style::Fill);
    let mut font = skia::Font::default();
    font.set_size(st.font_size);

    let x = num_attr(doc, id, "x", st.font_size);
    let y = num_attr(doc, id, "y", st.font_size) + num_attr(doc, id, "dy", st.font_size);
    let (width, _) = font.measure_str(text, Some(&paint));
    let x = match st.anchor {
        Anchor::Start => x,
        Anchor::Middle => x - width / 2.0,
        Anchor::End => x - width,
    };
    canvas.draw_str(text, (x, y), &font, &paint);
}
