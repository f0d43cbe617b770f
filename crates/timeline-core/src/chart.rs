// File: crates/timeline-core/src/chart.rs
// Summary: Stacked timeline renderer: scales, axes, stacked segments, legend and hover tooltips.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::axis::{Axis, AxisOrient, Tick};
use crate::error::{ChartError, Result};
use crate::event::{PointerEvent, PointerEventKind, TimelineContext, TooltipHost};
use crate::scale::{BandScale, ValueScale};
use crate::scene::{Document, NodeId};
use crate::series::DataPoint;
use crate::stack::{max_total, stack_layers, StackedLayer};
use crate::svg::fmt_num;
use crate::theme::series_colors;
use crate::time::format_timestamp;
use crate::types::{AxisBounds, TimelineOptions};

const LEGEND_OFFSET_X: f64 = 30.0;
const LEGEND_ROW: f64 = 19.0;
const LEGEND_SWATCH: f64 = 18.0;
/// Cursor offset of the in-chart tooltip.
const TOOLTIP_DX: f64 = -15.0;
const TOOLTIP_DY: f64 = -25.0;

/// Labels and data for one stacked timeline.
#[derive(Clone, Debug, Default)]
pub struct AreaStack {
    pub labels: Vec<String>,
    pub values: Vec<DataPoint>,
    pub bounds: AxisBounds,
}

/// What a hoverable node is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    Segment { layer: usize, point: usize },
    /// Legend row `index` (0 is the top row, i.e. the last label).
    Legend { index: usize },
}

#[derive(Clone, Copy, Debug)]
struct HitBox {
    node: NodeId,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl HitBox {
    fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }
}

/// A rendered timeline. Holds the node ids of its subtree and the event bindings.
#[derive(Clone, Debug)]
pub struct StackedAreaChart {
    pub svg: NodeId,
    /// Plot group, translated by the margins. Pointer coordinates are relative to it.
    pub plot: NodeId,
    pub y_axis: NodeId,
    pub x_axis: NodeId,
    /// One `g.cost` per label.
    pub layer_groups: Vec<NodeId>,
    /// `segments[layer][point]`.
    pub segments: Vec<Vec<NodeId>>,
    /// `g.legend` rows, top to bottom.
    pub legend_rows: Vec<NodeId>,
    pub legend_swatches: Vec<NodeId>,
    pub tooltip: NodeId,
    pub tooltip_text: NodeId,
    pub x_scale: BandScale,
    pub y_scale: ValueScale,
    pub layers: Vec<StackedLayer>,
    pub colors: Vec<String>,
    labels: Vec<String>,
    bindings: HashMap<NodeId, Binding>,
    hit_boxes: Vec<HitBox>,
}

impl AreaStack {
    pub fn new(labels: Vec<String>, values: Vec<DataPoint>) -> Self {
        Self { labels, values, bounds: AxisBounds::default() }
    }

    pub fn with_bounds(mut self, bounds: AxisBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Append the chart's `svg` to the element matching `container`.
    pub fn draw(&self, doc: &mut Document, container: &str, ctx: &TimelineContext, opts: &TimelineOptions) -> Result<StackedAreaChart> {
        let container_node = doc.select(container).ok_or_else(|| ChartError::ContainerNotFound(container.to_string()))?;
        let frame = doc.parent(container_node).ok_or_else(|| ChartError::ContainerNotFound(container.to_string()))?;
        let layers = stack_layers(&self.labels, &self.values)?;

        doc.set_style(frame, "padding", "8px 0 8px 8px").set_style(frame, "border-right", "0px solid white");

        let insets = opts.insets(ctx.max_margin_left);
        let (width, height) = opts.plot_size(ctx.max_margin_left);

        let svg = doc.append(container_node, "svg");
        doc.set_attr(svg, "width", fmt_num(opts.width as f64)).set_attr(svg, "height", fmt_num(opts.height as f64));
        let plot = doc.append(svg, "g");
        doc.set_attr(plot, "transform", format!("translate({},{})", fmt_num(insets.left), fmt_num(insets.top)));

        let x_scale = BandScale::new(
            layers[0].points.iter().map(|p| p.x),
            (opts.band_inset, width - opts.band_inset),
            opts.band_padding,
        );
        let (vmin, vmax) = if opts.honor_y_bounds {
            (self.bounds.min_y, self.bounds.max_y)
        } else {
            (0.0, max_total(&layers))
        };
        let y_scale = ValueScale::new_linear(0.0, height, vmin, vmax);
        let colors = series_colors(&opts.palette, self.labels.len());

        // y axis with unit label
        let y_axis = doc.append(plot, "g");
        doc.set_attr(y_axis, "class", "y axis");
        let y_ticks = y_scale
            .ticks(opts.y_ticks)
            .into_iter()
            .map(|v| Tick { pos: y_scale.to_px(v), label: fmt_num(v) })
            .collect();
        Axis::new(AxisOrient::Left, (height, 0.0), y_ticks).draw(doc, y_axis);
        let unit = doc.append(y_axis, "text");
        doc.set_attr(unit, "transform", format!("translate(0,{})", fmt_num(ctx.unit_label_y_offset)))
            .set_text(unit, opts.unit_label.clone());

        // x axis: first and last bucket only
        let x_axis = doc.append(plot, "g");
        doc.set_attr(x_axis, "class", "x axis").set_attr(x_axis, "transform", format!("translate(0,{})", fmt_num(height)));
        let domain = x_scale.domain();
        let x_ticks = match (domain.first(), domain.last()) {
            (Some(&first), Some(&last)) => [first, last]
                .into_iter()
                .filter_map(|t| x_scale.center(t).map(|pos| Tick { pos, label: format_timestamp(t) }))
                .collect(),
            _ => Vec::new(),
        };
        Axis::new(AxisOrient::Bottom, x_scale.range(), x_ticks).draw(doc, x_axis);

        let mut bindings = HashMap::new();
        let mut hit_boxes = Vec::new();

        // stacked segments
        let band = x_scale.bandwidth();
        let mut layer_groups = Vec::with_capacity(layers.len());
        let mut segments = Vec::with_capacity(layers.len());
        for (li, layer) in layers.iter().enumerate() {
            let g = doc.append(plot, "g");
            doc.set_attr(g, "class", "cost").set_style(g, "fill", colors[li].clone());
            let mut rects = Vec::with_capacity(layer.points.len());
            for (pi, p) in layer.points.iter().enumerate() {
                let x = x_scale.position(p.x).unwrap_or(f64::NAN);
                let top = y_scale.to_px(p.y1());
                let h = y_scale.to_px(p.y0) - top;
                let rect = doc.append(g, "rect");
                doc.set_attr(rect, "x", fmt_num(x))
                    .set_attr(rect, "y", fmt_num(top))
                    .set_attr(rect, "height", fmt_num(h))
                    .set_attr(rect, "width", fmt_num(band));
                bindings.insert(rect, Binding::Segment { layer: li, point: pi });
                hit_boxes.push(HitBox { node: rect, x, y: top, w: band, h });
                rects.push(rect);
            }
            layer_groups.push(g);
            segments.push(rects);
        }

        // legend, last label on top
        let reversed: Vec<&String> = colors.iter().rev().collect();
        let mut legend_rows = Vec::with_capacity(colors.len());
        let mut legend_swatches = Vec::with_capacity(colors.len());
        for (i, color) in reversed.into_iter().enumerate() {
            let row_y = i as f64 * LEGEND_ROW;
            let row = doc.append(plot, "g");
            doc.set_attr(row, "class", "legend")
                .set_attr(row, "transform", format!("translate({},{})", fmt_num(LEGEND_OFFSET_X), fmt_num(row_y)));
            let swatch = doc.append(row, "rect");
            let sx = width - 20.0;
            doc.set_attr(swatch, "x", fmt_num(sx))
                .set_attr(swatch, "width", fmt_num(LEGEND_SWATCH))
                .set_attr(swatch, "height", fmt_num(LEGEND_SWATCH))
                .set_style(swatch, "fill", color.clone());
            bindings.insert(swatch, Binding::Legend { index: i });
            hit_boxes.push(HitBox { node: swatch, x: LEGEND_OFFSET_X + sx, y: row_y, w: LEGEND_SWATCH, h: LEGEND_SWATCH });
            legend_rows.push(row);
            legend_swatches.push(swatch);
        }

        // in-chart tooltip, hidden
        let tooltip = doc.append(plot, "g");
        doc.set_attr(tooltip, "class", "tooltip").set_style(tooltip, "display", "none");
        let bg = doc.append(tooltip, "rect");
        doc.set_attr(bg, "width", "30").set_attr(bg, "height", "20").set_attr(bg, "fill", "white").set_style(bg, "opacity", "0.5");
        let tooltip_text = doc.append(tooltip, "text");
        doc.set_attr(tooltip_text, "x", "15")
            .set_attr(tooltip_text, "dy", "1.2em")
            .set_style(tooltip_text, "text-anchor", "middle")
            .set_attr(tooltip_text, "font-size", "12px")
            .set_attr(tooltip_text, "font-weight", "bold");

        debug!(
            container,
            labels = self.labels.len(),
            points = self.values.len(),
            y_max = vmax,
            "rendered stacked timeline"
        );

        Ok(StackedAreaChart {
            svg,
            plot,
            y_axis,
            x_axis,
            layer_groups,
            segments,
            legend_rows,
            legend_swatches,
            tooltip,
            tooltip_text,
            x_scale,
            y_scale,
            layers,
            colors,
            labels: self.labels.clone(),
            bindings,
            hit_boxes,
        })
    }
}

/// Render a stacked timeline with default options into the element matching `container`.
///
/// `bounds` is accepted for callers that already compute it; the y domain is
/// derived from the data unless `TimelineOptions::honor_y_bounds` is used via
/// [`AreaStack::draw`].
pub fn draw_area_stack(
    doc: &mut Document,
    container: &str,
    labels: &[String],
    values: &[DataPoint],
    bounds: AxisBounds,
    ctx: &TimelineContext,
) -> Result<StackedAreaChart> {
    AreaStack::new(labels.to_vec(), values.to_vec())
        .with_bounds(bounds)
        .draw(doc, container, ctx, &TimelineOptions::default())
}

impl StackedAreaChart {
    pub fn labels(&self) -> &[String] { &self.labels }

    pub fn binding(&self, node: NodeId) -> Option<Binding> { self.bindings.get(&node).copied() }

    /// Topmost segment or legend swatch under a plot-space point.
    pub fn hit_test(&self, px: f64, py: f64) -> Option<NodeId> {
        self.hit_boxes.iter().rev().find(|b| b.contains(px, py)).map(|b| b.node)
    }

    /// Tooltip text for a segment: every series' cached value at its timestamp, then the time.
    pub fn segment_tooltip(&self, ctx: &TimelineContext, layer: usize, point: usize) -> Result<String> {
        let raw_x = &self.layers[layer].points[point].raw_x;
        let values = ctx.lookup.values_by_time.get(raw_x).ok_or_else(|| {
            warn!(raw_x = raw_x.as_str(), "no cached tooltip values");
            ChartError::MissingTooltipValues(raw_x.clone())
        })?;
        let at = ctx.lookup.tip_by_time.get(raw_x).ok_or_else(|| {
            warn!(raw_x = raw_x.as_str(), "no cached tooltip time");
            ChartError::MissingTipString(raw_x.clone())
        })?;
        let mut tip = String::new();
        for (idx, v) in values.iter().enumerate() {
            let label = self.labels.get(idx).map(String::as_str).unwrap_or_default();
            tip.push_str(&format!("{label}: {v}   "));
        }
        tip.push_str(" at ");
        tip.push_str(at);
        Ok(tip)
    }

    /// Deliver a pointer event to `node`. Returns `Ok(false)` when the node has no handler.
    pub fn dispatch(
        &self,
        doc: &mut Document,
        ctx: &TimelineContext,
        node: NodeId,
        event: PointerEvent,
        host: &mut dyn TooltipHost,
    ) -> Result<bool> {
        let Some(binding) = self.binding(node) else { return Ok(false) };
        trace!(%node, ?binding, kind = ?event.kind, "pointer event");
        match (event.kind, binding) {
            (PointerEventKind::Enter, Binding::Segment { layer, point }) => {
                let tip = self.segment_tooltip(ctx, layer, point)?;
                host.show(node, &tip);
            }
            (PointerEventKind::Enter, Binding::Legend { index }) => {
                let label = &self.labels[self.labels.len() - 1 - index];
                host.show(node, label);
            }
            (PointerEventKind::Leave, _) => host.hide(node),
            (PointerEventKind::Move, Binding::Segment { layer, point }) => {
                let value = fmt_num(self.layers[layer].points[point].y);
                self.move_tooltip(doc, event.x, event.y, value);
            }
            (PointerEventKind::Move, Binding::Legend { .. }) => {
                self.move_tooltip(doc, event.x, event.y, String::new());
            }
        }
        Ok(true)
    }

    fn move_tooltip(&self, doc: &mut Document, px: f64, py: f64, text: String) {
        let transform = format!("translate({},{})", fmt_num(px + TOOLTIP_DX), fmt_num(py + TOOLTIP_DY));
        doc.set_attr(self.tooltip, "transform", transform);
        doc.set_text(self.tooltip_text, text);
    }
}
