// File: crates/timeline-core/src/axis.rs
// Summary: Axis generator; lays out the domain line and ticks as scene nodes.

use crate::scene::{Document, NodeId};
use crate::svg::fmt_num;

/// Half-pixel shift so 1px strokes land on pixel centers.
pub const AXIS_OFFSET: f64 = 0.5;
pub const TICK_SIZE: f64 = 6.0;
pub const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Left,
    Bottom,
}

/// A resolved tick: pixel position along the axis and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub pos: f64,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: AxisOrient,
    /// Pixel extent of the scale's range.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn new(orient: AxisOrient, range: (f64, f64), ticks: Vec<Tick>) -> Self {
        Self { orient, range, ticks }
    }

    /// Draw into `g`: one `path.domain` and a `g.tick` (line + text) per tick.
    pub fn draw(&self, doc: &mut Document, g: NodeId) {
        let (r0, r1) = (self.range.0 + AXIS_OFFSET, self.range.1 + AXIS_OFFSET);
        doc.set_attr(g, "fill", "none")
            .set_attr(g, "font-size", "10")
            .set_attr(g, "font-family", "sans-serif")
            .set_attr(g, "text-anchor", match self.orient {
                AxisOrient::Left => "end",
                AxisOrient::Bottom => "middle",
            });

        let domain = doc.append(g, "path");
        let d = match self.orient {
            AxisOrient::Left => format!("M{},{}H{}V{}H{}", fmt_num(-TICK_SIZE), fmt_num(r0), AXIS_OFFSET, fmt_num(r1), fmt_num(-TICK_SIZE)),
            AxisOrient::Bottom => format!("M{},{}V{}H{}V{}", fmt_num(r0), fmt_num(TICK_SIZE), AXIS_OFFSET, fmt_num(r1), fmt_num(TICK_SIZE)),
        };
        doc.set_attr(domain, "class", "domain").set_attr(domain, "stroke", "currentColor").set_attr(domain, "d", d);

        let spacing = TICK_SIZE + TICK_PADDING;
        for tick in &self.ticks {
            let t = doc.append(g, "g");
            let at = fmt_num(tick.pos + AXIS_OFFSET);
            let transform = match self.orient {
                AxisOrient::Left => format!("translate(0,{at})"),
                AxisOrient::Bottom => format!("translate({at},0)"),
            };
            doc.set_attr(t, "class", "tick").set_attr(t, "opacity", "1").set_attr(t, "transform", transform);

            let line = doc.append(t, "line");
            let text = doc.append(t, "text");
            doc.set_attr(line, "stroke", "currentColor");
            doc.set_attr(text, "fill", "currentColor");
            match self.orient {
                AxisOrient::Left => {
                    doc.set_attr(line, "x2", fmt_num(-TICK_SIZE));
                    doc.set_attr(text, "x", fmt_num(-spacing)).set_attr(text, "dy", "0.32em");
                }
                AxisOrient::Bottom => {
                    doc.set_attr(line, "y2", fmt_num(TICK_SIZE));
                    doc.set_attr(text, "y", fmt_num(spacing)).set_attr(text, "dy", "0.71em");
                }
            }
            doc.set_text(text, tick.label.clone());
        }
    }
}
