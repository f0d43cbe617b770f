// File: crates/timeline-core/src/event.rs
// Summary: Pointer events, the page context a timeline renders against, and the tooltip host seam.

use std::collections::HashMap;

use crate::scene::NodeId;
use crate::series::DataPoint;
use crate::svg::fmt_num;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Pointer entered the element (`mouseover`).
    Enter,
    /// Pointer left the element (`mouseout`).
    Leave,
    /// Pointer moved within the element (`mousemove`).
    Move,
}

/// Pointer event; `x`/`y` are in the plot group's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn enter(x: f64, y: f64) -> Self { Self { kind: PointerEventKind::Enter, x, y } }
    pub fn leave(x: f64, y: f64) -> Self { Self { kind: PointerEventKind::Leave, x, y } }
    pub fn moved(x: f64, y: f64) -> Self { Self { kind: PointerEventKind::Move, x, y } }
}

/// Page-level tooltip widget shared by every chart on the page.
pub trait TooltipHost {
    fn show(&mut self, node: NodeId, text: &str);
    fn hide(&mut self, node: NodeId);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TooltipCall {
    Show { node: NodeId, text: String },
    Hide { node: NodeId },
}

/// Host that records every call; also tracks what is currently shown.
#[derive(Clone, Debug, Default)]
pub struct RecordingTooltips {
    pub calls: Vec<TooltipCall>,
    pub visible: Option<(NodeId, String)>,
}

impl RecordingTooltips {
    pub fn new() -> Self { Self::default() }

    pub fn shows(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.calls.iter().filter_map(|c| match c {
            TooltipCall::Show { node, text } => Some((*node, text.as_str())),
            TooltipCall::Hide { .. } => None,
        })
    }

    pub fn hides(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.calls.iter().filter_map(|c| match c {
            TooltipCall::Hide { node } => Some(*node),
            TooltipCall::Show { .. } => None,
        })
    }
}

impl TooltipHost for RecordingTooltips {
    fn show(&mut self, node: NodeId, text: &str) {
        self.calls.push(TooltipCall::Show { node, text: text.to_string() });
        self.visible = Some((node, text.to_string()));
    }

    fn hide(&mut self, node: NodeId) {
        self.calls.push(TooltipCall::Hide { node });
        if self.visible.as_ref().is_some_and(|(n, _)| *n == node) {
            self.visible = None;
        }
    }
}

/// Per-timestamp strings prepared by whoever produced the data, keyed by the raw `x`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipLookup {
    /// Timestamp -> one display value per series, in label order.
    pub values_by_time: HashMap<String, Vec<String>>,
    /// Timestamp -> absolute time shown after "at".
    pub tip_by_time: HashMap<String, String>,
}

impl TooltipLookup {
    /// Build the tables straight from the data, for hosts without server-side caches.
    /// `tip` formats the absolute time for a raw timestamp.
    pub fn from_points(labels: &[String], values: &[DataPoint], tip: impl Fn(&str) -> String) -> Self {
        let mut lookup = Self::default();
        for d in values {
            let row = labels.iter().map(|l| fmt_num(d.value(l))).collect();
            lookup.values_by_time.insert(d.x.clone(), row);
            lookup.tip_by_time.insert(d.x.clone(), tip(&d.x));
        }
        lookup
    }
}

/// Everything the page supplies besides the data itself.
#[derive(Clone, Debug, Default)]
pub struct TimelineContext {
    /// Shared left margin so stacked timelines on one page align.
    pub max_margin_left: f64,
    /// Vertical offset of the unit label on the y axis.
    pub unit_label_y_offset: f64,
    pub lookup: TooltipLookup,
}

impl TimelineContext {
    pub fn new(max_margin_left: f64, unit_label_y_offset: f64, lookup: TooltipLookup) -> Self {
        Self { max_margin_left, unit_label_y_offset, lookup }
    }
}
