// File: crates/timeline-core/src/lib.rs
// Summary: Core library entry point; exports the scene graph and the stacked timeline renderer.

pub mod axis;
pub mod chart;
pub mod error;
pub mod event;
pub mod scale;
pub mod scene;
pub mod series;
pub mod stack;
pub mod svg;
pub mod theme;
pub mod time;
pub mod types;

pub use axis::{Axis, AxisOrient, Tick};
pub use chart::{draw_area_stack, AreaStack, Binding, StackedAreaChart};
pub use error::ChartError;
pub use event::{PointerEvent, PointerEventKind, RecordingTooltips, TimelineContext, TooltipCall, TooltipHost, TooltipLookup};
pub use scale::{nice_ticks, BandScale, ValueScale};
pub use scene::{Document, Node, NodeId};
pub use series::DataPoint;
pub use stack::{max_total, stack_layers, StackedLayer, StackedPoint};
pub use svg::{to_html_page, to_markup, to_svg_document};
pub use theme::{Rgba, PALETTE};
pub use time::{format_timestamp, parse_timestamp};
pub use types::{AxisBounds, Insets, TimelineOptions};
