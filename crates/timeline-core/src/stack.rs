// File: crates/timeline-core/src/stack.rs
// Summary: Stacking transform: per-label values -> cumulative baseline (y0) + own height (y).

use chrono::NaiveTime;

use crate::error::{ChartError, Result};
use crate::series::DataPoint;
use crate::time::parse_timestamp;

#[derive(Clone, Debug, PartialEq)]
pub struct StackedPoint {
    /// Timestamp as given; key into the tooltip caches.
    pub raw_x: String,
    pub x: NaiveTime,
    pub y0: f64,
    pub y: f64,
}

impl StackedPoint {
    /// Top of this segment.
    pub fn y1(&self) -> f64 { self.y0 + self.y }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StackedLayer {
    pub label: String,
    pub points: Vec<StackedPoint>,
}

/// Stack `values` in `labels` order; later labels sit on top of earlier ones.
pub fn stack_layers(labels: &[String], values: &[DataPoint]) -> Result<Vec<StackedLayer>> {
    if labels.is_empty() {
        return Err(ChartError::NoSeries);
    }
    let times = values
        .iter()
        .enumerate()
        .map(|(index, d)| {
            parse_timestamp(&d.x).ok_or_else(|| ChartError::InvalidTimestamp { index, value: d.x.clone() })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut baseline = vec![0.0f64; values.len()];
    let layers = labels
        .iter()
        .map(|label| {
            let points = values
                .iter()
                .zip(&times)
                .zip(baseline.iter_mut())
                .map(|((d, &x), y0)| {
                    let y = d.value(label);
                    let p = StackedPoint { raw_x: d.x.clone(), x, y0: *y0, y };
                    *y0 += y;
                    p
                })
                .collect();
            StackedLayer { label: label.clone(), points }
        })
        .collect();
    Ok(layers)
}

/// Largest stacked total over all layers and points. NaN segments are skipped; 0 when empty.
pub fn max_total(layers: &[StackedLayer]) -> f64 {
    layers
        .iter()
        .flat_map(|l| l.points.iter().map(StackedPoint::y1))
        .filter(|v| !v.is_nan())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
        .unwrap_or(0.0)
}
