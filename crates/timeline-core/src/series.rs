// File: crates/timeline-core/src/series.rs
// Summary: Time-bucketed data points (one numeric field per series label).

use std::collections::HashMap;

use serde::Deserialize;

/// One time bucket. Deserializes from the flat `{"x": "00:00:01.000", "<label>": 12.0, ...}` shape.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DataPoint {
    /// Timestamp, `HH:MM:SS.mmm`.
    pub x: String,
    #[serde(flatten)]
    pub values: HashMap<String, f64>,
}

impl DataPoint {
    pub fn new(x: impl Into<String>) -> Self {
        Self { x: x.into(), values: HashMap::new() }
    }

    pub fn with(mut self, label: impl Into<String>, value: f64) -> Self {
        self.values.insert(label.into(), value);
        self
    }

    /// Value for `label`, NaN when the field is missing.
    pub fn value(&self, label: &str) -> f64 {
        self.values.get(label).copied().unwrap_or(f64::NAN)
    }

    /// Sum over `labels`, the height of this bucket's stacked bar.
    pub fn total(&self, labels: &[String]) -> f64 {
        labels.iter().map(|l| self.value(l)).sum()
    }
}
