// File: crates/timeline-core/src/error.rs
// Summary: Error type for rendering and event dispatch.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("no element matches container selector `{0}` (or it has no parent)")]
    ContainerNotFound(String),

    #[error("cannot stack an empty label list")]
    NoSeries,

    #[error("data point {index}: timestamp `{value}` does not match HH:MM:SS.mmm")]
    InvalidTimestamp { index: usize, value: String },

    #[error("no tooltip values cached for timestamp `{0}`")]
    MissingTooltipValues(String),

    #[error("no tooltip time string cached for timestamp `{0}`")]
    MissingTipString(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
