// File: crates/timeline-core/src/scale.rs
// Summary: Band (X, categorical time buckets) and linear value (Y) scales.

use chrono::NaiveTime;

/// Categorical scale spreading distinct timestamps over evenly spaced, pixel-rounded bands.
#[derive(Clone, Debug)]
pub struct BandScale {
    domain: Vec<NaiveTime>,
    starts: Vec<f64>,
    band: f64,
    range: (f64, f64),
}

impl BandScale {
    /// `padding` is applied both between bands and at the outer edges, as a
    /// fraction of the step. Steps are floored to whole pixels and the
    /// leftover is split evenly on both sides.
    pub fn new(values: impl IntoIterator<Item = NaiveTime>, range: (f64, f64), padding: f64) -> Self {
        let mut domain: Vec<NaiveTime> = Vec::new();
        for v in values {
            if !domain.contains(&v) {
                domain.push(v);
            }
        }
        let (start, stop) = range;
        let n = domain.len() as f64;
        let step = ((stop - start) / (n - padding + 2.0 * padding)).floor();
        let error = stop - start - (n - padding) * step;
        let first = start + (error / 2.0).round();
        let starts = (0..domain.len()).map(|i| first + step * i as f64).collect();
        let band = if domain.is_empty() { 0.0 } else { (step * (1.0 - padding)).round() };
        Self { domain, starts, band, range }
    }

    pub fn domain(&self) -> &[NaiveTime] { &self.domain }

    pub fn bandwidth(&self) -> f64 { self.band }

    pub fn range(&self) -> (f64, f64) { self.range }

    /// Left edge of the band for `t`; `None` when `t` is outside the domain.
    pub fn position(&self, t: NaiveTime) -> Option<f64> {
        self.domain.iter().position(|d| *d == t).map(|i| self.starts[i])
    }

    /// Center of the band for `t`, where axis ticks sit.
    pub fn center(&self, t: NaiveTime) -> Option<f64> {
        self.position(t).map(|x| x + self.band / 2.0)
    }
}

/// Vertical value scale mapping `[vmin, vmax]` to `[bottom_px, top_px]`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f64, bottom_px: f64, vmin: f64, vmax: f64) -> Self {
        Self { top_px, bottom_px, vmin, vmax }
    }

    /// A collapsed domain maps everything to the middle of the range.
    #[inline]
    pub fn to_px(&self, y: f64) -> f64 {
        let span = self.vmax - self.vmin;
        let t = if span == 0.0 || span.is_nan() {
            if span.is_nan() { f64::NAN } else { 0.5 }
        } else {
            (y - self.vmin) / span
        };
        self.bottom_px + t * (self.top_px - self.bottom_px)
    }

    #[inline]
    pub fn from_px(&self, py: f64) -> f64 {
        let h = self.top_px - self.bottom_px;
        if h == 0.0 { return self.vmin; }
        self.vmin + (py - self.bottom_px) / h * (self.vmax - self.vmin)
    }

    /// Roughly `count` human-friendly ticks (multiples of 1, 2 or 5 × 10^k) inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.vmin, self.vmax, count)
    }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Evenly spaced round values covering `[start, stop]`.
///
/// A negative increment encodes `1 / |inc|`, which keeps ticks like 0.1 or
/// 0.3 free of accumulated floating point error.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !(start.is_finite() && stop.is_finite()) || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi, reverse) = if stop < start { (stop, start, true) } else { (start, stop, false) };
    let inc = tick_increment(lo, hi, count);
    if inc == 0.0 || !inc.is_finite() {
        return Vec::new();
    }
    let mut ticks: Vec<f64> = if inc > 0.0 {
        let i0 = (lo / inc).ceil() as i64;
        let i1 = (hi / inc).floor() as i64;
        (i0..=i1).map(|i| i as f64 * inc).collect()
    } else {
        let inv = -inc;
        let i0 = (lo * inv).ceil() as i64;
        let i1 = (hi * inv).floor() as i64;
        (i0..=i1).map(|i| i as f64 / inv).collect()
    };
    if reverse {
        ticks.reverse();
    }
    ticks
}
