// File: crates/timeline-core/tests/stacking.rs
// Purpose: Stacking transform, timestamp codec and scale math.

use timeline_core::{
    format_timestamp, max_total, nice_ticks, parse_timestamp, stack_layers, BandScale, ChartError, DataPoint,
    ValueScale,
};

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn example() -> Vec<DataPoint> {
    vec![
        DataPoint::new("00:00:00.000").with("a", 1.0).with("b", 2.0),
        DataPoint::new("00:00:01.000").with("a", 3.0).with("b", 1.0),
    ]
}

#[test]
fn later_labels_stack_on_earlier_ones() {
    let layers = stack_layers(&labels(&["a", "b"]), &example()).expect("stack");
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].label, "a");

    let a: Vec<(f64, f64)> = layers[0].points.iter().map(|p| (p.y0, p.y)).collect();
    let b: Vec<(f64, f64)> = layers[1].points.iter().map(|p| (p.y0, p.y)).collect();
    assert_eq!(a, vec![(0.0, 1.0), (0.0, 3.0)]);
    assert_eq!(b, vec![(1.0, 2.0), (3.0, 1.0)]);

    let totals: Vec<f64> = layers[1].points.iter().map(|p| p.y1()).collect();
    assert_eq!(totals, vec![3.0, 4.0]);
    assert_eq!(max_total(&layers), 4.0);
}

#[test]
fn stacked_points_keep_raw_timestamp() {
    let layers = stack_layers(&labels(&["a"]), &example()).expect("stack");
    assert_eq!(layers[0].points[1].raw_x, "00:00:01.000");
    assert_eq!(format_timestamp(layers[0].points[1].x), "00:00:01.000");
}

#[test]
fn missing_field_is_nan_and_skipped_by_max() {
    let values = vec![
        DataPoint::new("00:00:00.000").with("a", 2.0),
        DataPoint::new("00:00:00.500").with("a", 1.0).with("b", 1.0),
    ];
    let layers = stack_layers(&labels(&["a", "b"]), &values).expect("stack");
    assert!(layers[1].points[0].y.is_nan());
    assert_eq!(max_total(&layers), 2.0);
}

#[test]
fn empty_labels_and_bad_timestamps_are_errors() {
    assert_eq!(stack_layers(&[], &example()), Err(ChartError::NoSeries));

    let bad = vec![DataPoint::new("00:00:00.000").with("a", 1.0), DataPoint::new("12:34").with("a", 1.0)];
    assert_eq!(
        stack_layers(&labels(&["a"]), &bad),
        Err(ChartError::InvalidTimestamp { index: 1, value: "12:34".to_string() })
    );
}

#[test]
fn timestamp_requires_millisecond_precision() {
    assert!(parse_timestamp("23:59:59.999").is_some());
    assert!(parse_timestamp("23:59:59").is_none());
    assert!(parse_timestamp("23:59:59.5").is_none());
    assert!(parse_timestamp("25:00:00.000").is_none());
    let t = parse_timestamp("07:08:09.010").expect("parse");
    assert_eq!(format_timestamp(t), "07:08:09.010");
}

#[test]
fn band_scale_rounds_steps_and_centers_leftover() {
    let t0 = parse_timestamp("00:00:00.000").unwrap();
    let t1 = parse_timestamp("00:00:01.000").unwrap();
    let x = BandScale::new([t0, t1, t0], (10.0, 720.0), 0.02);

    // duplicates collapse into one band
    assert_eq!(x.domain(), &[t0, t1]);
    assert_eq!(x.position(t0), Some(18.0));
    assert_eq!(x.position(t1), Some(369.0));
    assert_eq!(x.bandwidth(), 344.0);
    assert_eq!(x.center(t1), Some(541.0));
}

#[test]
fn value_scale_is_inverted_and_handles_flat_domain() {
    let y = ValueScale::new_linear(0.0, 250.0, 0.0, 4.0);
    assert_eq!(y.to_px(0.0), 250.0);
    assert_eq!(y.to_px(4.0), 0.0);
    assert_eq!(y.to_px(1.0), 187.5);
    assert_eq!(y.from_px(125.0), 2.0);

    let flat = ValueScale::new_linear(0.0, 250.0, 0.0, 0.0);
    assert_eq!(flat.to_px(0.0), 125.0);
    assert_eq!(flat.ticks(7), vec![0.0]);
}

#[test]
fn nice_ticks_pick_round_steps() {
    assert_eq!(nice_ticks(0.0, 4.0, 7), vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0]);
    assert_eq!(nice_ticks(0.0, 1000.0, 7), vec![0.0, 200.0, 400.0, 600.0, 800.0, 1000.0]);
    assert_eq!(nice_ticks(0.0, 37.0, 7), vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0]);
    assert!(nice_ticks(0.0, f64::NAN, 7).is_empty());
}
