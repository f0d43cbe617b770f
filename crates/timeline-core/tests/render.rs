// File: crates/timeline-core/tests/render.rs
// Purpose: Structure of a rendered timeline (segments, axes, legend, tooltip, layout).

use timeline_core::{
    draw_area_stack, AreaStack, AxisBounds, ChartError, DataPoint, Document, TimelineContext, TimelineOptions,
    TooltipLookup, PALETTE,
};

fn page() -> Document {
    let mut doc = Document::new();
    let frame = doc.append(doc.root(), "div");
    doc.set_attr(frame, "class", "frame");
    let container = doc.append(frame, "div");
    doc.set_attr(container, "id", "timeline");
    doc
}

fn ctx() -> TimelineContext {
    TimelineContext::new(80.0, -10.0, TooltipLookup::default())
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn example() -> Vec<DataPoint> {
    vec![
        DataPoint::new("00:00:00.000").with("a", 1.0).with("b", 2.0),
        DataPoint::new("00:00:01.000").with("a", 3.0).with("b", 1.0),
    ]
}

fn series(n_labels: usize, n_points: usize) -> (Vec<String>, Vec<DataPoint>) {
    let labels: Vec<String> = (0..n_labels).map(|i| format!("op{i}")).collect();
    let values = (0..n_points)
        .map(|p| {
            let x = format!("00:00:{:02}.{:03}", p / 4, (p % 4) * 250);
            labels.iter().enumerate().fold(DataPoint::new(x), |d, (i, l)| d.with(l.clone(), (p + i) as f64))
        })
        .collect();
    (labels, values)
}

#[test]
fn one_rect_per_label_and_point() {
    for (n_labels, n_points) in [(1, 1), (2, 2), (3, 7), (5, 20)] {
        let (labels, values) = series(n_labels, n_points);
        let mut doc = page();
        let chart = draw_area_stack(&mut doc, "#timeline", &labels, &values, AxisBounds::default(), &ctx()).expect("draw");

        let groups = doc.select_children(chart.plot, "g.cost");
        assert_eq!(groups.len(), n_labels);
        let rects: usize = groups.iter().map(|&g| doc.select_children(g, "rect").len()).sum();
        assert_eq!(rects, n_labels * n_points);
        assert_eq!(chart.segments.iter().map(Vec::len).sum::<usize>(), n_labels * n_points);
    }
}

#[test]
fn example_geometry() {
    let mut doc = page();
    let chart = draw_area_stack(&mut doc, "#timeline", &labels(&["a", "b"]), &example(), AxisBounds::default(), &ctx())
        .expect("draw");

    assert_eq!(chart.y_scale.vmax, 4.0);
    assert_eq!(doc.attr(chart.svg, "width"), Some("850"));
    assert_eq!(doc.attr(chart.svg, "height"), Some("300"));
    assert_eq!(doc.attr(chart.plot, "transform"), Some("translate(80,20)"));

    // layer a, first bucket: 0..1 of 4 over a 250px plot
    let r = chart.segments[0][0];
    assert_eq!(doc.attr(r, "x"), Some("18"));
    assert_eq!(doc.attr(r, "y"), Some("187.5"));
    assert_eq!(doc.attr(r, "height"), Some("62.5"));
    assert_eq!(doc.attr(r, "width"), Some("344"));

    // layer b, second bucket: 3..4, top of the tallest bar
    let r = chart.segments[1][1];
    assert_eq!(doc.attr(r, "x"), Some("369"));
    assert_eq!(doc.attr(r, "y"), Some("0"));
    assert_eq!(doc.attr(r, "height"), Some("62.5"));
}

#[test]
fn x_axis_shows_first_and_last_time_only() {
    let (labels, values) = series(2, 9);
    let mut doc = page();
    let chart = draw_area_stack(&mut doc, "#timeline", &labels, &values, AxisBounds::default(), &ctx()).expect("draw");

    let ticks: Vec<&str> = doc
        .select_all(chart.x_axis, "g.tick")
        .into_iter()
        .flat_map(|t| doc.select_children(t, "text"))
        .filter_map(|t| doc.text(t))
        .collect();
    assert_eq!(ticks, vec!["00:00:00.000", "00:00:02.000"]);
    assert_eq!(doc.attr(chart.x_axis, "transform"), Some("translate(0,250)"));
}

#[test]
fn y_axis_has_nice_ticks_and_unit_label() {
    let mut doc = page();
    let chart = draw_area_stack(&mut doc, "#timeline", &labels(&["a", "b"]), &example(), AxisBounds::default(), &ctx())
        .expect("draw");

    let ticks: Vec<&str> = doc
        .select_all(chart.y_axis, "g.tick")
        .into_iter()
        .flat_map(|t| doc.select_children(t, "text"))
        .filter_map(|t| doc.text(t))
        .collect();
    assert_eq!(ticks, vec!["0", "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4"]);

    let unit = *doc.select_children(chart.y_axis, "text").last().expect("unit label");
    assert_eq!(doc.text(unit), Some("ms"));
    assert_eq!(doc.attr(unit, "transform"), Some("translate(0,-10)"));
}

#[test]
fn legend_lists_labels_in_reverse_color_order() {
    let mut doc = page();
    let chart = draw_area_stack(&mut doc, "#timeline", &labels(&["a", "b", "c"]), &example(), AxisBounds::default(), &ctx())
        .expect("draw");

    assert_eq!(doc.select_children(chart.plot, "g.legend").len(), 3);
    let fills: Vec<&str> = chart.legend_swatches.iter().filter_map(|&s| doc.style(s, "fill")).collect();
    assert_eq!(fills, vec![PALETTE[2], PALETTE[1], PALETTE[0]]);

    let layer_fills: Vec<&str> = chart.layer_groups.iter().filter_map(|&g| doc.style(g, "fill")).collect();
    assert_eq!(layer_fills, vec![PALETTE[0], PALETTE[1], PALETTE[2]]);

    assert_eq!(doc.attr(chart.legend_rows[2], "transform"), Some("translate(30,38)"));
    // plot width 730: swatch sits 20px left of the right edge
    assert_eq!(doc.attr(chart.legend_swatches[0], "x"), Some("710"));
}

#[test]
fn palette_cycles_past_nine_labels() {
    let (labels, values) = series(11, 3);
    let mut doc = page();
    let chart = draw_area_stack(&mut doc, "#timeline", &labels, &values, AxisBounds::default(), &ctx()).expect("draw");

    assert_eq!(chart.legend_swatches.len(), 11);
    assert_eq!(chart.colors[9], PALETTE[0]);
    assert_eq!(chart.colors[10], PALETTE[1]);
}

#[test]
fn tooltip_group_starts_hidden() {
    let mut doc = page();
    let chart = draw_area_stack(&mut doc, "#timeline", &labels(&["a"]), &example(), AxisBounds::default(), &ctx())
        .expect("draw");

    assert_eq!(doc.style(chart.tooltip, "display"), Some("none"));
    let bg = doc.select_children(chart.tooltip, "rect")[0];
    assert_eq!(doc.attr(bg, "fill"), Some("white"));
    assert_eq!(doc.style(bg, "opacity"), Some("0.5"));
    assert_eq!(doc.attr(chart.tooltip_text, "font-weight"), Some("bold"));
    assert_eq!(doc.text(chart.tooltip_text), None);
}

#[test]
fn container_frame_is_styled() {
    let mut doc = page();
    draw_area_stack(&mut doc, "#timeline", &labels(&["a"]), &example(), AxisBounds::default(), &ctx()).expect("draw");

    let frame = doc.select("div.frame").expect("frame");
    assert_eq!(doc.style(frame, "padding"), Some("8px 0 8px 8px"));
    assert_eq!(doc.style(frame, "border-right"), Some("0px solid white"));
}

#[test]
fn missing_container_and_empty_labels_fail() {
    let mut doc = page();
    let err = draw_area_stack(&mut doc, "#nope", &labels(&["a"]), &example(), AxisBounds::default(), &ctx()).unwrap_err();
    assert_eq!(err, ChartError::ContainerNotFound("#nope".to_string()));

    let err = draw_area_stack(&mut doc, "#timeline", &[], &example(), AxisBounds::default(), &ctx()).unwrap_err();
    assert_eq!(err, ChartError::NoSeries);
    // nothing was appended on failure
    let container = doc.select("#timeline").unwrap();
    assert!(doc.children(container).is_empty());
}

#[test]
fn bounds_are_ignored_unless_requested() {
    let bounds = AxisBounds::new(0.0, 1.0, 0.0, 10.0);

    let mut doc = page();
    let chart = draw_area_stack(&mut doc, "#timeline", &labels(&["a", "b"]), &example(), bounds, &ctx()).expect("draw");
    assert_eq!(chart.y_scale.vmax, 4.0);

    let opts = TimelineOptions { honor_y_bounds: true, ..TimelineOptions::default() };
    let mut doc = page();
    let chart = AreaStack::new(labels(&["a", "b"]), example())
        .with_bounds(bounds)
        .draw(&mut doc, "#timeline", &ctx(), &opts)
        .expect("draw");
    assert_eq!(chart.y_scale.vmax, 10.0);
    assert_eq!(doc.attr(chart.segments[1][1], "y"), Some("150"));
}

#[test]
fn empty_values_render_axes_without_segments() {
    let mut doc = page();
    let chart = draw_area_stack(&mut doc, "#timeline", &labels(&["a"]), &[], AxisBounds::default(), &ctx()).expect("draw");
    assert!(chart.segments[0].is_empty());
    assert!(doc.select_all(chart.x_axis, "g.tick").is_empty());
}

#[test]
fn data_and_options_deserialize_from_json() {
    let d: DataPoint = serde_json::from_str(r#"{"x": "00:00:01.000", "a": 1, "b": 2.5}"#).expect("point");
    assert_eq!(d.x, "00:00:01.000");
    assert_eq!(d.value("a"), 1.0);
    assert_eq!(d.value("b"), 2.5);
    assert!(d.value("c").is_nan());

    let opts: TimelineOptions = serde_json::from_str(r#"{"width": 1000, "unit_label": "s"}"#).expect("options");
    assert_eq!(opts.width, 1000);
    assert_eq!(opts.unit_label, "s");
    assert_eq!(opts.height, 300);
    assert_eq!(opts.palette.len(), PALETTE.len());
}
