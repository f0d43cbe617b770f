// File: crates/timeline-render-skia/tests/path.rs
// Purpose: Parsing of the svg attribute subset painted by the raster backend.

use timeline_render_skia::path::{parse_length, parse_path, parse_translate, PathCmd};

#[test]
fn axis_domain_paths() {
    let left = parse_path("M-6,250.5H0.5V0.5H-6").expect("left axis");
    assert_eq!(
        left,
        vec![
            PathCmd::MoveTo(-6.0, 250.5),
            PathCmd::LineTo(0.5, 250.5),
            PathCmd::LineTo(0.5, 0.5),
            PathCmd::LineTo(-6.0, 0.5),
        ]
    );

    let bottom = parse_path("M10.5,6V0.5H720.5V6").expect("bottom axis");
    assert_eq!(bottom.last(), Some(&PathCmd::LineTo(720.5, 6.0)));
}

#[test]
fn implicit_lines_and_close() {
    let p = parse_path("M 0 0 10 0 10 10 Z").expect("path");
    assert_eq!(
        p,
        vec![PathCmd::MoveTo(0.0, 0.0), PathCmd::LineTo(10.0, 0.0), PathCmd::LineTo(10.0, 10.0), PathCmd::Close]
    );
}

#[test]
fn unsupported_commands_are_rejected() {
    assert!(parse_path("M0,0C1,1 2,2 3,3").is_none());
    assert!(parse_path("M0").is_none());
    assert!(parse_path("M0,#").is_none());
}

#[test]
fn translate_and_lengths() {
    assert_eq!(parse_translate("translate(80,20)"), Some((80.0, 20.0)));
    assert_eq!(parse_translate("translate(-5.5, 3)"), Some((-5.5, 3.0)));
    assert_eq!(parse_translate("translate(12)"), Some((12.0, 0.0)));
    assert_eq!(parse_translate("rotate(90)"), None);

    assert_eq!(parse_length("12px", 10.0), Some(12.0));
    assert_eq!(parse_length("1.2em", 10.0), Some(12.0));
    assert_eq!(parse_length("850", 10.0), Some(850.0));
    assert_eq!(parse_length("NaN", 10.0).map(f32::is_nan), Some(true));
}
