//! Design-unit to canvas transform tests

use crate::font_source::outline::{design_to_canvas, GlyphOutline, OutlinePen};
use kurbo::{BezPath, PathEl, Point};
use ttf_parser::OutlineBuilder;

#[test]
fn test_design_to_canvas_flips_and_offsets() {
    // 1000 upm at 240px puts the glyph origin at (180, 100)
    let transform = design_to_canvas(240.0 / 1000.0, 180.0, 100.0);

    let origin = transform * Point::new(0.0, 0.0);
    assert_eq!(origin, Point::new(180.0, 100.0));

    let cap = transform * Point::new(500.0, 700.0);
    assert!((cap.x - 300.0).abs() < 1e-9);
    assert!((cap.y - (100.0 - 168.0)).abs() < 1e-9);
}

#[test]
fn test_pen_collects_every_segment_kind() {
    let mut pen = OutlinePen::new();
    pen.move_to(0.0, 0.0);
    pen.line_to(100.0, 0.0);
    pen.quad_to(150.0, 50.0, 100.0, 100.0);
    pen.curve_to(80.0, 120.0, 20.0, 120.0, 0.0, 100.0);
    pen.close();

    let path = pen.finish(kurbo::Affine::IDENTITY);
    let elements = path.elements();
    assert_eq!(elements.len(), 5);
    assert!(matches!(elements[0], PathEl::MoveTo(_)));
    assert!(matches!(elements[2], PathEl::QuadTo(_, _)));
    assert!(matches!(elements[3], PathEl::CurveTo(_, _, _)));
    assert_eq!(elements[4], PathEl::ClosePath);
}

#[test]
fn test_path_data_rounds_to_two_decimals() {
    let mut path = BezPath::new();
    path.move_to(Point::new(1.23456, 7.891));
    path.line_to(Point::new(-0.001, 2.0));
    path.close_path();

    let data = GlyphOutline::new(path).path_data();
    assert!(data.contains("1.23"), "{data}");
    assert!(data.contains("7.89"), "{data}");
    assert!(!data.contains("1.2345"), "{data}");
    assert!(!data.contains("-0"), "{data}");
}

#[test]
fn test_svg_element_carries_fill() {
    let mut path = BezPath::new();
    path.move_to(Point::new(0.0, 0.0));
    path.line_to(Point::new(10.0, 0.0));
    path.close_path();

    let mut outline = GlyphOutline::new(path);
    assert!(!outline.to_svg().contains("fill"));

    outline.set_fill("red");
    let svg = outline.to_svg();
    assert!(svg.starts_with("<path d=\""), "{svg}");
    assert!(svg.ends_with("\" fill=\"red\"/>"), "{svg}");
}

#[test]
fn test_empty_outline_renders_empty_path() {
    let outline = GlyphOutline::default();
    assert!(outline.is_empty());
    assert_eq!(outline.to_svg(), "<path d=\"\"/>");
}
