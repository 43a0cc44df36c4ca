//! Glyph outlines as kurbo paths
//!
//! Fonts describe glyphs in design units with y pointing up. Costumes live
//! in a y-down SVG canvas, so outlines are scaled and flipped on the way in
//! and rounded to two decimals on the way out.

use kurbo::{Affine, BezPath, PathEl, Point};

const DECIMALS: f64 = 100.0;

/// One glyph's vector path plus its render fill
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphOutline {
    pub path: BezPath,
    pub fill: Option<String>,
}

impl GlyphOutline {
    pub fn new(path: BezPath) -> Self {
        Self { path, fill: None }
    }

    pub fn set_fill(&mut self, fill: impl Into<String>) {
        self.fill = Some(fill.into());
    }

    /// True for glyphs without any contours, such as space or an empty `.notdef`
    pub fn is_empty(&self) -> bool {
        self.path.elements().is_empty()
    }

    /// SVG path data with coordinates rounded to two decimals
    pub fn path_data(&self) -> String {
        let rounded: BezPath = self.path.iter().map(round_element).collect();
        rounded.to_svg()
    }

    /// The outline as a standalone `<path>` element
    pub fn to_svg(&self) -> String {
        match &self.fill {
            Some(fill) => format!("<path d=\"{}\" fill=\"{}\"/>", self.path_data(), fill),
            None => format!("<path d=\"{}\"/>", self.path_data()),
        }
    }
}

/// Map from font design units to a y-down canvas
///
/// `scale` is pixels per design unit; `(x, y)` is where the glyph origin
/// lands on the canvas.
pub fn design_to_canvas(scale: f64, x: f64, y: f64) -> Affine {
    Affine::new([scale, 0.0, 0.0, -scale, x, y])
}

/// Collects `ttf_parser` outline callbacks into a [`BezPath`]
#[derive(Default)]
pub struct OutlinePen {
    path: BezPath,
}

impl OutlinePen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self, transform: Affine) -> BezPath {
        let mut path = self.path;
        path.apply_affine(transform);
        path
    }
}

impl ttf_parser::OutlineBuilder for OutlinePen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(pt(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(pt(x, y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.path.quad_to(pt(x1, y1), pt(x, y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.path.curve_to(pt(x1, y1), pt(x2, y2), pt(x, y));
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

fn pt(x: f32, y: f32) -> Point {
    Point::new(x as f64, y as f64)
}

fn round_element(el: PathEl) -> PathEl {
    match el {
        PathEl::MoveTo(p) => PathEl::MoveTo(round_point(p)),
        PathEl::LineTo(p) => PathEl::LineTo(round_point(p)),
        PathEl::QuadTo(c, p) => PathEl::QuadTo(round_point(c), round_point(p)),
        PathEl::CurveTo(c1, c2, p) => {
            PathEl::CurveTo(round_point(c1), round_point(c2), round_point(p))
        }
        PathEl::ClosePath => PathEl::ClosePath,
    }
}

fn round_point(p: Point) -> Point {
    Point::new(round(p.x), round(p.y))
}

fn round(v: f64) -> f64 {
    let r = (v * DECIMALS).round() / DECIMALS;
    // avoid "-0" in path data
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
