//! Costume SVG envelope
//!
//! Every costume is a 480x360 canvas, the default stage size of the target
//! runtime. A transparent 200x200 square at (140, 80) gives alignment tools
//! a fixed reference box. Glyphs are drawn 240px per em with their origin at
//! (180, 100).

pub const CANVAS_WIDTH: u32 = 480;
pub const CANVAS_HEIGHT: u32 = 360;

pub const GLYPH_SIZE: f64 = 240.0;
pub const GLYPH_X: f64 = 180.0;
pub const GLYPH_Y: f64 = 100.0;

/// Placeholder color; the runtime recolors costumes itself
pub const COSTUME_FILL: &str = "red";

pub const SVG_EXTENSION: &str = "svg";

const REFERENCE_BOX: (u32, u32, u32, u32) = (140, 80, 200, 200);

/// Wrap an SVG fragment in the costume canvas
pub fn wrap_costume(body: &str) -> String {
    let (x, y, width, height) = REFERENCE_BOX;
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
         version=\"1.1\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\
         <rect fill-opacity=\"0\" width=\"{width}\" height=\"{height}\" x=\"{x}\" y=\"{y}\" />\
         {body}</svg>",
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT,
    )
}
