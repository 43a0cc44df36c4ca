//! Deterministic font source for tests
//!
//! Every mapped character is a box as wide as its advance and 700 units
//! tall. Glyph ids are the character's code point.

use super::outline::design_to_canvas;
use super::{FontSource, GlyphHandle, GlyphOutline};
use kurbo::{BezPath, Point};
use std::collections::{HashMap, HashSet};

const DEFAULT_ADVANCE: f64 = 500.0;
const BOX_HEIGHT: f64 = 700.0;

pub(crate) struct StubFont {
    units_per_em: f64,
    advances: HashMap<char, f64>,
    kerning: HashMap<(u16, u16), f64>,
    unmapped: HashSet<char>,
}

impl StubFont {
    pub(crate) fn new(units_per_em: f64) -> Self {
        Self {
            units_per_em,
            advances: HashMap::new(),
            kerning: HashMap::new(),
            unmapped: HashSet::new(),
        }
    }

    pub(crate) fn with_advance(mut self, c: char, units: f64) -> Self {
        self.advances.insert(c, units);
        self
    }

    pub(crate) fn with_kerning(mut self, left: char, right: char, units: f64) -> Self {
        self.kerning.insert((left as u16, right as u16), units);
        self
    }

    pub(crate) fn with_unmapped(mut self, c: char) -> Self {
        self.unmapped.insert(c);
        self
    }

    fn design_advance(&self, c: char) -> f64 {
        if self.unmapped.contains(&c) {
            return 0.0;
        }
        self.advances.get(&c).copied().unwrap_or(DEFAULT_ADVANCE)
    }
}

impl FontSource for StubFont {
    fn outline(&self, c: char, size: f64, x: f64, y: f64) -> GlyphOutline {
        let mut path = BezPath::new();
        if !self.unmapped.contains(&c) {
            let width = self.design_advance(c);
            path.move_to(Point::new(0.0, 0.0));
            path.line_to(Point::new(width, 0.0));
            path.line_to(Point::new(width, BOX_HEIGHT));
            path.line_to(Point::new(0.0, BOX_HEIGHT));
            path.close_path();
            path.apply_affine(design_to_canvas(size / self.units_per_em, x, y));
        }
        GlyphOutline::new(path)
    }

    fn advance_width(&self, c: char, scale: f64) -> f64 {
        self.design_advance(c) * (1.0 / self.units_per_em * scale)
    }

    fn kerning_adjustment(&self, left: GlyphHandle, right: GlyphHandle) -> f64 {
        self.kerning
            .get(&(left.id, right.id))
            .copied()
            .unwrap_or(0.0)
    }

    fn units_per_em(&self) -> f64 {
        self.units_per_em
    }

    fn char_to_glyph(&self, c: char) -> GlyphHandle {
        if self.unmapped.contains(&c) {
            GlyphHandle::NOTDEF
        } else {
            GlyphHandle {
                id: c as u16,
                mapped: true,
            }
        }
    }
}
