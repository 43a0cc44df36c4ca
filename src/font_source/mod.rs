//! Font source capability
//!
//! Everything the export passes need to know about a font goes through the
//! [`FontSource`] trait, so the passes can run against a parsed TTF/OTF file
//! ([`TrueTypeFont`]) or against a stub in tests.

pub mod kerning;
pub mod metrics;
pub mod outline;
pub mod truetype;

#[cfg(test)]
pub(crate) mod stub;
#[cfg(test)]
mod tests;

// Explicit re-exports for public API
pub use metrics::FontInfo;
pub use outline::GlyphOutline;
pub use truetype::TrueTypeFont;

/// A resolved glyph for one character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphHandle {
    pub id: u16,
    /// false when the character fell back to `.notdef`
    pub mapped: bool,
}

impl GlyphHandle {
    pub const NOTDEF: GlyphHandle = GlyphHandle {
        id: 0,
        mapped: false,
    };
}

/// Read-only font queries used by the costume and kerning passes
///
/// Characters the font does not map resolve to a degenerate glyph rather
/// than an error; callers pass those results through unchanged.
pub trait FontSource {
    /// Outline of `c` at `size` pixels per em, origin (baseline start) at
    /// `(x, y)` in a y-down canvas.
    fn outline(&self, c: char, size: f64, x: f64, y: f64) -> GlyphOutline;

    /// Advance width of `c` at a font size of `scale`
    fn advance_width(&self, c: char, scale: f64) -> f64;

    /// Pair adjustment in font design units
    fn kerning_adjustment(&self, left: GlyphHandle, right: GlyphHandle) -> f64;

    fn units_per_em(&self) -> f64;

    fn char_to_glyph(&self, c: char) -> GlyphHandle;
}
