//! fontcostumes
//!
//! Converts a TTF/OTF font into per-glyph SVG costumes and a flattened
//! pairwise kerning table, for runtimes that can only place pre-rendered
//! images.
pub mod charset;
pub mod core;
pub mod export;
pub mod font_source;
pub mod io;
pub mod logging;
