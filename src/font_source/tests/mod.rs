//! Outline and font source tests

mod gpos_kerning;
mod outline_transform;
