//! Export passes
//!
//! Costumes and kerning data are independent passes over the same charset
//! and font; neither reads the other's output.

pub mod costumes;
pub mod kerning;
pub mod svg;

// Explicit re-exports for public API
pub use costumes::{costume_svg, CostumeExporter};
pub use kerning::{AdvanceTerm, KerningTable, KERNING_FILE};
