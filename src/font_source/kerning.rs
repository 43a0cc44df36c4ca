//! Pair kerning lookups
//!
//! Kerning comes from the first GPOS `kern` feature of the preferred script,
//! `DFLT` before `latn` unless [`KerningScript::Latn`] asks otherwise. Once
//! either script exists the legacy `kern` table is no longer consulted, even
//! if that script has no `kern` feature. Fonts without either script fall
//! back to the `kern` table.

use serde::{Deserialize, Serialize};
use ttf_parser::gpos::{PairAdjustment, PositioningSubtable};
use ttf_parser::opentype_layout::LayoutTable;
use ttf_parser::{Face, GlyphId, Tag};

const KERN_FEATURE: Tag = Tag::from_bytes(b"kern");
const DFLT_SCRIPT: Tag = Tag::from_bytes(b"DFLT");
const LATN_SCRIPT: Tag = Tag::from_bytes(b"latn");

/// GPOS script whose `kern` feature is used when a font has both
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum KerningScript {
    /// `DFLT`, then `latn`
    #[default]
    Dflt,
    /// `latn`, then `DFLT`; for fonts that keep Latin pairs out of `DFLT`
    Latn,
}

impl KerningScript {
    fn search_order(self) -> [Tag; 2] {
        match self {
            KerningScript::Dflt => [DFLT_SCRIPT, LATN_SCRIPT],
            KerningScript::Latn => [LATN_SCRIPT, DFLT_SCRIPT],
        }
    }
}

/// Where pair values are looked up for a given face
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KerningSource {
    /// GPOS lookup indices of the chosen `kern` feature
    Gpos(Vec<u16>),
    /// Legacy `kern` table
    KernTable,
    None,
}

impl KerningSource {
    /// Pick the kerning source for a face
    pub fn detect(face: &Face<'_>, script: KerningScript) -> Self {
        let tables = face.tables();
        if let Some(lookups) = tables
            .gpos
            .as_ref()
            .and_then(|gpos| kern_lookup_indices(gpos, script))
        {
            return KerningSource::Gpos(lookups);
        }
        if tables.kern.is_some() {
            KerningSource::KernTable
        } else {
            KerningSource::None
        }
    }

    /// Horizontal adjustment in design units, 0 when no pair matches
    pub fn pair_value(&self, face: &Face<'_>, left: GlyphId, right: GlyphId) -> i16 {
        let value = match self {
            KerningSource::Gpos(lookups) => face
                .tables()
                .gpos
                .as_ref()
                .and_then(|gpos| gpos_pair_value(gpos, lookups, left, right)),
            KerningSource::KernTable => kern_table_value(face, left, right),
            KerningSource::None => None,
        };
        value.unwrap_or(0)
    }
}

/// Lookup indices of the first `kern` feature in the default language
/// system of the preferred script. `None` when neither script exists.
fn kern_lookup_indices(gpos: &LayoutTable<'_>, script: KerningScript) -> Option<Vec<u16>> {
    let script = script
        .search_order()
        .iter()
        .find_map(|tag| gpos.scripts.find(*tag))?;
    let Some(language) = script.default_language else {
        return Some(Vec::new());
    };

    let lookups = language
        .feature_indices
        .into_iter()
        .filter_map(|index| gpos.features.get(index))
        .find(|feature| feature.tag == KERN_FEATURE)
        .map(|feature| feature.lookup_indices.into_iter().collect())
        .unwrap_or_default();
    Some(lookups)
}

/// Value of the first subtable that holds the pair
///
/// A class-based subtable covering `left` always answers, with 0 for an
/// empty cell. A glyph-pair subtable only answers when it lists `right`.
fn gpos_pair_value(
    gpos: &LayoutTable<'_>,
    lookups: &[u16],
    left: GlyphId,
    right: GlyphId,
) -> Option<i16> {
    for &index in lookups {
        let Some(lookup) = gpos.lookups.get(index) else {
            continue;
        };
        for subtable in lookup.subtables.into_iter::<PositioningSubtable>() {
            let PositioningSubtable::Pair(pair) = subtable else {
                continue;
            };
            if let Some(value) = pair_adjustment_value(&pair, left, right) {
                return Some(value);
            }
        }
    }
    None
}

fn pair_adjustment_value(pair: &PairAdjustment<'_>, left: GlyphId, right: GlyphId) -> Option<i16> {
    match pair {
        PairAdjustment::Format1 { coverage, sets } => {
            let set_index = coverage.get(left)?;
            let (first, _) = sets.get(set_index)?.get(right)?;
            Some(first.x_advance)
        }
        PairAdjustment::Format2 {
            coverage,
            classes,
            matrix,
        } => {
            if !coverage.contains(left) {
                return None;
            }
            let class_pair = (classes.0.get(left), classes.1.get(right));
            let (first, _) = matrix.get(class_pair)?;
            Some(first.x_advance)
        }
    }
}

fn kern_table_value(face: &Face<'_>, left: GlyphId, right: GlyphId) -> Option<i16> {
    let kern = face.tables().kern?;
    kern.subtables
        .into_iter()
        .filter(|subtable| subtable.horizontal && !subtable.variable)
        .find_map(|subtable| subtable.glyphs_kerning(left, right))
}
