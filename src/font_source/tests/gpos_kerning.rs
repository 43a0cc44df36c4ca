//! Kerning source selection and pair lookups on built fonts

use super::sfnt_builder::{build, Gpos, PairPos};
use crate::font_source::kerning::{KerningScript, KerningSource};
use crate::font_source::{FontSource, GlyphHandle, TrueTypeFont};

fn glyph(id: u16) -> GlyphHandle {
    GlyphHandle { id, mapped: true }
}

fn pair(font: &TrueTypeFont<'_>, left: u16, right: u16) -> f64 {
    font.kerning_adjustment(glyph(left), glyph(right))
}

/// DFLT kerns 1,2 by -50 and latn kerns it by -80
fn two_scripts() -> Gpos {
    Gpos {
        scripts: vec![(b"DFLT", Some(vec![0])), (b"latn", Some(vec![1]))],
        features: vec![(b"kern", vec![0]), (b"kern", vec![1])],
        lookups: vec![
            PairPos::Glyphs { left: 1, pairs: vec![(2, -50)] },
            PairPos::Glyphs { left: 1, pairs: vec![(2, -80)] },
        ],
    }
}

#[test]
fn test_dflt_script_wins_by_default() {
    let data = build(Some(&two_scripts()), None);
    let font = TrueTypeFont::parse(&data, "Built").expect("built font parses");

    assert_eq!(font.kerning_source(), &KerningSource::Gpos(vec![0]));
    assert_eq!(pair(&font, 1, 2), -50.0);
}

#[test]
fn test_latn_preference_reads_latn_first() {
    let data = build(Some(&two_scripts()), None);
    let font = TrueTypeFont::parse_with_script(&data, "Built", KerningScript::Latn)
        .expect("built font parses");

    assert_eq!(font.kerning_source(), &KerningSource::Gpos(vec![1]));
    assert_eq!(pair(&font, 1, 2), -80.0);
}

#[test]
fn test_latn_is_used_when_dflt_is_missing() {
    let gpos = Gpos {
        scripts: vec![(b"latn", Some(vec![0]))],
        features: vec![(b"kern", vec![0])],
        lookups: vec![PairPos::Glyphs { left: 3, pairs: vec![(4, 25)] }],
    };
    let data = build(Some(&gpos), None);
    let font = TrueTypeFont::parse(&data, "Built").expect("built font parses");

    assert_eq!(font.kerning_source(), &KerningSource::Gpos(vec![0]));
    assert_eq!(pair(&font, 3, 4), 25.0);
    assert_eq!(pair(&font, 4, 3), 0.0);
}

#[test]
fn test_only_the_first_kern_feature_is_used() {
    let gpos = Gpos {
        scripts: vec![(b"DFLT", Some(vec![0, 1, 2]))],
        features: vec![(b"mark", vec![2]), (b"kern", vec![0]), (b"kern", vec![1])],
        lookups: vec![
            PairPos::Glyphs { left: 1, pairs: vec![(2, -50)] },
            PairPos::Glyphs { left: 1, pairs: vec![(3, -20)] },
            PairPos::Glyphs { left: 1, pairs: vec![(3, -99)] },
        ],
    };
    let data = build(Some(&gpos), None);
    let font = TrueTypeFont::parse(&data, "Built").expect("built font parses");

    assert_eq!(font.kerning_source(), &KerningSource::Gpos(vec![0]));
    assert_eq!(pair(&font, 1, 2), -50.0);
    assert_eq!(pair(&font, 1, 3), 0.0);
}

#[test]
fn test_glyph_pairs_fall_through_to_later_lookups() {
    let gpos = Gpos {
        scripts: vec![(b"DFLT", Some(vec![0]))],
        features: vec![(b"kern", vec![0, 1])],
        lookups: vec![
            PairPos::Glyphs { left: 1, pairs: vec![(2, -50)] },
            PairPos::Glyphs { left: 1, pairs: vec![(2, -10), (3, -20)] },
        ],
    };
    let data = build(Some(&gpos), None);
    let font = TrueTypeFont::parse(&data, "Built").expect("built font parses");

    assert_eq!(pair(&font, 1, 2), -50.0);
    assert_eq!(pair(&font, 1, 3), -20.0);
}

#[test]
fn test_class_pairs_answer_for_every_covered_left_glyph() {
    let gpos = Gpos {
        scripts: vec![(b"DFLT", Some(vec![0]))],
        features: vec![(b"kern", vec![0, 1])],
        lookups: vec![
            PairPos::Classes {
                coverage: vec![1, 4],
                left_classes: vec![(1, 1), (4, 1)],
                right_classes: vec![(2, 1), (3, 2)],
                matrix: vec![vec![0, 0, 0], vec![0, -30, -45]],
            },
            PairPos::Glyphs { left: 1, pairs: vec![(5, -70)] },
        ],
    };
    let data = build(Some(&gpos), None);
    let font = TrueTypeFont::parse(&data, "Built").expect("built font parses");

    assert_eq!(pair(&font, 1, 2), -30.0);
    assert_eq!(pair(&font, 4, 3), -45.0);
    // right glyph 5 is class 0, and the class matrix still decides
    assert_eq!(pair(&font, 1, 5), 0.0);
    // left glyph 2 is not covered
    assert_eq!(pair(&font, 2, 2), 0.0);
}

#[test]
fn test_script_without_kern_feature_does_not_fall_back() {
    let gpos = Gpos {
        scripts: vec![(b"DFLT", Some(vec![]))],
        features: vec![],
        lookups: vec![],
    };
    let data = build(Some(&gpos), Some(&[(1, 2, -70)]));
    let font = TrueTypeFont::parse(&data, "Built").expect("built font parses");

    assert_eq!(font.kerning_source(), &KerningSource::Gpos(vec![]));
    assert_eq!(pair(&font, 1, 2), 0.0);
}

#[test]
fn test_script_without_default_language_yields_no_lookups() {
    let gpos = Gpos {
        scripts: vec![(b"DFLT", None)],
        features: vec![(b"kern", vec![0])],
        lookups: vec![PairPos::Glyphs { left: 1, pairs: vec![(2, -50)] }],
    };
    let data = build(Some(&gpos), None);
    let font = TrueTypeFont::parse(&data, "Built").expect("built font parses");

    assert_eq!(font.kerning_source(), &KerningSource::Gpos(vec![]));
    assert_eq!(pair(&font, 1, 2), 0.0);
}

#[test]
fn test_other_scripts_fall_back_to_kern_table() {
    let gpos = Gpos {
        scripts: vec![(b"cyrl", Some(vec![0]))],
        features: vec![(b"kern", vec![0])],
        lookups: vec![PairPos::Glyphs { left: 1, pairs: vec![(2, -50)] }],
    };
    let data = build(Some(&gpos), Some(&[(1, 2, -70), (2, 1, 15)]));
    let font = TrueTypeFont::parse(&data, "Built").expect("built font parses");

    assert_eq!(font.kerning_source(), &KerningSource::KernTable);
    assert_eq!(pair(&font, 1, 2), -70.0);
    assert_eq!(pair(&font, 2, 1), 15.0);
    assert_eq!(pair(&font, 1, 3), 0.0);
}

#[test]
fn test_kern_table_alone() {
    let data = build(None, Some(&[(6, 7, -12)]));
    let font = TrueTypeFont::parse(&data, "Built").expect("built font parses");

    assert_eq!(font.kerning_source(), &KerningSource::KernTable);
    assert_eq!(pair(&font, 6, 7), -12.0);
}

#[test]
fn test_font_without_kerning_data() {
    let data = build(None, None);
    let font = TrueTypeFont::parse(&data, "Built").expect("built font parses");

    assert_eq!(font.kerning_source(), &KerningSource::None);
    assert_eq!(pair(&font, 1, 2), 0.0);
}
