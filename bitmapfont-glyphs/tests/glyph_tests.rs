//! Integration tests for BDF loading and glyph selection.

mod common;

use bitmapfont_config::Variant;
use bitmapfont_glyphs::{
    BdfError, FontType, GlyphResolver, GlyphSource, GlyphTable, ProviderSet, ResolverOptions,
};
use common::{TestGlyph, bdf_source, write_temp_file};

fn block(codepoint: i32) -> TestGlyph {
    TestGlyph {
        codepoint,
        bbx: (8, 2, 0, 0),
        rows: vec!["FF", "FF"],
    }
}

#[test]
fn test_load_bdf_from_disk() {
    let src = bdf_source(12, &[block(0x41), block(0x2500)]);
    let (path, _dir) = write_temp_file("fixed.bdf", &src);

    let table = GlyphTable::load_bdf("fixed", &path).unwrap();
    assert_eq!(table.name(), "fixed");
    assert_eq!(table.pixel_size(), 12);
    assert_eq!(table.len(), 2);
    let glyph = table.lookup_glyph(0x41, 12).unwrap();
    assert_eq!(glyph.ink(), 16);
}

#[test]
fn test_load_missing_file() {
    let (_, dir) = write_temp_file("unused.bdf", "");
    let err = GlyphTable::load_bdf("fixed", &dir.path().join("missing.bdf")).unwrap_err();
    assert!(matches!(err, BdfError::Io { .. }));
    assert!(err.to_string().contains("missing.bdf"));
}

#[test]
fn test_load_malformed_file() {
    let (path, _dir) = write_temp_file("broken.bdf", "STARTFONT 2.1\nPIXEL_SIZE twelve\nENDFONT\n");
    let err = GlyphTable::load_bdf("broken", &path).unwrap_err();
    assert!(matches!(err, BdfError::Syntax { line: 2, .. }));
}

#[test]
fn test_resolver_over_loaded_fonts() {
    let fixed_src = bdf_source(12, &[block(0x41), block(0xA1)]);
    let mplus_src = bdf_source(12, &[block(0x41), block(0xA1), block(0x3042), block(0x2500)]);
    let baekmuk_src = bdf_source(12, &[block(0x2500), block(0xAC00), block(0x3042)]);
    let (fixed, _d1) = write_temp_file("fixed.bdf", &fixed_src);
    let (mplus, _d2) = write_temp_file("mplus.bdf", &mplus_src);
    let (baekmuk, _d3) = write_temp_file("baekmuk.bdf", &baekmuk_src);

    let set = ProviderSet::new(
        GlyphTable::load_bdf("fixed", &fixed).unwrap(),
        GlyphTable::load_bdf("mplus", &mplus).unwrap(),
        GlyphTable::load_bdf("baekmuk", &baekmuk).unwrap(),
    );

    let resolver = GlyphResolver::new(&set, ResolverOptions::default());
    assert_eq!(resolver.classify_codepoint(0x41), FontType::Fixed);
    assert_eq!(resolver.classify_codepoint(0xA1), FontType::Fixed);
    assert_eq!(resolver.classify_codepoint(0x3042), FontType::Proportional);
    assert_eq!(resolver.classify_codepoint(0x2500), FontType::Supplementary);
    assert_eq!(resolver.classify_codepoint(0xAC00), FontType::Supplementary);
    assert_eq!(resolver.classify_codepoint(0x42), FontType::None);

    let east = GlyphResolver::new(
        &set,
        ResolverOptions {
            prefer_east_asia: true,
            ..ResolverOptions::default()
        },
    );
    assert_eq!(east.classify_codepoint(0xA1), FontType::Proportional);
    assert_eq!(east.classify_codepoint(0x41), FontType::Fixed);

    let legacy = GlyphResolver::new(
        &set,
        ResolverOptions {
            variant: Variant::Legacy,
            ..ResolverOptions::default()
        },
    );
    assert_eq!(legacy.classify_codepoint(0x41), FontType::Proportional);
    assert_eq!(legacy.classify_codepoint(0xA1), FontType::Proportional);
}

#[test]
fn test_flag_only_changes_ambiguous_codepoints() {
    let everything: Vec<TestGlyph> = [0x41, 0xA1, 0xB0, 0x2010, 0x3042, 0xFF71]
        .into_iter()
        .map(block)
        .collect();
    let src = bdf_source(12, &everything);
    let (path, _dir) = write_temp_file("all.bdf", &src);
    let table = GlyphTable::load_bdf("all", &path).unwrap();
    let set = ProviderSet::new(table.clone(), table.clone(), table);

    let western = GlyphResolver::new(&set, ResolverOptions::default());
    let east = GlyphResolver::new(
        &set,
        ResolverOptions {
            prefer_east_asia: true,
            ..ResolverOptions::default()
        },
    );
    for cp in [0xA1, 0xB0, 0x2010] {
        assert_eq!(western.classify_codepoint(cp), FontType::Fixed);
        assert_eq!(east.classify_codepoint(cp), FontType::Proportional);
    }
    for cp in [0x41, 0x3042, 0xFF71, 0xFFFF] {
        assert_eq!(western.classify_codepoint(cp), east.classify_codepoint(cp));
    }
}
