//! End-to-end atlas generation: load providers, composite, pack, write.

use std::path::Path;

use anyhow::{Context, Result};
use bitmapfont_config::{Config, Variant};
use bitmapfont_glyphs::{BdfError, GlyphResolver, GlyphTable, ProviderSet, ResolverOptions};

use crate::atlas::{Atlas, AtlasBuilder, AtlasGeometry, Placement};
use crate::error::AtlasError;
use crate::packer;

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateReport {
    /// Cells holding a glyph
    pub glyphs: usize,
    /// Uncompressed payload size in bytes
    pub payload_len: usize,
}

fn load_table(name: &str, path: Option<&Path>, glyph_size: u32) -> Result<GlyphTable, BdfError> {
    match path {
        Some(path) => GlyphTable::load_bdf(name, path),
        None => {
            log::info!("No {} font configured, provider is empty", name);
            Ok(GlyphTable::new(name, glyph_size))
        }
    }
}

/// Load the three providers named in `config`.
///
/// For the extended variant every glyph is baked into a full cell so the
/// compositor can place it flush.
pub fn load_providers(config: &Config) -> Result<ProviderSet> {
    let fonts = &config.fonts;
    let fixed = load_table("fixed", fonts.fixed.as_deref(), config.glyph_size)
        .context("loading fixed-width font")?;
    let proportional = load_table("proportional", fonts.proportional.as_deref(), config.glyph_size)
        .context("loading proportional font")?;
    let supplementary = load_table(
        "supplementary",
        fonts.supplementary.as_deref(),
        config.glyph_size,
    )
    .context("loading supplementary font")?;

    for table in [&fixed, &proportional, &supplementary] {
        if !table.is_empty() && table.pixel_size() != config.glyph_size {
            log::warn!(
                "Font '{}' is {}px but glyph_size is {}; none of its glyphs will be used",
                table.name(),
                table.pixel_size(),
                config.glyph_size
            );
        }
    }

    let providers = ProviderSet::new(fixed, proportional, supplementary);
    Ok(match config.variant {
        Variant::Legacy => providers,
        Variant::Extended => providers
            .baked(config.cell_width, config.cell_height, config.descent)
            .context("baking glyphs into atlas cells")?,
    })
}

/// Composite the atlas for `config` from already loaded providers.
pub fn build_atlas(config: &Config, providers: &ProviderSet) -> Result<Atlas, AtlasError> {
    let resolver = GlyphResolver::new(
        providers,
        ResolverOptions {
            variant: config.variant,
            prefer_east_asia: config.prefer_east_asia,
            glyph_size: config.glyph_size,
        },
    );
    AtlasBuilder::new(
        AtlasGeometry::new(config.cell_width, config.cell_height),
        Placement::for_variant(config.variant, config.descent),
        config.pack_format(),
    )
    .build(&resolver)
}

/// Run the whole pipeline and write the compressed atlas to `output`.
pub fn run(config: &Config) -> Result<GenerateReport> {
    config.validate().context("invalid configuration")?;
    let output = config
        .output
        .as_deref()
        .context("no output path configured")?;

    let providers = load_providers(config)?;
    let atlas = build_atlas(config, &providers).context("compositing atlas")?;

    let payload = packer::serialize(atlas.canvas()).context("packing atlas")?;
    let canvas = atlas.canvas();
    debug_assert_eq!(
        payload.len(),
        config
            .pack_format()
            .payload_len(canvas.width(), canvas.height())
    );

    packer::write_compressed(&payload, output, config.compression_level)?;

    if let Some(preview) = config.preview.as_deref() {
        packer::write_preview(canvas, preview)?;
    }

    let report = GenerateReport {
        glyphs: atlas.glyph_count(),
        payload_len: payload.len(),
    };
    log::info!(
        "Generated {} atlas with {} glyphs ({} payload bytes)",
        config.variant,
        report.glyphs,
        report.payload_len
    );
    Ok(report)
}
