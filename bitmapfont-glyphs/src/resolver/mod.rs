//! Per-code-point provider selection.
//!
//! [`GlyphResolver::classify_codepoint`] decides which single provider owns
//! a code point; [`GlyphResolver::resolve_glyph`] fetches the glyph from it.
//! Classification is a pure function of the code point, the variant and the
//! east-Asia preference, so it is recomputed on every call.

pub mod ranges;

use bitmapfont_config::Variant;

use crate::glyph::GlyphBitmap;
use crate::provider::{GlyphSource, ProviderKind, ProviderSet};
use crate::width::{EastAsianWidth, UnicodeWidths, WidthOracle};

/// Which provider supplies a code point's glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontType {
    /// No provider; the cell stays transparent
    #[default]
    None,
    Fixed,
    Proportional,
    Supplementary,
}

impl FontType {
    pub const ALL: [FontType; 4] = [
        FontType::None,
        FontType::Fixed,
        FontType::Proportional,
        FontType::Supplementary,
    ];

    /// Provider backing this selection, if any.
    pub fn provider(self) -> Option<ProviderKind> {
        match self {
            FontType::None => None,
            FontType::Fixed => Some(ProviderKind::Fixed),
            FontType::Proportional => Some(ProviderKind::Proportional),
            FontType::Supplementary => Some(ProviderKind::Supplementary),
        }
    }

    pub fn name(self) -> &'static str {
        match self.provider() {
            Some(kind) => kind.name(),
            None => "none",
        }
    }
}

impl From<ProviderKind> for FontType {
    fn from(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::Fixed => FontType::Fixed,
            ProviderKind::Proportional => FontType::Proportional,
            ProviderKind::Supplementary => FontType::Supplementary,
        }
    }
}

/// Inputs that shape the selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    pub variant: Variant,
    /// Ambiguous-width code points use the proportional font
    pub prefer_east_asia: bool,
    /// Pixel size requested from providers
    pub glyph_size: u32,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            variant: Variant::Extended,
            prefer_east_asia: false,
            glyph_size: 12,
        }
    }
}

const LEGACY_PROBE_ORDER: &[ProviderKind] =
    &[ProviderKind::Proportional, ProviderKind::Supplementary];

const EXTENDED_PROBE_ORDER: &[ProviderKind] = &[
    ProviderKind::Fixed,
    ProviderKind::Proportional,
    ProviderKind::Supplementary,
];

/// Selects exactly one provider per code point.
pub struct GlyphResolver<'a, S, W = UnicodeWidths> {
    providers: &'a ProviderSet<S>,
    widths: W,
    options: ResolverOptions,
}

impl<'a, S: GlyphSource> GlyphResolver<'a, S> {
    /// Resolver using the Unicode East_Asian_Width data.
    pub fn new(providers: &'a ProviderSet<S>, options: ResolverOptions) -> Self {
        Self::with_widths(providers, UnicodeWidths, options)
    }
}

impl<'a, S: GlyphSource, W: WidthOracle> GlyphResolver<'a, S, W> {
    /// Resolver with a custom width oracle.
    pub fn with_widths(providers: &'a ProviderSet<S>, widths: W, options: ResolverOptions) -> Self {
        Self {
            providers,
            widths,
            options,
        }
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Decide which provider owns `codepoint`.
    ///
    /// Rules, first match wins:
    /// 1. Box Drawing is always supplementary.
    /// 2. Extended: Halfwidth Katakana is always proportional.
    /// 3. Extended: East Asian Ambiguous is proportional with the east-Asia
    ///    preference, fixed otherwise, whether or not that font has it.
    /// 4. The first provider in probe order that has the glyph.
    /// 5. Otherwise `FontType::None`.
    pub fn classify_codepoint(&self, codepoint: u32) -> FontType {
        if ranges::BOX_DRAWING.contains(&codepoint) {
            return FontType::Supplementary;
        }

        let probe_order = match self.options.variant {
            Variant::Legacy => LEGACY_PROBE_ORDER,
            Variant::Extended => {
                if ranges::HALFWIDTH_KATAKANA.contains(&codepoint) {
                    return FontType::Proportional;
                }
                if self.widths.classify(codepoint) == EastAsianWidth::Ambiguous {
                    return if self.options.prefer_east_asia {
                        FontType::Proportional
                    } else {
                        FontType::Fixed
                    };
                }
                EXTENDED_PROBE_ORDER
            }
        };

        probe_order
            .iter()
            .copied()
            .find(|kind| {
                self.providers
                    .get(*kind)
                    .declares(codepoint, self.options.glyph_size)
            })
            .map_or(FontType::None, FontType::from)
    }

    /// Fetch the glyph for `codepoint` from its selected provider.
    ///
    /// A forced selection whose provider lacks the glyph yields `None`.
    pub fn resolve_glyph(&self, codepoint: u32) -> Option<&'a GlyphBitmap> {
        self.resolve(codepoint).map(|(_, glyph)| glyph)
    }

    /// Like [`resolve_glyph`](Self::resolve_glyph), also reporting the
    /// selection that produced the glyph.
    pub fn resolve(&self, codepoint: u32) -> Option<(FontType, &'a GlyphBitmap)> {
        let font_type = self.classify_codepoint(codepoint);
        let kind = match font_type {
            FontType::None => return None,
            FontType::Fixed => ProviderKind::Fixed,
            FontType::Proportional => ProviderKind::Proportional,
            FontType::Supplementary => ProviderKind::Supplementary,
        };
        let glyph = self
            .providers
            .get(kind)
            .lookup_glyph(codepoint, self.options.glyph_size)?;
        Some((font_type, glyph))
    }
}
