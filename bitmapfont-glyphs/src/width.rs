//! East Asian Width classification.

use icu_properties::CodePointMapData;
use icu_properties::props::EastAsianWidth as IcuEastAsianWidth;

/// Unicode East_Asian_Width categories (UAX #11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EastAsianWidth {
    Neutral,
    Ambiguous,
    Halfwidth,
    Fullwidth,
    Narrow,
    Wide,
}

/// Classifies code points by East Asian Width.
pub trait WidthOracle {
    fn classify(&self, codepoint: u32) -> EastAsianWidth;
}

impl<F> WidthOracle for F
where
    F: Fn(u32) -> EastAsianWidth,
{
    fn classify(&self, codepoint: u32) -> EastAsianWidth {
        self(codepoint)
    }
}

/// Oracle backed by the Unicode Character Database.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWidths;

impl WidthOracle for UnicodeWidths {
    fn classify(&self, codepoint: u32) -> EastAsianWidth {
        match CodePointMapData::<IcuEastAsianWidth>::new().get32(codepoint) {
            IcuEastAsianWidth::Ambiguous => EastAsianWidth::Ambiguous,
            IcuEastAsianWidth::Halfwidth => EastAsianWidth::Halfwidth,
            IcuEastAsianWidth::Fullwidth => EastAsianWidth::Fullwidth,
            IcuEastAsianWidth::Narrow => EastAsianWidth::Narrow,
            IcuEastAsianWidth::Wide => EastAsianWidth::Wide,
            _ => EastAsianWidth::Neutral,
        }
    }
}
