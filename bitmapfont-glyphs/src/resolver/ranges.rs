//! Code point ranges with forced provider selection.

use std::ops::RangeInclusive;

/// Box Drawing (U+2500–U+257F). The proportional font only covers part of
/// this block, so the whole block comes from the supplementary font.
pub const BOX_DRAWING: RangeInclusive<u32> = 0x2500..=0x257F;

/// Halfwidth Katakana (U+FF65–U+FF9F)
pub const HALFWIDTH_KATAKANA: RangeInclusive<u32> = 0xFF65..=0xFF9F;
