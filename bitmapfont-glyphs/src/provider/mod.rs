//! Glyph providers.
//!
//! The atlas draws from a fixed, closed set of three providers. Each one is
//! an immutable code point to bitmap table behind the [`GlyphSource`]
//! capability; [`ProviderSet`] holds all three and hands out the one named by
//! a [`ProviderKind`].

mod table;

pub use table::GlyphTable;

use crate::error::BakeError;
use crate::glyph::GlyphBitmap;

/// Lookup capability shared by all providers.
pub trait GlyphSource {
    /// Return the glyph for `codepoint` rendered at `size` pixels, if this
    /// provider defines one.
    fn lookup_glyph(&self, codepoint: u32, size: u32) -> Option<&GlyphBitmap>;

    /// Whether this provider defines `codepoint` at `size`.
    fn declares(&self, codepoint: u32, size: u32) -> bool {
        self.lookup_glyph(codepoint, size).is_some()
    }
}

/// The three provider roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Fixed-width font (extended variant only)
    Fixed,
    /// Proportional font (M+)
    Proportional,
    /// Hangul/CJK supplementary font (Baekmuk)
    Supplementary,
}

impl ProviderKind {
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::Fixed => "fixed",
            ProviderKind::Proportional => "proportional",
            ProviderKind::Supplementary => "supplementary",
        }
    }
}

/// One source per provider role.
#[derive(Debug, Clone)]
pub struct ProviderSet<S = GlyphTable> {
    pub fixed: S,
    pub proportional: S,
    pub supplementary: S,
}

impl<S: GlyphSource> ProviderSet<S> {
    pub fn new(fixed: S, proportional: S, supplementary: S) -> Self {
        Self {
            fixed,
            proportional,
            supplementary,
        }
    }

    /// The provider playing `kind`.
    pub fn get(&self, kind: ProviderKind) -> &S {
        match kind {
            ProviderKind::Fixed => &self.fixed,
            ProviderKind::Proportional => &self.proportional,
            ProviderKind::Supplementary => &self.supplementary,
        }
    }
}

impl ProviderSet<GlyphTable> {
    /// Bake every table to cell-sized bitmaps (see [`GlyphTable::baked`]).
    pub fn baked(
        &self,
        cell_width: u32,
        cell_height: u32,
        descent: u32,
    ) -> Result<Self, BakeError> {
        Ok(Self {
            fixed: self.fixed.baked(cell_width, cell_height, descent)?,
            proportional: self.proportional.baked(cell_width, cell_height, descent)?,
            supplementary: self.supplementary.baked(cell_width, cell_height, descent)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str, codepoints: &[u32]) -> GlyphTable {
        let mut table = GlyphTable::new(name, 12);
        for cp in codepoints {
            table.insert(*cp, GlyphBitmap::filled(1, 1));
        }
        table
    }

    #[test]
    fn test_get_returns_matching_role() {
        let set = ProviderSet::new(table("f", &[1]), table("p", &[2]), table("s", &[3]));
        assert_eq!(set.get(ProviderKind::Fixed).name(), "f");
        assert_eq!(set.get(ProviderKind::Proportional).name(), "p");
        assert_eq!(set.get(ProviderKind::Supplementary).name(), "s");
        assert!(set.get(ProviderKind::Supplementary).declares(3, 12));
        assert!(!set.get(ProviderKind::Supplementary).declares(3, 16));
    }

    #[test]
    fn test_baked_set_keeps_coverage() {
        let set = ProviderSet::new(table("f", &[1, 2]), table("p", &[]), table("s", &[3]));
        let baked = set.baked(12, 16, 4).unwrap();
        assert_eq!(baked.fixed.len(), 2);
        assert!(baked.proportional.is_empty());
        let glyph = baked.supplementary.lookup_glyph(3, 12).unwrap();
        assert_eq!((glyph.width(), glyph.height()), (12, 16));
    }
}
