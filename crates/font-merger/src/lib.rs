mod error;
mod glyph_order;
mod integrity;
mod merger;
mod options;
mod production_names;
mod types;

pub use error::{MergeError, Result};
pub use glyph_order::{GLYPH_ORDER_KEY, GlyphOrder};
pub use integrity::check_integrity;
pub use merger::{MergeReport, Merger};
pub use options::MergeOptions;
pub use production_names::{POSTSCRIPT_NAMES_KEY, ProductionNames};
pub use types::Codepoint;

use mada_goadb::GlyphOrderDb;
use norad::Font;

/// Merge `latin` into `arabic` using default options.
///
/// This is a convenience wrapper around [`Merger`] for the common case
/// of merging with the stock glyph names and anchor offsets.
///
/// # Example
///
/// ```no_run
/// use mada_font_merger::merge_fonts;
/// use mada_goadb::GlyphOrderDb;
/// use norad::Font;
///
/// let mut arabic = Font::load("sources/Mada.ufo").unwrap();
/// let latin = Font::load("sources/latin/Roman/Regular/font.ufo").unwrap();
/// let goadb = GlyphOrderDb::load("sources/latin/GlyphOrderAndAliasDB").unwrap();
/// merge_fonts(&mut arabic, latin, &goadb).unwrap();
/// ```
pub fn merge_fonts(arabic: &mut Font, latin: Font, goadb: &GlyphOrderDb) -> Result<MergeReport> {
    Merger::default().merge(arabic, latin, goadb)
}
