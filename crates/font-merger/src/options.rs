//! Options for merging the Latin font

use unicode_general_category::GeneralCategory;

/// Options for merging the Latin font into the Arabic font
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Glyph whose advance `nbspace` takes
    pub space: String,

    pub nbspace: String,

    /// Codepoint of the glyph that gets Arabic mark anchors
    pub dotted_circle: char,

    /// Vertical distance between the Latin anchors and the added Arabic ones
    pub anchor_offset: f64,

    /// Latin glyphs in these categories lose their anchors
    pub spacing_mark_categories: Vec<GeneralCategory>,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            space: "space".to_string(),
            nbspace: "nbspace".to_string(),
            dotted_circle: '\u{25CC}',
            anchor_offset: 100.0,
            spacing_mark_categories: vec![
                GeneralCategory::ModifierSymbol,
                GeneralCategory::ModifierLetter,
            ],
        }
    }
}

impl MergeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn space_glyphs(mut self, space: impl Into<String>, nbspace: impl Into<String>) -> Self {
        self.space = space.into();
        self.nbspace = nbspace.into();
        self
    }

    pub fn anchor_offset(mut self, offset: f64) -> Self {
        self.anchor_offset = offset;
        self
    }

    pub fn spacing_mark_categories(
        mut self,
        categories: impl IntoIterator<Item = GeneralCategory>,
    ) -> Self {
        self.spacing_mark_categories = categories.into_iter().collect();
        self
    }

    /// Check if a codepoint belongs to a spacing mark category
    pub fn is_spacing_mark(&self, codepoint: char) -> bool {
        let category = unicode_general_category::get_general_category(codepoint);
        self.spacing_mark_categories.contains(&category)
    }
}
