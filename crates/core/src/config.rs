//! Configuration constants for Mada source preparation.

/// GOADB file name, looked up next to the Latin sources' parent directory.
pub const GOADB_FILENAME: &str = "GlyphOrderAndAliasDB";

/// Placeholder in the shared feature file replaced by the language systems.
pub const LANGUAGE_SYSTEMS_PLACEHOLDER: &str = "#{languagesystems}";

/// Language system declaration for the Latin kerning.
pub const LANGUAGE_SYSTEMS: &str = "languagesystem latn dflt;";

/// Tatweel, the reference height of the connecting stroke.
pub const TATWEEL: &str = "uni0640";

/// Final Yeh, lowered by the ss01 feature.
pub const FINAL_YEH: &str = "arYeh.fina";

pub const DESIGNER: &str = "Khaled Hosny";

pub const LICENSE: &str = "This Font Software is licensed under the SIL Open Font License, \
                           Version 1.1. This license is available with a FAQ at: \
                           http://scripts.sil.org/OFL";

pub const LICENSE_URL: &str = "http://scripts.sil.org/OFL";

pub const DESCRIPTION: &str =
    "Mada is a geometric, unmodulted Arabic display typeface inspired by Cairo road signage.";

pub const SAMPLE_TEXT: &str = "صف خلق خود كمثل ٱلشمس إذ بزغت يحظى ٱلضجيع بها نجلاء معطار.";

pub const VENDOR_ID: &str = "ALIF";
