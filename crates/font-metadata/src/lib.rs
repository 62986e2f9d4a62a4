//! Font info metadata (versioning, naming, OS/2 flags).

use anyhow::{Result, anyhow};
use chrono::{Datelike, Local};
use log::debug;
use norad::FontInfo;

/// `fsSelection` bit 7: USE_TYPO_METRICS.
const FS_SELECTION_USE_TYPO_METRICS: u8 = 7;

/// Copyright notice for the given final year.
pub fn copyright_notice(year: i32) -> String {
    format!(
        "Copyright © 2015-{year} The Mada Project Authors, with Reserved Font Name \"Source\". \
         Source is a trademark of Adobe Systems Incorporated in the United States and/or other \
         countries."
    )
}

/// Copyright notice for the current year.
pub fn current_copyright_notice() -> String {
    copyright_notice(Local::now().year())
}

/// Font version information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontVersion {
    pub major: i32,
    pub minor: u32,
}

impl FontVersion {
    pub fn new(major: i32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse a `MAJOR.MINOR` version string.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || anyhow!("Invalid version '{value}'. Expected MAJOR.MINOR, e.g. 1.4.");
        let (major, minor) = value.trim().split_once('.').ok_or_else(invalid)?;
        let major = major.parse::<i32>().map_err(|_| invalid())?;
        let minor = minor.parse::<u32>().map_err(|_| invalid())?;
        Ok(Self { major, minor })
    }

    /// Set `versionMajor` and `versionMinor`.
    pub fn apply(&self, info: &mut FontInfo) {
        info.version_major = Some(self.major);
        info.version_minor = Some(self.minor);
    }
}

impl std::fmt::Display for FontVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:03}", self.major, self.minor)
    }
}

/// Naming fields written to the font info.
#[derive(Debug, Clone, Default)]
pub struct InfoSettings {
    pub copyright: String,
    pub designer: String,
    pub license: String,
    pub license_url: String,
    pub description: String,
    pub sample_text: String,
    pub vendor_id: String,
}

impl InfoSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copyright(mut self, value: impl Into<String>) -> Self {
        self.copyright = value.into();
        self
    }

    pub fn designer(mut self, value: impl Into<String>) -> Self {
        self.designer = value.into();
        self
    }

    pub fn license(mut self, license: impl Into<String>, url: impl Into<String>) -> Self {
        self.license = license.into();
        self.license_url = url.into();
        self
    }

    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = value.into();
        self
    }

    pub fn sample_text(mut self, value: impl Into<String>) -> Self {
        self.sample_text = value.into();
        self
    }

    pub fn vendor_id(mut self, value: impl Into<String>) -> Self {
        self.vendor_id = value.into();
        self
    }

    /// Write the fields, replacing existing values.
    pub fn apply(&self, info: &mut FontInfo) {
        info.copyright = Some(self.copyright.clone());
        info.open_type_name_designer = Some(self.designer.clone());
        info.open_type_name_license = Some(self.license.clone());
        info.open_type_name_license_url = Some(self.license_url.clone());
        info.open_type_name_description = Some(self.description.clone());
        info.open_type_name_sample_text = Some(self.sample_text.clone());
        info.open_type_os2_vendor_id = Some(self.vendor_id.clone());
    }
}

/// Set the USE_TYPO_METRICS bit in `openTypeOS2Selection`.
pub fn enable_typo_metrics(info: &mut FontInfo) {
    let selection = info.open_type_os2_selection.get_or_insert_with(Vec::new);
    if !selection.contains(&FS_SELECTION_USE_TYPO_METRICS) {
        selection.push(FS_SELECTION_USE_TYPO_METRICS);
        debug!("openTypeOS2Selection: {selection:?}");
    }
}

/// Clear `openTypeOS2Type`, i.e. `fsType` 0 (installable embedding).
pub fn set_installable_embedding(info: &mut FontInfo) {
    info.open_type_os2_type = Some(Vec::new());
}
