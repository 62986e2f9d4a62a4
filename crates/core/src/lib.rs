//! Mada Core - source preparation pipeline for the Mada fonts.

pub mod check;
pub mod config;
pub mod features;
pub mod io;
pub mod pipeline;

pub use check::check;
pub use mada_font_merger::{GlyphOrder, Merger, MergeOptions, ProductionNames, check_integrity};
pub use mada_font_metadata::{FontVersion, InfoSettings};
pub use mada_goadb::GlyphOrderDb;

pub use pipeline::{BuildContext, BuildState, PIPELINE_STEPS, PipelineStep, prepare};
