//! Source preparation pipeline.

mod steps;

use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use mada_font_merger::GlyphOrder;
use mada_goadb::GlyphOrderDb;
use norad::Font;

use crate::{FontVersion, io::default_goadb_path};
pub use steps::{PIPELINE_STEPS, PipelineStep};

/// Inputs of a build.
pub struct BuildContext {
    pub arabic: PathBuf,
    pub latin: PathBuf,
    pub out_file: PathBuf,
    pub feature_file: PathBuf,
    pub goadb: PathBuf,
    pub placeholders: Option<PathBuf>,
    pub version: FontVersion,
}

impl BuildContext {
    pub fn new(
        arabic: impl Into<PathBuf>,
        latin: impl Into<PathBuf>,
        out_file: impl Into<PathBuf>,
        feature_file: impl Into<PathBuf>,
        version: &str,
    ) -> Result<Self> {
        let version = FontVersion::parse(version)?;
        let latin = latin.into();
        let goadb = default_goadb_path(&latin);
        Ok(Self {
            arabic: arabic.into(),
            latin,
            out_file: out_file.into(),
            feature_file: feature_file.into(),
            goadb,
            placeholders: None,
            version,
        })
    }

    pub fn goadb(mut self, path: impl Into<PathBuf>) -> Self {
        self.goadb = path.into();
        self
    }

    pub fn placeholders(mut self, path: impl Into<PathBuf>) -> Self {
        self.placeholders = Some(path.into());
        self
    }
}

/// Intermediate results handed from step to step.
#[derive(Default)]
pub struct BuildState {
    pub arabic: Option<Font>,
    pub latin: Option<Font>,
    pub goadb: Option<GlyphOrderDb>,
    /// Arabic then Latin glyph order, recorded before merging.
    pub original_order: Option<GlyphOrder>,
}

impl BuildState {
    pub fn arabic(&self) -> Result<&Font> {
        self.arabic.as_ref().context("Arabic font not loaded")
    }

    pub fn arabic_mut(&mut self) -> Result<&mut Font> {
        self.arabic.as_mut().context("Arabic font not loaded")
    }

    pub fn goadb(&self) -> Result<&GlyphOrderDb> {
        self.goadb.as_ref().context("GOADB not parsed")
    }
}

pub fn run_step(
    name: &str,
    step_num: usize,
    total: usize,
    ctx: &BuildContext,
    state: &mut BuildState,
    f: impl Fn(&BuildContext, &mut BuildState) -> Result<()>,
) -> Result<()> {
    println!("\n[{step_num}/{total}] {name}");
    let start = Instant::now();
    f(ctx, state).with_context(|| format!("Step '{name}' failed"))?;
    println!("  ✓ {name} ({:.2}s)", start.elapsed().as_secs_f64());
    Ok(())
}

pub fn run_steps(steps: &[PipelineStep], ctx: &BuildContext, state: &mut BuildState) -> Result<()> {
    let total = steps.len();
    for (i, (name, step_fn)) in steps.iter().enumerate() {
        run_step(name, i + 1, total, ctx, state, step_fn)?;
    }
    Ok(())
}

/// Merge the sources, apply metadata and derived glyphs, and save.
pub fn prepare(ctx: &BuildContext) -> Result<()> {
    let start = Instant::now();

    println!("═══════════════════════════════════════════════════════════════════════════════");
    println!("Mada Source Preparation");
    println!("═══════════════════════════════════════════════════════════════════════════════");
    println!("   Arabic: {}", ctx.arabic.display());
    println!("   Latin:  {}", ctx.latin.display());

    let mut state = BuildState::default();
    run_steps(PIPELINE_STEPS, ctx, &mut state)?;

    println!("\n═══════════════════════════════════════════════════════════════════════════════");
    println!("✨ Prepared in {:.2}s", start.elapsed().as_secs_f64());
    println!("   Output: {}", ctx.out_file.display());
    if let Some(font) = &state.arabic {
        println!("   Glyphs: {}", font.default_layer().len());
    }
    println!("═══════════════════════════════════════════════════════════════════════════════");

    Ok(())
}
