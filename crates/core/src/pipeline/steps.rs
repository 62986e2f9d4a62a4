//! Pipeline step definitions.

use anyhow::{Context, Result};
use log::info;
use mada_font_merger::{GlyphOrder, Merger, ProductionNames, check_integrity};
use mada_font_metadata::{
    InfoSettings, current_copyright_notice, enable_typo_metrics, set_installable_embedding,
};
use mada_glyph_ops::{ARABIC_PUNCTUATION, Placeholders, propagate_anchors};
use mada_goadb::GlyphOrderDb;

use super::{BuildContext, BuildState};
use crate::{
    config::{DESCRIPTION, DESIGNER, LICENSE, LICENSE_URL, SAMPLE_TEXT, VENDOR_ID},
    features::append_features,
    io::{load_pair, read_feature_file, save_ufo},
};

pub type PipelineStep = (&'static str, fn(&BuildContext, &mut BuildState) -> Result<()>);

pub const PIPELINE_STEPS: &[PipelineStep] = &[
    ("load-sources", step_load_sources),
    ("propagate-anchors", step_propagate_anchors),
    ("parse-goadb", step_parse_goadb),
    ("production-names", step_production_names),
    ("features", step_features),
    ("merge-latin", step_merge_latin),
    ("check-integrity", step_check_integrity),
    ("glyph-order", step_glyph_order),
    ("set-info", step_set_info),
    ("extra-glyphs", step_extra_glyphs),
    ("save", step_save),
];

fn step_load_sources(ctx: &BuildContext, state: &mut BuildState) -> Result<()> {
    let (arabic, latin) = load_pair(&ctx.arabic, &ctx.latin)?;
    println!(
        "  Loaded {} Arabic and {} Latin glyphs",
        arabic.default_layer().len(),
        latin.default_layer().len()
    );
    state.arabic = Some(arabic);
    state.latin = Some(latin);
    Ok(())
}

fn step_propagate_anchors(_ctx: &BuildContext, state: &mut BuildState) -> Result<()> {
    let changed = propagate_anchors(state.arabic_mut()?.default_layer_mut())?;
    println!("  Propagated anchors to {changed} glyphs");
    Ok(())
}

fn step_parse_goadb(ctx: &BuildContext, state: &mut BuildState) -> Result<()> {
    let goadb = GlyphOrderDb::load(&ctx.goadb)
        .with_context(|| format!("Failed to parse GOADB: {}", ctx.goadb.display()))?;
    println!("  {} records from {}", goadb.len(), ctx.goadb.display());
    state.goadb = Some(goadb);
    Ok(())
}

fn step_production_names(_ctx: &BuildContext, state: &mut BuildState) -> Result<()> {
    let arabic = state.arabic_mut()?;
    let names = ProductionNames::for_font(arabic);
    names.write(arabic);
    println!("  {} Arabic production names", names.len());
    Ok(())
}

fn step_features(ctx: &BuildContext, state: &mut BuildState) -> Result<()> {
    let shared = read_feature_file(&ctx.feature_file)?;
    append_features(state.arabic_mut()?, &shared)
}

fn step_merge_latin(_ctx: &BuildContext, state: &mut BuildState) -> Result<()> {
    let latin = state.latin.take().context("Latin font not loaded")?;
    let goadb = state.goadb.take().context("GOADB not parsed")?;
    let report = Merger::default().merge_latin(state.arabic_mut()?, latin, &goadb)?;
    println!(
        "  {} glyphs ({} encoded from GOADB), {} groups, {} kerning pairs",
        report.glyphs_added, report.glyphs_encoded, report.groups, report.kerning_pairs
    );
    state.goadb = Some(goadb);
    state.original_order = Some(report.order);
    Ok(())
}

fn step_check_integrity(_ctx: &BuildContext, state: &mut BuildState) -> Result<()> {
    check_integrity(state.arabic()?)?;
    Ok(())
}

fn step_glyph_order(_ctx: &BuildContext, state: &mut BuildState) -> Result<()> {
    let order = state.original_order.take().context("Glyph order not recorded")?;
    order.sort_font(state.arabic_mut()?);
    Ok(())
}

fn step_set_info(ctx: &BuildContext, state: &mut BuildState) -> Result<()> {
    let info = &mut state.arabic_mut()?.font_info;
    ctx.version.apply(info);
    InfoSettings::new()
        .copyright(current_copyright_notice())
        .designer(DESIGNER)
        .license(LICENSE, LICENSE_URL)
        .description(DESCRIPTION)
        .sample_text(SAMPLE_TEXT)
        .vendor_id(VENDOR_ID)
        .apply(info);
    enable_typo_metrics(info);
    set_installable_embedding(info);
    println!("  Version {}", ctx.version);
    Ok(())
}

fn step_extra_glyphs(ctx: &BuildContext, state: &mut BuildState) -> Result<()> {
    let font = state.arabic_mut()?;
    let mut order = GlyphOrder::from_font(font);
    let layer = font.default_layer_mut();

    if let Some(path) = &ctx.placeholders {
        let placeholders = Placeholders::load(path)
            .with_context(|| format!("Failed to read placeholders: {}", path.display()))?;
        for name in placeholders.build(layer)? {
            order.push(name.to_string());
        }
    }
    for recipe in ARABIC_PUNCTUATION {
        order.push(recipe.build(layer)?.to_string());
    }

    info!("Glyph order now has {} glyphs", order.len());
    order.write(font);
    Ok(())
}

fn step_save(ctx: &BuildContext, state: &mut BuildState) -> Result<()> {
    save_ufo(state.arabic()?, &ctx.out_file)
}
