//! Development commands for inspecting and adjusting single sources.

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use mada_core::{
    FontVersion, GlyphOrderDb, ProductionNames,
    io::{load_ufo, save_ufo},
};
use mada_glyph_ops::propagate_anchors;

#[derive(Subcommand)]
pub enum DevCommands {
    /// Print the records of a GlyphOrderAndAliasDB
    Goadb {
        #[arg(required = true)]
        file: PathBuf,
    },
    PropagateAnchors {
        #[arg(required = true)]
        input: PathBuf,
        #[arg(required = true)]
        output: PathBuf,
    },
    /// Print the production names derived from Unicode values
    ProductionNames {
        #[arg(required = true)]
        input: PathBuf,
    },
    SetVersion {
        #[arg(short, long)]
        version: String,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

impl DevCommands {
    pub fn run(self) -> Result<()> {
        match self {
            DevCommands::Goadb { file } => {
                let goadb = GlyphOrderDb::load(&file)?;
                for working in goadb.glyph_order() {
                    let production = goadb.production_name(working).unwrap_or(working);
                    let unicodes: Vec<String> = goadb
                        .encoding(working)
                        .unwrap_or_default()
                        .iter()
                        .map(|c| format!("U+{:04X}", u32::from(*c)))
                        .collect();
                    println!("{production}\t{working}\t{}", unicodes.join(","));
                }
            }
            DevCommands::PropagateAnchors { input, output } => {
                let mut font = load_ufo(&input)?;
                let changed = propagate_anchors(font.default_layer_mut())?;
                save_ufo(&font, &output)?;
                println!("Propagated anchors to {changed} glyphs");
            }
            DevCommands::ProductionNames { input } => {
                let font = load_ufo(&input)?;
                for (working, production) in ProductionNames::for_font(&font).iter() {
                    println!("{working}\t{production}");
                }
            }
            DevCommands::SetVersion { version, files } => {
                let version = FontVersion::parse(&version)?;
                for file in &files {
                    let mut font = load_ufo(file)?;
                    version.apply(&mut font.font_info);
                    save_ufo(&font, file)?;
                    println!("{}: {version}", file.display());
                }
            }
        }
        Ok(())
    }
}
