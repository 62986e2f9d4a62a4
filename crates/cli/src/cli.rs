//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use mada_core::{BuildContext, check, prepare};

#[derive(Parser)]
#[command(name = "mada-fonts")]
#[command(about = "Prepare the Mada UFO sources by merging the Arabic and Latin masters")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct PrepareArgs {
    /// Arabic source UFO
    pub arabic: PathBuf,
    /// Latin source UFO
    pub latin: PathBuf,
    /// Combined UFO to write
    #[arg(long)]
    pub out_file: PathBuf,
    /// Shared OpenType feature file
    #[arg(long)]
    pub feature_file: PathBuf,
    /// Font version, MAJOR.MINOR
    #[arg(long)]
    pub version: String,
    /// GlyphOrderAndAliasDB [default: next to the Latin sources]
    #[arg(long)]
    pub goadb: Option<PathBuf>,
    /// Placeholder glyph definitions
    #[arg(long)]
    pub placeholders: Option<PathBuf>,
}

impl PrepareArgs {
    pub fn context(self) -> Result<BuildContext> {
        let mut ctx = BuildContext::new(
            self.arabic,
            self.latin,
            self.out_file,
            self.feature_file,
            &self.version,
        )?;
        if let Some(goadb) = self.goadb {
            ctx = ctx.goadb(goadb);
        }
        if let Some(placeholders) = self.placeholders {
            ctx = ctx.placeholders(placeholders);
        }
        Ok(ctx)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge the sources into a combined UFO
    Prepare {
        #[command(flatten)]
        args: PrepareArgs,
    },
    /// Check a UFO for Unicode conflicts
    Check { ufo: PathBuf },
    #[command(subcommand, hide = true)]
    Dev(crate::dev::DevCommands),
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Prepare { args } => {
                prepare(&args.context()?)?;
            }
            Commands::Check { ufo } => {
                check(&ufo)?;
            }
            Commands::Dev(dev) => dev.run()?,
        }
        Ok(())
    }
}
