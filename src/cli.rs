//! Command line interface
//!
//! `unroll baked` and `unroll calculated` take no arguments and print the
//! fragment for the default 1024 texel target. Flags override the config file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use unroll_config::Config;
use unroll_core::{Mode, Resolution, emit};

use crate::output::Destination;

#[derive(Parser, Debug)]
#[command(name = "unroll")]
#[command(about = "Generate unrolled 5x5 Laplacian kernel fragments for WGSL shaders")]
#[command(version)]
#[command(subcommand_required = false)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file path (default: ~/.config/unroll/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Texel grid size: <N> for both axes or <X>x<Y>
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub resolution: Option<Resolution>,

    /// Write the fragment to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Bake texel offsets into float literals
    Baked,

    /// Emit offsets as <n>/resolution expressions after a resolution declaration
    Calculated,

    /// Write the default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::InitConfig { force }) => init_config(cli.config.as_deref(), force),
        Some(Commands::Baked) => generate(&cli, Some(Mode::Baked)),
        Some(Commands::Calculated) => generate(&cli, Some(Mode::Calculated)),
        None => generate(&cli, None),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn generate(cli: &Cli, mode: Option<Mode>) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let generator = &config.generator;
    generator.validate()?;

    let mode = mode.unwrap_or_else(|| generator.mode.into());
    let resolution = cli
        .resolution
        .unwrap_or_else(|| generator.resolution_for(mode));

    let lines = emit(&generator.weights, resolution, mode)
        .with_context(|| format!("Cannot generate {} kernel", mode))?;

    let destination = Destination::from_path(cli.output.as_deref());
    let count = destination.write(lines)?;

    log::info!(
        "Wrote {} lines ({} mode, resolution {}) to {:?}",
        count,
        mode,
        resolution,
        destination
    );
    Ok(())
}

fn init_config(path: Option<&Path>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_file_path()?,
    };

    if path.exists() && !force {
        bail!("{:?} already exists (use --force to overwrite)", path);
    }

    Config::write_default(&path)?;
    eprintln!("Wrote default config to {}", path.display());
    Ok(())
}
