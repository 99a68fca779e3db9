//! nuxt-hero-icons-gen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser};
use commands::GenerateCommand;
use std::path::PathBuf;

use nuxt_hero_icons_gen::observability;

#[derive(Parser)]
#[command(name = "nuxt-hero-icons-gen")]
#[command(version)]
#[command(about = "Generate Nuxt icon component packages from heroicons", long_about = None)]
struct Cli {
    /// Project root containing package.json, README.md and node_modules
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Config file (default: <root>/nuxt-hero-icons.toml if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also write src/index.js re-exporting every component
    #[arg(long)]
    barrel: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init(cli.verbose)?;

    // Returning the error prints its chain to stderr and exits non-zero
    let cmd = GenerateCommand::new(cli.root, cli.config, cli.barrel);
    cmd.execute()?;

    Ok(())
}
