//! Host command-line interface.
//!
//! Stands in for the shell's context-menu surface: prints the menu,
//! reports a selection by index, or toggles a flag directly by name.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::options::OptionFlag;

/// nugetmenu - pick a package source and fetch options, then launch the fetch tool
#[derive(Parser)]
#[command(name = "nugetmenu")]
#[command(about = "Context-menu engine for fetching NuGet packages")]
#[command(version)]
pub struct Cli {
    /// Path to the sources document (defaults to the per-user location)
    #[arg(long, global = true)]
    pub sources: Option<PathBuf>,

    /// Path to the options document (defaults to the per-user location)
    #[arg(long, global = true)]
    pub options: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the current menu: option toggles first, then enabled sources
    Menu,
    /// Act on a menu selection by index
    Select {
        /// Zero-based index into the printed menu
        index: usize,

        /// Package id to fetch (used when the index names a source)
        package: String,

        /// Print the assembled command instead of launching it
        #[arg(long)]
        dry_run: bool,
    },
    /// Toggle one option flag by name
    Toggle {
        /// Flag name (useVersionedPackages, getLatest, cleanPackages)
        flag: OptionFlag,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
