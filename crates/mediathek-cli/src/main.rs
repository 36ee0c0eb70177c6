//! mediathek-paths - inspect the resolved MediathekView locations

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use mediathek_core::{FilmListType, StandardLocations};

#[derive(Debug, Parser)]
#[command(
    name = "mediathek-paths",
    author,
    version,
    about = "Resolve the standard MediathekView file locations",
    propagate_version = true
)]
struct Cli {
    /// Portable base directory; all persistent state is kept beneath it
    #[arg(long, global = true, env = "MEDIATHEK_PORTABLE_DIR")]
    portable_dir: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve and print every standard location
    Paths {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Create the settings directory if it is missing
    Ensure,

    /// Print the remote film list URL
    Url {
        /// Which list variant to address
        #[arg(value_enum, default_value = "full")]
        kind: ListKindArg,
    },

    /// Print the standard download directory
    Downloads,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ListKindArg {
    /// The complete film list
    Full,
    /// Differences since the last full list
    Diff,
}

impl From<ListKindArg> for FilmListType {
    fn from(kind: ListKindArg) -> Self {
        match kind {
            ListKindArg::Full => Self::Full,
            ListKindArg::Diff => Self::DiffOnly,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let portable = cli
        .portable_dir
        .map(|dir| dir.to_string_lossy().into_owned());
    let locations = StandardLocations::detect(portable);

    match cli.command {
        Command::Paths { json } => cmd_paths(&locations, json),
        Command::Ensure => cmd_ensure(&locations),
        Command::Url { kind } => {
            let url = StandardLocations::film_list_url(kind.into())?;
            println!("{url}");
            Ok(())
        }
        Command::Downloads => {
            println!("{}", locations.download_dir().display());
            Ok(())
        }
    }
}

fn cmd_paths(locations: &StandardLocations, json: bool) -> Result<()> {
    let report = locations.report()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} locations ({})", mediathek_core::APP_NAME, report.os);
        println!("portable:       {}", report.portable);
        println!("settings dir:   {}", report.settings_dir.display());
        println!("bookmarks:      {}", report.bookmark_file.display());
        println!("config file:    {}", report.config_file.display());
        println!("lockfile:       {}", report.lock_file.display());
        println!("film list:      {}", report.film_list_file.display());
        println!("film index:     {}", report.film_index_dir.display());
        println!("downloads:      {}", report.download_dir.display());
    }
    Ok(())
}

fn cmd_ensure(locations: &StandardLocations) -> Result<()> {
    let dir = locations.settings_dir()?;
    println!("settings directory ready: {}", dir.display());
    Ok(())
}
