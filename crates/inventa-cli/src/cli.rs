//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "inventa", version)]
#[command(about = "A text-based inventory backed by a directory tree", long_about = None)]
pub struct Cli {
    /// Run against the inventory in this directory
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub inventory: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Read configuration from this file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the requested keys of matching assets
    #[command(name = "get")]
    Get(GetArgs),
}

#[derive(Args, Debug, Default)]
pub struct GetArgs {
    /// Keys to display (default: type make model serial)
    #[arg(short, long, num_args = 1.., value_name = "KEY")]
    pub keys: Vec<String>,

    /// Only show assets matching all filters; VALUE may be a regex,
    /// `<unset>`, `<list>` or `<dict>`
    #[arg(short, long = "filter", num_args = 1.., value_name = "KEY=VALUE")]
    pub filters: Vec<String>,

    /// Directories to search (default: inventory root)
    #[arg(short, long = "path", num_args = 1.., value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Number of directory levels to descend below each path
    #[arg(long, allow_negative_numbers = true, value_name = "N")]
    pub depth: Option<i64>,

    /// Tab-separated output without table decoration
    #[arg(short = 'H', long)]
    pub machine_readable: bool,

    /// Sort ascending by the requested keys
    #[arg(short = 's', long, conflicts_with = "sort_descending")]
    pub sort_ascending: bool,

    /// Sort descending by the requested keys
    #[arg(short = 'S', long)]
    pub sort_descending: bool,
}
