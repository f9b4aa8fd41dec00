//! Command-line argument definitions for the eventgrid CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input path, configuration file
//! selection, output and logging verbosity.

use clap::Parser;

/// Command-line arguments for the eventgrid checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input eventgrid file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Print every resolved connection to stdout
    #[arg(long)]
    pub connections: bool,

    /// Fail when any warning is reported
    #[arg(long)]
    pub deny_warnings: bool,
}
