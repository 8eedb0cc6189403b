//! CLI interface using clap
//!
//! Provides the command-line interface for infoextract

mod commands;

pub use commands::*;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// infoextract - Markdown text and source comment extraction
#[derive(Parser, Debug)]
#[command(name = "infoextract")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = crate::corpus::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert Markdown chapters to plain text files
    Markdown(MarkdownArgs),

    /// Associate source comments with function names and parameters
    Associate(AssociateArgs),

    /// Show or create configuration
    Config(ConfigArgs),
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for markdown command
#[derive(Parser, Debug)]
pub struct MarkdownArgs {
    /// Directory containing Markdown chapters
    #[arg(long)]
    pub chapters: Option<PathBuf>,

    /// Directory receiving the text files
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for associate command
#[derive(Parser, Debug)]
pub struct AssociateArgs {
    /// Source file (defaults to `sample_jl_file` from the configuration)
    pub file: Option<PathBuf>,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Show current configuration
    #[arg(long)]
    pub show: bool,

    /// Write a default configuration file
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing file with --init
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
