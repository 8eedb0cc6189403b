//! infoextract - Markdown text and source comment extraction
//!
//! Converts Markdown chapters into plain text files and associates source
//! comments with the functions and parameters they mention.

use anyhow::Result;
use clap::Parser;
use infoextract::cli::{
    associate_source_file, convert_markdown, init_config, print_associations_json,
    print_associations_text, print_conversions_json, print_conversions_text, show_config, Cli,
    Commands, OutputFormat,
};
use infoextract::corpus::ExtractConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Setup logging; stdout is reserved for results
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = ExtractConfig::load_or_default(&cli.config)?;

    // Execute command
    match cli.command {
        Commands::Markdown(args) => {
            let config = config.with_markdown_paths(args.chapters, args.out);
            let converted = convert_markdown(&config)?;

            match cli.format {
                OutputFormat::Json => print_conversions_json(&converted)?,
                OutputFormat::Text => print_conversions_text(&converted),
            }
        }

        Commands::Associate(args) => {
            let file = args.file.unwrap_or_else(|| config.sample_jl_file.clone());
            let associations = associate_source_file(&file)?;

            match cli.format {
                OutputFormat::Json => print_associations_json(&associations)?,
                OutputFormat::Text => print_associations_text(&associations),
            }
        }

        Commands::Config(args) => {
            if args.init {
                init_config(&cli.config, args.force)?;
            }
            if args.show || !args.init {
                show_config(&config)?;
            }
        }
    }

    Ok(())
}
