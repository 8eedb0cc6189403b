//! Command implementations

use crate::corpus::{find_files, ExtractConfig};
use crate::extract::{
    associate, content_hash, extract_comment_lines, extract_function_params, markdown_to_text,
    AssociationMap,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One Markdown file written out as plain text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedFile {
    /// Markdown file that was read
    pub source: PathBuf,
    /// Text file that was written
    pub output: PathBuf,
    /// SHA-256 of the written text
    pub hash: String,
}

/// Name of the text file produced for a Markdown file
///
/// `chapters/ch01/index.md` becomes `ch01__index.md.txt`.
pub fn output_file_name(path: &Path) -> String {
    let parent = path
        .parent()
        .and_then(|p| p.file_name())
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    format!("{}__{}.txt", parent, name)
}

/// Convert every Markdown file under the chapters directory to plain text
///
/// Stops at the first file that cannot be read or written.
pub fn convert_markdown(config: &ExtractConfig) -> Result<Vec<ConvertedFile>> {
    let files = find_files(&config.chapters_path, &config.markdown_extension)?;

    std::fs::create_dir_all(&config.out_path)
        .with_context(|| format!("Failed to create output directory {:?}", config.out_path))?;

    let mut converted = Vec::new();

    for path in &files {
        tracing::info!("Converting {:?}", path);

        let markdown = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path))?;
        let text = markdown_to_text(&markdown);

        let output = config.out_path.join(output_file_name(&path));
        std::fs::write(&output, &text)
            .with_context(|| format!("Failed to write file: {:?}", output))?;

        converted.push(ConvertedFile {
            hash: content_hash(&text),
            source: path,
            output,
        });
    }

    tracing::info!(
        "Converted {} file(s) from {:?}",
        converted.len(),
        files.root()
    );

    Ok(converted)
}

/// Associate the comments of a source file with its function identifiers
pub fn associate_source_file(path: &Path) -> Result<AssociationMap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;
    let lines: Vec<&str> = content.lines().collect();

    let comments = extract_comment_lines(&lines);
    let signatures = extract_function_params(&lines);

    tracing::debug!(
        "{:?}: {} lines, {} comments, {} signatures",
        path,
        lines.len(),
        comments.len(),
        signatures.len()
    );

    Ok(associate(&comments, &signatures))
}

/// Print conversion results as text
pub fn print_conversions_text(converted: &[ConvertedFile]) {
    if converted.is_empty() {
        println!("No Markdown files found.");
        return;
    }

    for file in converted {
        println!("{} -> {}", file.source.display(), file.output.display());
    }
    println!("\n✓ Converted {} file(s)", converted.len());
}

/// Print conversion results as JSON
pub fn print_conversions_json(converted: &[ConvertedFile]) -> Result<()> {
    let json = serde_json::to_string_pretty(converted)?;
    println!("{}", json);
    Ok(())
}

/// Print associations as text
pub fn print_associations_text(associations: &AssociationMap) {
    if associations.is_empty() {
        println!("No associations found.");
        return;
    }

    print!("{}", associations);
}

/// Print associations as JSON
pub fn print_associations_json(associations: &AssociationMap) -> Result<()> {
    let json = serde_json::to_string_pretty(associations)?;
    println!("{}", json);
    Ok(())
}

/// Show the effective configuration
pub fn show_config(config: &ExtractConfig) -> Result<()> {
    let content = toml::to_string_pretty(config).context("Failed to serialize configuration")?;
    print!("{}", content);
    Ok(())
}

/// Write a default configuration file
pub fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "{:?} already exists. Use --force to overwrite.",
            config_path
        );
    }

    ExtractConfig::default().save(config_path)?;
    println!("✓ Wrote default configuration to {:?}", config_path);

    Ok(())
}
