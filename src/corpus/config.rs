//! Run configuration for infoextract

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up when none is given
pub const DEFAULT_CONFIG_FILE: &str = "infoextract.toml";

/// Locations used by the extraction flows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Directory searched recursively for Markdown chapters
    #[serde(default = "default_chapters_path")]
    pub chapters_path: PathBuf,

    /// Directory receiving one `.txt` file per chapter
    #[serde(default = "default_out_path")]
    pub out_path: PathBuf,

    /// Source file used for comment/parameter association
    #[serde(default = "default_sample_jl_file")]
    pub sample_jl_file: PathBuf,

    /// Extension of the Markdown chapters
    #[serde(default = "default_markdown_extension")]
    pub markdown_extension: String,
}

fn default_chapters_path() -> PathBuf {
    PathBuf::from("./epicookbook-master/_chapters")
}

fn default_out_path() -> PathBuf {
    PathBuf::from("./epicookbook-master/_chapters/output_txt")
}

fn default_sample_jl_file() -> PathBuf {
    PathBuf::from("./test/info_extraction/sample_cookbook_jl/NHosts1Vector.jl")
}

fn default_markdown_extension() -> String {
    "md".to_string()
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            chapters_path: default_chapters_path(),
            out_path: default_out_path(),
            sample_jl_file: default_sample_jl_file(),
            markdown_extension: default_markdown_extension(),
        }
    }
}

impl ExtractConfig {
    /// Load configuration from a file or return defaults if it is absent
    pub fn load_or_default(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: ExtractConfig = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    /// Replace the Markdown locations with any values given explicitly
    pub fn with_markdown_paths(mut self, chapters: Option<PathBuf>, out: Option<PathBuf>) -> Self {
        if let Some(chapters) = chapters {
            self.chapters_path = chapters;
        }
        if let Some(out) = out {
            self.out_path = out;
        }
        self
    }
}
