//! TOML configuration.
//!
//! Every section is optional. Without a config file the built-in defaults
//! read `source/api_reference` and export to
//! `genesis_api_knowledge_base.json` in the working directory.

use anyhow::{bail, Context, Result};
use apiref_core::{BuildOptions, ExtractRules};
use globset::Glob;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DocsConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            include_globs: default_include_globs(),
            exclude_globs: Vec::new(),
            follow_symlinks: false,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("source/api_reference")
}
fn default_include_globs() -> Vec<String> {
    vec!["**/*.md".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExtractConfig {
    #[serde(default = "default_overview_headings")]
    pub overview_headings: Vec<String>,
    #[serde(default = "default_parameter_markers")]
    pub parameter_markers: Vec<String>,
    #[serde(default = "default_inheritance_markers")]
    pub inheritance_markers: Vec<String>,
    #[serde(default = "default_example_language")]
    pub example_language: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        let rules = ExtractRules::default();
        Self {
            overview_headings: rules.overview_headings,
            parameter_markers: rules.parameter_markers,
            inheritance_markers: rules.inheritance_markers,
            example_language: rules.example_language,
        }
    }
}

fn default_overview_headings() -> Vec<String> {
    ExtractRules::default().overview_headings
}
fn default_parameter_markers() -> Vec<String> {
    ExtractRules::default().parameter_markers
}
fn default_inheritance_markers() -> Vec<String> {
    ExtractRules::default().inheritance_markers
}
fn default_example_language() -> String {
    ExtractRules::default().example_language
}

impl ExtractConfig {
    pub fn rules(&self) -> ExtractRules {
        ExtractRules {
            overview_headings: self.overview_headings.clone(),
            parameter_markers: self.parameter_markers.clone(),
            inheritance_markers: self.inheritance_markers.clone(),
            example_language: self.example_language.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct IndexConfig {
    /// Keep documents from unmapped directories in their own bucket.
    #[serde(default)]
    pub create_missing_categories: bool,
}

impl IndexConfig {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            create_missing_categories: self.create_missing_categories,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SnapshotConfig {
    #[serde(default = "default_snapshot_path")]
    pub path: PathBuf,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_snapshot_path(),
        }
    }
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("genesis_api_knowledge_base.json")
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;
    validate(&config)?;

    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to defaults.
pub fn load_config_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::default())
    }
}

fn validate(config: &Config) -> Result<()> {
    if config.docs.include_globs.is_empty() {
        bail!("docs.include_globs must not be empty");
    }
    for pattern in config.docs.include_globs.iter().chain(&config.docs.exclude_globs) {
        Glob::new(pattern).with_context(|| format!("Invalid glob pattern: '{}'", pattern))?;
    }

    let extract = &config.extract;
    if extract.example_language.trim().is_empty() {
        bail!("extract.example_language must not be empty");
    }
    if extract.overview_headings.is_empty() {
        bail!("extract.overview_headings must list at least one heading");
    }
    if extract.parameter_markers.is_empty() {
        bail!("extract.parameter_markers must list at least one marker");
    }
    if extract.inheritance_markers.is_empty() {
        bail!("extract.inheritance_markers must list at least one marker");
    }

    match config.logging.level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => {}
        other => bail!(
            "Unknown logging level: '{}'. Must be trace, debug, info, warn, error, or off.",
            other
        ),
    }

    Ok(())
}
