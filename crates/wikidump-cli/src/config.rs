//! Optional `wikidump.toml` settings, merged under the command-line flags.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use wikidump_acquire::source::{DEFAULT_API_URL, DEFAULT_USER_AGENT};
use wikidump_acquire::SourceOptions;
use wikidump_model::{DEFAULT_LANGUAGE, DEFAULT_OUTPUT_DIR};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "wikidump.toml";

/// Settings read from the TOML config file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Wikipedia language edition (e.g., "es").
    pub language: Option<String>,
    pub output_dir: Option<PathBuf>,
    /// Topic titles, in output order.
    pub topics: Option<Vec<String>>,
    /// API endpoint; `{lang}` is replaced by the language code.
    pub api_url: Option<String>,
    pub user_agent: Option<String>,
    pub auto_suggest: Option<bool>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(topics) = &self.topics {
            anyhow::ensure!(
                topics.iter().all(|t| !t.trim().is_empty()),
                "topics must not contain empty titles"
            );
        }
        if let Some(url) = &self.api_url {
            anyhow::ensure!(
                url.starts_with("http://") || url.starts_with("https://"),
                "api_url must be an http(s) URL, got '{url}'"
            );
        }
        anyhow::ensure!(self.timeout_secs != Some(0), "timeout_secs must be > 0");
        Ok(())
    }
}

/// Load the config file.
///
/// An explicitly requested file must exist. Without one, `wikidump.toml` in
/// the working directory is used if present, otherwise all defaults apply.
pub fn load_config(explicit: Option<&Path>) -> Result<FileConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !fallback.exists() {
                return Ok(FileConfig::default());
            }
            fallback
        }
    };

    let contents =
        fs::read_to_string(&path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FileConfig =
        toml::from_str(&contents).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(cfg)
}

/// Values given on the command line; each one overrides the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub language: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub topics_file: Option<PathBuf>,
    pub auto_suggest: bool,
}

/// Fully resolved run settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub language: String,
    pub output_dir: PathBuf,
    pub topics: Vec<String>,
    pub source: SourceOptions,
}

impl Settings {
    pub fn resolve(cfg: FileConfig, overrides: Overrides) -> Result<Self> {
        let topics = match &overrides.topics_file {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("read topics file {}", path.display()))?;
                wikidump_model::parse_topic_list(&text)
            }
            None => cfg.topics.unwrap_or_else(wikidump_model::default_topics),
        };

        Ok(Self {
            language: overrides
                .language
                .or(cfg.language)
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            output_dir: overrides
                .output_dir
                .or(cfg.output_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            topics,
            source: SourceOptions {
                api_url: cfg.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                user_agent: cfg.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
                timeout: cfg.timeout_secs.map(Duration::from_secs),
                auto_suggest: overrides.auto_suggest || cfg.auto_suggest.unwrap_or(false),
            },
        })
    }
}
