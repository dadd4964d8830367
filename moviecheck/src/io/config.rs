//! Check thresholds stored in `moviecheck.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "moviecheck.toml";

/// Checker configuration (TOML).
///
/// Missing tables and fields fall back to the catalogue's business rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CheckConfig {
    pub posters: PosterConfig,
    pub genres: GenreConfig,
    pub titles: TitleConfig,
    pub expect: ExpectConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PosterConfig {
    /// Let several records have a null poster without counting as duplicates.
    pub allow_shared_null: bool,

    /// Poster URLs longer than this many bytes are invalid.
    pub max_url_length: usize,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            allow_shared_null: false,
            max_url_length: 2048,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GenreConfig {
    /// A record scores "high" when its genre id sum exceeds this.
    pub score_threshold: i64,

    /// High-scoring records must number strictly fewer than this.
    pub max_records_over: usize,
}

impl Default for GenreConfig {
    fn default() -> Self {
        Self {
            score_threshold: 400,
            max_records_over: 7,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TitleConfig {
    pub min_palindromes: usize,

    /// Contained-title pairs must number strictly more than this.
    pub min_substring_pairs_exclusive: usize,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            min_palindromes: 1,
            min_substring_pairs_exclusive: 2,
        }
    }
}

/// Optional per-fetch expectations; unset means the check is skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExpectConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl CheckConfig {
    pub fn validate(&self) -> Result<()> {
        if self.posters.max_url_length == 0 {
            return Err(anyhow!("posters.max_url_length must be > 0"));
        }
        if self.genres.max_records_over == 0 {
            return Err(anyhow!("genres.max_records_over must be > 0"));
        }
        if let Some(title) = &self.expect.title {
            if title.trim().is_empty() {
                return Err(anyhow!("expect.title must not be blank"));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CheckConfig::default()`.
pub fn load_config(path: &Path) -> Result<CheckConfig> {
    if !path.exists() {
        let cfg = CheckConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CheckConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &CheckConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
