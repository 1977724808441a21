//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `--config <path>` on the command line
//! 2. `$BUBBLE_CONFIG` environment variable
//! 3. `~/.config/bubble/config.toml`
//! 4. Built-in defaults (everything is optional)

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bubble_core::{PassPolicy, SortError, SortResult};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub sort: SortConfig,
    pub bench: BenchConfig,
}

/// Random input generation for `bubble run`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// How many numbers to generate.
    pub count: usize,
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
    /// Fixed RNG seed. Unset means a fresh sequence every run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SortConfig {
    /// Stop after the first pass without swaps.
    pub early_exit: bool,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub warmup_ms: u64,
    pub run_ms: u64,
}

// --- Defaults ---

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            count: 500,
            min: 0,
            max: 1000,
            seed: None,
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 500, 1000, 2000],
            warmup_ms: 50,
            run_ms: 300,
        }
    }
}

impl SortConfig {
    pub fn policy(&self) -> PassPolicy {
        PassPolicy::from_early_exit(self.early_exit)
    }
}

// Sections are validated by the command that reads them, not on load.

impl InputConfig {
    pub fn validate(&self) -> SortResult<()> {
        if self.min > self.max {
            return Err(SortError::Config(format!(
                "input.min ({}) is greater than input.max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl BenchConfig {
    pub fn validate(&self) -> SortResult<()> {
        if self.sizes.is_empty() {
            return Err(SortError::Config("bench.sizes must not be empty".into()));
        }
        Ok(())
    }
}

/// Load config from disk. Returns defaults if no config file exists.
///
/// An explicitly requested file must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(p) = explicit {
        if !p.exists() {
            bail!("config file not found: {}", p.display());
        }
        return read_config(p);
    }

    if let Some(p) = config_path() {
        if p.exists() {
            return read_config(&p);
        }
    }

    Ok(Config::default())
}

fn read_config(p: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("parsing {}", p.display()))?;
    Ok(config)
}

/// Resolve the config file path.
fn config_path() -> Option<PathBuf> {
    // 1. Environment variable
    if let Ok(p) = std::env::var("BUBBLE_CONFIG") {
        return Some(PathBuf::from(p));
    }

    // 2. ~/.config/bubble/config.toml
    if let Some(home) = dirs_home() {
        let p = home.join(".config").join("bubble").join("config.toml");
        return Some(p);
    }

    None
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Show the active config path (for `bubble config`).
pub fn show_config_path(explicit: Option<&Path>) -> String {
    if let Some(p) = explicit {
        return format!("{} (from --config)", p.display());
    }
    match config_path() {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (not found, using defaults)", p.display()),
        None => "no config path resolved (using defaults)".into(),
    }
}
