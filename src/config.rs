use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path();
        if config_path.exists() {
            let raw = fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read config file {}", config_path.display()))?;
            let parsed: Config = toml::from_str(&raw)
                .with_context(|| format!("failed to parse TOML from {}", config_path.display()))?;
            return Ok(parsed);
        }

        Ok(Config::default())
    }
}

fn resolve_config_path() -> PathBuf {
    if let Ok(path) = env::var("TYPEAHEAD_CONFIG") {
        return Path::new(&path).to_path_buf();
    }

    if let Some(base) = dirs::config_dir() {
        return base.join("typeahead").join("config.toml");
    }

    Path::new("/tmp/typeahead.toml").to_path_buf()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

fn default_prompt() -> String {
    "Enter input: ".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

fn default_max_results() -> usize {
    crate::engine::DEFAULT_MAX_RESULTS
}
