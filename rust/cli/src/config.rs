//! Session configuration: defaults, optionally overridden by a TOML file
//! named in `FELT_CONFIG`, then by the `FELT_SEED` environment variable.

use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_bankroll: f64,
    pub seed: Option<u64>,
    pub log_path: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_bankroll: ValueSource,
    pub seed: ValueSource,
    pub log_path: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_bankroll: ValueSource::Default,
            seed: ValueSource::Default,
            log_path: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        // the house stakes every newcomer ten dollars
        Self {
            starting_bankroll: 10.0,
            seed: None,
            log_path: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "io: {}", e),
            ConfigError::Parse(e) => write!(f, "parse: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid: {}", msg),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    starting_bankroll: Option<f64>,
    seed: Option<u64>,
    log_path: Option<String>,
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FELT_CONFIG") {
        let s = fs::read_to_string(path)?;
        apply_file(&mut cfg, &mut sources, &s)?;
    }

    if let Ok(seed) = std::env::var("FELT_SEED")
        && !seed.is_empty()
    {
        let parsed = seed
            .parse::<u64>()
            .map_err(|_| ConfigError::Invalid(format!("FELT_SEED must be a u64, got {:?}", seed)))?;
        cfg.seed = Some(parsed);
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn apply_file(
    cfg: &mut Config,
    sources: &mut ConfigSources,
    contents: &str,
) -> Result<(), ConfigError> {
    let f: FileConfig = toml::from_str(contents)?;
    if let Some(v) = f.starting_bankroll {
        cfg.starting_bankroll = v;
        sources.starting_bankroll = ValueSource::File;
    }
    if let Some(v) = f.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::File;
    }
    if let Some(v) = f.log_path {
        cfg.log_path = Some(v);
        sources.log_path = ValueSource::File;
    }
    Ok(())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !cfg.starting_bankroll.is_finite() || cfg.starting_bankroll < 0.0 {
        return Err(ConfigError::Invalid(format!(
            "starting_bankroll must be a non-negative finite number, got {}",
            cfg.starting_bankroll
        )));
    }
    Ok(())
}
