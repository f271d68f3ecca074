//! Table configuration.
//!
//! Values are resolved from built-in defaults, then a TOML file named by
//! `SHORTSTACK_CONFIG`, then environment variables, then command-line flags.
//! Each later layer overrides the earlier ones and the winning layer is
//! recorded per value.

use serde::{Deserialize, Serialize};
use shortstack_ai::default_roster;
use shortstack_engine::engine::Blinds;
use shortstack_engine::player::STARTING_STACK;
use std::fs;

use crate::commands::eval::REFERENCE_SEAT;

pub const CONFIG_ENV: &str = "SHORTSTACK_CONFIG";
pub const SEED_ENV: &str = "SHORTSTACK_SEED";
pub const STACK_ENV: &str = "SHORTSTACK_STACK";
pub const BOTS_ENV: &str = "SHORTSTACK_BOTS";

/// Seats a single deck can always serve: 9 x 2 private cards plus 5 on the board.
pub const MAX_BOTS: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub bots: usize,
    pub seed: Option<u64>,
    pub human_name: String,
}

impl Config {
    pub fn blinds(&self) -> Blinds {
        Blinds {
            small: self.small_blind,
            big: self.big_blind,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let blinds = Blinds::default();
        Self {
            starting_stack: STARTING_STACK,
            small_blind: blinds.small,
            big_blind: blinds.big,
            bots: 4,
            seed: None,
            human_name: "You".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Flag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub bots: ValueSource,
    pub seed: ValueSource,
    pub human_name: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            bots: ValueSource::Default,
            seed: ValueSource::Default,
            human_name: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

/// Values given on the command line. `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub starting_stack: Option<u32>,
    pub bots: Option<usize>,
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
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load(overrides: &Overrides) -> Result<Config, ConfigError> {
    load_with_sources(overrides).map(|resolved| resolved.config)
}

pub fn load_with_sources(overrides: &Overrides) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.bots {
            cfg.bots = v;
            sources.bots = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.human_name {
            cfg.human_name = v;
            sources.human_name = ValueSource::File;
        }
    }

    if let Some(seed) = env_value(SEED_ENV, "seed")? {
        cfg.seed = Some(seed);
        sources.seed = ValueSource::Env;
    }
    if let Some(stack) = env_value(STACK_ENV, "starting stack")? {
        cfg.starting_stack = stack;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(bots) = env_value(BOTS_ENV, "bot count")? {
        cfg.bots = bots;
        sources.bots = ValueSource::Env;
    }

    if let Some(seed) = overrides.seed {
        cfg.seed = Some(seed);
        sources.seed = ValueSource::Flag;
    }
    if let Some(stack) = overrides.starting_stack {
        cfg.starting_stack = stack;
        sources.starting_stack = ValueSource::Flag;
    }
    if let Some(bots) = overrides.bots {
        cfg.bots = bots;
        sources.bots = ValueSource::Flag;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value<T: std::str::FromStr>(key: &str, what: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {} in {}: {}", what, key, v))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    bots: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    human_name: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    if cfg.small_blind == 0 || cfg.small_blind > cfg.big_blind {
        return Err(ConfigError::Invalid(
            "Invalid configuration: blinds must satisfy 0 < small_blind <= big_blind".into(),
        ));
    }
    if !(1..=MAX_BOTS).contains(&cfg.bots) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: bots must be between 1 and {}",
            MAX_BOTS
        )));
    }
    if cfg.human_name.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: human_name must not be empty".into(),
        ));
    }
    let taken = default_roster(cfg.bots)
        .into_iter()
        .map(|(name, _)| name)
        .chain(std::iter::once(REFERENCE_SEAT.to_string()))
        .any(|name| name == cfg.human_name);
    if taken {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: human_name '{}' is already a seat name",
            cfg.human_name
        )));
    }
    Ok(())
}
