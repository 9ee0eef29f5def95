use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use yaml_rust::{Yaml, YamlLoader};

pub const CONFIG_ENV: &str = "F1_DASH_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "f1-dash.yaml";
pub const DEFAULT_PORT: u16 = 20777;
pub const DEFAULT_LOG_FILE: &str = "f1-dash.log";

#[derive(Debug)]
pub enum ConfigError {
    Read(PathBuf, io::Error),
    Parse(String),
    InvalidValue { key: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(path, err) => write!(f, "failed to read {}: {}", path.display(), err),
            ConfigError::Parse(err) => write!(f, "failed to parse yaml: {}", err),
            ConfigError::InvalidValue { key, reason } => write!(f, "invalid '{}': {}", key, reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read(_, err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Full name of the player as the game reports it; shown abbreviated.
    pub driver_name: String,
    pub port: u16,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            driver_name: String::new(),
            port: DEFAULT_PORT,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Reads the file named by `F1_DASH_CONFIG`, or `f1-dash.yaml`.
    pub fn from_env() -> Result<Config, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Config::load(&path)
    }

    /// A missing file is not an error; it just means defaults.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Config::try_from(contents.as_str()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(err) => Err(ConfigError::Read(path.to_path_buf(), err)),
        }
    }
}

impl TryFrom<&str> for Config {
    type Error = ConfigError;

    fn try_from(str: &str) -> Result<Self, Self::Error> {
        let docs = YamlLoader::load_from_str(str)
            .map_err(|err| ConfigError::Parse(format!("{:?}", err)))?;
        let mut config = Config::default();

        let parsed = match docs.first() {
            Some(parsed) => parsed,
            None => return Ok(config),
        };
        match parsed {
            Yaml::Hash(_) => {}
            Yaml::Null => return Ok(config),
            _ => return Err(ConfigError::Parse("top level must be a mapping".to_string())),
        }

        if let Some(name) = string_value(parsed, "driver_name")? {
            config.driver_name = name.trim().to_string();
        }

        match &parsed["port"] {
            Yaml::BadValue | Yaml::Null => {}
            Yaml::Integer(port) => {
                config.port = u16::try_from(*port).ok().filter(|port| *port != 0).ok_or_else(|| {
                    ConfigError::InvalidValue { key: "port", reason: format!("{} is not a port", port) }
                })?;
            }
            other => {
                return Err(ConfigError::InvalidValue {
                    key: "port",
                    reason: format!("expected an integer, got {:?}", other),
                })
            }
        }

        if let Some(log_file) = string_value(parsed, "log_file")? {
            config.log_file = PathBuf::from(log_file);
        }

        if let Some(level) = string_value(parsed, "log_level")? {
            config.log_level = level.parse().map_err(|_| ConfigError::InvalidValue {
                key: "log_level",
                reason: format!("unknown level '{}'", level),
            })?;
        }

        Ok(config)
    }
}

fn string_value<'a>(parsed: &'a Yaml, key: &'static str) -> Result<Option<&'a str>, ConfigError> {
    match &parsed[key] {
        Yaml::BadValue | Yaml::Null => Ok(None),
        Yaml::String(value) => Ok(Some(value.as_str())),
        other => Err(ConfigError::InvalidValue {
            key,
            reason: format!("expected a string, got {:?}", other),
        }),
    }
}
