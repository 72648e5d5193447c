use crate::error::ConfigError;
use crate::simulate::Limits;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Run obstruction trials on the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Optional per-run step budget; unset means unbounded
    #[serde(default)]
    pub max_steps: Option<u64>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub json: bool,
    #[serde(default)]
    pub render: bool,
    /// Also write the JSON report to this file
    #[serde(default)]
    pub path: Option<String>,
}

// Default values
fn default_input_path() -> String { "input.txt".to_string() }
fn default_parallel() -> bool { true }
fn default_log_filter() -> String { "warn".to_string() }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            max_steps: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            render: false,
            path: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            search: SearchConfig::default(),
            logging: LoggingConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Run limits for each simulation
    pub fn limits(&self) -> Limits {
        Limits {
            max_steps: self.max_steps,
        }
    }
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// Nothing is logged here: this runs before the tracing subscriber is
    /// installed, so the caller reports the error once logging is up.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigError::Missing { path: path.to_path_buf() }
            } else {
                ConfigError::Read { path: path.to_path_buf(), source }
            }
        })?;

        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration, falling back to defaults on any error.
    ///
    /// The error is handed back alongside the defaults so it can be logged.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<ConfigError>) {
        match Self::load(path) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
