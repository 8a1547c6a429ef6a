//! Configuration system for the frequency allocation encoder.
//!
//! Load encoder configuration from TOML or YAML files to control the problem
//! name, the output location and the header policy without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use freqalloc_config::{EncoderConfig, MaxDomainSizePolicy};
//!
//! let config = EncoderConfig::from_toml_str(r#"
//!     max_domain_size = "tuple_count"
//!
//!     [output]
//!     directory = "out"
//!     work_name = "celar-06"
//! "#).unwrap();
//!
//! assert_eq!(config.max_domain_size, MaxDomainSizePolicy::TupleCount);
//! assert_eq!(config.output.work_name.as_deref(), Some("celar-06"));
//! assert_eq!(config.problem_name, "FrequencyAllocationProblem");
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use freqalloc_config::EncoderConfig;
//!
//! let config = EncoderConfig::load("freqalloc.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problem name written as the first header token.
pub const DEFAULT_PROBLEM_NAME: &str = "FrequencyAllocationProblem";

/// Prefix of generated `.wcsp` file names.
pub const DEFAULT_FILE_PREFIX: &str = "FrequencyAllocationWCSP";

/// Marker file holding the current work name.
pub const DEFAULT_WORK_QUEUE_FILE: &str = "wcsp_queue.txt";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main encoder configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EncoderConfig {
    /// Problem name, the first token of the header line.
    #[serde(default = "default_problem_name")]
    pub problem_name: String,

    /// How the header's maximum domain size is computed.
    #[serde(default)]
    pub max_domain_size: MaxDomainSizePolicy,

    /// Output file location.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            problem_name: default_problem_name(),
            max_domain_size: MaxDomainSizePolicy::default(),
            output: OutputConfig::default(),
        }
    }
}

impl EncoderConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing YAML for `.yaml`/`.yml`
    /// extensions and TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, fails to parse or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks values the encoder cannot work with.
    ///
    /// The problem name is a single token of a whitespace-separated format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.problem_name.is_empty() || self.problem_name.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "problem_name must be one non-empty token, got {:?}",
                self.problem_name
            )));
        }
        if self.output.file_prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "output.file_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the problem name.
    pub fn with_problem_name(mut self, name: impl Into<String>) -> Self {
        self.problem_name = name.into();
        self
    }

    /// Sets the maximum domain size policy.
    pub fn with_max_domain_size(mut self, policy: MaxDomainSizePolicy) -> Self {
        self.max_domain_size = policy;
        self
    }

    /// Sets the output directory.
    pub fn with_output_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.output.directory = directory.into();
        self
    }

    /// Sets an explicit work name, bypassing the work queue file.
    pub fn with_work_name(mut self, name: impl Into<String>) -> Self {
        self.output.work_name = Some(name.into());
        self
    }
}

/// Computation of the header's maximum domain size.
///
/// The historical value is derived from the unfiltered frequency lists and is
/// not guaranteed to bound the domain sizes actually written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxDomainSizePolicy {
    /// `max(2 * |transmitters|, 2 * |receivers|)` over all stations.
    #[default]
    Original,

    /// The largest number of valid pairs of any station.
    TupleCount,
}

/// Where the encoded file is written.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputConfig {
    /// Directory receiving the output file.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// File name prefix; the file is `<prefix>_<work name>.wcsp`.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// File whose content names the current work.
    #[serde(default = "default_work_queue_file")]
    pub work_queue_file: PathBuf,

    /// Explicit work name. Takes precedence over the work queue file.
    #[serde(default)]
    pub work_name: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            file_prefix: default_file_prefix(),
            work_queue_file: default_work_queue_file(),
            work_name: None,
        }
    }
}

fn default_problem_name() -> String {
    DEFAULT_PROBLEM_NAME.to_string()
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

fn default_work_queue_file() -> PathBuf {
    PathBuf::from(DEFAULT_WORK_QUEUE_FILE)
}
