use crate::cli::Cli;
use crate::error::{CliError, Result};
use molconv::core::io::Strictness;
use molconv::engine::config::{ConversionConfig, ConversionConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialIoConfig {
    strictness: Option<Strictness>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialBatchConfig {
    threads: Option<usize>,
}

/// Settings as read from a TOML file; every field may be omitted.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    read: Option<PartialIoConfig>,
    write: Option<PartialIoConfig>,
    batch: Option<PartialBatchConfig>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub conversion: ConversionConfig,
    pub threads: Option<usize>,
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reads the file named by `--config`, or starts from an empty config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides on top of the file values.
    pub fn merge_with_cli(self, cli: &Cli) -> Result<AppConfig> {
        let read = self.read.unwrap_or_default();
        let write = self.write.unwrap_or_default();
        let batch = self.batch.unwrap_or_default();

        let threads = cli.threads.or(batch.threads);
        if threads == Some(0) {
            return Err(CliError::Config(
                "The number of threads must be at least 1.".to_string(),
            ));
        }

        let mut builder = ConversionConfigBuilder::new();
        if let Some(level) = cli.strictness.or(read.strictness) {
            builder = builder.read_strictness(level);
        }
        if let Some(level) = write.strictness {
            builder = builder.write_strictness(level);
        }

        Ok(AppConfig {
            conversion: builder.build(),
            threads,
        })
    }
}
