use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::{DetectorKind, RunConfig, default_model_path};

pub const CONFIG_FILE_NAME: &str = ".lidcheckrc.json";

pub const DEFAULT_OUTPUT_PATH: &str = "./output.csv";

pub const DEFAULT_LANGUAGE: &str = "English";

const TEMPLATE_RESOURCE_PATH: &str = "app/src/main/res/values/strings.xml";

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub resource_path: Option<String>,
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub detector: DetectorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_path: Option<String>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resource_path: None,
            output_path: None,
            language: default_language(),
            detector: DetectorKind::default(),
            model_path: None,
        }
    }
}

/// Values given on the command line. Each one wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub resource_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub language: Option<String>,
    pub detector: Option<DetectorKind>,
    pub model_path: Option<PathBuf>,
}

impl Config {
    /// Merge command-line overrides and validate the result.
    ///
    /// Fails if no resource path is configured, if it does not exist, or if
    /// the expected language is blank.
    pub fn resolve(self, overrides: ConfigOverrides) -> Result<RunConfig> {
        let resource_path = overrides
            .resource_path
            .or_else(|| self.resource_path.map(PathBuf::from))
            .context("'resourcePath' is missing in the config file! (or pass --resource)")?;

        if !resource_path.exists() {
            bail!("{} does not exist!", resource_path.display());
        }

        let output_path = match overrides
            .output_path
            .or_else(|| self.output_path.map(PathBuf::from))
        {
            Some(path) => path,
            None => {
                warn!(
                    "'outputPath' is missing in the config file! Defaulting to {}",
                    DEFAULT_OUTPUT_PATH
                );
                PathBuf::from(DEFAULT_OUTPUT_PATH)
            }
        };

        let expected_language = overrides.language.unwrap_or(self.language);
        if expected_language.trim().is_empty() {
            bail!("'language' must not be empty");
        }

        let model_path = overrides
            .model_path
            .or_else(|| self.model_path.map(PathBuf::from))
            .unwrap_or_else(default_model_path);

        Ok(RunConfig {
            resource_path,
            output_path,
            expected_language: expected_language.trim().to_string(),
            detector: overrides.detector.unwrap_or(self.detector),
            model_path,
        })
    }
}

/// Config written by `lidcheck init`.
pub fn default_config_json() -> Result<String> {
    let config = Config {
        resource_path: Some(TEMPLATE_RESOURCE_PATH.to_string()),
        output_path: Some(DEFAULT_OUTPUT_PATH.to_string()),
        ..Default::default()
    };
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

/// Load the config from `explicit` if given, otherwise search upwards from
/// `start_dir`. A missing explicit file is an error; a missing discovered file
/// falls back to defaults.
pub fn load_config(start_dir: &Path, explicit: Option<&Path>) -> Result<ConfigLoadResult> {
    let path = match explicit {
        Some(path) if !path.exists() => bail!("Config file not found: {}", path.display()),
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(start_dir),
    };

    match path {
        Some(path) => {
            info!("Loading config file from {}", path.display());
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Config file is not valid JSON: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
