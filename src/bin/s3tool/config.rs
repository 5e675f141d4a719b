// Configuration loading for s3tool

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use s3tool::oss::AwsS3ObjectStoreConfig;

/// s3tool configuration
#[derive(Deserialize, Serialize)]
pub struct S3ToolConfig {
    /// Store connection settings (bucket, region, prefix, credentials)
    pub store: AwsS3ObjectStoreConfig,
}

impl S3ToolConfig {
    /// Load configuration from file
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let path = match config_path {
            Some(p) => PathBuf::from(shellexpand::tilde(p).to_string()),
            None => Self::default_config_path()?,
        };

        if !path.exists() {
            return Err(anyhow::anyhow!(
                "Config file not found: {}. Please create it first.",
                path.display()
            ));
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        // Expand environment variables in the config content
        let expanded_content = expand_env_vars(&content);

        let config: Self = serde_yaml::from_str(&expanded_content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Get default config path (~/.s3tool/config.yaml)
    pub fn default_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home.join(".s3tool").join("config.yaml"))
    }
}

/// Expand environment variables in the format ${VAR_NAME}
///
/// References to unset variables are left untouched.
fn expand_env_vars(content: &str) -> String {
    let re = regex_lite::Regex::new(r"\$\{([^}]+)\}").unwrap();

    let mut result = content.to_string();
    for cap in re.captures_iter(content) {
        if let Ok(value) = std::env::var(&cap[1]) {
            result = result.replace(&cap[0], &value);
        }
    }

    result
}
