use crate::models::ShellConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Configuration manager for loading and saving the shell YAML configuration.
///
/// Manages a single file, `appshell.yaml`, inside the configuration
/// directory. A missing file yields defaults rather than an error so first
/// runs work without any setup.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    shell_config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// The directory is created if it does not exist yet.
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            shell_config_path: config_dir.join("appshell.yaml"),
            config_dir,
        })
    }

    /// Load the shell configuration file.
    ///
    /// # Returns
    /// The loaded ShellConfig, or defaults if the file doesn't exist
    pub fn load_shell_config(&self) -> Result<ShellConfig> {
        if !self.shell_config_path.exists() {
            tracing::warn!(
                "Shell config file not found at {}, using defaults",
                self.shell_config_path
            );
            return Ok(ShellConfig::default());
        }

        let file_contents = fs::read_to_string(&self.shell_config_path)
            .with_context(|| format!("Failed to read shell config: {}", self.shell_config_path))?;

        let config: ShellConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse shell config: {}", self.shell_config_path))?;

        tracing::info!("Loaded shell config from {}", self.shell_config_path);
        Ok(config)
    }

    /// Save the shell configuration file.
    pub fn save_shell_config(&self, config: &ShellConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize shell config to YAML")?;

        fs::write(&self.shell_config_path, yaml_string)
            .with_context(|| format!("Failed to write shell config: {}", self.shell_config_path))?;

        tracing::info!("Saved shell config to {}", self.shell_config_path);
        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}
