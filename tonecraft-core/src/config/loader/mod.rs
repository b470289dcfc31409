use crate::config::constants::files;
use crate::config::core::{ApiConfig, LoggingConfig, RewriteConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for ToneCraft
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ToneCraftConfig {
    /// Tone, model and sampling settings
    #[serde(default)]
    pub rewrite: RewriteConfig,

    /// Credentials and HTTP client settings
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ToneCraftConfig {
    /// Check every value that serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        self.rewrite
            .validate()
            .context("Invalid [rewrite] configuration")?;
        if self.api.request_timeout_secs == 0 {
            anyhow::bail!("api.request_timeout_secs must be greater than zero");
        }
        if self.api.connect_timeout_secs == 0 {
            anyhow::bail!("api.connect_timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// Write `tonecraft.toml` into `workspace`, or into `~/.tonecraft/` when
    /// `use_home_dir` is set. Existing files are left alone unless `force` is set.
    ///
    /// Returns the paths that were written.
    pub fn bootstrap_project<P: AsRef<Path>>(
        workspace: P,
        force: bool,
        use_home_dir: bool,
    ) -> Result<Vec<PathBuf>> {
        let workspace = workspace.as_ref();
        let mut created_files = Vec::new();

        let config_path = if use_home_dir {
            match ConfigManager::get_home_dir() {
                Some(home_dir) => {
                    let dir = home_dir.join(files::CONFIG_DIR);
                    if !dir.exists() {
                        fs::create_dir_all(&dir).with_context(|| {
                            format!("Failed to create directory: {}", dir.display())
                        })?;
                    }
                    dir.join(files::CONFIG_FILE)
                }
                None => workspace.join(files::CONFIG_FILE),
            }
        } else {
            workspace.join(files::CONFIG_FILE)
        };

        if !config_path.exists() || force {
            Self::create_sample_config(&config_path)?;
            created_files.push(config_path);
        }

        Ok(created_files)
    }

    /// Create sample configuration file
    pub fn create_sample_config<P: AsRef<Path>>(output: P) -> Result<()> {
        let output = output.as_ref();
        let default_config = ToneCraftConfig::default();
        let config_content = toml::to_string_pretty(&default_config)
            .context("Failed to serialize default configuration")?;

        fs::write(output, config_content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(())
    }
}

/// Configuration manager for loading and validating configurations
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: ToneCraftConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    fn get_home_dir() -> Option<PathBuf> {
        dirs::home_dir()
    }

    /// Load configuration for a workspace.
    ///
    /// Looks for `tonecraft.toml`, then `.tonecraft/tonecraft.toml`, then
    /// `~/.tonecraft/tonecraft.toml`, and falls back to defaults.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace = workspace.as_ref();

        let mut candidates = vec![
            workspace.join(files::CONFIG_FILE),
            workspace.join(files::CONFIG_DIR).join(files::CONFIG_FILE),
        ];
        if let Some(home_dir) = Self::get_home_dir() {
            candidates.push(home_dir.join(files::CONFIG_DIR).join(files::CONFIG_FILE));
        }

        for path in candidates {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        tracing::debug!(workspace = %workspace.display(), "no tonecraft.toml found, using defaults");
        Ok(Self {
            config: ToneCraftConfig::default(),
            config_path: None,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ToneCraftConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    pub fn config(&self) -> &ToneCraftConfig {
        &self.config
    }

    /// Mutable access for command-line overrides
    pub fn config_mut(&mut self) -> &mut ToneCraftConfig {
        &mut self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::Tone;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_file_exists() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::load_from_workspace(dir.path()).unwrap();
        // A config in the real home directory would be picked up here
        if manager.config_path().is_none() {
            assert_eq!(manager.config(), &ToneCraftConfig::default());
        }
    }

    #[test]
    fn loads_workspace_file_with_partial_sections() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("tonecraft.toml"),
            r#"
[rewrite]
default_tone = "professional"
temperature = 0.2

[api]
api_key_env = "MY_GEMINI_KEY"
"#,
        )
        .unwrap();

        let manager = ConfigManager::load_from_workspace(dir.path()).unwrap();
        let config = manager.config();
        assert_eq!(config.rewrite.default_tone, Tone::Professional);
        assert_eq!(config.rewrite.temperature, 0.2);
        assert_eq!(config.rewrite.model, "gemini-2.5-flash-lite");
        assert_eq!(config.api.api_key_env, "MY_GEMINI_KEY");
        assert_eq!(config.api.request_timeout_secs, 60);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(
            manager.config_path(),
            Some(dir.path().join("tonecraft.toml").as_path())
        );
    }

    #[test]
    fn falls_back_to_dot_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join(".tonecraft");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            nested.join("tonecraft.toml"),
            "[rewrite]\nmodel = \"gemini-2.5-flash\"\n",
        )
        .unwrap();

        let manager = ConfigManager::load_from_workspace(dir.path()).unwrap();
        assert_eq!(manager.config().rewrite.model, "gemini-2.5-flash");
        assert_eq!(
            manager.config_path(),
            Some(nested.join("tonecraft.toml").as_path())
        );
    }

    #[test]
    fn rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tonecraft.toml");
        fs::write(&path, "[rewrite]\ntemperature = 3.0\n").unwrap();

        let err = format!("{:#}", ConfigManager::load_from_file(&path).unwrap_err());
        assert!(err.contains("temperature"));

        fs::write(&path, "[rewrite]\ndefault_tone = \"grumpy\"\n").unwrap();
        let err = format!("{:#}", ConfigManager::load_from_file(&path).unwrap_err());
        assert!(err.contains("grumpy"));
    }

    #[test]
    fn rejects_zero_timeouts() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tonecraft.toml");

        fs::write(&path, "[api]
connect_timeout_secs = 0
").unwrap();
        let err = format!("{:#}", ConfigManager::load_from_file(&path).unwrap_err());
        assert!(err.contains("connect_timeout_secs"), "{err}");

        fs::write(&path, "[api]
request_timeout_secs = 0
").unwrap();
        let err = format!("{:#}", ConfigManager::load_from_file(&path).unwrap_err());
        assert!(err.contains("request_timeout_secs"), "{err}");
    }

    #[test]
    fn bootstrap_writes_loadable_sample_and_respects_force() {
        let dir = TempDir::new().unwrap();

        let created = ToneCraftConfig::bootstrap_project(dir.path(), false, false).unwrap();
        assert_eq!(created, vec![dir.path().join("tonecraft.toml")]);

        let reloaded = ConfigManager::load_from_file(&created[0]).unwrap();
        assert_eq!(reloaded.config(), &ToneCraftConfig::default());

        let again = ToneCraftConfig::bootstrap_project(dir.path(), false, false).unwrap();
        assert!(again.is_empty());

        let forced = ToneCraftConfig::bootstrap_project(dir.path(), true, false).unwrap();
        assert_eq!(forced.len(), 1);
    }
}
