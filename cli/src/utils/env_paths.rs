use anyhow::{Context, Result};
use authz::GuardConfig;
use std::env;
use std::path::{Path, PathBuf};

/// File name looked up inside the configuration directory
pub const GUARD_CONFIG_FILE: &str = "guard.yaml";

/// Environment-based path configuration
#[derive(Debug, Clone)]
pub struct EnvPaths {
    pub configuration_path: PathBuf,
}

impl EnvPaths {
    /// Load paths from environment variables with defaults
    pub fn load() -> Result<Self> {
        Self::load_with_base(None)
    }

    /// Load paths from environment variables with an optional base directory
    /// This is primarily for testing purposes
    pub fn load_with_base(base_dir: Option<PathBuf>) -> Result<Self> {
        let base = if let Some(base) = base_dir {
            base
        } else {
            // Try to load .env file if it exists in current directory
            if let Ok(env_path) = env::current_dir() {
                let env_file = env_path.join(".env");
                if env_file.exists() {
                    dotenv::from_path(&env_file).ok();
                }
            }
            env::current_dir().context("Failed to get current directory")?
        };

        Ok(Self {
            configuration_path: Self::get_path_from_env("CONFIGURATION_PATH", "./config", &base),
        })
    }

    /// Get a path from environment variable or use default
    fn get_path_from_env(var_name: &str, default: &str, base_dir: &Path) -> PathBuf {
        let path = PathBuf::from(env::var(var_name).unwrap_or_else(|_| default.to_string()));

        // If the path is relative, make it relative to the base directory
        if path.is_relative() {
            base_dir.join(path)
        } else {
            path
        }
    }

    /// Default location of the guard configuration
    pub fn guard_config_path(&self) -> PathBuf {
        self.configuration_path.join(GUARD_CONFIG_FILE)
    }

    /// Load the guard configuration.
    ///
    /// An explicit path (flag or `TRIBUTA_GUARD_CONFIG`) must exist. The
    /// default location may be absent, in which case built-in targets apply.
    pub fn load_guard_config(&self, explicit: Option<&Path>) -> Result<GuardConfig> {
        if let Some(path) = explicit {
            return GuardConfig::load(path)
                .with_context(|| format!("Failed to load guard config {}", path.display()));
        }

        let default_path = self.guard_config_path();
        if default_path.exists() {
            GuardConfig::load(&default_path)
                .with_context(|| format!("Failed to load guard config {}", default_path.display()))
        } else {
            tracing::debug!(
                path = %default_path.display(),
                "No guard configuration found, using defaults"
            );
            Ok(GuardConfig::default())
        }
    }
}
