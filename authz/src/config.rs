//! Redirect targets used by the route guards.
//!
//! ```yaml
//! redirects:
//!   login: /auth/login
//!   seller_home: /vendedor/inicio
//! ```
//!
//! Keys left out keep their defaults.

use crate::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Paths a denied navigation is sent to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectTargets {
    /// Sign-in page, for missing sessions and unrecognised roles
    pub login: String,
    /// Seller landing page
    pub seller_home: String,
    /// Application root, where superadmins land
    pub root: String,
    /// Default dashboard, for role-allowed users lacking a permission
    pub dashboard: String,
}

impl Default for RedirectTargets {
    fn default() -> Self {
        Self {
            login: "/login".to_string(),
            seller_home: "/vendedor/dashboard".to_string(),
            root: "/".to_string(),
            dashboard: "/dashboard".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub redirects: RedirectTargets,
}

impl GuardConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).map_err(|e| AuthzError::ConfigParse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| AuthzError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_yaml_str(&source)?;
        tracing::debug!(path = %path.display(), "Loaded guard configuration");
        Ok(config)
    }
}
