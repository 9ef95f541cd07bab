//! Core authorization types: roles, the user snapshot and guard decisions.
//!
//! The [`User`] is a read-only snapshot of whatever the authentication flow
//! last fetched from the backend. Nothing in this crate mutates it; callers
//! pass the current snapshot into every check and re-run checks after the
//! session is refreshed.

use crate::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Prefix of the older boolean permission flags (`puede_PRODUCTOS_EDITAR`).
pub const LEGACY_FLAG_PREFIX: &str = "puede_";

/// Payload keys that describe the user rather than grant anything.
const NON_FLAG_KEYS: [&str; 5] = ["role", "rol", "permisos", "id", "email"];

/// Dashboard role as reported by the backend.
///
/// Serialized as the backend's upper-case strings. Unknown roles are kept
/// verbatim in [`Role::Other`] so they still round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Superadmin,
    Vendedor,
    Usuario,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Superadmin => "SUPERADMIN",
            Self::Vendedor => "VENDEDOR",
            Self::Usuario => "USUARIO",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "SUPERADMIN" => Self::Superadmin,
            "VENDEDOR" => Self::Vendedor,
            "USUARIO" => Self::Usuario,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the signed-in user as far as authorization is concerned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// `None` when the session carries no role yet
    #[serde(default)]
    pub role: Option<Role>,

    /// Granular permission codes
    #[serde(default)]
    pub permisos: BTreeSet<String>,

    /// Boolean flags from the older permission representation, keyed by the
    /// payload field name
    #[serde(default)]
    pub legacy_flags: BTreeMap<String, bool>,
}

impl User {
    pub fn new(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_permission(mut self, code: impl Into<String>) -> Self {
        self.permisos.insert(code.into());
        self
    }

    pub fn with_legacy_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.legacy_flags.insert(name.into(), value);
        self
    }

    pub fn is_superadmin(&self) -> bool {
        self.role == Some(Role::Superadmin)
    }

    /// Whether the older flag representation grants `code`, either as a
    /// field named `code` or as `puede_<code>`.
    pub fn has_legacy_flag(&self, code: &str) -> bool {
        let flag = |name: &str| self.legacy_flags.get(name).copied().unwrap_or(false);
        flag(code) || flag(&format!("{}{}", LEGACY_FLAG_PREFIX, code))
    }

    /// Build a snapshot from the raw JSON user object returned by the backend.
    ///
    /// `role` (or `rol`) and `permisos` are read structurally. Every other
    /// field except `id` and `email` becomes a legacy flag holding the
    /// field's truthiness.
    pub fn from_payload(payload: &JsonValue) -> Result<Self> {
        let object = payload.as_object().ok_or_else(|| {
            AuthzError::InvalidPayload("user payload must be a JSON object".to_string())
        })?;

        let role = object
            .get("role")
            .or_else(|| object.get("rol"))
            .and_then(JsonValue::as_str)
            .filter(|name| !name.trim().is_empty())
            .map(Role::from);

        let permisos = match object.get("permisos") {
            None | Some(JsonValue::Null) => BTreeSet::new(),
            Some(JsonValue::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        AuthzError::InvalidPayload(
                            "permisos must contain only strings".to_string(),
                        )
                    })
                })
                .collect::<Result<BTreeSet<_>>>()?,
            Some(_) => {
                return Err(AuthzError::InvalidPayload(
                    "permisos must be an array".to_string(),
                ))
            }
        };

        let legacy_flags = object
            .iter()
            .filter(|(key, _)| !NON_FLAG_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), is_truthy(value)))
            .collect();

        Ok(Self {
            id: object.get("id").and_then(scalar_to_string),
            email: object
                .get("email")
                .and_then(JsonValue::as_str)
                .map(str::to_string),
            role,
            permisos,
            legacy_flags,
        })
    }
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

fn scalar_to_string(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Why a guard refused entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// No user or no role in the session.
    Unauthenticated,
    /// The role is not one of the route's allowed roles.
    RoleMismatch,
    /// The role passed but a required permission is missing.
    MissingPermission,
}

/// Where to send a user who may not enter a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub path: String,
    pub reason: DenyReason,
}

/// Outcome of a route guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    Allow,
    RedirectTo(Redirect),
}

impl Decision {
    pub fn redirect(path: impl Into<String>, reason: DenyReason) -> Self {
        Self::RedirectTo(Redirect {
            path: path.into(),
            reason,
        })
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn redirect_path(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::RedirectTo(redirect) => Some(&redirect.path),
        }
    }

    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Self::Allow => None,
            Self::RedirectTo(redirect) => Some(redirect.reason),
        }
    }
}

/// Access requirements of a protected view.
///
/// An empty `roles` list admits any authenticated role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRule {
    #[serde(default)]
    pub roles: Vec<Role>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
}

impl RouteRule {
    pub fn for_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
            permission: None,
        }
    }

    pub fn with_permission(mut self, code: impl Into<String>) -> Self {
        self.permission = Some(code.into());
        self
    }
}
