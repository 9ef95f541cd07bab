use anyhow::{Context, Result};
use authz::User;
use std::fs;
use std::path::Path;

/// Load a user snapshot from a JSON file holding the backend's user object
pub fn load_user(path: &Path) -> Result<User> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read user file {}", path.display()))?;
    let payload: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("User file {} is not valid JSON", path.display()))?;
    let user = User::from_payload(&payload)?;
    tracing::debug!(
        role = ?user.role,
        permisos = user.permisos.len(),
        legacy_flags = user.legacy_flags.len(),
        "Loaded user snapshot"
    );
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use authz::Role;
    use tempfile::TempDir;

    #[test]
    fn test_load_user() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("user.json");
        fs::write(
            &path,
            r#"{"role": "VENDEDOR", "permisos": ["CLIENTES_VER"], "puede_PRODUCTOS_EDITAR": true}"#,
        )
        .unwrap();

        let user = load_user(&path).unwrap();
        assert_eq!(user.role, Some(Role::Vendedor));
        assert!(user.permisos.contains("CLIENTES_VER"));
        assert!(user.has_legacy_flag("PRODUCTOS_EDITAR"));
    }

    #[test]
    fn test_load_user_errors() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load_user(&temp_dir.path().join("missing.json")).is_err());

        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_user(&path).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));

        fs::write(&path, r#"{"permisos": "CLIENTES_VER"}"#).unwrap();
        let err = load_user(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid user payload"));
    }
}
