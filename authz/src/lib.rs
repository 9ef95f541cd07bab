//! Role and permission checks for the invoicing dashboard.
//!
//! Two kinds of question are answered here:
//!
//! - **May this user perform this action?** [`has_permission`] returns a plain
//!   boolean, used to show or hide buttons and menu entries.
//! - **May this user enter this view?** [`has_role`] and [`RouteGuard`]
//!   return a [`Decision`]: either `Allow` or a redirect target.
//!
//! # Permission resolution
//!
//! 1. No user: denied.
//! 2. `SUPERADMIN`: always allowed.
//! 3. The code is in the user's granular `permisos` set: allowed.
//! 4. Legacy fallback: a truthy flag named after the code, or `puede_<code>`.
//! 5. Otherwise denied.
//!
//! The legacy step stays because some backend user records only populate
//! the older boolean flags.
//!
//! Every check takes the current [`User`] snapshot explicitly and is a pure
//! function of its inputs apart from `tracing` diagnostics.
//!
//! # Example
//!
//! ```rust
//! use authz::{has_permission, has_role, types::{Role, User}};
//!
//! let seller = User::new(Role::Vendedor).with_permission("CLIENTES_VER");
//! assert!(has_permission(Some(&seller), "CLIENTES_VER"));
//! assert!(!has_permission(Some(&seller), "EMPRESAS_ELIMINAR"));
//!
//! let decision = has_role(Some(&seller), &[Role::Superadmin]);
//! assert_eq!(decision.redirect_path(), Some("/vendedor/dashboard"));
//! ```

pub mod config;
pub mod error;
pub mod guard;
pub mod types;

pub use config::{GuardConfig, RedirectTargets};
pub use error::{AuthzError, Result};
pub use guard::RouteGuard;
pub use types::{Decision, DenyReason, Redirect, Role, RouteRule, User};

use tracing::{debug, warn};

/// Permission families whose denials are worth a warning in the logs.
const AUDITED_FAMILIES: [&str; 2] = ["EDITAR", "ELIMINAR"];

/// Decide whether `user` holds the permission `code`.
pub fn has_permission(user: Option<&User>, code: &str) -> bool {
    let Some(user) = user else {
        debug!(permission = %code, "Permission check without a user");
        return false;
    };

    if user.is_superadmin() || user.permisos.contains(code) || user.has_legacy_flag(code) {
        return true;
    }

    if AUDITED_FAMILIES.iter().any(|family| code.contains(family)) {
        warn!(
            permission = %code,
            user_id = user.id.as_deref().unwrap_or("unknown"),
            permisos = ?user.permisos,
            "Permission denied"
        );
    }

    false
}

/// True when `user` holds at least one of `codes`.
pub fn has_any_permission<S: AsRef<str>>(user: Option<&User>, codes: &[S]) -> bool {
    codes.iter().any(|code| has_permission(user, code.as_ref()))
}

/// True when `user` holds every one of `codes`.
pub fn has_all_permissions<S: AsRef<str>>(user: Option<&User>, codes: &[S]) -> bool {
    codes.iter().all(|code| has_permission(user, code.as_ref()))
}

/// Role-stage route check using the default redirect targets.
pub fn has_role(user: Option<&User>, allowed: &[Role]) -> Decision {
    RouteGuard::default().check_role(user, allowed)
}

/// Full two-stage route check using the default redirect targets.
pub fn check_route(user: Option<&User>, rule: &RouteRule) -> Decision {
    RouteGuard::default().check(user, rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("EMPRESAS_ELIMINAR")]
    #[case("PRODUCTOS_EDITAR")]
    #[case("SUSCRIPCIONES_CREAR")]
    #[case("")]
    fn test_superadmin_bypass(#[case] code: &str) {
        let admin = User::new(Role::Superadmin);
        assert!(admin.permisos.is_empty());
        assert!(has_permission(Some(&admin), code));
    }

    #[test]
    fn test_no_user_is_denied() {
        assert!(!has_permission(None, "CLIENTES_VER"));
        assert!(!has_permission(None, "EMPRESAS_EDITAR"));
    }

    #[test]
    fn test_granular_permission() {
        let user = User::new(Role::Usuario).with_permission("CLIENTES_VER");
        assert!(has_permission(Some(&user), "CLIENTES_VER"));
        assert!(!has_permission(Some(&user), "CLIENTES_EDITAR"));
    }

    #[test]
    fn test_legacy_prefixed_flag() {
        let user = User::new(Role::Vendedor).with_legacy_flag("puede_PRODUCTOS_EDITAR", true);
        assert!(!user.permisos.contains("PRODUCTOS_EDITAR"));
        assert!(has_permission(Some(&user), "PRODUCTOS_EDITAR"));
    }

    #[test]
    fn test_legacy_flag_named_after_code() {
        let user = User::new(Role::Vendedor).with_legacy_flag("REPORTES_VER", true);
        assert!(has_permission(Some(&user), "REPORTES_VER"));
    }

    #[test]
    fn test_false_legacy_flag_denies() {
        let user = User::new(Role::Vendedor).with_legacy_flag("puede_CLIENTES_ELIMINAR", false);
        assert!(!has_permission(Some(&user), "CLIENTES_ELIMINAR"));
    }

    #[test]
    fn test_payload_legacy_fallback() {
        let user = User::from_payload(&json!({
            "role": "USUARIO",
            "permisos": [],
            "puede_PRODUCTOS_EDITAR": true
        }))
        .unwrap();
        assert!(has_permission(Some(&user), "PRODUCTOS_EDITAR"));
        assert!(!has_permission(Some(&user), "PRODUCTOS_ELIMINAR"));
    }

    #[test]
    fn test_role_without_grant_is_denied() {
        // only superadmin bypasses; sellers need an explicit grant
        let seller = User::new(Role::Vendedor);
        assert!(!has_permission(Some(&seller), "CLIENTES_VER"));
    }

    #[test]
    fn test_any_and_all() {
        let user = User::new(Role::Usuario)
            .with_permission("CLIENTES_VER")
            .with_permission("CLIENTES_CREAR");

        assert!(has_any_permission(Some(&user), &["CLIENTES_EDITAR", "CLIENTES_VER"]));
        assert!(!has_any_permission(Some(&user), &["EMPRESAS_VER"]));
        assert!(!has_any_permission::<&str>(Some(&user), &[]));

        assert!(has_all_permissions(Some(&user), &["CLIENTES_VER", "CLIENTES_CREAR"]));
        assert!(!has_all_permissions(Some(&user), &["CLIENTES_VER", "CLIENTES_EDITAR"]));
        assert!(has_all_permissions::<&str>(Some(&user), &[]));

        let codes = vec!["CLIENTES_VER".to_string()];
        assert!(!has_any_permission(None, codes.as_slice()));
    }

    #[test]
    fn test_has_role_defaults() {
        assert_eq!(
            has_role(None, &[Role::Vendedor]),
            Decision::redirect("/login", DenyReason::Unauthenticated)
        );

        let seller = User::new(Role::Vendedor);
        assert_eq!(
            has_role(Some(&seller), &[Role::Superadmin]).redirect_path(),
            Some("/vendedor/dashboard")
        );

        let admin = User::new(Role::Superadmin);
        assert_eq!(has_role(Some(&admin), &[Role::Vendedor]).redirect_path(), Some("/"));
        assert!(has_role(Some(&admin), &[Role::Superadmin]).is_allowed());
    }

    #[test]
    fn test_check_route_layers_permission() {
        let rule = RouteRule::for_roles([Role::Vendedor]).with_permission("CLIENTES_VER");
        let seller = User::new(Role::Vendedor);

        let decision = check_route(Some(&seller), &rule);
        assert_eq!(decision.redirect_path(), Some("/dashboard"));
        assert_eq!(decision.deny_reason(), Some(DenyReason::MissingPermission));

        let role_failure = check_route(None, &rule);
        assert_ne!(role_failure.redirect_path(), decision.redirect_path());
    }
}
