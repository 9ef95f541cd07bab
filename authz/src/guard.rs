//! Route guards.
//!
//! A guard runs in two stages. The role stage bounces users to their own
//! landing area; the permission stage, reached only when the role is
//! allowed, sends users to the default dashboard instead. Callers can tell
//! the two apart by both the redirect path and the [`DenyReason`].

use crate::config::{GuardConfig, RedirectTargets};
use crate::has_permission;
use crate::types::{Decision, DenyReason, Role, RouteRule, User};
use tracing::debug;

/// Evaluates route rules against a user snapshot.
#[derive(Debug, Clone, Default)]
pub struct RouteGuard {
    targets: RedirectTargets,
}

impl RouteGuard {
    pub fn new(targets: RedirectTargets) -> Self {
        Self { targets }
    }

    pub fn from_config(config: GuardConfig) -> Self {
        Self::new(config.redirects)
    }

    pub fn targets(&self) -> &RedirectTargets {
        &self.targets
    }

    /// Role stage only.
    pub fn check_role(&self, user: Option<&User>, allowed: &[Role]) -> Decision {
        let Some(role) = user.and_then(|u| u.role.as_ref()) else {
            debug!("No role in session, redirecting to login");
            return Decision::redirect(&self.targets.login, DenyReason::Unauthenticated);
        };

        if !allowed.is_empty() && !allowed.contains(role) {
            let path = match role {
                Role::Vendedor => &self.targets.seller_home,
                Role::Superadmin => &self.targets.root,
                _ => &self.targets.login,
            };
            debug!(%role, redirect = %path, "Role not allowed on route");
            return Decision::redirect(path, DenyReason::RoleMismatch);
        }

        Decision::Allow
    }

    /// Both stages: role first, then the rule's permission if it names one.
    pub fn check(&self, user: Option<&User>, rule: &RouteRule) -> Decision {
        let decision = self.check_role(user, &rule.roles);
        if !decision.is_allowed() {
            return decision;
        }

        match &rule.permission {
            Some(code) if !has_permission(user, code) => {
                debug!(permission = %code, "Role allowed but permission missing");
                Decision::redirect(&self.targets.dashboard, DenyReason::MissingPermission)
            }
            _ => Decision::Allow,
        }
    }
}
