use crate::utils::env_paths::EnvPaths;
use crate::utils::user_file::load_user;
use anyhow::Result;
use authz::{Decision, Role, RouteGuard, RouteRule};
use colored::*;
use std::path::PathBuf;

/// Run the route guard for the given rule; returns whether entry was allowed
pub fn execute(
    user_path: Option<PathBuf>,
    roles: Vec<String>,
    permission: Option<String>,
    config_path: Option<PathBuf>,
    format: String,
) -> Result<bool> {
    let env_paths = EnvPaths::load()?;
    let config = env_paths.load_guard_config(config_path.as_deref())?;
    let guard = RouteGuard::from_config(config);

    let user = user_path.as_deref().map(load_user).transpose()?;
    let rule = RouteRule {
        roles: roles.iter().map(|r| Role::from(r.as_str())).collect(),
        permission,
    };

    let decision = guard.check(user.as_ref(), &rule);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&decision)?);
        }
        _ => match &decision {
            Decision::Allow => println!("{}", "allow".green().bold()),
            Decision::RedirectTo(redirect) => println!(
                "{} {} ({:?})",
                "redirect".yellow().bold(),
                redirect.path.bold(),
                redirect.reason
            ),
        },
    }

    Ok(decision.is_allowed())
}
