use crate::utils::user_file::load_user;
use anyhow::Result;
use authz::has_permission;
use colored::*;
use serde_json::json;
use std::path::PathBuf;

/// Check a permission code for the user in `user_path`; returns whether it was granted
pub fn execute(user_path: Option<PathBuf>, code: String, format: String) -> Result<bool> {
    let user = user_path.as_deref().map(load_user).transpose()?;
    let granted = has_permission(user.as_ref(), &code);

    match format.as_str() {
        "json" => {
            let output = json!({
                "permission": code,
                "role": user.as_ref().and_then(|u| u.role.as_ref()),
                "granted": granted,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            if granted {
                println!("{} {} granted", "✓".green().bold(), code.bold());
            } else {
                println!("{} {} denied", "✗".red().bold(), code.bold());
            }
        }
    }

    Ok(granted)
}
