use crate::utils::env_paths::EnvPaths;
use anyhow::Result;
use authz::GuardConfig;
use colored::*;
use std::path::PathBuf;

/// Show the effective guard configuration
pub fn show(config_path: Option<PathBuf>, format: String) -> Result<()> {
    let env_paths = EnvPaths::load()?;
    let config = env_paths.load_guard_config(config_path.as_deref())?;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        "yaml" => {
            print!("{}", serde_yaml::to_string(&config)?);
        }
        _ => {
            print_config_text(&config);
        }
    }

    Ok(())
}

fn print_config_text(config: &GuardConfig) {
    let redirects = &config.redirects;

    println!("{}", "=== Guard Configuration ===".bold());
    println!();
    println!("{}", "[redirects]".cyan().bold());
    for (key, value) in [
        ("login", &redirects.login),
        ("seller_home", &redirects.seller_home),
        ("root", &redirects.root),
        ("dashboard", &redirects.dashboard),
    ] {
        println!("  {}: {}", key.cyan(), value);
    }
}
