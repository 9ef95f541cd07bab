use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use identification::IdentificationKind;
use std::path::PathBuf;

mod commands;
mod utils;

use commands::{config, guard, permission, validate};

/// Tributa CLI - Identification and access checks for the invoicing dashboard
#[derive(Parser)]
#[command(name = "tributa")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Guard configuration file (YAML)
    #[arg(long = "config", global = true, env = "TRIBUTA_GUARD_CONFIG")]
    guard_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a cédula or RUC
    Validate {
        /// Identification number to check
        value: String,

        /// Document type (cedula, ruc, any)
        #[arg(short, long, default_value = "any")]
        kind: IdentificationKind,

        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check whether a user holds a permission code
    Permission {
        /// JSON file with the backend user object; omit for no session
        #[arg(short, long)]
        user: Option<PathBuf>,

        /// Permission code (e.g. PRODUCTOS_EDITAR)
        code: String,

        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Run the route guard for a set of roles and an optional permission
    Guard {
        /// JSON file with the backend user object; omit for no session
        #[arg(short, long)]
        user: Option<PathBuf>,

        /// Allowed role (repeatable); none admits any authenticated role
        #[arg(short, long = "role")]
        roles: Vec<String>,

        /// Permission the route additionally requires
        #[arg(short, long)]
        permission: Option<String>,

        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective redirect targets
    Show {
        /// Output format (json, yaml, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(2);
        }
    }
}

/// Execute the command; `Ok(false)` means a negative verdict
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Validate {
            value,
            kind,
            format,
        } => validate::execute(value, kind, format),
        Commands::Permission { user, code, format } => permission::execute(user, code, format),
        Commands::Guard {
            user,
            roles,
            permission,
            format,
        } => guard::execute(user, roles, permission, cli.guard_config, format),
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                config::show(cli.guard_config, format)?;
                Ok(true)
            }
        },
    }
}
