use anyhow::Result;
use colored::*;
use identification::{classify_ruc, ErrorKind, IdentificationKind, TaxpayerType, RUC_LENGTH};
use serde::Serialize;

/// Result of validating one identification number
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub value: String,
    pub kind: IdentificationKind,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxpayer_type: Option<TaxpayerType>,
}

impl ValidationReport {
    pub fn build(value: &str, kind: IdentificationKind) -> Self {
        match kind.validate(value) {
            Ok(()) => {
                let trimmed = value.trim();
                // blank values pass without a document to classify
                let taxpayer_type = if kind != IdentificationKind::Cedula
                    && trimmed.len() == RUC_LENGTH
                {
                    classify_ruc(trimmed).ok()
                } else {
                    None
                };

                Self {
                    value: value.to_string(),
                    kind,
                    valid: true,
                    reason: None,
                    error_kind: None,
                    taxpayer_type,
                }
            }
            Err(err) => Self {
                value: value.to_string(),
                kind,
                valid: false,
                reason: Some(err.to_string()),
                error_kind: Some(err.kind()),
                taxpayer_type: None,
            },
        }
    }
}

/// Validate an identification number; returns whether it passed
pub fn execute(value: String, kind: IdentificationKind, format: String) -> Result<bool> {
    let report = ValidationReport::build(&value, kind);
    tracing::debug!(kind = %kind, valid = report.valid, "Validated identification");

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            print_report_text(&report);
        }
    }

    Ok(report.valid)
}

fn print_report_text(report: &ValidationReport) {
    if report.valid {
        let shown = if report.value.trim().is_empty() {
            "(blank)".to_string()
        } else {
            report.value.trim().to_string()
        };
        print!("{} {} ", "✓".green().bold(), shown.bold());
        match report.taxpayer_type {
            Some(taxpayer) => println!("is valid ({}, {})", report.kind, taxpayer),
            None => println!("is valid ({})", report.kind),
        }
    } else {
        println!(
            "{} {} is invalid: {}",
            "✗".red().bold(),
            report.value.trim().bold(),
            report.reason.as_deref().unwrap_or("unknown reason").red()
        );
    }
}
