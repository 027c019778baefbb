mod input;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::*;
use formcheck_core::{
    check_format, compute_check_digits, is_valid_identification_number, FieldValidator,
    FormCheckConfig, ValidationOutcome,
};
use input::Submission;
use serde_json::json;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "formcheck")]
#[command(about = "Validate submitted form fields", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a submission
    Validate {
        /// Submission file (.json or .toml) or directory of submissions
        path: Option<String>,

        /// Field to validate as name=value (repeatable, order preserved)
        #[arg(short, long = "field")]
        fields: Vec<String>,

        /// Output format: human or json
        #[arg(long)]
        format: Option<String>,

        /// Path to config file
        #[arg(long)]
        config: Option<String>,

        /// Comma-separated rules to run
        #[arg(long)]
        rules: Option<String>,
    },

    /// List all field rules
    Rules {
        /// Output format
        #[arg(long, default_value = "human")]
        format: String,
    },

    /// Check a single identification number
    CheckId {
        /// Number to check; masks like 111.444.777-35 are accepted
        number: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    match args.command {
        Commands::Validate {
            path,
            fields,
            format,
            config,
            rules,
        } => {
            validate_command(path, fields, format, config, rules)?;
        }
        Commands::Rules { format } => {
            rules_command(format)?;
        }
        Commands::CheckId { number } => {
            check_id_command(number);
        }
    }

    Ok(())
}

/// Logs go to stderr so JSON output on stdout stays parseable
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formcheck=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn validate_command(
    path: Option<String>,
    field_args: Vec<String>,
    format: Option<String>,
    config_path: Option<String>,
    rules_filter: Option<String>,
) -> Result<()> {
    let mut config = FormCheckConfig::load(config_path.as_deref())?;

    // Command-line format wins over config
    if let Some(format) = format {
        config.output.format = format;
    }
    let format = config.output.format.clone();

    let validator = FieldValidator::from_config(config)?;

    let mut submissions: Vec<Submission> = Vec::new();
    if !field_args.is_empty() {
        submissions.push(Submission {
            source: "<arguments>".to_string(),
            fields: input::fields_from_args(&field_args)?,
        });
    }
    if let Some(path) = &path {
        submissions.extend(input::load_path(&PathBuf::from(path))?);
    }
    if submissions.is_empty() {
        bail!("Nothing to validate: pass a submission path or --field name=value");
    }

    let rule_ids: Vec<&str> = rules_filter
        .as_deref()
        .map(|r| r.split(',').map(str::trim).collect())
        .unwrap_or_default();
    let known: Vec<&str> = validator.list_rules().iter().map(|(id, _, _)| *id).collect();
    if let Some(unknown) = rule_ids.iter().find(|id| !known.contains(id)) {
        bail!("Unknown rule: {}", unknown);
    }

    let fields: Vec<_> = submissions.iter().map(|s| s.fields.clone()).collect();
    let filter = if rule_ids.is_empty() {
        None
    } else {
        Some(rule_ids.as_slice())
    };
    let outcomes = validator.validate_batch(&fields, filter);
    debug!("{} submissions validated", outcomes.len());

    if format == "json" {
        output_json(&submissions, &outcomes)?;
    } else {
        output_human(&submissions, &outcomes);
    }

    // Exit code: 1 if any submission is invalid
    if outcomes.iter().any(|o| !o.is_valid()) {
        std::process::exit(1);
    }
    Ok(())
}

fn rules_command(format: String) -> Result<()> {
    check_format(&format)?;
    let validator = FieldValidator::new();
    let rules = validator.list_rules();

    if format == "json" {
        let rules_json: Vec<_> = rules
            .iter()
            .map(|(id, fields, description)| {
                json!({
                    "id": id,
                    "fields": fields,
                    "description": description
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rules_json)?);
    } else {
        println!("Field Rules:\n");
        for (id, fields, description) in &rules {
            println!("  {} [{}] {}", id.bold(), fields.join(", "), description);
        }
        println!("\nTotal: {} rules", rules.len());
    }

    Ok(())
}

fn check_id_command(number: String) {
    if is_valid_identification_number(&number) {
        println!("{} {}", "valid".green().bold(), number);
        return;
    }

    println!("{} {}", "invalid".red().bold(), number);

    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 11 && digits.chars().all(|c| Some(c) == digits.chars().next()) {
        println!("  Numbers made of one repeated digit are never valid");
    } else if digits.len() >= 9 {
        if let Some((first, second)) = compute_check_digits(&digits[..9]) {
            println!(
                "  Expected check digits for {}: {}{}",
                &digits[..9],
                first,
                second
            );
        }
    }

    std::process::exit(1);
}

fn output_human(submissions: &[Submission], outcomes: &[ValidationOutcome]) {
    let show_source = submissions.len() > 1;

    for (submission, outcome) in submissions.iter().zip(outcomes) {
        if show_source {
            println!("{}", submission.source.bold());
        }

        match outcome.summary() {
            Some(summary) => println!("{}", summary.red()),
            None => println!("{}", "Form submitted successfully!".green().bold()),
        }

        if show_source {
            println!();
        }
    }

    if show_source {
        let invalid = outcomes.iter().filter(|o| !o.is_valid()).count();
        let summary = format!(
            "{} of {} {} invalid",
            invalid,
            outcomes.len(),
            if outcomes.len() == 1 { "submission" } else { "submissions" }
        );
        if invalid > 0 {
            println!("{}", summary.red().bold());
        } else {
            println!("{}", summary.green().bold());
        }
    }
}

fn output_json(submissions: &[Submission], outcomes: &[ValidationOutcome]) -> Result<()> {
    let output = if outcomes.len() == 1 {
        serde_json::to_value(&outcomes[0])?
    } else {
        let results: Vec<_> = submissions
            .iter()
            .zip(outcomes)
            .map(|(submission, outcome)| {
                json!({
                    "source": submission.source,
                    "outcome": outcome
                })
            })
            .collect();
        json!({
            "summary": {
                "submissions": outcomes.len(),
                "invalid": outcomes.iter().filter(|o| !o.is_valid()).count()
            },
            "results": results
        })
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
