use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use docdiff_engine::{compare, DiffReport, InputMode, Severity};
use docdiff_syntax::validate_named;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Compare(args) => cmd_compare(args, &cli.output),
        Command::Check(args) => cmd_check(args, &cli.output),
    }
}

fn cmd_compare(args: CompareArgs, output: &OutputFormat) -> anyhow::Result<()> {
    let mode = if args.content {
        InputMode::Content
    } else {
        InputMode::Path
    };
    let report = compare(&args.input1, &args.input2, mode, args.file_type.as_deref());

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report),
    }
    Ok(())
}

fn print_report(report: &DiffReport) {
    for warning in &report.warnings {
        println!("{} {warning}", "Warning:".yellow());
    }
    if let Some(error) = &report.error {
        println!("{} {error}", "Error:".red().bold());
        return;
    }
    if report.identical {
        println!("{}", "Both files are identical".green());
        return;
    }
    println!("Differences found with levels:");
    for diff in &report.diffs {
        let level = match diff.level {
            Severity::Critical => "CRITICAL".red().bold(),
            Severity::Error => "ERROR".yellow(),
            Severity::Warning => "WARNING".cyan(),
        };
        println!("{}: {} - {}", diff.location.bold(), level, diff.description);
    }
}

fn cmd_check(args: CheckArgs, output: &OutputFormat) -> anyhow::Result<()> {
    let language = match args.language {
        Some(language) => language,
        None => Path::new(&args.input)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("text")
            .to_string(),
    };
    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input))?;
    let validation = validate_named(&content, &language);

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&validation)?),
        OutputFormat::Text => {
            if validation.valid {
                println!("{} {} is valid {language}", "✓".green().bold(), args.input.bold());
            } else {
                println!("{} {} has issues:", "✗".red().bold(), args.input.bold());
                for issue in &validation.issues {
                    println!("  line {}, col {}: {}", issue.line, issue.column, issue.message);
                }
            }
        }
    }
    Ok(())
}
