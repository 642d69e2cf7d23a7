use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use loc_align::AlignedFile;
use loc_diff::KeyDiffReport;
use loc_types::LocaleConfig;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = resolve_config(cli.config.as_deref(), cli.locales)?;
    match cli.command {
        Command::Align(args) => cmd_align(&config, args),
        Command::Check(args) => cmd_check(&config, args),
    }
}

/// Defaults, then the config file, then command-line flags.
fn resolve_config(path: Option<&Path>, overrides: LocaleArgs) -> anyhow::Result<LocaleConfig> {
    let mut config = match path {
        Some(path) => LocaleConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LocaleConfig::default(),
    };
    overrides.apply(&mut config);
    Ok(config)
}

fn cmd_align(config: &LocaleConfig, args: AlignArgs) -> anyhow::Result<ExitCode> {
    let reference = config.reference_path();
    let target = config.target_path();
    let output = args.output.unwrap_or_else(|| config.output_path());

    let aligned = AlignedFile::prepare(&reference, &target).with_context(|| {
        format!("aligning {} to {}", target.display(), reference.display())
    })?;

    if args.dry_run {
        let diff = aligned.preview(
            &target.display().to_string(),
            &output.display().to_string(),
        );
        if diff.is_empty() {
            println!("{} {} is already aligned", "✓".green().bold(), target.display());
        } else {
            print_colored_diff(&diff);
        }
    } else {
        aligned
            .write_to(&output)
            .with_context(|| format!("writing {}", output.display()))?;
        println!("{} Wrote {}", "✓".green().bold(), output.display().to_string().bold());
    }

    let alignment = &aligned.alignment;
    if !alignment.dropped.is_empty() {
        println!(
            "  {} reference keys missing from {} were not carried over:",
            alignment.dropped.len().to_string().yellow(),
            config.target.yellow()
        );
        for path in &alignment.dropped {
            println!("    {}", path.as_str().dimmed());
        }
    }
    if !alignment.appended.is_empty() {
        println!(
            "  {} keys unknown to {} kept at the end of their section",
            alignment.appended.len().to_string().cyan(),
            config.reference.cyan()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(config: &LocaleConfig, args: CheckArgs) -> anyhow::Result<ExitCode> {
    let reference = config.reference_path();
    let target = config.target_path();

    let diff = loc_diff::diff_files(&reference, &target).with_context(|| {
        format!("comparing {} with {}", target.display(), reference.display())
    })?;
    print!("{}", KeyDiffReport::new(&diff, &config.target));

    if args.strict && !diff.is_empty() {
        eprintln!(
            "{} {} differs from {} in {} keys",
            "✗".red().bold(),
            config.target,
            config.reference,
            diff.len()
        );
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_colored_diff(diff: &str) {
    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }
}
