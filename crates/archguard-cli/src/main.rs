//! CLI entry point for archguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `archguard-app` crate.

use anyhow::Context;
use archguard_app::{
    CheckInput, parse_report_json, render_markdown, run_check, serialize_report, status_exit_code,
};
use archguard_settings::Overrides;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "archguard",
    version,
    about = "Architecture policy adherence checks for feature implementations"
)]
struct Cli {
    /// Project root (directory containing the policy and tools trees).
    #[arg(long, default_value = ".")]
    project_root: Utf8PathBuf,

    /// Path to archguard config TOML, relative to the project root.
    #[arg(long, default_value = "archguard.toml")]
    config: Utf8PathBuf,

    /// Override the policy-document directory (relative to the project root).
    #[arg(long)]
    features_dir: Option<String>,

    /// Override the implementation tree root (relative to the project root).
    #[arg(long)]
    tools_root: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a feature document against its declared policies.
    Check {
        /// Path to the feature document.
        #[arg(long)]
        feature: Utf8PathBuf,

        /// Feature stem for implementation lookup (defaults to the feature
        /// file stem).
        #[arg(long)]
        stem: Option<String>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/archguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/archguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/archguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to
        /// stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref feature,
            ref stem,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(
            &cli,
            feature.clone(),
            stem.clone(),
            report_out.clone(),
            write_markdown,
            markdown_out.clone(),
        ),
        Commands::Md { report, output } => cmd_md(report, output),
    }
}

fn cmd_check(
    cli: &Cli,
    feature: Utf8PathBuf,
    stem: Option<String>,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
) -> anyhow::Result<()> {
    let project_root = cli
        .project_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.project_root.clone());

    let feature_path = if feature.is_absolute() {
        feature
    } else {
        project_root.join(&feature)
    };
    let feature_text = std::fs::read_to_string(&feature_path)
        .with_context(|| format!("read feature document: {}", feature_path))?;

    let feature_stem = match stem {
        Some(s) => s,
        None => feature_path
            .file_stem()
            .map(str::to_string)
            .with_context(|| format!("feature path has no file stem: {}", feature_path))?,
    };

    // Load config if present; a missing file is allowed (defaults apply).
    let config_path = project_root.join(&cli.config);
    let config_text = std::fs::read_to_string(&config_path).unwrap_or_default();

    let overrides = Overrides {
        features_dir: cli.features_dir.clone(),
        tools_root: cli.tools_root.clone(),
    };

    let output = run_check(CheckInput {
        project_root: &project_root,
        feature_text: &feature_text,
        feature_stem: &feature_stem,
        config_text: &config_text,
        overrides,
    })?;

    let json = serialize_report(&output.report).context("serialize report")?;
    write_text_file(&report_out, &json).context("write report json")?;

    if write_markdown {
        write_text_file(&markdown_out, &render_markdown(&output.report))
            .context("write markdown")?;
    }

    eprintln!("archguard: {}", output.report.detail);

    let code = status_exit_code(output.report.status);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write: {}", path))?;
    Ok(())
}
