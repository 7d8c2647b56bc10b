//! CLI entry point for filegate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `filegate-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use filegate_app::{
    CheckInput, parse_report_json, render_markdown, run_check, serialize_report, to_renderable,
    verdict_exit_code,
};

#[derive(Parser, Debug)]
#[command(
    name = "filegate",
    version,
    about = "Declarative file assertion gate for CI"
)]
struct Cli {
    /// Repository root the rules are evaluated against.
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Path to the filegate config TOML (relative paths resolve under the
    /// repo root).
    #[arg(long, default_value = "filegate.toml")]
    config: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate every rule and write artifacts.
    Check {
        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/filegate/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/filegate/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/filegate/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(&cli, report_out.clone(), write_markdown, markdown_out.clone()),
        Commands::Md { report, output } => cmd_md(report, output),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    // Per-visited-file traversal logging lives behind RUST_LOG=info.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_check(
    cli: &Cli,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
) -> anyhow::Result<()> {
    let repo_root = cli
        .repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone());

    let result = (|| -> anyhow::Result<(i32, Option<String>)> {
        if !repo_root.exists() {
            anyhow::bail!("repo root does not exist: {}", repo_root);
        }

        // Load config if present; a missing file means an empty rule set.
        let cfg_path = if cli.config.is_absolute() {
            cli.config.clone()
        } else {
            repo_root.join(&cli.config)
        };
        let cfg_text = std::fs::read_to_string(&cfg_path).unwrap_or_default();
        if cfg_text.trim().is_empty() {
            eprintln!("filegate: no config found at {cfg_path}; emitting empty report");
        }

        let output = run_check(CheckInput {
            repo_root: &repo_root,
            config_text: &cfg_text,
        })?;

        write_text_file(&report_out, &serialize_report(&output.report)?)
            .context("write report json")?;

        if write_markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text_file(&markdown_out, &md).context("write markdown")?;
        }

        Ok((verdict_exit_code(output.report.verdict), output.failure))
    })();

    match result {
        Ok((code, failure)) => {
            if let Some(body) = failure {
                eprintln!("{body}");
            }
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("filegate error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{md}");
    }

    Ok(())
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write file: {path}"))?;
    Ok(())
}
