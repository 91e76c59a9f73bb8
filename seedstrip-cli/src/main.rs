mod config;
mod preset;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use config::ConfigSource;
use fs_err as fs;
use seedstrip_edit::{FsStore, RewriteOptions, rewrite_all};
use seedstrip_render::{render_report_md, render_text};
use seedstrip_types::StripConfig;
use seedstrip_types::report::{RunInfo, StripReport, ToolInfo};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "seedstrip",
    version,
    about = "Strip seed/demo data from typed array declarations in place."
)]
struct Cli {
    /// Directory target paths are resolved against (default: current directory).
    #[arg(long, global = true, default_value = ".")]
    root: Utf8PathBuf,

    /// Target list to use instead of <root>/seedstrip.toml.
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Empty every configured declaration (the default command).
    Strip(StripArgs),
    /// Print the effective target list without touching any file.
    Targets(TargetsArgs),
}

#[derive(Debug, Default, Args)]
struct StripArgs {
    /// Report what would change without writing any file.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Print a unified diff of the changes after the report.
    #[arg(long, default_value_t = false)]
    diff: bool,

    /// Output format for the report on stdout.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also write the JSON report to this path.
    #[arg(long)]
    out: Option<Utf8PathBuf>,
}

#[derive(Debug, Args)]
struct TargetsArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (config, source) = config::resolve(&cli.root, cli.config.as_deref())?;
    info!("loaded {} targets from {}", config.targets.len(), source);

    match cli.cmd.unwrap_or(Command::Strip(StripArgs::default())) {
        Command::Strip(args) => cmd_strip(&cli.root, &config, args),
        Command::Targets(args) => cmd_targets(&config, &source, args),
    }
}

fn cmd_strip(root: &Utf8Path, config: &StripConfig, args: StripArgs) -> anyhow::Result<()> {
    let started_at = Utc::now();
    let store = FsStore::new(root);
    let opts = RewriteOptions {
        dry_run: args.dry_run,
    };
    debug!("strip options: {:?}", opts);

    let run = rewrite_all(&store, config, &opts);

    let mut report = StripReport::new(tool_info(), root.as_str(), args.dry_run);
    report.run = RunInfo {
        started_at: Some(started_at),
        ended_at: Some(Utc::now()),
    };
    report.files = run.files;
    report.summary = run.summary;

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Markdown => print!("{}", render_report_md(&report)),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("serialize report")?
            );
        }
    }

    if args.diff && !run.patch.is_empty() {
        println!();
        print!("{}", run.patch);
    }

    if let Some(out) = &args.out {
        write_json(out, &report)?;
        info!("wrote report to {}", out);
    }

    Ok(())
}

fn cmd_targets(
    config: &StripConfig,
    source: &ConfigSource,
    args: TargetsArgs,
) -> anyhow::Result<()> {
    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Text | OutputFormat::Markdown => {
            println!("Targets from {}:\n", source);
            for target in &config.targets {
                println!("  {}", target.path);
                for sig in &target.declarations {
                    println!("    - {}", sig);
                }
            }
            println!();
            println!(
                "{} files, {} declarations",
                config.targets.len(),
                config.declaration_count()
            );
        }
    }
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Utf8Path, v: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(v).context("serialize json")?;
    fs::write(path, s).with_context(|| format!("write {}", path))?;
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "seedstrip".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
