//! slimecalc - chunk, Nether and slime chunk calculator
//!
//! Command-line front end over `slimecalc-core`. Every subcommand maps onto a
//! slash command, so the CLI, `exec` and command scripts share one code path.

mod command_script;
mod commands;
mod config;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use command_script::CommandScript;
use commands::{execute_command, parse_command, SlashCommand};
use config::{AppConfig, DEFAULT_CONFIG_PATH};
use report::Report;
use slimecalc_core::{BlockPos, ChunkPos, ChunkRegion, DimensionId};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Chunk, Nether and slime chunk calculator", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Configuration file (default: config/slimecalc.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Chunk, chunk center and chunk corners for a block
    #[command(allow_negative_numbers = true)]
    Chunk { x: i32, z: i32 },
    /// Whether a block's chunk is a slime chunk
    #[command(allow_negative_numbers = true)]
    Slime {
        x: i32,
        z: i32,
        /// Treat X and Z as chunk coordinates instead of block coordinates
        #[arg(long)]
        chunk: bool,
    },
    /// Convert Overworld coordinates to the Nether
    #[command(allow_negative_numbers = true)]
    Nether { x: i32, z: i32 },
    /// Convert Nether coordinates to the Overworld
    #[command(allow_negative_numbers = true)]
    Overworld { x: i32, z: i32 },
    /// Compass direction and distances from one block to another
    #[command(allow_negative_numbers = true)]
    Direction { x1: i32, z1: i32, x2: i32, z2: i32 },
    /// ASCII map of slime chunks
    Map {
        /// Chunk region as x1,z1,x2,z2
        #[arg(long, allow_hyphen_values = true, conflicts_with = "radius")]
        region: Option<ChunkRegion>,
        /// Chunk radius around chunk (0, 0)
        #[arg(long)]
        radius: Option<u32>,
    },
    /// Closest slime chunk to a block
    #[command(allow_negative_numbers = true)]
    Nearest {
        x: i32,
        z: i32,
        /// Chunk radius to search
        #[arg(long)]
        radius: Option<u32>,
    },
    /// Run one slash command, e.g. `exec /slime 100 -200`
    Exec {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Run a JSON command script
    Script { path: PathBuf },
    /// Write a configuration file with default values to `--config` or the default path
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl CliCommand {
    fn into_slash_command(self) -> Result<SlashCommand> {
        let cmd = match self {
            Self::Chunk { x, z } => SlashCommand::Chunk {
                block: BlockPos::new(x, z),
            },
            Self::Slime { x, z, chunk: true } => SlashCommand::SlimeChunk {
                chunk: ChunkPos::new(x, z),
            },
            Self::Slime { x, z, chunk: false } => SlashCommand::SlimeAtBlock {
                block: BlockPos::new(x, z),
            },
            Self::Nether { x, z } => SlashCommand::Convert {
                from: DimensionId::Overworld,
                to: DimensionId::Nether,
                pos: BlockPos::new(x, z),
            },
            Self::Overworld { x, z } => SlashCommand::Convert {
                from: DimensionId::Nether,
                to: DimensionId::Overworld,
                pos: BlockPos::new(x, z),
            },
            Self::Direction { x1, z1, x2, z2 } => SlashCommand::Direction {
                from: BlockPos::new(x1, z1),
                to: BlockPos::new(x2, z2),
            },
            Self::Map { region, radius } => SlashCommand::Map {
                region: region
                    .or_else(|| radius.map(|r| ChunkRegion::around(ChunkPos::new(0, 0), r))),
            },
            Self::Nearest { x, z, radius } => SlashCommand::Nearest {
                block: BlockPos::new(x, z),
                radius,
            },
            Self::Exec { command } => parse_command(&command.join(" "))?,
            Self::Script { .. } | Self::InitConfig { .. } => {
                anyhow::bail!("not a slash command")
            }
        };
        Ok(cmd)
    }
}

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path),
        None => AppConfig::load(),
    };
    let json = cli.json || config.json;
    info!("Starting slimecalc v{}", env!("CARGO_PKG_VERSION"));
    debug!(?config, json, "configuration loaded");

    match cli.command {
        CliCommand::Script { path } => run_script(&path, &config, json),
        CliCommand::InitConfig { force } => {
            let path = cli
                .config
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
            init_config(&path, force)
        }
        other => {
            let cmd = other.into_slash_command()?;
            let report = execute_command(&cmd, &config)?;
            print_report(&report, &config, json)
        }
    }
}

fn run_script(path: &Path, config: &AppConfig, json: bool) -> Result<()> {
    let script = CommandScript::from_path(path)?;
    info!(path = %path.display(), commands = script.commands().len(), "running command script");
    let outcomes = script.run(config);
    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }
    for outcome in &outcomes {
        println!("> {}", outcome.command);
        if let Some(report) = &outcome.report {
            for line in report.text_lines(config) {
                println!("{line}");
            }
        }
        if let Some(err) = &outcome.error {
            println!("Error: {err}");
        }
    }
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    AppConfig::default().save_to_path(path)?;
    info!(path = %path.display(), "wrote default configuration");
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn print_report(report: &Report, config: &AppConfig, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(report).context("failed to encode report")?;
        println!("{rendered}");
    } else {
        for line in report.text_lines(config) {
            println!("{line}");
        }
    }
    Ok(())
}
