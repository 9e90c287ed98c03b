//! Rolescope - outline the roles of a configuration tree.
//!
//! Prints every role's variables, task steps, files and templates as an
//! indented outline.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rolescope::outline::{JsonLinesSink, OutlinePrinter, OutlineSink, TextSink, ROLE_MARKER};
use rolescope::{Config, RoleIndex};

/// Outline the roles of a configuration tree
#[derive(Parser)]
#[command(name = "rolescope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root containing the roles directory
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Only outline the named role (repeatable)
    #[arg(short, long = "role", value_name = "NAME")]
    roles: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Load configuration from this file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List discovered roles with their file counts
    Roles {
        /// Project root containing the roles directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show configuration
    Config {
        /// Project root to resolve the local config file against
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Show config directory path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Output format for outlines and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Indented outline with markers
    Text,
    /// One JSON object per line
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the outline on stdout stays clean
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        None => {
            cmd_outline(&cli.path, cli.config.as_deref(), cli.roles, cli.format)?;
        }
        Some(Commands::Roles { path }) => {
            cmd_roles(&path, cli.config.as_deref(), cli.format)?;
        }
        Some(Commands::Config { root, path }) => {
            cmd_config(&root, cli.config.as_deref(), path)?;
        }
        Some(Commands::Completions { shell }) => {
            cmd_completions(shell);
        }
    }

    Ok(())
}

/// Resolve the effective configuration.
fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(file) => Config::load_from_file(file),
        None => Config::load(root),
    }
}

/// Print the outline of every role under `root`.
fn cmd_outline(
    root: &Path,
    config_file: Option<&Path>,
    roles: Vec<String>,
    format: Format,
) -> Result<()> {
    let config = load_config(root, config_file)?;
    let printer = OutlinePrinter::with_config(root, config).with_roles(roles);

    let stdout = BufWriter::new(io::stdout().lock());
    let mut sink: Box<dyn OutlineSink> = match format {
        Format::Text => Box::new(TextSink::new(stdout)),
        Format::Json => Box::new(JsonLinesSink::new(stdout)),
    };

    printer
        .run(sink.as_mut())
        .with_context(|| format!("Failed to outline roles in {}", root.display()))
}

/// List discovered roles.
fn cmd_roles(root: &Path, config_file: Option<&Path>, format: Format) -> Result<()> {
    let config = load_config(root, config_file)?;
    let index = OutlinePrinter::with_config(root, config).scan();

    let mut stdout = BufWriter::new(io::stdout().lock());
    write_roles(&mut stdout, &index, format)?;
    stdout.flush()?;

    Ok(())
}

fn write_roles(out: &mut impl Write, index: &RoleIndex, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, index)?;
            writeln!(out)?;
        }
        Format::Text => {
            for role in index {
                writeln!(
                    out,
                    "{ROLE_MARKER} {} ({} tasks files, {} vars files)",
                    role.name,
                    role.tasks_files.len(),
                    role.vars_files.len()
                )?;
            }
            writeln!(out, "\nTotal: {} roles", index.len())?;
        }
    }

    Ok(())
}

/// Show the effective configuration or the config directory.
fn cmd_config(root: &Path, config_file: Option<&Path>, show_path: bool) -> Result<()> {
    let mut stdout = BufWriter::new(io::stdout().lock());

    if show_path {
        if let Some(path) = Config::config_dir() {
            writeln!(stdout, "{}", path.display())?;
        }
    } else {
        let config = load_config(root, config_file)?;
        writeln!(stdout, "{}", toml::to_string_pretty(&config)?)?;
    }

    stdout.flush()?;
    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "rolescope", &mut io::stdout());
}
