//! CLI implementation for retest

mod commands;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use commands::{cmd_graph, cmd_select};

#[derive(Parser)]
#[command(name = "retest")]
#[command(about = "Change-based regression test selection over a static call graph")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress the human summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print per-stage detail (graph sizes before/after pruning)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Select the tests affected by a change set
    Select {
        /// Selection granularity: m/method or c/class
        #[arg(short, long)]
        mode: String,
        /// Analyzed project directory (holds the call-graph dump)
        project: PathBuf,
        /// Change-info file: one '<class> <signature>' record per line
        changes: PathBuf,
        /// Write the selection here instead of the mode's default artifact
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print a machine-readable summary to stdout
        #[arg(long)]
        json: bool,
    },
    /// Export the pruned call graph as Graphviz DOT
    Graph {
        /// Analyzed project directory (holds the call-graph dump)
        project: PathBuf,
        /// Graph granularity to export
        #[arg(long, value_enum, default_value = "both")]
        level: GraphLevel,
        /// Directory the .dot files are written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum GraphLevel {
    Method,
    Class,
    Both,
}

pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Select {
            ref mode,
            ref project,
            ref changes,
            ref output,
            json,
        } => cmd_select(&cli, mode, project, changes, output.as_deref(), json),
        Commands::Graph {
            ref project,
            level,
            ref out_dir,
        } => cmd_graph(&cli, project, level, out_dir),
        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    }
}

/// Validate and normalize the analyzed project directory.
///
/// Trailing path separators are tolerated (Windows shells tab-complete
/// them in); the result is canonicalized so artifact naming and config
/// lookup see a stable path.
pub(crate) fn resolve_project_dir(raw: &Path) -> Result<PathBuf> {
    let display = raw.to_string_lossy();
    let trimmed = display.trim_end_matches(['/', '\\']);
    let candidate = if trimmed.is_empty() {
        raw.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    };

    if !candidate.is_dir() {
        bail!("Wrong project_target! {} is not a directory", display);
    }
    dunce::canonicalize(&candidate)
        .with_context(|| format!("Wrong project_target! cannot resolve {display}"))
}

fn cmd_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    clap_complete::generate(shell, &mut Cli::command(), "retest", &mut std::io::stdout());
}
