//! Graph command — export the pruned call graph as Graphviz DOT
//!
//! Writes `method-<project>.dot` and/or `class-<project>.dot`, mirroring
//! the two granularities the selector works at.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use retest::config::Config;
use retest::{dot, CallGraphProvider, DumpProvider};

use crate::cli::GraphLevel;

pub(crate) fn cmd_graph(
    cli: &crate::cli::Cli,
    project: &Path,
    level: GraphLevel,
    out_dir: &Path,
) -> Result<()> {
    let _span = tracing::info_span!("cmd_graph", ?level).entered();

    let project = crate::cli::resolve_project_dir(project)?;
    let config = Config::load(&project);
    let provider = DumpProvider::new(
        config
            .graph_file
            .as_deref()
            .unwrap_or(retest::provider::DEFAULT_GRAPH_FILE),
    );
    let graph = provider.build_call_graph(&project)?.pruned();

    let stem = project
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string());

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("cannot create output directory {}", out_dir.display()))?;

    let mut written = Vec::new();
    if matches!(level, GraphLevel::Method | GraphLevel::Both) {
        let path = out_dir.join(format!("method-{stem}.dot"));
        std::fs::write(&path, dot::method_graph_dot(&graph))
            .with_context(|| format!("cannot write {}", path.display()))?;
        written.push(path);
    }
    if matches!(level, GraphLevel::Class | GraphLevel::Both) {
        let path = out_dir.join(format!("class-{stem}.dot"));
        std::fs::write(&path, dot::class_graph_dot(&graph))
            .with_context(|| format!("cannot write {}", path.display()))?;
        written.push(path);
    }

    if !cli.quiet {
        println!(
            "{} {} nodes, {} edges after pruning",
            "Graph:".bold(),
            graph.node_count(),
            graph.edge_count(),
        );
        for path in &written {
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
