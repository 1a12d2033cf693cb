//! Select command — which tests must re-run for a change set

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use colored::Colorize;

use retest::config::Config;
use retest::{
    selection_for, write_selection, CallGraphProvider, ChangeSet, DumpProvider, SelectionMode,
};

pub(crate) fn cmd_select(
    cli: &crate::cli::Cli,
    mode: &str,
    project: &Path,
    changes_path: &Path,
    output: Option<&Path>,
    json: bool,
) -> Result<()> {
    let _span = tracing::info_span!("cmd_select", mode, json).entered();

    let mode: SelectionMode = mode.parse()?;
    let project = crate::cli::resolve_project_dir(project)?;
    if !changes_path.exists() {
        bail!("change_info file not exists! ({})", changes_path.display());
    }

    let config = Config::load(&project);
    let quiet = cli.quiet || config.quiet.unwrap_or(false);
    let verbose = cli.verbose || config.verbose.unwrap_or(false);

    let changes = ChangeSet::from_path(changes_path)?;

    let provider = DumpProvider::new(
        config
            .graph_file
            .as_deref()
            .unwrap_or(retest::provider::DEFAULT_GRAPH_FILE),
    );
    let graph = provider.build_call_graph(&project)?;
    let raw_nodes = graph.node_count();
    let raw_edges = graph.edge_count();
    let graph = graph.pruned();
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        pruned_nodes = raw_nodes - graph.node_count(),
        "Pruned call graph"
    );

    let selected = selection_for(mode, &graph, &changes);
    let destination = artifact_path(mode, output, config.output_dir.as_deref());
    write_selection(&selected, &destination)?;

    if json {
        let summary = serde_json::json!({
            "mode": mode.as_str(),
            "artifact": destination.to_string_lossy().replace('\\', "/"),
            "changed_classes": changes.changed_classes.len(),
            "changed_methods": changes.changed_methods.len(),
            "selected": selected.iter().collect::<Vec<_>>(),
            "count": selected.len(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if !quiet {
        display_selection_text(
            mode,
            &changes,
            &selected,
            &destination,
            verbose.then_some(PruneStats {
                raw_nodes,
                raw_edges,
                nodes: graph.node_count(),
                edges: graph.edge_count(),
            }),
        );
    }

    Ok(())
}

struct PruneStats {
    raw_nodes: usize,
    raw_edges: usize,
    nodes: usize,
    edges: usize,
}

/// `-o` wins, then the config's output_dir, then the CWD.
fn artifact_path(
    mode: SelectionMode,
    output: Option<&Path>,
    output_dir: Option<&Path>,
) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => output_dir
            .unwrap_or(Path::new("."))
            .join(mode.artifact_name()),
    }
}

fn display_selection_text(
    mode: SelectionMode,
    changes: &ChangeSet,
    selected: &std::collections::BTreeSet<String>,
    destination: &Path,
    stats: Option<PruneStats>,
) {
    println!(
        "{} {} mode, {} changed class(es), {} changed method(s)",
        "Selection:".bold(),
        mode,
        changes.changed_classes.len(),
        changes.changed_methods.len(),
    );

    if let Some(s) = stats {
        println!(
            "{} {} nodes, {} edges (pruned from {} nodes, {} edges)",
            "Graph:".bold(),
            s.nodes,
            s.edges,
            s.raw_nodes,
            s.raw_edges,
        );
    }

    if selected.is_empty() {
        println!();
        println!("{}", "No affected tests.".dimmed());
    } else {
        println!();
        println!("{} ({}):", "Tests to re-run".yellow(), selected.len());
        for id in selected {
            println!("  {id}");
        }
    }

    println!();
    println!("Selection written to {}", destination.display());
}
