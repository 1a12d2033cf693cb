//! Call-graph acquisition boundary
//!
//! Whole-program analysis — class hierarchy, points-to resolution, entry
//! points — is the external analyzer's job. The core consumes its output
//! through [`CallGraphProvider`] and never re-derives or second-guesses
//! it. The shipped adapter, [`DumpProvider`], loads the analyzer's JSON
//! dump from the project directory.

use std::path::Path;

use serde::Deserialize;

use crate::error::RetestError;
use crate::graph::{CallGraph, MethodNode, NodeOrigin};

/// File the default provider looks for inside the project directory.
pub const DEFAULT_GRAPH_FILE: &str = "callgraph.json";

/// Dump format version this build understands.
const SUPPORTED_VERSION: u32 = 1;

/// Opaque source of a fully built call graph.
pub trait CallGraphProvider {
    /// Build the call graph for the program rooted at `project_root`.
    ///
    /// Failures propagate as [`RetestError::GraphConstruction`] with the
    /// provider's own message, uninterpreted.
    fn build_call_graph(&self, project_root: &Path) -> Result<CallGraph, RetestError>;
}

#[derive(Debug, Deserialize)]
struct GraphDump {
    version: u32,
    #[serde(default)]
    nodes: Vec<DumpNode>,
    #[serde(default)]
    edges: Vec<(String, String)>,
}

#[derive(Debug, Deserialize)]
struct DumpNode {
    signature: String,
    #[serde(rename = "class")]
    declaring_class: String,
    /// `"application"` (default) or `"platform"`; `"primordial"` is
    /// accepted as an alias, matching the analyzer's loader name.
    #[serde(default)]
    origin: Option<String>,
    #[serde(default)]
    constructor: bool,
    #[serde(default)]
    arity: usize,
}

/// Loads the analyzer's JSON dump from the project directory.
#[derive(Debug, Clone)]
pub struct DumpProvider {
    graph_file: String,
}

impl DumpProvider {
    pub fn new(graph_file: impl Into<String>) -> Self {
        Self {
            graph_file: graph_file.into(),
        }
    }

    /// Parse dump text into a graph. `origin` names the dump in errors and
    /// warnings.
    pub fn parse_dump(text: &str, origin: &Path) -> Result<CallGraph, RetestError> {
        let fail = |message: String| RetestError::GraphConstruction {
            path: origin.to_path_buf(),
            message,
        };

        let dump: GraphDump = serde_json::from_str(text).map_err(|e| fail(e.to_string()))?;
        if dump.version != SUPPORTED_VERSION {
            return Err(fail(format!(
                "unsupported dump version {} (this build understands v{}); re-run the analyzer",
                dump.version, SUPPORTED_VERSION
            )));
        }

        let mut graph = CallGraph::new();
        for node in dump.nodes {
            let origin_kind = match node.origin.as_deref() {
                None | Some("application") => NodeOrigin::Application,
                Some("platform") | Some("primordial") => NodeOrigin::Platform,
                Some(other) => {
                    return Err(fail(format!(
                        "node {:?} has unknown origin {other:?}",
                        node.signature
                    )))
                }
            };
            if graph.contains(&node.signature) {
                tracing::warn!(signature = %node.signature, "Duplicate node in dump, keeping first");
                continue;
            }
            graph.add_node(MethodNode::new(
                node.signature,
                node.declaring_class,
                origin_kind,
                node.constructor,
                node.arity,
            ));
        }

        let mut dangling = 0usize;
        for (caller, callee) in &dump.edges {
            if !graph.contains(caller) || !graph.contains(callee) {
                // Analyzer noise, not ours to repair: an endpoint without
                // node metadata can never classify as a test anyway.
                dangling += 1;
                tracing::warn!(%caller, %callee, "Skipping edge with unknown endpoint");
                continue;
            }
            graph.add_edge(caller, callee);
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            dangling,
            dump = %origin.display(),
            "Loaded call graph"
        );
        Ok(graph)
    }
}

impl Default for DumpProvider {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_FILE)
    }
}

impl CallGraphProvider for DumpProvider {
    fn build_call_graph(&self, project_root: &Path) -> Result<CallGraph, RetestError> {
        let path = project_root.join(&self.graph_file);
        let text = std::fs::read_to_string(&path).map_err(|e| RetestError::GraphConstruction {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Self::parse_dump(&text, &path)
    }
}
