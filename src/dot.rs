//! Graphviz export of the call graph
//!
//! Two granularities: method-level (one node per signature) and
//! class-level, where the many method edges between a pair of classes
//! collapse into a single class edge. Output is sorted so the same graph
//! always renders the same text.

use std::collections::BTreeSet;

use crate::graph::CallGraph;

/// Render the method-level call graph: one edge per caller/callee pair.
pub fn method_graph_dot(graph: &CallGraph) -> String {
    let mut edges = BTreeSet::new();
    for node in graph.nodes() {
        for callee in graph.callees_of(node.signature()) {
            edges.insert(format!(
                "    \"{}\" -> \"{}\";",
                dot_escape(node.signature()),
                dot_escape(callee)
            ));
        }
    }
    assemble("method", &edges)
}

/// Render the class-level call graph.
///
/// Distinct method edges within the same class pair deduplicate through
/// the set; intra-class calls render as self-edges.
pub fn class_graph_dot(graph: &CallGraph) -> String {
    let mut edges = BTreeSet::new();
    for node in graph.nodes() {
        for callee in graph.callees_of(node.signature()) {
            let Some(callee_node) = graph.node(callee) else {
                continue;
            };
            edges.insert(format!(
                "    \"{}\" -> \"{}\";",
                dot_escape(node.declaring_class()),
                dot_escape(callee_node.declaring_class())
            ));
        }
    }
    assemble("class", &edges)
}

fn assemble(name: &str, edges: &BTreeSet<String>) -> String {
    let mut out = format!("digraph {name} {{\n");
    for edge in edges {
        out.push_str(edge);
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

/// Escape backslashes and quotes for a double-quoted DOT ID.
fn dot_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
