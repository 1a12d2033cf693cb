//! Call graph model and pruning
//!
//! Nodes are methods; a directed edge caller → callee means the caller may
//! invoke the callee. The graph arrives fully built from a
//! [`CallGraphProvider`](crate::provider::CallGraphProvider) and is owned
//! exclusively by the run. The only permitted mutation is [`CallGraph::pruned`],
//! applied exactly once before selection.

use std::collections::{HashMap, HashSet};

/// Which loader a method came from during whole-program analysis.
///
/// Platform-internal methods (the runtime's own classes) are never
/// meaningful change targets or informative call-chain links, so pruning
/// drops them wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeOrigin {
    /// Application code under analysis
    Application,
    /// Runtime/platform-internal loader
    Platform,
}

/// One analyzable method.
///
/// Classification is computed once at construction from structured inputs
/// supplied by the provider adapter and never re-derived from strings
/// afterwards. `signature` is unique within a graph.
#[derive(Debug, Clone)]
pub struct MethodNode {
    signature: String,
    declaring_class: String,
    origin: NodeOrigin,
    test_class: bool,
    zero_arg_ctor: bool,
}

impl MethodNode {
    /// `constructor` and `arity` describe the method shape as reported by
    /// the analyzer; together they decide the test-constructor predicate.
    pub fn new(
        signature: impl Into<String>,
        declaring_class: impl Into<String>,
        origin: NodeOrigin,
        constructor: bool,
        arity: usize,
    ) -> Self {
        let declaring_class = declaring_class.into();
        let test_class = declaring_class.contains("Test");
        Self {
            signature: signature.into(),
            declaring_class,
            origin,
            test_class,
            zero_arg_ctor: constructor && arity == 0,
        }
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn declaring_class(&self) -> &str {
        &self.declaring_class
    }

    /// True iff the declaring class name contains `"Test"`.
    pub fn is_test_class(&self) -> bool {
        self.test_class
    }

    pub fn is_platform_internal(&self) -> bool {
        self.origin == NodeOrigin::Platform
    }

    /// Zero-argument constructor of a test class. Left in the graph, these
    /// would implicate every test class that merely gets instantiated.
    pub fn is_test_constructor(&self) -> bool {
        self.test_class && self.zero_arg_ctor
    }

    /// `"<class> <signature>"` — the identifier format shared by
    /// change-info records and selection artifacts.
    pub fn identifier(&self) -> String {
        format!("{} {}", self.declaring_class, self.signature)
    }
}

/// The full node set plus the edge relation, queryable in both directions.
///
/// Parallel edges between the same pair collapse to one.
#[derive(Debug, Default, Clone)]
pub struct CallGraph {
    nodes: HashMap<String, MethodNode>,
    /// caller signature → callee signatures
    forward: HashMap<String, Vec<String>>,
    /// callee signature → caller signatures
    reverse: HashMap<String, Vec<String>>,
}

impl CallGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any previous node with the same signature.
    pub fn add_node(&mut self, node: MethodNode) {
        self.nodes.insert(node.signature.clone(), node);
    }

    /// Record a caller → callee edge. Duplicates collapse silently.
    pub fn add_edge(&mut self, caller: &str, callee: &str) {
        let callees = self.forward.entry(caller.to_string()).or_default();
        if callees.iter().any(|c| c == callee) {
            return;
        }
        callees.push(callee.to_string());
        self.reverse
            .entry(callee.to_string())
            .or_default()
            .push(caller.to_string());
    }

    pub fn node(&self, signature: &str) -> Option<&MethodNode> {
        self.nodes.get(signature)
    }

    pub fn contains(&self, signature: &str) -> bool {
        self.nodes.contains_key(signature)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &MethodNode> {
        self.nodes.values()
    }

    /// Methods that may invoke `signature` (predecessors).
    pub fn callers_of(&self, signature: &str) -> &[String] {
        self.reverse.get(signature).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Methods that `signature` may invoke (successors).
    pub fn callees_of(&self, signature: &str) -> &[String] {
        self.forward.get(signature).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.forward.values().map(Vec::len).sum()
    }

    /// Drop platform-internal methods and zero-argument test-class
    /// constructors, along with every edge touching them.
    ///
    /// Removal is purely local to each doomed node, so the result does not
    /// depend on removal order, and pruning an already-pruned graph is a
    /// no-op.
    pub fn pruned(mut self) -> Self {
        let doomed: HashSet<String> = self
            .nodes
            .values()
            .filter(|n| n.is_platform_internal() || n.is_test_constructor())
            .map(|n| n.signature.clone())
            .collect();
        if doomed.is_empty() {
            return self;
        }

        self.nodes.retain(|sig, _| !doomed.contains(sig));
        self.forward.retain(|sig, _| !doomed.contains(sig));
        self.reverse.retain(|sig, _| !doomed.contains(sig));
        for callees in self.forward.values_mut() {
            callees.retain(|c| !doomed.contains(c));
        }
        for callers in self.reverse.values_mut() {
            callers.retain(|c| !doomed.contains(c));
        }
        self
    }
}
