//! Backward-reachability test selection
//!
//! If method X changed and Y calls X, directly or through intermediaries,
//! Y's behavior may be affected; every such Y living in a test class must
//! be re-run. The walk follows predecessor edges from each seed with a
//! path-local visited set: a node may be revisited via a different path
//! from the same seed, but never twice on one path, which is what
//! terminates cycles.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::changes::ChangeSet;
use crate::error::RetestError;
use crate::graph::{CallGraph, MethodNode};

/// Selection granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Seed on nodes whose signature is in the changed-method set
    Method,
    /// Seed on every node whose declaring class is in the changed-class set
    Class,
}

impl SelectionMode {
    /// Default artifact written for this mode.
    pub fn artifact_name(self) -> &'static str {
        match self {
            SelectionMode::Method => "selection-method.txt",
            SelectionMode::Class => "selection-class.txt",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SelectionMode::Method => "method",
            SelectionMode::Class => "class",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = RetestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" | "method" => Ok(SelectionMode::Method),
            "c" | "class" => Ok(SelectionMode::Class),
            other => Err(RetestError::UnknownCommand(other.to_string())),
        }
    }
}

/// Select the affected tests for a change set at the given granularity.
///
/// Pure dispatch: the mode picks the seed predicate, nothing else differs
/// between the two granularities.
pub fn selection_for(
    mode: SelectionMode,
    graph: &CallGraph,
    changes: &ChangeSet,
) -> BTreeSet<String> {
    match mode {
        SelectionMode::Method => {
            affected_tests(graph, |n| changes.changed_methods.contains(n.signature()))
        }
        SelectionMode::Class => affected_tests(graph, |n| {
            changes.changed_classes.contains(n.declaring_class())
        }),
    }
}

/// Walk predecessor edges backwards from every node matching `is_seed`,
/// collecting the identifier of every test-class node reached.
///
/// A seed is never added on its own account — only nodes reached by
/// walking away from a seed count, so a test-classified seed shows up only
/// if some caller chain (possibly a cycle back to it) reaches it.
pub fn affected_tests<F>(graph: &CallGraph, is_seed: F) -> BTreeSet<String>
where
    F: Fn(&MethodNode) -> bool,
{
    let mut selected = BTreeSet::new();
    for node in graph.nodes() {
        if is_seed(node) {
            walk_callers(graph, node.signature(), &mut selected);
        }
    }
    selected
}

/// One seed's backward walk.
///
/// Depth-first over `callers_of` with an explicit frame stack instead of
/// host-stack recursion, so deep caller chains cannot exhaust the stack.
/// `on_path` carries the classic backtracking discipline: a caller is
/// inserted when its frame is pushed and removed when that frame pops,
/// making the visited set local to the current path rather than global.
fn walk_callers(graph: &CallGraph, seed: &str, selected: &mut BTreeSet<String>) {
    struct Frame<'g> {
        signature: &'g str,
        callers: std::slice::Iter<'g, String>,
    }

    let mut on_path: HashSet<&str> = HashSet::new();
    let mut stack = vec![Frame {
        signature: seed,
        callers: graph.callers_of(seed).iter(),
    }];

    loop {
        let next = match stack.last_mut() {
            Some(frame) => frame.callers.next(),
            None => break,
        };
        match next {
            Some(caller) => {
                // Already on this path: pick another route instead of cycling
                if on_path.contains(caller.as_str()) {
                    continue;
                }
                if let Some(node) = graph.node(caller) {
                    if node.is_test_class() {
                        selected.insert(node.identifier());
                    }
                }
                on_path.insert(caller.as_str());
                stack.push(Frame {
                    signature: caller.as_str(),
                    callers: graph.callers_of(caller).iter(),
                });
            }
            None => {
                if let Some(done) = stack.pop() {
                    on_path.remove(done.signature);
                }
            }
        }
    }
}
