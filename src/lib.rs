//! # retest - Regression Test Selection
//!
//! Pick the subset of a test suite worth re-running after a code change.
//! Given a static call graph and the changed methods/classes, `retest`
//! walks the graph backwards from every changed element and collects the
//! test methods that can observe the change.
//!
//! ## Features
//!
//! - **Two granularities**: method-level and class-level change seeds
//! - **Cycle-safe**: path-local visited set on an explicit walk stack
//! - **Pruning**: platform-internal methods and test-class constructors
//!   are dropped before traversal, so they never pad call chains
//! - **Opaque graph acquisition**: the graph arrives pre-built from the
//!   analyzer's dump; retest never re-derives it
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use retest::{CallGraphProvider, ChangeSet, DumpProvider, SelectionMode};
//!
//! # fn main() -> Result<(), retest::RetestError> {
//! // The analyzer has already dumped callgraph.json into the project dir
//! let graph = DumpProvider::default()
//!     .build_call_graph(Path::new("./target-project"))?
//!     .pruned();
//!
//! let changes = ChangeSet::from_path(Path::new("changes.txt"))?;
//! let selected = retest::selection_for(SelectionMode::Method, &graph, &changes);
//! retest::write_selection(&selected, Path::new("selection-method.txt"))?;
//! # Ok(())
//! # }
//! ```

pub mod changes;
pub mod config;
pub mod dot;
pub mod error;
pub mod graph;
pub mod output;
pub mod provider;
pub mod select;

pub use changes::ChangeSet;
pub use error::RetestError;
pub use graph::{CallGraph, MethodNode, NodeOrigin};
pub use output::write_selection;
pub use provider::{CallGraphProvider, DumpProvider};
pub use select::{affected_tests, selection_for, SelectionMode};
