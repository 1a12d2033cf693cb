//! Error taxonomy for the selection pipeline
//!
//! Every variant is terminal for the run. A regression test selection is
//! only useful if it is complete, so nothing here is retried or degraded
//! into a partial result — the tool reports the error and exits non-zero
//! without writing an artifact.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the selection pipeline.
#[derive(Error, Debug)]
pub enum RetestError {
    /// The change-info file cannot be opened or read.
    #[error("cannot read change info {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A change-info line does not split into `<class> <signature>`.
    ///
    /// Strict by policy: skipping the record would silently shrink the
    /// selection below soundness, which is worse than failing loudly.
    #[error("{}:{line}: malformed change record {text:?} (expected '<class> <signature>')", .path.display())]
    MalformedRecord {
        path: PathBuf,
        /// 1-based line number
        line: usize,
        text: String,
    },

    /// Unsupported selection mode.
    #[error("Wrong command! unknown selection mode {0:?} (expected 'm'/'method' or 'c'/'class')")]
    UnknownCommand(String),

    /// The selection artifact cannot be created or written.
    #[error("cannot write selection to {}: {source}", .path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The call-graph provider failed. The detail string is passed through
    /// uninterpreted; the analyzer's failures are not ours to diagnose.
    #[error("call graph construction failed for {}: {message}", .path.display())]
    GraphConstruction { path: PathBuf, message: String },
}
