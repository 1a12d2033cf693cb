//! Selection artifact writer
//!
//! One identifier per line, sorted (the set is ordered), overwriting the
//! destination. The write goes through a temp file in the destination
//! directory and an atomic persist, so an interrupted run never leaves a
//! truncated artifact behind.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use crate::error::RetestError;

/// Write the selection to `destination`, replacing any existing file.
///
/// An empty selection produces an empty file — that is a valid outcome,
/// not an error.
pub fn write_selection(selection: &BTreeSet<String>, destination: &Path) -> Result<(), RetestError> {
    let dir = match destination.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| unwritable(destination, e))?;
    for line in selection {
        writeln!(tmp, "{line}").map_err(|e| unwritable(destination, e))?;
    }
    tmp.persist(destination)
        .map_err(|e| unwritable(destination, e.error))?;
    Ok(())
}

fn unwritable(destination: &Path, source: std::io::Error) -> RetestError {
    RetestError::DestinationUnwritable {
        path: destination.to_path_buf(),
        source,
    }
}
