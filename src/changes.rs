//! Change-info parsing
//!
//! One record per line, `<className> <methodSignature>`, whitespace
//! separated. Tokens beyond the second are tolerated and ignored; blank
//! lines are skipped. Both destinations are sets, so repeated class names
//! across records collapse for free.

use std::collections::HashSet;
use std::path::Path;

use crate::error::RetestError;

/// The changed program elements driving a selection run.
#[derive(Debug, Default, Clone)]
pub struct ChangeSet {
    /// Class names seen in the first column
    pub changed_classes: HashSet<String>,
    /// Method signatures seen in the second column
    pub changed_methods: HashSet<String>,
}

impl ChangeSet {
    /// Read and parse a change-info file.
    pub fn from_path(path: &Path) -> Result<Self, RetestError> {
        let text =
            std::fs::read_to_string(path).map_err(|source| RetestError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&text, path)
    }

    /// Parse change-info text. `path` appears only in error reports.
    ///
    /// A non-empty line with fewer than two tokens aborts the parse: a
    /// dropped record would shrink the selection unsoundly.
    pub fn parse(text: &str, path: &Path) -> Result<Self, RetestError> {
        let mut set = ChangeSet::default();
        for (idx, line) in text.lines().enumerate() {
            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next()) {
                (Some(class), Some(method)) => {
                    set.changed_classes.insert(class.to_string());
                    set.changed_methods.insert(method.to_string());
                }
                (None, _) => continue,
                (Some(_), None) => {
                    return Err(RetestError::MalformedRecord {
                        path: path.to_path_buf(),
                        line: idx + 1,
                        text: line.trim().to_string(),
                    });
                }
            }
        }
        Ok(set)
    }

    pub fn is_empty(&self) -> bool {
        self.changed_methods.is_empty() && self.changed_classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<ChangeSet, RetestError> {
        ChangeSet::parse(text, Path::new("changes.txt"))
    }

    #[test]
    fn test_parse_two_column_records() {
        let set = parse("com.acme.Money com.acme.Money.add(II)I\ncom.acme.Money com.acme.Money.sub(II)I\n")
            .unwrap();
        assert_eq!(set.changed_classes.len(), 1);
        assert_eq!(set.changed_methods.len(), 2);
        assert!(set.changed_classes.contains("com.acme.Money"));
        assert!(set.changed_methods.contains("com.acme.Money.sub(II)I"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let set = parse("\ncom.acme.A com.acme.A.run()V\n\n   \n").unwrap();
        assert_eq!(set.changed_methods.len(), 1);
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let set = parse("com.acme.A com.acme.A.run()V modified 2024-06-01\n").unwrap();
        assert!(set.changed_classes.contains("com.acme.A"));
        assert!(set.changed_methods.contains("com.acme.A.run()V"));
    }

    #[test]
    fn test_single_token_line_is_malformed() {
        let err = parse("com.acme.A com.acme.A.run()V\nOnlyOneToken\n").unwrap_err();
        match err {
            RetestError::MalformedRecord { line, text, .. } => {
                assert_eq!(line, 2);
                assert_eq!(text, "OnlyOneToken");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_is_empty_change_set() {
        let set = parse("").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let err = ChangeSet::from_path(Path::new("/no/such/changes.txt")).unwrap_err();
        assert!(matches!(err, RetestError::SourceUnavailable { .. }));
    }
}
