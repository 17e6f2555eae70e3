use std::fmt;

use serde::{Deserialize, Serialize};

/// A source position, 1-based in both line and column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: usize,
    pub column: usize,
}

impl Location {
    #[must_use]
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

/// Renders `file:line:col`, or `line:col` when the file name is empty.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file.is_empty() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "{}:{}:{}", self.file, self.line, self.column)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_file() {
        let location = Location::new("suite_test.go", 12, 3);
        assert_eq!(location.to_string(), "suite_test.go:12:3");
    }

    #[test]
    fn display_without_file_is_line_and_column() {
        let location = Location::new("", 4, 9);
        assert_eq!(location.to_string(), "4:9");
    }
}
