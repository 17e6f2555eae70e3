//! # gko-parser
//!
//! ast-grep-based Go parsing and BDD test outline extraction for gko.
//!
//! Pipeline:
//! - [`parser`] parses Go source with ast-grep and rejects trees with syntax errors
//! - [`extractors::go`] walks the tree and lowers each call expression to a `CallSite`
//! - [`builder::OutlineBuilder`] classifies call sites against the
//!   [`vocabulary`], resolves descriptions via [`text`], and nests the
//!   recognized ones on an explicit ancestor stack
//!
//! ```no_run
//! let outline = gko_parser::extract_outline(
//!     "suite_test.go",
//!     r#"package p
//! var _ = Describe("A", func() { It("a", func() {}) })"#,
//! )
//! .expect("valid Go");
//! println!("{}", outline.to_lines());
//! ```

pub mod builder;
pub mod error;
pub mod extractors;
pub mod parser;
pub mod text;
pub mod vocabulary;

pub use builder::OutlineBuilder;
pub use error::{ParserError, UnquoteError};
pub use text::{UNDEFINED_TEXT, resolve_text, resolve_text_or, unquote};
pub use vocabulary::{Declaration, VOCABULARY, classify};

use std::path::Path;

use gko_core::Outline;

/// Read, parse and extract one Go file from disk.
///
/// Locations are rendered with the path as given.
///
/// # Errors
/// Returns `ParserError::Io` if the file cannot be read and
/// `ParserError::ParseFailed` if it contains syntax errors.
pub fn extract_path(path: impl AsRef<Path>) -> Result<Outline, ParserError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let file = path.display().to_string();
    tracing::debug!(file = %file, bytes = source.len(), "parsing Go source");
    extract_outline(&file, &source)
}

/// Parse one Go file and extract its outline.
///
/// # Errors
/// Returns `ParserError::ParseFailed` if the source contains syntax errors.
pub fn extract_outline(file: &str, source: &str) -> Result<Outline, ParserError> {
    extract_files([(file, source)])
}

/// Parse several Go files of one package and extract a single outline.
///
/// Files are traversed in the order given. Every file is parsed and checked
/// before any traversal starts, so a syntax error yields no partial outline.
///
/// # Errors
/// Returns `ParserError::ParseFailed` for the first file with syntax errors.
pub fn extract_files<'a, I>(files: I) -> Result<Outline, ParserError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut parsed = Vec::new();
    for (file, source) in files {
        let tree = parser::parse_go(source);
        parser::ensure_well_formed(&tree, file)?;
        parsed.push((file, tree));
    }

    let mut builder = OutlineBuilder::new();
    for (file, tree) in &parsed {
        extractors::go::collect(tree, file, &mut builder);
    }
    Ok(builder.finish())
}
