//! ast-grep wrapper for Go source and syntax-error detection.

use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

use crate::error::ParserError;

/// The concrete AST tree type returned by `parse_go`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

const SNIPPET_CHARS: usize = 40;

/// Parse Go source code into an ast-grep tree.
///
/// tree-sitter always produces a tree; use [`ensure_well_formed`] to reject
/// sources that only parsed with error recovery.
#[must_use]
pub fn parse_go(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Go.ast_grep(source)
}

/// Fail if the tree contains `ERROR` or missing nodes.
///
/// # Errors
/// Returns `ParserError::ParseFailed` pointing at the first offending node.
pub fn ensure_well_formed<D: ast_grep_core::Doc>(
    root: &ast_grep_core::AstGrep<D>,
    file: &str,
) -> Result<(), ParserError> {
    match first_syntax_error(&root.root()) {
        Some(bad) => {
            let pos = bad.start_pos();
            let snippet: String = bad.text().chars().take(SNIPPET_CHARS).collect();
            Err(ParserError::ParseFailed {
                file: file.to_string(),
                line: pos.line() + 1,
                column: pos.byte_point().1 + 1,
                snippet,
            })
        }
        None => Ok(()),
    }
}

/// Pre-order search on an explicit stack; deep expression chains must not
/// exhaust the call stack.
fn first_syntax_error<'r, D: ast_grep_core::Doc>(root: &Node<'r, D>) -> Option<Node<'r, D>> {
    let mut pending = vec![root.clone()];
    while let Some(node) = pending.pop() {
        if node.kind().as_ref() == "ERROR" || node.is_missing() {
            return Some(node);
        }
        let children: Vec<_> = node.children().collect();
        pending.extend(children.into_iter().rev());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_go_produces_source_file() {
        let tree = parse_go("package p\n");
        assert_eq!(tree.root().kind().as_ref(), "source_file");
    }

    #[test]
    fn well_formed_source_passes() {
        let tree = parse_go("package p\n\nvar _ = Describe(\"A\", func() {})\n");
        assert!(ensure_well_formed(&tree, "ok.go").is_ok());
    }

    #[test]
    fn syntax_error_is_reported_with_position() {
        let tree = parse_go("package p\n\nvar _ = Describe(\"A\", func() {\n");
        let err = ensure_well_formed(&tree, "broken.go").expect_err("should fail");
        match err {
            ParserError::ParseFailed { file, line, .. } => {
                assert_eq!(file, "broken.go");
                assert!(line >= 3, "line: {line}");
            }
            ParserError::Io(other) => panic!("unexpected io error: {other}"),
        }
    }

    #[test]
    fn deep_expression_chain_is_well_formed() {
        let chain = vec!["\"x\""; 20_000].join(" + ");
        let source = format!("package p\n\nvar _ = Describe(\"A\", func() {{\n\t_ = {chain}\n}})\n");
        let tree = parse_go(&source);
        assert!(ensure_well_formed(&tree, "deep.go").is_ok());
    }
}
