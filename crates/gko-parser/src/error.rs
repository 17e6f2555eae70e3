//! Parser error types for gko-parser.

/// Errors that can occur while parsing Go source.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {file} at {line}:{column}: unexpected `{snippet}`")]
    ParseFailed {
        file: String,
        line: usize,
        column: usize,
        snippet: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a Go literal could not be unquoted.
///
/// Never surfaced past the description resolver, which falls back to the
/// raw literal text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnquoteError {
    #[error("literal is not enclosed in matching quotes")]
    Unterminated,

    #[error("invalid escape sequence at byte {0}")]
    InvalidEscape(usize),

    #[error("unescaped quote or newline at byte {0}")]
    UnexpectedCharacter(usize),

    #[error("rune literal must contain exactly one character")]
    NotSingleRune,
}
