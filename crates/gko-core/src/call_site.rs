//! Parser-independent description of a single call expression.
//!
//! A parser lowers every call expression it meets into a `CallSite`; the
//! outline builder only ever looks at these records, never at a syntax tree.

use serde::{Deserialize, Serialize};

use crate::Location;

/// One call expression as seen by the outline builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    pub callee: Callee,
    pub location: Location,
    pub args: Vec<Argument>,
}

impl CallSite {
    /// Convenience constructor for a direct identifier call.
    #[must_use]
    pub fn ident(name: impl Into<String>, location: Location, args: Vec<Argument>) -> Self {
        Self {
            callee: Callee::Ident(name.into()),
            location,
            args,
        }
    }
}

/// The expression being called.
///
/// Only `Ident` can ever name a test declaration: calls through a value or a
/// qualified selector (`ginkgo.It`) are matched by surface syntax and
/// therefore never recognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Callee {
    Ident(String),
    Selector(String),
    Other(String),
}

impl Callee {
    /// The identifier name when this is a direct identifier call.
    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Self::Ident(name) => Some(name),
            Self::Selector(_) | Self::Other(_) => None,
        }
    }
}

/// A call argument: either a basic literal or any other expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Argument {
    Literal(Literal),
    Expression,
}

impl Argument {
    #[must_use]
    pub fn literal(kind: LiteralKind, raw: impl Into<String>) -> Self {
        Self::Literal(Literal {
            kind,
            raw: raw.into(),
        })
    }
}

/// A basic literal with its verbatim source text (quotes included).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Literal {
    pub kind: LiteralKind,
    pub raw: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralKind {
    String,
    RawString,
    Char,
    Int,
    Float,
    Imaginary,
}

impl LiteralKind {
    /// Whether the raw text is quoted and needs unquoting to become text.
    #[must_use]
    pub const fn is_quoted(self) -> bool {
        matches!(self, Self::String | Self::RawString | Self::Char)
    }
}
