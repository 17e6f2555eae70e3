use ast_grep_core::Node;
use gko_core::{Argument, CallSite, Callee, LiteralKind, Location};

// ── call_expression ───────────────────────────────────────────────

/// Lower a `call_expression` node. Position is the start of the callee,
/// with a 1-based byte column as Go's token positions report it.
pub(super) fn call_site<D: ast_grep_core::Doc>(node: &Node<D>, file: &str) -> CallSite {
    let pos = node.start_pos();
    CallSite {
        callee: callee(node),
        location: Location::new(file, pos.line() + 1, pos.byte_point().1 + 1),
        args: arguments(node),
    }
}

/// Classify the `function` field of a call.
///
/// Generic instantiations (`Describe[T](...)`) are not plain identifier
/// calls and land in `Callee::Other`, as do parenthesized callees.
fn callee<D: ast_grep_core::Doc>(node: &Node<D>) -> Callee {
    let Some(function) = node.field("function") else {
        return Callee::Other(String::new());
    };
    let text = function.text().to_string();
    if node.field("type_arguments").is_some() {
        return Callee::Other(text);
    }
    match function.kind().as_ref() {
        "identifier" => Callee::Ident(text),
        "selector_expression" => Callee::Selector(text),
        _ => Callee::Other(text),
    }
}

/// Arguments in order, skipping punctuation and comments.
fn arguments<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<Argument> {
    let Some(list) = node.field("arguments") else {
        return Vec::new();
    };
    list.children()
        .filter(|c| c.is_named() && c.kind().as_ref() != "comment")
        .map(|arg| argument(&arg))
        .collect()
}

fn argument<D: ast_grep_core::Doc>(node: &Node<D>) -> Argument {
    literal_kind(node.kind().as_ref()).map_or(Argument::Expression, |kind| {
        Argument::literal(kind, node.text().to_string())
    })
}

/// Map a tree-sitter-go literal node kind to a basic literal kind.
///
/// `true`, `false`, `nil` and `iota` are identifiers in Go, not literals.
pub(super) fn literal_kind(kind: &str) -> Option<LiteralKind> {
    match kind {
        "interpreted_string_literal" => Some(LiteralKind::String),
        "raw_string_literal" => Some(LiteralKind::RawString),
        "rune_literal" => Some(LiteralKind::Char),
        "int_literal" => Some(LiteralKind::Int),
        "float_literal" => Some(LiteralKind::Float),
        "imaginary_literal" => Some(LiteralKind::Imaginary),
        _ => None,
    }
}
