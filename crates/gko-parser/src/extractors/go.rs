//! Go front-end: depth-first, source-order walk over every syntax node,
//! driven by an explicit stack rather than recursion.
//!
//! Each `call_expression` is lowered to a `CallSite` and reported to the
//! builder before its callee and arguments are visited, so declarations
//! inside function-literal arguments nest under their caller.

use ast_grep_core::Node;
use ast_grep_language::SupportLang;
use gko_core::{CallSite, Outline};

use crate::builder::OutlineBuilder;

mod helpers;

/// Extract the outline of a single parsed Go file.
#[must_use]
pub fn extract<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &ast_grep_core::AstGrep<D>,
    file: &str,
) -> Outline {
    let mut builder = OutlineBuilder::new();
    collect(root, file, &mut builder);
    builder.finish()
}

/// Feed every call expression of `root` into `builder`.
///
/// Call repeatedly with the same builder to merge several files of one
/// package into a single outline.
pub fn collect<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &ast_grep_core::AstGrep<D>,
    file: &str,
    builder: &mut OutlineBuilder,
) {
    walk(&root.root(), file, builder);
}

/// Every call expression of `root` in traversal order, recognized or not.
#[must_use]
pub fn call_sites<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &ast_grep_core::AstGrep<D>,
    file: &str,
) -> Vec<CallSite> {
    let mut sites = Vec::new();
    gather(&root.root(), file, &mut sites);
    sites
}

/// Pending work of the explicit-stack walk.
enum Step<'r, D: ast_grep_core::Doc> {
    Visit(Node<'r, D>),
    /// Closes the declaration opened by the call whose subtree just ended.
    Exit,
}

fn walk<D: ast_grep_core::Doc>(root: &Node<'_, D>, file: &str, builder: &mut OutlineBuilder) {
    let mut steps = vec![Step::Visit(root.clone())];
    while let Some(step) = steps.pop() {
        let node = match step {
            Step::Visit(node) => node,
            Step::Exit => {
                builder.exit();
                continue;
            }
        };
        if is_call(&node) && builder.enter(&helpers::call_site(&node, file)) {
            steps.push(Step::Exit);
        }
        push_children(&node, &mut steps);
    }
}

fn gather<D: ast_grep_core::Doc>(root: &Node<'_, D>, file: &str, sites: &mut Vec<CallSite>) {
    let mut steps = vec![Step::Visit(root.clone())];
    while let Some(Step::Visit(node)) = steps.pop() {
        if is_call(&node) {
            sites.push(helpers::call_site(&node, file));
        }
        push_children(&node, &mut steps);
    }
}

/// Children go on in reverse so they pop in source order.
fn push_children<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>, steps: &mut Vec<Step<'r, D>>) {
    let children: Vec<_> = node.children().collect();
    steps.extend(children.into_iter().rev().map(Step::Visit));
}

fn is_call<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    node.kind().as_ref() == "call_expression"
}

#[cfg(test)]
mod tests;
