//! Outline construction on an explicit ancestor stack.
//!
//! A traversal reports every call expression with [`OutlineBuilder::enter`]
//! before visiting its callee and arguments, and calls
//! [`OutlineBuilder::exit`] after the subtree only when `enter` returned
//! `true`. Unrecognized calls push nothing, so declarations nested inside
//! them attach to the nearest recognized ancestor.
//!
//! Open nodes live on the stack and are moved into their parent when they
//! exit. Siblings always exit in source order, so child order equals source
//! order.

use gko_core::{CallSite, NodeKind, Outline, SpecNode};
use tracing::{debug, trace, warn};

use crate::text::{UNDEFINED_TEXT, resolve_text_or};
use crate::vocabulary::classify;

#[derive(Debug, Default)]
pub struct OutlineBuilder {
    /// Closed top-level nodes, children of the synthetic root.
    roots: Vec<SpecNode>,
    /// Open declarations, outermost first.
    stack: Vec<SpecNode>,
}

impl OutlineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open declarations above the synthetic root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Open a node for `call` if it is a recognized declaration.
    ///
    /// Returns whether a node was pushed; only then must the caller
    /// [`exit`](Self::exit) after the call's subtree.
    pub fn enter(&mut self, call: &CallSite) -> bool {
        let Some(name) = call.callee.as_ident() else {
            trace!(location = %call.location, "skipping non-identifier call");
            return false;
        };
        let Some(decl) = classify(name) else {
            trace!(name, location = %call.location, "skipping unrecognized call");
            return false;
        };

        let text = match decl.kind {
            NodeKind::Hook => None,
            NodeKind::Container | NodeKind::Spec => {
                Some(resolve_text_or(&call.args, UNDEFINED_TEXT))
            }
        };
        let inherited = self.stack.last().is_some_and(|parent| parent.pending);

        let node = SpecNode {
            name: name.to_string(),
            location: call.location.to_string(),
            text,
            kind: decl.kind,
            focused: decl.focused,
            pending: decl.pending || inherited,
            nodes: Vec::new(),
        };
        debug!(
            name,
            kind = %node.kind,
            location = %node.location,
            depth = self.stack.len(),
            pending = node.pending,
            "recognized declaration"
        );
        self.stack.push(node);
        true
    }

    /// Close the innermost open node and attach it to its parent.
    pub fn exit(&mut self) {
        let Some(node) = self.stack.pop() else {
            warn!("exit without matching enter");
            return;
        };
        match self.stack.last_mut() {
            Some(parent) => parent.nodes.push(node),
            None => self.roots.push(node),
        }
    }

    /// Close any open nodes and return the finished outline.
    #[must_use]
    pub fn finish(mut self) -> Outline {
        if !self.stack.is_empty() {
            warn!(open = self.stack.len(), "closing unbalanced declarations");
        }
        while !self.stack.is_empty() {
            self.exit();
        }
        Outline::new(self.roots)
    }
}
