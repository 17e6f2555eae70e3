//! The outline forest and its two output forms.
//!
//! - Nested form: a JSON array of [`SpecNode`] records mirroring child order.
//! - Flattened form: one `name,text,location` line per node, pre-order.
//!
//! The flattened delimiter is not escaped. A description containing a comma
//! produces a line with more than three fields; consumers that need exact
//! field boundaries should read the nested form instead.

use std::fmt;

use schemars::{Schema, schema_for};
use serde::Serialize;

use crate::errors::CoreError;
use crate::node::SpecNode;

/// Field separator of the flattened form.
pub const FLAT_DELIMITER: char = ',';

/// Top-level declarations of one extraction pass.
///
/// The synthetic root that holds these nodes is never emitted; the outline
/// serializes as the bare array of its top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Outline {
    nodes: Vec<SpecNode>,
}

impl Outline {
    #[must_use]
    pub const fn new(nodes: Vec<SpecNode>) -> Self {
        Self { nodes }
    }

    /// Top-level nodes in source order.
    #[must_use]
    pub fn nodes(&self) -> &[SpecNode] {
        &self.nodes
    }

    #[must_use]
    pub fn into_nodes(self) -> Vec<SpecNode> {
        self.nodes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of nodes at every depth.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.iter().map(SpecNode::subtree_len).sum()
    }

    /// Visit every node, pre-order, across all top-level nodes.
    pub fn walk<F: FnMut(&SpecNode)>(&self, mut f: F) {
        for node in &self.nodes {
            node.walk(&mut f);
        }
    }

    /// Nested form as compact JSON.
    ///
    /// # Errors
    /// Returns `CoreError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Nested form as two-space indented JSON.
    ///
    /// # Errors
    /// Returns `CoreError::Serialization` if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Flattened form: newline-terminated `name,text,location` records.
    #[must_use]
    pub fn to_lines(&self) -> String {
        let mut out = String::new();
        self.walk(|node| {
            out.push_str(&node.name);
            out.push(FLAT_DELIMITER);
            out.push_str(node.text_or_empty());
            out.push(FLAT_DELIMITER);
            out.push_str(&node.location);
            out.push('\n');
        });
        out
    }

    /// JSON Schema describing the nested form.
    #[must_use]
    pub fn json_schema() -> Schema {
        schema_for!(Vec<SpecNode>)
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_lines())
    }
}

impl From<Vec<SpecNode>> for Outline {
    fn from(nodes: Vec<SpecNode>) -> Self {
        Self::new(nodes)
    }
}
