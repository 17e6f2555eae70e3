//! Outline nodes and their classification.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};

// ---------------------------------------------------------------------------
// NodeKind
// ---------------------------------------------------------------------------

/// Category of a recognized test declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Groups other declarations (`Describe`, `Context`, `When`).
    Container,
    /// A single test case (`It`, `Specify`, `Measure`).
    Spec,
    /// Setup or teardown (`BeforeEach`, `AfterSuite`, `By`, ...). Carries no text.
    Hook,
}

impl NodeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Spec => "spec",
            Self::Hook => "hook",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SpecNode
// ---------------------------------------------------------------------------

/// One recognized test declaration and the declarations nested inside it.
///
/// Serializes as the nested record form: `name`, `location`, `text`, `spec`,
/// `focused`, `pending` and, only when non-empty, `nodes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SpecNode {
    /// The matched identifier, verbatim.
    pub name: String,

    /// Rendered call-site position (`file:line:col`).
    pub location: String,

    /// Resolved description. `None` only for hooks, which serialize as `""`.
    #[serde(serialize_with = "serialize_text")]
    #[schemars(with = "String")]
    pub text: Option<String>,

    #[serde(rename = "spec", serialize_with = "serialize_is_spec")]
    #[schemars(with = "bool")]
    pub kind: NodeKind,

    /// Set by the identifier only; ancestors are never un-focused.
    pub focused: bool,

    /// Set by the identifier or inherited from any pending ancestor.
    pub pending: bool,

    /// Children in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<SpecNode>,
}

impl SpecNode {
    #[must_use]
    pub const fn is_spec(&self) -> bool {
        matches!(self.kind, NodeKind::Spec)
    }

    /// Description text, or `""` for hooks.
    #[must_use]
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Visit this node and then every descendant, pre-order.
    pub fn walk<F: FnMut(&Self)>(&self, f: &mut F) {
        f(self);
        for child in &self.nodes {
            child.walk(f);
        }
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.nodes.iter().map(Self::subtree_len).sum::<usize>()
    }
}

#[allow(clippy::ref_option)]
fn serialize_text<S: Serializer>(text: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(text.as_deref().unwrap_or_default())
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_is_spec<S: Serializer>(kind: &NodeKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_bool(matches!(kind, NodeKind::Spec))
}
