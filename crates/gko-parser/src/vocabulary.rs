//! The test-declaration vocabulary: which callee names become outline nodes.
//!
//! Matching is exact and case-sensitive on the identifier text. Adding a
//! name to [`VOCABULARY`] is the only change needed to recognize it; the
//! traversal never inspects names itself.

use gko_core::NodeKind;

/// Classification of one recognized identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration {
    pub name: &'static str,
    pub kind: NodeKind,
    pub focused: bool,
    pub pending: bool,
}

const fn plain(name: &'static str, kind: NodeKind) -> Declaration {
    Declaration {
        name,
        kind,
        focused: false,
        pending: false,
    }
}

const fn focused(name: &'static str, kind: NodeKind) -> Declaration {
    Declaration {
        name,
        kind,
        focused: true,
        pending: false,
    }
}

const fn pending(name: &'static str, kind: NodeKind) -> Declaration {
    Declaration {
        name,
        kind,
        focused: false,
        pending: true,
    }
}

use NodeKind::{Container, Hook, Spec};

pub const VOCABULARY: &[Declaration] = &[
    // Specs
    plain("It", Spec),
    plain("Measure", Spec),
    plain("Specify", Spec),
    focused("FIt", Spec),
    focused("FMeasure", Spec),
    focused("FSpecify", Spec),
    pending("PIt", Spec),
    pending("XIt", Spec),
    pending("PMeasure", Spec),
    pending("XMeasure", Spec),
    pending("PSpecify", Spec),
    pending("XSpecify", Spec),
    // Containers
    plain("Context", Container),
    plain("Describe", Container),
    plain("When", Container),
    focused("FContext", Container),
    focused("FDescribe", Container),
    focused("FWhen", Container),
    pending("PContext", Container),
    pending("XContext", Container),
    pending("PDescribe", Container),
    pending("XDescribe", Container),
    pending("PWhen", Container),
    pending("XWhen", Container),
    // Hooks
    plain("By", Hook),
    plain("AfterEach", Hook),
    plain("BeforeEach", Hook),
    plain("JustAfterEach", Hook),
    plain("JustBeforeEach", Hook),
    plain("AfterSuite", Hook),
    plain("BeforeSuite", Hook),
    plain("SynchronizedAfterSuite", Hook),
    plain("SynchronizedBeforeSuite", Hook),
];

/// Look up a callee name. `None` means the call is not a test declaration.
#[must_use]
pub fn classify(name: &str) -> Option<&'static Declaration> {
    VOCABULARY.iter().find(|decl| decl.name == name)
}
