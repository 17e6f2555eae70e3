//! # gko-core
//!
//! Core types, outline model, and serializers for gko.
//!
//! This crate provides the types shared across all gko crates:
//! - Call-site input records handed over by a parser (`CallSite`, `Argument`, `Location`)
//! - The outline node model (`SpecNode`, `NodeKind`)
//! - The `Outline` forest with its nested (JSON) and flattened (line) forms
//! - Cross-cutting error types

pub mod call_site;
pub mod errors;
pub mod location;
pub mod node;
pub mod outline;

pub use call_site::{Argument, CallSite, Callee, Literal, LiteralKind};
pub use errors::CoreError;
pub use location::Location;
pub use node::{NodeKind, SpecNode};
pub use outline::{FLAT_DELIMITER, Outline};
