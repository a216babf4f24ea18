//! # godb-core
//!
//! Core types shared across the godb crates.
//!
//! - Entity values produced by the load pipeline (terms, synonyms, edges,
//!   closure pairs)
//! - Namespace and synonym-scope enums with their storage labels
//! - The ontology identifier pattern used to accept term stanzas
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
