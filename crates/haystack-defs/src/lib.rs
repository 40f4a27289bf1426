#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Haystack def taxonomy for code generation.
//!
//! Two layers:
//! - **Query layer**: the [`Taxonomy`] trait, the read-only surface a code
//!   generator consumes
//! - **Storage layer**: [`DefNamespace`], an insertion-ordered in-memory
//!   implementation loaded from JSON defs

mod colors;
mod def;
mod json;
mod kind;
mod namespace;
pub mod utils;

#[cfg(test)]
mod namespace_tests;

pub use colors::Colors;
pub use def::{CONJUNCT_SEPARATOR, Def, FEATURE_SEPARATOR};
pub use kind::Kind;
pub use namespace::DefNamespace;

/// Name of the def every addressable entity inherits from.
pub const ENTITY: &str = "entity";

/// Errors raised while building a namespace.
#[derive(Debug, thiserror::Error)]
pub enum DefsError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("row {row} has no def symbol")]
    MissingDef { row: usize },

    #[error("unknown kind: {0}")]
    UnknownKind(String),
}

// ============================================================================
// Taxonomy Trait
// ============================================================================

/// Read-only queries over a defs namespace.
///
/// This is everything the generator needs from a taxonomy. Name-shape
/// predicates have default implementations since they depend only on the
/// def symbol.
pub trait Taxonomy {
    fn has(&self, name: &str) -> bool;
    fn by_name(&self, name: &str) -> Option<&Def>;

    /// Tag defs applicable to `name` (declared on it or on a supertype).
    fn tags(&self, name: &str) -> Vec<&Def>;
    /// Defs the tag is declared on.
    fn tag_on(&self, tag: &str) -> Vec<&Def>;

    fn super_types_of(&self, name: &str) -> Vec<&Def>;
    fn all_sub_types_of(&self, name: &str) -> Vec<&Def>;

    fn def_to_kind(&self, name: &str) -> Option<Kind>;
    fn fits_entity(&self, name: &str) -> bool;

    fn is_feature(&self, name: &str) -> bool {
        def::is_feature(name)
    }

    fn is_conjunct(&self, name: &str) -> bool {
        def::is_conjunct(name)
    }

    fn split_conjunct(&self, name: &str) -> Vec<String> {
        def::split_conjunct(name)
    }
}

impl<T: Taxonomy + ?Sized> Taxonomy for &T {
    fn has(&self, name: &str) -> bool {
        (**self).has(name)
    }
    fn by_name(&self, name: &str) -> Option<&Def> {
        (**self).by_name(name)
    }
    fn tags(&self, name: &str) -> Vec<&Def> {
        (**self).tags(name)
    }
    fn tag_on(&self, tag: &str) -> Vec<&Def> {
        (**self).tag_on(tag)
    }
    fn super_types_of(&self, name: &str) -> Vec<&Def> {
        (**self).super_types_of(name)
    }
    fn all_sub_types_of(&self, name: &str) -> Vec<&Def> {
        (**self).all_sub_types_of(name)
    }
    fn def_to_kind(&self, name: &str) -> Option<Kind> {
        (**self).def_to_kind(name)
    }
    fn fits_entity(&self, name: &str) -> bool {
        (**self).fits_entity(name)
    }
    fn is_feature(&self, name: &str) -> bool {
        (**self).is_feature(name)
    }
    fn is_conjunct(&self, name: &str) -> bool {
        (**self).is_conjunct(name)
    }
    fn split_conjunct(&self, name: &str) -> Vec<String> {
        (**self).split_conjunct(name)
    }
}
