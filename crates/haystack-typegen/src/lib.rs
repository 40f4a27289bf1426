//! TypeScript declaration generation for Haystack defs.
//!
//! The pipeline runs in one direction:
//! - `generator` walks the def graph and builds a [`Document`]
//! - `nodes` are the emitter units the document is made of
//! - `compose` linearizes nodes into lines with blank-line spacing
//!
//! Supporting pieces:
//! - `naming` turns def names into unique TypeScript identifiers
//! - `kinds` maps value kinds onto `haystack-core` type names

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compose;
mod config;
mod document;
mod generator;
pub mod kinds;
pub mod naming;
pub mod nodes;

#[cfg(test)]
mod generator_tests;
#[cfg(test)]
pub mod test_utils;

use haystack_defs::Taxonomy;

pub use config::{Config, TypeGuardPolicy};
pub use document::{Declaration, Document};
pub use generator::Generator;
pub use naming::NameCache;

/// Errors that abort a generation run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An empty def name reached the naming resolver.
    #[error("invalid def name: name cannot be empty")]
    InvalidName,

    #[error("could not find def for {0}")]
    UnknownDef(String),

    #[error("unsupported kind: {0}")]
    UnsupportedKind(String),

    /// A def inherits from itself, directly or transitively.
    #[error("inheritance cycle through {0}")]
    InheritanceCycle(String),
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Generate TypeScript declarations for `seeds` and everything they inherit.
pub fn generate<T, S>(taxonomy: &T, seeds: &[S], config: Config) -> Result<String>
where
    T: Taxonomy + ?Sized,
    S: AsRef<str>,
{
    Generator::new(taxonomy, config).generate(seeds)
}
