//! The def graph walk that builds a [`Document`].
//!
//! Each seed is resolved depth-first: supertypes are materialized before
//! the def that extends them, so declarations come out in dependency order.
//! The document doubles as the visited set. A def whose declaration is
//! already present is not resolved again.

use std::collections::HashSet;

use haystack_defs::{Def, FEATURE_SEPARATOR, Kind, Taxonomy};
use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::document::namespace_key;
use crate::kinds::ctor_name;
use crate::naming::{feature_namespace, is_reserved_member};
use crate::nodes::{GenericType, InterfaceNode, NamespaceNode, TypeGuardNode, ValueNode};
use crate::{Config, Document, Error, NameCache, Result, TypeGuardPolicy};

/// Library of the foundational defs. Its defs never get type guards.
const CORE_LIB: &str = "lib:ph";

/// One generation run over a taxonomy.
///
/// A generator owns its name cache and document and is consumed by
/// [`Generator::generate`], so independent runs never share state.
pub struct Generator<'a, T: Taxonomy + ?Sized> {
    taxonomy: &'a T,
    config: Config,
    names: NameCache,
    document: Document,
    /// Defs currently being resolved, innermost last
    in_progress: Vec<String>,
}

impl<'a, T: Taxonomy + ?Sized> Generator<'a, T> {
    pub fn new(taxonomy: &'a T, config: Config) -> Self {
        let document = Document::new(&config);
        Self {
            taxonomy,
            config,
            names: NameCache::new(),
            document,
            in_progress: Vec::new(),
        }
    }

    /// Generate the TypeScript text for `seeds`.
    pub fn generate<S: AsRef<str>>(self, seeds: &[S]) -> Result<String> {
        Ok(self.build(seeds)?.render())
    }

    /// Resolve `seeds` into a document without rendering it.
    ///
    /// Every seed is checked before any resolution starts, so an unknown
    /// seed fails the run without partial work.
    pub fn build<S: AsRef<str>>(mut self, seeds: &[S]) -> Result<Document> {
        let seeds = self.order_seeds(seeds);
        debug!(?seeds, "seed order");

        if let Some(missing) = seeds.iter().find(|seed| !self.taxonomy.has(seed)) {
            return Err(Error::UnknownDef(missing.clone()));
        }

        for seed in &seeds {
            self.resolve(seed)?;
        }

        Ok(self.document)
    }

    /// Deduplicated seeds: plain names sorted, then feature names sorted.
    ///
    /// Plain names go first so they claim unsuffixed identifiers before a
    /// feature key (`func:func` → `Func`) can.
    fn order_seeds<S: AsRef<str>>(&self, seeds: &[S]) -> Vec<String> {
        let unique: IndexSet<&str> = seeds.iter().map(|seed| seed.as_ref()).collect();
        let (mut features, mut names): (Vec<&str>, Vec<&str>) = unique
            .into_iter()
            .partition(|name| self.taxonomy.is_feature(name));

        names.sort_unstable();
        features.sort_unstable();

        names
            .into_iter()
            .chain(features)
            .map(str::to_string)
            .collect()
    }

    /// Resolve a def and its supertypes, returning the def's identifier.
    fn resolve(&mut self, name: &str) -> Result<String> {
        let taxonomy = self.taxonomy;
        let def = taxonomy
            .by_name(name)
            .ok_or_else(|| Error::UnknownDef(name.to_string()))?;

        let type_name = self.names.resolve(name)?;
        let key = self.declaration_key(name, &type_name);
        if self.document.contains(&key) {
            return Ok(type_name);
        }
        if self.in_progress.iter().any(|open| open == name) {
            return Err(Error::InheritanceCycle(name.to_string()));
        }

        self.in_progress.push(name.to_string());
        let result = self.add_declarations(def, &type_name);
        self.in_progress.pop();

        result.map(|()| type_name)
    }

    fn declaration_key(&self, name: &str, type_name: &str) -> String {
        if self.taxonomy.is_feature(name) {
            namespace_key(&feature_namespace(name), type_name)
        } else {
            type_name.to_string()
        }
    }

    fn add_declarations(&mut self, def: &'a Def, type_name: &str) -> Result<()> {
        let taxonomy = self.taxonomy;
        let name = def.name();
        debug!(def = name, ident = type_name, "resolving def");

        self.register_lib(def);

        let mut interface = InterfaceNode::new(name, type_name);
        if let Some(doc) = def.doc_text() {
            interface = interface.doc(doc);
        }

        for supertype in taxonomy.super_types_of(name) {
            let supertype_name = self.resolve(supertype.name())?;
            interface.push_extend(supertype_name);
        }

        self.add_members(def, &mut interface)?;

        if taxonomy.is_feature(name) {
            self.add_namespace(name, interface);
            return Ok(());
        }

        self.document.add_interface(interface);
        if self.wants_type_guard(def) {
            self.add_type_guard(name, type_name);
        }
        Ok(())
    }

    fn register_lib(&mut self, def: &Def) {
        let Some(lib) = def.lib_name() else {
            return;
        };
        let Some(lib_def) = self.taxonomy.by_name(lib) else {
            debug!(def = def.name(), lib, "library def not in taxonomy");
            return;
        };

        debug!(lib, "registering library");
        self.document
            .add_lib(lib_def.name(), lib_def.version_text().unwrap_or_default());
    }

    /// The def's own mandatory marker, then every tag declared directly on it.
    fn add_members(&mut self, def: &'a Def, interface: &mut InterfaceNode) -> Result<()> {
        let taxonomy = self.taxonomy;
        let name = def.name();
        let mut seen = HashSet::new();

        if def.is_mandatory() {
            self.add_member(def, false, &mut seen, interface)?;
        }

        for tag in taxonomy.tags(name) {
            let declared_here = taxonomy
                .tag_on(tag.name())
                .iter()
                .any(|target| target.name() == name);

            if declared_here {
                self.add_member(tag, true, &mut seen, interface)?;
            }
        }
        Ok(())
    }

    fn add_member(
        &mut self,
        tag: &'a Def,
        optional: bool,
        seen: &mut HashSet<&'a str>,
        interface: &mut InterfaceNode,
    ) -> Result<()> {
        let name = tag.name();
        if is_reserved_member(name) {
            debug!(tag = name, "tag shadows a dict member, skipped");
            return Ok(());
        }
        if seen.contains(name) {
            return Ok(());
        }
        let Some(kind) = self.taxonomy.def_to_kind(name) else {
            warn!(tag = name, "tag has no kind, skipped");
            return Ok(());
        };
        seen.insert(name);

        let generic = self.generic_of(tag, kind)?;
        let type_name = self.resolve_type(name, kind)?;

        let mut value = ValueNode::new(name, type_name, kind).optional(optional);
        if let Some(doc) = tag.doc_text() {
            value = value.doc(doc);
        }
        if let Some(generic) = generic {
            value = value.generic(generic);
        }
        interface.push_value(value);
        Ok(())
    }

    /// Element type of a list tag, from its `of` def.
    fn generic_of(&mut self, tag: &Def, kind: Kind) -> Result<Option<GenericType>> {
        if !kind.is_collection() {
            return Ok(None);
        }
        let Some(of) = tag.of_name() else {
            return Ok(None);
        };
        let Some(of_kind) = self.taxonomy.def_to_kind(of) else {
            return Ok(None);
        };

        Ok(Some(GenericType {
            type_name: self.resolve_type(of, of_kind)?,
            kind: of_kind,
        }))
    }

    /// Dict-kind defs map to their generated interface, everything else to
    /// the kind's runtime type.
    fn resolve_type(&mut self, name: &str, kind: Kind) -> Result<String> {
        if kind == Kind::Dict && name != Kind::Dict.def_name() {
            return self.names.resolve(name);
        }
        Ok(ctor_name(kind).to_string())
    }

    fn add_namespace(&mut self, name: &str, interface: InterfaceNode) {
        let prefix = name.split(FEATURE_SEPARATOR).next().unwrap_or(name);
        let mut namespace = NamespaceNode::new(feature_namespace(name), interface);

        if let Some(doc) = self.taxonomy.by_name(prefix).and_then(Def::doc_text) {
            namespace = namespace.doc(doc);
        }
        self.document.add_namespace(namespace);
    }

    fn wants_type_guard(&self, def: &Def) -> bool {
        let name = def.name();
        if self.taxonomy.is_conjunct(name) || def.lib_name() == Some(CORE_LIB) {
            return false;
        }

        match self.config.type_guards {
            TypeGuardPolicy::All => true,
            TypeGuardPolicy::Entity => self.taxonomy.fits_entity(name),
        }
    }

    fn add_type_guard(&mut self, name: &str, type_name: &str) {
        let taxonomy = self.taxonomy;
        let subtypes: Vec<&str> = taxonomy
            .all_sub_types_of(name)
            .into_iter()
            .map(Def::name)
            .filter(|sub| !taxonomy.is_conjunct(sub))
            .filter(|sub| !taxonomy.is_feature(sub))
            .collect();

        self.document
            .add_type_guard(TypeGuardNode::new(name, type_name).subtypes(subtypes));
    }
}
