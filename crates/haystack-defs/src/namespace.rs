//! In-memory defs namespace.

use std::collections::{HashSet, VecDeque};

use indexmap::IndexMap;

use crate::{Def, DefsError, ENTITY, Kind, Taxonomy};

/// Insertion-ordered store of defs answering [`Taxonomy`] queries.
///
/// Queries that return several defs keep store order so generated output is
/// reproducible for a given defs file.
#[derive(Clone, Debug, Default)]
pub struct DefNamespace {
    defs: IndexMap<String, Def>,
}

impl DefNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a namespace from defs. A repeated name replaces the earlier def
    /// in place.
    pub fn from_defs(defs: impl IntoIterator<Item = Def>) -> Self {
        let mut ns = Self::new();
        for def in defs {
            ns.insert(def);
        }
        ns
    }

    /// Load a namespace from JSON defs (Hayson grid or array of dicts).
    pub fn from_json(json: &str) -> Result<Self, DefsError> {
        let defs = crate::json::parse_defs(json)?;
        Ok(Self::from_defs(defs))
    }

    pub fn insert(&mut self, def: Def) {
        let name = def.name().to_string();
        if self.defs.contains_key(&name) {
            tracing::warn!(def = %name, "duplicate def replaced");
        }
        self.defs.insert(name, def);
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Defs in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Def> {
        self.defs.values()
    }

    /// Transitive closure of `is`, starting with `name` itself.
    ///
    /// Breadth-first, so nearer ancestors come first. Unknown supertypes are
    /// kept by name; cycles terminate.
    pub fn inheritance(&self, name: &str) -> Vec<&str> {
        let Some((_, start, _)) = self.defs.get_full(name) else {
            return Vec::new();
        };

        let mut seen: HashSet<&str> = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start.as_str()]);

        while let Some(current) = queue.pop_front() {
            if !seen.insert(current) {
                continue;
            }
            order.push(current);
            if let Some(def) = self.defs.get(current) {
                queue.extend(def.supertypes().iter().map(String::as_str));
            }
        }
        order
    }

    fn resolve_all<'a>(&'a self, names: &'a [String]) -> impl Iterator<Item = &'a Def> {
        names.iter().filter_map(|name| self.defs.get(name))
    }
}

impl Taxonomy for DefNamespace {
    fn has(&self, name: &str) -> bool {
        self.defs.contains_key(name)
    }

    fn by_name(&self, name: &str) -> Option<&Def> {
        self.defs.get(name)
    }

    fn tags(&self, name: &str) -> Vec<&Def> {
        let inheritance: HashSet<&str> = self.inheritance(name).into_iter().collect();
        if inheritance.is_empty() {
            return Vec::new();
        }

        self.defs
            .values()
            .filter(|def| {
                def.tag_on_names()
                    .iter()
                    .any(|target| inheritance.contains(target.as_str()))
            })
            .collect()
    }

    fn tag_on(&self, tag: &str) -> Vec<&Def> {
        match self.defs.get(tag) {
            Some(def) => self.resolve_all(def.tag_on_names()).collect(),
            None => Vec::new(),
        }
    }

    fn super_types_of(&self, name: &str) -> Vec<&Def> {
        match self.defs.get(name) {
            Some(def) => self.resolve_all(def.supertypes()).collect(),
            None => Vec::new(),
        }
    }

    fn all_sub_types_of(&self, name: &str) -> Vec<&Def> {
        if !self.has(name) {
            return Vec::new();
        }

        self.defs
            .values()
            .filter(|def| def.name() != name)
            .filter(|def| self.inheritance(def.name()).contains(&name))
            .collect()
    }

    fn def_to_kind(&self, name: &str) -> Option<Kind> {
        self.inheritance(name)
            .into_iter()
            .find_map(Kind::from_def_name)
    }

    fn fits_entity(&self, name: &str) -> bool {
        self.inheritance(name).contains(&ENTITY)
    }
}
