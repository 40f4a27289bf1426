//! Def name to TypeScript identifier resolution.

use std::collections::HashMap;

use haystack_defs::utils::capitalize_first;
use haystack_defs::{CONJUNCT_SEPARATOR, FEATURE_SEPARATOR};

use crate::{Error, Result};

/// Appended to an identifier until it no longer clashes with another def.
pub const DISAMBIGUATION_SUFFIX: char = '_';

/// Identifiers that would shadow TypeScript built-ins or `haystack-core`
/// exports. A def resolving to one of these is prefixed with `I`.
const RESERVED_TYPE_NAMES: &[&str] = &[
    // TypeScript / JavaScript globals
    "Array",
    "Boolean",
    "Date",
    "Error",
    "Function",
    "JSON",
    "Map",
    "Math",
    "Number",
    "Object",
    "Promise",
    "Record",
    "RegExp",
    "Set",
    "String",
    "Symbol",
    // haystack-core
    "HBool",
    "HCoord",
    "HDate",
    "HDateTime",
    "HDict",
    "HGrid",
    "HList",
    "HMarker",
    "HNa",
    "HNamespace",
    "HNum",
    "HRef",
    "HRemove",
    "HStr",
    "HSymbol",
    "HTime",
    "HUri",
    "HXStr",
    "Kind",
];

/// Names already taken on `HDict` instances. Tags with these names are not
/// emitted as interface members.
const RESERVED_MEMBER_NAMES: &[&str] = &[
    "all",
    "any",
    "clear",
    "constructor",
    "diff",
    "equals",
    "filter",
    "get",
    "getKind",
    "has",
    "isEmpty",
    "isKind",
    "keys",
    "length",
    "map",
    "matches",
    "newCopy",
    "reduce",
    "remove",
    "set",
    "toAxon",
    "toDict",
    "toFilter",
    "toGrid",
    "toJSON",
    "toList",
    "toObj",
    "toString",
    "toZinc",
    "update",
    "valueOf",
    "values",
];

/// Feature prefixes that cannot be used as a namespace name as-is.
const RESERVED_FEATURE_NAMES: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "valueIsKind",
    "var",
    "void",
    "while",
    "with",
];

/// Whether a tag name collides with a member of the base dict type.
pub fn is_reserved_member(name: &str) -> bool {
    RESERVED_MEMBER_NAMES.contains(&name)
}

/// The namespace a feature def (`filetype:json`) is grouped under.
pub fn feature_namespace(def_name: &str) -> String {
    let prefix = match def_name.split_once(FEATURE_SEPARATOR) {
        Some((prefix, _)) => prefix,
        None => def_name,
    };

    let mut name = prefix.to_string();
    if RESERVED_FEATURE_NAMES.contains(&prefix) {
        name.push(DISAMBIGUATION_SUFFIX);
    }
    name
}

/// The identifier for a def before collision handling.
///
/// - `elec-meter` → `Elec_Meter`
/// - `lib:ph` → `Ph`
/// - `date` → `IDate`
pub fn type_name(def_name: &str) -> Result<String> {
    if def_name.is_empty() {
        return Err(Error::InvalidName);
    }

    let mut name = def_name.to_string();

    if name.contains(CONJUNCT_SEPARATOR) {
        name = name
            .split(CONJUNCT_SEPARATOR)
            .enumerate()
            .map(|(i, part)| {
                if i > 0 {
                    capitalize_first(part)
                } else {
                    part.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("_");
    }

    if let Some((_, key)) = name.split_once(FEATURE_SEPARATOR) {
        name = key.to_string();
    }

    if name.is_empty() {
        return Err(Error::InvalidName);
    }

    let name = capitalize_first(&name);
    if RESERVED_TYPE_NAMES.contains(&name.as_str()) {
        return Ok(format!("I{name}"));
    }
    Ok(name)
}

/// Identifier → def name bindings for one generation run.
///
/// The first def to claim an identifier keeps it; later defs get the
/// disambiguation suffix appended until the identifier is free.
#[derive(Clone, Debug, Default)]
pub struct NameCache {
    bindings: HashMap<String, String>,
}

impl NameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the unique identifier for `def_name`, binding it on first use.
    pub fn resolve(&mut self, def_name: &str) -> Result<String> {
        let mut name = type_name(def_name)?;

        while let Some(bound) = self.bindings.get(&name) {
            if bound == def_name {
                return Ok(name);
            }
            name.push(DISAMBIGUATION_SUFFIX);
        }

        self.bindings.insert(name.clone(), def_name.to_string());
        Ok(name)
    }
}
