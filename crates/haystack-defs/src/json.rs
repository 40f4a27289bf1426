//! JSON deserialization for defs files.
//!
//! Accepts a Hayson grid (`{"_kind": "grid", "rows": [...]}`) or a bare
//! array of def dicts. Symbols may be Hayson objects or plain strings, with
//! an optional Trio-style `^` prefix.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{Def, DefsError};

/// Raw defs document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDefs {
    Rows(Vec<RawDict>),
    Grid { rows: Vec<RawDict> },
}

type RawDict = IndexMap<String, Value>;

pub(crate) fn parse_defs(json: &str) -> Result<Vec<Def>, DefsError> {
    let rows = match serde_json::from_str(json)? {
        RawDefs::Rows(rows) => rows,
        RawDefs::Grid { rows } => rows,
    };

    rows.into_iter()
        .enumerate()
        .map(|(row, dict)| convert_row(row, &dict))
        .collect()
}

fn convert_row(row: usize, dict: &RawDict) -> Result<Def, DefsError> {
    let name = dict
        .get("def")
        .and_then(symbol)
        .ok_or(DefsError::MissingDef { row })?;

    let mut def = Def::new(name)
        .is(symbols(dict.get("is")))
        .tag_on(symbols(dict.get("tagOn")))
        .mandatory(dict.get("mandatory").is_some_and(marker));

    if let Some(of) = dict.get("of").and_then(symbol) {
        def = def.of(of);
    }
    if let Some(doc) = dict.get("doc").and_then(string) {
        def = def.doc(doc);
    }
    if let Some(lib) = dict.get("lib").and_then(symbol) {
        def = def.lib(lib);
    }
    if let Some(version) = dict.get("version").and_then(string) {
        def = def.version(version);
    }
    Ok(def)
}

fn kind_of(obj: &Map<String, Value>) -> Option<&str> {
    obj.get("_kind").and_then(Value::as_str)
}

fn symbol(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.strip_prefix('^').unwrap_or(s).to_string()),
        Value::Object(obj) if kind_of(obj) == Some("symbol") => {
            obj.get("val").and_then(Value::as_str).map(str::to_string)
        }
        _ => None,
    }
}

/// A symbol list; a lone symbol counts as a list of one.
fn symbols(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(symbol).collect(),
        Some(value) => symbol(value).into_iter().collect(),
        None => Vec::new(),
    }
}

fn string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn marker(value: &Value) -> bool {
    match value {
        Value::Bool(set) => *set,
        Value::Object(obj) => kind_of(obj) == Some("marker"),
        _ => false,
    }
}
