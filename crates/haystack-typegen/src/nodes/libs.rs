use indexmap::IndexMap;

use super::{Node, doc_comment, single_quoted};
use crate::compose::INDENT;

/// A library that contributed defs to the generated document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Library {
    pub name: String,
    pub version: String,
}

/// The exported `LIBS` constant listing libraries used for generation.
#[derive(Clone, Debug, Default)]
pub struct LibsNode {
    libs: IndexMap<String, Library>,
}

impl LibsNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a library. The first registration of a name wins.
    pub fn add(&mut self, name: impl Into<String>, version: impl Into<String>) {
        let name = name.into();
        self.libs.entry(name.clone()).or_insert_with(|| Library {
            name,
            version: version.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.libs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libs.is_empty()
    }
}

impl Node for LibsNode {
    fn emit(&self, out: &mut Vec<String>) {
        doc_comment(out, Some("Libraries used for code generation."), None);

        if self.libs.is_empty() {
            out.push("export const LIBS = []".to_string());
            return;
        }

        out.push("export const LIBS = [".to_string());
        for lib in self.libs.values() {
            let name = single_quoted(&lib.name);
            let version = single_quoted(&lib.version);
            out.push(format!("{INDENT}{{"));
            out.push(format!("{INDENT}{INDENT}name: {name},"));
            out.push(format!("{INDENT}{INDENT}version: {version},"));
            out.push(format!("{INDENT}}},"));
        }
        out.push("]".to_string());
    }

    fn trailing_blank_lines(&self) -> usize {
        1
    }
}
