use indexmap::IndexSet;

use super::{Node, single_quoted};
use crate::compose::INDENT;

/// One aggregated import of runtime types.
///
/// Types keep first-added order. Nothing is emitted when there are none.
#[derive(Clone, Debug)]
pub struct ImportNode {
    module: String,
    types: IndexSet<String>,
}

impl ImportNode {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            types: IndexSet::new(),
        }
    }

    pub fn add(&mut self, type_name: impl Into<String>) {
        self.types.insert(type_name.into());
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<S: Into<String>> Extend<S> for ImportNode {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for type_name in iter {
            self.add(type_name);
        }
    }
}

impl Node for ImportNode {
    fn emit(&self, out: &mut Vec<String>) {
        if self.types.is_empty() {
            return;
        }

        out.push("import {".to_string());
        if self.types.len() == 1 {
            out.extend(self.types.iter().map(|ty| format!("{INDENT}{ty}")));
        } else {
            out.extend(self.types.iter().map(|ty| format!("{INDENT}{ty},")));
        }
        out.push(format!("}} from {}", single_quoted(&self.module)));
    }

    fn trailing_blank_lines(&self) -> usize {
        1
    }
}
