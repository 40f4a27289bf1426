use super::{InterfaceNode, Node, doc_comment};
use crate::compose::compose_nested;

/// A `namespace` block grouping a feature def's interface under its
/// feature name (`filetype:json` → `namespace filetype { ... }`).
#[derive(Clone, Debug)]
pub struct NamespaceNode {
    name: String,
    doc: Option<String>,
    interface: InterfaceNode,
}

impl NamespaceNode {
    pub fn new(name: impl Into<String>, interface: InterfaceNode) -> Self {
        Self {
            name: name.into(),
            doc: None,
            interface: interface.nested(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interface(&self) -> &InterfaceNode {
        &self.interface
    }
}

impl Node for NamespaceNode {
    fn emit(&self, out: &mut Vec<String>) {
        doc_comment(out, Some(&self.name), self.doc.as_deref());
        out.push(format!("export namespace {} {{", self.name));
        compose_nested(out, &[&self.interface]);
        out.push("}".to_string());
    }

    fn trailing_blank_lines(&self) -> usize {
        1
    }

    fn referenced_types(&self) -> Vec<String> {
        self.interface.referenced_types()
    }
}
