use super::{Node, ValueNode, doc_comment};
use crate::compose::compose_nested;
use crate::kinds::BASE_DICT_TYPE;

/// An exported interface for one def.
///
/// With no members the interface collapses into a type alias intersecting
/// its supertypes, so marker-only defs still compose through inheritance.
#[derive(Clone, Debug)]
pub struct InterfaceNode {
    def: String,
    name: String,
    doc: Option<String>,
    extends: Vec<String>,
    values: Vec<ValueNode>,
    trailing_blank_lines: usize,
}

impl InterfaceNode {
    pub fn new(def: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            def: def.into(),
            name: name.into(),
            doc: None,
            extends: Vec::new(),
            values: Vec::new(),
            trailing_blank_lines: 1,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn push_extend(&mut self, supertype: impl Into<String>) {
        self.extends.push(supertype.into());
    }

    pub fn push_value(&mut self, value: ValueNode) {
        self.values.push(value);
    }

    /// Emit without a trailing blank line, for use inside a block.
    pub(crate) fn nested(mut self) -> Self {
        self.trailing_blank_lines = 0;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn supertypes(&self, separator: &str) -> String {
        if self.extends.is_empty() {
            BASE_DICT_TYPE.to_string()
        } else {
            self.extends.join(separator)
        }
    }
}

impl Node for InterfaceNode {
    fn emit(&self, out: &mut Vec<String>) {
        doc_comment(out, Some(&self.def), self.doc.as_deref());

        if self.values.is_empty() {
            out.push(format!(
                "export type {} = {}",
                self.name,
                self.supertypes(" & ")
            ));
            return;
        }

        out.push(format!(
            "export interface {} extends {} {{",
            self.name,
            self.supertypes(", ")
        ));
        let values: Vec<&dyn Node> = self.values.iter().map(|v| v as &dyn Node).collect();
        compose_nested(out, &values);
        out.push("}".to_string());
    }

    fn trailing_blank_lines(&self) -> usize {
        self.trailing_blank_lines
    }

    fn referenced_types(&self) -> Vec<String> {
        self.values
            .iter()
            .flat_map(ValueNode::referenced_types)
            .collect()
    }
}
