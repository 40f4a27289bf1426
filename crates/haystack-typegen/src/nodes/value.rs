use haystack_defs::Kind;

use super::{Node, doc_comment};
use crate::kinds::ctor_name;

/// Element type of a generic value (`HList<HSymbol>`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericType {
    pub type_name: String,
    pub kind: Kind,
}

/// One member line of an interface: `name?: Type<Generic>`.
#[derive(Clone, Debug)]
pub struct ValueNode {
    name: String,
    type_name: String,
    kind: Kind,
    generic: Option<GenericType>,
    doc: Option<String>,
    optional: bool,
}

impl ValueNode {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind,
            generic: None,
            doc: None,
            optional: false,
        }
    }

    pub fn optional(mut self, value: bool) -> Self {
        self.optional = value;
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn generic(mut self, generic: GenericType) -> Self {
        self.generic = Some(generic);
        self
    }

    fn is_documented(&self) -> bool {
        self.doc
            .as_deref()
            .is_some_and(|doc| !doc.trim().is_empty())
    }
}

impl Node for ValueNode {
    fn emit(&self, out: &mut Vec<String>) {
        doc_comment(out, None, self.doc.as_deref());

        let marker = if self.optional { "?" } else { "" };
        let generic = match &self.generic {
            Some(generic) => format!("<{}>", generic.type_name),
            None => String::new(),
        };
        let (name, ty) = (&self.name, &self.type_name);
        out.push(format!("{name}{marker}: {ty}{generic}"));
    }

    fn trailing_blank_lines(&self) -> usize {
        // Documented members are set apart from the next one
        if self.is_documented() { 1 } else { 0 }
    }

    fn referenced_types(&self) -> Vec<String> {
        let mut types = vec![ctor_name(self.kind).to_string()];
        if let Some(generic) = &self.generic {
            types.push(ctor_name(generic.kind).to_string());
        }
        types
    }
}
