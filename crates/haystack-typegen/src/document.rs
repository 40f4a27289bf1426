//! The root of a generated TypeScript document.

use indexmap::IndexMap;

use crate::Config;
use crate::compose::{compose, join_lines, trim_trailing_blank_lines};
use crate::kinds::BASE_DICT_TYPE;
use crate::nodes::{
    HeaderNode, ImportNode, InterfaceNode, LibsNode, NamespaceNode, Node, TypeGuardNode,
};

/// A top-level declaration owned by a [`Document`].
#[derive(Clone, Debug)]
pub enum Declaration {
    Interface(InterfaceNode),
    Namespace(NamespaceNode),
    TypeGuard(TypeGuardNode),
}

impl Declaration {
    /// Key under which the declaration is stored.
    ///
    /// Interfaces use their identifier, namespaces `feature:Identifier` and
    /// type guards `tg-Identifier`, so the variants never overwrite each other.
    pub fn key(&self) -> String {
        match self {
            Self::Interface(node) => node.name().to_string(),
            Self::Namespace(node) => namespace_key(node.name(), node.interface().name()),
            Self::TypeGuard(node) => type_guard_key(node.name()),
        }
    }

    fn as_node(&self) -> &dyn Node {
        match self {
            Self::Interface(node) => node,
            Self::Namespace(node) => node,
            Self::TypeGuard(node) => node,
        }
    }
}

impl Node for Declaration {
    fn emit(&self, out: &mut Vec<String>) {
        self.as_node().emit(out)
    }

    fn trailing_blank_lines(&self) -> usize {
        self.as_node().trailing_blank_lines()
    }

    fn referenced_types(&self) -> Vec<String> {
        self.as_node().referenced_types()
    }
}

pub(crate) fn namespace_key(feature: &str, interface: &str) -> String {
    format!("{feature}:{interface}")
}

fn type_guard_key(name: &str) -> String {
    format!("tg-{name}")
}

/// Header, imports, library list and declarations in insertion order.
#[derive(Clone, Debug)]
pub struct Document {
    header: HeaderNode,
    runtime_module: String,
    libs: LibsNode,
    declarations: IndexMap<String, Declaration>,
}

impl Document {
    pub fn new(config: &Config) -> Self {
        Self {
            header: HeaderNode::new(&config.tool_name, config.timestamp()),
            runtime_module: config.runtime_module.clone(),
            libs: LibsNode::new(),
            declarations: IndexMap::new(),
        }
    }

    pub fn add_interface(&mut self, node: InterfaceNode) {
        self.insert(Declaration::Interface(node));
    }

    pub fn add_namespace(&mut self, node: NamespaceNode) {
        self.insert(Declaration::Namespace(node));
    }

    pub fn add_type_guard(&mut self, node: TypeGuardNode) {
        self.insert(Declaration::TypeGuard(node));
    }

    /// Record a library. Libraries are deduplicated by name.
    pub fn add_lib(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.libs.add(name, version);
    }

    /// A re-added key keeps its original position.
    fn insert(&mut self, declaration: Declaration) {
        self.declarations.insert(declaration.key(), declaration);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.declarations.contains_key(key)
    }

    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.values()
    }

    pub fn libs(&self) -> &LibsNode {
        &self.libs
    }

    /// The import statement covering every declaration.
    pub fn import(&self) -> ImportNode {
        let mut import = ImportNode::new(&self.runtime_module);
        if !self.declarations.is_empty() {
            import.add(BASE_DICT_TYPE);
        }
        for declaration in self.declarations.values() {
            import.extend(declaration.referenced_types());
        }
        import
    }

    /// Render the whole document, terminated by exactly one newline.
    pub fn render(&self) -> String {
        let import = self.import();

        let mut nodes: Vec<&dyn Node> = vec![&self.header as &dyn Node, &import, &self.libs];
        nodes.extend(self.declarations.values().map(|d| d as &dyn Node));

        let mut lines = Vec::new();
        compose(&mut lines, &nodes);
        trim_trailing_blank_lines(&mut lines);
        join_lines(&lines)
    }
}
