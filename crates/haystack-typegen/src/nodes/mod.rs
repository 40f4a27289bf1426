//! Emitter nodes.
//!
//! Each node produces zero or more lines and says how many blank lines
//! follow it when composed. Nodes also report the runtime types their
//! output refers to so the document can build one import statement.

mod header;
mod import;
mod interface;
mod libs;
mod namespace;
mod type_guard;
mod value;


pub use header::HeaderNode;
pub use import::ImportNode;
pub use interface::InterfaceNode;
pub use libs::{Library, LibsNode};
pub use namespace::NamespaceNode;
pub use type_guard::TypeGuardNode;
pub use value::{GenericType, ValueNode};

/// The shared emission contract.
pub trait Node {
    /// Append this node's lines to `out`.
    fn emit(&self, out: &mut Vec<String>);

    /// Blank lines after this node's output when composed.
    fn trailing_blank_lines(&self) -> usize;

    /// Runtime types this node's output needs imported.
    fn referenced_types(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Write a `/** ... */` block.
///
/// The title goes on the first line. Free text follows after a bare ` *`
/// separator, one trimmed line each. Nothing is written when both are
/// absent or blank.
pub(crate) fn doc_comment(out: &mut Vec<String>, title: Option<&str>, text: Option<&str>) {
    let text = text.map(str::trim).filter(|text| !text.is_empty());
    if title.is_none() && text.is_none() {
        return;
    }

    out.push("/**".to_string());
    if let Some(title) = title {
        out.push(format!(" * {title}"));
    }
    if let Some(text) = text {
        if title.is_some() {
            out.push(" *".to_string());
        }
        for line in text.lines().map(str::trim) {
            if line.is_empty() {
                out.push(" *".to_string());
            } else {
                out.push(format!(" * {line}"));
            }
        }
    }
    out.push(" */".to_string());
}

/// A single-quoted TypeScript string literal.
pub(crate) fn single_quoted(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}
