use haystack_defs::utils::capitalize_first;

use super::{Node, single_quoted};
use crate::compose::INDENT;
use crate::kinds::BASE_DICT_TYPE;

/// Runtime names a type guard body refers to.
const GUARD_TYPES: [&str; 4] = [BASE_DICT_TYPE, "HNamespace", "Kind", "valueIsKind"];

/// Doc comment lines shared by every guard, after the summary line.
const GUARD_DOC: [&str; 5] = [
    " *",
    " * @param value The value to test.",
    " * @param namespace Optional defs namespace used for a structural check.",
    " * @returns true if the value matches.",
    " */",
];

/// A user-defined type guard `is<Def>(value, namespace?)`.
///
/// With a namespace the check is structural. Without one the guard falls
/// back to looking for the def's own tag or any known subtype tag.
#[derive(Clone, Debug)]
pub struct TypeGuardNode {
    def: String,
    name: String,
    subtypes: Vec<String>,
}

impl TypeGuardNode {
    pub fn new(def: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            def: def.into(),
            name: name.into(),
            subtypes: Vec::new(),
        }
    }

    /// Tags of subtypes whose presence also identifies the def.
    pub fn subtypes<I, S>(mut self, subtypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subtypes = subtypes.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn function_name(&self) -> String {
        format!("is{}", capitalize_first(&self.def))
    }

    fn fallback_check(&self) -> String {
        let def = single_quoted(&self.def);
        if self.subtypes.is_empty() {
            return format!("value.has({def})");
        }

        let tags = std::iter::once(def)
            .chain(self.subtypes.iter().map(|tag| single_quoted(tag)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{tags}].some((name) => value.has(name))")
    }
}

impl Node for TypeGuardNode {
    fn emit(&self, out: &mut Vec<String>) {
        out.push("/**".to_string());
        out.push(format!(" * Returns true if the value is a {}.", self.def));
        out.extend(GUARD_DOC.map(str::to_string));
        out.push(format!(
            "export function {}(value: unknown, namespace?: HNamespace): value is {} {{",
            self.function_name(),
            self.name
        ));
        out.push(format!(
            "{INDENT}if (!valueIsKind<{BASE_DICT_TYPE}>(value, Kind.Dict)) {{"
        ));
        out.push(format!("{INDENT}{INDENT}return false"));
        out.push(format!("{INDENT}}}"));
        out.push(String::new());
        out.push(format!("{INDENT}if (namespace) {{"));
        out.push(format!(
            "{INDENT}{INDENT}return namespace.fits(value, {})",
            single_quoted(&self.def)
        ));
        out.push(format!("{INDENT}}}"));
        out.push(String::new());
        out.push(format!("{INDENT}return {}", self.fallback_check()));
        out.push("}".to_string());
    }

    fn trailing_blank_lines(&self) -> usize {
        1
    }

    fn referenced_types(&self) -> Vec<String> {
        GUARD_TYPES.iter().map(|ty| ty.to_string()).collect()
    }
}
