//! Def records.

/// Separator joining the parts of a conjunct def name (`elec-meter`).
pub const CONJUNCT_SEPARATOR: char = '-';

/// Separator between a feature and its key (`filetype:json`).
pub const FEATURE_SEPARATOR: char = ':';

/// A single entry of a defs namespace.
///
/// Only the tags the code generator consumes are kept. A def is immutable
/// once it has been added to a namespace; the builder methods exist to
/// assemble defs in code and in tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Def {
    name: String,
    is: Vec<String>,
    tag_on: Vec<String>,
    of: Option<String>,
    doc: Option<String>,
    lib: Option<String>,
    version: Option<String>,
    mandatory: bool,
}

impl Def {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the direct supertypes (`is` tag).
    pub fn is<I, S>(mut self, supertypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.is = supertypes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the defs this tag is declared on (`tagOn` tag).
    pub fn tag_on<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_on = targets.into_iter().map(Into::into).collect();
        self
    }

    /// Set the element def of a list tag (`of` tag).
    pub fn of(mut self, element: impl Into<String>) -> Self {
        self.of = Some(element.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Set the owning library symbol (`lib` tag), e.g. `lib:phIoT`.
    pub fn lib(mut self, lib: impl Into<String>) -> Self {
        self.lib = Some(lib.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn mandatory(mut self, value: bool) -> Self {
        self.mandatory = value;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn supertypes(&self) -> &[String] {
        &self.is
    }

    pub fn tag_on_names(&self) -> &[String] {
        &self.tag_on
    }

    pub fn of_name(&self) -> Option<&str> {
        self.of.as_deref()
    }

    pub fn doc_text(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn lib_name(&self) -> Option<&str> {
        self.lib.as_deref()
    }

    pub fn version_text(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }
}

/// Whether `name` is a conjunct (`elec-meter`).
pub fn is_conjunct(name: &str) -> bool {
    name.contains(CONJUNCT_SEPARATOR)
}

/// Whether `name` is a feature key (`filetype:json`).
pub fn is_feature(name: &str) -> bool {
    name.contains(FEATURE_SEPARATOR)
}

/// Split a conjunct into its tag names.
pub fn split_conjunct(name: &str) -> Vec<String> {
    name.split(CONJUNCT_SEPARATOR).map(str::to_string).collect()
}
