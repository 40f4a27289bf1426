//! Value kinds of the Haystack type system.
//!
//! Every tag def ultimately resolves to one of these kinds through its
//! inheritance chain. The def symbol naming a kind (e.g. `dateTime`) is the
//! bridge between the taxonomy and this enum.

use std::fmt;
use std::str::FromStr;

use crate::DefsError;

/// The fixed set of Haystack value kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Kind {
    Bool,
    Coord,
    Date,
    DateTime,
    Dict,
    Grid,
    List,
    Marker,
    Na,
    Number,
    Ref,
    Remove,
    Str,
    Symbol,
    Time,
    Uri,
    XStr,
}

impl Kind {
    /// All kinds, in def name order.
    pub const ALL: [Kind; 17] = [
        Kind::Bool,
        Kind::Coord,
        Kind::Date,
        Kind::DateTime,
        Kind::Dict,
        Kind::Grid,
        Kind::List,
        Kind::Marker,
        Kind::Na,
        Kind::Number,
        Kind::Ref,
        Kind::Remove,
        Kind::Str,
        Kind::Symbol,
        Kind::Time,
        Kind::Uri,
        Kind::XStr,
    ];

    /// The def symbol that names this kind in a defs namespace.
    pub fn def_name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Coord => "coord",
            Self::Date => "date",
            Self::DateTime => "dateTime",
            Self::Dict => "dict",
            Self::Grid => "grid",
            Self::List => "list",
            Self::Marker => "marker",
            Self::Na => "na",
            Self::Number => "number",
            Self::Ref => "ref",
            Self::Remove => "remove",
            Self::Str => "str",
            Self::Symbol => "symbol",
            Self::Time => "time",
            Self::Uri => "uri",
            Self::XStr => "xstr",
        }
    }

    /// Look up the kind named by a def symbol.
    pub fn from_def_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.def_name() == name)
    }

    /// Whether values of this kind can carry a generic element type.
    pub fn is_collection(self) -> bool {
        matches!(self, Self::List)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.def_name())
    }
}

impl FromStr for Kind {
    type Err = DefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_def_name(s).ok_or_else(|| DefsError::UnknownKind(s.to_string()))
    }
}
