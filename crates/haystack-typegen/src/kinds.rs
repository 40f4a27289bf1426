//! Kind to `haystack-core` type name mapping.

use haystack_defs::Kind;

use crate::{Error, Result};

/// The dict type every generated interface ultimately extends.
pub const BASE_DICT_TYPE: &str = "HDict";

/// The `haystack-core` class holding values of `kind`.
pub fn ctor_name(kind: Kind) -> &'static str {
    match kind {
        Kind::Bool => "HBool",
        Kind::Coord => "HCoord",
        Kind::Date => "HDate",
        Kind::DateTime => "HDateTime",
        Kind::Dict => BASE_DICT_TYPE,
        Kind::Grid => "HGrid",
        Kind::List => "HList",
        Kind::Marker => "HMarker",
        Kind::Na => "HNa",
        Kind::Number => "HNum",
        Kind::Ref => "HRef",
        Kind::Remove => "HRemove",
        Kind::Str => "HStr",
        Kind::Symbol => "HSymbol",
        Kind::Time => "HTime",
        Kind::Uri => "HUri",
        Kind::XStr => "HXStr",
    }
}

/// Map a kind def name (`dateTime`, `str`, ...) to its type name.
pub fn map_kind(kind: &str) -> Result<&'static str> {
    kind.parse::<Kind>()
        .map(ctor_name)
        .map_err(|_| Error::UnsupportedKind(kind.to_string()))
}
