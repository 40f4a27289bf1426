//! Shared fixtures for generation tests.

use haystack_defs::{Def, DefNamespace};

use crate::Config;

/// Date pinned into the header of every test document.
pub const GENERATED_ON: &str = "Mon Oct 19 2026";

/// Config with a fixed header date.
pub fn config() -> Config {
    Config::new().generated_on(GENERATED_ON)
}

/// A slice of the Project Haystack defs: kinds and core entities from
/// `lib:ph`, equipment and points from `lib:phIoT`.
pub fn sample_defs() -> DefNamespace {
    DefNamespace::from_defs([
        Def::new("lib:ph").lib("lib:ph").version("3.9.10"),
        Def::new("lib:phIoT").lib("lib:phIoT").version("3.9.10"),
        Def::new("marker").lib("lib:ph"),
        Def::new("str").lib("lib:ph"),
        Def::new("number").lib("lib:ph"),
        Def::new("ref").lib("lib:ph"),
        Def::new("symbol").lib("lib:ph"),
        Def::new("list").lib("lib:ph"),
        Def::new("dict").lib("lib:ph"),
        Def::new("entity")
            .is(["marker"])
            .lib("lib:ph")
            .doc("Top level entity."),
        Def::new("id").is(["ref"]).tag_on(["entity"]).lib("lib:ph"),
        Def::new("dis")
            .is(["str"])
            .tag_on(["entity"])
            .lib("lib:ph")
            .doc("Display text."),
        Def::new("site")
            .is(["entity"])
            .mandatory(true)
            .lib("lib:phIoT")
            .doc("A site."),
        Def::new("area")
            .is(["number"])
            .tag_on(["site"])
            .lib("lib:phIoT"),
        Def::new("equip")
            .is(["entity"])
            .mandatory(true)
            .lib("lib:phIoT"),
        Def::new("siteRef")
            .is(["ref"])
            .tag_on(["equip"])
            .lib("lib:phIoT"),
        Def::new("meter").is(["equip"]).lib("lib:phIoT"),
        Def::new("elec").is(["marker"]).lib("lib:phIoT"),
        Def::new("elec-meter")
            .is(["elec", "meter"])
            .lib("lib:phIoT"),
        Def::new("ahu")
            .is(["equip"])
            .mandatory(true)
            .lib("lib:phIoT"),
        Def::new("point")
            .is(["entity"])
            .mandatory(true)
            .lib("lib:phIoT"),
        Def::new("markers")
            .is(["list"])
            .of("symbol")
            .tag_on(["point"])
            .lib("lib:phIoT"),
        Def::new("filetype")
            .is(["dict"])
            .lib("lib:ph")
            .doc("File format."),
        Def::new("filetype:json").is(["filetype"]).lib("lib:ph"),
        Def::new("mimeType")
            .is(["str"])
            .tag_on(["filetype"])
            .lib("lib:ph"),
    ])
}
