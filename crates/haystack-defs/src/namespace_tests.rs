use crate::{Def, DefNamespace, Kind, Taxonomy};

fn sample() -> DefNamespace {
    DefNamespace::from_defs([
        Def::new("marker"),
        Def::new("str"),
        Def::new("number"),
        Def::new("ref"),
        Def::new("entity").is(["marker"]),
        Def::new("equip").is(["entity"]),
        Def::new("meter").is(["equip"]),
        Def::new("elec").is(["marker"]),
        Def::new("elec-meter").is(["meter"]),
        Def::new("ahu").is(["equip"]),
        Def::new("site").is(["entity"]).mandatory(true),
        Def::new("dis").is(["str"]).tag_on(["entity"]),
        Def::new("area").is(["number"]).tag_on(["site"]),
        Def::new("siteRef").is(["ref"]).tag_on(["equip", "point"]),
    ])
}

fn names(defs: Vec<&Def>) -> Vec<&str> {
    defs.into_iter().map(Def::name).collect()
}

#[test]
fn lookups() {
    let ns = sample();
    assert!(ns.has("site"));
    assert!(!ns.has("space"));
    assert_eq!(ns.by_name("site").map(Def::name), Some("site"));
    assert!(ns.by_name("site").unwrap().is_mandatory());
    assert_eq!(ns.len(), 14);
}

#[test]
fn inheritance_is_breadth_first() {
    let ns = sample();
    assert_eq!(
        ns.inheritance("elec-meter"),
        vec!["elec-meter", "meter", "equip", "entity", "marker"]
    );
    assert!(ns.inheritance("missing").is_empty());
}

#[test]
fn inheritance_survives_cycles() {
    let ns = DefNamespace::from_defs([Def::new("a").is(["b"]), Def::new("b").is(["a"])]);
    assert_eq!(ns.inheritance("a"), vec!["a", "b"]);
}

#[test]
fn super_types_skip_unknown() {
    let ns = DefNamespace::from_defs([Def::new("foo").is(["bar", "baz"]), Def::new("baz")]);
    assert_eq!(names(ns.super_types_of("foo")), vec!["baz"]);
}

#[test]
fn sub_types_in_store_order() {
    let ns = sample();
    let subtypes = names(ns.all_sub_types_of("equip"));
    assert_eq!(subtypes, vec!["meter", "elec-meter", "ahu"]);
    assert!(ns.all_sub_types_of("missing").is_empty());
}

#[test]
fn kinds_follow_inheritance() {
    let ns = sample();
    assert_eq!(ns.def_to_kind("site"), Some(Kind::Marker));
    assert_eq!(ns.def_to_kind("dis"), Some(Kind::Str));
    assert_eq!(ns.def_to_kind("area"), Some(Kind::Number));
    assert_eq!(ns.def_to_kind("number"), Some(Kind::Number));
    assert_eq!(ns.def_to_kind("missing"), None);
}

#[test]
fn tags_include_inherited_targets() {
    let ns = sample();
    assert_eq!(names(ns.tags("site")), vec!["dis", "area"]);
    assert_eq!(names(ns.tags("ahu")), vec!["dis", "siteRef"]);
}

#[test]
fn tag_on_resolves_known_targets() {
    let ns = sample();
    assert_eq!(names(ns.tag_on("siteRef")), vec!["equip"]);
}

#[test]
fn entity_fitting() {
    let ns = sample();
    assert!(ns.fits_entity("site"));
    assert!(ns.fits_entity("elec-meter"));
    assert!(!ns.fits_entity("dis"));
    assert!(!ns.fits_entity("elec"));
}

#[test]
fn duplicate_defs_replace_in_place() {
    let ns = DefNamespace::from_defs([
        Def::new("site").doc("first"),
        Def::new("equip"),
        Def::new("site").doc("second"),
    ]);
    let order: Vec<_> = ns.iter().map(Def::name).collect();
    assert_eq!(order, vec!["site", "equip"]);
    assert_eq!(ns.len(), 2);
    assert_eq!(ns.by_name("site").and_then(Def::doc_text), Some("second"));
}

#[test]
fn name_shape_defaults() {
    let ns = sample();
    assert!(ns.is_conjunct("elec-meter"));
    assert!(ns.is_feature("lib:ph"));
    assert_eq!(ns.split_conjunct("elec-meter"), vec!["elec", "meter"]);
}
